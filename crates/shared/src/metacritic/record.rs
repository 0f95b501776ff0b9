/// One game as read off a single page. Built fresh per extraction, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameRecord {
    pub title: String,
    pub platform: Option<String>,
    pub critic_score: Option<u8>,
    pub user_score: Option<f32>,
    pub release_label: Option<String>,
    pub genres: Vec<String>,
    pub summary: String,
    pub source_url: Option<String>,
}

impl GameRecord {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}
