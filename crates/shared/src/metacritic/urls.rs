use super::platform::{canonical_platform, is_all};

/// Earliest release year the aggregator lists.
pub const FIRST_RELEASE_YEAR: u16 = 1958;
/// Upper bound of the "all-time" range.
pub const LATEST_RELEASE_YEAR: u16 = 2026;

/// Title -> URL path slug. Idempotent on already-slugged input.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.trim().to_lowercase().chars() {
        match c {
            ':' | '\'' | '’' => {}
            c if c.is_ascii_alphanumeric() => slug.push(c),
            c if c == '-' || c.is_whitespace() => {
                if !slug.is_empty() && !slug.ends_with('-') {
                    slug.push('-');
                }
            }
            _ => {}
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// A four-digit release year inside the listed range.
fn year_filter(period: &str) -> Option<u16> {
    let period = period.trim();
    if period.len() != 4 || !period.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    period
        .parse::<u16>()
        .ok()
        .filter(|year| (FIRST_RELEASE_YEAR..=LATEST_RELEASE_YEAR).contains(year))
}

/// Builds aggregator URLs against a configurable base.
#[derive(Debug, Clone)]
pub struct Urls {
    base: String,
}

impl Urls {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn search(&self, query: &str) -> String {
        format!(
            "{}/search/{}/?page=1&category=13",
            self.base,
            urlencoding::encode(query.trim())
        )
    }

    /// Game pages live at one path per title; the platform only labels the report.
    pub fn detail(&self, title: &str) -> String {
        format!("{}/game/{}/", self.base, slugify(title))
    }

    pub fn platform_browse(&self, platform: &str, period: &str) -> String {
        let platform = canonical_platform(platform);
        let listing = format!("{}/browse/game/{}/all/all-time/metascore/", self.base, platform);

        if period.trim().eq_ignore_ascii_case("all-time") {
            format!(
                "{}?releaseYearMin={}&releaseYearMax={}&page=1",
                listing, FIRST_RELEASE_YEAR, LATEST_RELEASE_YEAR
            )
        } else if let Some(year) = year_filter(period) {
            format!("{}?releaseYearMin={}&releaseYearMax={}&page=1", listing, year, year)
        } else {
            format!("{}?page=1", listing)
        }
    }

    pub fn recent_releases(&self, platform: &str) -> String {
        let segment = if is_all(platform) {
            "all".to_string()
        } else {
            canonical_platform(platform)
        };
        format!("{}/browse/game/{}/all/new-releases/metascore/?page=1", self.base, segment)
    }

    /// Makes a card's href absolute.
    pub fn absolute(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{}{}", self.base, href)
        } else {
            format!("{}/{}", self.base, href)
        }
    }
}
