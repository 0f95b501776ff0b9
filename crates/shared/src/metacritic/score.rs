// Raw score text -> typed scores. "tbd", "n/a" and blanks are unknown, never zero.

const SENTINELS: &[&str] = &["", "tbd", "n/a"];

fn is_sentinel(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    SENTINELS.contains(&lowered.as_str())
}

/// Critic score on the 0–100 scale. The first run of digits is the score,
/// so "93 / 100" reads as 93.
pub fn parse_critic_score(text: &str) -> Option<u8> {
    if is_sentinel(text) {
        return None;
    }

    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse::<u8>().ok().filter(|score| *score <= 100)
}

/// User score on the 0–10 scale.
pub fn parse_user_score(text: &str) -> Option<f32> {
    if is_sentinel(text) {
        return None;
    }

    let trimmed = text.trim();
    let value = trimmed.parse::<f32>().ok().or_else(|| {
        trimmed
            .split(|c: char| c.is_whitespace() || c == '/')
            .find(|part| !part.is_empty())
            .and_then(|part| part.parse::<f32>().ok())
    })?;

    (value.is_finite() && (0.0..=10.0).contains(&value)).then_some(value)
}

/// Display tier for a critic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    UniversalAcclaim,
    GenerallyFavorable,
    Mixed,
    Unfavorable,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreBand::UniversalAcclaim,
            75..=89 => ScoreBand::GenerallyFavorable,
            50..=74 => ScoreBand::Mixed,
            _ => ScoreBand::Unfavorable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::UniversalAcclaim => "Universal acclaim",
            ScoreBand::GenerallyFavorable => "Generally favorable",
            ScoreBand::Mixed => "Mixed or average",
            ScoreBand::Unfavorable => "Generally unfavorable",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ScoreBand::UniversalAcclaim => "🟢",
            ScoreBand::GenerallyFavorable => "🟡",
            ScoreBand::Mixed => "🟠",
            ScoreBand::Unfavorable => "🔴",
        }
    }
}

/// Emoji for an optional score; unknown scores get a white circle.
pub fn score_emoji(score: Option<u8>) -> &'static str {
    score.map(|s| ScoreBand::from_score(s).emoji()).unwrap_or("⚪")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_unknown() {
        for text in ["", "tbd", "TBD", "n/a", "N/A", "  tbd  "] {
            assert_eq!(parse_critic_score(text), None, "critic {:?}", text);
            assert_eq!(parse_user_score(text), None, "user {:?}", text);
        }
    }

    #[test]
    fn test_critic_score_strips_noise() {
        assert_eq!(parse_critic_score("93 / 100"), Some(93));
        assert_eq!(parse_critic_score("Metascore 88"), Some(88));
        assert_eq!(parse_critic_score(" 100 "), Some(100));
        assert_eq!(parse_critic_score("0"), Some(0));
    }

    #[test]
    fn test_critic_score_invalid_is_unknown() {
        assert_eq!(parse_critic_score("no score yet"), None);
        assert_eq!(parse_critic_score("250"), None);
        assert_eq!(parse_critic_score("99999999999"), None);
    }

    #[test]
    fn test_user_score() {
        assert_eq!(parse_user_score("8.5"), Some(8.5));
        assert_eq!(parse_user_score(" 7 "), Some(7.0));
        assert_eq!(parse_user_score("9.1 / 10"), Some(9.1));
        assert_eq!(parse_user_score("tbd"), None);
        assert_eq!(parse_user_score("great"), None);
        assert_eq!(parse_user_score("85"), None);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(97), ScoreBand::UniversalAcclaim);
        assert_eq!(ScoreBand::from_score(90), ScoreBand::UniversalAcclaim);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::GenerallyFavorable);
        assert_eq!(ScoreBand::from_score(75), ScoreBand::GenerallyFavorable);
        assert_eq!(ScoreBand::from_score(74), ScoreBand::Mixed);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Mixed);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::Unfavorable);
    }

    #[test]
    fn test_score_emoji_unknown() {
        assert_eq!(score_emoji(None), "⚪");
        assert_eq!(score_emoji(Some(95)), "🟢");
    }
}
