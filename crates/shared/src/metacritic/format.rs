use super::platform::display_platform;
use super::record::GameRecord;
use super::score::{score_emoji, ScoreBand};

pub const SUMMARY_LIMIT: usize = 500;

const UNKNOWN: &str = "Unknown";

fn score_label(score: Option<u8>) -> String {
    score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "TBD".to_string())
}

/// Char-safe truncation with a trailing "..." when cut.
fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn format_search_results(query: &str, platform_filter: Option<&str>, records: &[GameRecord]) -> String {
    if records.is_empty() {
        return match platform_filter {
            Some(platform) => format!(
                "No games found matching '{}' on {}. Try a different search term or platform.",
                query,
                display_platform(platform)
            ),
            None => format!("No games found matching '{}'. Try a different search term.", query),
        };
    }

    let mut output = format!("🎮 Search Results for '{}'", query);
    if let Some(platform) = platform_filter {
        output.push_str(&format!(" on {}", display_platform(platform)));
    }
    output.push_str(":\n\n");

    for (i, game) in records.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, game.title));
        output.push_str(&format!(
            "   Platform: {}\n",
            game.platform.as_deref().unwrap_or(UNKNOWN)
        ));
        output.push_str(&format!("   Metascore: {}\n", score_label(game.critic_score)));
        if let Some(url) = &game.source_url {
            output.push_str(&format!("   URL: {}\n", url));
        }
        output.push('\n');
    }

    output
}

pub fn format_detail(record: &GameRecord) -> String {
    let mut output = format!("🎮 {}\n", record.title);
    output.push_str(&"=".repeat(50));
    output.push_str("\n\n");

    match record.critic_score {
        Some(score) => {
            let band = ScoreBand::from_score(score);
            output.push_str(&format!(
                "{} Metascore: {}/100 ({})\n",
                band.emoji(),
                score,
                band.label()
            ));
        }
        None => output.push_str("⚪ Metascore: TBD\n"),
    }

    if let Some(user_score) = record.user_score {
        output.push_str(&format!("👥 User Score: {:.1}/10\n", user_score));
    }

    if let Some(platform) = &record.platform {
        output.push_str(&format!("🕹️ Platform: {}\n", platform));
    }

    output.push_str(&format!(
        "📅 Release Date: {}\n",
        record.release_label.as_deref().unwrap_or(UNKNOWN)
    ));

    if !record.genres.is_empty() {
        output.push_str(&format!("🏷️ Genres: {}\n", record.genres.join(", ")));
    }

    output.push_str(&format!(
        "\n📝 Summary:\n{}\n",
        truncate(&record.summary, SUMMARY_LIMIT)
    ));

    if let Some(url) = &record.source_url {
        output.push_str(&format!("\n🔗 URL: {}", url));
    }

    output
}

/// Ranked listing. Ranks follow page order; unscored entries keep their rank
/// but are not printed.
pub fn format_top_games(platform: &str, period: &str, records: &[GameRecord]) -> String {
    if records.is_empty() {
        return format!(
            "No top games found for {}. The platform might not be available.",
            platform
        );
    }

    let mut output = format!("🏆 Top Games for {}", display_platform(platform));
    if !period.trim().eq_ignore_ascii_case("all-time") {
        output.push_str(&format!(" ({})", period));
    }
    output.push_str(":\n\n");

    for (i, game) in records.iter().enumerate() {
        let Some(score) = game.critic_score else {
            continue;
        };

        let rank = i + 1;
        let medal = match rank {
            1 => "🥇".to_string(),
            2 => "🥈".to_string(),
            3 => "🥉".to_string(),
            _ => format!("{}.", rank),
        };

        output.push_str(&format!("{} {}\n", medal, game.title));
        output.push_str(&format!(
            "    {} Metascore: {} | Released: {}\n\n",
            score_emoji(Some(score)),
            score,
            game.release_label.as_deref().unwrap_or(UNKNOWN)
        ));
    }

    output
}

/// `records` must already be filtered and capped.
pub fn format_recent_releases(platform: &str, min_score: i64, records: &[GameRecord]) -> String {
    if records.is_empty() {
        return format!(
            "No recent releases found with Metascore >= {}. Try lowering the threshold.",
            min_score
        );
    }

    let mut output = format!("🆕 Recent Releases (Metascore ≥ {}):\n\n", min_score);

    for (i, game) in records.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, game.title));
        output.push_str(&format!(
            "   {} Metascore: {} | {}\n",
            score_emoji(game.critic_score),
            score_label(game.critic_score),
            game.release_label.as_deref().unwrap_or("Recent")
        ));
        output.push_str(&format!(
            "   Platform: {}\n\n",
            game.platform.as_deref().unwrap_or(platform)
        ));
    }

    output
}
