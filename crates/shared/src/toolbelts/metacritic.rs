// crates/shared/src/toolbelts/metacritic.rs
use anyhow::Result;
use tracing::{info, warn};

use crate::config::{self, ScraperConfig};
use crate::error::ScrapeError;
use crate::metacritic::extract::{
    extract_browse_results, extract_detail, extract_search_results, filter_by_min_score,
    RECENT_DISPLAY_CAP, RECENT_SCAN_CAP, TOP_GAMES_CAP,
};
use crate::metacritic::fetch::fetch;
use crate::metacritic::format::{
    format_detail, format_recent_releases, format_search_results, format_top_games,
};
use crate::metacritic::platform::{display_platform, is_all, label_matches};
use crate::metacritic::Urls;
use crate::register_toolbelt;
use crate::runtime::block_on;
use crate::schemas::{int_arg, str_arg};

pub struct Metacritic {
    config: ScraperConfig,
}

impl Default for Metacritic {
    fn default() -> Self {
        Self::new(config::current())
    }
}

register_toolbelt! {
    Metacritic {
        description: "Look up video games, scores and rankings on Metacritic",
        tools: {
            "search_games" => search_games {
                description: "Search for games on Metacritic by name. Returns titles, platforms, Metascores and links.",
                params: [
                    "query": "string" => "The game title or keywords to search for"
                ],
                optional: [
                    "platform": "string" => "Filter by platform: pc, ps5, ps4, xbox-series-x, xbox-one, switch, or 'all' (default: all)"
                ]
            },
            "get_game_details" => get_game_details {
                description: "Get detailed information about a specific game: Metascore, user score, release date, genres and summary.",
                params: [
                    "game_title": "string" => "The title of the game, e.g. 'The Witcher 3: Wild Hunt' or 'the-witcher-3-wild-hunt'"
                ],
                optional: [
                    "platform": "string" => "The platform: pc, ps5, ps4, xbox-series-x, xbox-one, switch (default: pc)"
                ]
            },
            "get_top_games_by_platform" => get_top_games_by_platform {
                description: "Get the top-rated games for a platform, optionally limited to one release year.",
                params: [],
                optional: [
                    "platform": "string" => "The gaming platform: pc, ps5, ps4, xbox-series-x, xbox-one, switch (default: pc)",
                    "time_period": "string" => "'all-time' or a four-digit release year such as '2023' (default: all-time)"
                ]
            },
            "get_recent_releases" => get_recent_releases {
                description: "Get recently released games whose Metascore meets a threshold.",
                params: [],
                optional: [
                    "platform": "string" => "Filter by platform: pc, ps5, ps4, xbox-series-x, switch, or 'all' (default: all)",
                    "min_score": "integer" => "Minimum Metascore to include (default: 70)"
                ]
            }
        }
    }
}

impl Metacritic {
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    fn urls(&self) -> Urls {
        Urls::new(self.config.base_url())
    }

    fn search_games(&self, args: &serde_json::Value) -> Result<String> {
        let query = str_arg(args, "query", "").trim();
        if query.is_empty() {
            return Ok("Error: query cannot be empty".to_string());
        }
        let platform = str_arg(args, "platform", "all");

        block_on(self.search(query, platform))
    }

    fn get_game_details(&self, args: &serde_json::Value) -> Result<String> {
        let title = str_arg(args, "game_title", "").trim();
        if title.is_empty() {
            return Ok("Error: game_title cannot be empty".to_string());
        }
        let platform = str_arg(args, "platform", "pc");

        block_on(self.details(title, platform))
    }

    fn get_top_games_by_platform(&self, args: &serde_json::Value) -> Result<String> {
        let platform = str_arg(args, "platform", "pc");
        let period = str_arg(args, "time_period", "all-time");

        block_on(self.top_games(platform, period))
    }

    fn get_recent_releases(&self, args: &serde_json::Value) -> Result<String> {
        let platform = str_arg(args, "platform", "all");
        let min_score = int_arg(args, "min_score", 70);

        block_on(self.recent_releases(platform, min_score))
    }

    pub async fn search(&self, query: &str, platform: &str) -> String {
        let urls = self.urls();
        let url = urls.search(query);

        let result = fetch(&self.config, &url)
            .await
            .and_then(|html| search_report(&urls, &html, query, platform));

        result.unwrap_or_else(|e| {
            warn!("search_games('{}') failed: {}", query, e);
            if e.is_fetch_failure() {
                format!("Error searching for games: {}. Please try again.", e)
            } else {
                format!("Unexpected error during search: {}", e)
            }
        })
    }

    pub async fn details(&self, title: &str, platform: &str) -> String {
        let url = self.urls().detail(title);

        let result = fetch(&self.config, &url)
            .await
            .and_then(|html| detail_report(&html, title, platform, &url));

        result.unwrap_or_else(|e| {
            warn!("get_game_details('{}') failed: {}", title, e);
            match e {
                e if e.is_not_found() => format!(
                    "Game '{}' not found on Metacritic. Try searching first with search_games.",
                    title
                ),
                ScrapeError::HttpStatus { code } => {
                    format!("Error fetching game details: HTTP {}", code)
                }
                e => format!("Error getting game details: {}", e),
            }
        })
    }

    pub async fn top_games(&self, platform: &str, period: &str) -> String {
        let url = self.urls().platform_browse(platform, period);

        let result = fetch(&self.config, &url)
            .await
            .and_then(|html| top_games_report(&html, platform, period));

        result.unwrap_or_else(|e| {
            warn!("get_top_games_by_platform('{}', '{}') failed: {}", platform, period, e);
            format!("Error fetching top games: {}", e)
        })
    }

    pub async fn recent_releases(&self, platform: &str, min_score: i64) -> String {
        let url = self.urls().recent_releases(platform);

        let result = fetch(&self.config, &url)
            .await
            .and_then(|html| recent_releases_report(&html, platform, min_score));

        result.unwrap_or_else(|e| {
            warn!("get_recent_releases('{}', {}) failed: {}", platform, min_score, e);
            format!("Error fetching recent releases: {}", e)
        })
    }
}

fn search_report(urls: &Urls, html: &str, query: &str, platform: &str) -> Result<String, ScrapeError> {
    let mut records = extract_search_results(html)?;

    for record in &mut records {
        record.source_url = record.source_url.as_deref().map(|href| urls.absolute(href));
    }

    let filter = (!is_all(platform)).then_some(platform);
    if let Some(platform) = filter {
        records.retain(|record| {
            record
                .platform
                .as_deref()
                .is_some_and(|label| label_matches(label, platform))
        });
    }

    info!("search_games('{}'): {} results", query, records.len());
    Ok(format_search_results(query, filter, &records))
}

fn detail_report(html: &str, title: &str, platform: &str, url: &str) -> Result<String, ScrapeError> {
    let mut record = extract_detail(html, title)?;
    record.platform = Some(display_platform(platform));
    record.source_url = Some(url.to_string());

    info!("get_game_details('{}'): found '{}'", title, record.title);
    Ok(format_detail(&record))
}

fn top_games_report(html: &str, platform: &str, period: &str) -> Result<String, ScrapeError> {
    let records = extract_browse_results(html, TOP_GAMES_CAP)?;

    info!("get_top_games_by_platform('{}', '{}'): {} cards", platform, period, records.len());
    Ok(format_top_games(platform, period, &records))
}

fn recent_releases_report(html: &str, platform: &str, min_score: i64) -> Result<String, ScrapeError> {
    let scanned = extract_browse_results(html, RECENT_SCAN_CAP)?;
    let scanned_count = scanned.len();
    let records = filter_by_min_score(scanned, min_score, RECENT_DISPLAY_CAP);

    info!(
        "get_recent_releases('{}', {}): {} of {} cards qualify",
        platform,
        min_score,
        records.len(),
        scanned_count
    );
    Ok(format_recent_releases(platform, min_score, &records))
}
