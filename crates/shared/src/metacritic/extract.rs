// HTML -> GameRecord.
//
// Every field has an ordered list of selector candidates. The first candidate
// yielding non-empty text wins; running out of candidates leaves the field
// absent. Only a document with no markup at all is an error.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use super::record::GameRecord;
use super::score::{parse_critic_score, parse_user_score};
use crate::error::ScrapeError;

pub const SEARCH_CAP: usize = 10;
pub const TOP_GAMES_CAP: usize = 15;
pub const RECENT_SCAN_CAP: usize = 20;
pub const RECENT_DISPLAY_CAP: usize = 10;
pub const GENRE_CAP: usize = 5;

pub const NO_SUMMARY: &str = "No summary available";

// Search page
const SEARCH_CARD: &[&str] = &["[data-testid='search-result']"];
const SEARCH_TITLE: &[&str] = &["h3", ".c-finderProductCard_title"];
const SEARCH_SCORE: &[&str] = &["[data-testid='score']", ".c-siteReviewScore"];
const SEARCH_PLATFORM: &[&str] = &[".c-finderProductCard_meta", ".c-tagList"];

// Browse listings (top games, new releases)
const BROWSE_CARD: &[&str] = &[".c-finderProductCard", "[data-testid='product-card']"];
const BROWSE_TITLE: &[&str] = &[".c-finderProductCard_title", "h3"];
const BROWSE_SCORE: &[&str] = &[".c-siteReviewScore", "[data-testid='score']"];
const BROWSE_RELEASE: &[&str] = &[".c-finderProductCard_meta span"];
const BROWSE_PLATFORM: &[&str] = &[".c-tagList"];

const CARD_LINK: &[&str] = &["a[href]"];

// Game page
const DETAIL_TITLE: &[&str] = &["h1", ".c-productHero_title"];
const DETAIL_CRITIC: &[&str] = &["[data-testid='critic-score']", ".c-siteReviewScore_medium"];
const DETAIL_USER: &[&str] = &["[data-testid='user-score']", ".c-siteReviewScore_user"];
const DETAIL_SUMMARY: &[&str] = &[
    ".c-productionDetailsGame_description",
    ".c-productDetails_description",
];
const DETAIL_RELEASE: &[&str] = &[".c-gameDetails_ReleaseDate", "[data-testid='release-date']"];
const DETAIL_GENRES: &[&str] = &[".c-genreList a", ".c-gameDetails_Genres a"];

/// Ordered selector candidates for one field.
struct Chain {
    field: &'static str,
    candidates: Vec<(&'static str, Selector)>,
}

impl Chain {
    fn compile(field: &'static str, sources: &'static [&'static str]) -> Result<Self, ScrapeError> {
        let candidates = sources
            .iter()
            .map(|source| {
                Selector::parse(source)
                    .map(|selector| (*source, selector))
                    .map_err(|e| ScrapeError::Parse(format!("bad selector '{}' for {}: {}", source, field, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { field, candidates })
    }

    fn first_text(&self, scope: ElementRef) -> Option<String> {
        for (i, (source, selector)) in self.candidates.iter().enumerate() {
            let found = scope
                .select(selector)
                .map(element_text)
                .find(|text| !text.is_empty());

            if let Some(text) = found {
                if i > 0 {
                    debug!("{}: matched fallback selector '{}'", self.field, source);
                }
                return Some(text);
            }
        }

        trace!("{}: no selector matched", self.field);
        None
    }

    /// Texts of every match of the first candidate that matches anything.
    fn all_texts(&self, scope: ElementRef, limit: usize) -> Vec<String> {
        self.candidates
            .iter()
            .map(|(_, selector)| {
                scope
                    .select(selector)
                    .map(element_text)
                    .filter(|text| !text.is_empty())
                    .take(limit)
                    .collect::<Vec<_>>()
            })
            .find(|texts| !texts.is_empty())
            .unwrap_or_default()
    }

    fn first_attr(&self, scope: ElementRef, attr: &str) -> Option<String> {
        if let Some(value) = scope.value().attr(attr) {
            return Some(value.to_string());
        }

        self.candidates.iter().find_map(|(_, selector)| {
            scope
                .select(selector)
                .find_map(|el| el.value().attr(attr))
                .map(str::to_string)
        })
    }

    fn elements<'a>(&self, document: &'a Html, limit: usize) -> Vec<ElementRef<'a>> {
        self.candidates
            .iter()
            .map(|(_, selector)| document.select(selector).take(limit).collect::<Vec<_>>())
            .find(|cards| !cards.is_empty())
            .unwrap_or_default()
    }
}

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_document(html: &str) -> Result<Html, ScrapeError> {
    if html.trim().is_empty() {
        return Err(ScrapeError::Parse("empty document".to_string()));
    }
    if !html.contains('<') {
        return Err(ScrapeError::Parse("response contains no HTML markup".to_string()));
    }
    Ok(Html::parse_document(html))
}

/// Result cards from a search page, at most [`SEARCH_CAP`]. Cards without a
/// title are skipped.
pub fn extract_search_results(html: &str) -> Result<Vec<GameRecord>, ScrapeError> {
    let document = parse_document(html)?;

    let cards = Chain::compile("search card", SEARCH_CARD)?;
    let title = Chain::compile("title", SEARCH_TITLE)?;
    let score = Chain::compile("score", SEARCH_SCORE)?;
    let platform = Chain::compile("platform", SEARCH_PLATFORM)?;
    let link = Chain::compile("link", CARD_LINK)?;

    let records: Vec<GameRecord> = cards
        .elements(&document, SEARCH_CAP)
        .into_iter()
        .filter_map(|card| {
            let title = title.first_text(card)?;
            Some(GameRecord {
                critic_score: score.first_text(card).as_deref().and_then(parse_critic_score),
                platform: platform.first_text(card),
                source_url: link.first_attr(card, "href"),
                ..GameRecord::titled(title)
            })
        })
        .collect();

    debug!("extracted {} search results", records.len());
    Ok(records)
}

/// A game page. Missing fields fall back to defaults; `fallback_title` is used
/// when the page has no heading.
pub fn extract_detail(html: &str, fallback_title: &str) -> Result<GameRecord, ScrapeError> {
    let document = parse_document(html)?;
    let root = document.root_element();

    let title = Chain::compile("title", DETAIL_TITLE)?;
    let critic = Chain::compile("critic score", DETAIL_CRITIC)?;
    let user = Chain::compile("user score", DETAIL_USER)?;
    let summary = Chain::compile("summary", DETAIL_SUMMARY)?;
    let release = Chain::compile("release date", DETAIL_RELEASE)?;
    let genres = Chain::compile("genres", DETAIL_GENRES)?;

    Ok(GameRecord {
        title: title
            .first_text(root)
            .unwrap_or_else(|| fallback_title.to_string()),
        platform: None,
        critic_score: critic.first_text(root).as_deref().and_then(parse_critic_score),
        user_score: user.first_text(root).as_deref().and_then(parse_user_score),
        release_label: release.first_text(root),
        genres: genres.all_texts(root, GENRE_CAP),
        summary: summary
            .first_text(root)
            .unwrap_or_else(|| NO_SUMMARY.to_string()),
        source_url: None,
    })
}

/// Product cards from a browse listing, at most `cap`.
pub fn extract_browse_results(html: &str, cap: usize) -> Result<Vec<GameRecord>, ScrapeError> {
    let document = parse_document(html)?;

    let cards = Chain::compile("product card", BROWSE_CARD)?;
    let title = Chain::compile("title", BROWSE_TITLE)?;
    let score = Chain::compile("score", BROWSE_SCORE)?;
    let release = Chain::compile("release", BROWSE_RELEASE)?;
    let platform = Chain::compile("platform", BROWSE_PLATFORM)?;
    let link = Chain::compile("link", CARD_LINK)?;

    let records: Vec<GameRecord> = cards
        .elements(&document, cap)
        .into_iter()
        .filter_map(|card| {
            let title = title.first_text(card)?;
            Some(GameRecord {
                critic_score: score.first_text(card).as_deref().and_then(parse_critic_score),
                release_label: release.first_text(card),
                platform: platform.first_text(card),
                source_url: link.first_attr(card, "href"),
                ..GameRecord::titled(title)
            })
        })
        .collect();

    debug!("extracted {} listing cards", records.len());
    Ok(records)
}

/// Keeps scored records at or above `min_score`, in page order, at most `limit`.
pub fn filter_by_min_score(records: Vec<GameRecord>, min_score: i64, limit: usize) -> Vec<GameRecord> {
    records
        .into_iter()
        .filter(|record| matches!(record.critic_score, Some(score) if i64::from(score) >= min_score))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"
        <html><body>
          <div data-testid="search-result">
            <a href="/game/elden-ring/"><h3>Elden Ring</h3></a>
            <div data-testid="score">96</div>
            <div class="c-finderProductCard_meta">PC, PlayStation 5</div>
          </div>
          <div data-testid="search-result">
            <div class="c-finderProductCard_title">Elden Ring: Nightreign</div>
            <div class="c-siteReviewScore">tbd</div>
          </div>
          <div data-testid="search-result">
            <div data-testid="score">80</div>
          </div>
        </body></html>
    "#;

    const DETAIL_PAGE: &str = r#"
        <html><body>
          <div class="c-productHero_title"><h1>Hades II</h1></div>
          <div data-testid="critic-score">95</div>
          <div class="c-siteReviewScore_user">9.1</div>
          <div class="c-productionDetailsGame_description">Battle beyond the Underworld.</div>
          <div data-testid="release-date">Sep 25, 2025</div>
          <ul class="c-genreList">
            <li><a>Action</a></li><li><a>Roguelike</a></li><li><a>RPG</a></li>
            <li><a>Isometric</a></li><li><a>Indie</a></li><li><a>Mythology</a></li>
          </ul>
        </body></html>
    "#;

    fn browse_page(scores: &[&str]) -> String {
        let cards: String = scores
            .iter()
            .enumerate()
            .map(|(i, score)| {
                format!(
                    r#"<div class="c-finderProductCard">
                         <a href="/game/game-{i}/"><div class="c-finderProductCard_title">Game {i}</div></a>
                         <div class="c-siteReviewScore">{score}</div>
                         <div class="c-finderProductCard_meta"><span>Jan {day}, 2025</span></div>
                         <div class="c-tagList">PC</div>
                       </div>"#,
                    i = i,
                    score = score,
                    day = i + 1
                )
            })
            .collect();
        format!("<html><body>{}</body></html>", cards)
    }

    #[test]
    fn test_search_results_tolerate_missing_fields() {
        let records = extract_search_results(SEARCH_PAGE).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Elden Ring");
        assert_eq!(records[0].critic_score, Some(96));
        assert_eq!(records[0].platform.as_deref(), Some("PC, PlayStation 5"));
        assert_eq!(records[0].source_url.as_deref(), Some("/game/elden-ring/"));

        assert_eq!(records[1].title, "Elden Ring: Nightreign");
        assert_eq!(records[1].critic_score, None);
        assert_eq!(records[1].platform, None);
    }

    #[test]
    fn test_search_results_capped() {
        let card = r#"<div data-testid="search-result"><h3>Doom</h3></div>"#;
        let html = format!("<html><body>{}</body></html>", card.repeat(25));

        assert_eq!(extract_search_results(&html).unwrap().len(), SEARCH_CAP);
    }

    #[test]
    fn test_detail_uses_fallback_selectors() {
        let record = extract_detail(DETAIL_PAGE, "hades-ii").unwrap();

        assert_eq!(record.title, "Hades II");
        assert_eq!(record.critic_score, Some(95));
        assert_eq!(record.user_score, Some(9.1));
        assert_eq!(record.summary, "Battle beyond the Underworld.");
        assert_eq!(record.release_label.as_deref(), Some("Sep 25, 2025"));
        assert_eq!(record.genres, vec!["Action", "Roguelike", "RPG", "Isometric", "Indie"]);
    }

    #[test]
    fn test_detail_missing_fields_degrade() {
        let record = extract_detail("<html><body><p>Nothing here</p></body></html>", "Some Game").unwrap();

        assert_eq!(record.title, "Some Game");
        assert_eq!(record.summary, NO_SUMMARY);
        assert_eq!(record.critic_score, None);
        assert_eq!(record.user_score, None);
        assert_eq!(record.release_label, None);
        assert!(record.genres.is_empty());
    }

    #[test]
    fn test_detail_missing_summary_only() {
        let html = r#"<html><body><h1>Celeste</h1><div data-testid="critic-score">92</div></body></html>"#;
        let record = extract_detail(html, "celeste").unwrap();

        assert_eq!(record.title, "Celeste");
        assert_eq!(record.critic_score, Some(92));
        assert_eq!(record.summary, "No summary available");
    }

    #[test]
    fn test_unparseable_documents() {
        assert!(matches!(extract_detail("", "x"), Err(ScrapeError::Parse(_))));
        assert!(matches!(extract_search_results("   \n"), Err(ScrapeError::Parse(_))));
        assert!(matches!(
            extract_browse_results("{\"error\": \"blocked\"}", TOP_GAMES_CAP),
            Err(ScrapeError::Parse(_))
        ));
    }

    #[test]
    fn test_browse_results() {
        let records = extract_browse_results(&browse_page(&["97", "tbd"]), TOP_GAMES_CAP).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Game 0");
        assert_eq!(records[0].critic_score, Some(97));
        assert_eq!(records[0].release_label.as_deref(), Some("Jan 1, 2025"));
        assert_eq!(records[0].platform.as_deref(), Some("PC"));
        assert_eq!(records[1].critic_score, None);
    }

    #[test]
    fn test_browse_alternate_card_markup() {
        let html = r#"<html><body>
            <article data-testid="product-card"><h3>Tetris Effect</h3><span data-testid="score">89</span></article>
        </body></html>"#;
        let records = extract_browse_results(html, TOP_GAMES_CAP).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Tetris Effect");
        assert_eq!(records[0].critic_score, Some(89));
        assert_eq!(records[0].release_label, None);
    }

    #[test]
    fn test_browse_cap() {
        let scores = vec!["80"; 30];
        let records = extract_browse_results(&browse_page(&scores), RECENT_SCAN_CAP).unwrap();
        assert_eq!(records.len(), RECENT_SCAN_CAP);
    }

    #[test]
    fn test_filter_by_min_score() {
        let records = extract_browse_results(&browse_page(&["tbd", "60", "75", "90"]), RECENT_SCAN_CAP).unwrap();
        let kept = filter_by_min_score(records, 70, RECENT_DISPLAY_CAP);

        let scores: Vec<_> = kept.iter().map(|r| r.critic_score).collect();
        assert_eq!(scores, vec![Some(75), Some(90)]);
        assert_eq!(kept[0].title, "Game 2");
        assert_eq!(kept[1].title, "Game 3");
    }

    #[test]
    fn test_filter_by_min_score_caps() {
        let scores = vec!["88"; 20];
        let records = extract_browse_results(&browse_page(&scores), RECENT_SCAN_CAP).unwrap();

        assert_eq!(filter_by_min_score(records, 70, RECENT_DISPLAY_CAP).len(), RECENT_DISPLAY_CAP);
    }
}
