//! Scraping layer for the review aggregator.
//!
//! Call chain per tool: [`urls`] builds the page address, [`fetch`] downloads
//! it, [`extract`] reads records out of the markup (normalising scores through
//! [`score`]) and [`format`] renders the text handed back to the model.

pub mod extract;
pub mod fetch;
pub mod format;
pub mod platform;
pub mod record;
pub mod score;
pub mod urls;

pub use record::GameRecord;
pub use score::{parse_critic_score, parse_user_score, ScoreBand};
pub use urls::{slugify, Urls};
