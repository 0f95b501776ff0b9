use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tracing::debug;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;

fn build_client(config: &ScraperConfig) -> Result<reqwest::Client, ScrapeError> {
    let mut headers = HeaderMap::new();
    if let Ok(accept) = HeaderValue::from_str(&config.accept) {
        headers.insert(ACCEPT, accept);
    }
    if let Ok(language) = HeaderValue::from_str(&config.accept_language) {
        headers.insert(ACCEPT_LANGUAGE, language);
    }

    Ok(reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .build()?)
}

/// One GET, following redirects. Non-2xx responses become `HttpStatus`.
///
/// The client is built per call and dropped on return, so no connection
/// outlives the request.
pub async fn fetch(config: &ScraperConfig, url: &str) -> Result<String, ScrapeError> {
    let client = build_client(config)?;

    debug!("GET {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        debug!("GET {} -> {}", url, status);
        return Err(ScrapeError::HttpStatus {
            code: status.as_u16(),
        });
    }

    let body = response.text().await?;
    debug!("GET {} -> {} bytes", url, body.len());
    Ok(body)
}
