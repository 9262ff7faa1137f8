//! External price ticker.
//!
//! One best-effort quote fetch at page load, display only. Failures are
//! logged and leave the quote blank; there is no retry and no caching.

use gloo_net::http::Request;
use thiserror::Error;

use shared::TickerEntry;

#[derive(Debug, Error)]
pub enum TickerError {
    #[error("ticker fetch failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("ticker returned status {0}")]
    Status(u16),
    #[error("ticker response was empty")]
    Empty,
    #[error("ticker quote '{0}' is not a number")]
    BadQuote(String),
}

/// Fetch the USD quote from the ticker endpoint.
pub async fn fetch_usd_quote(endpoint: &str) -> Result<f64, TickerError> {
    let url = format!("{}?t={}", endpoint, js_sys::Date::now() as u64);
    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(TickerError::Status(response.status()));
    }
    let entries: Vec<TickerEntry> = response.json().await?;
    let entry = entries.into_iter().next().ok_or(TickerError::Empty)?;
    entry
        .price_usd
        .parse()
        .map_err(|_| TickerError::BadQuote(entry.price_usd.clone()))
}
