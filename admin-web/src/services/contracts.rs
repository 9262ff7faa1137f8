//! Contract descriptor loading.
//!
//! Descriptors are static build artifacts served next to the page; they are
//! fetched once per session, cache-busted with a timestamp query parameter.

use gloo_net::http::Request;
use thiserror::Error;

use shared::ContractDescriptor;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("descriptor fetch failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("descriptor fetch returned status {0}")]
    Status(u16),
}

/// Fetch and parse one contract descriptor from a static path.
pub async fn load_descriptor(path: &str) -> Result<ContractDescriptor, LoadError> {
    let url = format!("{}?t={}", path, js_sys::Date::now() as u64);
    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    let descriptor: ContractDescriptor = response.json().await?;
    log::info!("loaded descriptor for {}", descriptor.contract_name);
    Ok(descriptor)
}
