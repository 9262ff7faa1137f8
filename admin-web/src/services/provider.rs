//! Injected Wallet Provider Bridge via wasm-bindgen
//!
//! All chain traffic goes through the EIP-1193 `window.ethereum` object a
//! wallet extension injects into the page. The interop surface is two
//! functions: an availability probe and one `request(method, params)` call
//! that everything else is built on.

use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use shared::RetryPolicy;

#[wasm_bindgen(inline_js = "
export function hasInjectedProvider() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function providerRequest(method, params) {
    if (!window.ethereum) {
        throw new Error('no injected provider');
    }
    return await window.ethereum.request({ method: method, params: params });
}
")]
extern "C" {
    /// Whether a wallet extension has injected a provider yet.
    pub fn hasInjectedProvider() -> bool;

    /// Raw EIP-1193 request against the injected provider.
    #[wasm_bindgen(catch)]
    pub async fn providerRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

/// EIP-1193 error code for a user-rejected request.
const USER_REJECTED: f64 = 4001.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("no wallet found; install a wallet extension to use this page")]
    NotInstalled,
    #[error("the wallet refused account access; reload the page and allow it")]
    Denied,
    #[error("the wallet exposed no accounts; unlock it and retry")]
    Locked,
    #[error("provider call failed: {0}")]
    Rpc(String),
}

/// Map a rejected `ethereum.request` promise to a typed error.
fn classify_rejection(error: JsValue) -> ProviderError {
    let code = js_sys::Reflect::get(&error, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64());
    if code == Some(USER_REJECTED) {
        return ProviderError::Denied;
    }
    let message = js_sys::Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{error:?}"));
    ProviderError::Rpc(message)
}

/// Issue one JSON-RPC request through the injected provider.
pub async fn request(method: &str, params: Value) -> Result<JsValue, ProviderError> {
    let params =
        serde_wasm_bindgen::to_value(&params).map_err(|e| ProviderError::Rpc(e.to_string()))?;
    providerRequest(method, params)
        .await
        .map_err(classify_rejection)
}

async fn request_accounts() -> Result<Option<String>, ProviderError> {
    let accounts = request("eth_requestAccounts", Value::Array(vec![])).await?;
    let accounts: Vec<String> =
        serde_wasm_bindgen::from_value(accounts).map_err(|e| ProviderError::Rpc(e.to_string()))?;
    Ok(accounts.into_iter().next())
}

async fn sleep_ms(delay: u32) {
    if delay > 0 {
        gloo_timers::future::TimeoutFuture::new(delay).await;
    }
}

/// How one account-request attempt folds against the bounded schedule.
#[derive(Debug, PartialEq)]
enum Binding {
    Bound(String),
    RetryLater,
    GiveUp(ProviderError),
}

/// A refusal, a locked wallet, and a transient RPC failure are all
/// recoverable: each retries until the schedule is exhausted, then settles
/// with the last attempt's error (an empty account list settles as
/// [`ProviderError::Locked`]).
fn resolve_attempt(result: Result<Option<String>, ProviderError>, last: bool) -> Binding {
    match result {
        Ok(Some(address)) => Binding::Bound(address),
        Ok(None) if last => Binding::GiveUp(ProviderError::Locked),
        Ok(None) => Binding::RetryLater,
        Err(error) if last => Binding::GiveUp(error),
        Err(_) => Binding::RetryLater,
    }
}

/// Detect the injected provider and bind to its first account.
///
/// Extensions inject after page scripts start running, so detection retries
/// on a bounded backoff schedule before reporting the terminal
/// [`ProviderError::NotInstalled`]. A locked wallet (no accounts) and a
/// user denial both retry on the `accounts` schedule before settling in
/// their recoverable states.
pub async fn connect(detect: RetryPolicy, accounts: RetryPolicy) -> Result<String, ProviderError> {
    let mut detected = false;
    for attempt in detect.attempts() {
        sleep_ms(detect.delay_ms(attempt)).await;
        if hasInjectedProvider() {
            detected = true;
            break;
        }
        log::debug!("no injected provider yet (attempt {attempt})");
    }
    if !detected {
        return Err(ProviderError::NotInstalled);
    }

    for attempt in accounts.attempts() {
        sleep_ms(accounts.delay_ms(attempt)).await;
        let result = request_accounts().await;
        if let Err(error) = &result {
            log::debug!("account request failed (attempt {attempt}): {error}");
        }
        match resolve_attempt(result, accounts.is_last(attempt)) {
            Binding::Bound(address) => return Ok(address),
            Binding::GiveUp(error) => return Err(error),
            Binding::RetryLater => {}
        }
    }
    Err(ProviderError::Locked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denial_retries_before_settling() {
        assert_eq!(
            resolve_attempt(Err(ProviderError::Denied), false),
            Binding::RetryLater
        );
        assert_eq!(
            resolve_attempt(Err(ProviderError::Denied), true),
            Binding::GiveUp(ProviderError::Denied)
        );
    }

    #[test]
    fn test_empty_accounts_settle_as_locked() {
        assert_eq!(resolve_attempt(Ok(None), false), Binding::RetryLater);
        assert_eq!(
            resolve_attempt(Ok(None), true),
            Binding::GiveUp(ProviderError::Locked)
        );
    }

    #[test]
    fn test_rpc_failure_retries() {
        let error = ProviderError::Rpc("request already pending".to_string());
        assert_eq!(resolve_attempt(Err(error.clone()), false), Binding::RetryLater);
        assert_eq!(resolve_attempt(Err(error.clone()), true), Binding::GiveUp(error));
    }

    #[test]
    fn test_first_account_binds_immediately() {
        assert_eq!(
            resolve_attempt(Ok(Some("0xabc".to_string())), false),
            Binding::Bound("0xabc".to_string())
        );
    }
}
