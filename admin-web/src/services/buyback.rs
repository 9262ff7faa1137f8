//! Deploy and inspect operations against the buyback contract.
//!
//! Thin typed wrappers over [`provider::request`]: one contract-creation
//! transaction, receipt polling, and the three read-only queries the
//! inspect flow needs.

use serde_json::json;
use thiserror::Error;

use shared::abi::{self, AbiError};
use shared::units::{self, UnitsError};
use shared::{ContractDescriptor, RetryPolicy, TransactionReceipt};

use super::provider::{self, ProviderError};

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Abi(#[from] AbiError),
    #[error(transparent)]
    Units(#[from] UnitsError),
    #[error("the provider returned an unexpected response")]
    BadResponse,
    #[error("timed out waiting for the deployment receipt")]
    ReceiptTimeout,
    #[error("the transaction reverted on-chain")]
    Reverted,
}

/// Submit the contract-creation transaction for the buyback contract with
/// `token` as the sole constructor argument. Resolves with the transaction
/// hash once the wallet has signed and broadcast it.
pub async fn submit_deploy(
    from: &str,
    descriptor: &ContractDescriptor,
    token: &str,
) -> Result<String, FlowError> {
    let data = abi::constructor_data(&descriptor.bytecode, token)?;
    log::info!(
        "publishing {} with arguments [{token}]",
        descriptor.contract_name
    );
    let result = provider::request("eth_sendTransaction", json!([{ "from": from, "data": data }]))
        .await?;
    result.as_string().ok_or(FlowError::BadResponse)
}

/// Poll for the transaction receipt on a bounded schedule.
pub async fn await_receipt(
    tx_hash: &str,
    policy: RetryPolicy,
) -> Result<TransactionReceipt, FlowError> {
    for attempt in policy.attempts() {
        let delay = policy.delay_ms(attempt);
        if delay > 0 {
            gloo_timers::future::TimeoutFuture::new(delay).await;
        }
        let result = provider::request("eth_getTransactionReceipt", json!([tx_hash])).await?;
        if result.is_null() || result.is_undefined() {
            continue;
        }
        let receipt: TransactionReceipt =
            serde_wasm_bindgen::from_value(result).map_err(|_| FlowError::BadResponse)?;
        if !receipt.succeeded() {
            return Err(FlowError::Reverted);
        }
        return Ok(receipt);
    }
    Err(FlowError::ReceiptTimeout)
}

async fn eth_call(to: &str, data: String) -> Result<String, FlowError> {
    let result = provider::request("eth_call", json!([{ "to": to, "data": data }, "latest"])).await?;
    result.as_string().ok_or(FlowError::BadResponse)
}

/// Read the token address the buyback contract is linked to.
pub async fn linked_token(buyback: &str) -> Result<String, FlowError> {
    let word = eth_call(buyback, abi::token_call_data()).await?;
    Ok(abi::decode_address_word(&word)?)
}

/// Read the buyback contract's balance of its linked token, in base units.
pub async fn token_balance(token: &str, holder: &str) -> Result<u128, FlowError> {
    let word = eth_call(token, abi::balance_of_call_data(holder)?).await?;
    let quantity = abi::decode_quantity_word(&word)?;
    Ok(units::parse_quantity(&quantity)?)
}

/// Read an account's native-currency balance, in base units.
pub async fn native_balance(address: &str) -> Result<u128, FlowError> {
    let result = provider::request("eth_getBalance", json!([address, "latest"])).await?;
    let quantity = result.as_string().ok_or(FlowError::BadResponse)?;
    Ok(units::parse_quantity(&quantity)?)
}
