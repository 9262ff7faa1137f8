//! Wire-format types shared between the frontend services.

use serde::{Deserialize, Serialize};

/// A compiled contract artifact as produced by the build pipeline
/// (truffle-style JSON: `contractName`, `abi`, `bytecode`, ...).
///
/// Loaded once per page session and immutable afterwards. The ABI is kept
/// as raw JSON: the frontend only re-renders it for the operator, all call
/// encoding is done against fixed selectors in [`crate::abi`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDescriptor {
    pub contract_name: String,
    pub abi: serde_json::Value,
    pub bytecode: String,
}

impl ContractDescriptor {
    /// The contract ABI rendered as compact JSON for display.
    pub fn abi_json(&self) -> String {
        self.abi.to_string()
    }
}

/// The subset of a JSON-RPC transaction receipt the deploy flow needs.
///
/// `contract_address` is only present for contract-creation transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    /// A mined receipt reports success as the hex quantity `0x1`.
    pub fn succeeded(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => status == "0x1",
            // Pre-Byzantium nodes omit the field; treat absence as success.
            None => true,
        }
    }
}

/// One entry of the ticker endpoint response (an array whose first element
/// carries the quote).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerEntry {
    pub price_usd: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_from_artifact_json() {
        let raw = r#"{
            "contractName": "Buyback",
            "abi": [{"type": "constructor", "inputs": [{"name": "_token", "type": "address"}]}],
            "bytecode": "0x6080604052",
            "deployedBytecode": "0x6080"
        }"#;
        let descriptor: ContractDescriptor = serde_json::from_str(raw).unwrap();
        assert_eq!(descriptor.contract_name, "Buyback");
        assert_eq!(descriptor.bytecode, "0x6080604052");
        assert!(descriptor.abi.is_array());
    }

    #[test]
    fn test_receipt_camel_case_fields() {
        let raw = r#"{
            "transactionHash": "0xaaa",
            "contractAddress": "0xbbb",
            "status": "0x1",
            "blockNumber": "0x10"
        }"#;
        let receipt: TransactionReceipt = serde_json::from_str(raw).unwrap();
        assert_eq!(receipt.transaction_hash, "0xaaa");
        assert_eq!(receipt.contract_address.as_deref(), Some("0xbbb"));
        assert!(receipt.succeeded());
    }

    #[test]
    fn test_receipt_reverted() {
        let raw = r#"{"transactionHash": "0xaaa", "status": "0x0"}"#;
        let receipt: TransactionReceipt = serde_json::from_str(raw).unwrap();
        assert!(!receipt.succeeded());
        assert!(receipt.contract_address.is_none());
    }

    #[test]
    fn test_ticker_entry_array() {
        let raw = r#"[{"id": "ethereum", "price_usd": "1834.52", "rank": "2"}]"#;
        let entries: Vec<TickerEntry> = serde_json::from_str(raw).unwrap();
        assert_eq!(entries[0].price_usd, "1834.52");
    }
}
