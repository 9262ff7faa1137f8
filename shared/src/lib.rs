//! # Shared Chain Primitives
//!
//! Host-independent building blocks used by the admin-web frontend.
//! Everything here is pure Rust with no browser or provider dependency,
//! which is also where the bulk of the unit tests live.
//!
//! ## Structure
//!
//! - **[`dto`]**: Wire-format types (contract descriptors, receipts, ticker)
//! - **[`address`]**: Chain-address validation and normalization
//! - **[`abi`]**: Call-data encoding/decoding in the JSON-RPC hex-string domain
//! - **[`units`]**: Wei quantity parsing and display-unit formatting
//! - **[`retry`]**: Bounded exponential-backoff schedule
//!
//! ## Wire Format
//!
//! Contract descriptors follow the truffle artifact layout (`contractName`,
//! `abi`, `bytecode`); receipts follow the JSON-RPC camelCase convention.
//! Both map onto snake_case Rust fields through serde rename attributes.

pub mod abi;
pub mod address;
pub mod dto;
pub mod retry;
pub mod units;

// Re-export commonly used types for convenience
pub use abi::{balance_of_call_data, constructor_data, token_call_data};
pub use address::{is_address, normalize_address};
pub use dto::{ContractDescriptor, TickerEntry, TransactionReceipt};
pub use retry::RetryPolicy;
pub use units::{format_wei, parse_quantity};
