//! Application constants

use shared::RetryPolicy;

// Static descriptor paths, fixed at build-deploy time
pub const TOKEN_DESCRIPTOR_PATH: &str = "./build/contracts/ERC20.json";
pub const BUYBACK_DESCRIPTOR_PATH: &str = "./build/contracts/Buyback.json";

pub const TICKER_ENDPOINT: &str = "https://api.coinmarketcap.com/v1/ticker/ethereum/";

// Wallet extensions inject after our scripts start; probe briefly.
pub const DETECT_POLICY: RetryPolicy = RetryPolicy::new(4, 500);
// Locked-wallet retries before settling in the recoverable state.
pub const ACCOUNTS_POLICY: RetryPolicy = RetryPolicy::new(3, 1000);
// Receipt polling: ~2 minutes before giving up.
pub const RECEIPT_POLICY: RetryPolicy = RetryPolicy::new(9, 2000);

pub const CLOCK_INTERVAL_MS: u32 = 1000;
