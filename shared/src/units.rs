//! Wei quantity parsing and display-unit conversion.
//!
//! Base units are wei (1 display unit = 10^18 wei), carried as `u128`.
//! That covers every realistic balance; anything larger is reported as a
//! typed error rather than silently truncated.

use thiserror::Error;

/// Wei per display unit for 18-decimal assets.
pub const WEI_PER_UNIT: u128 = 1_000_000_000_000_000_000;

const DECIMALS: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("'{0}' is not a 0x-prefixed hex quantity")]
    BadQuantity(String),
    #[error("quantity '{0}' exceeds the supported range")]
    TooLarge(String),
}

/// Parse a JSON-RPC hex quantity (`0x` prefix, no leading zeros required)
/// into wei.
pub fn parse_quantity(input: &str) -> Result<u128, UnitsError> {
    let digits = input
        .strip_prefix("0x")
        .filter(|d| !d.is_empty())
        .ok_or_else(|| UnitsError::BadQuantity(input.to_string()))?;
    u128::from_str_radix(digits, 16).map_err(|_| {
        if digits.chars().all(|c| c.is_ascii_hexdigit()) {
            UnitsError::TooLarge(input.to_string())
        } else {
            UnitsError::BadQuantity(input.to_string())
        }
    })
}

/// Format wei as a decimal display-unit string, trailing zeros trimmed
/// (`1500000000000000000` -> `"1.5"`).
pub fn format_wei(wei: u128) -> String {
    let whole = wei / WEI_PER_UNIT;
    let frac = wei % WEI_PER_UNIT;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0>width$}", frac, width = DECIMALS);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_quantity("0xde0b6b3a7640000").unwrap(), WEI_PER_UNIT);
        assert_eq!(parse_quantity("0xff").unwrap(), 255);
    }

    #[test]
    fn test_parse_quantity_rejects_malformed() {
        assert!(matches!(parse_quantity(""), Err(UnitsError::BadQuantity(_))));
        assert!(matches!(parse_quantity("0x"), Err(UnitsError::BadQuantity(_))));
        assert!(matches!(parse_quantity("123"), Err(UnitsError::BadQuantity(_))));
        assert!(matches!(parse_quantity("0xzz"), Err(UnitsError::BadQuantity(_))));
    }

    #[test]
    fn test_parse_quantity_too_large() {
        // 33 hex digits, one past u128
        let huge = format!("0x1{}", "0".repeat(32));
        assert!(matches!(parse_quantity(&huge), Err(UnitsError::TooLarge(_))));
    }

    #[test]
    fn test_format_wei() {
        assert_eq!(format_wei(0), "0");
        assert_eq!(format_wei(WEI_PER_UNIT), "1");
        assert_eq!(format_wei(WEI_PER_UNIT * 3 / 2), "1.5");
        assert_eq!(format_wei(1), "0.000000000000000001");
        assert_eq!(format_wei(WEI_PER_UNIT * 12), "12");
        assert_eq!(format_wei(1_234_500_000_000_000_000), "1.2345");
        assert_eq!(format_wei(987_654_321_000_000_000_000), "987.654321");
    }
}
