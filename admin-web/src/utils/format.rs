//! Display formatting helpers.

/// Truncate a chain address for display (`0x5aAeb6...BeAed` style).
///
/// Returns the input unchanged when it is too short to truncate.
pub fn truncate_address(address: &str) -> String {
    const PREFIX: usize = 8; // "0x" plus six digits
    const SUFFIX: usize = 4;
    if address.len() <= PREFIX + SUFFIX {
        return address.to_string();
    }
    format!(
        "{}...{}",
        &address[..PREFIX],
        &address[address.len() - SUFFIX..]
    )
}

/// Format a USD quote with two decimal places.
pub fn format_quote(quote: f64) -> String {
    format!("{quote:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            "0x5aAeb6...eAed"
        );
        assert_eq!(truncate_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_format_quote() {
        assert_eq!(format_quote(1834.519), "1834.52");
        assert_eq!(format_quote(100.0), "100.00");
    }
}
