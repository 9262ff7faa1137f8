//! Chain-address validation and normalization.
//!
//! An address is a `0x`-prefixed string of exactly 40 hex digits. Mixed-case
//! input is accepted without EIP-55 checksum verification; callers that need
//! a canonical form use [`normalize_address`].

/// Number of hex digits in an address, excluding the `0x` prefix.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Check whether `input` is a well-formed chain address.
///
/// # Examples
///
/// ```rust
/// use shared::address::is_address;
///
/// assert!(is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
/// assert!(!is_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
/// assert!(!is_address("0x1234"));
/// ```
pub fn is_address(input: &str) -> bool {
    let Some(digits) = input.strip_prefix("0x") else {
        return false;
    };
    digits.len() == ADDRESS_HEX_LEN && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Lowercase an address into its canonical form.
///
/// Returns `None` when the input is not a well-formed address.
pub fn normalize_address(input: &str) -> Option<String> {
    if is_address(input) {
        Some(input.to_ascii_lowercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_is_address() {
        assert!(is_address(ADDR));
        assert!(is_address(&ADDR.to_ascii_lowercase()));
        assert!(is_address("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_is_address_rejects_malformed() {
        assert!(!is_address(""));
        assert!(!is_address("0x"));
        assert!(!is_address("0x1234"));
        assert!(!is_address(&ADDR[2..]));
        assert!(!is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeZ"));
        // One digit too many
        assert!(!is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed0"));
    }

    #[test]
    fn test_normalize_address() {
        assert_eq!(
            normalize_address(ADDR).as_deref(),
            Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
        );
        assert_eq!(normalize_address("not an address"), None);
    }
}
