//! Call-data encoding and return-word decoding.
//!
//! The buyback admin touches exactly two read methods (`token()` and
//! `balanceOf(address)`) plus one constructor taking a single address, so
//! instead of a general ABI coder everything stays in the JSON-RPC
//! hex-string domain: a call is a selector followed by zero-padded 32-byte
//! words, a return value is one 32-byte word.

use thiserror::Error;

use crate::address::{is_address, ADDRESS_HEX_LEN};

/// Hex digits in one ABI word (32 bytes).
const WORD_HEX_LEN: usize = 64;

/// 4-byte selector of `token()`.
pub const TOKEN_SELECTOR: &str = "fc0c546a";
/// 4-byte selector of `balanceOf(address)`.
pub const BALANCE_OF_SELECTOR: &str = "70a08231";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("'{0}' is not a chain address")]
    BadAddress(String),
    #[error("contract bytecode must be a 0x-prefixed hex string")]
    BadBytecode,
    #[error("expected a 32-byte return word, got '{0}'")]
    BadWord(String),
}

/// Encode an address as one left-padded 32-byte word (no `0x` prefix).
fn address_word(address: &str) -> Result<String, AbiError> {
    if !is_address(address) {
        return Err(AbiError::BadAddress(address.to_string()));
    }
    let digits = address[2..].to_ascii_lowercase();
    Ok(format!("{:0>width$}", digits, width = WORD_HEX_LEN))
}

/// Call data for `token()`.
pub fn token_call_data() -> String {
    format!("0x{TOKEN_SELECTOR}")
}

/// Call data for `balanceOf(holder)`.
pub fn balance_of_call_data(holder: &str) -> Result<String, AbiError> {
    Ok(format!("0x{BALANCE_OF_SELECTOR}{}", address_word(holder)?))
}

/// Contract-creation data: deployment bytecode with the constructor's sole
/// address argument appended as one encoded word.
pub fn constructor_data(bytecode: &str, token: &str) -> Result<String, AbiError> {
    let code = bytecode.strip_prefix("0x").ok_or(AbiError::BadBytecode)?;
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AbiError::BadBytecode);
    }
    Ok(format!("0x{code}{}", address_word(token)?))
}

/// Strip the `0x` prefix and verify the result is exactly one word.
fn return_word(data: &str) -> Result<&str, AbiError> {
    let word = data.strip_prefix("0x").unwrap_or(data);
    if word.len() == WORD_HEX_LEN && word.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(word)
    } else {
        Err(AbiError::BadWord(data.to_string()))
    }
}

/// Decode an address returned as one 32-byte word.
pub fn decode_address_word(data: &str) -> Result<String, AbiError> {
    let word = return_word(data)?;
    let (padding, digits) = word.split_at(WORD_HEX_LEN - ADDRESS_HEX_LEN);
    if padding.chars().any(|c| c != '0') {
        return Err(AbiError::BadWord(data.to_string()));
    }
    Ok(format!("0x{}", digits.to_ascii_lowercase()))
}

/// Decode an unsigned quantity returned as one 32-byte word into the
/// JSON-RPC quantity form understood by [`crate::units::parse_quantity`].
pub fn decode_quantity_word(data: &str) -> Result<String, AbiError> {
    let word = return_word(data)?;
    let digits = word.trim_start_matches('0');
    if digits.is_empty() {
        Ok("0x0".to_string())
    } else {
        Ok(format!("0x{digits}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_token_call_data() {
        assert_eq!(token_call_data(), "0xfc0c546a");
    }

    #[test]
    fn test_balance_of_call_data() {
        let data = balance_of_call_data(TOKEN).unwrap();
        assert_eq!(
            data,
            "0x70a082310000000000000000000000005aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        );
    }

    #[test]
    fn test_balance_of_rejects_bad_holder() {
        assert_eq!(
            balance_of_call_data("0x1234"),
            Err(AbiError::BadAddress("0x1234".to_string()))
        );
    }

    #[test]
    fn test_constructor_data() {
        let data = constructor_data("0x6080604052", TOKEN).unwrap();
        assert_eq!(
            data,
            "0x60806040520000000000000000000000005aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        );
    }

    #[test]
    fn test_constructor_data_rejects_bad_bytecode() {
        assert_eq!(
            constructor_data("6080604052", TOKEN),
            Err(AbiError::BadBytecode)
        );
        assert_eq!(constructor_data("0x", TOKEN), Err(AbiError::BadBytecode));
        assert_eq!(
            constructor_data("0xzz80", TOKEN),
            Err(AbiError::BadBytecode)
        );
    }

    #[test]
    fn test_decode_address_word() {
        let word = "0x0000000000000000000000005aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert_eq!(
            decode_address_word(word).unwrap(),
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        );
    }

    #[test]
    fn test_decode_address_word_rejects_dirty_padding() {
        let word = "0x0000000000000000000000015aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
        assert!(decode_address_word(word).is_err());
    }

    #[test]
    fn test_decode_quantity_word() {
        let one_ether = "0x0000000000000000000000000000000000000000000000000de0b6b3a7640000";
        assert_eq!(decode_quantity_word(one_ether).unwrap(), "0xde0b6b3a7640000");

        let zero = "0x0000000000000000000000000000000000000000000000000000000000000000";
        assert_eq!(decode_quantity_word(zero).unwrap(), "0x0");
    }

    #[test]
    fn test_decode_rejects_short_word() {
        assert!(decode_quantity_word("0xde0b6b3a7640000").is_err());
        assert!(decode_address_word("0x").is_err());
    }
}
