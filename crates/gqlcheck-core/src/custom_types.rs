//! Ready-made bindings for common custom scalars and input types
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::config::CapabilityBindings;
use crate::validation::{ObjectValidator, SharedValidator, StringValidator, ValidatorExt};
use sha3::{Digest, Keccak256};
use std::sync::Arc;

/// Whether `value` is a hex string, with or without a `0x` prefix
pub fn is_hex(value: &str) -> bool {
    let digits = value
        .strip_prefix("-0x")
        .or_else(|| value.strip_prefix("0x"))
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Whether `value` is an Ethereum address
///
/// Single-case addresses are accepted as-is; mixed-case addresses must carry
/// a valid EIP-55 checksum.
pub fn is_address(value: &str) -> bool {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }

    has_valid_checksum(digits)
}

fn has_valid_checksum(digits: &str) -> bool {
    let hash = Keccak256::digest(digits.to_ascii_lowercase().as_bytes());

    digits.chars().enumerate().all(|(i, c)| {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_digit() {
            true
        } else if nibble > 7 {
            c.is_ascii_uppercase()
        } else {
            c.is_ascii_lowercase()
        }
    })
}

fn hex_string() -> StringValidator {
    StringValidator::new().test("is hex", "${path} must be a valid hex value", is_hex)
}

fn required(validator: StringValidator) -> SharedValidator {
    let shared: SharedValidator = Arc::new(validator);
    shared.required()
}

/// Email address string
pub fn email() -> StringValidator {
    StringValidator::new().email()
}

/// Ethereum address string
pub fn ethereum_address() -> StringValidator {
    StringValidator::new().test(
        "is-address",
        "${path} must be a valid Ethereum address",
        is_address,
    )
}

/// ECDSA signature parts of a signed Ethereum message
pub fn ethereum_signature() -> ObjectValidator {
    ObjectValidator::new()
        .field(
            "messageHash",
            required(StringValidator::new().test("is hash", "${path} must be a hex hash", is_hex)),
        )
        .field("r", required(hex_string().length(66)))
        .field("s", required(hex_string().length(66)))
        .field("v", required(hex_string().length(4)))
}

/// Token reference with a name and an id
pub fn token_data() -> ObjectValidator {
    ObjectValidator::new()
        .field("name", required(StringValidator::new()))
        .field("id", required(StringValidator::new()))
}

/// Bindings for `Email`, `EthereumAddress`, `EthereumSignature` and `TokenData`
pub fn bindings() -> CapabilityBindings {
    CapabilityBindings::new()
        .with_validator("Email", email())
        .with_validator("EthereumAddress", ethereum_address())
        .with_validator("EthereumSignature", ethereum_signature())
        .with_validator("TokenData", token_data())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;
    use serde_json::json;

    fn messages(validator: &dyn Validator, value: serde_json::Value) -> Vec<String> {
        validator
            .validate(&value)
            .err()
            .map(|e| e.into_messages())
            .unwrap_or_default()
    }

    #[test]
    fn test_is_hex() {
        assert!(is_hex("0xdeadBEEF"));
        assert!(is_hex("deadbeef"));
        assert!(is_hex("-0x1f"));
        assert!(is_hex(""));
        assert!(!is_hex("0xnothex"));
    }

    #[test]
    fn test_is_address() {
        assert!(is_address("0xad16d6d10e6acf06c6a17bd85cfb9f1d5467c644"));
        assert!(is_address("0xAD16D6D10E6ACF06C6A17BD85CFB9F1D5467C644"));
        // EIP-55 reference vectors
        assert!(is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(is_address("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"));
        assert!(!is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD"));
        assert!(!is_address("abc"));
        assert!(!is_address("0xad16d6d10e6acf06c6a17bd85cfb9f1d5467c64"));
    }

    #[test]
    fn test_email_and_address_messages() {
        assert_eq!(messages(&email(), json!("Foobert")), vec!["this must be a valid email"]);
        assert_eq!(
            messages(&ethereum_address(), json!("abc")),
            vec!["this must be a valid Ethereum address"]
        );
    }

    #[test]
    fn test_ethereum_signature() {
        let r = format!("0x{}", "a".repeat(64));
        let valid = json!({"messageHash": "0xabc", "r": r, "s": r, "v": "0x1b"});
        assert!(messages(&ethereum_signature(), valid).is_empty());

        let invalid = json!({"messageHash": "hash", "r": "0x1", "s": r});
        assert_eq!(
            messages(&ethereum_signature(), invalid),
            vec![
                "messageHash must be a hex hash",
                "r must be exactly 66 characters",
                "v is a required field"
            ]
        );
    }

    #[test]
    fn test_token_data() {
        assert!(messages(&token_data(), json!({"name": "foo", "id": "123"})).is_empty());
        assert_eq!(
            messages(&token_data(), json!({"name": 1, "id": true})),
            vec![
                "name must be a `string` type, but the final value was: `1`.",
                "id must be a `string` type, but the final value was: `true`."
            ]
        );
    }

    #[test]
    fn test_bindings_names() {
        let names: Vec<_> = bindings().names().map(str::to_string).collect();
        assert_eq!(names, vec!["Email", "EthereumAddress", "EthereumSignature", "TokenData"]);
    }
}
