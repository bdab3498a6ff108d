use thiserror::Error;

/// Hex length of a wallet address (without the 0x prefix).
const ADDRESS_HEX_LEN: usize = 40;

/// Hex length of a market condition id (without the 0x prefix).
const CONDITION_ID_HEX_LEN: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("{kind} is required")]
    Empty { kind: &'static str },

    #[error("invalid {kind} length: {actual} hex characters (expected {expected})")]
    BadLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} contains invalid hex characters")]
    BadChars { kind: &'static str },
}

/// Validate and normalize a wallet address.
///
/// The data API requires addresses to be lowercase, 0x-prefixed, and exactly
/// 40 hex characters after the prefix. Input may arrive with or without the
/// prefix and in any case. Idempotent on already-normalized input.
pub fn normalize_address(input: &str) -> Result<String, IdError> {
    normalize_hex_id(input, "address", ADDRESS_HEX_LEN)
}

/// Validate and normalize a market condition id (64 hex characters).
pub fn normalize_condition_id(input: &str) -> Result<String, IdError> {
    normalize_hex_id(input, "condition id", CONDITION_ID_HEX_LEN)
}

fn normalize_hex_id(input: &str, kind: &'static str, expected: usize) -> Result<String, IdError> {
    if input.is_empty() {
        return Err(IdError::Empty { kind });
    }

    let lower = input.to_ascii_lowercase();
    let clean = lower.strip_prefix("0x").unwrap_or(&lower);

    if clean.len() != expected {
        return Err(IdError::BadLength {
            kind,
            expected,
            actual: clean.len(),
        });
    }
    if !clean.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(IdError::BadChars { kind });
    }

    Ok(format!("0x{clean}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EXAMPLE_ADDRESS as ADDR, EXAMPLE_CONDITION_ID};

    #[test]
    fn address_accepts_prefixed() {
        assert_eq!(normalize_address(ADDR).unwrap(), ADDR);
    }

    #[test]
    fn address_accepts_unprefixed() {
        assert_eq!(normalize_address(&ADDR[2..]).unwrap(), ADDR);
    }

    #[test]
    fn address_lowercases() {
        let upper = format!("0X{}", ADDR[2..].to_uppercase());
        assert_eq!(normalize_address(&upper).unwrap(), ADDR);
    }

    #[test]
    fn address_idempotent() {
        let once = normalize_address(ADDR).unwrap();
        assert_eq!(normalize_address(&once).unwrap(), once);
    }

    #[test]
    fn address_rejects_empty() {
        assert_eq!(
            normalize_address(""),
            Err(IdError::Empty { kind: "address" })
        );
    }

    #[test]
    fn address_rejects_wrong_length() {
        let err = normalize_address("0xabc123").unwrap_err();
        assert_eq!(
            err,
            IdError::BadLength {
                kind: "address",
                expected: 40,
                actual: 6
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid address length: 6 hex characters (expected 40)"
        );
    }

    #[test]
    fn address_rejects_non_hex() {
        let bad = format!("0x{}", "g".repeat(40));
        assert_eq!(
            normalize_address(&bad),
            Err(IdError::BadChars { kind: "address" })
        );
    }

    #[test]
    fn condition_id_round_trip() {
        let id = EXAMPLE_CONDITION_ID;
        assert_eq!(normalize_condition_id(id).unwrap(), id);
        assert_eq!(normalize_condition_id(&id[2..]).unwrap(), id);
    }

    #[test]
    fn condition_id_rejects_address_length() {
        let err = normalize_condition_id(ADDR).unwrap_err();
        assert_eq!(
            err,
            IdError::BadLength {
                kind: "condition id",
                expected: 64,
                actual: 40
            }
        );
    }
}
