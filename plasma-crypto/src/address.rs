use plasma_types::error::ChainError;
use plasma_types::primitives::{Address, PublicKey};

use crate::hash::blake3_hash;

/// Derive an address from a public key.
/// Address = BLAKE3(pubkey)[0..20]
pub fn pubkey_to_address(pubkey: &PublicKey) -> Address {
    let hash = blake3_hash(pubkey);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[..20]);
    address
}

/// Parse a hex address, with or without a `0x` prefix, in any letter case.
pub fn normalize_address(input: &str) -> Result<Address, ChainError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(digits).map_err(|e| ChainError::InvalidAddress {
        reason: format!("'{}': {}", input, e),
    })?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| ChainError::InvalidAddress {
            reason: format!("expected 20 bytes, got {}", b.len()),
        })
}

/// Render an address as lower-case `0x`-prefixed hex.
pub fn address_to_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_address_derivation_deterministic() {
        let pubkey = [42u8; 32];
        assert_eq!(pubkey_to_address(&pubkey), pubkey_to_address(&pubkey));
    }

    #[test]
    fn test_different_pubkeys_different_addresses() {
        assert_ne!(pubkey_to_address(&[1u8; 32]), pubkey_to_address(&[2u8; 32]));
    }

    #[test]
    fn test_normalize_ignores_case_and_prefix() {
        let lower = normalize_address("0xabcdefabcdefabcdefabcdefabcdefabcdefabcd").unwrap();
        let upper = normalize_address("0XABCDEFABCDEFABCDEFABCDEFABCDEFABCDEFABCD").unwrap();
        let bare = normalize_address("AbCdEfAbCdEfAbCdEfAbCdEfAbCdEfAbCdEfAbCd").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, bare);
    }

    #[test]
    fn test_normalize_rejects_wrong_length() {
        assert!(matches!(
            normalize_address("0xabcd"),
            Err(ChainError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_normalize_rejects_non_hex() {
        assert!(normalize_address("0xzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }

    #[test]
    fn test_hex_is_lower_case() {
        let addr = [0xABu8; 20];
        assert_eq!(
            address_to_hex(&addr),
            "0xabababababababababababababababababababab"
        );
    }

    proptest! {
        #[test]
        fn prop_hex_normalizes_back(bytes in proptest::array::uniform20(any::<u8>())) {
            let rendered = address_to_hex(&bytes).to_uppercase();
            prop_assert_eq!(normalize_address(&rendered).unwrap(), bytes);
        }
    }
}
