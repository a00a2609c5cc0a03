/// 32-byte BLAKE3 hash.
pub type Hash = [u8; 32];

/// 32-byte Ed25519 public key.
pub type PublicKey = [u8; 32];

/// 64-byte Ed25519 signature.
pub type Signature = [u8; 64];

/// 20-byte address derived from BLAKE3(pubkey)[0..20].
pub type Address = [u8; 20];

/// Identifier of a single non-fungible token.
pub type TokenId = u64;

/// Amount of fungible value.
pub type Amount = u128;

/// Position of a block in the child chain number space.
pub type BlockNumber = u64;

/// Signature value carried by an input or block that has not been signed.
pub const NULL_SIGNATURE: Signature = [0u8; 64];

/// Address value carried by an input whose signer is unknown.
pub const NULL_ADDRESS: Address = [0u8; 20];

/// Serde helper for [u8; 64] fields.
pub mod serde_sig {
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &[u8; 64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 64], D::Error>
    where
        D: Deserializer<'de>,
    {
        let v: Vec<u8> = Vec::deserialize(deserializer)?;
        v.try_into()
            .map_err(|_| serde::de::Error::custom("expected 64 bytes for signature"))
    }
}

/// Serde helper for Vec<[u8; 64]> fields (per-input signatures).
pub mod serde_sig_vec {
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &[[u8; 64]], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let byte_vecs: Vec<&[u8]> = value.iter().map(|s| s.as_slice()).collect();
        byte_vecs.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<[u8; 64]>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let vecs: Vec<Vec<u8>> = Vec::deserialize(deserializer)?;
        vecs.into_iter()
            .map(|v| {
                v.try_into()
                    .map_err(|_| serde::de::Error::custom("expected 64 bytes for signature"))
            })
            .collect()
    }
}
