use ed25519_dalek::Signer;
use plasma_types::primitives::{Address, PublicKey, Signature};

use crate::address::pubkey_to_address;

/// Wrapper around an Ed25519 keypair.
pub struct Keypair {
    inner: ed25519_dalek::SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        let signing_key = ed25519_dalek::SigningKey::generate(&mut csprng);
        Self { inner: signing_key }
    }

    /// Create a keypair from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(seed);
        Self { inner: signing_key }
    }

    /// Get the public key bytes.
    pub fn public_key(&self) -> PublicKey {
        self.inner.verifying_key().to_bytes()
    }

    /// The address owning outputs spendable by this key.
    pub fn address(&self) -> Address {
        pubkey_to_address(&self.public_key())
    }

    /// Sign a message, returning the 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.inner.sign(message).to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_deterministic() {
        let kp = Keypair::from_seed(&[7u8; 32]);
        assert_eq!(kp.sign(b"block 1000"), kp.sign(b"block 1000"));
        assert_ne!(kp.sign(b"block 1000"), kp.sign(b"block 2000"));
    }

    #[test]
    fn test_from_seed_deterministic() {
        let seed = [42u8; 32];
        let kp1 = Keypair::from_seed(&seed);
        let kp2 = Keypair::from_seed(&seed);
        assert_eq!(kp1.public_key(), kp2.public_key());
        assert_eq!(kp1.address(), kp2.address());
    }
}
