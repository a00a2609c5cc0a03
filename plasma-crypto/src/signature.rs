use plasma_types::primitives::{Signature, NULL_SIGNATURE};

/// True if `signature` is the unsigned sentinel.
pub fn is_null_signature(signature: &Signature) -> bool {
    *signature == NULL_SIGNATURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Keypair;

    #[test]
    fn test_null_signature_detected() {
        assert!(is_null_signature(&NULL_SIGNATURE));
        assert!(!is_null_signature(&Keypair::generate().sign(b"x")));
    }
}
