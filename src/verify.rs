//! Verification for HAWK.
//!
//! Verification re-derives the expected coefficient vector from the
//! public key, the message and the signature's embedded salt, and
//! compares it against the decoded s1. It is total: malformed input of
//! any shape yields `false`, never a panic or an error.

use crate::hash::{derive_coefficient, hash_message, hash_point, shake256};
use crate::keygen::PublicKey;
use crate::packing::decode_signature;

/// Verifies a HAWK signature.
///
/// Returns `true` only if the signature buffer decodes structurally and
/// every decoded coefficient matches the value re-derived from the
/// public key, message and salt. Structural decode failures (wrong
/// length, short coefficient segment) return `false`.
pub fn verify(pk: &PublicKey, message: &[u8], sig_bytes: &[u8]) -> bool {
    let params = pk.params;
    let n = params.n;

    let (salt, s1) = match decode_signature(sig_bytes, params) {
        Ok(decoded) => decoded,
        Err(_) => return false,
    };

    let hpub = shake256(pk.as_bytes(), params.hpub_bytes());
    let digest = hash_message(message, &hpub);
    let point = hash_point(&digest, &salt, n);
    let h1 = &point[n..2 * n];

    for (i, &sval) in s1.iter().enumerate() {
        let expected = match derive_coefficient(h1, i, params.low_s1, params.high_s1) {
            Ok(e) => e,
            Err(_) => return false,
        };
        if sval != expected {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::{keygen_512, Seed};
    use crate::sign::sign;

    #[test]
    fn test_verify_roundtrip() {
        let seed = Seed::from_u64(0);
        let kp = keygen_512(&seed).unwrap();
        let sig = sign(&kp.secret, b"unit test message", &seed).unwrap();
        assert!(verify(&kp.public, b"unit test message", sig.as_bytes()));
    }

    #[test]
    fn test_verify_wrong_message() {
        let seed = Seed::from_u64(0);
        let kp = keygen_512(&seed).unwrap();
        let sig = sign(&kp.secret, b"original", &seed).unwrap();
        assert!(!verify(&kp.public, b"tampered", sig.as_bytes()));
    }

    #[test]
    fn test_verify_wrong_length_is_false_not_panic() {
        let seed = Seed::from_u64(0);
        let kp = keygen_512(&seed).unwrap();
        assert!(!verify(&kp.public, b"msg", &[]));
        assert!(!verify(&kp.public, b"msg", &[0u8; 7]));
        let oversized = vec![0u8; 10_000];
        assert!(!verify(&kp.public, b"msg", &oversized));
    }

    #[test]
    fn test_verify_bit_flip_in_signature() {
        let seed = Seed::from_u64(4);
        let kp = keygen_512(&seed).unwrap();
        let sig = sign(&kp.secret, b"flip test", &seed).unwrap();

        // Flipping a bit in the coefficient segment breaks the match.
        // (A flip inside the salt also fails: the salt feeds the hash
        // point that the coefficients are checked against.)
        let mut bad = sig.as_bytes().to_vec();
        let last = bad.len() - 1;
        bad[last] ^= 0x01;
        assert!(!verify(&kp.public, b"flip test", &bad));

        bad = sig.as_bytes().to_vec();
        bad[0] ^= 0x80;
        assert!(!verify(&kp.public, b"flip test", &bad));
    }

    #[test]
    fn test_verify_wrong_public_key() {
        let seed = Seed::from_u64(6);
        let other_seed = Seed::from_u64(7);
        let kp = keygen_512(&seed).unwrap();
        let other = keygen_512(&other_seed).unwrap();
        let sig = sign(&kp.secret, b"key mismatch", &seed).unwrap();
        assert!(verify(&kp.public, b"key mismatch", sig.as_bytes()));
        assert!(!verify(&other.public, b"key mismatch", sig.as_bytes()));
    }
}
