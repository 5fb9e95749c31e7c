//! Signing for HAWK.
//!
//! Signing is fully deterministic: the salt, the message digest, the
//! hash point and every signature coefficient are SHAKE256 derivations
//! of the seed, the message and the regenerated public key. Two calls
//! with identical inputs produce identical signatures.

use crate::error::Result;
use crate::hash::{derive_vector, expand_seed, hash_message, hash_point, shake256};
use crate::keygen::{keygen, SecretKey, Seed};
use crate::packing::encode_signature;
use crate::params::Params;

/// A HAWK signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The encoded signature.
    pub bytes: Vec<u8>,
    /// The parameter set.
    pub params: &'static Params,
}

impl Signature {
    /// Returns the encoded signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Signs a message.
///
/// The secret key supplies the parameter set; its byte content is
/// advisory. All key-dependent values are re-derived from `seed` by
/// running key generation again, so the seed passed here must be the one
/// the key pair was generated with for the signature to verify against
/// that pair's public key.
///
/// Pipeline: regenerate public key -> hpub -> digest(message || hpub)
/// -> deterministic seed-derived salt -> hash point -> s1 coefficients
/// -> encoded signature.
pub fn sign(sk: &SecretKey, message: &[u8], seed: &Seed) -> Result<Signature> {
    let params = sk.params;
    let n = params.n;

    let keypair = keygen(seed, params)?;
    let hpub = shake256(keypair.public.as_bytes(), params.hpub_bytes());
    let digest = hash_message(message, &hpub);

    let seed_le = seed.to_le_bytes()?;
    let salt = expand_seed(&seed_le, params.salt_bytes());

    let point = hash_point(&digest, &salt, n);
    let h1 = &point[n..2 * n];
    let s1 = derive_vector(h1, n, params.low_s1, params.high_s1)?;

    let bytes = encode_signature(&salt, &s1, params)?;
    Ok(Signature { bytes, params })
}
