//! Key generation for HAWK.
//!
//! A key pair is a pure function of the caller-supplied seed and the
//! parameter set: the seed expands to a key-generation seed, the noise
//! pair (f, g) regenerates from that, the basis solver completes the
//! secret basis, and the Gram-matrix polynomials q00 and q01 feed the
//! public-key encoder. There are no retries; any internal length
//! mismatch is a fatal error.

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroize;

use crate::error::{HawkError, Result};
use crate::hash::{expand_seed, shake256};
use crate::packing::{encode_public_key, encode_secret_key};
use crate::params::{Params, HAWK_1024, HAWK_256, HAWK_512};
use crate::poly::{mod2, negacyclic_mul, poly_add};
use crate::sampler::regenerate_fg;
use crate::solver::{BasisSolver, StandInSolver};

/// A caller-supplied derivation seed.
///
/// The seed is an arbitrary-precision non-negative integer, but every
/// derivation consumes its fixed 8-byte little-endian form; values that
/// need more than 8 bytes are rejected. Seeds are public inputs used for
/// reproducibility, not secret key material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed(BigUint);

impl Seed {
    /// Wraps an arbitrary-precision integer as a seed.
    pub fn new(value: BigUint) -> Self {
        Seed(value)
    }

    /// Builds a seed from a machine integer.
    pub fn from_u64(value: u64) -> Self {
        Seed(BigUint::from(value))
    }

    /// Returns true for the zero seed, which selects the degenerate
    /// stand-in basis during key generation.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the fixed 8-byte little-endian encoding.
    ///
    /// Fails with [`HawkError::InvalidInput`] when the value does not
    /// fit in 8 bytes.
    pub fn to_le_bytes(&self) -> Result<[u8; 8]> {
        let bytes = self.0.to_bytes_le();
        if bytes.len() > 8 {
            return Err(HawkError::InvalidInput {
                field: "seed",
                reason: "does not fit in 8 little-endian bytes",
            });
        }
        let mut out = [0u8; 8];
        out[..bytes.len()].copy_from_slice(&bytes);
        Ok(out)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::from_u64(value)
    }
}

impl From<BigUint> for Seed {
    fn from(value: BigUint) -> Self {
        Seed::new(value)
    }
}

/// A HAWK public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// The encoded public key.
    pub bytes: Vec<u8>,
    /// The parameter set.
    pub params: &'static Params,
}

impl PublicKey {
    /// Returns the encoded public key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A HAWK secret key.
///
/// # Security
///
/// The encoded bytes are zeroized on drop. Note that signing re-derives
/// its material from the seed rather than reading it back out of this
/// buffer; the buffer exists to satisfy the external key-file contract.
#[derive(Clone)]
pub struct SecretKey {
    /// The encoded secret key.
    pub bytes: Vec<u8>,
    /// The parameter set.
    pub params: &'static Params,
}

impl SecretKey {
    /// Returns the encoded secret key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// A HAWK key pair.
#[derive(Clone)]
pub struct KeyPair {
    /// The public key.
    pub public: PublicKey,
    /// The secret key.
    pub secret: SecretKey,
}

/// Generates a HAWK key pair from a seed with the default solver.
pub fn keygen(seed: &Seed, params: &'static Params) -> Result<KeyPair> {
    keygen_with_solver(seed, params, &StandInSolver)
}

/// Generates a HAWK key pair from a seed with an explicit basis solver.
///
/// Pipeline: seed -> kgseed -> (f, g) -> basis -> q00 = f*f + g*g,
/// q01 = F*f + G*g (negacyclic products) -> public key -> public-key
/// hash -> secret key. Deterministic: the same seed and parameter set
/// always produce identical key pairs.
pub fn keygen_with_solver(
    seed: &Seed,
    params: &'static Params,
    solver: &dyn BasisSolver,
) -> Result<KeyPair> {
    let seed_le = seed.to_le_bytes()?;
    let mut kgseed = expand_seed(&seed_le, params.kgseed_bytes());

    let (f, g) = regenerate_fg(&kgseed, params.n, params.eta);
    let mut basis = solver.solve(seed, f, g)?;

    let q00 = poly_add(
        &negacyclic_mul(&basis.f, &basis.f),
        &negacyclic_mul(&basis.g, &basis.g),
    );
    let q01 = poly_add(
        &negacyclic_mul(&basis.big_f, &basis.f),
        &negacyclic_mul(&basis.big_g, &basis.g),
    );

    let pk_bytes = encode_public_key(&q00, &q01, params)?;

    let mut fmod2 = mod2(&basis.big_f);
    let mut gmod2 = mod2(&basis.big_g);
    let hpub = shake256(&pk_bytes, params.hpub_bytes());
    let sk_bytes = encode_secret_key(&kgseed, &fmod2, &gmod2, &hpub);

    // Secret intermediates are no longer needed once packed.
    kgseed.zeroize();
    basis.f.zeroize();
    basis.g.zeroize();
    basis.big_f.zeroize();
    basis.big_g.zeroize();
    fmod2.zeroize();
    gmod2.zeroize();

    Ok(KeyPair {
        public: PublicKey {
            bytes: pk_bytes,
            params,
        },
        secret: SecretKey {
            bytes: sk_bytes,
            params,
        },
    })
}

/// Generates a HAWK-256 key pair.
pub fn keygen_256(seed: &Seed) -> Result<KeyPair> {
    keygen(seed, &HAWK_256)
}

/// Generates a HAWK-512 key pair.
pub fn keygen_512(seed: &Seed) -> Result<KeyPair> {
    keygen(seed, &HAWK_512)
}

/// Generates a HAWK-1024 key pair.
pub fn keygen_1024(seed: &Seed) -> Result<KeyPair> {
    keygen(seed, &HAWK_1024)
}
