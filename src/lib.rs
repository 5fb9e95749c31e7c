//! # pqsigs-hawk
//!
//! A Rust implementation of the encoding/decoding and deterministic
//! derivation core of HAWK, a lattice-based post-quantum signature
//! scheme family.
//!
//! ## Overview
//!
//! HAWK is a hash-and-sign signature scheme over NTRU lattices. This
//! crate implements the precision-critical core (the parameter
//! registry, the bit-level codec, negacyclic convolution, the SHAKE256
//! derivation pipeline, and the key/signature encoders) together with
//! the key generation, signing and verification operations built on
//! them.
//!
//! This implementation is intended for **educational and experimental
//! purposes only**. It deliberately substitutes a deterministic hash
//! chain for the hard parts of the real scheme:
//!
//! - no NTRU equation is solved; the secret basis completion (F, G) is
//!   a fixed constant behind the [`solver::BasisSolver`] seam,
//! - no discrete Gaussian is sampled against a secret basis,
//! - verification recomputes the signature coefficients from public
//!   data instead of checking a norm bound.
//!
//! Everything is a pure function of the caller-supplied seed, so keys
//! and signatures are exactly reproducible. Equally deliberately, they
//! offer none of the real scheme's security.
//!
//! ## Parameter Sets
//!
//! - [`params::HAWK_256`]: challenge variant
//! - [`params::HAWK_512`]: NIST Level 1 target
//! - [`params::HAWK_1024`]: NIST Level 5 target
//!
//! ## Example
//!
//! ```
//! use pqsigs_hawk::{keygen_512, sign, verify, Seed};
//!
//! let seed = Seed::from_u64(0);
//! let keypair = keygen_512(&seed).unwrap();
//! let sig = sign(&keypair.secret, b"hello world", &seed).unwrap();
//! assert!(verify(&keypair.public, b"hello world", sig.as_bytes()));
//! assert!(!verify(&keypair.public, b"adversary", sig.as_bytes()));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bitpack;
pub mod error;
pub mod gr;
pub mod hash;
pub mod keygen;
pub mod packing;
pub mod params;
pub mod poly;
pub mod sampler;
pub mod sign;
pub mod solver;
pub mod verify;

// Re-export main types for convenience
pub use error::{HawkError, Result};
pub use keygen::{
    keygen, keygen_1024, keygen_256, keygen_512, keygen_with_solver, KeyPair, PublicKey,
    SecretKey, Seed,
};
pub use params::{lookup, Params, ALL_PARAMS, HAWK_1024, HAWK_256, HAWK_512};
pub use sign::{sign, Signature};
pub use solver::{Basis, BasisSolver, StandInSolver};
pub use verify::verify;

// Re-export packing functions
pub use packing::{
    decode_secret_key, decode_signature, encode_public_key, encode_secret_key, encode_signature,
};
