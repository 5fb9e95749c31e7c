//! Parameter sets for HAWK.
//!
//! This module defines the three HAWK parameter sets:
//! - HAWK-256: challenge variant (~64-bit security target)
//! - HAWK-512: NIST Level 1 (~128-bit security target)
//! - HAWK-1024: NIST Level 5 (~256-bit security target)
//!
//! All operate in the ring Z[X]/(X^n + 1). Every bit-length constant below
//! feeds directly into the key and signature layouts; changing any of them
//! makes previously produced keys and signatures undecodable.

use crate::error::{HawkError, Result};

/// Parameters for the HAWK signature scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Registry name of this parameter set.
    pub name: &'static str,

    /// Polynomial degree n (256, 512 or 1024).
    pub n: usize,

    /// Noise width for the binomial sampler.
    pub eta: usize,

    /// Salt length in bits.
    pub salt_bits: usize,

    /// Key-generation seed length in bits.
    pub kgseed_bits: usize,

    /// Public-key hash length in bits.
    pub hpub_bits: usize,

    /// Encoded public key length in bits.
    pub pub_bits: usize,

    /// Encoded signature length in bits.
    pub sig_bits: usize,

    /// Lower codec bound for the q00 half of the public key.
    pub low_q00: i64,

    /// Upper codec bound for the q00 half of the public key.
    pub high_q00: i64,

    /// Lower codec bound for s1 (and the q01 half of the public key).
    pub low_s1: i64,

    /// Upper codec bound for s1 (and the q01 half of the public key).
    pub high_s1: i64,
}

impl Params {
    /// Returns the salt length in bytes.
    #[inline]
    pub const fn salt_bytes(&self) -> usize {
        self.salt_bits / 8
    }

    /// Returns the key-generation seed length in bytes.
    #[inline]
    pub const fn kgseed_bytes(&self) -> usize {
        self.kgseed_bits / 8
    }

    /// Returns the public-key hash length in bytes.
    #[inline]
    pub const fn hpub_bytes(&self) -> usize {
        self.hpub_bits / 8
    }

    /// Returns the encoded public key length in bytes.
    ///
    /// `pub_bits` is not byte-aligned for every parameter set (HAWK-256
    /// uses 450 bits), so the byte form rounds up.
    #[inline]
    pub const fn pk_bytes(&self) -> usize {
        (self.pub_bits + 7) / 8
    }

    /// Returns the encoded secret key length in bytes.
    ///
    /// The concatenated bit count (kgseed, F mod 2, G mod 2, public-key
    /// hash) is a multiple of 8 for every registry entry.
    #[inline]
    pub const fn sk_bytes(&self) -> usize {
        (self.kgseed_bits + 2 * self.n + self.hpub_bits + 7) / 8
    }

    /// Returns the encoded signature length in bytes.
    #[inline]
    pub const fn sig_bytes(&self) -> usize {
        (self.sig_bits + 7) / 8
    }
}

/// HAWK-256 parameters (challenge variant, NOT for production security).
pub const HAWK_256: Params = Params {
    name: "hawk-256",
    n: 256,
    eta: 2,
    salt_bits: 112,
    kgseed_bits: 128,
    hpub_bits: 128,
    pub_bits: 450,
    sig_bits: 112 + 256 * 3,
    low_q00: 5,
    high_q00: 9,
    low_s1: 5,
    high_s1: 9,
};

/// HAWK-512 parameters (NIST Level 1, ~128-bit security target).
pub const HAWK_512: Params = Params {
    name: "hawk-512",
    n: 512,
    eta: 4,
    salt_bits: 192,
    kgseed_bits: 192,
    hpub_bits: 256,
    pub_bits: 1024,
    sig_bits: 192 + 512 * 3,
    low_q00: 5,
    high_q00: 9,
    low_s1: 5,
    high_s1: 9,
};

/// HAWK-1024 parameters (NIST Level 5, ~256-bit security target).
pub const HAWK_1024: Params = Params {
    name: "hawk-1024",
    n: 1024,
    eta: 8,
    salt_bits: 320,
    kgseed_bits: 320,
    hpub_bits: 512,
    pub_bits: 2440,
    sig_bits: 320 + 1024 * 3,
    low_q00: 6,
    high_q00: 10,
    low_s1: 6,
    high_s1: 10,
};

/// All supported parameter sets, in registry order.
pub const ALL_PARAMS: [&Params; 3] = [&HAWK_256, &HAWK_512, &HAWK_1024];

/// Looks up a parameter set by registry name.
///
/// Fails with [`HawkError::UnknownParameter`] for anything other than the
/// three fixed identifiers. The returned reference is `'static`; parameter
/// sets are immutable and safe to share across threads.
pub fn lookup(name: &str) -> Result<&'static Params> {
    match name {
        "hawk-256" => Ok(&HAWK_256),
        "hawk-512" => Ok(&HAWK_512),
        "hawk-1024" => Ok(&HAWK_1024),
        _ => Err(HawkError::UnknownParameter {
            name: name.to_string(),
        }),
    }
}
