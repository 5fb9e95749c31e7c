//! Deterministic noise sampling from SHAKE256 output.
//!
//! The main entry point is [`regenerate_fg`], which expands a
//! key-generation seed into the two secret noise polynomials through the
//! 4-way interleaved expansion of [`shake256_x4`]. The interleaving
//! emulates a four-lane SHAKE256 instance: each lane hashes the seed with
//! a distinct domain-separation byte appended.
//!
//! Two standalone samplers round out the module: a centered-binomial
//! sampler over an explicit bit supply and a toy Box-Muller Gaussian
//! sampler, neither of which participates in key generation.

use rand::Rng;
use rand::RngCore;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

use crate::bitpack::bytes_to_bits_le;
use crate::error::{HawkError, Result};

/// Four-lane interleaved SHAKE256 expansion.
///
/// Each lane `j` in `0..4` squeezes `ceil(out_bytes / 4)` bytes of
/// SHAKE256(seed || [j]); the lane outputs are concatenated in lane order
/// and truncated to exactly `out_bytes`.
pub fn shake256_x4(seed: &[u8], out_bytes: usize) -> Vec<u8> {
    let per = (out_bytes + 3) / 4;
    let mut res = Vec::with_capacity(per * 4);
    for j in 0u8..4 {
        let mut hasher = Shake256::default();
        hasher.update(seed);
        hasher.update(&[j]);
        let mut reader = hasher.finalize_xof();
        let mut lane = vec![0u8; per];
        reader.read(&mut lane);
        res.extend_from_slice(&lane);
    }
    res.truncate(out_bytes);
    res
}

/// Regenerates the secret noise pair (f, g) from a key-generation seed.
///
/// Draws `2 * (n/64) * n` bits (LSB-first per byte) from the interleaved
/// expansion and partitions them into `2n` groups of `n/64` bits. Each
/// coefficient is the group's popcount recentered by `(n/64)/2`, giving a
/// bounded value in `[-(n/128), n/128]`. The first n groups form f, the
/// next n form g.
///
/// `eta` is part of the sampling contract but unused by this grouping.
pub fn regenerate_fg(kgseed: &[u8], n: usize, _eta: usize) -> (Vec<i64>, Vec<i64>) {
    let b = n / 64;
    let out_bits = 2 * b * n;
    let out_bytes = (out_bits + 7) / 8;
    let y = shake256_x4(kgseed, out_bytes);
    let mut bits = bytes_to_bits_le(&y);
    bits.truncate(out_bits);

    let half = (b / 2) as i64;
    let group_sum = |start: usize| -> i64 {
        bits[start..start + b].iter().map(|&bit| bit as i64).sum()
    };

    let mut f = Vec::with_capacity(n);
    for i in 0..n {
        f.push(group_sum(i * b) - half);
    }
    let mut g = Vec::with_capacity(n);
    for i in 0..n {
        g.push(group_sum((i + n) * b) - half);
    }
    (f, g)
}

/// Samples n coefficients from a centered binomial distribution over an
/// explicit bit supply.
///
/// Consumes `2 * eta` bits per coefficient: the difference between the
/// popcounts of the first and second eta-bit halves. Fails when `eta` is
/// zero or when fewer than `2 * eta * n` bits are supplied.
pub fn centered_binomial_from_bits(bits: &[u8], n: usize, eta: usize) -> Result<Vec<i64>> {
    if eta == 0 {
        return Err(HawkError::InvalidInput {
            field: "eta",
            reason: "must be positive",
        });
    }
    let needed = 2 * eta * n;
    if bits.len() < needed {
        return Err(HawkError::Insufficient {
            needed,
            available: bits.len(),
        });
    }
    let mut out = Vec::with_capacity(n);
    let mut pos = 0;
    for _ in 0..n {
        let a: i64 = bits[pos..pos + eta].iter().map(|&b| b as i64).sum();
        let b: i64 = bits[pos + eta..pos + 2 * eta].iter().map(|&b| b as i64).sum();
        out.push(a - b);
        pos += 2 * eta;
    }
    Ok(out)
}

/// Draws k rounded Gaussian samples with standard deviation sigma.
///
/// Box-Muller over the supplied RNG. This is a toy sampler for
/// experimentation; it makes no constant-time or tail-accuracy claims and
/// is not used by key generation or signing.
pub fn gaussian_samples<R: RngCore>(rng: &mut R, k: usize, sigma: f64) -> Vec<i64> {
    let mut samples = Vec::with_capacity(k);
    for _ in 0..k {
        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();
        let z = (-2.0 * u1.max(1e-12).ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        samples.push((z * sigma).round() as i64);
    }
    samples
}
