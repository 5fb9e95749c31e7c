//! SHAKE256-based derivation pipeline.
//!
//! Every piece of "randomness" in the scheme (key-generation seeds,
//! salts, message digests, hash points and signature coefficients) is a
//! deterministic SHAKE256 squeeze of caller-supplied input. No CSPRNG is
//! involved anywhere; reproducibility from the public seed is part of the
//! external contract.

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

use crate::bitpack::bytes_to_bits_le;
use crate::error::Result;
use crate::gr::code_width;

/// Squeezes `out_len` bytes of SHAKE256 output from `data`.
pub fn shake256(data: &[u8], out_len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(data);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; out_len];
    reader.read(&mut out);
    out
}

/// Expands an 8-byte little-endian seed encoding to `out_len` bytes.
///
/// Used for both the key-generation seed and the signing salt; the two
/// differ only in requested output length.
pub fn expand_seed(seed_le: &[u8; 8], out_len: usize) -> Vec<u8> {
    shake256(seed_le, out_len)
}

/// Hashes a message together with the public-key hash to a 64-byte digest.
pub fn hash_message(message: &[u8], hpub: &[u8]) -> [u8; 64] {
    let mut hasher = Shake256::default();
    hasher.update(message);
    hasher.update(hpub);
    let mut reader = hasher.finalize_xof();
    let mut out = [0u8; 64];
    reader.read(&mut out);
    out
}

/// Derives the hash point for a digest and salt.
///
/// Squeezes `2n/8` bytes of SHAKE256(digest || salt) and expands them to
/// a bit vector of length 2n, LSB-first per byte. The second half
/// (`bits[n..2n]`) is the operative half used for signature coefficients.
pub fn hash_point(digest: &[u8; 64], salt: &[u8], n: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(digest);
    hasher.update(salt);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; 2 * n / 8];
    reader.read(&mut out);
    bytes_to_bits_le(&out)
}

/// Derives one signature coefficient from the operative hash-point half.
///
/// Reads the `width`-bit chunk at `index * width` (zero-padded past the
/// end of `h1`), interprets it LSB-first, and maps it into `[low, high]`
/// by reduction modulo the range size. The chunk index runs past the
/// available bits for most coefficients at the registry widths; those
/// coefficients all derive from the implicit zero padding.
pub fn derive_coefficient(h1: &[u8], index: usize, low: i64, high: i64) -> Result<i64> {
    let width = code_width(low, high)? as usize;
    let range = (high - low + 1) as u32;
    let start = index * width;
    let mut val: u32 = 0;
    for j in 0..width {
        let bit = h1.get(start + j).copied().unwrap_or(0);
        val |= ((bit & 1) as u32) << j;
    }
    Ok(low + (val % range) as i64)
}

/// Derives the full length-n signature coefficient vector.
pub fn derive_vector(h1: &[u8], n: usize, low: i64, high: i64) -> Result<Vec<i64>> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push(derive_coefficient(h1, i, low, high)?);
    }
    Ok(out)
}
