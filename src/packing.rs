//! Serialization for HAWK keys and signatures.
//!
//! This module assembles and disassembles the three wire formats:
//! - Public key: two range-coded, clamped coefficient segments fitted to
//!   an exact bit length.
//! - Secret key: seed bits, F mod 2, G mod 2 and the public-key hash,
//!   concatenated and byte-packed.
//! - Signature: salt bits followed by the range-coded s1 vector, padded
//!   to an exact bit length.
//!
//! Every padding rule, bit order and truncation point here is
//! load-bearing: a one-bit deviation makes keys and signatures
//! incompatible with previously produced material.

use crate::bitpack::{bits_to_bytes, bits_to_bytes_le, bytes_to_bits, bytes_to_bits_le};
use crate::error::{HawkError, Result};
use crate::gr::{compress_gr, decompress_gr};
use crate::params::Params;
use crate::poly::clamp_poly;

// ============================================================================
// Public Key Encoding
// ============================================================================

/// Encodes a public key from the Gram-matrix polynomials q00 and q01.
///
/// Layout (bit domain, packed MSB-first at the end):
/// - the first n/2 coefficients of q00, clamped with `high_q00` and
///   range-coded with `(low_q00, high_q00)`, zero-padded to a byte
///   multiple;
/// - all n coefficients of q01, clamped with `high_s1` and range-coded
///   with `(low_s1, high_s1)`.
///
/// The concatenation is zero-padded or truncated to exactly `pub_bits`
/// bits. With the registry constants the natural length always exceeds
/// the target, so the tail of the q01 segment is dropped; the encoded
/// form is a lossy projection and has no decoder. If the adjusted bit
/// string still misses the target the parameter table is inconsistent
/// and key generation aborts.
pub fn encode_public_key(q00: &[i64], q01: &[i64], params: &Params) -> Result<Vec<u8>> {
    let n = params.n;
    let q00_half = clamp_poly(&q00[..n / 2], params.high_q00);
    let q01_clamped = clamp_poly(q01, params.high_s1);

    let mut y = compress_gr(&q00_half, params.low_q00, params.high_q00)?;
    while y.len() % 8 != 0 {
        y.push(0);
    }
    let y01 = compress_gr(&q01_clamped, params.low_s1, params.high_s1)?;
    y.extend_from_slice(&y01);

    let target = params.pub_bits;
    if y.len() < target {
        y.resize(target, 0);
    } else if y.len() > target {
        y.truncate(target);
    }
    if y.len() != target {
        return Err(HawkError::InternalError {
            context: "public key encoding produced unexpected length",
        });
    }
    Ok(bits_to_bytes(&y))
}

// ============================================================================
// Secret Key Encoding
// ============================================================================

/// Encodes a secret key.
///
/// Layout (bit domain, packed MSB-first):
/// - kgseed bytes expanded LSB-first,
/// - F mod 2 (n raw bits),
/// - G mod 2 (n raw bits),
/// - public-key hash bytes expanded LSB-first.
///
/// The total bit count is a multiple of 8 for every registry entry, so
/// no padding is ever introduced.
pub fn encode_secret_key(kgseed: &[u8], fmod2: &[u8], gmod2: &[u8], hpub: &[u8]) -> Vec<u8> {
    let mut bits = bytes_to_bits_le(kgseed);
    bits.extend_from_slice(fmod2);
    bits.extend_from_slice(gmod2);
    bits.extend(bytes_to_bits_le(hpub));
    bits_to_bytes(&bits)
}

/// Decodes a secret key into its four segments.
///
/// Returns `(kgseed, fmod2, gmod2, hpub)`. Fails when the buffer length
/// does not match the parameter set exactly.
pub fn decode_secret_key(
    bytes: &[u8],
    params: &Params,
) -> Result<(Vec<u8>, Vec<u8>, Vec<u8>, Vec<u8>)> {
    if bytes.len() != params.sk_bytes() {
        return Err(HawkError::InvalidInput {
            field: "secret_key",
            reason: "unexpected length",
        });
    }
    let n = params.n;
    let bits = bytes_to_bits(bytes);

    let kg_end = params.kgseed_bits;
    let f_end = kg_end + n;
    let g_end = f_end + n;
    let h_end = g_end + params.hpub_bits;

    let kgseed = bits_to_bytes_le(&bits[..kg_end]);
    let fmod2 = bits[kg_end..f_end].to_vec();
    let gmod2 = bits[f_end..g_end].to_vec();
    let hpub = bits_to_bytes_le(&bits[g_end..h_end]);
    Ok((kgseed, fmod2, gmod2, hpub))
}

// ============================================================================
// Signature Encoding
// ============================================================================

/// Encodes a signature from the salt and the coefficient vector s1.
///
/// Layout: salt bytes expanded LSB-first, followed by
/// `compress_gr(s1, low_s1, high_s1)`, zero-padded to exactly `sig_bits`
/// bits and packed MSB-first. Fails with
/// [`HawkError::SignatureOverflow`] if the natural encoding exceeds
/// `sig_bits`; that indicates a parameter-table defect and signing must
/// abort.
pub fn encode_signature(salt: &[u8], s1: &[i64], params: &Params) -> Result<Vec<u8>> {
    let mut bits = bytes_to_bits_le(salt);
    bits.extend(compress_gr(s1, params.low_s1, params.high_s1)?);

    if bits.len() > params.sig_bits {
        return Err(HawkError::SignatureOverflow {
            bits: bits.len(),
            limit: params.sig_bits,
        });
    }
    bits.resize(params.sig_bits, 0);
    Ok(bits_to_bytes(&bits))
}

/// Decodes a signature into its salt bytes and coefficient vector.
///
/// The buffer must expand to exactly `sig_bits` bits; anything else is a
/// structural failure. The caller (verification) maps every error from
/// this function to a plain `false` result.
pub fn decode_signature(bytes: &[u8], params: &Params) -> Result<(Vec<u8>, Vec<i64>)> {
    let bits = bytes_to_bits(bytes);
    if bits.len() != params.sig_bits {
        return Err(HawkError::InvalidInput {
            field: "signature",
            reason: "unexpected length",
        });
    }
    let salt = bits_to_bytes_le(&bits[..params.salt_bits]);
    let (s1, _consumed) = decompress_gr(
        &bits[params.salt_bits..],
        params.n,
        params.low_s1,
        params.high_s1,
    )?;
    Ok((salt, s1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ALL_PARAMS, HAWK_256, HAWK_512};

    #[test]
    fn test_public_key_exact_length() {
        for p in ALL_PARAMS {
            let q00 = vec![7i64; p.n];
            let q01 = vec![6i64; p.n];
            let pk = encode_public_key(&q00, &q01, p).unwrap();
            assert_eq!(pk.len(), p.pk_bytes());
        }
    }

    #[test]
    fn test_public_key_clamps_oversized_coefficients() {
        // Coefficients far outside the clamp window still encode; the
        // clamped value determines the code word, so two inputs that
        // clamp equal encode equal.
        let n = HAWK_512.n;
        let big = vec![1 << 20; n];
        let max = vec![(1i64 << HAWK_512.high_q00) - 1; n];
        let pk_big = encode_public_key(&big, &big, &HAWK_512).unwrap();
        let pk_max = encode_public_key(&max, &max, &HAWK_512).unwrap();
        assert_eq!(pk_big, pk_max);
    }

    #[test]
    fn test_public_key_depends_on_q00_prefix_only() {
        // Only the first n/2 coefficients of q00 enter the encoding.
        let n = HAWK_512.n;
        let q01 = vec![5i64; n];
        let mut q00_a = vec![6i64; n];
        let mut q00_b = vec![6i64; n];
        q00_b[n - 1] = 9;
        let pk_a = encode_public_key(&q00_a, &q01, &HAWK_512).unwrap();
        let pk_b = encode_public_key(&q00_b, &q01, &HAWK_512).unwrap();
        assert_eq!(pk_a, pk_b);

        q00_a[0] = 9;
        let pk_c = encode_public_key(&q00_a, &q01, &HAWK_512).unwrap();
        assert_ne!(pk_a, pk_c);
    }

    #[test]
    fn test_secret_key_roundtrip() {
        for p in ALL_PARAMS {
            let kgseed: Vec<u8> = (0..p.kgseed_bytes()).map(|i| (i * 37) as u8).collect();
            let fmod2: Vec<u8> = (0..p.n).map(|i| (i % 2) as u8).collect();
            let gmod2: Vec<u8> = (0..p.n).map(|i| ((i / 3) % 2) as u8).collect();
            let hpub: Vec<u8> = (0..p.hpub_bytes()).map(|i| (i * 11 + 5) as u8).collect();

            let sk = encode_secret_key(&kgseed, &fmod2, &gmod2, &hpub);
            assert_eq!(sk.len(), p.sk_bytes());

            let (kg2, f2, g2, h2) = decode_secret_key(&sk, p).unwrap();
            assert_eq!(kg2, kgseed);
            assert_eq!(f2, fmod2);
            assert_eq!(g2, gmod2);
            assert_eq!(h2, hpub);
        }
    }

    #[test]
    fn test_decode_secret_key_wrong_length() {
        let err = decode_secret_key(&[0u8; 10], &HAWK_512).unwrap_err();
        assert!(matches!(
            err,
            HawkError::InvalidInput {
                field: "secret_key",
                ..
            }
        ));
    }

    #[test]
    fn test_signature_roundtrip() {
        for p in ALL_PARAMS {
            let salt: Vec<u8> = (0..p.salt_bytes()).map(|i| (i * 19 + 3) as u8).collect();
            let s1: Vec<i64> = (0..p.n)
                .map(|i| p.low_s1 + (i as i64 % (p.high_s1 - p.low_s1 + 1)))
                .collect();

            let sig = encode_signature(&salt, &s1, p).unwrap();
            assert_eq!(sig.len(), p.sig_bytes());

            let (salt2, s1_2) = decode_signature(&sig, p).unwrap();
            assert_eq!(salt2, salt);
            assert_eq!(s1_2, s1);
        }
    }

    #[test]
    fn test_signature_overflow_detected() {
        // A salt longer than the parameter set allows pushes the natural
        // encoding past the fixed bit length.
        let salt = vec![0u8; HAWK_256.salt_bytes() + 1];
        let s1 = vec![HAWK_256.low_s1; HAWK_256.n];
        let err = encode_signature(&salt, &s1, &HAWK_256).unwrap_err();
        assert!(matches!(err, HawkError::SignatureOverflow { .. }));
    }

    #[test]
    fn test_decode_signature_wrong_length() {
        let err = decode_signature(&[0u8; 3], &HAWK_512).unwrap_err();
        assert!(matches!(
            err,
            HawkError::InvalidInput {
                field: "signature",
                ..
            }
        ));
    }

    #[test]
    fn test_decode_signature_consumes_exact_bits() {
        // The s1 segment consumes everything after the salt; the
        // registry reserves exactly 3 bits per coefficient.
        let p = &HAWK_512;
        assert_eq!(p.sig_bits - p.salt_bits, 3 * p.n);
        let sig = vec![0u8; p.sig_bytes()];
        let (salt, s1) = decode_signature(&sig, p).unwrap();
        assert_eq!(salt.len(), p.salt_bytes());
        assert_eq!(s1.len(), p.n);
        assert!(s1.iter().all(|&v| v == p.low_s1));
    }
}
