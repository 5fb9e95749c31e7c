//! Golomb-Rice style range codec for signed coefficient vectors.
//!
//! Despite the name this is a fixed-width binary code, not the textbook
//! Golomb-Rice algorithm: each value `v` in `[low, high]` is coded as the
//! absolute offset `|v - low|` in `ceil(log2(high - low + 1))` bits,
//! least significant bit first, with no unary quotient component.
//!
//! The code is not sign-preserving: `v` and `2*low - v` produce identical
//! code words, and decoding always reconstructs the non-negative offset
//! (`code + low`). Callers that need an exact round trip must keep their
//! values at or above `low`.

use crate::error::{HawkError, Result};

/// Returns the fixed code-word width in bits for the range `[low, high]`.
///
/// Fails with [`HawkError::InvalidRange`] when `high < low`. A one-value
/// range (`high == low`) has width 0; every value then codes to nothing.
pub fn code_width(low: i64, high: i64) -> Result<u32> {
    if high < low {
        return Err(HawkError::InvalidRange { low, high });
    }
    let range = (high - low + 1) as u64;
    Ok(range.next_power_of_two().trailing_zeros())
}

/// Encodes a vector of signed values into a concatenated bit string.
///
/// Each value contributes exactly `code_width(low, high)` bits, LSB-first,
/// in input order.
pub fn compress_gr(values: &[i64], low: i64, high: i64) -> Result<Vec<u8>> {
    let width = code_width(low, high)?;
    let mut bits = Vec::with_capacity(values.len() * width as usize);
    for &v in values {
        // Offsets stay within u32 for every width used here (<= 16 bits),
        // but the unsigned_abs covers values below low as well.
        let code = (v - low).unsigned_abs() as u32;
        for i in 0..width {
            bits.push(((code >> i) & 1) as u8);
        }
    }
    Ok(bits)
}

/// Decodes `count` values from a bit string produced by [`compress_gr`].
///
/// Returns the decoded values and the number of bits consumed. Fails with
/// [`HawkError::Insufficient`] when fewer than `count * width` bits are
/// available, and [`HawkError::InvalidRange`] when `high < low`.
///
/// Decoding reconstructs `code + low` and therefore cannot distinguish a
/// value from its mirror image below `low`.
pub fn decompress_gr(
    bits: &[u8],
    count: usize,
    low: i64,
    high: i64,
) -> Result<(Vec<i64>, usize)> {
    let width = code_width(low, high)? as usize;
    let needed = count * width;
    if bits.len() < needed {
        return Err(HawkError::Insufficient {
            needed,
            available: bits.len(),
        });
    }
    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        let chunk = &bits[i * width..(i + 1) * width];
        let mut code: u32 = 0;
        for (j, &bit) in chunk.iter().enumerate() {
            code |= ((bit & 1) as u32) << j;
        }
        values.push(code as i64 + low);
    }
    Ok((values, needed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_width() {
        assert_eq!(code_width(5, 9).unwrap(), 3); // range 5
        assert_eq!(code_width(6, 10).unwrap(), 3);
        assert_eq!(code_width(0, 7).unwrap(), 3); // exact power of two
        assert_eq!(code_width(0, 8).unwrap(), 4);
        assert_eq!(code_width(3, 3).unwrap(), 0); // single-value range
    }

    #[test]
    fn test_invalid_range_both_paths() {
        assert!(matches!(
            compress_gr(&[1, 2], 9, 5),
            Err(HawkError::InvalidRange { low: 9, high: 5 })
        ));
        assert!(matches!(
            decompress_gr(&[0, 1, 0], 1, 9, 5),
            Err(HawkError::InvalidRange { low: 9, high: 5 })
        ));
    }

    #[test]
    fn test_roundtrip_in_range() {
        let values = [5i64, 9, 6, 8, 7, 5, 9, 6];
        let bits = compress_gr(&values, 5, 9).unwrap();
        assert_eq!(bits.len(), values.len() * 3);
        let (decoded, consumed) = decompress_gr(&bits, values.len(), 5, 9).unwrap();
        assert_eq!(decoded, values);
        assert_eq!(consumed, bits.len());
    }

    #[test]
    fn test_mirror_values_encode_identically() {
        // v and 2*low - v share a code word; the decoder always returns
        // the representative at or above low.
        let low = 3;
        let high = 7;
        let v = 5i64;
        let mirror = 2 * low - v; // 1
        let bits_v = compress_gr(&[v], low, high).unwrap();
        let bits_m = compress_gr(&[mirror], low, high).unwrap();
        assert_eq!(bits_v, bits_m);
        let (decoded, _) = decompress_gr(&bits_m, 1, low, high).unwrap();
        assert_eq!(decoded, [v]);
    }

    #[test]
    fn test_decompress_insufficient() {
        let bits = compress_gr(&[5, 6, 7], 5, 9).unwrap();
        let err = decompress_gr(&bits, 4, 5, 9).unwrap_err();
        assert_eq!(
            err,
            HawkError::Insufficient {
                needed: 12,
                available: 9
            }
        );
    }

    #[test]
    fn test_decompress_consumes_prefix_only() {
        let mut bits = compress_gr(&[6, 8], 5, 9).unwrap();
        bits.extend_from_slice(&[1, 1, 1, 1]); // trailing garbage
        let (decoded, consumed) = decompress_gr(&bits, 2, 5, 9).unwrap();
        assert_eq!(decoded, [6, 8]);
        assert_eq!(consumed, 6);
    }

    #[test]
    fn test_values_below_low_fold_in() {
        // Offsets are taken by absolute value, so values below low decode
        // to their mirror above low.
        let bits = compress_gr(&[0, 1, -1, 5, -3, 7, 2, -8], 3, 7).unwrap();
        let (decoded, _) = decompress_gr(&bits, 8, 3, 7).unwrap();
        for v in decoded {
            assert!(v >= 3);
        }
    }

    #[test]
    fn test_zero_width_range() {
        let bits = compress_gr(&[3, 3, 3], 3, 3).unwrap();
        assert!(bits.is_empty());
        let (decoded, consumed) = decompress_gr(&bits, 3, 3, 3).unwrap();
        assert_eq!(decoded, [3, 3, 3]);
        assert_eq!(consumed, 0);
    }
}
