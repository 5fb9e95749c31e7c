//! Bit-level conversion between byte buffers and bit vectors.
//!
//! Two expansion orders coexist in the wire formats and both matter:
//!
//! - [`bytes_to_bits`] / [`bits_to_bytes`] use the MSB-first convention
//!   (bit 0 of each 8-bit group is the byte's most significant bit). This
//!   is the order used when packing assembled bit strings into the final
//!   key and signature buffers, and when re-expanding those buffers.
//! - [`bytes_to_bits_le`] uses the LSB-first convention. Seed, salt and
//!   hash-point bytes enter the bit domain in this order before being
//!   packed MSB-first, so a seed byte lands bit-reversed in the packed
//!   output. The two orders are NOT interchangeable.
//!
//! Bits are represented as `u8` values restricted to 0 and 1.

/// Expands a byte buffer to bits, most significant bit of each byte first.
///
/// The output length is exactly `8 * buf.len()`.
pub fn bytes_to_bits(buf: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(buf.len() * 8);
    for &byte in buf {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1);
        }
    }
    bits
}

/// Expands a byte buffer to bits, least significant bit of each byte first.
pub fn bytes_to_bits_le(buf: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(buf.len() * 8);
    for &byte in buf {
        for i in 0..8 {
            bits.push((byte >> i) & 1);
        }
    }
    bits
}

/// Packs a bit vector into bytes, most significant bit first.
///
/// The input is right-padded with zero bits to a multiple of 8; within
/// each group of 8, the first bit becomes the byte's MSB.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((bits.len() + 7) / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (j, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - j);
        }
        out.push(byte);
    }
    out
}

/// Packs a bit vector into bytes, least significant bit first.
///
/// Inverse of [`bytes_to_bits_le`]: within each group of 8, the first
/// bit becomes the byte's LSB. Used to recover seed, salt and hash bytes
/// from bit strings that entered the bit domain LSB-first.
pub fn bits_to_bytes_le(bits: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((bits.len() + 7) / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (j, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << j;
        }
        out.push(byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_bits_msb_first() {
        assert_eq!(bytes_to_bits(&[0b1000_0001]), [1, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(bytes_to_bits(&[0x01]), [0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_bytes_to_bits_le_lsb_first() {
        assert_eq!(bytes_to_bits_le(&[0b1000_0001]), [1, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(bytes_to_bits_le(&[0x01]), [1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_roundtrip() {
        let b = [0x01u8, 0xfe, 0x7f];
        assert_eq!(bits_to_bytes(&bytes_to_bits(&b)), b);
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let all: Vec<u8> = (0..=255).collect();
        assert_eq!(bits_to_bytes(&bytes_to_bits(&all)), all);
    }

    #[test]
    fn test_bits_to_bytes_pads_with_zeros() {
        // 3 bits pad out to one byte, high bits first.
        assert_eq!(bits_to_bytes(&[1, 0, 1]), [0b1010_0000]);
        // 9 bits pad out to two bytes.
        assert_eq!(
            bits_to_bytes(&[1, 1, 1, 1, 1, 1, 1, 1, 1]),
            [0xff, 0b1000_0000]
        );
    }

    #[test]
    fn test_empty() {
        assert!(bytes_to_bits(&[]).is_empty());
        assert!(bytes_to_bits_le(&[]).is_empty());
        assert!(bits_to_bytes(&[]).is_empty());
    }

    #[test]
    fn test_le_roundtrip() {
        let b = [0x01u8, 0xfe, 0x7f, 0x00, 0xff];
        assert_eq!(bits_to_bytes_le(&bytes_to_bits_le(&b)), b);
    }

    #[test]
    fn test_le_pack_recovers_msb_expanded_le_bits() {
        // A byte expanded LSB-first and packed MSB-first is bit-reversed;
        // re-expanding MSB-first and packing LSB-first undoes it.
        let salt = [0xa5u8, 0x3c, 0x01];
        let packed = bits_to_bytes(&bytes_to_bits_le(&salt));
        let recovered = bits_to_bytes_le(&bytes_to_bits(&packed));
        assert_eq!(recovered, salt);
    }

    #[test]
    fn test_le_and_msb_orders_differ() {
        // The two expansions agree only on palindromic bytes.
        assert_ne!(bytes_to_bits(&[0x01]), bytes_to_bits_le(&[0x01]));
        assert_eq!(bytes_to_bits(&[0x81]), bytes_to_bits_le(&[0x81]));
    }
}
