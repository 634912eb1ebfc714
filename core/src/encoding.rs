//! Bit-level serialization of polynomial vectors and hint vectors.
//!
//! Bit order is little-endian within each byte: bit 0 of byte 0 is bit 0 of
//! coefficient 0. A polynomial packed at width `bits` occupies exactly
//! 32·`bits` bytes.

use math::field_element::FieldElement;
use math::ntt::N;
use math::poly::Polynomial;
use math::poly_vector::PolynomialVector;

/// Append the `bits`-wide packing of `poly` to `out`.
///
/// Every coefficient must already lie in `[0, 2^bits)`.
pub fn bit_pack_into(poly: &Polynomial, bits: usize, out: &mut Vec<u8>) {
    debug_assert!((1..=23).contains(&bits));
    let mask = (1u64 << bits) - 1;
    let mut acc = 0u64;
    let mut acc_bits = 0;
    for c in poly.coeffs() {
        debug_assert!(u64::from(c.value()) <= mask, "coefficient too wide");
        acc |= (u64::from(c.value()) & mask) << acc_bits;
        acc_bits += bits;
        while acc_bits >= 8 {
            out.push((acc & 0xFF) as u8);
            acc >>= 8;
            acc_bits -= 8;
        }
    }
    // 256·bits is a multiple of 8, so the accumulator always drains.
    debug_assert_eq!(acc_bits, 0);
}

/// Decode one `bits`-wide packed polynomial from exactly 32·`bits` bytes.
pub fn bit_unpack(bytes: &[u8], bits: usize) -> Polynomial {
    debug_assert_eq!(bytes.len(), 32 * bits);
    let mask = (1u64 << bits) - 1;
    let mut coeffs = [FieldElement::ZERO; N];
    let mut acc = 0u64;
    let mut acc_bits = 0;
    let mut idx = 0;
    for slot in &mut coeffs {
        while acc_bits < bits {
            acc |= u64::from(bytes[idx]) << acc_bits;
            idx += 1;
            acc_bits += 8;
        }
        *slot = FieldElement::new((acc & mask) as u32);
        acc >>= bits;
        acc_bits -= bits;
    }
    Polynomial::from_coeffs(coeffs)
}

/// [`bit_pack_into`] over every entry of a vector.
pub fn pack_vec_into(v: &PolynomialVector, bits: usize, out: &mut Vec<u8>) {
    for poly in v.iter() {
        bit_pack_into(poly, bits, out);
    }
}

/// Pack a vector into a fresh buffer of `len·32·bits` bytes.
pub fn pack_vec(v: &PolynomialVector, bits: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(v.len() * 32 * bits);
    pack_vec_into(v, bits, &mut out);
    out
}

/// Decode `len` packed polynomials.
pub fn unpack_vec(bytes: &[u8], bits: usize, len: usize) -> PolynomialVector {
    debug_assert_eq!(bytes.len(), len * 32 * bits);
    let stride = 32 * bits;
    PolynomialVector::new(
        (0..len)
            .map(|i| bit_unpack(&bytes[i * stride..(i + 1) * stride], bits))
            .collect(),
    )
}

/// Encode the hint vector into ω + k bytes.
///
/// The first ω bytes list the set-bit positions in order (all of
/// polynomial 0, then polynomial 1, …), zero-padded; the final k bytes are
/// the running counts per polynomial. The caller guarantees at most ω set
/// bits.
pub fn encode_hints(h: &PolynomialVector, omega: usize) -> Vec<u8> {
    let mut out = vec![0u8; omega + h.len()];
    let mut idx = 0;
    for (i, poly) in h.iter().enumerate() {
        for (pos, c) in poly.coeffs().iter().enumerate() {
            if c.value() != 0 {
                debug_assert!(idx < omega, "hint weight exceeds omega");
                out[idx] = pos as u8;
                idx += 1;
            }
        }
        out[omega + i] = idx as u8;
    }
    out
}

/// Decode ω + k hint bytes; `None` marks a malformed encoding.
///
/// Rejected inputs: a running count that decreases or exceeds ω, positions
/// that fail to strictly increase within one polynomial, and nonzero
/// padding past the last declared count.
pub fn decode_hints(
    bytes: &[u8],
    k: usize,
    omega: usize,
) -> Option<PolynomialVector> {
    debug_assert_eq!(bytes.len(), omega + k);
    let mut polys = vec![Polynomial::zero(); k];
    let mut idx = 0usize;
    for (i, poly) in polys.iter_mut().enumerate() {
        let count = usize::from(bytes[omega + i]);
        if count < idx || count > omega {
            return None;
        }
        for j in idx..count {
            if j > idx && bytes[j] <= bytes[j - 1] {
                return None;
            }
            poly.coeffs_mut()[usize::from(bytes[j])] = FieldElement::ONE;
        }
        idx = count;
    }
    if bytes[idx..omega].iter().any(|&b| b != 0) {
        return None;
    }
    Some(PolynomialVector::new(polys))
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::*;

    fn random_poly_with_width(
        rng: &mut ChaCha20Rng,
        bits: usize,
    ) -> Polynomial {
        let bound = 1u32 << bits;
        let coeffs: [FieldElement; N] =
            std::array::from_fn(|_| FieldElement::new(rng.random_range(0..bound)));
        Polynomial::from_coeffs(coeffs)
    }

    #[test]
    fn pack_unpack_roundtrip_over_all_supported_widths() {
        let mut rng = ChaCha20Rng::seed_from_u64(0xb175);
        for bits in [3usize, 4, 6, 10, 13, 18, 20] {
            let poly = random_poly_with_width(&mut rng, bits);
            let mut packed = Vec::new();
            bit_pack_into(&poly, bits, &mut packed);
            assert_eq!(packed.len(), 32 * bits);
            assert_eq!(bit_unpack(&packed, bits), poly, "width {bits}");
        }
    }

    #[test]
    fn packing_is_little_endian_within_bytes() {
        // 10-bit coefficients 1 and 2: byte 0 is 0b0000_0001, byte 1 holds
        // the low six bits of coefficient 1 shifted past the remaining two.
        let mut coeffs = [FieldElement::ZERO; N];
        coeffs[0] = FieldElement::new(1);
        coeffs[1] = FieldElement::new(2);
        let mut packed = Vec::new();
        bit_pack_into(&Polynomial::from_coeffs(coeffs), 10, &mut packed);
        assert_eq!(packed[0], 0b0000_0001);
        assert_eq!(packed[1], 0b0000_1000);
        assert_eq!(packed[2], 0);
    }

    #[test]
    fn vector_packing_concatenates_entries() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x7ac5);
        let v = PolynomialVector::new(vec![
            random_poly_with_width(&mut rng, 6),
            random_poly_with_width(&mut rng, 6),
        ]);
        let packed = pack_vec(&v, 6);
        assert_eq!(packed.len(), 2 * 32 * 6);
        assert_eq!(unpack_vec(&packed, 6, 2), v);

        let mut single = Vec::new();
        bit_pack_into(&v[0], 6, &mut single);
        assert_eq!(&packed[..32 * 6], single.as_slice());
    }

    fn sample_hints(k: usize, positions: &[(usize, usize)]) -> PolynomialVector {
        let mut h = PolynomialVector::zero(k);
        for &(poly, pos) in positions {
            h[poly].coeffs_mut()[pos] = FieldElement::ONE;
        }
        h
    }

    #[test]
    fn hint_encoding_roundtrips() {
        let omega = 80;
        let h = sample_hints(4, &[(0, 3), (0, 17), (1, 250), (3, 0), (3, 255)]);
        let bytes = encode_hints(&h, omega);
        assert_eq!(bytes.len(), omega + 4);
        assert_eq!(decode_hints(&bytes, 4, omega), Some(h));
    }

    #[test]
    fn empty_hint_vector_encodes_to_zeros() {
        let omega = 55;
        let h = PolynomialVector::zero(6);
        let bytes = encode_hints(&h, omega);
        assert!(bytes.iter().all(|&b| b == 0));
        assert_eq!(decode_hints(&bytes, 6, omega), Some(h));
    }

    #[test]
    fn decreasing_running_counts_are_rejected() {
        let omega = 80;
        let h = sample_hints(4, &[(0, 1), (0, 2), (1, 9)]);
        let mut bytes = encode_hints(&h, omega);
        // Counts are [2, 3, 3, 3]; force a decrease.
        bytes[omega + 1] = 1;
        assert_eq!(decode_hints(&bytes, 4, omega), None);
    }

    #[test]
    fn counts_beyond_omega_are_rejected() {
        let omega = 80;
        let h = sample_hints(4, &[(0, 1)]);
        let mut bytes = encode_hints(&h, omega);
        bytes[omega + 3] = (omega + 1) as u8;
        assert_eq!(decode_hints(&bytes, 4, omega), None);
    }

    #[test]
    fn non_increasing_positions_are_rejected() {
        let omega = 80;
        let h = sample_hints(4, &[(0, 5), (0, 6)]);
        let mut bytes = encode_hints(&h, omega);
        bytes[0] = 6;
        bytes[1] = 6;
        assert_eq!(decode_hints(&bytes, 4, omega), None);

        bytes[0] = 7;
        assert_eq!(decode_hints(&bytes, 4, omega), None);
    }

    #[test]
    fn nonzero_padding_is_rejected() {
        let omega = 80;
        let h = sample_hints(4, &[(2, 100)]);
        let mut bytes = encode_hints(&h, omega);
        bytes[omega - 1] = 1;
        assert_eq!(decode_hints(&bytes, 4, omega), None);
    }
}
