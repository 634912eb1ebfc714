use std::sync::OnceLock;

use crate::field_element::FieldElement;

/// Ring degree: polynomials live in ℤ_q[X]/(X^N + 1).
pub const N: usize = 256;

/// Primitive 512th root of unity modulo q.
const ZETA: u32 = 1753;

/// Twiddle factors in bit-reversed order: `zetas[i] = ζ^brv8(i)`.
///
/// Computed once from ζ; index 0 is never touched by the butterflies.
fn zetas() -> &'static [FieldElement; N] {
    static ZETAS: OnceLock<[FieldElement; N]> = OnceLock::new();
    ZETAS.get_or_init(|| {
        let zeta = FieldElement::new(ZETA);
        let mut table = [FieldElement::ZERO; N];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = zeta.mod_pow(u32::from((i as u8).reverse_bits()));
        }
        table
    })
}

/// In-place forward negacyclic NTT.
///
/// Output coefficients come out in the bit-reversed evaluation order of the
/// reference implementation; [`intt`] expects exactly this order, and
/// coefficient-wise products of two such transforms realize negacyclic
/// convolution.
pub fn ntt(a: &mut [FieldElement; N]) {
    let zetas = zetas();
    let mut k = 0;
    let mut len = N / 2;
    while len > 0 {
        let mut start = 0;
        while start < N {
            k += 1;
            let zeta = zetas[k];
            for j in start..start + len {
                let t = zeta * a[j + len];
                a[j + len] = a[j] - t;
                a[j] = a[j] + t;
            }
            start += 2 * len;
        }
        len >>= 1;
    }
}

/// In-place inverse NTT, including the final scaling by N⁻¹ mod q.
pub fn intt(a: &mut [FieldElement; N]) {
    let zetas = zetas();
    let mut k = N;
    let mut len = 1;
    while len < N {
        let mut start = 0;
        while start < N {
            k -= 1;
            let zeta = -zetas[k];
            for j in start..start + len {
                let t = a[j];
                a[j] = t + a[j + len];
                a[j + len] = zeta * (t - a[j + len]);
            }
            start += 2 * len;
        }
        len <<= 1;
    }

    let n_inv = FieldElement::new(N as u32).inverse();
    for c in a.iter_mut() {
        *c *= n_inv;
    }
}

/// Coefficient-wise product of two polynomials in NTT form.
pub fn pointwise_mul(
    a: &[FieldElement; N],
    b: &[FieldElement; N],
) -> [FieldElement; N] {
    std::array::from_fn(|i| a[i] * b[i])
}
