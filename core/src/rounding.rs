//! Rounding and hint primitives behind signature compression.
//!
//! Everything acts coefficient-wise; the `_vec` variants broadcast over
//! polynomial vectors. High bits and hint bits are small unsigned values
//! and travel as canonical field elements so they can be bit-packed
//! directly.

use math::field_element::FieldElement;
use math::ntt::N;
use math::poly::Polynomial;
use math::poly_vector::PolynomialVector;

/// Split r into (r1, r0) with r = r1·2^d + r0 and r0 ∈ (−2^(d−1), 2^(d−1)].
pub fn power2round(r: FieldElement, d: u32) -> (u32, i32) {
    let v = r.value() as i32;
    let mut r0 = v & ((1 << d) - 1);
    if r0 > 1 << (d - 1) {
        r0 -= 1 << d;
    }
    (((v - r0) >> d) as u32, r0)
}

/// Split r into (r1, r0) with r ≡ r1·α + r0 (mod q) and r0 ∈ (−α/2, α/2].
///
/// The top slot wraps: when r − r0 = q − 1, r1 is forced to 0 and r0
/// absorbs the off-by-one, landing in (−α/2, 0].
pub fn decompose(r: FieldElement, alpha: u32) -> (u32, i32) {
    let v = i64::from(r.value());
    let alpha = i64::from(alpha);
    let mut r0 = v % alpha;
    if r0 > alpha / 2 {
        r0 -= alpha;
    }
    if v - r0 == i64::from(FieldElement::P) - 1 {
        (0, (r0 - 1) as i32)
    } else {
        (((v - r0) / alpha) as u32, r0 as i32)
    }
}

/// High part of [`decompose`].
pub fn highbits(r: FieldElement, alpha: u32) -> u32 {
    decompose(r, alpha).0
}

/// Low part of [`decompose`], as a canonical field element.
pub fn lowbits(r: FieldElement, alpha: u32) -> FieldElement {
    FieldElement::from(decompose(r, alpha).1)
}

/// One hint bit: does adding z change the high bits of r?
pub fn make_hint(z: FieldElement, r: FieldElement, alpha: u32) -> bool {
    highbits(r, alpha) != highbits(r + z, alpha)
}

/// Recover the signer's high bits from the verifier's approximation r.
pub fn use_hint(hint: bool, r: FieldElement, alpha: u32) -> u32 {
    let m = (FieldElement::P - 1) / alpha;
    let (r1, r0) = decompose(r, alpha);
    if !hint {
        r1
    } else if r0 > 0 {
        (r1 + 1) % m
    } else {
        (r1 + m - 1) % m
    }
}

/// [`power2round`] over a vector; returns (t1, t0) with t0 carried mod q.
pub fn power2round_vec(
    v: &PolynomialVector,
    d: u32,
) -> (PolynomialVector, PolynomialVector) {
    let mut high = Vec::with_capacity(v.len());
    let mut low = Vec::with_capacity(v.len());
    for poly in v.iter() {
        let mut h = [FieldElement::ZERO; N];
        let mut l = [FieldElement::ZERO; N];
        for (i, c) in poly.coeffs().iter().enumerate() {
            let (r1, r0) = power2round(*c, d);
            h[i] = FieldElement::new(r1);
            l[i] = FieldElement::from(r0);
        }
        high.push(Polynomial::from_coeffs(h));
        low.push(Polynomial::from_coeffs(l));
    }
    (PolynomialVector::new(high), PolynomialVector::new(low))
}

/// [`highbits`] over a vector.
pub fn highbits_vec(v: &PolynomialVector, alpha: u32) -> PolynomialVector {
    map_coeffs(v, |c| FieldElement::new(highbits(c, alpha)))
}

/// [`lowbits`] over a vector.
pub fn lowbits_vec(v: &PolynomialVector, alpha: u32) -> PolynomialVector {
    map_coeffs(v, |c| lowbits(c, alpha))
}

/// [`make_hint`] over a vector, producing {0, 1} coefficients.
pub fn make_hint_vec(
    z: &PolynomialVector,
    r: &PolynomialVector,
    alpha: u32,
) -> PolynomialVector {
    assert_eq!(z.len(), r.len(), "hint operands must have matching length");
    let polys = z
        .iter()
        .zip(r.iter())
        .map(|(zp, rp)| {
            let mut coeffs = [FieldElement::ZERO; N];
            for (i, (zc, rc)) in
                zp.coeffs().iter().zip(rp.coeffs().iter()).enumerate()
            {
                coeffs[i] =
                    FieldElement::new(u32::from(make_hint(*zc, *rc, alpha)));
            }
            Polynomial::from_coeffs(coeffs)
        })
        .collect();
    PolynomialVector::new(polys)
}

/// [`use_hint`] over a vector.
pub fn use_hint_vec(
    h: &PolynomialVector,
    r: &PolynomialVector,
    alpha: u32,
) -> PolynomialVector {
    assert_eq!(h.len(), r.len(), "hint operands must have matching length");
    let polys = h
        .iter()
        .zip(r.iter())
        .map(|(hp, rp)| {
            let mut coeffs = [FieldElement::ZERO; N];
            for (i, (hc, rc)) in
                hp.coeffs().iter().zip(rp.coeffs().iter()).enumerate()
            {
                coeffs[i] = FieldElement::new(use_hint(
                    hc.value() != 0,
                    *rc,
                    alpha,
                ));
            }
            Polynomial::from_coeffs(coeffs)
        })
        .collect();
    PolynomialVector::new(polys)
}

fn map_coeffs(
    v: &PolynomialVector,
    f: impl Fn(FieldElement) -> FieldElement,
) -> PolynomialVector {
    let polys = v
        .iter()
        .map(|poly| {
            let mut coeffs = [FieldElement::ZERO; N];
            for (i, c) in poly.coeffs().iter().enumerate() {
                coeffs[i] = f(*c);
            }
            Polynomial::from_coeffs(coeffs)
        })
        .collect();
    PolynomialVector::new(polys)
}
