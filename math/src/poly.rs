use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use rand::Rng;

use crate::field_element::FieldElement;
use crate::ntt::{self, N};

/// Polynomial in R_q = ℤ_q[X]/(X^N + 1), N = 256.
///
/// Whether the coefficients are in standard or NTT form is a convention
/// carried by the surrounding context, never mixed silently.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: [FieldElement; N],
}

impl Polynomial {
    /// Create zero polynomial.
    pub const fn zero() -> Self {
        Self {
            coeffs: [FieldElement::ZERO; N],
        }
    }

    pub const fn from_coeffs(coeffs: [FieldElement; N]) -> Self {
        Self { coeffs }
    }

    pub const fn coeffs(&self) -> &[FieldElement; N] {
        &self.coeffs
    }

    pub fn coeffs_mut(&mut self) -> &mut [FieldElement; N] {
        &mut self.coeffs
    }

    /// In-place forward NTT.
    pub fn ntt(&mut self) {
        ntt::ntt(&mut self.coeffs);
    }

    /// In-place inverse NTT.
    pub fn intt(&mut self) {
        ntt::intt(&mut self.coeffs);
    }

    /// Coefficient-wise product; both operands must be in NTT form.
    #[must_use]
    pub fn pointwise(&self, other: &Self) -> Self {
        Self {
            coeffs: ntt::pointwise_mul(&self.coeffs, &other.coeffs),
        }
    }

    /// Full product in R_q via an NTT round-trip; operands in standard form.
    #[must_use]
    pub fn ntt_multiply(&self, other: &Self) -> Self {
        let mut a = *self;
        let mut b = *other;
        a.ntt();
        b.ntt();
        let mut prod = a.pointwise(&b);
        prod.intt();
        prod
    }

    /// Largest centered coefficient magnitude.
    pub fn norm_infinity(&self) -> u32 {
        self.coeffs
            .iter()
            .map(|c| c.inf_norm())
            .max()
            .unwrap_or(0)
    }

    /// Number of nonzero coefficients.
    pub fn count_nonzero(&self) -> usize {
        self.coeffs.iter().filter(|c| c.value() != 0).count()
    }

    /// Replace every coefficient c with `(x − c) mod q`.
    ///
    /// Involution used to recenter the bounded encodings (η − s, γ1 − z,
    /// 2^(d−1) − t0).
    pub fn sub_from(&mut self, x: u32) {
        let x = FieldElement::new(x);
        for c in &mut self.coeffs {
            *c = x - *c;
        }
    }

    /// Multiply every coefficient by 2^d mod q.
    pub fn shl(&mut self, d: u32) {
        let factor = FieldElement::new(2).mod_pow(d);
        for c in &mut self.coeffs {
            *c *= factor;
        }
    }

    /// Uniformly random polynomial with coefficients in `[0, bound)`
    /// (test and bench support).
    pub fn random(bound: u32) -> Self {
        let mut rng = rand::rng();
        Self {
            coeffs: std::array::from_fn(|_| {
                FieldElement::new(rng.random_range(0..bound))
            }),
        }
    }
}

impl From<[FieldElement; N]> for Polynomial {
    fn from(coeffs: [FieldElement; N]) -> Self {
        Self { coeffs }
    }
}

impl From<[i32; N]> for Polynomial {
    fn from(coeffs: [i32; N]) -> Self {
        Self {
            coeffs: std::array::from_fn(|i| FieldElement::from(coeffs[i])),
        }
    }
}

impl From<&[i32]> for Polynomial {
    fn from(coeffs: &[i32]) -> Self {
        let mut out = [FieldElement::ZERO; N];
        for (slot, &c) in out.iter_mut().zip(coeffs.iter()) {
            *slot = FieldElement::from(c);
        }
        Self { coeffs: out }
    }
}

impl From<Vec<i32>> for Polynomial {
    fn from(coeffs: Vec<i32>) -> Self {
        Self::from(coeffs.as_slice())
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            coeffs: std::array::from_fn(|i| self.coeffs[i] + other.coeffs[i]),
        }
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            coeffs: std::array::from_fn(|i| self.coeffs[i] - other.coeffs[i]),
        }
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coeffs: std::array::from_fn(|i| -self.coeffs[i]),
        }
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, other: Self) {
        for (c, o) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *c += *o;
        }
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, other: Self) {
        for (c, o) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *c -= *o;
        }
    }
}
