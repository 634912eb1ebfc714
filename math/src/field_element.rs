use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{ConstOne, ConstZero, One, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Base field element ∈ ℤ_q with q = 8380417 = 2^23 − 2^13 + 1.
///
/// Stored as the canonical representative in `[0, q)`; every operation
/// returns a canonical value again, so equality is plain value equality.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq)]
pub struct FieldElement(u32);

/// Simplifies constructing [FieldElement]s.
///
/// The type [`FieldElement`] must be in scope for this macro to work.
/// See [`FieldElement::from`] for supported types.
///
/// # Examples
///
/// ```
/// use math::prelude::*;
/// let a = fe!(42);
/// let b = fe!(-12); // correctly translates to `FieldElement::P - 12`
/// let c = fe!(42 - 12);
/// assert_eq!(a + b, c);
///```
#[macro_export]
macro_rules! fe {
    ($value:expr) => {
        $crate::field_element::FieldElement::from($value)
    };
}

/// Simplifies constructing vectors of [FieldElement]s. See also [`fe!`].
#[macro_export]
macro_rules! fe_vec {
    ($b:expr; $n:expr) => {
        vec![$crate::field_element::FieldElement::from($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$($crate::field_element::FieldElement::from($b)),*]
    };
}

impl FieldElement {
    /// Dilithium prime modulus: 8380417.
    pub const P: u32 = 8_380_417;
    pub const MAX: u32 = Self::P - 1;

    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value % Self::P)
    }

    /// Canonical representative in `[0, q)`.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Magnitude of the centered representative: `min(x, q − x)`.
    ///
    /// This is the per-coefficient infinity norm the rejection bounds are
    /// stated in.
    #[inline]
    pub const fn inf_norm(self) -> u32 {
        if self.0 > Self::MAX / 2 {
            Self::P - self.0
        } else {
            self.0
        }
    }

    /// Signed representative in `(−q/2, q/2)`.
    #[inline]
    pub const fn centered(self) -> i32 {
        if self.0 > Self::MAX / 2 {
            self.0 as i32 - Self::P as i32
        } else {
            self.0 as i32
        }
    }

    #[inline]
    const fn mul_raw(a: u32, b: u32) -> u32 {
        ((a as u64 * b as u64) % Self::P as u64) as u32
    }

    /// Compute `self^exp` by square-and-multiply.
    #[must_use]
    pub const fn mod_pow(self, exp: u32) -> Self {
        let mut acc = 1u32;
        let mut base = self.0;
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                acc = Self::mul_raw(acc, base);
            }
            base = Self::mul_raw(base, base);
            e >>= 1;
        }
        Self(acc)
    }

    /// Multiplicative inverse via Fermat's little theorem.
    ///
    /// Zero maps to zero; callers never rely on inverting zero.
    #[must_use]
    pub const fn inverse(self) -> Self {
        self.mod_pow(Self::P - 2)
    }
}

impl Add for FieldElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut sum = self.0 + rhs.0;
        if sum >= Self::P {
            sum -= Self::P;
        }
        Self(sum)
    }
}

impl Sub for FieldElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut diff = self.0 + Self::P - rhs.0;
        if diff >= Self::P {
            diff -= Self::P;
        }
        Self(diff)
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(Self::mul_raw(self.0, rhs.0))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.0 == 0 {
            self
        } else {
            Self(Self::P - self.0)
        }
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Zero for FieldElement {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for FieldElement {
    fn one() -> Self {
        Self::ONE
    }
}

impl ConstZero for FieldElement {
    const ZERO: Self = Self::ZERO;
}

impl ConstOne for FieldElement {
    const ONE: Self = Self::ONE;
}

impl From<u8> for FieldElement {
    fn from(value: u8) -> Self {
        Self(u32::from(value))
    }
}

impl From<u16> for FieldElement {
    fn from(value: u16) -> Self {
        Self(u32::from(value))
    }
}

impl From<u32> for FieldElement {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self((value % u64::from(Self::P)) as u32)
    }
}

impl From<usize> for FieldElement {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<i32> for FieldElement {
    fn from(value: i32) -> Self {
        Self(value.rem_euclid(Self::P as i32) as u32)
    }
}

impl From<i64> for FieldElement {
    fn from(value: i64) -> Self {
        Self(value.rem_euclid(i64::from(Self::P)) as u32)
    }
}

impl From<FieldElement> for u32 {
    fn from(value: FieldElement) -> Self {
        value.value()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::new(u32::deserialize(deserializer)?))
    }
}

/// Helpers that do not belong to the core arithmetic surface.
pub mod other {
    use rand::Rng;

    use super::FieldElement;

    /// Draw `n` uniformly random field elements (test and bench support).
    pub fn random_elements(n: usize) -> Vec<FieldElement> {
        let mut rng = rand::rng();
        (0..n)
            .map(|_| FieldElement::new(rng.random_range(0..FieldElement::P)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_wraps_at_the_modulus() {
        assert_eq!(fe!(FieldElement::MAX) + fe!(1), fe!(0));
        assert_eq!(fe!(FieldElement::MAX) + fe!(2), fe!(1));
        assert_eq!(fe!(5) + fe!(7), fe!(12));
    }

    #[test]
    fn subtraction_wraps_at_zero() {
        assert_eq!(fe!(0) - fe!(1), fe!(FieldElement::MAX));
        assert_eq!(fe!(12) - fe!(7), fe!(5));
    }

    #[test]
    fn negation_is_additive_inverse() {
        for v in [0u32, 1, 2, 4096, FieldElement::MAX] {
            let x = fe!(v);
            assert_eq!(x + (-x), FieldElement::ZERO);
        }
    }

    #[test]
    fn multiplication_matches_wide_arithmetic() {
        let a = fe!(3_000_000);
        let b = fe!(7_000_000);
        let expected =
            (3_000_000u64 * 7_000_000u64) % u64::from(FieldElement::P);
        assert_eq!(a * b, fe!(expected as u32));
    }

    #[test]
    fn negative_inputs_are_reduced_canonically() {
        assert_eq!(fe!(-1), fe!(FieldElement::MAX));
        assert_eq!(fe!(-12), fe!(FieldElement::P - 12));
        assert_eq!(fe!(i64::from(FieldElement::P) * -3), FieldElement::ZERO);
    }

    #[test]
    fn inf_norm_is_symmetric_around_zero() {
        assert_eq!(fe!(0).inf_norm(), 0);
        assert_eq!(fe!(17).inf_norm(), 17);
        assert_eq!(fe!(-17).inf_norm(), 17);
        assert_eq!(
            fe!(FieldElement::MAX / 2).inf_norm(),
            FieldElement::MAX / 2
        );
    }

    #[test]
    fn centered_representative_has_the_right_sign() {
        assert_eq!(fe!(17).centered(), 17);
        assert_eq!(fe!(-17).centered(), -17);
        let half = FieldElement::MAX / 2;
        assert_eq!(fe!(half).centered(), half as i32);
        assert_eq!(fe!(half + 1).centered(), -(half as i32));
    }

    #[test]
    fn inverse_times_self_is_one() {
        for v in [1u32, 2, 1753, 4_190_208, FieldElement::MAX] {
            let x = fe!(v);
            assert_eq!(x * x.inverse(), FieldElement::ONE);
        }
    }

    #[test]
    fn mod_pow_matches_repeated_multiplication() {
        let base = fe!(1753);
        let mut acc = FieldElement::ONE;
        for exp in 0..32u32 {
            assert_eq!(base.mod_pow(exp), acc);
            acc *= base;
        }
    }

    #[test]
    fn power_of_the_group_order_is_one() {
        // The multiplicative group has order q − 1.
        assert_eq!(fe!(10).mod_pow(FieldElement::MAX), FieldElement::ONE);
    }
}
