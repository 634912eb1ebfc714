pub use crate::{fe, fe_vec};
pub use crate::{
    field_element::FieldElement,
    matrix::Matrix,
    ntt::{intt, ntt, N},
    poly::Polynomial,
    poly_vector::PolynomialVector,
};

/// Dilithium prime modulus (alias to the single source of truth).
pub const Q: u32 = FieldElement::P;
