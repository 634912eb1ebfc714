use crate::error::MatrixError;
use crate::poly::Polynomial;
use crate::poly_vector::PolynomialVector;

/// Row-major k×l matrix over R_q.
///
/// The expanded public matrix Â lives here, so `mul_vec` assumes all
/// operands are in NTT form and multiplies coefficient-wise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    polys: Vec<Polynomial>,
}

impl Matrix {
    /// Build a matrix from row-major entries.
    pub fn new(
        rows: usize,
        cols: usize,
        polys: Vec<Polynomial>,
    ) -> Result<Self, MatrixError> {
        if polys.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                actual: polys.len(),
            });
        }
        Ok(Self { rows, cols, polys })
    }

    /// All-zero matrix of the given shape.
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            polys: vec![Polynomial::zero(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &Polynomial {
        &self.polys[row * self.cols + col]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Polynomial {
        &mut self.polys[row * self.cols + col]
    }

    /// Matrix–vector product w_i = Σ_j A_{i,j} ⊙ v_j with all operands in
    /// NTT form.
    #[must_use]
    pub fn mul_vec(&self, v: &PolynomialVector) -> PolynomialVector {
        assert_eq!(
            self.cols,
            v.len(),
            "matrix columns must match vector length"
        );
        let polys = (0..self.rows)
            .map(|i| {
                let mut acc = Polynomial::zero();
                for j in 0..self.cols {
                    acc += self.get(i, j).pointwise(&v[j]);
                }
                acc
            })
            .collect();
        PolynomialVector::new(polys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ntt::N;

    fn sparse(pairs: &[(usize, i32)]) -> Polynomial {
        let mut coeffs = [0i32; N];
        for &(idx, v) in pairs {
            coeffs[idx] = v;
        }
        Polynomial::from(coeffs)
    }

    #[test]
    fn new_rejects_wrong_entry_counts() {
        let err = Matrix::new(2, 3, vec![Polynomial::zero(); 5]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                rows: 2,
                cols: 3,
                actual: 5
            }
        );
        assert!(Matrix::new(2, 3, vec![Polynomial::zero(); 6]).is_ok());
    }

    #[test]
    fn indexing_is_row_major() {
        let mut m = Matrix::zero(2, 2);
        *m.get_mut(0, 1) = sparse(&[(0, 1)]);
        *m.get_mut(1, 0) = sparse(&[(0, 2)]);
        assert_eq!(m.get(0, 1), &sparse(&[(0, 1)]));
        assert_eq!(m.get(1, 0), &sparse(&[(0, 2)]));
        assert_eq!(m.get(0, 0), &Polynomial::zero());
    }

    #[test]
    fn mul_vec_matches_manual_accumulation() {
        // Work entirely in the NTT domain on otherwise arbitrary entries:
        // pointwise products and sums can be checked per coefficient.
        let a00 = Polynomial::random(100);
        let a01 = Polynomial::random(100);
        let a10 = Polynomial::random(100);
        let a11 = Polynomial::random(100);
        let v0 = Polynomial::random(100);
        let v1 = Polynomial::random(100);

        let m = Matrix::new(2, 2, vec![a00, a01, a10, a11]).unwrap();
        let v = PolynomialVector::new(vec![v0, v1]);
        let w = m.mul_vec(&v);

        assert_eq!(w.len(), 2);
        assert_eq!(w[0], a00.pointwise(&v0) + a01.pointwise(&v1));
        assert_eq!(w[1], a10.pointwise(&v0) + a11.pointwise(&v1));
    }

    #[test]
    #[should_panic(expected = "matrix columns must match")]
    fn mul_vec_panics_on_dimension_mismatch() {
        let m = Matrix::zero(2, 3);
        let v = PolynomialVector::zero(2);
        let _ = m.mul_vec(&v);
    }
}
