use rand::Rng;
use serde::{Deserialize, Serialize};

/// Dense row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills a `rows × cols` matrix with independent uniform draws in `[0, 1)`.
    pub fn random_uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    /// Builds a matrix from a flat row-major sequence.
    /// Returns `None` when `values.len() != rows * cols`.
    pub fn from_row_major(rows: usize, cols: usize, values: &[f64]) -> Option<Matrix> {
        if values.len() != rows * cols {
            return None;
        }
        let data = if cols == 0 {
            vec![Vec::new(); rows]
        } else {
            values.chunks(cols).map(|row| row.to_vec()).collect()
        };
        Some(Matrix { rows, cols, data })
    }

    /// Iterates every value, outer loop over rows, inner over columns.
    pub fn iter_row_major(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().flat_map(|row| row.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row vector times matrix: `out[c] = Σ_r v[r] * self[r][c]`.
    ///
    /// `v` must have `self.rows` entries.
    pub fn left_mul(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.rows);
        let mut out = vec![0.0; self.cols];
        for (row, &scale) in self.data.iter().zip(v) {
            for (o, &w) in out.iter_mut().zip(row) {
                *o += scale * w;
            }
        }
        out
    }

    /// Matrix times column vector: `out[r] = Σ_c self[r][c] * v[c]`.
    ///
    /// `v` must have `self.cols` entries.
    pub fn right_mul(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.cols);
        self.data
            .iter()
            .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
            .collect()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
