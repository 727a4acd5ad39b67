use crate::math::matrix::Matrix;

/// Plain stochastic gradient descent, one example per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies the rank-1 update `weights[r][c] += lr * error[c] * activation[r]`.
    ///
    /// `activation` is the signal feeding the layer (one entry per row),
    /// `error` is the layer's error signal (one entry per column). The error
    /// points towards the target, so the step is added.
    pub fn step(&self, weights: &mut Matrix, activation: &[f64], error: &[f64]) {
        debug_assert_eq!(activation.len(), weights.rows);
        debug_assert_eq!(error.len(), weights.cols);
        for (row, &a) in weights.data.iter_mut().zip(activation) {
            let scaled = self.learning_rate * a;
            for (w, &e) in row.iter_mut().zip(error) {
                *w += scaled * e;
            }
        }
    }
}
