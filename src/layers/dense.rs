use crate::{activation::activation::ActivationFunction, math::matrix::Matrix};

/// Pre-activation and activated values of one dense layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseOutput {
    /// `z[i] = Σ_j input[j] * weights[j][i]`, kept for the derivative.
    pub pre_activation: Vec<f64>,
    pub activation: Vec<f64>,
}

/// Feeds `input` through a bias-free dense layer.
///
/// `weights` is `input.len() × layer_size`; the caller checks the input length.
pub fn feed_from(input: &[f64], weights: &Matrix, activator: ActivationFunction) -> DenseOutput {
    let pre_activation = weights.left_mul(input);
    let activation = pre_activation.iter().map(|&z| activator.function(z)).collect();
    DenseOutput { pre_activation, activation }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_sum_then_activation() {
        // 2 inputs -> 2 units
        let w = Matrix::from_row_major(2, 2, &[1.0, -1.0, 2.0, 0.5]).unwrap();
        let out = feed_from(&[1.0, 1.0], &w, ActivationFunction::ReLU);
        assert_eq!(out.pre_activation, vec![3.0, -0.5]);
        assert_eq!(out.activation, vec![3.0, 0.0]);
    }

    #[test]
    fn zero_input_gives_half_under_sigmoid() {
        let w = Matrix::from_row_major(2, 3, &[0.3; 6]).unwrap();
        let out = feed_from(&[0.0, 0.0], &w, ActivationFunction::Sigmoid);
        assert!(out.activation.iter().all(|&a| (a - 0.5).abs() < 1e-15));
    }
}
