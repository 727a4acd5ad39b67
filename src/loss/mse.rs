pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((expected - predicted)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (b - a).powi(2))
            .sum::<f64>() / n
    }

    /// Per-output residual: expected - predicted.
    ///
    /// This is the output error signal the network steps along; it is not
    /// divided by anything since every step sees a single example.
    pub fn residual(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| b - a)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_mean_over_outputs() {
        assert_eq!(MseLoss::loss(&[1.0, 0.0], &[0.0, 0.0]), 0.5);
        assert_eq!(MseLoss::loss(&[0.25], &[0.25]), 0.0);
    }

    #[test]
    fn residual_points_towards_target() {
        assert_eq!(MseLoss::residual(&[0.2, 0.9], &[1.0, 0.0]), vec![0.8, -0.9]);
    }
}
