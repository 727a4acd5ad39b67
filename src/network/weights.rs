use rand::Rng;

use crate::math::matrix::Matrix;

/// The two weight matrices of the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    /// `input_size × hidden_size`
    pub input_to_hidden: Matrix,
    /// `hidden_size × output_size`
    pub hidden_to_output: Matrix,
}

impl Weights {
    /// Uniform `[0, 1)` initialization, input→hidden drawn first.
    pub fn random<R: Rng>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Weights {
        let input_to_hidden = Matrix::random_uniform(input_size, hidden_size, rng);
        let hidden_to_output = Matrix::random_uniform(hidden_size, output_size, rng);
        Weights { input_to_hidden, hidden_to_output }
    }

    /// All values in model-file order: input→hidden row-major, then hidden→output row-major.
    pub fn iter_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.input_to_hidden
            .iter_row_major()
            .chain(self.hidden_to_output.iter_row_major())
    }
}

/// Snapshot of the best weights seen so far during validation-guided training.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub weights: Weights,
    pub validation_loss: f64,
    /// Completed training iterations when the snapshot was taken.
    pub iteration: usize,
}
