use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::example::{argmax, Example};
use crate::error::{check_len, NnError, Result};
use crate::layers::{dense, dropout::apply_inverted_dropout};
use crate::loss::mse::MseLoss;
use crate::network::config::{HiddenGradient, NetworkConfig};
use crate::network::weights::Weights;
use crate::optim::sgd::Sgd;

/// A feedforward network with exactly one hidden layer and no bias terms.
///
/// The network owns two generators: `init_rng` is consumed once, in the
/// constructor, for the initial weights; `rng` drives example sampling and
/// dropout during training.
#[derive(Debug, Clone)]
pub struct Network {
    config: NetworkConfig,
    pub(crate) weights: Weights,
    pub(crate) rng: StdRng,
}

/// Hidden and output activations of one forward pass.
struct Activations {
    hidden_pre: Vec<f64>,
    hidden: Vec<f64>,
    output: Vec<f64>,
}

impl Network {
    /// Builds a network with both generators seeded from OS entropy.
    pub fn new(config: NetworkConfig) -> Result<Network> {
        Network::from_rngs(config, StdRng::from_entropy(), StdRng::from_entropy())
    }

    /// Builds a network whose initial weights and training randomness are
    /// fully determined by the two seeds.
    pub fn with_seeds(config: NetworkConfig, init_seed: u64, train_seed: u64) -> Result<Network> {
        Network::from_rngs(
            config,
            StdRng::seed_from_u64(init_seed),
            StdRng::seed_from_u64(train_seed),
        )
    }

    fn from_rngs(config: NetworkConfig, mut init_rng: StdRng, rng: StdRng) -> Result<Network> {
        config.validate()?;
        let weights = Weights::random(
            config.input_size,
            config.hidden_size,
            config.output_size,
            &mut init_rng,
        );
        Ok(Network { config, weights, rng })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Replaces both matrices wholesale. Their shapes must match the config.
    pub fn set_weights(&mut self, weights: Weights) -> Result<()> {
        let c = &self.config;
        check_len("input_to_hidden rows", weights.input_to_hidden.rows, c.input_size)?;
        check_len("input_to_hidden cols", weights.input_to_hidden.cols, c.hidden_size)?;
        check_len("hidden_to_output rows", weights.hidden_to_output.rows, c.hidden_size)?;
        check_len("hidden_to_output cols", weights.hidden_to_output.cols, c.output_size)?;
        self.weights = weights;
        Ok(())
    }

    /// Forward pass. With `is_training` set and a non-zero dropout rate,
    /// hidden units are dropped using the training generator.
    pub fn feedforward(&mut self, inputs: &[f64], is_training: bool) -> Result<Vec<f64>> {
        check_len("input", inputs.len(), self.config.input_size)?;
        let dropout_rate = if is_training { self.config.dropout_rate } else { 0.0 };
        let Network { config, weights, rng } = self;
        let activations = forward(config, weights, inputs, |hidden| {
            apply_inverted_dropout(hidden, dropout_rate, rng)
        });
        Ok(activations.output)
    }

    /// Inference-mode forward pass; never drops units and never touches the generator.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        check_len("input", inputs.len(), self.config.input_size)?;
        Ok(forward(&self.config, &self.weights, inputs, |_| {}).output)
    }

    /// Index of the largest output component.
    pub fn classify(&self, inputs: &[f64]) -> Result<usize> {
        Ok(argmax(&self.predict(inputs)?))
    }

    /// One SGD step on a single example.
    ///
    /// The forward pass is recomputed here without dropout. Errors for both
    /// layers are computed from the pre-update weights before either matrix
    /// is changed.
    pub fn backpropagation(&mut self, inputs: &[f64], targets: &[f64]) -> Result<()> {
        check_len("input", inputs.len(), self.config.input_size)?;
        check_len("target", targets.len(), self.config.output_size)?;

        let Activations { hidden_pre, hidden, output } =
            forward(&self.config, &self.weights, inputs, |_| {});

        let output_error = MseLoss::residual(&output, targets);

        let back_signal = self.weights.hidden_to_output.right_mul(&output_error);
        let activation = self.config.activation;
        let hidden_error: Vec<f64> = match self.config.hidden_gradient {
            HiddenGradient::SigmoidApprox => hidden
                .iter()
                .zip(&back_signal)
                .map(|(&h, &s)| h * (1.0 - h) * s)
                .collect(),
            HiddenGradient::ActivationDerivative => hidden_pre
                .iter()
                .zip(&back_signal)
                .map(|(&z, &s)| activation.derivative(z) * s)
                .collect(),
        };

        let sgd = Sgd::new(self.config.learning_rate);
        sgd.step(&mut self.weights.hidden_to_output, &hidden, &output_error);
        sgd.step(&mut self.weights.input_to_hidden, inputs, &hidden_error);
        Ok(())
    }

    /// Mean over `data` of the per-example mean squared error, in inference mode.
    pub fn calculate_loss(&self, data: &[Example]) -> Result<f64> {
        if data.is_empty() {
            return Err(NnError::EmptyDataset { what: "loss" });
        }
        let mut total = 0.0;
        for example in data {
            check_len("target", example.target.len(), self.config.output_size)?;
            let output = self.predict(&example.input)?;
            total += MseLoss::loss(&output, &example.target);
        }
        Ok(total / data.len() as f64)
    }

    /// Fraction of `data` whose predicted class matches the target's argmax.
    pub fn accuracy(&self, data: &[Example]) -> Result<f64> {
        if data.is_empty() {
            return Err(NnError::EmptyDataset { what: "accuracy" });
        }
        let mut correct = 0usize;
        for example in data {
            if self.classify(&example.input)? == argmax(&example.target) {
                correct += 1;
            }
        }
        Ok(correct as f64 / data.len() as f64)
    }
}

/// Shared forward computation. `mask_hidden` runs on the hidden activations
/// before they feed the output layer.
fn forward<F>(config: &NetworkConfig, weights: &Weights, inputs: &[f64], mask_hidden: F) -> Activations
where
    F: FnOnce(&mut [f64]),
{
    let dense::DenseOutput { pre_activation: hidden_pre, activation: mut hidden } =
        dense::feed_from(inputs, &weights.input_to_hidden, config.activation);
    mask_hidden(&mut hidden);

    let mut output = dense::feed_from(&hidden, &weights.hidden_to_output, config.activation).activation;
    config.activation.finalize(&mut output);

    Activations { hidden_pre, hidden, output }
}
