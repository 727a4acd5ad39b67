use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, Result};

/// Derivative factor used for the hidden layer during backpropagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenGradient {
    /// `h * (1 - h)` on the hidden activation, whatever the activation is.
    #[default]
    SigmoidApprox,
    /// The configured activation's own derivative at the pre-activation.
    ActivationDerivative,
}

/// Shape and hyperparameters of a single-hidden-layer network.
///
/// Fields:
/// - `input_size`      — length of every input vector
/// - `hidden_size`     — number of hidden units
/// - `output_size`     — length of every output / target vector
/// - `learning_rate`   — SGD step size
/// - `activation`      — applied to both layers; `tanh` when omitted
/// - `dropout_rate`    — inverted dropout on hidden units while training, in `[0, 1)`
/// - `hidden_gradient` — see `HiddenGradient`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub activation: ActivationFunction,
    #[serde(default)]
    pub dropout_rate: f64,
    #[serde(default)]
    pub hidden_gradient: HiddenGradient,
}

impl NetworkConfig {
    /// A config with the default activation (`Tanh`) and no dropout.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize, learning_rate: f64) -> Self {
        NetworkConfig {
            input_size,
            hidden_size,
            output_size,
            learning_rate,
            activation: ActivationFunction::default(),
            dropout_rate: 0.0,
            hidden_gradient: HiddenGradient::default(),
        }
    }

    pub fn with_activation(mut self, activation: ActivationFunction) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_dropout(mut self, dropout_rate: f64) -> Self {
        self.dropout_rate = dropout_rate;
        self
    }

    pub fn with_hidden_gradient(mut self, hidden_gradient: HiddenGradient) -> Self {
        self.hidden_gradient = hidden_gradient;
        self
    }

    /// Number of values a model file for this shape holds.
    pub fn parameter_count(&self) -> usize {
        self.input_size * self.hidden_size + self.hidden_size * self.output_size
    }

    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("output_size", self.output_size),
        ] {
            if size == 0 {
                return Err(NnError::InvalidConfig(format!("{name} must be at least 1")));
            }
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NnError::InvalidConfig(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        if !(0.0..1.0).contains(&self.dropout_rate) {
            return Err(NnError::InvalidConfig(format!(
                "dropout_rate must be in [0, 1), got {}",
                self.dropout_rate
            )));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a config written by `save_json`.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
