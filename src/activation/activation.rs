use serde::{Deserialize, Serialize};
use std::f64::consts::E;
use std::str::FromStr;

/// Activation applied to both the hidden and the output layer.
///
/// Every variant is pointwise through `function()`. `Softmax` passes values
/// through unchanged there and does its real work in `finalize()`, which the
/// network applies to the output layer only.
///
/// Names that are not recognised deserialize (and parse) as `Tanh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivationFunction {
    Sigmoid,
    #[default]
    Tanh,
    /// Legacy name kept for model configs that used it; behaves exactly as `Tanh`.
    TanhDerivative,
    #[serde(rename = "relu")]
    ReLU,
    Linear,
    Softmax,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh | ActivationFunction::TanhDerivative => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Linear | ActivationFunction::Softmax => x,
        }
    }

    /// Derivative of `function()` with respect to its pre-activation input.
    ///
    /// Only used when the network is configured with
    /// `HiddenGradient::ActivationDerivative`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::Tanh | ActivationFunction::TanhDerivative => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Linear | ActivationFunction::Softmax => 1.0,
        }
    }

    /// Layer-wide step run once over the output vector after the pointwise pass.
    /// Identity for everything except `Softmax`.
    pub fn finalize(&self, values: &mut [f64]) {
        if *self == ActivationFunction::Softmax {
            softmax_in_place(values);
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::TanhDerivative => "tanh_derivative",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::Linear => "linear",
            ActivationFunction::Softmax => "softmax",
        }
    }

    fn from_name(name: &str) -> Option<ActivationFunction> {
        let found = match name.trim().to_ascii_lowercase().as_str() {
            "sigmoid" => ActivationFunction::Sigmoid,
            "tanh" => ActivationFunction::Tanh,
            "tanh_derivative" | "tanhderivative" => ActivationFunction::TanhDerivative,
            "relu" => ActivationFunction::ReLU,
            "linear" | "identity" => ActivationFunction::Linear,
            "softmax" => ActivationFunction::Softmax,
            _ => return None,
        };
        Some(found)
    }
}

/// `exp(v_i) / Σ_j exp(v_j)`, shifted by the maximum so large inputs don't overflow.
fn softmax_in_place(values: &mut [f64]) {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut sum = 0.0;
    for v in values.iter_mut() {
        *v = (*v - max).exp();
        sum += *v;
    }
    for v in values.iter_mut() {
        *v /= sum;
    }
}

impl FromStr for ActivationFunction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ActivationFunction::from(s.to_string()))
    }
}

impl From<String> for ActivationFunction {
    fn from(name: String) -> Self {
        ActivationFunction::from_name(&name).unwrap_or_else(|| {
            log::warn!("unknown activation {name:?}, falling back to tanh");
            ActivationFunction::Tanh
        })
    }
}

impl std::fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
