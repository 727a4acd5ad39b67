use serde::{Deserialize, Serialize};

/// One `(input, target)` pair.
///
/// `input` must hold `input_size` values and `target` `output_size` values
/// for the network it is fed to; the network checks both on use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Example {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Example {
        Example { input, target }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Example {
    fn from((input, target): (Vec<f64>, Vec<f64>)) -> Self {
        Example { input, target }
    }
}

/// Builds a dataset from `(input, target)` pairs.
pub fn examples_from_pairs<I>(pairs: I) -> Vec<Example>
where
    I: IntoIterator<Item = (Vec<f64>, Vec<f64>)>,
{
    pairs.into_iter().map(Example::from).collect()
}

/// Index of the maximum element in a slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
