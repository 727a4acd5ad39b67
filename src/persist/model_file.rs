use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};

use log::info;

use crate::error::{check_len, NnError, Result};
use crate::math::matrix::Matrix;
use crate::network::config::NetworkConfig;
use crate::network::network::Network;
use crate::network::weights::Weights;

impl Network {
    /// Writes every weight as space-separated decimal text: input→hidden
    /// row-major, then hidden→output row-major. No header.
    pub fn save_model(&self, path: &str) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_weights(&mut writer, self.weights())?;
        writer.flush()?;
        Ok(())
    }

    /// Reads weights written by `save_model`, using this network's
    /// configured shape to split them into the two matrices.
    ///
    /// Returns `Ok(false)` when no file exists at `path`, leaving the
    /// current weights in place so the caller can train from scratch.
    /// The weights are only replaced once the whole file has been read.
    pub fn load_model(&mut self, path: &str) -> Result<bool> {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no model found at {path}");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };
        let mut text = String::new();
        file.read_to_string(&mut text)?;

        let weights = parse_weights(&text, self.config())?;
        self.set_weights(weights)?;
        Ok(true)
    }
}

/// Serializes `weights` in model-file order, each value followed by a space.
pub fn write_weights<W: Write>(writer: &mut W, weights: &Weights) -> Result<()> {
    for value in weights.iter_values() {
        // `{}` prints the shortest text that parses back to the same f64.
        write!(writer, "{value} ")?;
    }
    Ok(())
}

/// Parses model-file text into matrices shaped by `config`.
///
/// The file must hold exactly `config.parameter_count()` numbers.
pub fn parse_weights(text: &str, config: &NetworkConfig) -> Result<Weights> {
    let values = text
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<f64>().map_err(|_| NnError::Parse {
                position,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<f64>>>()?;
    check_len("model file", values.len(), config.parameter_count())?;

    let split = config.input_size * config.hidden_size;
    let (first, second) = values.split_at(split);
    let input_to_hidden = Matrix::from_row_major(config.input_size, config.hidden_size, first)
        .ok_or(NnError::ShapeMismatch {
            what: "input_to_hidden",
            got: first.len(),
            expected: split,
        })?;
    let hidden_to_output = Matrix::from_row_major(config.hidden_size, config.output_size, second)
        .ok_or(NnError::ShapeMismatch {
            what: "hidden_to_output",
            got: second.len(),
            expected: config.hidden_size * config.output_size,
        })?;
    Ok(Weights { input_to_hidden, hidden_to_output })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_values_in_row_major_order() {
        let weights = Weights {
            input_to_hidden: Matrix::from_row_major(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap(),
            hidden_to_output: Matrix::from_row_major(2, 1, &[-0.5, 0.25]).unwrap(),
        };
        let mut buf = Vec::new();
        write_weights(&mut buf, &weights).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 2 3 4 -0.5 0.25 ");
    }

    #[test]
    fn parse_splits_by_configured_shape() {
        let config = NetworkConfig::new(1, 2, 3, 0.1);
        let w = parse_weights("1 2\n3 4 5\t6 7 8", &config).unwrap();
        assert_eq!(w.input_to_hidden.data, vec![vec![1.0, 2.0]]);
        assert_eq!(
            w.hidden_to_output.data,
            vec![vec![3.0, 4.0, 5.0], vec![6.0, 7.0, 8.0]]
        );
    }

    #[test]
    fn parse_rejects_wrong_counts_and_junk() {
        let config = NetworkConfig::new(2, 3, 1, 0.1);
        assert!(matches!(
            parse_weights("1 2 3", &config),
            Err(NnError::ShapeMismatch { got: 3, expected: 9, .. })
        ));
        assert!(matches!(
            parse_weights("0 0 0 0 0 0 0 0 0 0", &config),
            Err(NnError::ShapeMismatch { got: 10, expected: 9, .. })
        ));
        assert!(matches!(
            parse_weights("0 0 x", &config),
            Err(NnError::Parse { position: 2, .. })
        ));
    }

    #[test]
    fn written_text_parses_back_exactly() {
        let weights = Weights {
            input_to_hidden: Matrix::from_row_major(1, 2, &[0.1 + 0.2, 1e-300]).unwrap(),
            hidden_to_output: Matrix::from_row_major(2, 1, &[std::f64::consts::PI, -7.25e12]).unwrap(),
        };
        let mut buf = Vec::new();
        write_weights(&mut buf, &weights).unwrap();
        let back = parse_weights(std::str::from_utf8(&buf).unwrap(), &NetworkConfig::new(1, 2, 1, 0.1)).unwrap();
        assert_eq!(back, weights);
    }
}
