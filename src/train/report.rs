use serde::{Deserialize, Serialize};

/// How a training run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainOutcome {
    /// Every requested iteration ran.
    Exhausted,
    /// A checkpoint evaluation failed to improve on the best validation loss.
    EarlyStopped,
}

/// Summary returned by both training modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub iterations_run: usize,
    pub outcome: TrainOutcome,
    /// Validation loss of the weights the network holds after training.
    /// `None` in fixed-iteration mode.
    pub best_validation_loss: Option<f64>,
    /// Number of validation evaluations performed.
    pub checkpoints: usize,
}
