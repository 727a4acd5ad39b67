use serde::{Deserialize, Serialize};

/// Emitted by `train_loop` after every validation checkpoint evaluation.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, one value is
/// sent per evaluation, including the one that triggers an early stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointStats {
    /// Completed training iterations at this evaluation.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// Mean squared error over the validation set.
    pub validation_loss: f64,
    /// Best validation loss so far, including this evaluation if it improved.
    pub best_loss: f64,
    /// Whether this evaluation became the new checkpoint.
    pub improved: bool,
}
