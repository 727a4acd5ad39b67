use std::sync::mpsc;

use crate::train::checkpoint_stats::CheckpointStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`          — number of single-example SGD steps
/// - `checkpoint_interval` — completed steps between validation evaluations;
///                           ignored when no validation set is given
/// - `progress_tx`         — optional channel sender; one `CheckpointStats`
///                           is sent per evaluation. A dropped receiver does
///                           not stop training.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub iterations: usize,
    pub checkpoint_interval: usize,
    pub progress_tx: Option<mpsc::Sender<CheckpointStats>>,
}

impl TrainConfig {
    /// Fixed-iteration run; no checkpoints are taken.
    pub fn new(iterations: usize) -> Self {
        TrainConfig {
            iterations,
            checkpoint_interval: 0,
            progress_tx: None,
        }
    }

    /// Validation-guided run evaluating every `checkpoint_interval` steps.
    pub fn with_checkpoints(iterations: usize, checkpoint_interval: usize) -> Self {
        TrainConfig {
            iterations,
            checkpoint_interval,
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<CheckpointStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}
