use crate::{
    data::example::Example,
    error::Result,
    network::network::Network,
    train::{loop_fn::train_loop, report::TrainReport, train_config::TrainConfig},
};

impl Network {
    /// Fixed-iteration training: `iterations` SGD steps on examples drawn
    /// uniformly with replacement. No stopping criterion.
    pub fn train(&mut self, training: &[Example], iterations: usize) -> Result<TrainReport> {
        train_loop(self, training, None, &TrainConfig::new(iterations))
    }

    /// Validation-guided training with single-strike early stopping.
    ///
    /// Every `checkpoint_interval` steps the validation loss is measured; the
    /// first evaluation that does not improve on the best stops training.
    /// The network always ends up holding the best checkpoint's weights.
    pub fn train_with_validation(
        &mut self,
        training: &[Example],
        validation: &[Example],
        iterations: usize,
        checkpoint_interval: usize,
    ) -> Result<TrainReport> {
        let config = TrainConfig::with_checkpoints(iterations, checkpoint_interval);
        train_loop(self, training, Some(validation), &config)
    }
}
