pub mod checkpoint_stats;
pub mod loop_fn;
pub mod report;
pub mod train_config;
pub mod trainer;

pub use checkpoint_stats::CheckpointStats;
pub use loop_fn::train_loop;
pub use report::{TrainOutcome, TrainReport};
pub use train_config::TrainConfig;
