pub mod error;
pub mod math;
pub mod activation;
pub mod data;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod persist;

// Convenience re-exports
pub use error::{NnError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use data::example::{argmax, examples_from_pairs, Example};
pub use network::{Checkpoint, HiddenGradient, Network, NetworkConfig, Weights};
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::{train_loop, CheckpointStats, TrainConfig, TrainOutcome, TrainReport};
