pub mod config;
pub mod network;
pub mod weights;

pub use config::{HiddenGradient, NetworkConfig};
pub use network::Network;
pub use weights::{Checkpoint, Weights};
