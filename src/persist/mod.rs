pub mod model_file;

pub use model_file::{parse_weights, write_weights};
