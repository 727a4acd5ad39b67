pub mod dense;
pub mod dropout;

pub use dense::DenseOutput;
pub use dropout::apply_inverted_dropout;
