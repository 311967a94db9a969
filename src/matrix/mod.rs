pub mod dense;
pub mod generators;

pub use dense::DistanceMatrix;
