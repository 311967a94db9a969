pub mod traits;
pub mod floyd_warshall;

pub use traits::AllPairsSolver;
