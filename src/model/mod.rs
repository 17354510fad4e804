pub mod scores;
pub mod stats;
pub mod vectors;

pub use scores::{ScoreEntry, ScoreTable};
pub use stats::{LineParse, LineStats};
pub use vectors::{NumberPattern, VectorRecord};
