pub mod player;
pub mod snapshot;

// Re-export all types
pub use player::*;
pub use snapshot::*;
