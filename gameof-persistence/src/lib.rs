pub mod store;

// Re-export all store types
pub use store::*;
