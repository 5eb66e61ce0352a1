pub mod locale;
pub mod ranking;
pub mod session;
pub mod words;

// Re-export main components
pub use locale::*;
pub use ranking::*;
pub use session::*;
pub use words::*;
