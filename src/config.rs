pub mod io;
pub mod types;

// Re-export types
pub use types::{ArcadeConfig, WebGame};

// Re-export operations
pub use io::{load_cfg, save_cfg};
