//! Utility modules

pub mod memory_storage;
pub mod recording_canvas;
pub mod validation;

pub use memory_storage::*;
pub use recording_canvas::*;
pub use validation::*;
