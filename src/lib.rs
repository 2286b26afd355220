//! item-processor library
//!
//! Lowercases, sorts and prints a list of items.

pub mod core;

// Re-export main types for convenience
pub use self::core::processor::{format_line, Processor, LINE_LABEL};
