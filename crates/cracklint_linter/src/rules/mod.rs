//! Lint rules organized by category.

pub mod usage;

// Re-export all rules
pub use usage::IfReturnTrue;
