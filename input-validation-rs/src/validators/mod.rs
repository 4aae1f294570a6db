//! Validator functions and utilities
//!
//! These validators can be used directly or with the validation builder.

pub mod generic;
pub mod numeric;
pub mod string;

// Re-export all validators for convenience
pub use generic::*;
pub use numeric::*;
pub use string::*;
