//! Domain layer for aspnet-fmt
//!
//! Holds the vocabulary shared by every other layer: rule violations and the
//! error type returned when a run cannot continue.

pub mod violations;

// Re-export main domain types for convenience
pub use violations::*;
