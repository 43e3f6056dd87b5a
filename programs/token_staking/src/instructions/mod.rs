//! Instruction handlers.

pub mod destake;
pub mod initialize;
pub mod stake;

pub use destake::*;
pub use initialize::*;
pub use stake::*;
