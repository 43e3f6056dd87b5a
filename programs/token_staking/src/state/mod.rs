//! State structures persisted by the program.

pub mod mint_registry;
pub mod stake_record;

pub use mint_registry::*;
pub use stake_record::*;
