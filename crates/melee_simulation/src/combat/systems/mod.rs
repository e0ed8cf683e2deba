//! Combat systems (strategic layer logic)

pub mod attack;


// Re-export all systems
pub use attack::*;
