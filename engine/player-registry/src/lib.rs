//! Player Registry - Immutable lookup of known players by MFL ID
//!
//! This crate also owns the position model: the raw MFL position codes and
//! the normalized buckets every report is keyed by.

pub mod position;
pub mod registry;
pub mod types;

pub use position::{normalize, Position, PositionBucket};
pub use registry::PlayerRegistry;
pub use types::{Player, PlayerLookupError};
