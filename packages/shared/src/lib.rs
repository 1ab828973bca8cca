//! Utilities shared by the SquadUp packages.

pub mod logger;
pub mod time;
