//! Teammate roster filtering and simulated chat.
//!
//! The library is split into layers: `domain` holds the pure model (roster
//! filter, conversation state machine), `usecase` orchestrates it, and
//! `infrastructure` provides the seed roster, the timer and the randomness
//! source.

// layers
pub mod domain;
pub mod infrastructure;
pub mod usecase;
