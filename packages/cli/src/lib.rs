//! Interactive terminal front-end for SquadUp.
//!
//! Parses REPL commands, drives the `squadup-core` use cases and renders
//! rosters and conversations as text.

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod formatter;
mod runner;
mod ui;

pub use runner::run;
