//! # Number Balance
//!
//! A two-player math game for the terminal. One player builds an equation
//! and hides one of its numbers; the other guesses the number and the
//! operation, and a balance scale shows whether the guess weighs the same as
//! the result. Built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] : Core game logic: equation engine, input drafts, turn/round state machine
//! - [`ui`] : Terminal UI: screens, balance scale widget, localized text
//! - [`config`] : TOML configuration loading and validation
//! - [`error`] : Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
