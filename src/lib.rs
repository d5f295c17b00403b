//! # Mancala
//!
//! A terminal Mancala (Kalah) game played against an iterative-deepening
//! alpha-beta opponent, with a UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, sowing and capture rules, state
//!   machine, successor enumeration
//! - [`ai`] — Agent trait, alpha-beta search with iterative deepening,
//!   random baseline
//! - [`ui`] — Terminal UI: difficulty menu and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
