//! # Connect Four
//!
//! A two-player Connect Four game played over a line-oriented terminal.
//! Boards of any size from 4×4 upward are supported; the win length is
//! always four.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, lines, player, state machine
//! - [`session`] — Turn loop over any reader/writer pair
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod session;
