//! # m,n,k Rule Engine
//!
//! A generalized Tic-Tac-Toe (m,n,k-game) rule engine: turn and result state
//! machine, move placement on an arbitrary rectangular grid, and win detection
//! for a configurable run length (min(5, rows, cols) in a row). Win detection
//! runs as a data-parallel scan over the mover's sorted coordinates.
//!
//! The crate is presentation-agnostic: placed moves are tracked as opaque
//! tokens, detected wins are reported as line endpoints, and the [`layout`]
//! module supplies the pure geometry (cell centers, pointer-to-cell mapping)
//! a renderer needs. No rendering, input polling, or scene management here.
//!
//! ## Modules
//!
//! - [`game`] — Core logic: grid coordinates, line scanner, state machine
//! - [`layout`] — Grid geometry: cell centers, pointer mapping, line segments
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod layout;
