//! `curvelab` library crate.
//!
//! The binary (`curvelab`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI front-ends, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod curves;
pub mod datasets;
pub mod error;
pub mod scale;
pub mod store;
pub mod tui;
