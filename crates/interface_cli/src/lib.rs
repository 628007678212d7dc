//! Console Layer
//!
//! This crate presents contacts on a terminal and hosts the `contact-demo`
//! binary.
//!
//! # Modules
//!
//! - `ui`: the display consumer, one block of lines per contact
//! - `demo`: the sample scenario the binary runs
//! - `config`: settings loaded from `CONTACT_DEMO_*` environment variables
//! - `telemetry`: tracing subscriber setup
//! - `error`: errors surfaced to the binary

pub mod config;
pub mod demo;
pub mod error;
pub mod telemetry;
pub mod ui;

pub use config::{DemoConfig, LogFormat};
pub use error::CliError;
pub use ui::ContactUi;
