//! Triage Core - Core library for gh-triage
//!
//! This crate provides configuration loading and the subprocess runner that
//! drives the external `gh` CLI. All GitHub semantics live in higher layers.

pub mod config;
pub mod error;
pub mod gh;

pub use config::{Config, GhConfig};
pub use error::{Error, Result};
pub use gh::{GhCli, GhRunner};
