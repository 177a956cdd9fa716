//! Core domain types for yunlog.
//!
//! Holds the per-series aggregate data model, the shared error type, and
//! the CLI settings used by the `yunlog` binary.

pub mod error;
pub mod models;
pub mod settings;
