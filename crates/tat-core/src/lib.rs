//! # tat-core
//!
//! Core error definitions and string utilities for bgv-tat.
//!
//! This crate holds the pieces shared by every other crate in the
//! workspace: the error type, the `ensure!` macro, and the helpers that turn
//! spreadsheet date text into `(year, month, day)` triples and back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Date-string parsers and formatters.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
