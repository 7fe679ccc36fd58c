//! # sb-core
//!
//! Core types, settings, and error definitions for schedule-bridge.
//!
//! This crate provides the building blocks shared by every other crate in
//! the workspace: the error hierarchy, the analytics [`Settings`], and the
//! small vocabulary enums ([`Lang`], [`Country`], [`EventScope`]) that flow
//! through the holiday pipeline.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Country codes and user-event scopes.
pub mod country;

/// Error types and the `ensure!` macro.
pub mod errors;

/// Output language for advisory and template text.
pub mod lang;

/// Analytics settings (thresholds, windows, scores).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use country::{Country, EventScope};
pub use errors::{Error, Result};
pub use lang::Lang;
pub use settings::{EventBlocking, Settings};
