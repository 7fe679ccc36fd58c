//! Miscellaneous utilities.

/// Parsing helpers for date strings.
pub mod data_parsers;
