//! Miscellaneous utilities.

/// Date-string formatters.
pub mod data_formatters;

/// Date-string parsers.
pub mod data_parsers;
