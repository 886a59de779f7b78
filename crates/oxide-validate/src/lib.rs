//! Command-line front end for `oxide-validate-core`.
//!
//! Collects statements from arguments, a file or stdin, validates each one
//! and writes one JSON [`ValidationReport`](report::ValidationReport) per
//! statement.

pub mod error;
pub mod input;
pub mod report;

pub use error::{InputError, Result};
pub use input::Source;
pub use report::{write_reports, ValidationReport};
