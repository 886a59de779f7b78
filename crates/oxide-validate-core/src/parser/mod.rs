//! SQL Parser
//!
//! A hand-written recursive descent recognizer with one token of lookahead.

mod error;
#[allow(clippy::module_inception)]
mod parser;
mod production;

pub use error::ParseError;
pub use parser::{Parser, MAX_CONDITION_DEPTH};
pub use production::Production;
