//! # Root Signature - Parser
//!
//! The parser pulls tokens from the lexer and builds a root signature descriptor.
//! Parsing stops at the first error, which is reported with the location of the offending token.

mod parser;

pub use parser::parse_root_signature;
pub use parser::Parser;
pub use parser::{FlagFamily, ParseError, ParseErrorReason, RequiredParameter, ValueKind};
