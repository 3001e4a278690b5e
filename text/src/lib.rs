//! # Root Signature - Source Processing Types
//!
//! The text library contains tools for managing root signature source strings.
//! * The [SourceLocation] struct is used to identify any location in a source string.
//! * The [SourceManager] acts as the owner for all strings loaded into the compiler and gives meaning to [SourceLocation].
//! * The [tokens] module contains the vocabulary the lexer classifies raw text into.

mod location;
pub use location::*;

mod errors;
pub use errors::*;

pub mod tokens;
