//! # Root Signature - Lexer
//!
//! The lexer converts root signature source text into tokens on demand.
//! It never fails: text which can not be classified becomes [Token::Unknown][rootsig_text::tokens::Token::Unknown]
//! and is reported by the parser when it is encountered.

mod lexer;

pub use lexer::minilex;
pub use lexer::Lexer;
pub use lexer::MAX_TOKEN_LENGTH;
