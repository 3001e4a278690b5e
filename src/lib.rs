//! # Root Signature
//!
//! This is a meta crate that re-exports all the sub libraries

pub use rootsig_desc as desc;
pub use rootsig_lexer as lexer;
pub use rootsig_parser as parser;
pub use rootsig_text as text;

pub use rootsig_desc::{CompilationFlags, RootSignatureVersion, VersionedRootSignatureDesc};

mod compile;
pub use compile::*;
