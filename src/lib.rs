#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

pub use errors::errors::IllegalCharacter;
pub use lexer::lexer::{scan, ScanResult};
pub use lexer::tokens::{Token, TokenKind};
