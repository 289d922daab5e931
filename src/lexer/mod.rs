//! Lexical analysis module.
//!
//! This module contains the scanner that converts source code into a
//! stream of classified tokens using regex patterns. It handles:
//!
//! - Recognition of keywords, numbers, identifiers, operators and punctuation
//! - Line tracking for every produced token
//! - Whitespace and newline skipping
//! - Illegal-character reporting with recovery

pub mod lexer;
pub mod tokens;
