//! Error types for the scanner.
//!
//! The scanner has exactly one error kind: an illegal character. Errors
//! carry their source line and are collected alongside the token stream
//! rather than aborting the scan.

pub mod errors;

#[cfg(test)]
mod tests;
