//! Text reports over a scan result.
//!
//! Pure string projections the host prints after a scan:
//!
//! - Token table (line, category, lexeme)
//! - Error listing, one line per illegal character
//! - Symbol-table view of identifier occurrences

pub mod report;

#[cfg(test)]
mod tests;
