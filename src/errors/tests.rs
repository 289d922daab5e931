//! Unit tests for error handling.
//!
//! This module contains tests for the illegal-character error record and
//! its display format.

use crate::errors::errors::IllegalCharacter;

#[test]
fn test_error_display_format() {
    let error = IllegalCharacter { line: 3, ch: '@' };

    assert_eq!(error.to_string(), "Line 3: illegal character '@'");
}

#[test]
fn test_error_fields() {
    let error = IllegalCharacter { line: 42, ch: '$' };

    assert_eq!(error.line, 42);
    assert_eq!(error.ch, '$');
}

#[test]
fn test_error_equality() {
    let a = IllegalCharacter { line: 1, ch: '#' };
    let b = a.clone();

    assert_eq!(a, b);
    assert_ne!(a, IllegalCharacter { line: 2, ch: '#' });
    assert_ne!(a, IllegalCharacter { line: 1, ch: '@' });
}

#[test]
fn test_error_display_with_non_ascii_character() {
    let error = IllegalCharacter { line: 1, ch: '¿' };

    assert_eq!(error.to_string(), "Line 1: illegal character '¿'");
}
