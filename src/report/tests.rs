//! Unit tests for the report formatters.

use crate::errors::errors::IllegalCharacter;
use crate::lexer::lexer::scan;
use crate::report::report::{error_listing, symbol_table, token_table};

#[test]
fn test_token_table_layout() {
    let result = scan("int x");
    let table = token_table(&result.tokens);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], format!("{:<8}{:<15}{:<15}", "Line", "Type", "Value"));
    assert_eq!(lines[1], "-".repeat(40));
    assert_eq!(lines[2], format!("{:<8}{:<15}{:<15}", 1, "KEYWORD", "int"));
    assert_eq!(lines[3], format!("{:<8}{:<15}{:<15}", 1, "IDENTIFIER", "x"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_token_table_empty() {
    let table = token_table(&[]);
    let lines: Vec<&str> = table.lines().collect();

    // Header and rule only.
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_error_listing_empty() {
    assert_eq!(error_listing(&[]), "No lexical errors.");
}

#[test]
fn test_error_listing_one_per_line() {
    let errors = vec![
        IllegalCharacter { line: 1, ch: '@' },
        IllegalCharacter { line: 4, ch: '#' },
    ];

    assert_eq!(
        error_listing(&errors),
        "Line 1: illegal character '@'\nLine 4: illegal character '#'"
    );
}

#[test]
fn test_symbol_table_lists_occurrences() {
    let result = scan("int x = y;\nx = x + 1;");
    let table = symbol_table(&result.tokens);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "ID\t\tLINE");
    assert_eq!(lines[1], "-".repeat(30));
    assert_eq!(lines[2], "x\t\t1");
    assert_eq!(lines[3], "y\t\t1");
    assert_eq!(lines[4], "x\t\t2");
    assert_eq!(lines[5], "x\t\t2");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_symbol_table_skips_keywords_and_literals() {
    let result = scan("return 42;");
    let table = symbol_table(&result.tokens);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 2);
}
