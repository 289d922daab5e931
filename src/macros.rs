//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the lexer implementation:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_TOKEN_HANDLER!` - Creates a lexer handler for a token category
//!
//! These macros reduce boilerplate in the rule table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$line` - The line the match started on
/// * `$lexeme` - The matched substring
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, 1, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $line:expr, $lexeme:expr) => {
        Token {
            line: $line,
            kind: $kind,
            lexeme: $lexeme,
        }
    };
}

/// Creates a lexer handler producing tokens of the given kind.
///
/// Generates a handler that re-runs the rule's regex at the cursor, pushes
/// a token holding the matched lexeme and the current line, and advances
/// the cursor past the match. Expands to a non-capturing closure so it
/// coerces to the `RegexHandler` fn pointer type.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("[0-9]+").unwrap(),
///     handler: MK_TOKEN_HANDLER!(TokenKind::Number),
/// }
/// ```
#[macro_export]
macro_rules! MK_TOKEN_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, regex: &Regex| {
            let lexeme = lexer.match_here(regex).unwrap().as_str().to_string();
            let len = lexeme.len();
            lexer.push(MK_TOKEN!($kind, lexer.line, lexeme));
            lexer.advance_n(len);
        }
    };
}
