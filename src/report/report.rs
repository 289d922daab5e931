use crate::errors::errors::IllegalCharacter;
use crate::lexer::tokens::{Token, TokenKind};

/// Renders the token sequence as the fixed-width Line / Type / Value table.
pub fn token_table(tokens: &[Token]) -> String {
    let mut out = format!("{:<8}{:<15}{:<15}\n", "Line", "Type", "Value");
    out.push_str(&"-".repeat(40));
    out.push('\n');

    for token in tokens {
        out.push_str(&format!(
            "{:<8}{:<15}{:<15}\n",
            token.line, token.kind, token.lexeme
        ));
    }

    out
}

/// Renders the error sequence one line per error, or a placeholder when the
/// scan found nothing wrong.
pub fn error_listing(errors: &[IllegalCharacter]) -> String {
    if errors.is_empty() {
        return String::from("No lexical errors.");
    }

    errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Renders the symbol-table view: every identifier occurrence with its line,
/// duplicates included.
pub fn symbol_table(tokens: &[Token]) -> String {
    let mut out = String::from("ID\t\tLINE\n");
    out.push_str(&"-".repeat(30));
    out.push('\n');

    for token in tokens {
        if token.kind == TokenKind::Identifier {
            out.push_str(&format!("{}\t\t{}\n", token.lexeme, token.line));
        }
    }

    out
}
