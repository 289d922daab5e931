use std::fmt::Display;

/// Reserved words of the scanned language. The keyword rule is built from
/// this list, word-bounded so that e.g. `intx` stays an identifier.
pub const KEYWORDS: [&str; 9] = [
    "if", "else", "while", "for", "int", "float", "return", "print", "void",
];

/// Categories a produced token can carry. Whitespace, newlines and illegal
/// characters never surface as tokens, so they have no variant here.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Number,
    Identifier,
    Operator,
    Punctuation,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 1-based line the match started on.
    pub line: u32,
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.lexeme)
    }
}
