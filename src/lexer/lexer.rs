use lazy_static::lazy_static;
use regex::{Match, Regex};

use crate::{errors::errors::IllegalCharacter, MK_TOKEN, MK_TOKEN_HANDLER};

use super::tokens::{Token, TokenKind, KEYWORDS};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// The rule table, tried top to bottom at every position. The order is
    /// load-bearing: the patterns overlap (every keyword is also a valid
    /// identifier), so keywords must be attempted before identifiers, and
    /// the single-character catch-all must come last.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern {
            regex: Regex::new(&format!(r"\b({})\b", KEYWORDS.join("|"))).unwrap(),
            handler: MK_TOKEN_HANDLER!(TokenKind::Keyword),
        },
        RegexPattern {
            regex: Regex::new(r"[0-9]+(\.[0-9]+)?").unwrap(),
            handler: MK_TOKEN_HANDLER!(TokenKind::Number),
        },
        RegexPattern {
            regex: Regex::new(r"[a-zA-Z_][a-zA-Z0-9_]*").unwrap(),
            handler: MK_TOKEN_HANDLER!(TokenKind::Identifier),
        },
        RegexPattern {
            regex: Regex::new(r"[+\-*/=<>!]{1,2}").unwrap(),
            handler: MK_TOKEN_HANDLER!(TokenKind::Operator),
        },
        RegexPattern {
            regex: Regex::new(r"[()\[\]{};,]").unwrap(),
            handler: MK_TOKEN_HANDLER!(TokenKind::Punctuation),
        },
        RegexPattern {
            regex: Regex::new(r"[ \t]+").unwrap(),
            handler: skip_handler,
        },
        RegexPattern {
            regex: Regex::new(r"\n").unwrap(),
            handler: newline_handler,
        },
        RegexPattern {
            regex: Regex::new(r".").unwrap(),
            handler: mismatch_handler,
        },
    ];
}

pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
    tokens: Vec<Token>,
    errors: Vec<IllegalCharacter>,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            tokens: vec![],
            errors: vec![],
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn push_error(&mut self, error: IllegalCharacter) {
        self.errors.push(error);
    }

    /// Runs a rule against the full buffer starting at the cursor. Searching
    /// the whole source with `find_at` keeps the surrounding context, so a
    /// word boundary still sees the character before the cursor; slicing off
    /// a remainder would make a leading `\b` succeed at every position.
    pub fn match_here(&self, regex: &Regex) -> Option<Match<'src>> {
        regex.find_at(self.source, self.pos)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.match_here(regex).unwrap();
    lexer.advance_n(matched.as_str().len());
}

fn newline_handler(lexer: &mut Lexer, _regex: &Regex) {
    lexer.line += 1;
    lexer.advance_n(1);
}

fn mismatch_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.match_here(regex).unwrap();
    // The catch-all matches exactly one char, so next() cannot fail.
    let ch = matched.as_str().chars().next().unwrap();
    lexer.push_error(IllegalCharacter {
        line: lexer.line,
        ch,
    });
    lexer.advance_n(matched.as_str().len());
}

/// Everything one pass over a buffer produces: the classified tokens and the
/// illegal characters encountered, each in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<IllegalCharacter>,
}

impl ScanResult {
    /// Projection of the token sequence onto its identifiers, one entry per
    /// occurrence. Feeds the symbol-table report.
    pub fn identifiers(&self) -> Vec<(&str, u32)> {
        self.tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Identifier)
            .map(|token| (token.lexeme.as_str(), token.line))
            .collect()
    }
}

/// Scans a whole source buffer in a single left-to-right pass.
///
/// Every character is consumed by exactly one rule match, so the scan always
/// terminates and never drops input. Unrecognised characters become entries
/// in the error sequence and scanning continues past them; there is no fatal
/// path. The function holds no state across calls.
pub fn scan(source: &str) -> ScanResult {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        for pattern in PATTERNS.iter() {
            // A rule only claims the position the cursor is at; a match
            // further right belongs to a later iteration.
            if let Some(matched) = lex.match_here(&pattern.regex) {
                if matched.start() == lex.pos {
                    (pattern.handler)(&mut lex, &pattern.regex);
                    break;
                }
            }
        }
    }

    ScanResult {
        tokens: lex.tokens,
        errors: lex.errors,
    }
}
