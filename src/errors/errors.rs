use thiserror::Error;

/// The single lexical error kind: a character no token rule recognises.
///
/// Always recoverable. The scanner records the offender and moves on, so one
/// bad character never hides later tokens or errors. The display text is the
/// exact line the error panel shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Line {line}: illegal character '{ch}'")]
pub struct IllegalCharacter {
    /// 1-based line the character sits on.
    pub line: u32,
    pub ch: char,
}
