//! # Token Model
//!
//! The immutable result unit of lexical analysis. A [`Token`] pairs a
//! [`TokenKind`] with the decoded source text and the physical position the
//! token started on. Tokens carry no behavior beyond construction and a
//! constant diagnostic name per kind; all classification logic lives in
//! [`lexer`](super::lexer).

use std::fmt;

use strum_macros::{AsRefStr, IntoStaticStr, Display, EnumIter, EnumString};

/// The classification of a single token, or the context in which it is held.
///
/// This is a closed enumeration: the lexer only ever emits the kinds below,
/// with [`TokenKind::Unknown`] reserved as a zero-value default that should
/// never surface for real content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum TokenKind {
    /// Zero-value default for unknown, and possibly erroneous, tokens.
    #[default]
    #[strum(serialize = "UNKNOWN")]
    Unknown,

    /// Pipeline operator `|`, either explicitly present or implicit at the
    /// end of a line.
    #[strum(serialize = "PIPE")]
    Pipe,

    /// The contents of a comment, preserved for downstream tooling.
    #[strum(serialize = "COMMENT")]
    Comment,

    /// A transform keyword: the first word of a pipeline stage.
    #[strum(serialize = "KEYWORD")]
    Keyword,

    /// Generic user-space content within a stage, such as an alias, a
    /// reference, a number literal, or an operator word like `==`.
    #[strum(serialize = "GENERIC")]
    Generic,

    /// An operator which matters within the context of surrounding tokens,
    /// such as `[`, `]`, `(`, `)`, or `=`.
    #[strum(serialize = "OPERATOR")]
    Operator,

    /// The contents of a string literal, decoded from between its
    /// delimiters (or combinations of them, for block strings).
    #[strum(serialize = "STRING")]
    String,

    /// The contents of an f-string, a `f`-prefixed format string.
    #[strum(serialize = "F-STRING")]
    FString,

    /// The contents of an s-string, an `s`-prefixed raw SQL fragment.
    #[strum(serialize = "S-STRING")]
    SString,
}

impl TokenKind {
    /// Constant diagnostic name for this kind, e.g. `"KEYWORD"`.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// A classified slice of source text together with its start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The inferred kind of the token.
    pub kind: TokenKind,

    /// The decoded token contents, excluding any delimiter characters.
    pub value: String,

    /// The line this token started on, regardless of pipeline operators.
    /// This is a 1-based index.
    pub line: u32,

    /// The character within the line that this token started on, regardless
    /// of pipeline operators. This is a 1-based index.
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} `{}`",
            self.line, self.column, self.kind, self.value
        )
    }
}

/// An ordered token sequence. Insertion order is significant and equals
/// source order.
pub type Tokens = Vec<Token>;
