//! # Tokenizer Component
//!
//! Lexical analysis for PRQL source code: raw text goes in, an ordered
//! [`Tokens`] sequence comes out, ready for the parser to assemble into
//! Keyword-led pipeline stages separated by [`TokenKind::Pipe`] tokens.
//!
//! ## Component Structure
//!
//! * [`token`]: the token model — [`Token`], [`TokenKind`], [`Tokens`]
//! * [`lexer`]: the single-pass state machine behind [`tokenize`]
//!
//! ## Position Tracking
//!
//! Every token records the 1-based line and column of its first character,
//! measured against the physical source text. Pipeline normalization (the
//! equivalence of `|` and newline) never shifts reported positions, so
//! error messages from later phases can always point back into the source.
//!
//! ## Leniency
//!
//! Tokenization is total and never returns an error; see [`lexer`] for how
//! unterminated constructs are handled. Input-size limiting is a concern of
//! the [`compile`](crate::compile) boundary, not of the lexer.

pub mod lexer;
pub mod token;

pub use lexer::tokenize;
pub use token::{Token, TokenKind, Tokens};
