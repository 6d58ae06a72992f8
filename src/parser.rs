//! Stage parsing for PRQL token streams.
//!
//! Parsing is the phase after tokenization: Keyword-led stages separated by
//! Pipe tokens become an abstract syntax tree, which the generator then
//! lowers to SQL text. Only the entry point exists today; it reports an
//! unsupported-operation error until the grammar lands.

use std::collections::HashMap;

use crate::error::{Error, InternalResult};
use crate::tokenizer::Tokens;

/// Placeholder AST representation until stage parsing lands.
pub type Ast = HashMap<String, String>;

/// Parses a token stream into an AST.
///
/// Not implemented yet. Always returns an
/// [`ErrorKind::Unsupported`](crate::ErrorKind::Unsupported) error; syntax
/// errors discovered during parsing will use
/// [`ErrorKind::Syntax`](crate::ErrorKind::Syntax) once this lands.
#[tracing::instrument(level = "debug", skip(tokens))]
pub fn parse(tokens: &Tokens) -> InternalResult<Ast> {
    tracing::debug!(tokens = tokens.len(), "parse requested");
    Err(Error::unsupported("stage parsing is not implemented yet"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::tokenize;
    use crate::ErrorKind;

    #[test]
    fn test_parse_is_unsupported_for_now() {
        let tokens = tokenize("from employees");
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }
}
