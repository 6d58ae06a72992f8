//! # PRQL Front End
//!
//! A front end for PRQL, a human-readable, pipelined query language that
//! transpiles into SQL. Queries are sequences of transform stages separated
//! by the pipeline operator `|` or, equivalently, by newlines:
//!
//! ```prql
//! from employees
//! filter country_code == "USA"
//! derive [gross_salary = s'salary + payroll_tax']
//! sort gross_salary
//! ```
//!
//! The fully realized phase is the [`tokenizer`]; the parser and the SQL
//! generator behind [`compile`] are stubs that return an
//! [`ErrorKind::Unsupported`] error until they land.
//!
//! ```
//! use prql::tokenizer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("filter country == 'USA'");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[0].value, "filter");
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod syntax;
pub mod tokenizer;

// Re-exports
pub use config::CompileConfig;
pub use error::{Error, ErrorKind, InternalResult};
pub use tokenizer::{tokenize, Token, TokenKind, Tokens};

/// Compiles an incoming PRQL query into its SQL standard equivalent, using
/// the default [`CompileConfig`].
#[tracing::instrument(level = "debug", skip(source))]
pub fn compile(source: &str) -> InternalResult<String> {
    compile_with(source, &CompileConfig::default())
}

/// Compiles an incoming PRQL query into its SQL standard equivalent.
///
/// The configured source-length limit is enforced before tokenization; the
/// lexer itself is total and unbounded. Until the parser and generator
/// land, every in-limit query returns an [`ErrorKind::Unsupported`] error.
#[tracing::instrument(level = "debug", skip(source, config))]
pub fn compile_with(source: &str, config: &CompileConfig) -> InternalResult<String> {
    let length = source.chars().count();
    if length > config.max_source_len {
        return Err(Error::resource_limit(format!(
            "source is {length} characters, the configured maximum is {}",
            config.max_source_len
        )));
    }

    let tokens = tokenizer::tokenize(source);
    tracing::debug!(tokens = tokens.len(), "tokenized source");

    let _ast = parser::parse(&tokens)?;
    Err(Error::unsupported("SQL generation is not implemented yet"))
}
