//! Crate-wide error model.
//!
//! The lexer itself is total and never produces an error; everything here
//! exists for the boundaries around it: the size guard on
//! [`compile`](crate::compile), the not-yet-implemented downstream stages,
//! and the syntax errors a future parser will raise.

use strum_macros::{AsRefStr, IntoStaticStr, Display, EnumString};
use thiserror::Error;

/// Broad classification of an [`Error`], with a stable constant name per
/// kind for diagnostics and wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display, EnumString, IntoStaticStr)]
pub enum ErrorKind {
    /// Zero-value default. Reserved for truly unknown errors, which should
    /// be treated as fatal.
    #[default]
    #[strum(serialize = "UNKNOWN")]
    Unknown,

    /// A client error in the input PRQL query, raised during parsing.
    #[strum(serialize = "SYNTAX")]
    Syntax,

    /// The input exceeded a configured resource limit, such as the maximum
    /// source length.
    #[strum(serialize = "RESOURCE-LIMIT")]
    ResourceLimit,

    /// The requested operation is not implemented yet.
    #[strum(serialize = "UNSUPPORTED")]
    Unsupported,
}

impl ErrorKind {
    /// Constant diagnostic name for this kind, e.g. `"SYNTAX"`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// True when the kind is within the range of known errors, excluding
    /// [`ErrorKind::Unknown`].
    pub fn valid(&self) -> bool {
        !matches!(self, ErrorKind::Unknown)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("resource limit exceeded: {0}")]
    ResourceLimit(String),

    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

// Helper constructors, so call sites stay terse.
impl Error {
    pub fn syntax<S: Into<String>>(message: S) -> Self {
        Error::Syntax(message.into())
    }

    pub fn resource_limit<S: Into<String>>(message: S) -> Self {
        Error::ResourceLimit(message.into())
    }

    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Error::Unsupported(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax(_) => ErrorKind::Syntax,
            Error::ResourceLimit(_) => ErrorKind::ResourceLimit,
            Error::Unsupported(_) => ErrorKind::Unsupported,
            Error::Internal(_) => ErrorKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::Unknown.name(), "UNKNOWN");
        assert_eq!(ErrorKind::Syntax.name(), "SYNTAX");
        assert_eq!(ErrorKind::ResourceLimit.name(), "RESOURCE-LIMIT");
        assert_eq!(ErrorKind::Unsupported.name(), "UNSUPPORTED");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(ErrorKind::from_str("SYNTAX").unwrap(), ErrorKind::Syntax);
        assert!(ErrorKind::from_str("syntax").is_err());
    }

    #[test]
    fn test_kind_validity() {
        assert!(ErrorKind::Syntax.valid());
        assert!(ErrorKind::ResourceLimit.valid());
        assert!(!ErrorKind::Unknown.valid());
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(Error::syntax("x").kind(), ErrorKind::Syntax);
        assert_eq!(Error::resource_limit("x").kind(), ErrorKind::ResourceLimit);
        assert_eq!(Error::unsupported("x").kind(), ErrorKind::Unsupported);
        assert_eq!(Error::internal("x").kind(), ErrorKind::Unknown);
    }

    #[test]
    fn test_error_display() {
        let err = Error::syntax("unexpected token `)` at 3:7");
        assert_eq!(err.to_string(), "syntax error: unexpected token `)` at 3:7");
    }
}
