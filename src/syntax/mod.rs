//! # Syntax Support Types
//!
//! Data carriers shared by the lexer's consumers: the target SQL
//! [`Dialect`], the top-level [`Query`] header declaration, and the
//! [`Type`] vocabulary with literal inference. None of these perform any
//! parsing of their own; the tokenizer feeds them.

pub mod dialect;
pub mod query;
pub mod types;
pub mod value;

pub use dialect::Dialect;
pub use query::Query;
pub use types::{infer_type, Type, Typed};
pub use value::Value;
