use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use lazy_static::lazy_static;
use regex::Regex;
use strum_macros::{AsRefStr, IntoStaticStr, Display, EnumIter, EnumString};

use crate::error::{Error, InternalResult};

/// The type declaration attached to a PRQL value or parameter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Type {
    /// An unknown, erroneous type declaration.
    #[default]
    Unknown,
    Boolean,
    /// An integer, signed or unsigned.
    Integer,
    Scalar,
    Float,
    /// A string, variable length by default.
    String,
    /// A temporal date, no time included.
    Date,
    /// A temporal time, no date included.
    Time,
    /// A temporal timestamp; both date and time are included.
    Timestamp,
    /// A table reference.
    Table,
    /// A column reference.
    Column,
}

impl Type {
    /// Constant lowercase name for this type, e.g. `"timestamp"`.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

lazy_static! {
    /// Matches numeric literals and their scientific/suffixed forms.
    static ref RE_NUMERIC: Regex =
        Regex::new(r"(?i)^[+-]?(?:\d*\.?)\d+(?:e[+-]?\d+)?[df]?$").unwrap();
}

/// Attempts to guess (infer) the type of a literal string.
///
/// Quote-delimited literals are strings, numeric literals are scalars.
/// Bare words come back as [`Type::Unknown`]: a reference to a table or a
/// column cannot be told apart here, since both need context within the
/// scope of their expression.
pub fn infer_type(literal: &str) -> InternalResult<Type> {
    let mut chars = literal.chars();
    let Some(first) = chars.next() else {
        return Err(Error::syntax("cannot infer type of an empty literal"));
    };

    if first == '\'' || first == '"' {
        if chars.next_back() != Some(first) {
            return Err(Error::syntax(format!(
                "string literal {literal} does not terminate with the same character {first}"
            )));
        }
        return Ok(Type::String);
    }

    if RE_NUMERIC.is_match(literal) {
        return Ok(Type::Scalar);
    }

    Ok(Type::Unknown)
}

/// Maps native values onto their PRQL [`Type`].
///
/// This is the static counterpart of inferring a literal: values bound as
/// parameters already carry a Rust type, so no guessing is involved.
pub trait Typed {
    fn prql_type(&self) -> Type;
}

macro_rules! impl_typed {
    ($typ:expr => $($native:ty),+) => {
        $(
            impl Typed for $native {
                fn prql_type(&self) -> Type {
                    $typ
                }
            }
        )+
    };
}

impl_typed!(Type::Boolean => bool);
impl_typed!(Type::Integer => i8, i16, i32, i64, u8, u16, u32, u64);
impl_typed!(Type::Float => f32, f64);
impl_typed!(Type::String => &str, String);
impl_typed!(Type::Date => NaiveDate);
impl_typed!(Type::Time => NaiveTime);

impl<Tz: TimeZone> Typed for DateTime<Tz> {
    fn prql_type(&self) -> Type {
        // There is no way to tell a timestamp apart from anything narrower.
        Type::Timestamp
    }
}
