use std::fmt;

use serde::{Deserialize, Serialize};

use super::Dialect;

/// The top-level `prql` dialect and version declaration.
///
/// Syntax: `prql version:{integer} dialect:{string}`. Both parts are
/// optional; an absent version means "any" and an absent dialect means
/// [`Dialect::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub version: Option<u32>,

    #[serde(default)]
    pub dialect: Dialect,
}

impl Query {
    pub fn new(version: Option<u32>, dialect: Dialect) -> Self {
        Self { version, dialect }
    }
}

impl fmt::Display for Query {
    /// Renders the PRQL expression for declaring this header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prql")?;

        if let Some(version) = self.version {
            write!(f, " version:{version}")?;
        }

        if self.dialect != Dialect::Generic {
            write!(f, " dialect:{}", self.dialect)?;
        }

        Ok(())
    }
}
