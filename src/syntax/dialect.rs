use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, IntoStaticStr, Display, EnumIter, EnumString};

/// The accepted target SQL dialects, declared by the top-level `prql`
/// expression.
///
/// Text forms are lowercase and case-sensitive, e.g. `dialect:postgres`.
/// An undeclared dialect defaults to [`Dialect::Generic`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Generic,
    Ansi,
    BigQuery,
    ClickHouse,
    Hive,
    Mssql,
    Mysql,
    Postgres,
    Sqlite,
    Snowflake,
}

impl Dialect {
    /// Constant lowercase name for this dialect, e.g. `"bigquery"`.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Dialect::Generic.name(), "generic");
        assert_eq!(Dialect::BigQuery.name(), "bigquery");
        assert_eq!(Dialect::ClickHouse.name(), "clickhouse");
        assert_eq!(Dialect::Mssql.name(), "mssql");
        assert_eq!(Dialect::Snowflake.name(), "snowflake");
    }

    #[test]
    fn test_name_round_trip() {
        for dialect in Dialect::iter() {
            assert_eq!(Dialect::from_str(dialect.name()).unwrap(), dialect);
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!(Dialect::from_str("Postgres").is_err());
        assert_eq!(Dialect::from_str("postgres").unwrap(), Dialect::Postgres);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Dialect::ClickHouse).unwrap();
        assert_eq!(json, r#""clickhouse""#);
        let back: Dialect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Dialect::ClickHouse);
    }
}
