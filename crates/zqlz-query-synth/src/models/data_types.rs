//! Data type tables and default-value resolution
//!
//! One static table per dialect maps a type tag to the literal that is
//! used as the default value when a field switches to that type.

use serde::Serialize;
use zqlz_core::QueryDialect;

/// Keyword that replaces the declared type of an auto-increment SQL column
pub const SQL_AUTO_INCREMENT_TYPE: &str = "SERIAL";

/// Information about a data type offered for a dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeInfo {
    /// Type tag as emitted in generated text
    pub name: &'static str,
    /// Literal default for the type, if it has one
    pub default_value: Option<&'static str>,
    /// Short description for the UI
    pub description: &'static str,
}

impl DataTypeInfo {
    const fn new(
        name: &'static str,
        default_value: Option<&'static str>,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            default_value,
            description,
        }
    }
}

static SQL_TYPES: &[DataTypeInfo] = &[
    DataTypeInfo::new("INT", Some("0"), "Whole numbers"),
    DataTypeInfo::new("BIGINT", Some("0"), "Large whole numbers"),
    DataTypeInfo::new("VARCHAR(255)", Some("''"), "Variable-length text"),
    DataTypeInfo::new("TEXT", Some("''"), "Unlimited length text"),
    DataTypeInfo::new("BOOLEAN", Some("false"), "True/false values"),
    DataTypeInfo::new("DATE", Some("CURRENT_DATE"), "Date values"),
    DataTypeInfo::new("TIMESTAMP", Some("CURRENT_TIMESTAMP"), "Date and time values"),
    DataTypeInfo::new("DECIMAL(10,2)", Some("0.00"), "Precise decimal numbers"),
    DataTypeInfo::new("UUID", Some("gen_random_uuid()"), "Unique identifiers"),
    DataTypeInfo::new("JSONB", Some("'{}'"), "JSON data with indexing"),
    // Auto-increment has no literal default; the sequence is the default.
    DataTypeInfo::new("SERIAL", None, "Auto-incrementing integers"),
    DataTypeInfo::new("FLOAT", Some("0.0"), "Floating-point numbers"),
    DataTypeInfo::new("BYTEA", Some("''"), "Binary data"),
    DataTypeInfo::new("ARRAY", Some("'{}'"), "Array of values"),
    DataTypeInfo::new("REGEXP_LIKE", None, "Regular expression matching"),
    DataTypeInfo::new("REGEXP_COUNT", None, "Regular expression counting"),
];

static MONGO_TYPES: &[DataTypeInfo] = &[
    DataTypeInfo::new("String", Some("\"\""), "Text data"),
    DataTypeInfo::new("Number", Some("0"), "Numeric values"),
    DataTypeInfo::new("Date", Some("new Date()"), "Date and time values"),
    DataTypeInfo::new("Boolean", Some("false"), "True/false values"),
    DataTypeInfo::new("ObjectId", Some("ObjectId()"), "Unique document identifiers"),
    DataTypeInfo::new("Array", Some("[]"), "Lists of values"),
    DataTypeInfo::new("Object", Some("{}"), "Embedded documents"),
    DataTypeInfo::new("Decimal128", Some("NumberDecimal('0')"), "High-precision decimals"),
    DataTypeInfo::new("Binary", Some("Binary('')"), "Binary data"),
    DataTypeInfo::new("Mixed", Some("null"), "Any type of data"),
];

/// Get available data types for a dialect, in menu order
pub fn get_data_types(dialect: QueryDialect) -> &'static [DataTypeInfo] {
    match dialect {
        QueryDialect::Sql => SQL_TYPES,
        QueryDialect::Mongo => MONGO_TYPES,
    }
}

/// Look up the data type entry for an exact type tag
pub fn find_data_type(dialect: QueryDialect, data_type: &str) -> Option<&'static DataTypeInfo> {
    get_data_types(dialect)
        .iter()
        .find(|info| info.name == data_type)
}

/// Type assigned to a freshly created field
pub fn initial_data_type(dialect: QueryDialect) -> &'static str {
    match dialect {
        QueryDialect::Sql => "VARCHAR(255)",
        QueryDialect::Mongo => "String",
    }
}

/// Resolve the literal default for a type tag.
///
/// Returns `None` for unknown tags and for types without a literal default.
pub fn resolve_default(dialect: QueryDialect, data_type: &str) -> Option<&'static str> {
    find_data_type(dialect, data_type).and_then(|info| info.default_value)
}

/// Same as [`resolve_default`], with "no default" flattened to an empty string
pub fn default_value_for(dialect: QueryDialect, data_type: &str) -> String {
    resolve_default(dialect, data_type)
        .unwrap_or_default()
        .to_string()
}

/// Whether the UI should allow the auto-increment switch for a SQL type
pub fn supports_auto_increment(data_type: &str) -> bool {
    matches!(data_type, "INT" | "BIGINT")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_defaults() {
        assert_eq!(resolve_default(QueryDialect::Sql, "INT"), Some("0"));
        assert_eq!(resolve_default(QueryDialect::Sql, "VARCHAR(255)"), Some("''"));
        assert_eq!(
            resolve_default(QueryDialect::Sql, "TIMESTAMP"),
            Some("CURRENT_TIMESTAMP")
        );
        assert_eq!(resolve_default(QueryDialect::Mongo, "Date"), Some("new Date()"));
        assert_eq!(resolve_default(QueryDialect::Mongo, "String"), Some("\"\""));
    }

    #[test]
    fn test_resolve_without_default() {
        assert_eq!(resolve_default(QueryDialect::Sql, "SERIAL"), None);
        assert_eq!(resolve_default(QueryDialect::Sql, "REGEXP_LIKE"), None);
        assert_eq!(resolve_default(QueryDialect::Sql, "GEOMETRY"), None);
        // Tags are dialect scoped
        assert_eq!(resolve_default(QueryDialect::Mongo, "INT"), None);
        assert_eq!(default_value_for(QueryDialect::Sql, "SERIAL"), "");
    }

    #[test]
    fn test_resolve_is_total_and_stable() {
        for dialect in QueryDialect::all() {
            for info in get_data_types(dialect) {
                let first = resolve_default(dialect, info.name);
                assert_eq!(first, resolve_default(dialect, info.name));
                assert_eq!(first, info.default_value);
            }
        }
    }

    #[test]
    fn test_initial_type_is_listed() {
        for dialect in QueryDialect::all() {
            assert!(find_data_type(dialect, initial_data_type(dialect)).is_some());
        }
    }

    #[test]
    fn test_supports_auto_increment() {
        assert!(supports_auto_increment("INT"));
        assert!(supports_auto_increment("BIGINT"));
        assert!(!supports_auto_increment("TEXT"));
        assert!(!supports_auto_increment(SQL_AUTO_INCREMENT_TYPE));
    }
}
