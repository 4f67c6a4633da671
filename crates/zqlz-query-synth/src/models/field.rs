//! Field/column model
//!
//! A single `Field` type serves both dialects. SQL-only flags
//! (`is_primary_key`, `is_auto_increment`) are ignored by Mongo renderers and
//! `validation` is ignored by SQL renderers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use zqlz_core::{QueryDialect, Result, ZqlzError};

use super::data_types::{default_value_for, initial_data_type};

/// Column (SQL) or document field (Mongo) definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Field {
    /// Field or column name
    pub name: String,
    /// Type tag from the dialect's type table
    #[serde(rename = "type")]
    pub data_type: String,
    /// NOT NULL (SQL) / listed in `required` (Mongo)
    pub required: bool,
    /// UNIQUE constraint or unique index
    pub unique: bool,
    /// SQL only
    pub is_primary_key: bool,
    /// SQL only
    pub is_auto_increment: bool,
    /// Literal default, empty for none
    pub default_value: String,
    /// Extra `$jsonSchema` keywords, Mongo only
    pub validation: String,
}

impl Field {
    /// Create an empty field with the dialect's initial type and its default
    pub fn new(dialect: QueryDialect) -> Self {
        let data_type = initial_data_type(dialect);
        Self {
            data_type: data_type.to_string(),
            default_value: default_value_for(dialect, data_type),
            ..Default::default()
        }
    }

    /// Create a field with a specific name
    pub fn named(dialect: QueryDialect, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new(dialect)
        }
    }

    /// Builder: set the type, re-deriving the default value
    pub fn with_type(mut self, dialect: QueryDialect, data_type: impl Into<String>) -> Self {
        self.apply(dialect, FieldAttribute::DataType(data_type.into()));
        self
    }

    /// Builder: set as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Builder: set as unique
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Builder: set as primary key
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Builder: set as auto increment
    pub fn auto_increment(mut self) -> Self {
        self.is_auto_increment = true;
        self
    }

    /// Builder: set default value
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Builder: set Mongo validation keywords
    pub fn validation(mut self, rules: impl Into<String>) -> Self {
        self.validation = rules.into();
        self
    }

    pub fn has_default(&self) -> bool {
        !self.default_value.trim().is_empty()
    }

    /// Apply a single attribute edit.
    ///
    /// Changing the type always overwrites the default value with the new
    /// type's default, discarding anything entered by hand.
    pub fn apply(&mut self, dialect: QueryDialect, attribute: FieldAttribute) {
        match attribute {
            FieldAttribute::Name(name) => self.name = name,
            FieldAttribute::DataType(data_type) => {
                self.default_value = default_value_for(dialect, &data_type);
                self.data_type = data_type;
            }
            FieldAttribute::Required(value) => self.required = value,
            FieldAttribute::Unique(value) => self.unique = value,
            FieldAttribute::PrimaryKey(value) => self.is_primary_key = value,
            FieldAttribute::AutoIncrement(value) => self.is_auto_increment = value,
            FieldAttribute::DefaultValue(value) => self.default_value = value,
            FieldAttribute::Validation(value) => self.validation = value,
        }
    }
}

/// One editable attribute of a field, carrying its new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAttribute {
    Name(String),
    DataType(String),
    Required(bool),
    Unique(bool),
    PrimaryKey(bool),
    AutoIncrement(bool),
    DefaultValue(String),
    Validation(String),
}

impl FieldAttribute {
    /// Attribute key as used by the form layer
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::DataType(_) => "type",
            Self::Required(_) => "required",
            Self::Unique(_) => "unique",
            Self::PrimaryKey(_) => "isPrimaryKey",
            Self::AutoIncrement(_) => "isAutoIncrement",
            Self::DefaultValue(_) => "defaultValue",
            Self::Validation(_) => "validation",
        }
    }

    /// Decode a string-keyed edit coming from a form layer
    pub fn parse(attribute: &str, value: &Value) -> Result<Self> {
        let text = || {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(attribute, "expected a string"))
        };
        let flag = || {
            value
                .as_bool()
                .ok_or_else(|| invalid(attribute, "expected a boolean"))
        };

        match attribute {
            "name" => Ok(Self::Name(text()?)),
            "type" => Ok(Self::DataType(text()?)),
            "required" => Ok(Self::Required(flag()?)),
            "unique" => Ok(Self::Unique(flag()?)),
            "isPrimaryKey" => Ok(Self::PrimaryKey(flag()?)),
            "isAutoIncrement" => Ok(Self::AutoIncrement(flag()?)),
            "defaultValue" => Ok(Self::DefaultValue(text()?)),
            "validation" => Ok(Self::Validation(text()?)),
            other => Err(ZqlzError::UnknownAttribute(other.to_string())),
        }
    }
}

fn invalid(attribute: &str, message: &str) -> ZqlzError {
    ZqlzError::InvalidValue {
        attribute: attribute.to_string(),
        message: message.to_string(),
    }
}

/// Create a new field for the dialect
pub fn create_field(dialect: QueryDialect) -> Field {
    Field::new(dialect)
}

/// Return a copy of `fields` with one attribute of the field at `index` replaced.
///
/// An out-of-range index returns the list unchanged.
pub fn set_field(
    dialect: QueryDialect,
    fields: &[Field],
    index: usize,
    attribute: FieldAttribute,
) -> Vec<Field> {
    let mut updated = fields.to_vec();
    match updated.get_mut(index) {
        Some(field) => {
            tracing::debug!(index, attribute = attribute.key(), "updating field");
            field.apply(dialect, attribute);
        }
        None => {
            tracing::debug!(index, len = fields.len(), "field index out of range, ignoring edit");
        }
    }
    updated
}

/// Return a copy of `fields` without the field at `index`.
///
/// An out-of-range index returns the list unchanged.
pub fn remove_field(fields: &[Field], index: usize) -> Vec<Field> {
    fields
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, field)| field.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_field_defaults() {
        let sql = create_field(QueryDialect::Sql);
        assert_eq!(sql.data_type, "VARCHAR(255)");
        assert_eq!(sql.default_value, "''");
        assert!(sql.name.is_empty());
        assert!(!sql.required && !sql.unique && !sql.is_primary_key && !sql.is_auto_increment);

        let mongo = create_field(QueryDialect::Mongo);
        assert_eq!(mongo.data_type, "String");
        assert_eq!(mongo.default_value, "\"\"");
    }

    #[test]
    fn test_with_default_builder() {
        let blank = Field::default();
        assert!(!blank.has_default());

        let field = Field::default().with_default("42");
        assert_eq!(field.default_value, "42");
        assert_eq!(field, Field { default_value: "42".to_string(), ..Field::default() });
    }

    #[test]
    fn test_type_change_clobbers_manual_default() {
        let fields = vec![Field::named(QueryDialect::Sql, "age").with_default("42")];

        let fields = set_field(
            QueryDialect::Sql,
            &fields,
            0,
            FieldAttribute::DataType("TIMESTAMP".to_string()),
        );
        assert_eq!(fields[0].data_type, "TIMESTAMP");
        assert_eq!(fields[0].default_value, "CURRENT_TIMESTAMP");

        let fields = set_field(
            QueryDialect::Sql,
            &fields,
            0,
            FieldAttribute::DataType("SERIAL".to_string()),
        );
        assert_eq!(fields[0].default_value, "");
    }

    #[test]
    fn test_unknown_type_clears_default() {
        let field = Field::named(QueryDialect::Mongo, "geo")
            .with_default("{}")
            .with_type(QueryDialect::Mongo, "GeoJSON");
        assert_eq!(field.data_type, "GeoJSON");
        assert_eq!(field.default_value, "");
    }

    #[test]
    fn test_other_attributes_leave_default_alone() {
        let fields = vec![Field::named(QueryDialect::Sql, "email").with_default("'x'")];
        let fields = set_field(QueryDialect::Sql, &fields, 0, FieldAttribute::Required(true));
        let fields = set_field(
            QueryDialect::Sql,
            &fields,
            0,
            FieldAttribute::Name("mail".to_string()),
        );
        assert!(fields[0].required);
        assert_eq!(fields[0].name, "mail");
        assert_eq!(fields[0].default_value, "'x'");
    }

    #[test]
    fn test_set_field_out_of_range_is_noop() {
        let fields = vec![Field::named(QueryDialect::Sql, "id")];
        let updated = set_field(QueryDialect::Sql, &fields, 3, FieldAttribute::Unique(true));
        assert_eq!(updated, fields);
    }

    #[test]
    fn test_remove_field() {
        let fields = vec![
            Field::named(QueryDialect::Sql, "a"),
            Field::named(QueryDialect::Sql, "b"),
            Field::named(QueryDialect::Sql, "a"),
        ];

        let removed = remove_field(&fields, 1);
        let names: Vec<&str> = removed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "a"]);

        assert_eq!(remove_field(&fields, 10), fields);
        assert!(remove_field(&[], 0).is_empty());
    }

    #[test]
    fn test_parse_attribute() {
        assert_eq!(
            FieldAttribute::parse("type", &json!("INT")).unwrap(),
            FieldAttribute::DataType("INT".to_string())
        );
        assert_eq!(
            FieldAttribute::parse("isPrimaryKey", &json!(true)).unwrap(),
            FieldAttribute::PrimaryKey(true)
        );
        assert!(matches!(
            FieldAttribute::parse("required", &json!("yes")),
            Err(ZqlzError::InvalidValue { .. })
        ));
        assert!(matches!(
            FieldAttribute::parse("colour", &json!("red")),
            Err(ZqlzError::UnknownAttribute(_))
        ));
    }

    #[test]
    fn test_field_serde_shape() {
        let field: Field = serde_json::from_value(json!({
            "name": "id",
            "type": "INT",
            "isPrimaryKey": true
        }))
        .unwrap();
        assert_eq!(field.data_type, "INT");
        assert!(field.is_primary_key);
        assert!(!field.required);
        assert_eq!(field.default_value, "");
    }
}
