//! Dialect-tagged operation spec

use serde::{Deserialize, Serialize};
use serde_json::Value;
use zqlz_core::{QueryDialect, Result, ZqlzError};

use super::{MongoOperation, SqlOperation};
use crate::catalog::OperationDescriptor;

/// Key carrying the operation tag in serialized specs
pub const OPERATION_KIND_KEY: &str = "operationKind";

/// The single operation currently being configured
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "dialect", content = "operation")]
pub enum OperationSpec {
    #[serde(rename = "sql")]
    Sql(SqlOperation),
    #[serde(rename = "mongodb")]
    Mongo(MongoOperation),
}

impl OperationSpec {
    /// The operation a fresh form starts with
    pub fn default_for(dialect: QueryDialect) -> Self {
        match dialect {
            QueryDialect::Sql => Self::Sql(SqlOperation::default()),
            QueryDialect::Mongo => Self::Mongo(MongoOperation::default()),
        }
    }

    /// Every catalog operation of a dialect with empty parameters
    pub fn all(dialect: QueryDialect) -> Vec<Self> {
        match dialect {
            QueryDialect::Sql => SqlOperation::all().into_iter().map(Self::Sql).collect(),
            QueryDialect::Mongo => MongoOperation::all().into_iter().map(Self::Mongo).collect(),
        }
    }

    /// Look up an operation tag and return it with empty parameters
    pub fn empty(dialect: QueryDialect, operation_kind: &str) -> Result<Self> {
        Self::all(dialect)
            .into_iter()
            .find(|spec| spec.operation_kind() == operation_kind)
            .ok_or_else(|| ZqlzError::UnknownOperation(operation_kind.to_string()))
    }

    /// Decode an internally tagged spec (`{"operationKind": ..., ...}`)
    pub fn from_value(dialect: QueryDialect, value: Value) -> Result<Self> {
        let operation_kind = value
            .get(OPERATION_KIND_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default();
        // Reject unknown tags before serde so the error names the operation.
        Self::empty(dialect, operation_kind)?;

        let spec = match dialect {
            QueryDialect::Sql => Self::Sql(serde_json::from_value(value)?),
            QueryDialect::Mongo => Self::Mongo(serde_json::from_value(value)?),
        };
        Ok(spec)
    }

    pub fn from_json(dialect: QueryDialect, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(dialect, value)
    }

    pub fn dialect(&self) -> QueryDialect {
        match self {
            Self::Sql(_) => QueryDialect::Sql,
            Self::Mongo(_) => QueryDialect::Mongo,
        }
    }

    /// Catalog entry of the active variant
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        match self {
            Self::Sql(op) => op.descriptor(),
            Self::Mongo(op) => op.descriptor(),
        }
    }

    pub fn operation_kind(&self) -> &'static str {
        self.descriptor().tag
    }

    /// Table or collection the operation targets
    pub fn target_name(&self) -> Option<&str> {
        match self {
            Self::Sql(op) => op.table_name(),
            Self::Mongo(op) => op.collection_name(),
        }
    }

    pub fn set_target_name(&mut self, name: impl Into<String>) {
        match self {
            Self::Sql(op) => op.set_table_name(name),
            Self::Mongo(op) => op.set_collection_name(name),
        }
    }
}

impl From<SqlOperation> for OperationSpec {
    fn from(op: SqlOperation) -> Self {
        Self::Sql(op)
    }
}

impl From<MongoOperation> for OperationSpec {
    fn from(op: MongoOperation) -> Self {
        Self::Mongo(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CollectionTarget, TableTarget};
    use serde_json::json;

    #[test]
    fn test_empty_by_tag() {
        let spec = OperationSpec::empty(QueryDialect::Sql, "clearTable").unwrap();
        assert_eq!(spec, SqlOperation::ClearTable(TableTarget::default()).into());

        // Same tag, different dialect
        let sql_index = OperationSpec::empty(QueryDialect::Sql, "createIndex").unwrap();
        let mongo_index = OperationSpec::empty(QueryDialect::Mongo, "createIndex").unwrap();
        assert_eq!(sql_index.dialect(), QueryDialect::Sql);
        assert_eq!(mongo_index.dialect(), QueryDialect::Mongo);

        assert!(matches!(
            OperationSpec::empty(QueryDialect::Mongo, "createTable"),
            Err(ZqlzError::UnknownOperation(tag)) if tag == "createTable"
        ));
    }

    #[test]
    fn test_from_value() {
        let spec = OperationSpec::from_value(
            QueryDialect::Mongo,
            json!({ "operationKind": "dropCollection", "collectionName": "logs" }),
        )
        .unwrap();
        assert_eq!(
            spec,
            MongoOperation::DropCollection(CollectionTarget::new("logs")).into()
        );
    }

    #[test]
    fn test_from_value_errors() {
        assert!(matches!(
            OperationSpec::from_value(QueryDialect::Sql, json!({ "tableName": "x" })),
            Err(ZqlzError::UnknownOperation(_))
        ));
        assert!(matches!(
            OperationSpec::from_value(
                QueryDialect::Sql,
                json!({ "operationKind": "createTable", "tableName": 42 })
            ),
            Err(ZqlzError::Serialization(_))
        ));
        assert!(OperationSpec::from_json(QueryDialect::Sql, "{not json").is_err());
    }

    #[test]
    fn test_adjacently_tagged_round_trip() {
        let spec: OperationSpec = SqlOperation::CreateTable(TableTarget::new("users")).into();
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "dialect": "sql",
                "operation": { "operationKind": "createTable", "tableName": "users" }
            })
        );
    }

    #[test]
    fn test_target_name() {
        let mut spec = OperationSpec::default_for(QueryDialect::Mongo);
        spec.set_target_name("events");
        assert_eq!(spec.target_name(), Some("events"));
        assert_eq!(spec.operation_kind(), "createCollection");
    }
}
