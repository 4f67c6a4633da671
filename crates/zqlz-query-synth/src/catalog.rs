//! Operation catalog
//!
//! Every operation variant maps to exactly one descriptor through an
//! exhaustive match, and the renderers match on the same variants, so the
//! menu and the renderer set cannot drift apart.

use serde::Serialize;
use zqlz_core::QueryDialect;

use crate::models::{MongoOperation, OperationSpec, SqlOperation};

/// Catalog entry for one operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    /// Dispatch key, also the serialized `operationKind`
    pub tag: &'static str,
    /// Menu label
    pub label: &'static str,
    /// One-line help text
    pub description: &'static str,
    /// Parameter keys the template reads
    pub parameters: &'static [&'static str],
    /// Whether the field/column list is rendered
    pub uses_fields: bool,
}

/// Catalog for a dialect, in menu order
pub fn catalog(dialect: QueryDialect) -> Vec<&'static OperationDescriptor> {
    OperationSpec::all(dialect)
        .iter()
        .map(OperationSpec::descriptor)
        .collect()
}

/// Find the catalog entry for a tag
pub fn lookup(dialect: QueryDialect, tag: &str) -> Option<&'static OperationDescriptor> {
    catalog(dialect).into_iter().find(|entry| entry.tag == tag)
}

impl SqlOperation {
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        match self {
            Self::CreateTable(_) => &OperationDescriptor {
                tag: "createTable",
                label: "Create Table",
                description: "Generate a new table with custom columns",
                parameters: &["tableName"],
                uses_fields: true,
            },
            Self::CreateTableAs(_) => &OperationDescriptor {
                tag: "createTableAs",
                label: "Create Table As",
                description: "Create a table from a SELECT query",
                parameters: &["tableName", "sourceQuery"],
                uses_fields: false,
            },
            Self::DeleteTable(_) => &OperationDescriptor {
                tag: "deleteTable",
                label: "Delete Table",
                description: "Generate DROP TABLE statement",
                parameters: &["tableName"],
                uses_fields: false,
            },
            Self::AlterTable(_) => &OperationDescriptor {
                tag: "alterTable",
                label: "Alter Table",
                description: "Modify existing table structure",
                parameters: &["tableName", "action"],
                uses_fields: true,
            },
            Self::CreateIndex(_) => &OperationDescriptor {
                tag: "createIndex",
                label: "Create Index",
                description: "Add indexes to improve query performance",
                parameters: &["tableName", "indexType", "indexColumns"],
                uses_fields: false,
            },
            Self::CreateView(_) => &OperationDescriptor {
                tag: "createView",
                label: "Create View",
                description: "Create a virtual table based on query results",
                parameters: &["viewName", "sourceQuery"],
                uses_fields: false,
            },
            Self::CreateFunction(_) => &OperationDescriptor {
                tag: "createFunction",
                label: "Create Function",
                description: "Define custom SQL functions",
                parameters: &["functionName", "functionBody"],
                uses_fields: false,
            },
            Self::CreateTrigger(_) => &OperationDescriptor {
                tag: "createTrigger",
                label: "Create Trigger",
                description: "Set up automatic actions on table events",
                parameters: &["triggerName", "tableName", "triggerEvent", "functionName"],
                uses_fields: false,
            },
            Self::WindowFunction(_) => &OperationDescriptor {
                tag: "windowFunction",
                label: "Window Function",
                description: "Use analytical functions",
                parameters: &["tableName", "aggregateFunction", "whereClause"],
                uses_fields: true,
            },
            Self::UpdateTable(_) => &OperationDescriptor {
                tag: "updateTable",
                label: "Update Table",
                description: "Generate UPDATE statements",
                parameters: &["tableName", "setClause", "whereClause"],
                uses_fields: true,
            },
            Self::PivotTable(_) => &OperationDescriptor {
                tag: "pivotTable",
                label: "Pivot Table",
                description: "Transform rows into columns",
                parameters: &["tableName", "sourceQuery", "pivotColumns"],
                uses_fields: true,
            },
            Self::MergeTable(_) => &OperationDescriptor {
                tag: "mergeTable",
                label: "Merge Tables",
                description: "Combine data from multiple tables",
                parameters: &["tableName", "sourceQuery", "mergeCondition"],
                uses_fields: true,
            },
            Self::TempTable(_) => &OperationDescriptor {
                tag: "tempTable",
                label: "Create Temporary Table",
                description: "Create temporary tables",
                parameters: &["tableName"],
                uses_fields: true,
            },
            Self::ClearTable(_) => &OperationDescriptor {
                tag: "clearTable",
                label: "Clear Table",
                description: "Remove all data from a table",
                parameters: &["tableName"],
                uses_fields: false,
            },
            Self::Cte(_) => &OperationDescriptor {
                tag: "cte",
                label: "Create CTE",
                description: "Write Common Table Expressions",
                parameters: &["tableName", "cteQuery", "mainQuery"],
                uses_fields: false,
            },
            Self::Query(_) => &OperationDescriptor {
                tag: "query",
                label: "Custom Query",
                description: "Write custom SQL queries",
                parameters: &["customQuery"],
                uses_fields: false,
            },
        }
    }
}

impl MongoOperation {
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        match self {
            Self::CreateCollection(_) => &OperationDescriptor {
                tag: "createCollection",
                label: "Create Collection",
                description: "Create a new collection with schema validation",
                parameters: &["collectionName"],
                uses_fields: true,
            },
            Self::InsertOne(_) => &OperationDescriptor {
                tag: "insertOne",
                label: "Insert One Document",
                description: "Add a new document to a collection",
                parameters: &["collectionName", "documents"],
                uses_fields: false,
            },
            Self::InsertMany(_) => &OperationDescriptor {
                tag: "insertMany",
                label: "Insert Many Documents",
                description: "Add several documents to a collection",
                parameters: &["collectionName", "documents"],
                uses_fields: false,
            },
            Self::Find(_) => &OperationDescriptor {
                tag: "find",
                label: "Find Documents",
                description: "Query documents with a filter and projection",
                parameters: &["collectionName", "findQuery", "findOptions"],
                uses_fields: false,
            },
            Self::FindOne(_) => &OperationDescriptor {
                tag: "findOne",
                label: "Find One Document",
                description: "Fetch the first document matching a filter",
                parameters: &["collectionName", "findQuery", "findOptions"],
                uses_fields: false,
            },
            Self::UpdateOne(_) => &OperationDescriptor {
                tag: "updateOne",
                label: "Update One Document",
                description: "Modify the first document matching a filter",
                parameters: &["collectionName", "updateFilter", "updateOperation"],
                uses_fields: false,
            },
            Self::UpdateMany(_) => &OperationDescriptor {
                tag: "updateMany",
                label: "Update Many Documents",
                description: "Modify every document matching a filter",
                parameters: &["collectionName", "updateFilter", "updateOperation"],
                uses_fields: false,
            },
            Self::DeleteOne(_) => &OperationDescriptor {
                tag: "deleteOne",
                label: "Delete One Document",
                description: "Remove the first document matching a filter",
                parameters: &["collectionName", "deleteFilter"],
                uses_fields: false,
            },
            Self::DeleteMany(_) => &OperationDescriptor {
                tag: "deleteMany",
                label: "Delete Many Documents",
                description: "Remove every document matching a filter",
                parameters: &["collectionName", "deleteFilter"],
                uses_fields: false,
            },
            Self::CreateIndex(_) => &OperationDescriptor {
                tag: "createIndex",
                label: "Create Index",
                description: "Add indexes for query optimization",
                parameters: &["collectionName", "indexType", "indexFields", "indexOptions"],
                uses_fields: false,
            },
            Self::Aggregate(_) => &OperationDescriptor {
                tag: "aggregate",
                label: "Aggregate Pipeline",
                description: "Create data aggregation pipelines",
                parameters: &["collectionName", "groupByFields", "aggregateFunction", "pipeline"],
                uses_fields: false,
            },
            Self::Lookup(_) => &OperationDescriptor {
                tag: "lookup",
                label: "Lookup (Join)",
                description: "Perform left outer joins",
                parameters: &[
                    "sourceCollection",
                    "targetCollection",
                    "localField",
                    "foreignField",
                    "as",
                ],
                uses_fields: false,
            },
            Self::Validation(_) => &OperationDescriptor {
                tag: "validation",
                label: "Add Validation",
                description: "Add schema validation rules",
                parameters: &["collectionName", "validationLevel", "validationAction"],
                uses_fields: true,
            },
            Self::DropCollection(_) => &OperationDescriptor {
                tag: "dropCollection",
                label: "Drop Collection",
                description: "Remove a collection and its indexes",
                parameters: &["collectionName"],
                uses_fields: false,
            },
            Self::RenameCollection(_) => &OperationDescriptor {
                tag: "renameCollection",
                label: "Rename Collection",
                description: "Give a collection a new name",
                parameters: &["collectionName", "targetCollection"],
                uses_fields: false,
            },
            Self::BulkWrite(_) => &OperationDescriptor {
                tag: "bulkWrite",
                label: "Bulk Write Operations",
                description: "Run several write operations in one call",
                parameters: &["collectionName", "operations"],
                uses_fields: false,
            },
            Self::Distinct(_) => &OperationDescriptor {
                tag: "distinct",
                label: "Distinct Values",
                description: "List the distinct values of a field",
                parameters: &["collectionName", "distinctField", "distinctQuery"],
                uses_fields: false,
            },
            Self::FindAndModify(_) => &OperationDescriptor {
                tag: "findAndModify",
                label: "Find and Modify",
                description: "Atomically update and return a document",
                parameters: &["collectionName", "query", "update"],
                uses_fields: false,
            },
            Self::MapReduce(_) => &OperationDescriptor {
                tag: "mapReduce",
                label: "Map-Reduce Operation",
                description: "Aggregate with map and reduce functions",
                parameters: &[
                    "collectionName",
                    "mapFunction",
                    "reduceFunction",
                    "outputCollection",
                ],
                uses_fields: false,
            },
            Self::TextSearch(_) => &OperationDescriptor {
                tag: "textSearch",
                label: "Text Search",
                description: "Search a text index",
                parameters: &["collectionName", "searchTerm", "language"],
                uses_fields: false,
            },
            Self::CreateFunction(_) => &OperationDescriptor {
                tag: "createFunction",
                label: "Create Function",
                description: "Store a server-side JavaScript function",
                parameters: &["functionName", "functionParameters", "functionBody"],
                uses_fields: false,
            },
            Self::CustomQuery(_) => &OperationDescriptor {
                tag: "customQuery",
                label: "Custom Query",
                description: "Write custom MongoDB queries",
                parameters: &["customQuery"],
                uses_fields: false,
            },
        }
    }
}
