//! MongoDB shell operation specs

use serde::{Deserialize, Serialize};

pub use super::sql_operation::CustomQuery;

/// A configured MongoDB shell operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "operationKind", rename_all = "camelCase")]
pub enum MongoOperation {
    CreateCollection(CollectionTarget),
    InsertOne(InsertDocuments),
    InsertMany(InsertDocuments),
    Find(FindDocuments),
    FindOne(FindDocuments),
    UpdateOne(UpdateDocuments),
    UpdateMany(UpdateDocuments),
    DeleteOne(DeleteDocuments),
    DeleteMany(DeleteDocuments),
    CreateIndex(MongoIndex),
    Aggregate(Aggregate),
    Lookup(Lookup),
    Validation(Validation),
    DropCollection(CollectionTarget),
    RenameCollection(RenameCollection),
    BulkWrite(BulkWrite),
    Distinct(Distinct),
    FindAndModify(FindAndModify),
    MapReduce(MapReduce),
    TextSearch(TextSearch),
    CreateFunction(MongoFunction),
    CustomQuery(CustomQuery),
}

impl Default for MongoOperation {
    fn default() -> Self {
        Self::CreateCollection(CollectionTarget::default())
    }
}

impl MongoOperation {
    /// Every operation with empty parameters, in menu order
    pub fn all() -> Vec<Self> {
        vec![
            Self::CreateCollection(Default::default()),
            Self::InsertOne(Default::default()),
            Self::InsertMany(Default::default()),
            Self::Find(Default::default()),
            Self::FindOne(Default::default()),
            Self::UpdateOne(Default::default()),
            Self::UpdateMany(Default::default()),
            Self::DeleteOne(Default::default()),
            Self::DeleteMany(Default::default()),
            Self::CreateIndex(Default::default()),
            Self::Aggregate(Default::default()),
            Self::Lookup(Default::default()),
            Self::Validation(Default::default()),
            Self::DropCollection(Default::default()),
            Self::RenameCollection(Default::default()),
            Self::BulkWrite(Default::default()),
            Self::Distinct(Default::default()),
            Self::FindAndModify(Default::default()),
            Self::MapReduce(Default::default()),
            Self::TextSearch(Default::default()),
            Self::CreateFunction(Default::default()),
            Self::CustomQuery(Default::default()),
        ]
    }

    /// The collection this operation is run against, if it has one
    pub fn collection_name(&self) -> Option<&str> {
        match self {
            Self::CreateCollection(p) | Self::DropCollection(p) => Some(&p.collection_name),
            Self::InsertOne(p) | Self::InsertMany(p) => Some(&p.collection_name),
            Self::Find(p) | Self::FindOne(p) => Some(&p.collection_name),
            Self::UpdateOne(p) | Self::UpdateMany(p) => Some(&p.collection_name),
            Self::DeleteOne(p) | Self::DeleteMany(p) => Some(&p.collection_name),
            Self::CreateIndex(p) => Some(&p.collection_name),
            Self::Aggregate(p) => Some(&p.collection_name),
            Self::Lookup(p) => Some(&p.source_collection),
            Self::Validation(p) => Some(&p.collection_name),
            Self::RenameCollection(p) => Some(&p.collection_name),
            Self::BulkWrite(p) => Some(&p.collection_name),
            Self::Distinct(p) => Some(&p.collection_name),
            Self::FindAndModify(p) => Some(&p.collection_name),
            Self::MapReduce(p) => Some(&p.collection_name),
            Self::TextSearch(p) => Some(&p.collection_name),
            Self::CreateFunction(_) | Self::CustomQuery(_) => None,
        }
    }

    /// Set the target collection; a no-op for operations without one
    pub fn set_collection_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            Self::CreateCollection(p) | Self::DropCollection(p) => p.collection_name = name,
            Self::InsertOne(p) | Self::InsertMany(p) => p.collection_name = name,
            Self::Find(p) | Self::FindOne(p) => p.collection_name = name,
            Self::UpdateOne(p) | Self::UpdateMany(p) => p.collection_name = name,
            Self::DeleteOne(p) | Self::DeleteMany(p) => p.collection_name = name,
            Self::CreateIndex(p) => p.collection_name = name,
            Self::Aggregate(p) => p.collection_name = name,
            Self::Lookup(p) => p.source_collection = name,
            Self::Validation(p) => p.collection_name = name,
            Self::RenameCollection(p) => p.collection_name = name,
            Self::BulkWrite(p) => p.collection_name = name,
            Self::Distinct(p) => p.collection_name = name,
            Self::FindAndModify(p) => p.collection_name = name,
            Self::MapReduce(p) => p.collection_name = name,
            Self::TextSearch(p) => p.collection_name = name,
            Self::CreateFunction(_) | Self::CustomQuery(_) => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectionTarget {
    pub collection_name: String,
}

impl CollectionTarget {
    pub fn new(collection_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsertDocuments {
    pub collection_name: String,
    /// Document literal(s), emitted verbatim
    pub documents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FindDocuments {
    pub collection_name: String,
    pub find_query: String,
    /// Projection object
    pub find_options: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateDocuments {
    pub collection_name: String,
    pub update_filter: String,
    pub update_operation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteDocuments {
    pub collection_name: String,
    pub delete_filter: String,
}

/// Kind of index, emitted as a `type` option unless `Single`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MongoIndexType {
    #[default]
    Single,
    Compound,
    MultiKey,
    Text,
    Geospatial,
    Hashed,
    Unique,
    Partial,
    Sparse,
}

impl MongoIndexType {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Single,
            Self::Compound,
            Self::MultiKey,
            Self::Text,
            Self::Geospatial,
            Self::Hashed,
            Self::Unique,
            Self::Partial,
            Self::Sparse,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Compound => "compound",
            Self::MultiKey => "multiKey",
            Self::Text => "text",
            Self::Geospatial => "geospatial",
            Self::Hashed => "hashed",
            Self::Unique => "unique",
            Self::Partial => "partial",
            Self::Sparse => "sparse",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single Field",
            Self::Compound => "Compound Index",
            Self::MultiKey => "MultiKey Index",
            Self::Text => "Text Index",
            Self::Geospatial => "Geospatial Index",
            Self::Hashed => "Hashed Index",
            Self::Unique => "Unique Index",
            Self::Partial => "Partial Index",
            Self::Sparse => "Sparse Index",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MongoIndex {
    pub collection_name: String,
    pub index_type: MongoIndexType,
    /// Key specification, e.g. `{ email: 1 }`
    pub index_fields: String,
    /// Extra option lines, e.g. `unique: true`
    pub index_options: String,
}

/// Accumulator presets offered for the `$group` stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregatePreset {
    Count,
    Sum,
    Average,
    Minimum,
    Maximum,
    First,
    Last,
}

impl AggregatePreset {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Count,
            Self::Sum,
            Self::Average,
            Self::Minimum,
            Self::Maximum,
            Self::First,
            Self::Last,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Count => "Count",
            Self::Sum => "Sum",
            Self::Average => "Average",
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
            Self::First => "First",
            Self::Last => "Last",
        }
    }

    /// Accumulator text stored in `Aggregate::aggregate_function`
    pub fn accumulator(&self) -> &'static str {
        match self {
            Self::Count => "$sum: 1",
            Self::Sum => "$sum: '$field'",
            Self::Average => "$avg: '$field'",
            Self::Minimum => "$min: '$field'",
            Self::Maximum => "$max: '$field'",
            Self::First => "$first: '$field'",
            Self::Last => "$last: '$field'",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Aggregate {
    pub collection_name: String,
    /// Body of the `_id` group key, e.g. `status: '$status'`
    pub group_by_fields: String,
    /// Accumulator body, e.g. `$sum: 1`
    pub aggregate_function: String,
    /// Additional stages appended after `$group`
    pub pipeline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lookup {
    pub source_collection: String,
    pub target_collection: String,
    /// Defaults to `_id`
    pub local_field: String,
    /// Defaults to `<source>_id`
    pub foreign_field: String,
    /// Defaults to `joined_data`
    #[serde(rename = "as")]
    pub as_field: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    #[default]
    Strict,
    Moderate,
    Off,
}

impl ValidationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Moderate => "moderate",
            Self::Off => "off",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationAction {
    #[default]
    Error,
    Warn,
}

impl ValidationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
        }
    }
}

/// Attach a `$jsonSchema` validator to an existing collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Validation {
    pub collection_name: String,
    pub validation_level: ValidationLevel,
    pub validation_action: ValidationAction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenameCollection {
    pub collection_name: String,
    pub target_collection: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BulkWrite {
    pub collection_name: String,
    /// Write models, emitted verbatim inside the array
    pub operations: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Distinct {
    pub collection_name: String,
    pub distinct_field: String,
    /// Optional filter
    pub distinct_query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FindAndModify {
    pub collection_name: String,
    pub query: String,
    pub update: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapReduce {
    pub collection_name: String,
    pub map_function: String,
    pub reduce_function: String,
    pub output_collection: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextSearch {
    pub collection_name: String,
    /// Defaults to `search term`
    pub search_term: String,
    /// Defaults to `english`
    pub language: String,
}

/// Server-side JavaScript function stored in `system.js`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MongoFunction {
    pub function_name: String,
    pub function_parameters: String,
    pub function_body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_find() {
        let op: MongoOperation = serde_json::from_value(json!({
            "operationKind": "findOne",
            "collectionName": "users",
            "findQuery": "{ active: true }"
        }))
        .unwrap();

        assert_eq!(
            op,
            MongoOperation::FindOne(FindDocuments {
                collection_name: "users".to_string(),
                find_query: "{ active: true }".to_string(),
                find_options: String::new(),
            })
        );
    }

    #[test]
    fn test_decode_lookup_as_field() {
        let op: MongoOperation = serde_json::from_value(json!({
            "operationKind": "lookup",
            "sourceCollection": "orders",
            "as": "customer"
        }))
        .unwrap();

        let MongoOperation::Lookup(lookup) = op else {
            panic!("expected lookup");
        };
        assert_eq!(lookup.as_field, "customer");
        assert_eq!(lookup.source_collection, "orders");
    }

    #[test]
    fn test_collection_accessors() {
        let mut op = MongoOperation::Lookup(Lookup::default());
        op.set_collection_name("orders");
        assert_eq!(op.collection_name(), Some("orders"));

        let mut custom = MongoOperation::CustomQuery(CustomQuery::default());
        custom.set_collection_name("ignored");
        assert_eq!(custom.collection_name(), None);
    }

    #[test]
    fn test_index_type_names() {
        let kind: MongoIndexType = serde_json::from_value(json!("multiKey")).unwrap();
        assert_eq!(kind, MongoIndexType::MultiKey);
        assert_eq!(kind.as_str(), "multiKey");
    }

    #[test]
    fn test_aggregate_presets() {
        assert_eq!(AggregatePreset::Count.accumulator(), "$sum: 1");
        assert_eq!(AggregatePreset::all().len(), 7);
    }
}
