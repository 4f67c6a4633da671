//! MongoDB shell text generation
//!
//! Collection names and other string-valued parameters are emitted as JSON
//! string literals. Object literals, filters and pipelines typed by the user
//! are passed through verbatim.

use std::borrow::Cow;

use zqlz_core::QueryDialect;

use super::fragments::{is_blank, or_fallback, or_placeholder, trim_fragment};
use crate::models::{
    Aggregate, BulkWrite, CollectionTarget, CustomQuery, DeleteDocuments, Distinct, Field,
    FindAndModify, FindDocuments, InsertDocuments, Lookup, MapReduce, MongoFunction, MongoIndex,
    MongoIndexType, MongoOperation, RenameCollection, TextSearch, UpdateDocuments, Validation,
};

const DIALECT: QueryDialect = QueryDialect::Mongo;

/// MongoDB shell generator for operation specs
pub struct MongoGenerator;

impl MongoGenerator {
    /// Render the shell command(s) for a Mongo operation
    pub fn render(operation: &MongoOperation, fields: &[Field]) -> String {
        match operation {
            MongoOperation::CreateCollection(p) => Self::generate_create_collection(p, fields),
            MongoOperation::InsertOne(p) => Self::generate_insert_one(p),
            MongoOperation::InsertMany(p) => Self::generate_insert_many(p),
            MongoOperation::Find(p) => Self::generate_find("find", p),
            MongoOperation::FindOne(p) => Self::generate_find("findOne", p),
            MongoOperation::UpdateOne(p) => Self::generate_update("updateOne", p),
            MongoOperation::UpdateMany(p) => Self::generate_update("updateMany", p),
            MongoOperation::DeleteOne(p) => Self::generate_delete("deleteOne", p),
            MongoOperation::DeleteMany(p) => Self::generate_delete("deleteMany", p),
            MongoOperation::CreateIndex(p) => Self::generate_create_index(p),
            MongoOperation::Aggregate(p) => Self::generate_aggregate(p),
            MongoOperation::Lookup(p) => Self::generate_lookup(p),
            MongoOperation::Validation(p) => Self::generate_validation(p, fields),
            MongoOperation::DropCollection(p) => Self::generate_drop(p),
            MongoOperation::RenameCollection(p) => Self::generate_rename(p),
            MongoOperation::BulkWrite(p) => Self::generate_bulk_write(p),
            MongoOperation::Distinct(p) => Self::generate_distinct(p),
            MongoOperation::FindAndModify(p) => Self::generate_find_and_modify(p),
            MongoOperation::MapReduce(p) => Self::generate_map_reduce(p),
            MongoOperation::TextSearch(p) => Self::generate_text_search(p),
            MongoOperation::CreateFunction(p) => Self::generate_create_function(p),
            MongoOperation::CustomQuery(p) => Self::generate_custom(p),
        }
    }

    /// Whether `name` can follow `db.` as a plain property access
    pub fn is_js_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => chars
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
            _ => false,
        }
    }

    /// JSON-escaped double-quoted string literal
    pub fn js_string(value: &str) -> String {
        serde_json::Value::String(value.to_string()).to_string()
    }

    /// String literal, or a placeholder followed by an empty literal
    fn js_string_or(value: &str, label: &str) -> String {
        if is_blank(value) {
            format!("{} \"\"", DIALECT.placeholder(label))
        } else {
            Self::js_string(value)
        }
    }

    /// `db.<name>` when the name is a plain identifier, `db.getCollection(...)` otherwise
    pub fn collection(name: &str) -> String {
        if Self::is_js_identifier(name) {
            format!("db.{}", name)
        } else {
            format!(
                "db.getCollection({})",
                Self::js_string_or(name, "collection name")
            )
        }
    }

    /// Object key for a field name, quoted when it is not an identifier
    fn property_key(name: &str) -> String {
        if Self::is_js_identifier(name) {
            name.to_string()
        } else {
            Self::js_string_or(name, "field name")
        }
    }

    /// `$jsonSchema` validator block shared by createCollection and collMod,
    /// indented to sit one level inside the enclosing object.
    fn validator(fields: &[Field]) -> String {
        let required = fields
            .iter()
            .filter(|field| field.required)
            .map(|field| Self::js_string(&field.name))
            .collect::<Vec<_>>()
            .join(", ");

        let properties = if fields.is_empty() {
            "{}".to_string()
        } else {
            let body = fields
                .iter()
                .map(Self::schema_property)
                .collect::<Vec<_>>()
                .join(",\n");
            format!("{{\n{}\n      }}", body)
        };

        format!(
            "  validator: {{\n    $jsonSchema: {{\n      bsonType: \"object\",\n      required: [{}],\n      properties: {}\n    }}\n  }}",
            required, properties
        )
    }

    /// One entry of the schema `properties` object
    fn schema_property(field: &Field) -> String {
        let bson_type = if is_blank(&field.data_type) {
            Self::js_string_or("", "data type")
        } else {
            Self::js_string(&field.data_type.to_lowercase())
        };
        let description = format!("{} field", or_fallback(&field.name, "unnamed"));

        let lines: Vec<String> = [
            Some(format!("bsonType: {}", bson_type)),
            (!is_blank(&field.validation)).then(|| trim_fragment(&field.validation).to_string()),
            field.unique.then(|| "unique: true".to_string()),
            field
                .has_default()
                .then(|| format!("default: {}", field.default_value)),
            Some(format!("description: {}", Self::js_string(&description))),
        ]
        .into_iter()
        .flatten()
        .collect();

        format!(
            "        {}: {{\n          {}\n        }}",
            Self::property_key(&field.name),
            lines.join(",\n          ")
        )
    }

    /// createCollection with a schema validator, then a unique index per unique field
    pub fn generate_create_collection(params: &CollectionTarget, fields: &[Field]) -> String {
        let mut code = format!(
            "db.createCollection({}, {{\n{}\n}});",
            Self::js_string_or(&params.collection_name, "collection name"),
            Self::validator(fields)
        );

        let collection = Self::collection(&params.collection_name);
        let indexes: Vec<String> = fields
            .iter()
            .filter(|field| field.unique)
            .map(|field| {
                format!(
                    "{}.createIndex({{ {}: 1 }}, {{ unique: true }});",
                    collection,
                    Self::property_key(&field.name)
                )
            })
            .collect();

        if !indexes.is_empty() {
            code.push_str("\n\n");
            code.push_str(&indexes.join("\n"));
        }
        code
    }

    /// collMod attaching the validator to an existing collection
    pub fn generate_validation(params: &Validation, fields: &[Field]) -> String {
        format!(
            "db.runCommand({{\n  collMod: {},\n{},\n  validationLevel: \"{}\",\n  validationAction: \"{}\"\n}});",
            Self::js_string_or(&params.collection_name, "collection name"),
            Self::validator(fields),
            params.validation_level.as_str(),
            params.validation_action.as_str()
        )
    }

    pub fn generate_insert_one(params: &InsertDocuments) -> String {
        format!(
            "{}.insertOne(\n  {}\n);",
            Self::collection(&params.collection_name),
            or_fallback(&params.documents, "{ field: 'value' }")
        )
    }

    /// The documents fragment is wrapped in an array literal.
    pub fn generate_insert_many(params: &InsertDocuments) -> String {
        format!(
            "{}.insertMany([\n  {}\n]);",
            Self::collection(&params.collection_name),
            or_fallback(
                &params.documents,
                "{ field: 'value1' },\n  { field: 'value2' }"
            )
        )
    }

    pub fn generate_find(method: &str, params: &FindDocuments) -> String {
        format!(
            "{}.{}(\n  {},\n  {}\n);",
            Self::collection(&params.collection_name),
            method,
            or_fallback(&params.find_query, "/* query object */ {}"),
            or_fallback(&params.find_options, "/* projection object */ {}")
        )
    }

    pub fn generate_update(method: &str, params: &UpdateDocuments) -> String {
        format!(
            "{}.{}(\n  {},\n  {}\n);",
            Self::collection(&params.collection_name),
            method,
            or_fallback(&params.update_filter, "/* filter criteria */ {}"),
            or_fallback(&params.update_operation, "/* update operations */ {}")
        )
    }

    pub fn generate_delete(method: &str, params: &DeleteDocuments) -> String {
        format!(
            "{}.{}(\n  {}\n);",
            Self::collection(&params.collection_name),
            method,
            or_fallback(&params.delete_filter, "/* filter criteria */ {}")
        )
    }

    /// createIndex; a non-single index type is emitted as a `type` option
    pub fn generate_create_index(params: &MongoIndex) -> String {
        let name = if is_blank(&params.collection_name) {
            Self::js_string_or("", "index name")
        } else {
            Self::js_string(&format!("{}_index", params.collection_name))
        };

        let options: Vec<String> = [
            Some(format!("name: {}", name)),
            (params.index_type != MongoIndexType::Single)
                .then(|| format!("type: \"{}\"", params.index_type.as_str())),
            (!is_blank(&params.index_options))
                .then(|| trim_fragment(&params.index_options).to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();

        format!(
            "{}.createIndex(\n  {},\n  {{\n    {}\n  }}\n);",
            Self::collection(&params.collection_name),
            or_fallback(&params.index_fields, "{ field: 1 }"),
            options.join(",\n    ")
        )
    }

    /// `$group` stage with optional trailing stages
    pub fn generate_aggregate(params: &Aggregate) -> String {
        let pipeline = if is_blank(&params.pipeline) {
            String::new()
        } else {
            format!(",\n  {}", trim_fragment(&params.pipeline))
        };

        format!(
            "{}.aggregate([\n  {{\n    $group: {{\n      _id: {{ {} }},\n      result: {{ {} }}\n    }}\n  }}{}\n]);",
            Self::collection(&params.collection_name),
            or_fallback(&params.group_by_fields, "field: '$field'"),
            or_fallback(&params.aggregate_function, "$sum: 1"),
            pipeline
        )
    }

    /// `$lookup` join from the source collection into `target_collection`
    pub fn generate_lookup(params: &Lookup) -> String {
        let foreign_field = if !is_blank(&params.foreign_field) {
            Self::js_string(&params.foreign_field)
        } else if !is_blank(&params.source_collection) {
            Self::js_string(&format!("{}_id", params.source_collection))
        } else {
            Self::js_string_or("", "foreign field")
        };

        format!(
            "{}.aggregate([\n  {{\n    $lookup: {{\n      from: {},\n      localField: {},\n      foreignField: {},\n      as: {}\n    }}\n  }}\n]);",
            Self::collection(&params.source_collection),
            Self::js_string_or(&params.target_collection, "target collection"),
            Self::js_string(or_fallback(&params.local_field, "_id")),
            foreign_field,
            Self::js_string(or_fallback(&params.as_field, "joined_data"))
        )
    }

    pub fn generate_drop(params: &CollectionTarget) -> String {
        format!("{}.drop();", Self::collection(&params.collection_name))
    }

    pub fn generate_rename(params: &RenameCollection) -> String {
        format!(
            "{}.renameCollection({});",
            Self::collection(&params.collection_name),
            Self::js_string_or(&params.target_collection, "new collection name")
        )
    }

    pub fn generate_bulk_write(params: &BulkWrite) -> String {
        format!(
            "{}.bulkWrite([\n  {}\n]);",
            Self::collection(&params.collection_name),
            or_fallback(
                &params.operations,
                "{ insertOne: { document: { field: 'value' } } }"
            )
        )
    }

    /// distinct; the filter argument is omitted when blank
    pub fn generate_distinct(params: &Distinct) -> String {
        let filter = if is_blank(&params.distinct_query) {
            String::new()
        } else {
            format!(", {}", params.distinct_query)
        };
        format!(
            "{}.distinct({}{});",
            Self::collection(&params.collection_name),
            Self::js_string_or(&params.distinct_field, "field name"),
            filter
        )
    }

    pub fn generate_find_and_modify(params: &FindAndModify) -> String {
        format!(
            "{}.findAndModify({{\n  query: {},\n  update: {},\n  new: true,\n  upsert: true\n}});",
            Self::collection(&params.collection_name),
            or_fallback(&params.query, "/* query */ {}"),
            or_fallback(&params.update, "/* update operations */ {}")
        )
    }

    pub fn generate_map_reduce(params: &MapReduce) -> String {
        format!(
            "{}.mapReduce(\n  {},\n  {},\n  {{ out: {} }}\n);",
            Self::collection(&params.collection_name),
            or_fallback(&params.map_function, "function () { /* map function */ }"),
            or_fallback(
                &params.reduce_function,
                "function (key, values) { /* reduce function */ }"
            ),
            Self::js_string_or(&params.output_collection, "output collection")
        )
    }

    pub fn generate_text_search(params: &TextSearch) -> String {
        format!(
            "{}.find({{\n  $text: {{\n    $search: {},\n    $language: {},\n    $caseSensitive: false,\n    $diacriticSensitive: false\n  }}\n}});",
            Self::collection(&params.collection_name),
            Self::js_string(or_fallback(&params.search_term, "search term")),
            Self::js_string(or_fallback(&params.language, "english"))
        )
    }

    /// Function definition followed by the system.js registration
    pub fn generate_create_function(params: &MongoFunction) -> String {
        let name: Cow<'_, str> = or_placeholder(DIALECT, &params.function_name, "function name");
        format!(
            "function {}({}) {{\n  {}\n}}\n\n// Store the function in the system.js collection\ndb.system.js.save({{\n  _id: {},\n  value: {}\n}});\n\n// Load the function into the current session\ndb.loadServerScripts();",
            name,
            params.function_parameters.trim(),
            or_placeholder(DIALECT, &params.function_body, "function body"),
            Self::js_string_or(&params.function_name, "function name"),
            name
        )
    }

    /// Custom query text is passed through unchanged
    pub fn generate_custom(params: &CustomQuery) -> String {
        if is_blank(&params.custom_query) {
            DIALECT.line_comment("Enter your custom MongoDB query here")
        } else {
            params.custom_query.clone()
        }
    }
}
