//! Models for query synthesis
//!
//! Field definitions, per-dialect type tables and the operation specs that
//! the renderers consume.

mod data_types;
mod field;
mod mongo_operation;
mod operation_spec;
mod sql_operation;

pub use data_types::{
    DataTypeInfo, SQL_AUTO_INCREMENT_TYPE, default_value_for, find_data_type, get_data_types,
    initial_data_type, resolve_default, supports_auto_increment,
};
pub use field::{Field, FieldAttribute, create_field, remove_field, set_field};
pub use mongo_operation::{
    Aggregate, AggregatePreset, BulkWrite, CollectionTarget, DeleteDocuments, Distinct,
    FindAndModify, FindDocuments, InsertDocuments, Lookup, MapReduce, MongoFunction, MongoIndex,
    MongoIndexType, MongoOperation, RenameCollection, TextSearch, UpdateDocuments, Validation,
    ValidationAction, ValidationLevel,
};
pub use operation_spec::{OPERATION_KIND_KEY, OperationSpec};
pub use sql_operation::{
    ALTER_OPERATION_KEY, AlterAction, AlterTable, CreateFunction, CreateIndex, CreateTrigger,
    CreateView, Cte, CustomQuery, IndexMethod, MergeTable, PivotTable, SqlOperation,
    TableFromQuery, TableTarget, TriggerEvent, UpdateTable, WindowFunction,
};
