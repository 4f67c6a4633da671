//! Query synthesis for ZQLZ
//!
//! Turns a structured description of a database operation into SQL or
//! MongoDB shell text. Rendering is pure and total: missing input becomes an
//! inline comment placeholder, never an error.
//!
//! # Architecture
//!
//! ```text
//! Workbench            one session per dialect + shared history
//!     ↓
//! GeneratorSession     current OperationSpec + field list
//!     ↓
//! Synthesizer          dialect dispatch, tracing
//!     ↓
//! SqlGenerator / MongoGenerator
//! ```
//!
//! # Example
//!
//! ```
//! use zqlz_core::QueryDialect;
//! use zqlz_query_synth::{Field, OperationSpec, SqlOperation, TableTarget, synthesize};
//!
//! let spec = OperationSpec::Sql(SqlOperation::CreateTable(TableTarget::new("users")));
//! let fields = vec![
//!     Field::named(QueryDialect::Sql, "id")
//!         .with_type(QueryDialect::Sql, "INT")
//!         .primary_key()
//!         .auto_increment(),
//! ];
//!
//! assert_eq!(
//!     synthesize(&spec, &fields),
//!     "CREATE TABLE users (\n  id SERIAL PRIMARY KEY\n);"
//! );
//! ```

mod catalog;
mod config;
mod history;
mod models;
mod service;
mod session;
mod workbench;

pub use catalog::{OperationDescriptor, catalog, lookup};
pub use config::{DEFAULT_LOG_PREVIEW_CHARS, SynthesisConfig};
pub use history::{DEFAULT_HISTORY_LIMIT, HistoryEntry, QueryHistory};
pub use models::*;
pub use service::{MongoGenerator, SqlGenerator, Synthesizer, synthesize, synthesize_tagged};
pub use session::GeneratorSession;
pub use workbench::Workbench;

pub use zqlz_core::{QueryDialect, Result, ZqlzError};
