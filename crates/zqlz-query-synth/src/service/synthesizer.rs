//! Synthesis entry points
//!
//! Dispatches a spec to the renderer of its dialect. Every entry point is
//! total: untyped input that cannot be decoded degrades to a placeholder
//! comment instead of an error.

use serde_json::Value;
use zqlz_core::QueryDialect;

use super::{MongoGenerator, SqlGenerator};
use crate::config::DEFAULT_LOG_PREVIEW_CHARS;
use crate::models::{Field, OPERATION_KIND_KEY, OperationSpec};

/// Renders operation specs to query text
#[derive(Debug, Clone)]
pub struct Synthesizer {
    log_preview_chars: usize,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PREVIEW_CHARS)
    }
}

impl Synthesizer {
    /// Create a synthesizer; `log_preview_chars` bounds the trace preview
    pub fn new(log_preview_chars: usize) -> Self {
        Self { log_preview_chars }
    }

    /// Render a typed spec against the current field list
    pub fn synthesize(&self, spec: &OperationSpec, fields: &[Field]) -> String {
        let output = match spec {
            OperationSpec::Sql(op) => SqlGenerator::render(op, fields),
            OperationSpec::Mongo(op) => MongoGenerator::render(op, fields),
        };

        tracing::debug!(
            dialect = spec.dialect().id(),
            operation = spec.operation_kind(),
            field_count = fields.len(),
            output_len = output.len(),
            "synthesized query"
        );
        tracing::trace!(
            preview = %output.chars().take(self.log_preview_chars).collect::<String>(),
            "synthesized query text"
        );

        output
    }

    /// Render from a string tag and an untyped parameter object.
    ///
    /// The tag overrides any `operationKind` already present in `params`.
    /// An unknown tag yields the dialect's "no operation" comment; parameters
    /// that fail to decode are dropped and the operation renders empty.
    pub fn synthesize_tagged(
        &self,
        dialect: QueryDialect,
        operation_kind: &str,
        params: &Value,
        fields: &[Field],
    ) -> String {
        let empty = match OperationSpec::empty(dialect, operation_kind) {
            Ok(spec) => spec,
            Err(e) => {
                tracing::warn!(dialect = dialect.id(), error = %e, "unknown operation tag");
                return dialect.no_operation();
            }
        };

        let mut object = match params {
            Value::Object(map) => map.clone(),
            Value::Null => serde_json::Map::new(),
            other => {
                tracing::warn!(
                    dialect = dialect.id(),
                    operation = operation_kind,
                    params = %other,
                    "operation parameters are not an object, rendering empty"
                );
                serde_json::Map::new()
            }
        };
        object.insert(
            OPERATION_KIND_KEY.to_string(),
            Value::String(operation_kind.to_string()),
        );

        let spec = match OperationSpec::from_value(dialect, Value::Object(object)) {
            Ok(spec) => spec,
            Err(e) => {
                tracing::warn!(
                    dialect = dialect.id(),
                    operation = operation_kind,
                    error = %e,
                    "failed to decode operation parameters, rendering empty"
                );
                empty
            }
        };

        self.synthesize(&spec, fields)
    }
}

/// Render a typed spec with the default synthesizer
pub fn synthesize(spec: &OperationSpec, fields: &[Field]) -> String {
    Synthesizer::default().synthesize(spec, fields)
}

/// Render from a string tag with the default synthesizer
pub fn synthesize_tagged(
    dialect: QueryDialect,
    operation_kind: &str,
    params: &Value,
    fields: &[Field],
) -> String {
    Synthesizer::default().synthesize_tagged(dialect, operation_kind, params, fields)
}
