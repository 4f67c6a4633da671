//! Generator session
//!
//! The form-layer state for one dialect: the operation being configured and
//! the field list. Every edit goes through the pure field helpers, and the
//! output is re-rendered on demand.

use serde_json::Value;
use uuid::Uuid;
use zqlz_core::{QueryDialect, Result, ZqlzError};

use crate::history::QueryHistory;
use crate::models::{
    Field, FieldAttribute, OPERATION_KIND_KEY, OperationSpec, create_field, remove_field,
    set_field,
};
use crate::service::Synthesizer;

/// Editable state behind one generator form
#[derive(Debug, Clone)]
pub struct GeneratorSession {
    dialect: QueryDialect,
    spec: OperationSpec,
    fields: Vec<Field>,
    synthesizer: Synthesizer,
}

impl GeneratorSession {
    /// Start on the dialect's default operation with no fields
    pub fn new(dialect: QueryDialect) -> Self {
        Self::with_synthesizer(dialect, Synthesizer::default())
    }

    pub fn with_synthesizer(dialect: QueryDialect, synthesizer: Synthesizer) -> Self {
        Self {
            dialect,
            spec: OperationSpec::default_for(dialect),
            fields: Vec::new(),
            synthesizer,
        }
    }

    pub fn dialect(&self) -> QueryDialect {
        self.dialect
    }

    pub fn spec(&self) -> &OperationSpec {
        &self.spec
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn operation_kind(&self) -> &'static str {
        self.spec.operation_kind()
    }

    /// Switch to another operation by tag.
    ///
    /// Operation parameters are discarded; the field list and the target
    /// table or collection name carry over.
    pub fn select_operation(&mut self, operation_kind: &str) -> Result<()> {
        let mut next = OperationSpec::empty(self.dialect, operation_kind)?;
        if let Some(name) = self.spec.target_name() {
            next.set_target_name(name.to_string());
        }
        tracing::debug!(
            dialect = self.dialect.id(),
            from = self.spec.operation_kind(),
            to = next.operation_kind(),
            "switching operation"
        );
        self.spec = next;
        Ok(())
    }

    /// Replace the whole spec; it must belong to this session's dialect
    pub fn set_operation(&mut self, spec: impl Into<OperationSpec>) -> Result<()> {
        let spec = spec.into();
        if spec.dialect() != self.dialect {
            return Err(ZqlzError::InvalidValue {
                attribute: "dialect".to_string(),
                message: format!(
                    "{} operation given to a {} session",
                    spec.dialect(),
                    self.dialect
                ),
            });
        }
        self.spec = spec;
        Ok(())
    }

    /// Replace the current operation's parameters from an untyped object
    pub fn set_parameters(&mut self, params: &Value) -> Result<()> {
        let mut object = match params {
            Value::Object(map) => map.clone(),
            _ => {
                return Err(ZqlzError::InvalidValue {
                    attribute: "parameters".to_string(),
                    message: "expected an object".to_string(),
                });
            }
        };
        object.insert(
            OPERATION_KIND_KEY.to_string(),
            Value::String(self.operation_kind().to_string()),
        );
        self.spec = OperationSpec::from_value(self.dialect, Value::Object(object))?;
        Ok(())
    }

    pub fn set_target_name(&mut self, name: impl Into<String>) {
        self.spec.set_target_name(name);
    }

    /// Append an empty field and return its index
    pub fn add_field(&mut self) -> usize {
        self.fields.push(create_field(self.dialect));
        tracing::debug!(field_count = self.fields.len(), "added field");
        self.fields.len() - 1
    }

    pub fn set_fields(&mut self, fields: Vec<Field>) {
        self.fields = fields;
    }

    pub fn update_field(&mut self, index: usize, attribute: FieldAttribute) {
        self.fields = set_field(self.dialect, &self.fields, index, attribute);
    }

    /// Apply a string-keyed edit from the form layer
    pub fn update_field_raw(&mut self, index: usize, attribute: &str, value: &Value) -> Result<()> {
        let attribute = FieldAttribute::parse(attribute, value)?;
        self.update_field(index, attribute);
        Ok(())
    }

    pub fn remove_field(&mut self, index: usize) {
        self.fields = remove_field(&self.fields, index);
        tracing::debug!(index, field_count = self.fields.len(), "removed field");
    }

    /// Render the current operation
    pub fn render(&self) -> String {
        self.synthesizer.synthesize(&self.spec, &self.fields)
    }

    /// Render and append the output to `history`
    pub fn record(&self, history: &mut QueryHistory) -> Uuid {
        history.record(self.dialect, self.render())
    }
}
