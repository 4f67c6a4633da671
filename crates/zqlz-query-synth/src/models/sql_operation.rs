//! SQL operation specs
//!
//! Each variant carries exactly the parameters its template reads. The
//! column list is not part of the operation; it is passed alongside at render time.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

/// Key carrying the `ALTER TABLE` sub-operation tag
pub const ALTER_OPERATION_KEY: &str = "alterOperation";

/// A configured SQL operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "operationKind", rename_all = "camelCase")]
pub enum SqlOperation {
    CreateTable(TableTarget),
    CreateTableAs(TableFromQuery),
    DeleteTable(TableTarget),
    AlterTable(AlterTable),
    CreateIndex(CreateIndex),
    CreateView(CreateView),
    CreateFunction(CreateFunction),
    CreateTrigger(CreateTrigger),
    WindowFunction(WindowFunction),
    UpdateTable(UpdateTable),
    PivotTable(PivotTable),
    MergeTable(MergeTable),
    TempTable(TableTarget),
    ClearTable(TableTarget),
    Cte(Cte),
    Query(CustomQuery),
}

impl Default for SqlOperation {
    fn default() -> Self {
        Self::CreateTable(TableTarget::default())
    }
}

impl SqlOperation {
    /// Every operation with empty parameters, in menu order
    pub fn all() -> Vec<Self> {
        vec![
            Self::CreateTable(Default::default()),
            Self::CreateTableAs(Default::default()),
            Self::DeleteTable(Default::default()),
            Self::AlterTable(Default::default()),
            Self::CreateIndex(Default::default()),
            Self::CreateView(Default::default()),
            Self::CreateFunction(Default::default()),
            Self::CreateTrigger(Default::default()),
            Self::WindowFunction(Default::default()),
            Self::UpdateTable(Default::default()),
            Self::PivotTable(Default::default()),
            Self::MergeTable(Default::default()),
            Self::TempTable(Default::default()),
            Self::ClearTable(Default::default()),
            Self::Cte(Default::default()),
            Self::Query(Default::default()),
        ]
    }

    /// The table this operation targets, if it has one
    pub fn table_name(&self) -> Option<&str> {
        match self {
            Self::CreateTable(p) | Self::DeleteTable(p) | Self::TempTable(p) | Self::ClearTable(p) => {
                Some(&p.table_name)
            }
            Self::CreateTableAs(p) => Some(&p.table_name),
            Self::AlterTable(p) => Some(&p.table_name),
            Self::CreateIndex(p) => Some(&p.table_name),
            Self::CreateTrigger(p) => Some(&p.table_name),
            Self::WindowFunction(p) => Some(&p.table_name),
            Self::UpdateTable(p) => Some(&p.table_name),
            Self::PivotTable(p) => Some(&p.table_name),
            Self::MergeTable(p) => Some(&p.table_name),
            Self::Cte(p) => Some(&p.table_name),
            Self::CreateView(_) | Self::CreateFunction(_) | Self::Query(_) => None,
        }
    }

    /// Set the target table; a no-op for operations without one
    pub fn set_table_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            Self::CreateTable(p) | Self::DeleteTable(p) | Self::TempTable(p) | Self::ClearTable(p) => {
                p.table_name = name
            }
            Self::CreateTableAs(p) => p.table_name = name,
            Self::AlterTable(p) => p.table_name = name,
            Self::CreateIndex(p) => p.table_name = name,
            Self::CreateTrigger(p) => p.table_name = name,
            Self::WindowFunction(p) => p.table_name = name,
            Self::UpdateTable(p) => p.table_name = name,
            Self::PivotTable(p) => p.table_name = name,
            Self::MergeTable(p) => p.table_name = name,
            Self::Cte(p) => p.table_name = name,
            Self::CreateView(_) | Self::CreateFunction(_) | Self::Query(_) => {}
        }
    }
}

/// Operation on a named table with no other inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableTarget {
    pub table_name: String,
}

impl TableTarget {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

/// `CREATE TABLE ... AS (query)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableFromQuery {
    pub table_name: String,
    pub source_query: String,
}

/// `ALTER TABLE` with one sub-operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlterTable {
    pub table_name: String,
    #[serde(deserialize_with = "deserialize_action")]
    pub action: AlterAction,
}

/// An action without a sub-operation tag decodes to `Unselected`, so the
/// sibling parameters still decode.
fn deserialize_action<'de, D>(deserializer: D) -> Result<AlterAction, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let tagged = value
        .get(ALTER_OPERATION_KEY)
        .is_some_and(|tag| !tag.is_null());
    if !tagged {
        return Ok(AlterAction::Unselected);
    }
    AlterAction::deserialize(value).map_err(de::Error::custom)
}

/// Sub-operation of `ALTER TABLE`
///
/// Any unrecognised `alterOperation` tag decodes to `Unselected`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "alterOperation",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum AlterAction {
    #[default]
    AddColumn,
    ModifyColumn,
    RenameColumn {
        #[serde(default)]
        old_column_name: String,
        #[serde(default)]
        new_column_name: String,
    },
    DropColumn,
    AddConstraint {
        #[serde(default)]
        constraint_name: String,
        #[serde(default)]
        constraint_definition: String,
    },
    DropConstraint {
        #[serde(default)]
        constraint_name: String,
    },
    RenameTable {
        #[serde(default)]
        new_table_name: String,
    },
    #[serde(other)]
    Unselected,
}

impl AlterAction {
    /// Every selectable sub-operation with empty parameters
    pub fn all() -> Vec<Self> {
        vec![
            Self::AddColumn,
            Self::ModifyColumn,
            Self::RenameColumn {
                old_column_name: String::new(),
                new_column_name: String::new(),
            },
            Self::DropColumn,
            Self::AddConstraint {
                constraint_name: String::new(),
                constraint_definition: String::new(),
            },
            Self::DropConstraint {
                constraint_name: String::new(),
            },
            Self::RenameTable {
                new_table_name: String::new(),
            },
        ]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::AddColumn => "addColumn",
            Self::ModifyColumn => "modifyColumn",
            Self::RenameColumn { .. } => "renameColumn",
            Self::DropColumn => "dropColumn",
            Self::AddConstraint { .. } => "addConstraint",
            Self::DropConstraint { .. } => "dropConstraint",
            Self::RenameTable { .. } => "renameTable",
            Self::Unselected => "unselected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddColumn => "Add Column",
            Self::ModifyColumn => "Modify Column",
            Self::RenameColumn { .. } => "Rename Column",
            Self::DropColumn => "Drop Column",
            Self::AddConstraint { .. } => "Add Constraint",
            Self::DropConstraint { .. } => "Drop Constraint",
            Self::RenameTable { .. } => "Rename Table",
            Self::Unselected => "None",
        }
    }

    /// Whether the column list is rendered by this sub-operation
    pub fn uses_fields(&self) -> bool {
        matches!(self, Self::AddColumn | Self::ModifyColumn | Self::DropColumn)
    }
}

/// Index access method for `CREATE INDEX ... USING`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexMethod {
    #[default]
    Btree,
    Hash,
    Gist,
    Gin,
    Brin,
}

impl IndexMethod {
    pub fn all() -> Vec<Self> {
        vec![Self::Btree, Self::Hash, Self::Gist, Self::Gin, Self::Brin]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Btree => "btree",
            Self::Hash => "hash",
            Self::Gist => "gist",
            Self::Gin => "gin",
            Self::Brin => "brin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Btree => "B-tree",
            Self::Hash => "Hash",
            Self::Gist => "GiST",
            Self::Gin => "GIN",
            Self::Brin => "BRIN",
        }
    }
}

impl std::fmt::Display for IndexMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateIndex {
    pub table_name: String,
    #[serde(rename = "indexType")]
    pub method: IndexMethod,
    /// Column list, emitted verbatim (e.g. `email, created_at DESC`)
    pub index_columns: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateView {
    pub view_name: String,
    pub source_query: String,
}

/// PL/pgSQL trigger function
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateFunction {
    pub function_name: String,
    pub function_body: String,
}

/// When a trigger fires and for which statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    #[default]
    BeforeInsert,
    AfterInsert,
    BeforeUpdate,
    AfterUpdate,
    BeforeDelete,
    AfterDelete,
}

impl TriggerEvent {
    pub fn all() -> Vec<Self> {
        vec![
            Self::BeforeInsert,
            Self::AfterInsert,
            Self::BeforeUpdate,
            Self::AfterUpdate,
            Self::BeforeDelete,
            Self::AfterDelete,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeInsert => "BEFORE INSERT",
            Self::AfterInsert => "AFTER INSERT",
            Self::BeforeUpdate => "BEFORE UPDATE",
            Self::AfterUpdate => "AFTER UPDATE",
            Self::BeforeDelete => "BEFORE DELETE",
            Self::AfterDelete => "AFTER DELETE",
        }
    }
}

impl std::fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTrigger {
    pub trigger_name: String,
    pub table_name: String,
    #[serde(rename = "triggerEvent")]
    pub event: TriggerEvent,
    /// Function executed for each row
    pub function_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowFunction {
    pub table_name: String,
    /// Aggregate expression, e.g. `SUM(amount)`
    pub aggregate_function: String,
    /// Optional filter; no WHERE clause when empty
    pub where_clause: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTable {
    pub table_name: String,
    /// Assignment list; derived from the columns when empty
    pub set_clause: String,
    pub where_clause: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PivotTable {
    pub table_name: String,
    pub source_query: String,
    pub pivot_columns: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeTable {
    pub table_name: String,
    pub source_query: String,
    pub merge_condition: String,
}

/// Common table expression named `cte_<table>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cte {
    pub table_name: String,
    pub cte_query: String,
    pub main_query: String,
}

/// Free-form query text, emitted unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomQuery {
    pub custom_query: String,
}

impl CustomQuery {
    pub fn new(custom_query: impl Into<String>) -> Self {
        Self {
            custom_query: custom_query.into(),
        }
    }
}
