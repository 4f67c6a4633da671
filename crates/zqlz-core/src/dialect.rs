//! Target dialects for query synthesis
//!
//! Each dialect owns its comment syntax. Placeholders for missing input are
//! always emitted as comments so that generated text stays parseable.

use serde::{Deserialize, Serialize};

/// Output family a query is synthesized for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QueryDialect {
    /// Relational SQL (PostgreSQL flavoured)
    #[default]
    #[serde(rename = "sql", alias = "postgres", alias = "postgresql")]
    Sql,
    /// MongoDB shell commands
    #[serde(rename = "mongodb", alias = "mongo")]
    Mongo,
}

impl QueryDialect {
    pub fn all() -> Vec<Self> {
        vec![Self::Sql, Self::Mongo]
    }

    /// Parse from a tab or driver name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "sql" | "postgres" | "postgresql" => Some(Self::Sql),
            "mongo" | "mongodb" => Some(Self::Mongo),
            _ => None,
        }
    }

    /// Stable identifier used in serialized state
    pub fn id(&self) -> &'static str {
        match self {
            Self::Sql => "sql",
            Self::Mongo => "mongodb",
        }
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sql => "SQL",
            Self::Mongo => "MongoDB",
        }
    }

    /// Line comment prefix (`--` for SQL, `//` for the Mongo shell)
    pub fn line_comment_prefix(&self) -> &'static str {
        match self {
            Self::Sql => "--",
            Self::Mongo => "//",
        }
    }

    /// Render `text` as a full-line comment
    pub fn line_comment(&self, text: &str) -> String {
        format!("{} {}", self.line_comment_prefix(), text)
    }

    /// Render an inline placeholder for a missing value.
    ///
    /// Both dialects accept `/* ... */`, so the placeholder can sit in the
    /// middle of a line without swallowing the rest of the statement.
    pub fn placeholder(&self, label: &str) -> String {
        format!("/* {} */", label.replace("*/", "* /"))
    }

    /// Fixed output when no operation is selected
    pub fn no_operation(&self) -> String {
        self.line_comment("Select an operation type")
    }
}

impl std::fmt::Display for QueryDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
