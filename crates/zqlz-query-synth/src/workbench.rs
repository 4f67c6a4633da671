//! Workbench: one generator session per dialect plus the shared history

use uuid::Uuid;
use zqlz_core::{QueryDialect, Result};

use crate::config::SynthesisConfig;
use crate::history::QueryHistory;
use crate::service::Synthesizer;
use crate::session::GeneratorSession;

/// Top-level state of the query generator
#[derive(Debug, Clone)]
pub struct Workbench {
    config: SynthesisConfig,
    sql: GeneratorSession,
    mongo: GeneratorSession,
    active: QueryDialect,
    history: QueryHistory,
}

impl Workbench {
    /// Create a workbench from a validated configuration
    pub fn new(config: SynthesisConfig) -> Result<Self> {
        config.validate()?;
        let synthesizer = Synthesizer::new(config.log_preview_chars);
        tracing::debug!(
            history_limit = config.history_limit,
            log_preview_chars = config.log_preview_chars,
            "creating workbench"
        );
        Ok(Self {
            sql: GeneratorSession::with_synthesizer(QueryDialect::Sql, synthesizer.clone()),
            mongo: GeneratorSession::with_synthesizer(QueryDialect::Mongo, synthesizer),
            active: QueryDialect::default(),
            history: QueryHistory::new(config.history_limit),
            config,
        })
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    pub fn active_dialect(&self) -> QueryDialect {
        self.active
    }

    /// Switch tabs; each dialect keeps its own session state
    pub fn set_active_dialect(&mut self, dialect: QueryDialect) {
        self.active = dialect;
    }

    pub fn session(&self, dialect: QueryDialect) -> &GeneratorSession {
        match dialect {
            QueryDialect::Sql => &self.sql,
            QueryDialect::Mongo => &self.mongo,
        }
    }

    pub fn session_mut(&mut self, dialect: QueryDialect) -> &mut GeneratorSession {
        match dialect {
            QueryDialect::Sql => &mut self.sql,
            QueryDialect::Mongo => &mut self.mongo,
        }
    }

    pub fn active(&self) -> &GeneratorSession {
        self.session(self.active)
    }

    pub fn active_mut(&mut self) -> &mut GeneratorSession {
        self.session_mut(self.active)
    }

    /// Render the active session
    pub fn render(&self) -> String {
        self.active().render()
    }

    /// Render the active session and add the text to history
    pub fn record(&mut self) -> Uuid {
        let session = match self.active {
            QueryDialect::Sql => &self.sql,
            QueryDialect::Mongo => &self.mongo,
        };
        session.record(&mut self.history)
    }

    pub fn history(&self) -> &QueryHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for Workbench {
    fn default() -> Self {
        let config = SynthesisConfig::default();
        Self {
            sql: GeneratorSession::new(QueryDialect::Sql),
            mongo: GeneratorSession::new(QueryDialect::Mongo),
            active: QueryDialect::default(),
            history: QueryHistory::new(config.history_limit),
            config,
        }
    }
}
