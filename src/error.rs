use std::fmt;

use thiserror::Error;

/// Every schema problem found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("\n"))
    }
}

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("invalid parameters: {0}")]
    Config(String),

    #[error("project '{0}' not found")]
    ProjectNotFound(u64),

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("error retrieving {operation}: {source:#}")]
    Gateway {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("error parsing {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl MigrationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::ProjectNotFound(_) => "project_not_found",
            Self::Validation(_) => "validation",
            Self::Gateway { .. } => "gateway",
            Self::Parse { .. } => "parse",
        }
    }
}
