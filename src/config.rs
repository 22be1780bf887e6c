//! Knowledge base configuration, persisted as TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::logic::SolverKind;
use crate::logic::solver::truth_table::DEFAULT_SYMBOL_LIMIT;
use crate::world::AgentPosition;

/// Configuration for a [`WumpusKnowledgeBase`](crate::kb::WumpusKnowledgeBase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KbConfig {
    /// Cave width (x dimension).
    #[serde(default = "default_dimension")]
    pub width: u32,
    /// Cave height (y dimension).
    #[serde(default = "default_dimension")]
    pub height: u32,
    /// Where the agent starts at t = 0.
    #[serde(default)]
    pub start: AgentPosition,
    /// Skip location/orientation successor-state axioms. Positions must
    /// then be told with `record_position`.
    #[serde(default)]
    pub disable_successor_axioms: bool,
    /// Decision procedure used to answer queries.
    #[serde(default)]
    pub solver: SolverKind,
    /// Symbol limit for the truth-table procedure.
    #[serde(default = "default_truth_table_limit")]
    pub truth_table_limit: usize,
}

fn default_dimension() -> u32 {
    4
}

fn default_truth_table_limit() -> usize {
    DEFAULT_SYMBOL_LIMIT
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            width: default_dimension(),
            height: default_dimension(),
            start: AgentPosition::default(),
            disable_successor_axioms: false,
            solver: SolverKind::default(),
            truth_table_limit: default_truth_table_limit(),
        }
    }
}

impl KbConfig {
    /// A square `size` x `size` cave, other fields default.
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            ..Default::default()
        }
    }

    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_start(mut self, start: AgentPosition) -> Self {
        self.start = start;
        self
    }

    pub fn without_successor_axioms(mut self) -> Self {
        self.disable_successor_axioms = true;
        self
    }

    /// Reject zero dimensions and a start room outside the cave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.start.room.in_bounds(self.width, self.height) {
            return Err(ConfigError::StartOutOfBounds {
                room: self.start.room,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: KbConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}
