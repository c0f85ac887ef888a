//! Session configuration loaded from TOML.
//!
//! ```toml
//! [actions]
//! log_errors = true
//!
//! [step]
//! game_loops = 1
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ActionsConfig {
    /// Install the tracing error handler when the session is created.
    pub log_errors: bool,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self { log_errors: true }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StepConfig {
    /// Game loops advanced per `Session::step`.
    pub game_loops: u32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self { game_loops: 1 }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub actions: ActionsConfig,
    pub step: StepConfig,
}

impl SessionConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step.game_loops == 0 {
            return Err(ConfigError::Invalid {
                field: "step.game_loops",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
