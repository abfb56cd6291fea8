//! Configuration for Commandex, read from `commandex.toml`
//!
//! ```toml
//! [refresh]
//! delay_ms = 300
//!
//! [goals]
//! default = "common"
//!
//! [[goals.extra]]
//! id = "lint"
//! label = "Lint"
//!
//! [logging]
//! profile = "development"
//! ```
//!
//! Layering: defaults, then the file, then `COMMANDEX_*` environment
//! variables, then whatever the CLI sets on top.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use commandex_core::logging_facility::Profile;
use commandex_core::{CommandexError, ExError, ExErrorKind, Goal, GoalRegistry};

use crate::EngineResult;

pub const CONFIG_FILE_NAME: &str = "commandex.toml";
pub const ENV_REFRESH_DELAY_MS: &str = "COMMANDEX_REFRESH_DELAY_MS";
pub const ENV_LOG_PROFILE: &str = "COMMANDEX_LOG_PROFILE";

/// Upper bound on the refresh quiet period
pub const MAX_REFRESH_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshSection {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    commandex_core::DEFAULT_REFRESH_DELAY.as_millis() as u64
}

impl Default for RefreshSection {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEntry {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalsSection {
    /// Goal for commands without a goal attribute
    #[serde(default = "default_goal")]
    pub default: String,
    /// Goals registered on top of the predefined ones
    #[serde(default)]
    pub extra: Vec<GoalEntry>,
}

fn default_goal() -> String {
    commandex_core::DEFAULT_GOAL_ID.to_string()
}

impl Default for GoalsSection {
    fn default() -> Self {
        Self {
            default: default_goal(),
            extra: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_profile() -> String {
    Profile::Development.as_str().to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            profile: default_profile(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandexConfig {
    #[serde(default)]
    pub refresh: RefreshSection,
    #[serde(default)]
    pub goals: GoalsSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

impl CommandexConfig {
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidConfig` if it does not parse
    /// or fails validation.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("config_load")
                .with_message(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content).map_err(|e| e.with_op("config_load"))
    }

    /// # Errors
    ///
    /// `InvalidConfig` on TOML errors or invalid values.
    pub fn parse(content: &str) -> EngineResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            ExError::from(CommandexError::InvalidConfig {
                reason: format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e),
            })
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else `commandex.toml` in `dir` if present, else
    /// defaults
    ///
    /// # Errors
    ///
    /// Same as [`CommandexConfig::load`]. An explicitly given path that does
    /// not exist is an error.
    pub fn load_or_default(path: Option<&Path>, dir: &Path) -> EngineResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `COMMANDEX_*` overrides from the process environment
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if a variable holds an unusable value.
    pub fn apply_env(&mut self) -> EngineResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if a value is unusable.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> EngineResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_REFRESH_DELAY_MS) {
            self.refresh.delay_ms = raw.trim().parse().map_err(|_| {
                ExError::from(CommandexError::InvalidConfig {
                    reason: format!("{} must be an integer, got '{}'", ENV_REFRESH_DELAY_MS, raw),
                })
            })?;
        }
        if let Some(raw) = lookup(ENV_LOG_PROFILE) {
            self.logging.profile = raw.trim().to_string();
        }
        self.validate()
    }

    /// # Errors
    ///
    /// `InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |reason: String| Err(ExError::from(CommandexError::InvalidConfig { reason }));

        if self.refresh.delay_ms > MAX_REFRESH_DELAY_MS {
            return invalid(format!(
                "refresh.delay_ms must be at most {}, got {}",
                MAX_REFRESH_DELAY_MS, self.refresh.delay_ms
            ));
        }
        if self.goals.default.trim().is_empty() {
            return invalid("goals.default cannot be empty".to_string());
        }
        for entry in &self.goals.extra {
            if entry.id.trim().is_empty() || entry.label.trim().is_empty() {
                return invalid(format!(
                    "goals.extra entries need an id and a label, got id='{}' label='{}'",
                    entry.id, entry.label
                ));
            }
        }
        self.log_profile()?;
        Ok(())
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh.delay_ms)
    }

    /// # Errors
    ///
    /// `InvalidConfig` for an unknown profile name.
    pub fn log_profile(&self) -> EngineResult<Profile> {
        self.logging
            .profile
            .parse::<Profile>()
            .map_err(ExError::from)
    }

    /// Predefined goals, plus `goals.extra`, with `goals.default` as default
    ///
    /// # Errors
    ///
    /// `InvalidInput` if an extra goal is rejected by the registry.
    pub fn build_registry(&self) -> EngineResult<GoalRegistry> {
        let mut registry = GoalRegistry::with_default(&self.goals.default);
        for entry in &self.goals.extra {
            registry
                .register(Goal::new(entry.id.clone(), entry.label.clone()))
                .map_err(|e| ExError::from(e).with_goal_id(entry.id.clone()))?;
        }
        Ok(registry)
    }

    /// # Errors
    ///
    /// `Serialization` if TOML encoding fails.
    pub fn to_toml_string(&self) -> EngineResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ExError::from(CommandexError::Serialization {
                message: e.to_string(),
            })
        })
    }
}
