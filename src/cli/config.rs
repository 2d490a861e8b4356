//! Proxyvote configuration file handling
//!
//! Provides default configuration generation and loading for the proxyvote CLI.
//! Configuration files are TOML format and stored under the user data directory.
//!
//! ## What lives here
//!
//! - Logging (level, optional log file)
//! - Default record date for `demo` and `vote`
//! - The meeting agenda (`[[meetings]]`). When no meetings are configured the
//!   built-in standard catalog is used.
//!
//! Voter registries are never written here; they live only for one command run.

use chrono::NaiveDate;
use proxyvote::{CatalogError, ProposalCatalog};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default log level
const DEFAULT_LOG_LEVEL: &str = "info";

/// Proxyvote CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyvoteConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Voting defaults
    #[serde(default)]
    pub voting: VotingConfig,

    /// Meeting agenda (empty = standard catalog)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meetings: Vec<MeetingConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    pub file: Option<PathBuf>,
}

/// Voting defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingConfig {
    /// Record date used when `--record-date` is not given
    #[serde(default = "default_record_date")]
    pub record_date: NaiveDate,
}

/// One meeting and the proposals open for voting at it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingConfig {
    pub id: String,
    pub proposals: Vec<String>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Record date of the bundled demo meeting.
pub fn default_record_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 20).unwrap_or_default()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            record_date: default_record_date(),
        }
    }
}

impl ProxyvoteConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: ProxyvoteConfig = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        Ok(config)
    }

    /// Load from `path` if given, else the default location if it exists,
    /// else built-in defaults.
    ///
    /// An explicitly given path must exist.
    pub fn resolve(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = default_config_path();
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to a TOML file
    #[allow(dead_code)] // Used by tests; `init` writes the commented template instead
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        fs::write(path, contents)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        Ok(())
    }

    /// Build the proposal catalog described by this config.
    pub fn catalog(&self) -> Result<ProposalCatalog, CatalogError> {
        if self.meetings.is_empty() {
            return Ok(ProposalCatalog::standard());
        }

        ProposalCatalog::new(
            self.meetings
                .iter()
                .map(|m| (m.id.as_str(), m.proposals.iter().map(String::as_str))),
        )
    }

    /// Generate default configuration content as a string with comments
    pub fn generate_default_toml() -> String {
        format!(
            r#"# Proxyvote Configuration
#
# Voter registries are NOT stored here. Each command run starts from an
# empty registry (or the ids passed with --voted).

[logging]
# Log level: trace, debug, info, warn, error
# RUST_LOG overrides this when set.
level = "{level}"

# Log file path (optional, logs to stderr if not specified)
# file = "/var/log/proxyvote/proxyvote.log"

[voting]
# Record date used when --record-date is not given (YYYY-MM-DD).
# Vote changes are allowed strictly before this date.
record_date = "{record_date}"

# Meeting agenda. Each meeting needs at least one proposal.
# Remove all [[meetings]] tables to fall back to the built-in agenda.
[[meetings]]
id = "M1"
proposals = ["P1", "P2", "P3"]

[[meetings]]
id = "M2"
proposals = ["P4", "P5"]

[[meetings]]
id = "M3"
proposals = ["P6", "P7"]
"#,
            level = DEFAULT_LOG_LEVEL,
            record_date = default_record_date(),
        )
    }

    /// Create and save a default configuration file
    pub fn create_default(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let contents = Self::generate_default_toml();

        // Create parent directory if needed
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        fs::write(config_path, contents).map_err(|e| {
            format!(
                "Failed to write config file '{}': {}",
                config_path.display(),
                e
            )
        })?;

        Ok(())
    }
}

/// Get the default config file path
///
/// - Linux: ~/.local/share/proxyvote/config.toml
pub fn default_config_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("proxyvote")
        .join("config.toml")
}
