//! Global timetab configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{TimetabError, TimetabResult};
use crate::persist::StateDir;

static DEFAULT_STATE_PATH: &str = "~/.local/share/timetab";

fn default_state_path() -> PathBuf {
    PathBuf::from(DEFAULT_STATE_PATH)
}

fn is_default_state_path(p: &PathBuf) -> bool {
    *p == default_state_path()
}

/// Global configuration at ~/.config/timetab/config.toml
///
/// Only one setting so far: where the schedule state lives.
#[derive(Serialize, Deserialize, Clone)]
pub struct TimetabConfig {
    #[serde(default = "default_state_path", skip_serializing_if = "is_default_state_path")]
    pub state_dir: PathBuf,
}

impl Default for TimetabConfig {
    fn default() -> Self {
        TimetabConfig {
            state_dir: default_state_path(),
        }
    }
}

impl TimetabConfig {
    pub fn config_path() -> TimetabResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TimetabError::Config("Could not determine config directory".into()))?
            .join("timetab");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented default file on first run.
    pub fn load() -> TimetabResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: TimetabConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| TimetabError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TimetabError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The state directory, tilde-expanded.
    pub fn state_dir(&self) -> StateDir {
        let expanded = shellexpand::tilde(&self.state_dir.to_string_lossy()).into_owned();
        StateDir::new(expanded)
    }

    /// The configured state directory in display-friendly form, keeping `~`.
    pub fn display_state_dir(&self) -> PathBuf {
        self.state_dir.clone()
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> TimetabResult<()> {
        let contents = format!(
            "\
# timetab configuration

# Where your schedule state lives:
# state_dir = \"{}\"
",
            DEFAULT_STATE_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimetabError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TimetabError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Save the current config to ~/.config/timetab/config.toml
    pub fn save(&self) -> TimetabResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| TimetabError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| TimetabError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
