use crate::error::{Result, TriviaError};
use crate::pager::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Server configuration, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriviaConfig {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Questions per page for listings and searches
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Fixed seed for quiz draws. Unset means a fresh random seed per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_seed: Option<u64>,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            page_size: default_page_size(),
            quiz_seed: None,
        }
    }
}

impl TriviaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TriviaError::Io)?;
        let config: TriviaConfig =
            serde_json::from_str(&content).map_err(TriviaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TriviaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TriviaError::Serialization)?;
        fs::write(config_path, content).map_err(TriviaError::Io)?;
        Ok(())
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        bind: Option<String>,
        page_size: Option<usize>,
        quiz_seed: Option<u64>,
    ) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(page_size) = page_size.filter(|&n| n > 0) {
            self.page_size = page_size;
        }
        if quiz_seed.is_some() {
            self.quiz_seed = quiz_seed;
        }
        self
    }
}
