use std::{fs::File, path::Path};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
    pub talker: TalkerConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TalkerConfig {
    pub node: String,
    pub channel: String,
    pub interval_ms: u64,
    pub count: u64,
    pub capacity: usize,
}

const CONFIG_FILE: &str = "talker.yml";
const SYSTEM_CONFIG_FILE: &str = "/etc/config/talker.yml";
const CONFIG_ENV: &str = "TALKER_CONFIG";

impl AppConfig {
    /// Look in the working directory, then /etc/config, then `$TALKER_CONFIG`.
    /// The first file that exists wins; a file that exists but does not parse
    /// is an error.
    pub fn load() -> Result<Self> {
        for path in [CONFIG_FILE, SYSTEM_CONFIG_FILE] {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path)
                .with_context(|| format!("Failed to load configuration from ${}", CONFIG_ENV)),
            Err(_) => bail!("Failed to load configuration"),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open configuration file {}", path.display()))?;
        serde_yaml::from_reader(file)
            .with_context(|| format!("Failed to parse configuration from {}", path.display()))
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse()
            .with_context(|| format!("Invalid log level: {}", self.level))
    }
}
