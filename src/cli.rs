use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Terminal client for a remote blog posts service.
#[derive(Parser, Debug, Default)]
#[command(name = "postdesk", version, about)]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the posts service base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the key sent with every request
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,

    /// Override the log filter (e.g. "debug", "postdesk=trace")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Override the log file path
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Path of the config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line values on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(key) = &self.key {
            config.api.key = key.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}
