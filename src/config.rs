//! Server configuration.
//!
//! Values come from the command line (or the matching environment
//! variables), then an optional YAML file, then built-in defaults:
//!
//! ```bash
//! webserv --host 0.0.0.0 -p 8000 --root ./public --mode serial -v
//! WEBSERV_PORT=8000 webserv --config webserv.yaml
//! ```
//!
//! ```yaml
//! host: 0.0.0.0
//! port: 8000
//! root: ./public
//! mode: concurrent
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use crate::server::ServeMode;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;

/// Command line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "webserv")]
#[command(about = "webserv - a toy web server")]
#[command(version)]
pub struct Cli {
    /// Host/IP to listen on [default: localhost]
    #[arg(long, env = "WEBSERV_HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 8080]
    #[arg(short, long, env = "WEBSERV_PORT")]
    pub port: Option<u16>,

    /// Increase output verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory served as the web root [default: .]
    #[arg(long, env = "WEBSERV_ROOT")]
    pub root: Option<PathBuf>,

    /// Connection scheduling [default: concurrent]
    #[arg(long, value_enum)]
    pub mode: Option<ServeMode>,

    /// YAML file with host, port, root and mode
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Optional settings read from a YAML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub root: Option<PathBuf>,
    pub mode: Option<ServeMode>,
}

impl FileConfig {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("invalid config file")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub root: PathBuf,
    pub mode: ServeMode,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
            mode: ServeMode::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Parses the process arguments and loads the config file, if any.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(cli, file))
    }

    /// Command line wins over the file, the file over the defaults.
    pub fn merge(cli: Cli, file: FileConfig) -> Self {
        let defaults = Self::default();

        Self {
            host: cli.host.or(file.host).unwrap_or(defaults.host),
            port: cli.port.or(file.port).unwrap_or(defaults.port),
            root: cli.root.or(file.root).unwrap_or(defaults.root),
            mode: cli.mode.or(file.mode).unwrap_or(defaults.mode),
            verbose: cli.verbose,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("host must not be empty");
        }
        if !self.root.is_dir() {
            anyhow::bail!("serving root {} is not a directory", self.root.display());
        }
        Ok(())
    }

    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.mode, ServeMode::Concurrent);
    }

    #[test]
    fn test_address() {
        let config = Config::default();
        assert_eq!(config.address(), "localhost:8080");
    }

    #[test]
    fn test_log_level_follows_verbose() {
        let mut config = Config::default();
        assert_eq!(config.log_level(), tracing::Level::ERROR);
        config.verbose = true;
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }
}
