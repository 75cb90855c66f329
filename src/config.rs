//! Server configuration.
//!
//! Values are resolved in three layers, later ones winning:
//!
//! 1. built-in defaults,
//! 2. an optional YAML file (`--config` / `CONFIG_FILE`),
//! 3. command-line flags, each of which can also come from its environment
//!    variable.
//!
//! ```yaml
//! listen_addr: "0.0.0.0:4221"
//! directory: /srv/files
//! read_timeout_secs: 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4221";

/// Command-line flags.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "minihttpd")]
#[command(about = "Minimal HTTP/1.1 server with echo, user-agent and file routes")]
#[command(version)]
pub struct Args {
    /// Directory served by the /files/ route
    #[arg(long, env = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Address to listen on (default 0.0.0.0:4221)
    #[arg(long = "listen", env = "LISTEN")]
    pub listen_addr: Option<String>,

    /// Per-read timeout in seconds, 0 disables it
    #[arg(long = "read-timeout-secs", env = "READ_TIMEOUT_SECS")]
    pub read_timeout_secs: Option<u64>,

    /// YAML configuration file
    #[arg(long = "config", env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub listen_addr: String,
    pub directory: Option<PathBuf>,
    pub read_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            directory: None,
            read_timeout_secs: None,
        }
    }
}

impl Config {
    /// Resolves the configuration from the process arguments and environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let mut cfg = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(addr) = args.listen_addr {
            cfg.listen_addr = addr;
        }
        if args.directory.is_some() {
            cfg.directory = args.directory;
        }
        if args.read_timeout_secs.is_some() {
            cfg.read_timeout_secs = args.read_timeout_secs;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}
