use std::path::PathBuf;

use audito_config::AuditoConfig;
use clap::Parser;

/// Command-line flags for the `audito` binary. Flags override loaded config.
#[derive(Debug, Parser)]
#[command(name = "audito", version, about = "Audito - compliance audit backend")]
pub struct Cli {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// TCP port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding users, checklists and the audit log
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply flag overrides on top of loaded configuration.
    pub fn apply_overrides(&self, config: &mut AuditoConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir.clone_from(data_dir);
        }
    }
}
