pub mod catalog;
pub mod health;
pub mod scan;
pub mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};
use eon_common::config::{Config, DEFAULT_HOST, DEFAULT_PORT};
use eon_core::ScanController;
use eon_protocols::HttpGateway;

use crate::terminal::view::TerminalView;

pub type Controller = ScanController<Arc<HttpGateway>, TerminalView>;

#[derive(Parser)]
#[command(name = "eon")]
#[command(about = "Security audit client for small business websites.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Host running the ÉON backend
    #[arg(long, global = true, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, global = true, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, global = true, default_value = "http")]
    pub scheme: String,

    /// Reduce output (-q hides headers, -qq only results)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit a domain
    #[command(alias = "s")]
    Scan {
        domain: String,
        /// Also audit subdomains
        #[arg(short = 's', long)]
        include_subdomains: bool,
        /// Save the results as an HTML page
        #[arg(long)]
        html: Option<PathBuf>,
        /// Request a PDF export once the scan is displayed
        #[arg(long)]
        export: bool,
    },
    /// Display a stored scan
    Show {
        scan_id: String,
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Delete a stored scan
    Delete { scan_id: String },
    /// List the platforms the backend can detect
    Platforms,
    /// List previous scans
    History {
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Check that the backend is reachable
    Health,
    /// Interactive session keeping the current scan between commands
    #[command(alias = "i")]
    Shell,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            scheme: self.scheme.clone(),
            host: self.host.clone(),
            port: self.port,
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}
