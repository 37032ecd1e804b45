//! CLI argument definitions using clap

use clap::Parser;

/// Typed organization hierarchies: franchise trees behind an HTTP API
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bind host (overrides config)
    #[arg(long, env = "ORGTREE_HOST")]
    pub host: Option<String>,

    /// Bind port (overrides config)
    #[arg(short, long, env = "ORGTREE_PORT")]
    pub port: Option<u16>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,
}
