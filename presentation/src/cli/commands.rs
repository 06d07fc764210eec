//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the polls server
#[derive(Parser, Debug)]
#[command(name = "polls")]
#[command(author, version, about = "Polls - publish questions and collect votes over HTTP")]
#[command(long_about = r#"
Polls serves a small voting site: an index of the latest questions, a
voting form per question, and a results page. Administrators can manage
questions through a JSON API under /admin/.

Configuration files are loaded from (in priority order):
1. POLLS_* environment variables
2. --config <path>     Explicit config file
3. ./polls.toml        Project-level config
4. ~/.config/polls/config.toml   Global config

Example:
  polls
  polls --bind 0.0.0.0:8080 --database sqlite://polls.db
  polls --database memory -vv
"#)]
pub struct Cli {
    /// Address to listen on (overrides [server] bind)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Database URL, or "memory" for a non-persistent store
    #[arg(short, long, value_name = "URL")]
    pub database: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
