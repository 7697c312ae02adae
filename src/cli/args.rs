use clap::Parser;
use std::env;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Provision and seed the crawl document stores",
    long_about = "Creates the collections, indexes and seed documents that the doc-search \
crawlers expect, once per store. Collections that already exist are left untouched, \
so re-running is safe.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long,
        env = "CRAWLSTORE_DATA_DIR",
        default_value = ".crawlstore/",
        value_name = "DIR",
        help = "Directory holding the store database files"
    )]
    pub data_dir: String,

    #[arg(
        long = "log-file",
        env = "CRAWLSTORE_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long,
        default_value_t = false,
        help = "Reset all persisted state (delete the store database files) before running"
    )]
    pub reset: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();
    Cli::parse()
}
