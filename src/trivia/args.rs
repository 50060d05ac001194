use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trivia")]
#[command(version, about = "REST API for the trivia game", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding questions, categories and config.json
    #[arg(long, global = true, env = "TRIVIA_HOME")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:5000
        #[arg(long)]
        bind: Option<String>,

        /// Questions per page
        #[arg(long)]
        page_size: Option<usize>,

        /// Fixed seed for quiz draws
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write the sample catalog into the data directory
    Seed {
        /// Overwrite existing questions and categories
        #[arg(long)]
        force: bool,
    },
}
