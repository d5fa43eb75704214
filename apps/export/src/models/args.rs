//! # CLI Argument Definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "vapps")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Static export and route inspection for the Various Apps site")]
pub struct Cli {
    /// Configuration file; a missing file falls back to the built-in defaults
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Render every page, the sitemap and robots.txt into a directory
    Export {
        /// Output directory (defaults to `storage.output_dir`)
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Sitemap `lastmod` date, `YYYY-MM-DD` (defaults to today)
        #[arg(long)]
        lastmod: Option<NaiveDate>,
        /// Copyright year printed in the footer (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Print the public path of every exportable page
    Routes {
        /// Print the `(locale, app id)` pairs instead
        #[arg(long)]
        pairs: bool,
    },
}
