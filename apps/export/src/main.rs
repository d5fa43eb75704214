#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{export, routes};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::Parser;
use vapps::domain::config::SiteConfig;
use vapps::kernel::config::load_config_or_default;
use vapps_logger::{Console, LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Stdout carries command output; logs go to stderr.
    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).console(Console::Stderr).level(level).init()?;

    let cfg: SiteConfig = load_config_or_default(cli.config.as_deref()).context("Configuration is malformed")?;

    match cli.command {
        AppCommands::Export { out, lastmod, year } => {
            let today = Utc::now().date_naive();
            let out = out.unwrap_or_else(|| cfg.storage.output_dir.clone());
            let summary =
                export::export(&cfg, &out, lastmod.unwrap_or(today), year.unwrap_or_else(|| today.year()))?;
            println!(
                "Exported {} pages, {} redirects and {} assets to {}",
                summary.pages,
                summary.redirects,
                summary.assets,
                out.display()
            );
        },
        AppCommands::Routes { pairs } => routes::print_routes(cfg.site.default_locale, pairs),
    }

    Ok(())
}
