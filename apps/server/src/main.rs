use anyhow::Context;
use vapps::domain::config::SiteConfig;
use vapps::kernel::config::load_config;
use vapps_logger::{Logger, parse_level};
use vapps_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: SiteConfig = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let logging = &cfg.logging;
    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&logging.level)?)
        .json(logging.json);
    let _log = match &logging.path {
        Some(path) => builder.path(path).init()?,
        None => builder.init()?,
    };

    Server::builder().config(cfg).build()?.run().await
}
