use anyhow::Context;
use lcomp::domain::config::{ApiConfig, LoggingConfig};
use lcomp::kernel::config::load_config;
use lcomp_logger::{Logger, parse_level};
use lcomp_server::Server;

#[lcomp_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}

fn init_logger(cfg: &LoggingConfig) -> anyhow::Result<Logger> {
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(parse_level(&cfg.level)?);
    let builder = match &cfg.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };

    let logger = match &cfg.dir {
        Some(dir) => builder.path(dir).max_files(cfg.max_files).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
