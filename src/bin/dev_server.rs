use anyhow::Result;
use clap::Parser;
use pwa_devtools::{cli::DevServerCli, config, logging, server};

fn main() -> Result<()> {
    let cli = DevServerCli::parse();

    logging::init(cli.verbose);

    let mut config = config::load_config_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);
    config::validate_config(&config)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server::serve(config.server))
}
