use clap::Parser;
use pwa_devtools::{cli::GenerateIconsCli, config, icons, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = GenerateIconsCli::parse();

    logging::init(cli.verbose);

    let config = config::load_config_or_default(cli.config.as_deref()).and_then(|mut config| {
        cli.apply(&mut config);
        config::validate_config(&config)?;
        Ok(config)
    });

    match config {
        Ok(config) => icons::run(&config.icons).exit_code(),
        Err(e) => {
            eprintln!("✗ {:#}", e);
            ExitCode::from(1)
        }
    }
}
