use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use strip_comments::utils::{logger, validation::Validate};
use strip_comments::{CliConfig, CommentStripper, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = match CliConfig::try_parse() {
        Ok(config) => config.normalized(),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", CliConfig::usage());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    config
        .validate()
        .with_context(|| format!("cannot process {}", config.directory.display()))?;

    if let Err(e) = config.check_root() {
        tracing::warn!("Nothing to process: {}", e.user_friendly_message());
        return Ok(());
    }

    let stripper = CommentStripper::new(LocalStorage::new(), config);
    let summary = stripper.run();

    if summary.files_failed > 0 {
        tracing::warn!("{} file(s) could not be processed", summary.files_failed);
    }

    Ok(())
}
