use clap::Parser;
use scrapper::utils::{logger, validation::Validate};
use scrapper::{CliConfig, GeneratorEngine, LocalStorage, WrapperPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting scrapper");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Argument validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let dry_run = config.dry_run;
    if dry_run {
        tracing::info!("Dry run: no files will be written");
    }

    let storage = LocalStorage::current_dir();
    let pipeline = WrapperPipeline::new(storage, config).with_dry_run(dry_run);
    let engine = GeneratorEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("Generated {} wrapper(s)", report.symbols.len());
            if let (Some(header), Some(implementation)) =
                (report.header_path, report.implementation_path)
            {
                println!("Header: {}", header);
                println!("Implementation: {}", implementation);
            } else {
                for symbol in &report.symbols {
                    println!("{}", symbol);
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "Generation failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
