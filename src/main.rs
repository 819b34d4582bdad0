use clap::Parser;
use secret_santa::utils::error::ErrorSeverity;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{CliConfig, ExchangeEngine, ExchangePipeline, FileConfig, LocalStorage, SantaError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting secret-santa");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with_config_error(e);
    }

    let storage = LocalStorage::new(config.base_dir.clone());

    let outcome = match &config.config {
        Some(path) => {
            let file_config = match FileConfig::from_file(path).and_then(|c| {
                c.validate()?;
                Ok(c)
            }) {
                Ok(file_config) => file_config,
                Err(e) => exit_with_config_error(e),
            };
            let pipeline = ExchangePipeline::new(storage, file_config);
            ExchangeEngine::new(pipeline).run().await
        }
        None => {
            let pipeline = ExchangePipeline::new(storage, config.clone());
            ExchangeEngine::new(pipeline).run().await
        }
    };

    match outcome {
        Ok(output_path) => {
            tracing::info!("✅ Secret Santa draw completed!");
            println!("✅ Secret Santa draw completed!");
            println!("📁 Assignments saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Draw failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn exit_with_config_error(e: SantaError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    eprintln!("❌ {}", e.user_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1)
}
