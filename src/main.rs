use clap::Parser;
use group_check::utils::{logger, validation::Validate};
use group_check::{report, CheckEngine, CliConfig, FileSource};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting group-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    let engine = CheckEngine::new(FileSource, config.clone());

    match engine.run() {
        Ok(result) => {
            if config.json {
                match report::render_json(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(2);
                    }
                }
            } else {
                print!("{}", report::render_text(&result));
            }

            if result.has_conflicts || result.has_missing {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("Group check failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
