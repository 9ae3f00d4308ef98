use clap::Parser;
use team_roster::utils::error::ErrorSeverity;
use team_roster::utils::{logger, validation::Validate};
use team_roster::{CliConfig, LocalStorage, RosterEngine, RosterPipeline};

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting team-roster CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let run_config = match cli.resolve().and_then(|run| run.validate().map(|_| run)) {
        Ok(run) => run,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(cli.base_dir.clone());
    let pipeline = RosterPipeline::new(storage, run_config);
    let engine = RosterEngine::new(pipeline);

    match engine.run() {
        Ok(output) => {
            if output.written_to.is_none() {
                print!("{}", output.rendered);
                if !output.rendered.ends_with('\n') {
                    println!();
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Roster extraction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
