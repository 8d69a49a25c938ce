use clap::Parser;
use option_scale::app::{run_once, run_session};
use option_scale::utils::logger;
use option_scale::{CliConfig, ComparisonClient, ComparisonView, LazyModel, ViewPhase};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting option-scale");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.provider_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    // The Gemini client is only built once the first comparison needs it.
    let client = ComparisonClient::new(LazyModel::new(settings));
    let mut view = ComparisonView::new(client);
    let mut stdout = std::io::stdout();

    if config.is_one_shot() {
        let option_a = config.option_a.as_deref().unwrap_or_default();
        let option_b = config.option_b.as_deref().unwrap_or_default();
        let phase = run_once(&mut view, option_a, option_b, config.json, &mut stdout).await?;

        if phase != ViewPhase::Success {
            std::process::exit(1);
        }
        return Ok(());
    }

    let stdin = BufReader::new(tokio::io::stdin());
    run_session(&mut view, stdin, &mut stdout).await?;

    tracing::info!("Session closed");
    Ok(())
}
