// src/main.rs
use clap::Parser;
use skills_ranked::app::{self, RunRequest};
use skills_ranked::cli::Args;
use skills_ranked::config::Config;
use skills_ranked::data_fetcher::ApiClient;
use skills_ranked::error::AppError;
use skills_ranked::export::ExportOutcome;
use skills_ranked::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Missing .env is fine; the variables may already be in the environment.
    dotenv::dotenv().ok();

    // Wrong arity exits here with usage and status 2.
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).await?;
    if let Some(season) = args.season {
        config.season_id = season;
    }

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");
    tracing::debug!("Loaded configuration: {config:?}");

    let client = ApiClient::from_config(&config)?;
    let request = RunRequest::new(&args.event_code, &args.output, config.season_id);

    let summary = app::run(&client, &request).await?;

    match &summary.output {
        ExportOutcome::Primary(path) => println!("Saved {}", path.display()),
        ExportOutcome::Fallback {
            path,
            primary_error,
        } => println!(
            "Could not save {} ({primary_error}); saved {} instead",
            request.output_path.display(),
            path.display()
        ),
    }

    Ok(())
}
