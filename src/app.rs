use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::data_fetcher::api::{ApiClient, Sleeper};
use crate::data_fetcher::models::Event;
use crate::error::AppError;
use crate::export::{self, ExportOutcome};
use crate::ranking::collect_leaderboard;

/// What a single run should produce.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub event_code: String,
    pub season_id: u32,
    pub output_path: PathBuf,
    pub fallback_path: PathBuf,
}

impl RunRequest {
    /// Output goes to `<output_basename>.xlsx`, falling back to `<event_code>_skills.xlsx`.
    pub fn new(event_code: &str, output_basename: &str, season_id: u32) -> Self {
        Self {
            event_code: event_code.to_string(),
            season_id,
            output_path: export::primary_path(output_basename),
            fallback_path: export::fallback_path(event_code),
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub event: Event,
    pub teams: usize,
    pub ranked: usize,
    pub skipped: usize,
    pub degraded: usize,
    pub partial: usize,
    pub output: ExportOutcome,
}

/// Resolve the event, rank its teams and export the leaderboard.
///
/// - Event resolution failures abort the run
/// - A failed team listing yields an empty leaderboard
/// - Per-team skill failures skip or degrade that team only
/// - Export gets one fallback attempt
pub async fn run<S: Sleeper>(
    client: &ApiClient<S>,
    request: &RunRequest,
) -> Result<RunSummary, AppError> {
    let event = match client.resolve_event(&request.event_code).await {
        Ok(event) => event,
        Err(e) => {
            error!("Error: could not get event from that code ({e})");
            return Err(e);
        }
    };

    let teams = match client.fetch_event_teams(event.id).await {
        Ok(teams) => {
            if !teams.is_complete() {
                warn!(
                    "Team list for {} is incomplete; ranking {} team(s)",
                    request.event_code,
                    teams.items.len()
                );
            }
            teams.items
        }
        Err(e) => {
            error!("Could not list teams for event {}: {e}", event.id);
            Vec::new()
        }
    };

    let leaderboard = collect_leaderboard(client, &teams, request.season_id).await;
    let output =
        export::export_with_fallback(&leaderboard.rows, &request.output_path, &request.fallback_path)?;

    let summary = RunSummary {
        teams: teams.len(),
        ranked: leaderboard.rows.len(),
        skipped: leaderboard.skipped.len(),
        degraded: leaderboard.degraded_count(),
        partial: leaderboard.partial.len(),
        event,
        output,
    };

    info!(
        "Ranked {} of {} team(s) for {} ({} skipped, {} with zero scores, {} partial) -> {}",
        summary.ranked,
        summary.teams,
        request.event_code,
        summary.skipped,
        summary.degraded,
        summary.partial,
        summary.output.path().display()
    );

    Ok(summary)
}
