use tracing::{error, info, instrument, warn};

use super::core::ApiClient;
use super::retry::Sleeper;
use super::urls::{build_event_teams_url, build_events_url};
use crate::data_fetcher::models::{Event, Paginated, Team};
use crate::error::AppError;

impl<S: Sleeper> ApiClient<S> {
    /// Resolves a human-assigned event code (e.g. `RE-VRC-24-1234`) to the event record.
    ///
    /// Only the first page of the search is read; a code is expected to match
    /// exactly one event. No match gives [`AppError::EventNotFound`], a failed
    /// lookup gives [`AppError::EventLookup`].
    #[instrument(skip(self))]
    pub async fn resolve_event(&self, event_code: &str) -> Result<Event, AppError> {
        let url = build_events_url(&self.api_domain);
        let page = self
            .fetch_page::<Event>(&url, &[("sku", event_code.to_string())], "getting event id")
            .await
            .map_err(|e| AppError::event_lookup(event_code, e))?;

        let match_count = page.data.len();
        let Some(event) = page.data.into_iter().next() else {
            error!("No event found for code {event_code}");
            return Err(AppError::event_not_found(event_code));
        };

        if match_count > 1 {
            warn!("Event code {event_code} matched {match_count} events, using id {}", event.id);
        }

        info!("Resolved event {event_code} to id {} ({})", event.id, event.name);
        Ok(event)
    }

    /// Lists every team registered for an event.
    #[instrument(skip(self))]
    pub async fn fetch_event_teams(&self, event_id: u64) -> Result<Paginated<Team>, AppError> {
        let url = build_event_teams_url(&self.api_domain, event_id);
        self.fetch_all_pages::<Team>(&url, &[], "getting teams")
            .await
    }
}
