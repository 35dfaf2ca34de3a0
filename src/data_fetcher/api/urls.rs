//! URL building utilities for API endpoints

fn base(api_domain: &str) -> &str {
    api_domain.trim_end_matches('/')
}

/// Builds the event search URL. The event code goes in the `sku` query parameter.
///
/// # Example
/// ```
/// use skills_ranked::data_fetcher::api::build_events_url;
///
/// let url = build_events_url("https://www.robotevents.com/api/v2");
/// assert_eq!(url, "https://www.robotevents.com/api/v2/events");
/// ```
pub fn build_events_url(api_domain: &str) -> String {
    format!("{}/events", base(api_domain))
}

/// Builds the URL listing the teams registered for an event.
///
/// # Example
/// ```
/// use skills_ranked::data_fetcher::api::build_event_teams_url;
///
/// let url = build_event_teams_url("https://www.robotevents.com/api/v2/", 51234);
/// assert_eq!(url, "https://www.robotevents.com/api/v2/events/51234/teams");
/// ```
pub fn build_event_teams_url(api_domain: &str, event_id: u64) -> String {
    format!("{}/events/{event_id}/teams", base(api_domain))
}

/// Builds the URL listing a team's skills runs. The season goes in the query.
///
/// # Example
/// ```
/// use skills_ranked::data_fetcher::api::build_team_skills_url;
///
/// let url = build_team_skills_url("https://www.robotevents.com/api/v2", 139);
/// assert_eq!(url, "https://www.robotevents.com/api/v2/teams/139/skills");
/// ```
pub fn build_team_skills_url(api_domain: &str, team_id: u64) -> String {
    format!("{}/teams/{team_id}/skills", base(api_domain))
}
