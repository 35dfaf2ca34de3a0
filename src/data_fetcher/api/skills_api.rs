use tracing::instrument;

use super::core::ApiClient;
use super::retry::Sleeper;
use super::urls::build_team_skills_url;
use crate::data_fetcher::models::{Paginated, SkillRecord};
use crate::error::AppError;

impl<S: Sleeper> ApiClient<S> {
    /// Lists every skills run a team has recorded in a season.
    ///
    /// The season is sent as a query parameter on each page request.
    #[instrument(skip(self))]
    pub async fn fetch_team_skills(
        &self,
        team_id: u64,
        season_id: u32,
    ) -> Result<Paginated<SkillRecord>, AppError> {
        let url = build_team_skills_url(&self.api_domain, team_id);
        self.fetch_all_pages::<SkillRecord>(
            &url,
            &[("season", season_id.to_string())],
            "getting skills",
        )
        .await
    }
}
