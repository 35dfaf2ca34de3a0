//! Skills aggregation: best driver and programming score per team, ranked by their sum.

use std::fmt;
use tracing::{info, instrument, warn};

use crate::data_fetcher::api::{ApiClient, Sleeper};
use crate::data_fetcher::models::{SkillRecord, SkillType, Team};

/// A team with at least one driver and one programming score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRow {
    pub number: String,
    pub name: String,
    pub driver_scores: Vec<i64>,
    pub programming_scores: Vec<i64>,
    pub best_driver: i64,
    pub best_programming: i64,
    pub best_sum: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCategory {
    Driver,
    Programming,
    Both,
}

impl fmt::Display for MissingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingCategory::Driver => write!(f, "no driver scores"),
            MissingCategory::Programming => write!(f, "no programming scores"),
            MissingCategory::Both => write!(f, "no driver or programming scores"),
        }
    }
}

/// A team whose best sum cannot be computed. Exported as zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedRow {
    pub number: String,
    pub name: String,
    pub missing: MissingCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingRow {
    Complete(ScoredRow),
    Degraded(DegradedRow),
}

impl RankingRow {
    pub fn number(&self) -> &str {
        match self {
            RankingRow::Complete(row) => &row.number,
            RankingRow::Degraded(row) => &row.number,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            RankingRow::Complete(row) => &row.name,
            RankingRow::Degraded(row) => &row.name,
        }
    }

    /// Sort key. Degraded rows rank as zero.
    pub fn best_sum(&self) -> i64 {
        match self {
            RankingRow::Complete(row) => row.best_sum,
            RankingRow::Degraded(_) => 0,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, RankingRow::Degraded(_))
    }
}

/// Builds the row for one team from its skills records.
pub fn build_row(team: &Team, skills: &[SkillRecord]) -> RankingRow {
    let scores_of = |kind: SkillType| -> Vec<i64> {
        skills
            .iter()
            .filter(|s| s.skill_type == kind)
            .map(|s| s.score)
            .collect()
    };
    let driver_scores = scores_of(SkillType::Driver);
    let programming_scores = scores_of(SkillType::Programming);

    let best_driver = driver_scores.iter().copied().max();
    let best_programming = programming_scores.iter().copied().max();

    match (best_driver, best_programming) {
        (Some(best_driver), Some(best_programming)) => RankingRow::Complete(ScoredRow {
            number: team.number.clone(),
            name: team.team_name.clone(),
            driver_scores,
            programming_scores,
            best_driver,
            best_programming,
            best_sum: best_driver + best_programming,
        }),
        (driver, programming) => {
            let missing = match (driver, programming) {
                (None, None) => MissingCategory::Both,
                (None, _) => MissingCategory::Driver,
                _ => MissingCategory::Programming,
            };
            RankingRow::Degraded(DegradedRow {
                number: team.number.clone(),
                name: team.team_name.clone(),
                missing,
            })
        }
    }
}

/// Sorts rows by best sum, highest first. Equal sums keep their input order.
pub fn rank_rows(mut rows: Vec<RankingRow>) -> Vec<RankingRow> {
    rows.sort_by(|a, b| b.best_sum().cmp(&a.best_sum()));
    rows
}

/// Ranked rows plus what happened along the way.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    pub rows: Vec<RankingRow>,
    /// Numbers of teams left out because their skills could not be fetched.
    pub skipped: Vec<String>,
    /// Numbers of teams whose skills listing stopped early.
    pub partial: Vec<String>,
}

impl Leaderboard {
    pub fn degraded_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_degraded()).count()
    }
}

/// Fetches skills for each team in turn and builds the ranked leaderboard.
///
/// A team whose skills request fails outright is skipped; a team with no
/// scores in a category still gets a (degraded) row.
#[instrument(skip(client, teams), fields(teams = teams.len()))]
pub async fn collect_leaderboard<S: Sleeper>(
    client: &ApiClient<S>,
    teams: &[Team],
    season_id: u32,
) -> Leaderboard {
    let mut leaderboard = Leaderboard::default();
    let mut rows = Vec::with_capacity(teams.len());

    for team in teams {
        info!("Getting data for team {}...", team.number);
        let skills = match client.fetch_team_skills(team.id, season_id).await {
            Ok(skills) => skills,
            Err(e) if e.is_rate_limit() => {
                warn!("Skipping team {}: still rate limited ({e})", team.number);
                leaderboard.skipped.push(team.number.clone());
                continue;
            }
            Err(e) => {
                warn!("Skipping team {}: {e}", team.number);
                leaderboard.skipped.push(team.number.clone());
                continue;
            }
        };

        if !skills.is_complete() {
            leaderboard.partial.push(team.number.clone());
        }

        let row = build_row(team, &skills.items);
        if let RankingRow::Degraded(degraded) = &row {
            warn!(
                "Team {} has {}; recording zero scores",
                team.number, degraded.missing
            );
        }
        rows.push(row);
    }

    leaderboard.rows = rank_rows(rows);
    leaderboard
}
