use serde_json::json;
use skills_ranked::{
    app::{RunRequest, run},
    error::AppError,
    export::ExportOutcome,
    ranking::{RankingRow, collect_leaderboard},
    testing_utils::{RecordingSleeper, event_json, page_json, skill_json, team_json, test_client},
};
use std::time::Duration;
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const EVENT_CODE: &str = "RE-VRC-24-1234";
const EVENT_ID: u64 = 51234;

async fn mount_event(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("sku", EVENT_CODE))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![event_json(EVENT_ID, EVENT_CODE)],
            None,
        )))
        .mount(server)
        .await;
}

async fn mount_skills(server: &MockServer, team_id: u64, records: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path(format!("/teams/{team_id}/skills")))
        .and(query_param("season", "173"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(records, None)))
        .mount(server)
        .await;
}

/// Four teams over two pages of the team listing:
/// - 1 / "70A": driver [10, 30, 20], programming [40, 15] -> 70
/// - 2 / "95B": driver [50], programming [45] -> 95
/// - 3 / "0C": driver only -> degraded
/// - 4 / "404D": skills request fails -> skipped
async fn mount_event_with_teams(server: &MockServer) {
    mount_event(server).await;

    let teams_url = format!("{}/events/{EVENT_ID}/teams", server.uri());
    Mock::given(method("GET"))
        .and(path(format!("/events/{EVENT_ID}/teams")))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![team_json(3, "0C", "Charlie"), team_json(4, "404D", "Delta")],
            None,
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/events/{EVENT_ID}/teams")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![team_json(1, "70A", "Alpha"), team_json(2, "95B", "Bravo")],
            Some(format!("{teams_url}?page=2")),
        )))
        .mount(server)
        .await;

    mount_skills(
        server,
        1,
        vec![
            skill_json(1, "driver", 10),
            skill_json(1, "driver", 30),
            skill_json(1, "programming", 40),
            skill_json(1, "driver", 20),
            skill_json(1, "programming", 15),
        ],
    )
    .await;
    mount_skills(
        server,
        2,
        vec![skill_json(2, "driver", 50), skill_json(2, "programming", 45)],
    )
    .await;
    mount_skills(server, 3, vec![skill_json(3, "driver", 12)]).await;

    Mock::given(method("GET"))
        .and(path("/teams/4/skills"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_ranks_and_exports() {
    let server = MockServer::start().await;
    mount_event_with_teams(&server).await;

    let dir = tempdir().unwrap();
    let mut request = RunRequest::new(EVENT_CODE, "unused", 173);
    request.output_path = dir.path().join("leaderboard.xlsx");
    request.fallback_path = dir.path().join(format!("{EVENT_CODE}_skills.xlsx"));

    let client = test_client(&server.uri(), RecordingSleeper::default());
    let summary = run(&client, &request).await.unwrap();

    assert_eq!(summary.event.id, EVENT_ID);
    assert_eq!(summary.teams, 4);
    assert_eq!(summary.ranked, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.degraded, 1);
    assert_eq!(summary.partial, 0);
    assert!(matches!(summary.output, ExportOutcome::Primary(_)));
    assert!(request.output_path.exists());
    assert!(!request.fallback_path.exists());
}

#[tokio::test]
async fn test_leaderboard_order_and_rows() {
    let server = MockServer::start().await;
    mount_event_with_teams(&server).await;

    let client = test_client(&server.uri(), RecordingSleeper::default());
    let teams = client.fetch_event_teams(EVENT_ID).await.unwrap();
    assert_eq!(teams.items.len(), 4);

    let leaderboard = collect_leaderboard(&client, &teams.items, 173).await;

    let numbers: Vec<_> = leaderboard.rows.iter().map(|r| r.number()).collect();
    assert_eq!(numbers, vec!["95B", "70A", "0C"]);
    assert_eq!(leaderboard.skipped, vec!["404D".to_string()]);

    match &leaderboard.rows[1] {
        RankingRow::Complete(row) => {
            assert_eq!(row.driver_scores, vec![10, 30, 20]);
            assert_eq!(row.programming_scores, vec![40, 15]);
            assert_eq!(row.best_driver, 30);
            assert_eq!(row.best_programming, 40);
            assert_eq!(row.best_sum, 70);
        }
        RankingRow::Degraded(_) => panic!("70A should be complete"),
    }
    assert!(leaderboard.rows[2].is_degraded());
    assert_eq!(leaderboard.rows[2].name(), "Charlie");
}

#[tokio::test]
async fn test_aggregation_is_repeatable() {
    let server = MockServer::start().await;
    mount_event_with_teams(&server).await;

    let client = test_client(&server.uri(), RecordingSleeper::default());
    let teams = client.fetch_event_teams(EVENT_ID).await.unwrap().items;

    let first = collect_leaderboard(&client, &teams, 173).await;
    let second = collect_leaderboard(&client, &teams, 173).await;

    assert_eq!(first.rows, second.rows);
    assert_eq!(first.skipped, second.skipped);
}

#[tokio::test]
async fn test_unknown_event_code_stops_before_team_fetches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], None)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/events/{EVENT_ID}/teams")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], None)))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let mut request = RunRequest::new("RE-VRC-00-0000", "unused", 173);
    request.output_path = dir.path().join("leaderboard.xlsx");
    request.fallback_path = dir.path().join("fallback.xlsx");

    let client = test_client(&server.uri(), RecordingSleeper::default());
    let result = run(&client, &request).await;

    assert!(matches!(result, Err(AppError::EventNotFound { .. })));
    assert!(!request.output_path.exists());
    assert!(!request.fallback_path.exists());
}

#[tokio::test]
async fn test_rate_limited_skills_are_retried_not_skipped() {
    let server = MockServer::start().await;
    mount_event(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/events/{EVENT_ID}/teams")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![team_json(1, "1A", "Alpha")],
            None,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/teams/1/skills"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "4"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    mount_skills(
        &server,
        1,
        vec![skill_json(1, "driver", 3), skill_json(1, "programming", 4)],
    )
    .await;

    let sleeper = RecordingSleeper::default();
    let client = test_client(&server.uri(), sleeper.clone());
    let teams = client.fetch_event_teams(EVENT_ID).await.unwrap().items;
    let leaderboard = collect_leaderboard(&client, &teams, 173).await;

    assert!(leaderboard.skipped.is_empty());
    assert_eq!(leaderboard.rows[0].best_sum(), 7);
    assert_eq!(
        sleeper.recorded(),
        vec![Duration::from_secs(5), Duration::from_secs(5)]
    );
}

#[tokio::test]
async fn test_partial_team_listing_still_exports() {
    let server = MockServer::start().await;
    mount_event(&server).await;

    let teams_url = format!("{}/events/{EVENT_ID}/teams", server.uri());
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/events/{EVENT_ID}/teams")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "next_page_url": format!("{teams_url}?page=2") },
            "data": [team_json(1, "1A", "Alpha")],
        })))
        .mount(&server)
        .await;
    mount_skills(
        &server,
        1,
        vec![skill_json(1, "driver", 1), skill_json(1, "programming", 2)],
    )
    .await;

    let dir = tempdir().unwrap();
    let mut request = RunRequest::new(EVENT_CODE, "unused", 173);
    request.output_path = dir.path().join("leaderboard.xlsx");
    request.fallback_path = dir.path().join("fallback.xlsx");

    let client = test_client(&server.uri(), RecordingSleeper::default());
    let summary = run(&client, &request).await.unwrap();

    assert_eq!(summary.teams, 1);
    assert_eq!(summary.ranked, 1);
    assert!(request.output_path.exists());
}

#[tokio::test]
async fn test_failed_team_listing_exports_empty_leaderboard() {
    let server = MockServer::start().await;
    mount_event(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/events/{EVENT_ID}/teams")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let mut request = RunRequest::new(EVENT_CODE, "unused", 173);
    request.output_path = dir.path().join("leaderboard.xlsx");
    request.fallback_path = dir.path().join("fallback.xlsx");

    let client = test_client(&server.uri(), RecordingSleeper::default());
    let summary = run(&client, &request).await.unwrap();

    assert_eq!(summary.teams, 0);
    assert_eq!(summary.ranked, 0);
    assert!(request.output_path.exists());
}

#[tokio::test]
async fn test_unwritable_output_uses_fallback_name() {
    let server = MockServer::start().await;
    mount_event_with_teams(&server).await;

    let dir = tempdir().unwrap();
    let mut request = RunRequest::new(EVENT_CODE, "unused", 173);
    request.output_path = dir.path().join("no-such-dir").join("leaderboard.xlsx");
    request.fallback_path = dir.path().join(format!("{EVENT_CODE}_skills.xlsx"));

    let client = test_client(&server.uri(), RecordingSleeper::default());
    let summary = run(&client, &request).await.unwrap();

    assert!(matches!(summary.output, ExportOutcome::Fallback { .. }));
    assert_eq!(summary.output.path(), request.fallback_path.as_path());
    assert!(request.fallback_path.exists());
}

#[tokio::test]
async fn test_malformed_skill_record_keeps_the_team() {
    let server = MockServer::start().await;
    mount_event(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/events/{EVENT_ID}/teams")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![team_json(1, "1A", "Alpha"), json!({ "number": "??" })],
            None,
        )))
        .mount(&server)
        .await;
    mount_skills(
        &server,
        1,
        vec![
            skill_json(1, "driver", 25),
            json!({ "id": 2, "type": "programming", "score": null }),
        ],
    )
    .await;

    let client = test_client(&server.uri(), RecordingSleeper::default());
    let teams = client.fetch_event_teams(EVENT_ID).await.unwrap().items;
    assert_eq!(teams.len(), 1);

    let leaderboard = collect_leaderboard(&client, &teams, 173).await;

    assert!(leaderboard.skipped.is_empty());
    assert_eq!(leaderboard.rows.len(), 1);
    assert!(leaderboard.rows[0].is_degraded());
    assert_eq!(leaderboard.rows[0].number(), "1A");
}
