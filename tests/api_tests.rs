use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{json, Value};

use glintly_feed::{
    api::{create_router, AppState},
    config::FeedSettings,
    services::{Catalog, ScoringWeights},
};

fn create_test_server() -> TestServer {
    let state = AppState::new(Catalog::demo(), FeedSettings::default());
    TestServer::new(create_router(state)).unwrap()
}

async fn create_seeded_server() -> TestServer {
    let state = AppState::new(Catalog::demo(), FeedSettings::default());
    state.seed_demo_library(Utc::now()).await.unwrap();
    TestServer::new(create_router(state)).unwrap()
}

fn ids(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let response = server
        .get("/health")
        .add_header(
            "x-request-id".parse::<axum::http::HeaderName>().unwrap(),
            "client-123".parse::<axum::http::HeaderValue>().unwrap(),
        )
        .await;

    assert_eq!(response.header("x-request-id"), "client-123");
}

#[tokio::test]
async fn test_feed_without_interests_is_pure_ranking() {
    let server = create_seeded_server().await;
    let response = server.get("/api/v1/feed").await;
    response.assert_status_ok();

    let feed: Value = response.json();
    assert_eq!(feed["items"].as_array().unwrap().len(), 10);
    assert_eq!(feed["hasMore"], true);
    assert_eq!(feed["total"], 12);
    assert_eq!(feed["stats"]["revisitNudges"], 0);
    assert_eq!(feed["stats"]["totalVideos"], 12);
    // Perfect Pasta: 95 engagement + 5 beginner bonus
    assert_eq!(feed["items"][0]["id"], "5");
}

#[tokio::test]
async fn test_feed_interleaves_nudges_on_first_page() {
    let server = create_seeded_server().await;
    let response = server
        .get("/api/v1/feed")
        .add_query_param("interests", "tech")
        .await;
    response.assert_status_ok();

    let feed: Value = response.json();
    assert_eq!(
        ids(&feed["items"]),
        vec!["1", "2", "9", "10", "revisit_1", "5", "3", "7", "8", "revisit_3"]
    );
    assert_eq!(feed["hasMore"], true);
    assert_eq!(feed["total"], 14);

    let nudge = &feed["items"][4];
    assert_eq!(nudge["kind"], "revisitNudge");
    assert_eq!(nudge["isRevisit"], true);
    assert_eq!(nudge["priority"], "high");
    assert_eq!(nudge["daysSinceSaved"], 14);
    assert!(nudge["nudgeMessage"].as_str().unwrap().contains("refresher"));

    assert_eq!(feed["items"][0]["kind"], "ordinary");
    for item in feed["items"].as_array().unwrap() {
        assert!(item.get("score").is_none());
    }

    let stats = &feed["stats"];
    assert_eq!(stats["interestMatches"], 2);
    assert_eq!(stats["mixIns"], 10);
    assert_eq!(stats["revisitNudges"], 2);
}

#[tokio::test]
async fn test_feed_second_page_has_no_nudges() {
    let server = create_seeded_server().await;
    let response = server
        .get("/api/v1/feed")
        .add_query_param("interests", "tech")
        .add_query_param("page", 2)
        .await;
    response.assert_status_ok();

    let feed: Value = response.json();
    assert_eq!(ids(&feed["items"]), vec!["6", "11"]);
    assert_eq!(feed["hasMore"], false);
    assert_eq!(feed["total"], 12);
}

#[tokio::test]
async fn test_feed_watch_history_demotes_seen_items() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/feed")
        .add_query_param("watchHistory", "5,7")
        .add_query_param("limit", 12)
        .await;
    response.assert_status_ok();

    let feed: Value = response.json();
    let order = ids(&feed["items"]);
    assert_eq!(order[0], "3");
    assert_eq!(&order[10..], &["5", "7"]);
    assert_eq!(feed["hasMore"], false);
}

#[tokio::test]
async fn test_feed_uses_configured_scoring_weights() {
    let settings = FeedSettings {
        weights: ScoringWeights {
            rewatch_penalty: 0.0,
            ..ScoringWeights::default()
        },
        ..FeedSettings::default()
    };
    let server = TestServer::new(create_router(AppState::new(Catalog::demo(), settings))).unwrap();

    let feed: Value = server
        .get("/api/v1/feed")
        .add_query_param("watchHistory", "5")
        .await
        .json();

    // Without a rewatch penalty the watched pasta video keeps the top spot
    assert_eq!(feed["items"][0]["id"], "5");
}

#[tokio::test]
async fn test_feed_out_of_range_page_is_empty() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/feed")
        .add_query_param("page", 5)
        .await;
    response.assert_status_ok();

    let feed: Value = response.json();
    assert!(feed["items"].as_array().unwrap().is_empty());
    assert_eq!(feed["hasMore"], false);
    assert_eq!(feed["total"], 12);
}

#[tokio::test]
async fn test_feed_rejects_invalid_pagination() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/feed")
        .add_query_param("page", 0)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("page"));

    let response = server
        .get("/api/v1/feed")
        .add_query_param("limit", 0)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .get("/api/v1/feed")
        .add_query_param("limit", 500)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_feed_uses_stored_interests_when_param_absent() {
    let server = create_seeded_server().await;

    server
        .put("/api/v1/users/anonymous/interests")
        .json(&json!({ "interests": ["tech"] }))
        .await
        .assert_status_ok();

    let stored: Value = server.get("/api/v1/feed").await.json();
    let explicit: Value = server
        .get("/api/v1/feed")
        .add_query_param("interests", "tech")
        .await
        .json();
    assert_eq!(stored["items"], explicit["items"]);

    // An explicit empty list overrides what is stored
    let overridden: Value = server
        .get("/api/v1/feed")
        .add_query_param("interests", "")
        .await
        .json();
    assert_eq!(overridden["stats"]["interestMatches"], 0);
    assert_eq!(overridden["total"], 12);
}

#[tokio::test]
async fn test_interests_round_trip() {
    let server = create_test_server();

    let response = server.get("/api/v1/users/alice/interests").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["userId"], "alice");
    assert!(body["interests"].as_array().unwrap().is_empty());

    let response = server
        .put("/api/v1/users/alice/interests")
        .json(&json!({ "interests": ["tech", " learning", "tech", ""] }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["interests"], json!(["tech", "learning"]));

    let body: Value = server.get("/api/v1/users/alice/interests").await.json();
    assert_eq!(body["interests"], json!(["tech", "learning"]));
}

#[tokio::test]
async fn test_interests_rejects_empty_list() {
    let server = create_test_server();
    let response = server
        .put("/api/v1/users/alice/interests")
        .json(&json!({ "interests": [" "] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_and_unsave_flow() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/saved")
        .json(&json!({ "userId": "alice", "videoId": "7", "action": "save", "priority": "high" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let saved: Value = server
        .get("/api/v1/saved")
        .add_query_param("userId", "alice")
        .await
        .json();
    assert_eq!(saved["total"], 1);
    assert_eq!(saved["videos"][0]["id"], "7");
    assert_eq!(saved["videos"][0]["savedAt"], "Today");
    assert_eq!(saved["videos"][0]["priority"], "high");

    server
        .post("/api/v1/saved")
        .json(&json!({ "userId": "alice", "videoId": "7", "action": "unsave" }))
        .await
        .assert_status_ok();

    let saved: Value = server
        .get("/api/v1/saved")
        .add_query_param("userId", "alice")
        .await
        .json();
    assert_eq!(saved["total"], 0);
}

#[tokio::test]
async fn test_save_unknown_video_is_not_found() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/saved")
        .json(&json!({ "videoId": "does-not-exist", "action": "save" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_fresh_save_is_not_yet_a_nudge() {
    let server = create_test_server();
    server
        .post("/api/v1/saved")
        .json(&json!({ "videoId": "3", "action": "save" }))
        .await
        .assert_status_ok();

    let all: Value = server.get("/api/v1/revisit").await.json();
    assert_eq!(all["total"], 1);
    assert_eq!(all["videos"][0]["daysSinceSaved"], 0);

    let nudges: Value = server
        .get("/api/v1/revisit")
        .add_query_param("includeNudges", true)
        .await
        .json();
    assert_eq!(nudges["total"], 0);
}

#[tokio::test]
async fn test_revisit_ranks_seeded_library() {
    let server = create_seeded_server().await;
    let response = server
        .get("/api/v1/revisit")
        .add_query_param("includeNudges", true)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        ids(&body["videos"]),
        vec!["revisit_1", "revisit_3", "revisit_2", "revisit_4"]
    );
    assert_eq!(body["total"], 4);
    assert_eq!(body["nudgeStats"]["highPriority"], 1);
    assert_eq!(body["nudgeStats"]["mediumPriority"], 2);
    assert_eq!(body["nudgeStats"]["lowPriority"], 1);
}

#[tokio::test]
async fn test_saved_list_shows_relative_age() {
    let server = create_seeded_server().await;
    let body: Value = server.get("/api/v1/saved").await.json();

    assert_eq!(body["total"], 4);
    let ages: Vec<&str> = body["videos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["savedAt"].as_str().unwrap())
        .collect();
    assert_eq!(ages, vec!["2 weeks ago", "1 week ago", "1 week ago", "3 days ago"]);
}
