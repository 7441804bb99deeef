use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{
        relative_time, ContentItem, FeedPage, Priority, RevisitNudge, SaveAction, SavedItem,
        UserContext,
    },
    services::{FeedRequest, NudgeStats},
};

use super::{AppState, DEFAULT_USER_ID};

// Request/Response types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Comma-separated categories; absent means "use stored interests"
    pub interests: Option<String>,
    /// Comma-separated item ids
    pub watch_history: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisitQuery {
    pub user_id: Option<String>,
    #[serde(default)]
    pub include_nudges: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisitResponse {
    pub videos: Vec<RevisitNudge>,
    pub total: usize,
    pub nudge_stats: NudgeStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub user_id: Option<String>,
    pub video_id: String,
    pub action: SaveAction,
    pub priority: Option<Priority>,
    pub nudge_message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedVideoResponse {
    #[serde(flatten)]
    pub item: ContentItem,
    /// Relative age, e.g. "3 days ago"
    pub saved_at: String,
    pub priority: Priority,
}

impl SavedVideoResponse {
    fn from_saved(saved: SavedItem, now: chrono::DateTime<Utc>) -> Self {
        Self {
            saved_at: relative_time(saved.saved_at, now),
            priority: saved.priority,
            item: saved.item,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SavedListResponse {
    pub videos: Vec<SavedVideoResponse>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInterestsRequest {
    pub interests: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestsResponse {
    pub user_id: String,
    pub interests: Vec<String>,
}

// Helpers

/// Splits a comma-separated query value, dropping empty segments
fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims, drops empties and removes duplicates while keeping first occurrence order
fn normalize_interests(interests: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(interests.len());
    for interest in interests {
        let interest = interest.trim();
        if !interest.is_empty() && !normalized.iter().any(|existing| existing == interest) {
            normalized.push(interest.to_string());
        }
    }
    normalized
}

fn user_or_default(user_id: Option<String>) -> String {
    user_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string())
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Personalized, interleaved feed page
pub async fn get_feed(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<FeedQuery>,
) -> AppResult<Json<FeedPage>> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(state.settings.default_page_size);

    if page == 0 {
        return Err(AppError::InvalidInput("page must be at least 1".to_string()));
    }
    if limit == 0 || limit > state.settings.max_page_size {
        return Err(AppError::InvalidInput(format!(
            "limit must be between 1 and {}",
            state.settings.max_page_size
        )));
    }

    let user_id = user_or_default(query.user_id);
    let interests = match query.interests {
        Some(raw) => split_csv(&raw),
        None => state.interests.interests(&user_id).await?.unwrap_or_default(),
    };
    let watch_history = query
        .watch_history
        .as_deref()
        .map(split_csv)
        .unwrap_or_default();

    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        page,
        limit,
        interests = interests.len(),
        watched = watch_history.len(),
        "Processing feed request"
    );

    let request = FeedRequest {
        user_id,
        page,
        limit,
        context: UserContext::new(interests, watch_history),
    };

    let feed = state.feed.build_feed(&request, Utc::now()).await;

    Ok(Json(feed))
}

/// Saved videos eligible for resurfacing
pub async fn get_revisit(
    State(state): State<AppState>,
    Query(query): Query<RevisitQuery>,
) -> AppResult<Json<RevisitResponse>> {
    let user_id = user_or_default(query.user_id);
    let now = Utc::now();

    let videos = if query.include_nudges {
        state.revisit.nudges(&user_id, now).await?
    } else {
        state.revisit.all(&user_id, now).await?
    };

    Ok(Json(RevisitResponse {
        total: videos.len(),
        nudge_stats: NudgeStats::from_nudges(&videos),
        videos,
    }))
}

/// The user's saved library
pub async fn get_saved(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<SavedListResponse>> {
    let user_id = user_or_default(query.user_id);
    let now = Utc::now();

    let videos: Vec<SavedVideoResponse> = state
        .saved_items
        .list(&user_id)
        .await?
        .into_iter()
        .map(|saved| SavedVideoResponse::from_saved(saved, now))
        .collect();

    Ok(Json(SavedListResponse {
        total: videos.len(),
        videos,
    }))
}

/// Save or unsave a catalog video
pub async fn update_saved(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SaveRequest>,
) -> AppResult<Json<Value>> {
    let user_id = user_or_default(request.user_id);

    match request.action {
        SaveAction::Save => {
            let item = state
                .catalog
                .get(&request.video_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("video {}", request.video_id)))?;

            let mut saved = SavedItem::new(item, Utc::now(), request.priority.unwrap_or_default());
            if let Some(message) = request.nudge_message.filter(|m| !m.trim().is_empty()) {
                saved = saved.with_nudge_message(message);
            }

            state.saved_items.put(&user_id, saved).await?;
        }
        SaveAction::Unsave => {
            let removed = state.saved_items.delete(&user_id, &request.video_id).await?;
            if !removed {
                tracing::debug!(
                    request_id = %request_id,
                    video_id = %request.video_id,
                    "Unsave for a video that was not saved"
                );
            }
        }
    }

    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        video_id = %request.video_id,
        action = ?request.action,
        "Saved library updated"
    );

    Ok(Json(json!({ "success": true })))
}

/// Stored interests for a user
pub async fn get_interests(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<InterestsResponse>> {
    let interests = state.interests.interests(&user_id).await?.unwrap_or_default();
    Ok(Json(InterestsResponse { user_id, interests }))
}

/// Replace a user's interests
pub async fn update_interests(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateInterestsRequest>,
) -> AppResult<Json<InterestsResponse>> {
    let interests = normalize_interests(request.interests);
    if interests.is_empty() {
        return Err(AppError::InvalidInput(
            "Must provide at least one interest".to_string(),
        ));
    }

    state
        .interests
        .set_interests(&user_id, interests.clone())
        .await?;

    tracing::info!(user_id = %user_id, count = interests.len(), "Interests updated");

    Ok(Json(InterestsResponse { user_id, interests }))
}
