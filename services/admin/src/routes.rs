//! Admin service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    activity,
    error::{ApiError, ApiResult},
    middleware::{AuthUser, auth_middleware},
    models::{
        DashboardResponse, ProcessUnlockRequest, UnlockStatsResponse,
        unlock::{UnlockRequest, UnlockStatus},
    },
    reports,
    state::AppState,
};

/// Create the router for the admin service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/admin/dashboard", get(get_admin_dashboard))
        .route("/admin/unlock-requests", get(get_all_unlock_requests))
        .route(
            "/admin/unlock-requests/pending",
            get(get_pending_unlock_requests),
        )
        .route("/admin/unlock-requests/stats", get(get_unlock_stats))
        .route(
            "/admin/unlock-requests/:id/process",
            post(process_unlock_request),
        )
        .route("/admin/reports/attendance", get(get_attendance_reports))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint; pings the database
pub async fn health_check(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    common::database::health_check(&state.db_pool).await?;

    Ok(Json(json!({
        "status": "ok",
        "service": "admin-service"
    })))
}

/// Dashboard summary: entity counts plus the recent-activity feed
pub async fn get_admin_dashboard(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let total_teachers = state
        .stats_repository
        .count_active_teachers()
        .await
        .map_err(|e| {
            tracing::error!("Failed to count teachers: {}", e);
            ApiError::InternalServerError
        })?;

    let total_students = state
        .stats_repository
        .count_active_students()
        .await
        .map_err(|e| {
            tracing::error!("Failed to count students: {}", e);
            ApiError::InternalServerError
        })?;

    let total_classes = state.stats_repository.count_classes().await.map_err(|e| {
        tracing::error!("Failed to count classes: {}", e);
        ApiError::InternalServerError
    })?;

    let total_courses = state.stats_repository.count_courses().await.map_err(|e| {
        tracing::error!("Failed to count courses: {}", e);
        ApiError::InternalServerError
    })?;

    let requests = state.unlock_repository.find_all().await.map_err(|e| {
        tracing::error!("Failed to get unlock requests: {}", e);
        ApiError::InternalServerError
    })?;

    let markings = state
        .attendance_repository
        .find_recent_marked(activity::MARKING_SCAN_LIMIT)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get recent attendance markings: {}", e);
            ApiError::InternalServerError
        })?;

    let recent_activities = activity::build_feed(&requests, &markings, Utc::now());

    Ok(Json(DashboardResponse {
        total_teachers,
        total_students,
        total_classes,
        total_courses,
        recent_activities,
    }))
}

/// Get all unlock requests, newest first
pub async fn get_all_unlock_requests(
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let requests = state.unlock_repository.find_all().await.map_err(|e| {
        tracing::error!("Failed to get unlock requests: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(requests))
}

/// Get unlock requests that are still pending
pub async fn get_pending_unlock_requests(
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let requests = state
        .unlock_repository
        .find_by_status(UnlockStatus::Pending)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get pending unlock requests: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(requests))
}

/// Get aggregate unlock-request counters
pub async fn get_unlock_stats(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let pending = state
        .unlock_repository
        .count_by_status(UnlockStatus::Pending)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count pending unlock requests: {}", e);
            ApiError::InternalServerError
        })?;

    let approved = state
        .unlock_repository
        .count_by_status(UnlockStatus::Approved)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count approved unlock requests: {}", e);
            ApiError::InternalServerError
        })?;

    let rejected = state
        .unlock_repository
        .count_by_status(UnlockStatus::Rejected)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count rejected unlock requests: {}", e);
            ApiError::InternalServerError
        })?;

    let total = pending + approved + rejected;

    Ok(Json(UnlockStatsResponse {
        total,
        pending,
        approved,
        rejected,
    }))
}

/// Approve or reject a pending unlock request.
///
/// Approval unlocks every attendance row for the request's course and
/// date in the same transaction as the status flip. The acting admin id
/// is taken from the authenticated request and stored for tracking; a
/// missing identity does not block the approval.
pub async fn process_unlock_request(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProcessUnlockRequest>,
) -> ApiResult<impl IntoResponse> {
    let request = state
        .unlock_repository
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load unlock request {}: {}", id, e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Unlock request not found".to_string()))?;

    if !request.status.is_pending() {
        return Err(ApiError::Conflict(
            "Unlock request has already been processed".to_string(),
        ));
    }

    let updated = if payload.approve {
        let admin_id = user.map(|Extension(user)| user.id);
        let unlocked = state
            .unlock_repository
            .approve(&request, admin_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to approve unlock request {}: {}", id, e);
                ApiError::InternalServerError
            })?;

        info!(
            "Unlock request {} approved, {} attendance rows unlocked",
            id, unlocked
        );

        UnlockRequest {
            status: UnlockStatus::Approved,
            ..request
        }
    } else {
        state.unlock_repository.reject(id).await.map_err(|e| {
            tracing::error!("Failed to reject unlock request {}: {}", id, e);
            ApiError::InternalServerError
        })?;

        info!("Unlock request {} rejected", id);

        UnlockRequest {
            status: UnlockStatus::Rejected,
            ..request
        }
    };

    Ok(Json(updated))
}

/// Per-session attendance reports, newest first
pub async fn get_attendance_reports(
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let rows = state
        .attendance_repository
        .find_report_rows()
        .await
        .map_err(|e| {
            tracing::error!("Failed to get attendance rows: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(reports::aggregate(rows)))
}
