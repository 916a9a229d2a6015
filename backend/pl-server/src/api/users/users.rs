//! User ledger REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, LeaderboardEntryDto, LeaderboardParams,
    LeaderboardResponse, LoginResponse, ReferrerRequest, RegisterRequest, TaskCompleteRequest,
    TaskCompleteResponse, UserDto, UserResponse,
};

use pl_core::UserId;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use bytes::Bytes;

fn parse_id(raw: &str) -> ApiResult<UserId> {
    Ok(raw.parse::<UserId>()?)
}

/// Mutations are only allowed on the caller's own record
fn ensure_self(path_id: UserId, caller: &AuthenticatedUser) -> ApiResult<()> {
    if path_id != caller.0.id {
        log::warn!(
            "User {} attempted to modify user {}",
            caller.0.id,
            path_id
        );
        return Err(ApiError::validation(
            format!("Path id {} does not match the authenticated user", path_id),
            Some("id"),
        ));
    }
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /login/{id}
///
/// Mock login: issue a bearer token for an existing user id
pub async fn login(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<LoginResponse>> {
    let user_id = parse_id(&id)?;
    let token = state.tokens.issue(user_id).await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.ttl().num_seconds(),
    }))
}

/// POST /register
///
/// Idempotent on (nickname, email): returns the stored user either way
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(request) = payload?;
    let user = state.ledger.add_user(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    ))
}

/// GET /users/{id}/status
pub async fn status(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_id(&id)?;
    let user = state.ledger.status(user_id).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// GET /users/leaderboard
///
/// Parameters come from the JSON body when one is sent, else the query string
pub async fn leaderboard(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    query: Result<Query<LeaderboardParams>, QueryRejection>,
    body: Bytes,
) -> ApiResult<Json<LeaderboardResponse>> {
    let params = if body.iter().all(u8::is_ascii_whitespace) {
        let Query(params) = query?;
        params
    } else {
        serde_json::from_slice::<LeaderboardParams>(&body)
            .map_err(|e| ApiError::validation(format!("Invalid leaderboard body: {}", e), None))?
    };

    let (sort, page) = params.resolve()?;
    let users = state.ledger.leaderboard(sort, page).await?;

    Ok(Json(LeaderboardResponse {
        sort_by: sort.as_str().to_string(),
        page: page.page(),
        size: page.size(),
        users: users.into_iter().map(LeaderboardEntryDto::from).collect(),
    }))
}

/// PATCH /users/{id}/task/complete
pub async fn complete_task(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<TaskCompleteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskCompleteResponse>)> {
    let user_id = parse_id(&id)?;
    ensure_self(user_id, &caller)?;
    let Json(request) = payload?;

    let points = state.ledger.task_complete(user_id, &request.task).await?;
    let user = state.ledger.status(user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(TaskCompleteResponse {
            task: request.task,
            points,
            user: UserDto::from(user),
        }),
    ))
}

/// PATCH /users/{id}/referrer
pub async fn set_referrer(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<ReferrerRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user_id = parse_id(&id)?;
    ensure_self(user_id, &caller)?;
    let Json(request) = payload?;

    if request.referrer <= 0 {
        return Err(ApiError::validation(
            format!("Invalid referrer id {}", request.referrer),
            Some("referrer"),
        ));
    }

    state
        .ledger
        .invited_by(user_id, UserId(request.referrer))
        .await?;
    let user = state.ledger.status(user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    ))
}
