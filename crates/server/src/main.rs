// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use worklink_api::{
    ApiError, ApplicationInfo, ConversationInfo, CreateApplicationRequest, CreateJobRequest,
    CreateMessageRequest, CreateReviewRequest, CurrentUser, JobApplicationInfo, JobInfo,
    ListJobsRequest, MessageInfo, RegisterUserRequest, ReviewInfo,
    UpdateApplicationStatusRequest, UpdateJobRequest, UpdateUserRequest, UserProfile,
    UserReviewInfo, WorkerApplicationInfo, authenticate_stub,
};
use worklink_store::MemoryStore;

/// WorkLink Server - HTTP server for the WorkLink marketplace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store is process-memory only and guarded by a single mutex, so every
/// handler's read-modify-write sequence runs serialized. That lock is what
/// upholds the one-application-per-(job, worker) and rating-aggregation
/// invariants under concurrent requests.
#[derive(Clone)]
struct AppState {
    /// The in-memory entity store.
    store: Arc<Mutex<MemoryStore>>,
}

/// Query parameters for listing jobs.
#[derive(Debug, Deserialize)]
struct JobsQuery {
    /// Match this employment kind exactly.
    job_type: Option<String>,
    /// Match this location exactly.
    location: Option<String>,
    /// Match this lifecycle state.
    status: Option<String>,
    /// Comma-separated skill list; a job matches when it shares at least
    /// one.
    skills: Option<String>,
}

/// Query parameters for the top-rated worker listing.
#[derive(Debug, Deserialize)]
struct TopRatedQuery {
    /// Maximum number of workers to return.
    limit: Option<usize>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::NotAuthenticated { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotAuthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DuplicateConflict { .. } => StatusCode::CONFLICT,
            ApiError::InvalidState { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Resolves the authenticated caller from the identity header.
///
/// The `X-User-Id` header stands in for the external session provider: it
/// carries the id the session layer would have resolved. Guarded routes
/// reject requests without a resolvable identity.
fn authenticate(store: &MemoryStore, headers: &HeaderMap) -> Result<CurrentUser, HttpError> {
    let raw = headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Missing X-User-Id header"),
        })?;

    let user_id: i64 = raw.parse().map_err(|_| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: format!("Invalid X-User-Id header: '{raw}'"),
    })?;

    authenticate_stub(store, user_id).map_err(|e| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: e.to_string(),
    })
}

/// Splits a comma-separated skills parameter into a criterion list.
fn parse_skills(raw: Option<String>) -> Option<Vec<String>> {
    raw.map(|joined| {
        joined
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}

/// Handler for POST /register endpoint.
///
/// Creates a new user account. This is the seam the excluded session
/// provider would sit behind; no session is established here.
async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<Json<UserProfile>, HttpError> {
    info!(username = %req.username, role = %req.role, "Handling register request");

    let mut store = app_state.store.lock().await;
    let profile: UserProfile = worklink_api::register_user(&mut store, req)?;
    drop(store);

    info!(user_id = profile.id, "Successfully registered user");

    Ok(Json(profile))
}

/// Handler for GET /workers endpoint.
async fn handle_list_workers(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<UserProfile>> {
    info!("Handling list_workers request");

    let store = app_state.store.lock().await;
    let workers: Vec<UserProfile> = worklink_api::list_workers(&store);
    drop(store);

    Json(workers)
}

/// Handler for GET /workers/top-rated endpoint.
async fn handle_top_rated_workers(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<TopRatedQuery>,
) -> Json<Vec<UserProfile>> {
    let limit: usize = query.limit.unwrap_or(4);
    info!(limit = limit, "Handling top_rated_workers request");

    let store = app_state.store.lock().await;
    let workers: Vec<UserProfile> = worklink_api::top_rated_workers(&store, limit);
    drop(store);

    Json(workers)
}

/// Handler for GET `/users/{id}` endpoint.
async fn handle_get_user(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserProfile>, HttpError> {
    info!(user_id = user_id, "Handling get_user request");

    let store = app_state.store.lock().await;
    let profile: UserProfile = worklink_api::get_user(&store, user_id)?;
    drop(store);

    Ok(Json(profile))
}

/// Handler for PATCH `/users/{id}` endpoint.
///
/// Users may only update their own profile; the credential is not
/// updatable through this endpoint.
async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserProfile>, HttpError> {
    let mut store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, user_id = user_id, "Handling update_user request");

    let profile: UserProfile = worklink_api::update_user(&mut store, &actor, user_id, req)?;
    drop(store);

    Ok(Json(profile))
}

/// Handler for GET `/users/{id}/reviews` endpoint.
async fn handle_user_reviews(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<UserReviewInfo>>, HttpError> {
    info!(user_id = user_id, "Handling user_reviews request");

    let store = app_state.store.lock().await;
    let reviews: Vec<UserReviewInfo> = worklink_api::user_reviews(&store, user_id)?;
    drop(store);

    Ok(Json(reviews))
}

/// Handler for GET /jobs endpoint.
async fn handle_list_jobs(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<JobsQuery>,
) -> Result<Json<Vec<JobInfo>>, HttpError> {
    info!("Handling list_jobs request");

    let request = ListJobsRequest {
        job_type: query.job_type,
        location: query.location,
        status: query.status,
        skills: parse_skills(query.skills),
    };

    let store = app_state.store.lock().await;
    let jobs: Vec<JobInfo> = worklink_api::list_jobs(&store, request)?;
    drop(store);

    Ok(Json(jobs))
}

/// Handler for GET `/jobs/{id}` endpoint.
async fn handle_get_job(
    AxumState(app_state): AxumState<AppState>,
    Path(job_id): Path<i64>,
) -> Result<Json<JobInfo>, HttpError> {
    info!(job_id = job_id, "Handling get_job request");

    let store = app_state.store.lock().await;
    let job: JobInfo = worklink_api::get_job(&store, job_id)?;
    drop(store);

    Ok(Json(job))
}

/// Handler for POST /jobs endpoint.
///
/// Employer-only; the posted job is owned by the authenticated caller.
async fn handle_create_job(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateJobRequest>,
) -> Result<Json<JobInfo>, HttpError> {
    let mut store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, title = %req.title, "Handling create_job request");

    let job: JobInfo = worklink_api::create_job(&mut store, &actor, req)?;
    drop(store);

    info!(job_id = job.id, "Successfully created job");

    Ok(Json(job))
}

/// Handler for PATCH `/jobs/{id}` endpoint.
async fn handle_update_job(
    AxumState(app_state): AxumState<AppState>,
    Path(job_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<UpdateJobRequest>,
) -> Result<Json<JobInfo>, HttpError> {
    let mut store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, job_id = job_id, "Handling update_job request");

    let job: JobInfo = worklink_api::update_job(&mut store, &actor, job_id, req)?;
    drop(store);

    Ok(Json(job))
}

/// Handler for GET /employer/jobs endpoint.
async fn handle_employer_jobs(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<JobInfo>>, HttpError> {
    let store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, "Handling employer_jobs request");

    let jobs: Vec<JobInfo> = worklink_api::employer_jobs(&store, &actor)?;
    drop(store);

    Ok(Json(jobs))
}

/// Handler for POST /applications endpoint.
///
/// Worker-only; the application belongs to the authenticated caller.
async fn handle_create_application(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<Json<ApplicationInfo>, HttpError> {
    let mut store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, job_id = req.job_id, "Handling create_application request");

    let application: ApplicationInfo = worklink_api::create_application(&mut store, &actor, req)?;
    drop(store);

    info!(application_id = application.id, "Successfully created application");

    Ok(Json(application))
}

/// Handler for GET /worker/applications endpoint.
async fn handle_worker_applications(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<WorkerApplicationInfo>>, HttpError> {
    let store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, "Handling worker_applications request");

    let applications: Vec<WorkerApplicationInfo> =
        worklink_api::worker_applications(&store, &actor)?;
    drop(store);

    Ok(Json(applications))
}

/// Handler for GET `/jobs/{id}/applications` endpoint.
///
/// Restricted to the employer who posted the job.
async fn handle_job_applications(
    AxumState(app_state): AxumState<AppState>,
    Path(job_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<JobApplicationInfo>>, HttpError> {
    let store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, job_id = job_id, "Handling job_applications request");

    let applications: Vec<JobApplicationInfo> =
        worklink_api::job_applications(&store, &actor, job_id)?;
    drop(store);

    Ok(Json(applications))
}

/// Handler for PATCH `/applications/{id}` endpoint.
///
/// Accepts or rejects a pending application; restricted to the employer
/// who owns the application's job.
async fn handle_update_application(
    AxumState(app_state): AxumState<AppState>,
    Path(application_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<UpdateApplicationStatusRequest>,
) -> Result<Json<ApplicationInfo>, HttpError> {
    let mut store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(
        actor_id = actor.id,
        application_id = application_id,
        status = %req.status,
        "Handling update_application request"
    );

    let application: ApplicationInfo =
        worklink_api::update_application_status(&mut store, &actor, application_id, &req)?;
    drop(store);

    Ok(Json(application))
}

/// Handler for POST /reviews endpoint.
async fn handle_create_review(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateReviewRequest>,
) -> Result<Json<ReviewInfo>, HttpError> {
    let mut store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, job_id = req.job_id, "Handling create_review request");

    let review: ReviewInfo = worklink_api::create_review(&mut store, &actor, req)?;
    drop(store);

    info!(review_id = review.id, "Successfully created review");

    Ok(Json(review))
}

/// Handler for POST /messages endpoint.
async fn handle_create_message(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateMessageRequest>,
) -> Result<Json<MessageInfo>, HttpError> {
    let mut store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, to_user_id = req.to_user_id, "Handling create_message request");

    let message: MessageInfo = worklink_api::create_message(&mut store, &actor, req)?;
    drop(store);

    Ok(Json(message))
}

/// Handler for GET /messages/conversations endpoint.
async fn handle_conversations(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ConversationInfo>>, HttpError> {
    let store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, "Handling conversations request");

    let list: Vec<ConversationInfo> = worklink_api::conversations(&store, &actor);
    drop(store);

    Ok(Json(list))
}

/// Handler for GET `/messages/{user_id}` endpoint.
///
/// Retrieval marks the caller's unread incoming messages in this
/// conversation as read.
async fn handle_conversation(
    AxumState(app_state): AxumState<AppState>,
    Path(other_user_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<MessageInfo>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let actor: CurrentUser = authenticate(&store, &headers)?;
    info!(actor_id = actor.id, other_user_id = other_user_id, "Handling conversation request");

    let messages: Vec<MessageInfo> =
        worklink_api::conversation(&mut store, &actor, other_user_id)?;
    drop(store);

    Ok(Json(messages))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/register", post(handle_register))
        .route("/workers", get(handle_list_workers))
        .route("/workers/top-rated", get(handle_top_rated_workers))
        .route("/users/{id}", get(handle_get_user))
        .route("/users/{id}", patch(handle_update_user))
        .route("/users/{id}/reviews", get(handle_user_reviews))
        .route("/jobs", get(handle_list_jobs))
        .route("/jobs", post(handle_create_job))
        .route("/jobs/{id}", get(handle_get_job))
        .route("/jobs/{id}", patch(handle_update_job))
        .route("/jobs/{id}/applications", get(handle_job_applications))
        .route("/employer/jobs", get(handle_employer_jobs))
        .route("/applications", post(handle_create_application))
        .route("/applications/{id}", patch(handle_update_application))
        .route("/worker/applications", get(handle_worker_applications))
        .route("/reviews", post(handle_create_review))
        .route("/messages", post(handle_create_message))
        .route("/messages/conversations", get(handle_conversations))
        .route("/messages/{user_id}", get(handle_conversation))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing WorkLink Server");

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(MemoryStore::new())),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
