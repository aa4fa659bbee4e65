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

mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use campus_events_api::{
    ApiError, AttendanceResponse, CreateEventRequest, CreateUserRequest, EventPopularityEntry,
    EventResponse, FeedbackResponse, LoginRequest, LoginResponse, MarkAttendanceRequest,
    MyRegistrationInfo, RegisterForEventRequest, RegistrationResponse, StudentParticipationEntry,
    SubmitFeedbackRequest, SuccessResponse, UserResponse, create_event, create_user, delete_event,
    event_popularity, list_events, login, logout, mark_attendance, my_registrations,
    register_for_event, student_participation, submit_feedback, whoami,
};
use campus_events_persistence::Persistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use session::{SessionToken, SessionUser};

/// Campus Events Server - HTTP server for the campus events backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,
}

/// Application state shared across handlers.
///
/// A single connection guarded by a mutex; requests are serialized on it.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error message.
    error: String,
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
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/users/`.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, HttpError> {
    info!(email = %request.email, role = %request.role, "Handling create_user request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UserResponse = create_user(&mut *persistence, &request)?;

    Ok(Json(response))
}

/// Handler for POST `/login/`.
///
/// Credentials are passed as the `email` and `password` query parameters.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Query(request): Query<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(email = %request.email, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(&mut *persistence, &request)?;

    Ok(Json(response))
}

/// Handler for POST `/logout/`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<SuccessResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: SuccessResponse = logout(&mut *persistence, &token)?;

    Ok(Json(response))
}

/// Handler for GET `/me/`.
#[allow(clippy::unused_async)]
async fn handle_whoami(SessionUser(user): SessionUser) -> Json<UserResponse> {
    Json(whoami(&user))
}

/// Handler for POST `/events/`.
async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user): SessionUser,
    Json(request): Json<CreateEventRequest>,
) -> Result<Json<EventResponse>, HttpError> {
    info!(user_id = user.user_id, title = %request.title, "Handling create_event request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EventResponse = create_event(&mut *persistence, request, &user)?;

    Ok(Json(response))
}

/// Handler for GET `/events/`.
///
/// Open to anyone. A `token` parameter is accepted and ignored.
async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<EventResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<EventResponse> = list_events(&mut *persistence)?;

    Ok(Json(response))
}

/// Handler for DELETE `/events/{event_id}/`.
async fn handle_delete_event(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user): SessionUser,
    Path(event_id): Path<i64>,
) -> Result<Json<SuccessResponse>, HttpError> {
    info!(user_id = user.user_id, event_id, "Handling delete_event request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SuccessResponse = delete_event(&mut *persistence, event_id, &user)?;

    Ok(Json(response))
}

/// Handler for POST `/registrations/`.
async fn handle_register_for_event(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user): SessionUser,
    Json(request): Json<RegisterForEventRequest>,
) -> Result<Json<RegistrationResponse>, HttpError> {
    info!(
        user_id = user.user_id,
        event_id = request.event_id,
        "Handling register_for_event request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: RegistrationResponse = register_for_event(&mut *persistence, request, &user)?;

    Ok(Json(response))
}

/// Handler for GET `/my-registrations/`.
async fn handle_my_registrations(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<Vec<MyRegistrationInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<MyRegistrationInfo> = my_registrations(&mut *persistence, &user)?;

    Ok(Json(response))
}

/// Handler for POST `/attendance/`.
async fn handle_mark_attendance(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user): SessionUser,
    Json(request): Json<MarkAttendanceRequest>,
) -> Result<Json<AttendanceResponse>, HttpError> {
    info!(
        user_id = user.user_id,
        registration_id = request.registration_id,
        present = request.present,
        "Handling mark_attendance request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AttendanceResponse = mark_attendance(&mut *persistence, request, &user)?;

    Ok(Json(response))
}

/// Handler for POST `/feedback/`.
async fn handle_submit_feedback(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user): SessionUser,
    Json(request): Json<SubmitFeedbackRequest>,
) -> Result<Json<FeedbackResponse>, HttpError> {
    info!(
        user_id = user.user_id,
        registration_id = request.registration_id,
        "Handling submit_feedback request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: FeedbackResponse = submit_feedback(&mut *persistence, &request, &user)?;

    Ok(Json(response))
}

/// Handler for GET `/reports/event-popularity/`.
async fn handle_event_popularity(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<Vec<EventPopularityEntry>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<EventPopularityEntry> = event_popularity(&mut *persistence, &user)?;

    Ok(Json(response))
}

/// Handler for GET `/reports/student-participation/`.
async fn handle_student_participation(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<Vec<StudentParticipationEntry>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<StudentParticipationEntry> =
        student_participation(&mut *persistence, &user)?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users/", post(handle_create_user))
        .route("/login/", post(handle_login))
        .route("/logout/", post(handle_logout))
        .route("/me/", get(handle_whoami))
        .route("/events/", post(handle_create_event).get(handle_list_events))
        .route("/events/{event_id}/", delete(handle_delete_event))
        .route("/registrations/", post(handle_register_for_event))
        .route("/my-registrations/", get(handle_my_registrations))
        .route("/attendance/", post(handle_mark_attendance))
        .route("/feedback/", post(handle_submit_feedback))
        .route("/reports/event-popularity/", get(handle_event_popularity))
        .route(
            "/reports/student-participation/",
            get(handle_student_participation),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Campus Events Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
