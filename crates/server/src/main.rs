// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod live;
mod session;

use axum::{
    Json, Router,
    extract::{
        FromRef, FromRequest, Path, Query, Request, State as AxumState,
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use peopleos::{Outcome, State, Store};
use peopleos_api::{
    ApiError, AssignRoleRequest, AttendanceResponse, Authenticator, ClockEventRequest,
    CommandResponse, CreateDepartmentRequest, CreateEmployeeRequest, CreateRoleRequest,
    DashboardResponse, DepartmentsResponse, EditorResponse, EmployeeDraft, EmployeeListResponse,
    EmployeeProfileResponse, FieldError, LeaveDecisionRequest, LeaveRequestsResponse,
    LoginRequest, LoginResponse, OperationsResponse, SubmitLeaveRequest,
};
use peopleos_domain::{EmployeeId, FilterUpdate, LeaveRequestId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::Date;
use tokio::sync::Mutex;
use tracing::info;

use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use crate::session::Caller;

/// `PeopleOS` Server - HTTP server for the `PeopleOS` workforce console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "info")]
    log_filter: String,

    /// Start with empty collections instead of the seed catalog
    #[arg(long)]
    empty: bool,
}

/// Application state shared across handlers.
///
/// The store mutex is the only write path; readers clone the current
/// snapshot out of it and release the lock before building a response.
#[derive(Clone)]
struct AppState {
    /// The state engine.
    store: Arc<Mutex<Store>>,
    /// Console account list.
    authenticator: Arc<Authenticator>,
    /// Live event fan-out.
    broadcaster: Arc<LiveEventBroadcaster>,
}

impl AppState {
    fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            authenticator: Arc::new(Authenticator::with_seed_accounts()),
            broadcaster: Arc::new(LiveEventBroadcaster::new()),
        }
    }

    /// The current snapshot and the store clock's calendar date.
    async fn snapshot(&self) -> (Arc<State>, Date) {
        let store = self.store.lock().await;
        (store.snapshot(), peopleos_api::today(store.clock()))
    }

    /// Publishes live events for a finished command.
    fn publish(&self, command: &str, response: &CommandResponse) {
        if response.outcome == Outcome::Applied {
            self.broadcaster.broadcast(&LiveEvent::CommandApplied {
                command: command.to_string(),
                created_id: response.created_id.clone(),
            });
        }
        if let Some(entry) = &response.activity {
            self.broadcaster.broadcast(&LiveEvent::ActivityRecorded {
                entry: entry.clone(),
            });
        }
    }
}

impl FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.broadcaster)
    }
}

/// Query parameters for the employee editor.
#[derive(Debug, Default, Deserialize)]
struct EditorQuery {
    /// Employee to edit; a blank form when absent.
    employee_id: Option<String>,
    /// Department to select.
    department: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Machine-readable error kind.
    error: String,
    /// Error message.
    message: String,
    /// Per-field violations, for validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

/// HTTP error wrapper that implements `IntoResponse`.
pub struct HttpError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// Machine-readable error kind.
    pub code: &'static str,
    /// The error message.
    pub message: String,
    /// Per-field violations.
    pub fields: Vec<FieldError>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.code.to_string(),
            message: self.message,
            fields: self.fields,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let message: String = err.to_string();
        let (status, code, fields): (StatusCode, &'static str, Vec<FieldError>) = match err {
            ApiError::AuthenticationFailed { .. } => {
                (StatusCode::UNAUTHORIZED, "authentication_failed", Vec::new())
            }
            ApiError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "unauthorized", Vec::new()),
            ApiError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input", Vec::new()),
            ApiError::ValidationFailed { errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_failed",
                errors,
            ),
            ApiError::ResourceNotFound { .. } => (StatusCode::NOT_FOUND, "not_found", Vec::new()),
        };

        Self {
            status,
            code,
            message,
            fields,
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            code: "invalid_body",
            message: rejection.body_text(),
            fields: Vec::new(),
        }
    }
}

/// JSON request body whose rejections use the API error shape.
struct JsonBody<T>(T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            info!(error = %rejection.body_text(), "Rejected request body");
            HttpError::from(rejection)
        })?;
        Ok(Self(value))
    }
}

// ========================================================================
// Read endpoints
// ========================================================================

/// Handler for POST `/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(email = %req.email, "Handling login request");

    let response: LoginResponse = peopleos_api::login(&app_state.authenticator, &req)?;
    Ok(Json(response))
}

/// Handler for GET `/dashboard`.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
) -> Result<Json<DashboardResponse>, HttpError> {
    info!(user = %principal.id, "Handling dashboard request");

    let (state, today) = app_state.snapshot().await;
    Ok(Json(peopleos_api::dashboard(&principal, &state, today)?))
}

/// Handler for GET `/employees`.
async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
) -> Result<Json<EmployeeListResponse>, HttpError> {
    info!(user = %principal.id, "Handling list_employees request");

    let (state, _) = app_state.snapshot().await;
    Ok(Json(peopleos_api::list_employees(&principal, &state)?))
}

/// Handler for GET `/employees/{id}`.
async fn handle_get_employee(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    Path(employee_id): Path<String>,
) -> Result<Json<EmployeeProfileResponse>, HttpError> {
    info!(user = %principal.id, employee = %employee_id, "Handling get_employee request");

    let (state, today) = app_state.snapshot().await;
    Ok(Json(peopleos_api::get_employee(
        &principal,
        &state,
        &EmployeeId::from(employee_id),
        today,
    )?))
}

/// Handler for GET `/editor`.
async fn handle_editor_form(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    Query(query): Query<EditorQuery>,
) -> Result<Json<EditorResponse>, HttpError> {
    info!(
        user = %principal.id,
        employee = ?query.employee_id,
        department = ?query.department,
        "Handling editor_form request"
    );

    let employee_id: Option<EmployeeId> = query.employee_id.map(EmployeeId::from);
    let (state, _) = app_state.snapshot().await;
    Ok(Json(peopleos_api::editor_form(
        &principal,
        &state,
        employee_id.as_ref(),
        query.department.as_deref(),
    )?))
}

/// Handler for GET `/departments`.
async fn handle_list_departments(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
) -> Result<Json<DepartmentsResponse>, HttpError> {
    info!(user = %principal.id, "Handling list_departments request");

    let (state, _) = app_state.snapshot().await;
    Ok(Json(peopleos_api::list_departments(&principal, &state)?))
}

/// Handler for GET `/operations`.
async fn handle_operations(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
) -> Result<Json<OperationsResponse>, HttpError> {
    info!(user = %principal.id, "Handling operations request");

    let (state, today) = app_state.snapshot().await;
    Ok(Json(peopleos_api::operations(&principal, &state, today)?))
}

/// Handler for GET `/attendance`.
async fn handle_attendance(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
) -> Json<AttendanceResponse> {
    info!(user = %principal.id, "Handling attendance request");

    let (state, today) = app_state.snapshot().await;
    Json(peopleos_api::attendance(&state, today))
}

/// Handler for GET `/leave-requests`.
async fn handle_list_leave_requests(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
) -> Json<LeaveRequestsResponse> {
    info!(user = %principal.id, "Handling list_leave_requests request");

    let (state, _) = app_state.snapshot().await;
    Json(peopleos_api::list_leave_requests(&principal, &state))
}

// ========================================================================
// Command endpoints
// ========================================================================

/// Handler for POST `/filters`.
async fn handle_set_filters(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    JsonBody(update): JsonBody<FilterUpdate>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(user = %principal.id, "Handling set_filters request");

    let mut store = app_state.store.lock().await;
    let response: CommandResponse = peopleos_api::set_filters(&mut *store, &principal, update)?;
    drop(store);

    app_state.publish("set_filters", &response);
    Ok(Json(response))
}

/// Handler for POST `/employees`.
async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    JsonBody(req): JsonBody<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<CommandResponse>), HttpError> {
    info!(user = %principal.id, name = %req.employee.name, "Handling create_employee request");

    let mut store = app_state.store.lock().await;
    let response: CommandResponse = peopleos_api::create_employee(&mut *store, &principal, req)?;
    drop(store);

    info!(employee = ?response.created_id, "Successfully created employee");
    app_state.publish("add_employee", &response);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for PUT `/employees/{id}`.
async fn handle_update_employee(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    Path(employee_id): Path<String>,
    JsonBody(draft): JsonBody<EmployeeDraft>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(user = %principal.id, employee = %employee_id, "Handling update_employee request");

    let mut store = app_state.store.lock().await;
    let response: CommandResponse = peopleos_api::update_employee(
        &mut *store,
        &principal,
        &EmployeeId::from(employee_id),
        draft,
    )?;
    drop(store);

    app_state.publish("update_employee", &response);
    Ok(Json(response))
}

/// Handler for DELETE `/employees/{id}`.
async fn handle_remove_employee(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    Path(employee_id): Path<String>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(user = %principal.id, employee = %employee_id, "Handling remove_employee request");

    let mut store = app_state.store.lock().await;
    let response: CommandResponse =
        peopleos_api::remove_employee(&mut *store, &principal, &EmployeeId::from(employee_id))?;
    drop(store);

    app_state.publish("remove_employee", &response);
    Ok(Json(response))
}

/// Handler for POST `/employees/{id}/role`.
async fn handle_assign_role(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    Path(employee_id): Path<String>,
    JsonBody(req): JsonBody<AssignRoleRequest>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(
        user = %principal.id,
        employee = %employee_id,
        role = ?req.role_id,
        "Handling assign_role request"
    );

    let mut store = app_state.store.lock().await;
    let response: CommandResponse = peopleos_api::assign_role(
        &mut *store,
        &principal,
        &EmployeeId::from(employee_id),
        req,
    )?;
    drop(store);

    app_state.publish("assign_role", &response);
    Ok(Json(response))
}

/// Handler for POST `/departments`.
async fn handle_create_department(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    JsonBody(req): JsonBody<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<CommandResponse>), HttpError> {
    info!(user = %principal.id, name = %req.name, "Handling create_department request");

    let mut store = app_state.store.lock().await;
    let response: CommandResponse =
        peopleos_api::create_department(&mut *store, &principal, &req)?;
    drop(store);

    app_state.publish("add_department", &response);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/roles`.
async fn handle_create_role(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    JsonBody(req): JsonBody<CreateRoleRequest>,
) -> Result<(StatusCode, Json<CommandResponse>), HttpError> {
    info!(user = %principal.id, title = %req.title, "Handling create_role request");

    let mut store = app_state.store.lock().await;
    let response: CommandResponse = peopleos_api::create_role(&mut *store, &principal, &req)?;
    drop(store);

    app_state.publish("add_role", &response);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/attendance/clock`.
async fn handle_clock_event(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    JsonBody(req): JsonBody<ClockEventRequest>,
) -> Result<(StatusCode, Json<CommandResponse>), HttpError> {
    info!(
        user = %principal.id,
        employee = %req.employee_id,
        event_type = %req.event_type,
        "Handling clock_event request"
    );

    let mut store = app_state.store.lock().await;
    let response: CommandResponse = peopleos_api::clock_event(&mut *store, &principal, req)?;
    drop(store);

    app_state.publish("clock_event", &response);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/leave-requests`.
async fn handle_submit_leave_request(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    JsonBody(req): JsonBody<SubmitLeaveRequest>,
) -> Result<(StatusCode, Json<CommandResponse>), HttpError> {
    info!(
        user = %principal.id,
        employee = %req.employee_id,
        "Handling submit_leave_request request"
    );

    let mut store = app_state.store.lock().await;
    let response: CommandResponse =
        peopleos_api::submit_leave_request(&mut *store, &principal, &req)?;
    drop(store);

    app_state.publish("submit_leave_request", &response);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/leave-requests/{id}/status`.
async fn handle_decide_leave_request(
    AxumState(app_state): AxumState<AppState>,
    Caller(principal): Caller,
    Path(request_id): Path<String>,
    JsonBody(req): JsonBody<LeaveDecisionRequest>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(
        user = %principal.id,
        request = %request_id,
        status = %req.status,
        "Handling decide_leave_request request"
    );

    let mut store = app_state.store.lock().await;
    let response: CommandResponse = peopleos_api::decide_leave_request(
        &mut *store,
        &principal,
        &LeaveRequestId::from(request_id),
        &req,
    )?;
    drop(store);

    app_state.publish("update_leave_request_status", &response);
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/dashboard", get(handle_dashboard))
        .route(
            "/employees",
            get(handle_list_employees).post(handle_create_employee),
        )
        .route(
            "/employees/{id}",
            get(handle_get_employee)
                .put(handle_update_employee)
                .delete(handle_remove_employee),
        )
        .route("/employees/{id}/role", post(handle_assign_role))
        .route("/editor", get(handle_editor_form))
        .route(
            "/departments",
            get(handle_list_departments).post(handle_create_department),
        )
        .route("/roles", post(handle_create_role))
        .route("/operations", get(handle_operations))
        .route("/attendance", get(handle_attendance))
        .route("/attendance/clock", post(handle_clock_event))
        .route(
            "/leave-requests",
            get(handle_list_leave_requests).post(handle_submit_leave_request),
        )
        .route(
            "/leave-requests/{id}/status",
            post(handle_decide_leave_request),
        )
        .route("/filters", post(handle_set_filters))
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_filter)),
        )
        .init();

    info!("Initializing PeopleOS Server");

    let store: Store = if args.empty {
        info!("Starting with empty collections");
        Store::empty()
    } else {
        info!("Starting with the seed catalog");
        Store::seeded()
    };
    info!(state = %store.state().summary(), "Store ready");

    let app: Router = build_router(AppState::new(store));

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
