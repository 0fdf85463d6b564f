use std::net::SocketAddr;

use anyhow::Context;
use api::{
    error::ApiError,
    service::{EmployeeInput, EmployeeService},
};
use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use entity::employees;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub service: EmployeeService,
}

pub async fn serve(
    addr: SocketAddr,
    state: AppState,
    cors_allowed_origins: &[String],
) -> anyhow::Result<()> {
    let router = build_router(state, cors_allowed_origins);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "employee service listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route(
            "/api/v1/employees",
            post(create_employee)
                .get(list_employees)
                .put(update_employee),
        )
        .route("/api/v1/employees/bulk", post(create_employees))
        .route(
            "/api/v1/employees/{id}",
            get(get_employee).delete(delete_employee),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_allowed_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(allow_origin)
}

async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> HttpResult<Json<employees::Model>> {
    let created = state.service.create_employee(input).await?;
    Ok(Json(created))
}

async fn create_employees(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<EmployeeInput>>,
) -> HttpResult<Json<Vec<employees::Model>>> {
    let created = state.service.create_employees(inputs).await?;
    Ok(Json(created))
}

async fn list_employees(
    State(state): State<AppState>,
) -> HttpResult<Json<Vec<employees::Model>>> {
    Ok(Json(state.service.get_employees().await?))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<employees::Model>> {
    Ok(Json(state.service.get_employee_by_id(id).await?))
}

async fn update_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> HttpResult<Json<employees::Model>> {
    Ok(Json(state.service.update_employee(input).await?))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HttpResult<String> {
    state.service.delete_employee(id).await?;
    Ok(format!("Employee with ID {id} deleted successfully."))
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_ok = state.db.ping().await.is_ok();
    Json(HealthResponse {
        ok: db_ok,
        db_ok,
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    db_ok: bool,
    version: &'static str,
}

type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug)]
struct HttpError {
    status: StatusCode,
    message: String,
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status = match err {
            ApiError::NotFound(_) | ApiError::CannotDelete(_) => StatusCode::NOT_FOUND,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
