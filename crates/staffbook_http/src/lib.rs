//! HTTP surface for staffbook.
//!
//! # Responsibility
//! - Route the five employee endpoints for the selected deployment variant.
//! - Validate payloads before they reach the core services.
//! - Map core errors to HTTP statuses and JSON bodies.
//!
//! # Routes
//! - Directory variant: `POST|GET /employees`, `GET|PUT|DELETE /employees/{id}`.
//! - Skills variant: `POST|GET /`, `GET|PUT|DELETE /{id}`.

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use log::info;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Instant;
use tokio::net::TcpListener;

pub mod error;
pub mod handlers;
mod store;

pub use error::ApiError;
pub use store::Store;

/// Deployment variant served by one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Employees with a department, under `/employees`.
    Directory,
    /// Employees with owned skills, at `/`.
    Skills,
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::Skills => write!(f, "skills"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "directory" => Ok(Self::Directory),
            "skills" => Ok(Self::Skills),
            other => Err(format!(
                "unknown variant `{other}`; expected directory|skills"
            )),
        }
    }
}

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// Builds the router for `variant` with request logging attached.
pub fn router(variant: Variant, state: AppState) -> Router {
    let routes = match variant {
        Variant::Directory => directory_routes(),
        Variant::Skills => skills_routes(),
    };

    routes
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

fn directory_routes() -> Router<AppState> {
    use handlers::directory;

    Router::new()
        .route(
            "/employees",
            get(directory::list).post(directory::create),
        )
        .route(
            "/employees/:id",
            get(directory::get)
                .put(directory::update)
                .delete(directory::delete),
        )
}

fn skills_routes() -> Router<AppState> {
    use handlers::skills;

    Router::new()
        .route("/", get(skills::list).post(skills::create))
        .route(
            "/:id",
            get(skills::get).put(skills::update).delete(skills::delete),
        )
}

/// Serves `app` on an already-bound listener until the process stops.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("event=http_listen module=http status=ok addr={addr}");
    }
    axum::serve(listener, app).await
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    info!(
        "event=http_request module=http method={} path={} status={} duration_ms={}",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}
