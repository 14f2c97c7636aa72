use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    middleware::from_fn_with_state,
    response::Response,
    routing::get,
};
use serde::Serialize;
use tower::{Service, ServiceBuilder};

use crate::config::AppConfig;
use crate::cors::Cors;
use crate::middleware::{SharedCors, cors_middleware};
use crate::options::ValidationError;

pub const HEALTH_PATH: &str = "/api/health";
pub const SERVICE_NAME: &str = "backend";

#[derive(Clone, Debug)]
pub struct AppState {
    pub service: &'static str,
    pub version: Arc<str>,
}

impl AppState {
    pub fn new(version: impl Into<Arc<str>>) -> Self {
        Self {
            service: SERVICE_NAME,
            version: version.into(),
        }
    }
}

/// Field order is the wire order.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: state.service,
        version: state.version.to_string(),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .with_state(state)
}

/// Wraps the finished router from the outside, so the CORS middleware sees
/// every request before routing and its preflight answer is the whole
/// response. Unrouted paths under the prefix are answered the same way.
pub fn with_cors(
    router: Router,
    cors: SharedCors,
) -> impl Service<Request, Response = Response, Error = Infallible, Future: Send>
+ Clone
+ Send
+ 'static {
    ServiceBuilder::new()
        .layer(from_fn_with_state(cors, cors_middleware))
        .service(router)
}

pub fn app(
    config: &AppConfig,
) -> Result<
    impl Service<Request, Response = Response, Error = Infallible, Future: Send>
    + Clone
    + Send
    + 'static
    + use<>,
    ValidationError,
> {
    let cors = Arc::new(Cors::new(config.cors_options())?);
    Ok(with_cors(router(AppState::new(config.version.as_str())), cors))
}
