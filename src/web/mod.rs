pub mod render;

use crate::core::dashboard::DashboardService;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<DashboardService>,
}

impl AppState {
    pub fn new(dashboard: DashboardService) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}

/// GET / - Render the dashboard page
async fn serve_index(State(state): State<AppState>) -> Response {
    match state.dashboard.load().await {
        Ok(view) => Html(render::render_dashboard(&view)).into_response(),
        Err(e) => {
            tracing::error!(
                "❌ Dashboard load failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            let status = if e.is_upstream() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Html(render::render_error_page())).into_response()
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
