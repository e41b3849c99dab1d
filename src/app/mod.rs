// Wiring: config -> adapters -> aggregator -> http server.

use crate::adapters::{CarrierClient, FileSessionStore};
use crate::config::DashboardConfig;
use crate::core::dashboard::DashboardService;
use crate::core::profile::{DisplayTimezone, ProfileAggregator};
use crate::utils::error::{DashboardError, Result};
use crate::web::{self, AppState};
use std::sync::Arc;

pub fn build_dashboard(config: &DashboardConfig) -> Result<DashboardService> {
    let sessions = Arc::new(FileSessionStore::new(
        &config.session.store_path,
        config.carrier.api_key.clone(),
    ));
    let carrier = Arc::new(CarrierClient::from_config(&config.carrier)?);
    let timezone = DisplayTimezone::from_offset_hours(config.display.utc_offset_hours)?;

    let aggregator =
        ProfileAggregator::new(sessions, carrier.clone(), carrier).with_timezone(timezone);
    Ok(DashboardService::new(aggregator))
}

pub async fn serve(config: DashboardConfig) -> Result<()> {
    let dashboard = build_dashboard(&config)?;
    let app = web::router(AppState::new(dashboard));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Dashboard running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| DashboardError::ServerError {
            message: e.to_string(),
        })
}
