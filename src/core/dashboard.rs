use crate::core::menu::menu_items;
use crate::core::profile::ProfileAggregator;
use crate::core::DashboardView;
use crate::utils::error::Result;

/// Produces the page view model: one profile aggregation per load plus the
/// static action menu.
#[derive(Clone)]
pub struct DashboardService {
    aggregator: ProfileAggregator,
}

impl DashboardService {
    pub fn new(aggregator: ProfileAggregator) -> Self {
        Self { aggregator }
    }

    pub async fn load(&self) -> Result<DashboardView> {
        let profile = self.aggregator.build_profile().await?;
        if profile.is_none() {
            tracing::info!("🔒 No active account, rendering logged-out dashboard");
        }

        Ok(DashboardView {
            profile,
            menu_items: menu_items(),
        })
    }
}
