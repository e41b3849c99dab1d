pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

pub use config::{CliArgs, DashboardConfig};
pub use crate::core::{dashboard::DashboardService, profile::ProfileAggregator};
pub use utils::error::{DashboardError, Result};
