pub mod dashboard;
pub mod menu;
pub mod profile;

pub use crate::domain::model::{
    BalanceSnapshot, DashboardView, Loyalty, MenuItem, Profile, Session, SubscriptionType,
    TierInfo, TieringResponse, TokenBundle,
};
pub use crate::domain::ports::{BalanceClient, SessionStore, TieringClient};
pub use crate::utils::error::Result;
