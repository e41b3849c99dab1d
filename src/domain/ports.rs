use crate::domain::model::{BalanceSnapshot, Session, TieringResponse, TokenBundle};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// `Ok(None)` means nobody is logged in.
    async fn active_session(&self) -> Result<Option<Session>>;

    fn api_key(&self) -> &str;
}

#[async_trait]
pub trait BalanceClient: Send + Sync {
    async fn get_balance(&self, api_key: &str, id_token: &str) -> Result<BalanceSnapshot>;
}

#[async_trait]
pub trait TieringClient: Send + Sync {
    async fn get_tiering_info(&self, api_key: &str, tokens: &TokenBundle)
        -> Result<TieringResponse>;
}
