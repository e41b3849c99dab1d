use crate::config::toml_config::CarrierConfig;
use crate::core::{BalanceClient, BalanceSnapshot, TieringClient, TieringResponse, TokenBundle};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const SUCCESS_STATUS: &str = "SUCCESS";

/// 電信商 API 的共用回應外殼
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct BalanceData {
    #[serde(default)]
    balance: Option<BalanceSnapshot>,
}

/// HTTP client for the carrier's balance and tiering endpoints.
#[derive(Debug, Clone)]
pub struct CarrierClient {
    client: Client,
    base_url: String,
    balance_path: String,
    tiering_path: String,
}

impl CarrierClient {
    pub fn from_config(config: &CarrierConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            balance_path: config.balance_path.clone(),
            tiering_path: config.tiering_path.clone(),
        })
    }

    async fn post_enveloped<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        path: &str,
        api_key: &str,
        bearer: &str,
        body: serde_json::Value,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making {} request to: {}", endpoint, url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", api_key)
            .bearer_auth(bearer)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("{} response status: {}", endpoint, status);
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!("⚠️ {} request failed with HTTP {}", endpoint, status);
            return Err(DashboardError::UpstreamError {
                endpoint: endpoint.to_string(),
                status: status.as_u16().to_string(),
                message: truncate(&text, 200),
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&text).map_err(|e| DashboardError::InvalidResponseError {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;

        if let Some(api_status) = envelope.status.as_deref() {
            if api_status != SUCCESS_STATUS {
                return Err(DashboardError::UpstreamError {
                    endpoint: endpoint.to_string(),
                    status: api_status.to_string(),
                    message: envelope.message.unwrap_or_default(),
                });
            }
        }

        envelope
            .data
            .ok_or_else(|| DashboardError::InvalidResponseError {
                endpoint: endpoint.to_string(),
                message: "response has no data".to_string(),
            })
    }
}

#[async_trait]
impl BalanceClient for CarrierClient {
    async fn get_balance(&self, api_key: &str, id_token: &str) -> Result<BalanceSnapshot> {
        let body = serde_json::json!({ "is_enterprise": false, "lang": "en" });
        let data: BalanceData = self
            .post_enveloped("balance", &self.balance_path, api_key, id_token, body)
            .await?;

        data.balance
            .ok_or_else(|| DashboardError::InvalidResponseError {
                endpoint: "balance".to_string(),
                message: "response has no balance".to_string(),
            })
    }
}

#[async_trait]
impl TieringClient for CarrierClient {
    async fn get_tiering_info(
        &self,
        api_key: &str,
        tokens: &TokenBundle,
    ) -> Result<TieringResponse> {
        let body = serde_json::json!({ "lang": "en" });
        self.post_enveloped("tiering", &self.tiering_path, api_key, &tokens.id_token, body)
            .await
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_bodies() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc…");
    }

    #[test]
    fn test_envelope_without_data() {
        let envelope: Envelope<BalanceData> =
            serde_json::from_str(r#"{"status": "SUCCESS"}"#).unwrap();
        assert!(envelope.data.is_none());
    }
}
