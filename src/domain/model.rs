use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown when the subscription has no loyalty program.
pub const LOYALTY_NOT_APPLICABLE: &str = "Points: N/A | Tier: N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBundle {
    pub id_token: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

/// 電信商回傳的訂閱類型。未知的標籤會保留原字串。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionType {
    Prepaid,
    Postpaid,
    Other(String),
}

impl SubscriptionType {
    pub fn as_str(&self) -> &str {
        match self {
            SubscriptionType::Prepaid => "PREPAID",
            SubscriptionType::Postpaid => "POSTPAID",
            SubscriptionType::Other(tag) => tag,
        }
    }

    pub fn has_loyalty_program(&self) -> bool {
        matches!(self, SubscriptionType::Prepaid)
    }
}

impl From<String> for SubscriptionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "PREPAID" => SubscriptionType::Prepaid,
            "POSTPAID" => SubscriptionType::Postpaid,
            _ => SubscriptionType::Other(tag),
        }
    }
}

impl From<SubscriptionType> for String {
    fn from(value: SubscriptionType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The logged-in subscriber, as handed out by a `SessionStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub number: String,
    pub subscription_type: SubscriptionType,
    pub tokens: TokenBundle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// 整數或小數都照原樣保留
    pub remaining: serde_json::Number,
    /// Epoch seconds. Fractional values are floored to whole seconds.
    #[serde(deserialize_with = "epoch_seconds::deserialize")]
    pub expired_at: i64,
}

mod epoch_seconds {
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        if let Some(seconds) = number.as_i64() {
            return Ok(seconds);
        }

        match number.as_f64() {
            Some(f) if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Ok(f.floor() as i64)
            }
            _ => Err(D::Error::custom(format!(
                "expired_at {} is not a valid epoch timestamp",
                number
            ))),
        }
    }
}

/// Tiering payload as the carrier sends it; either field may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieringResponse {
    #[serde(default)]
    pub tier: Option<i64>,
    #[serde(default)]
    pub current_point: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierInfo {
    pub tier: i64,
    pub current_point: i64,
}

impl From<TieringResponse> for TierInfo {
    // 缺少的欄位一律視為 0
    fn from(response: TieringResponse) -> Self {
        Self {
            tier: response.tier.unwrap_or(0),
            current_point: response.current_point.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Loyalty {
    Tiered(TierInfo),
    NotApplicable,
}

impl Loyalty {
    pub fn summary(&self) -> String {
        match self {
            Loyalty::Tiered(info) => {
                format!("Points: {} | Tier: {}", info.current_point, info.tier)
            }
            Loyalty::NotApplicable => LOYALTY_NOT_APPLICABLE.to_string(),
        }
    }
}

/// Display-ready account profile, rebuilt on every page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub number: String,
    pub subscription_type: SubscriptionType,
    pub balance: serde_json::Number,
    /// `YYYY-MM-DD` in the display timezone.
    pub balance_expired_at: String,
    pub loyalty: Loyalty,
}

impl Profile {
    pub fn loyalty_summary(&self) -> String {
        self.loyalty.summary()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Everything the page renderer needs.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub profile: Option<Profile>,
    pub menu_items: &'static [MenuItem],
}
