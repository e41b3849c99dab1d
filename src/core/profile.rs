use crate::core::{BalanceClient, Loyalty, Profile, SessionStore, TierInfo, TieringClient};
use crate::utils::error::{DashboardError, Result};
use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};
use std::sync::Arc;

/// Timezone used to turn the balance expiry timestamp into a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayTimezone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DisplayTimezone {
    pub fn utc() -> Self {
        DisplayTimezone::Fixed(Utc.fix())
    }

    /// `None` 表示沿用系統時區
    pub fn from_offset_hours(hours: Option<i32>) -> Result<Self> {
        match hours {
            None => Ok(DisplayTimezone::Local),
            Some(h) => h
                .checked_mul(3600)
                .and_then(FixedOffset::east_opt)
                .map(DisplayTimezone::Fixed)
                .ok_or_else(|| DashboardError::InvalidConfigValueError {
                    field: "display.utc_offset_hours".to_string(),
                    value: h.to_string(),
                    reason: "Offset out of range".to_string(),
                }),
        }
    }

    /// Formats epoch seconds as `YYYY-MM-DD`.
    pub fn format_date(&self, epoch_seconds: i64) -> Result<String> {
        let utc: DateTime<Utc> = Utc
            .timestamp_opt(epoch_seconds, 0)
            .single()
            .ok_or_else(|| DashboardError::InvalidResponseError {
                endpoint: "balance".to_string(),
                message: format!("expired_at {} is not a valid timestamp", epoch_seconds),
            })?;

        let date = match self {
            DisplayTimezone::Local => utc.with_timezone(&Local).date_naive(),
            DisplayTimezone::Fixed(offset) => utc.with_timezone(offset).date_naive(),
        };
        Ok(date.format("%Y-%m-%d").to_string())
    }
}

/// Builds the dashboard profile for whoever is logged in.
///
/// Every call reads the session store and hits the carrier API again; nothing
/// is cached between page loads.
#[derive(Clone)]
pub struct ProfileAggregator {
    sessions: Arc<dyn SessionStore>,
    balance: Arc<dyn BalanceClient>,
    tiering: Arc<dyn TieringClient>,
    timezone: DisplayTimezone,
}

impl ProfileAggregator {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        balance: Arc<dyn BalanceClient>,
        tiering: Arc<dyn TieringClient>,
    ) -> Self {
        Self {
            sessions,
            balance,
            tiering,
            timezone: DisplayTimezone::Local,
        }
    }

    pub fn with_timezone(mut self, timezone: DisplayTimezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Returns `Ok(None)` when no account is active. Any failed fetch fails
    /// the whole call; a half-filled profile is never produced.
    pub async fn build_profile(&self) -> Result<Option<Profile>> {
        let Some(session) = self.sessions.active_session().await? else {
            tracing::debug!("No active session, skipping profile");
            return Ok(None);
        };
        let api_key = self.sessions.api_key();

        tracing::debug!("📡 Fetching balance for {}", session.number);
        let balance = self
            .balance
            .get_balance(api_key, &session.tokens.id_token)
            .await?;

        let loyalty = if session.subscription_type.has_loyalty_program() {
            tracing::debug!("📡 Fetching tiering info for {}", session.number);
            let response = self
                .tiering
                .get_tiering_info(api_key, &session.tokens)
                .await?;
            Loyalty::Tiered(TierInfo::from(response))
        } else {
            Loyalty::NotApplicable
        };

        let balance_expired_at = self.timezone.format_date(balance.expired_at)?;

        tracing::info!(
            "👤 Profile built for {} ({})",
            session.number,
            session.subscription_type
        );

        Ok(Some(Profile {
            number: session.number,
            subscription_type: session.subscription_type,
            balance: balance.remaining,
            balance_expired_at,
            loyalty,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_in_utc() {
        let tz = DisplayTimezone::utc();
        assert_eq!(tz.format_date(1735689600).unwrap(), "2025-01-01");
        assert_eq!(tz.format_date(1735689599).unwrap(), "2024-12-31");
    }

    #[test]
    fn test_format_date_respects_fixed_offset() {
        // 2024-12-31T20:00:00Z 在 UTC+7 已經是隔天
        let tz = DisplayTimezone::from_offset_hours(Some(7)).unwrap();
        assert_eq!(tz.format_date(1735675200).unwrap(), "2025-01-01");

        let tz = DisplayTimezone::from_offset_hours(Some(-5)).unwrap();
        assert_eq!(tz.format_date(1735689600).unwrap(), "2024-12-31");
    }

    #[test]
    fn test_format_date_rejects_out_of_range_timestamp() {
        let err = DisplayTimezone::utc().format_date(i64::MAX).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidResponseError { .. }));
    }

    #[test]
    fn test_offset_hours_out_of_range() {
        assert!(DisplayTimezone::from_offset_hours(Some(30)).is_err());
        assert_eq!(
            DisplayTimezone::from_offset_hours(None).unwrap(),
            DisplayTimezone::Local
        );
    }
}
