// Access token domain model
use chrono::{DateTime, Duration, Utc};

/// A token is refreshed once it is this close to expiring.
pub const REFRESH_MARGIN_MINUTES: i64 = 5;

/// Bearer token for the Power BI API
#[derive(Clone, PartialEq)]
pub struct AccessToken {
    pub value: String,
    pub expires_on: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: String, expires_on: DateTime<Utc>) -> Self {
        Self { value, expires_on }
    }

    /// True while `now` is more than the refresh margin away from expiry
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        !self.value.is_empty()
            && now < self.expires_on - Duration::minutes(REFRESH_MARGIN_MINUTES)
    }
}

// Keep the token value out of logs
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_on", &self.expires_on)
            .finish()
    }
}
