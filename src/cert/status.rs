use chrono::{DateTime, Months, Utc};
use std::fmt;

/// Horizon inside which a still-valid certificate is reported as expiring.
pub const EXPIRY_HORIZON: Months = Months::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Ok,
    ExpiringSoon,
    Expired,
}

impl ExpiryStatus {
    /// Classify an expiration time against `now`.
    ///
    /// The horizon is one calendar month after `now` (in UTC), clamped to the
    /// last day of a shorter month. Both comparisons are strict, so an
    /// expiration exactly on the horizon is `ExpiringSoon` and one exactly at
    /// `now` is `Expired`.
    pub fn classify(expiration: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        match now.checked_add_months(EXPIRY_HORIZON) {
            Some(horizon) if expiration > horizon => Self::Ok,
            _ if expiration > now => Self::ExpiringSoon,
            _ => Self::Expired,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::ExpiringSoon => "Expiring soon",
            Self::Expired => "Expired",
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
