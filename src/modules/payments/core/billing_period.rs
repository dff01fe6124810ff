use crate::shared::core::primitives::TimestampMs;
use chrono::{DateTime, Months};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown billing period: {0}")]
pub struct UnknownBillingPeriod(pub String);

impl BillingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Yearly => "yearly",
        }
    }

    /// One calendar period after `timestamp`. Month ends are clamped, so Jan 31 rolls to the last
    /// day of February. Returns None when the result leaves chrono's representable range.
    pub fn next_billing_after(&self, timestamp: TimestampMs) -> Option<TimestampMs> {
        let from = DateTime::from_timestamp_millis(timestamp)?;
        let months = match self {
            BillingPeriod::Monthly => Months::new(1),
            BillingPeriod::Yearly => Months::new(12),
        };
        from.checked_add_months(months).map(|next| next.timestamp_millis())
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingPeriod {
    type Err = UnknownBillingPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(BillingPeriod::Monthly),
            "yearly" => Ok(BillingPeriod::Yearly),
            other => Err(UnknownBillingPeriod(other.to_string())),
        }
    }
}
