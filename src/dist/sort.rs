use crate::dist::DistributionSummary;
use std::{fmt, str::FromStr};

/// Field used to order distribution summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Alias,
    Origin,
    Status,
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alias" => Ok(Self::Alias),
            "origin" => Ok(Self::Origin),
            "status" => Ok(Self::Status),
            _ => Err(format!("Invalid order-by value: {s}")),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Alias => "alias",
            Self::Origin => "origin",
            Self::Status => "status",
        };
        f.write_str(name)
    }
}

impl OrderBy {
    /// Parse a user supplied key, falling back to `alias` with a warning
    pub fn resolve(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Unrecognised value for order-by '{}'. Sorting by alias instead.",
                value
            );
            Self::default()
        })
    }

    fn key<'a>(&self, summary: &'a DistributionSummary) -> &'a str {
        match self {
            Self::Alias => &summary.alias,
            Self::Origin => &summary.origin,
            Self::Status => &summary.status,
        }
    }
}

/// Stable ascending sort on the chosen field
pub fn sort_summaries(summaries: &mut [DistributionSummary], order_by: OrderBy) {
    summaries.sort_by(|a, b| order_by.key(a).cmp(order_by.key(b)));
}
