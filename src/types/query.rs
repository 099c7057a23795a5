//! Query parameter types shared by the pool-listing tools.
//!
//! The enumerated sets here are the schema-level constraint: a value outside
//! the set fails argument deserialization before any tool body runs, so it
//! can never reach the remote API.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending (the API default).
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire form used in the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Field the API orders pool listings by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// 24h volume in USD (the API default).
    #[default]
    VolumeUsd,
    /// Current price in USD.
    PriceUsd,
    /// Number of transactions.
    Transactions,
    /// Absolute 24h price change in USD.
    #[serde(rename = "last_price_change_usd_24h")]
    LastPriceChangeUsd24h,
    /// Pool creation time.
    CreatedAt,
}

impl OrderBy {
    /// Wire form used in the `order_by` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderBy::VolumeUsd => "volume_usd",
            OrderBy::PriceUsd => "price_usd",
            OrderBy::Transactions => "transactions",
            OrderBy::LastPriceChangeUsd24h => "last_price_change_usd_24h",
            OrderBy::CreatedAt => "created_at",
        }
    }
}

/// Default `limit` for paginated endpoints.
pub(crate) fn default_limit() -> u32 {
    10
}

/// Default `limit` for the OHLCV endpoint (one data point).
pub(crate) fn default_ohlcv_limit() -> u32 {
    1
}

/// Default OHLCV interval granularity.
pub(crate) fn default_interval() -> String {
    "24h".to_string()
}
