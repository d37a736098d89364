use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Consumption for one rolling rate-limit window (5 hours or 7 days).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuotaPeriod {
    /// Percent of the window's cap consumed so far, 0-100.
    #[serde(default)]
    pub utilization: f64,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub resets_at: Option<DateTime<Utc>>,
}

/// The parsed response from the usage endpoint, or its cached copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuotaSnapshot {
    #[serde(default)]
    pub five_hour: Option<QuotaPeriod>,
    #[serde(default)]
    pub seven_day: Option<QuotaPeriod>,
}

/// On-disk cache record: a snapshot plus the epoch-millis instant it was
/// fetched. The snapshot is only trusted while younger than the cache TTL;
/// past that it is a fallback for when a fresh fetch is unavailable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaCacheEntry {
    pub timestamp: i64,
    pub data: QuotaSnapshot,
}

impl QuotaCacheEntry {
    /// Milliseconds since this entry was written, negative if the clock ran
    /// backwards.
    pub fn age_ms(&self, now: DateTime<Utc>) -> i64 {
        now.timestamp_millis() - self.timestamp
    }
}

/// An unparseable timestamp reads as absent rather than failing the whole
/// snapshot; the display then treats the window as already reset.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}
