use chrono::prelude::*;

use crate::error::Result;
use crate::metrics::Timestamp;

pub fn parse_iso_time(s: &str) -> Result<Timestamp> {
    s.parse::<DateTime<Utc>>()
        .map(|t| t.timestamp_millis())
        .map_err(|e| ("timestamp parsing failed", e).into())
}

pub fn now() -> Timestamp {
    Utc::now().timestamp_millis()
}

pub fn format_time(ts: Timestamp) -> String {
    match Utc.timestamp_millis_opt(ts).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        None => ts.to_string(),
    }
}
