use serde::Serialize;

use super::encoder::Encoder;
use crate::error::Result;
use crate::metrics::{Metrics, Timestamp};

// {
//   "timestamp": 1609459200000,
//   "metrics": {"avg": 20.8, "percentile/99th": 59.5, "qps": 4993.1}
// }
#[derive(Serialize)]
struct Report<'a> {
    timestamp: Timestamp,
    metrics: &'a Metrics,
}

pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, metrics: &Metrics, timestamp: Timestamp) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&Report { timestamp, metrics })
            .map_err(|e| ("JSON serialization failed", e))?)
    }
}
