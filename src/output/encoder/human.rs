use super::encoder::Encoder;
use crate::error::Result;
use crate::metrics::{Metrics, Timestamp};
use crate::utils::time::format_time;

pub struct HumanReadableEncoder {}

impl HumanReadableEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Encoder for HumanReadableEncoder {
    fn encode(&self, metrics: &Metrics, timestamp: Timestamp) -> Result<Vec<u8>> {
        let mut lines = vec![format_time(timestamp), "-".to_string()];

        let width = metrics
            .iter()
            .map(|(id, _)| id.name().len())
            .max()
            .unwrap_or(0);

        for (id, value) in metrics.iter() {
            lines.push(format!("{:<width$}  {}", id.name(), value, width = width));
        }

        Ok(String::into_bytes(lines.join("\n")))
    }
}
