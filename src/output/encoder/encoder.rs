use crate::error::Result;
use crate::metrics::{Metrics, Timestamp};

pub trait Encoder {
    fn encode(&self, metrics: &Metrics, timestamp: Timestamp) -> Result<Vec<u8>>;
}
