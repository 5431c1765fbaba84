pub mod encoder;
pub mod writer;

use crate::error::Result;
use crate::metrics::{Metrics, Timestamp};
use encoder::Encoder;
use writer::Writer;

pub struct Output {
    writer: Box<dyn Writer>,
    encoder: Box<dyn Encoder>,
}

impl Output {
    pub fn new(writer: Box<dyn Writer>, encoder: Box<dyn Encoder>) -> Self {
        Self { writer, encoder }
    }

    pub fn write(&mut self, metrics: &Metrics, timestamp: Timestamp) -> Result<()> {
        let buf = self.encoder.encode(metrics, timestamp)?;

        self.writer
            .write(&buf)
            .map_err(|e| ("writer failed", e))?;

        Ok(())
    }
}
