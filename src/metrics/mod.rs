mod metric;
mod result;

pub use metric::MetricId;
pub use result::{Metrics, SampleValue, Timestamp};
