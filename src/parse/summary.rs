use lazy_static::lazy_static;
use regex::Regex;

use super::number::decimal;
use crate::metrics::{MetricId, SampleValue};

lazy_static! {
    // Total QPS = 4993.1 (149793 / 30.0s)
    static ref TOTAL_QPS: Regex = Regex::new(r"^\s*Total QPS\s*=\s*(\S+)").unwrap();
    // Misses = 1234 (0.8%)
    static ref MISSES: Regex = Regex::new(r"^\s*Misses\s*=\s*(\S+)").unwrap();
}

/// Extracts a metric from one of the trailing summary lines of a report.
///
/// A summary line whose value isn't a number is treated like any other
/// unrelated line.
pub(super) fn summary_value(line: &str) -> Option<(MetricId, SampleValue)> {
    let (id, caps) = if let Some(caps) = TOTAL_QPS.captures(line) {
        (MetricId::Qps, caps)
    } else if let Some(caps) = MISSES.captures(line) {
        (MetricId::Misses, caps)
    } else {
        return None;
    };

    decimal(&caps[1]).map(|value| (id, value))
}
