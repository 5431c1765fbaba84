use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Serialize, Serializer};

/// Closed set of metrics a load generator report can carry.
///
/// Variant order is the order metrics are published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricId {
    Avg,
    Std,
    Min,
    Percentile5th,
    Percentile10th,
    Percentile90th,
    Percentile95th,
    Percentile99th,
    Qps,
    Misses,
}

impl MetricId {
    pub const ALL: [MetricId; 10] = [
        MetricId::Avg,
        MetricId::Std,
        MetricId::Min,
        MetricId::Percentile5th,
        MetricId::Percentile10th,
        MetricId::Percentile90th,
        MetricId::Percentile95th,
        MetricId::Percentile99th,
        MetricId::Qps,
        MetricId::Misses,
    ];

    /// Name the metric is published under.
    pub fn name(&self) -> &'static str {
        use MetricId::*;
        match self {
            Avg => "avg",
            Std => "std",
            Min => "min",
            Percentile5th => "percentile/5th",
            Percentile10th => "percentile/10th",
            Percentile90th => "percentile/90th",
            Percentile95th => "percentile/95th",
            Percentile99th => "percentile/99th",
            Qps => "qps",
            Misses => "misses",
        }
    }

    /// Looks up a report header label (`avg`, `5th`, ...).
    ///
    /// QPS and misses never appear as columns, so they have no label.
    pub fn from_label(label: &str) -> Option<MetricId> {
        lazy_static! {
            static ref LABELS: HashMap<&'static str, MetricId> = {
                use MetricId::*;
                let mut m = HashMap::new();
                m.insert("avg", Avg);
                m.insert("std", Std);
                m.insert("min", Min);
                m.insert("5th", Percentile5th);
                m.insert("10th", Percentile10th);
                m.insert("90th", Percentile90th);
                m.insert("95th", Percentile95th);
                m.insert("99th", Percentile99th);
                m
            };
        }

        LABELS.get(label).copied()
    }

    #[inline]
    pub fn is_columnar(&self) -> bool {
        !matches!(self, MetricId::Qps | MetricId::Misses)
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for MetricId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
