use std::collections::BTreeMap;

use serde::Serialize;

use super::metric::MetricId;

pub type SampleValue = f64;

// Unix timestamp in milliseconds.
pub type Timestamp = i64;

/// Metrics extracted from a single benchmark report.
///
/// Only identifiers with a successfully parsed value are ever present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metrics {
    raw: BTreeMap<MetricId, SampleValue>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: MetricId) -> Option<SampleValue> {
        self.raw.get(&id).copied()
    }

    #[inline]
    pub fn contains(&self, id: MetricId) -> bool {
        self.raw.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Iterates in publishing order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricId, SampleValue)> + '_ {
        self.raw.iter().map(|(id, value)| (*id, *value))
    }

    pub(crate) fn insert(&mut self, id: MetricId, value: SampleValue) {
        self.raw.insert(id, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_in_publishing_order() {
        let mut metrics = Metrics::new();
        metrics.insert(MetricId::Misses, 3.0);
        metrics.insert(MetricId::Percentile99th, 2.0);
        metrics.insert(MetricId::Avg, 1.0);

        let ids = metrics.iter().map(|(id, _)| id).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![MetricId::Avg, MetricId::Percentile99th, MetricId::Misses]
        );
    }

    #[test]
    fn test_insert_overwrites() {
        let mut metrics = Metrics::new();
        metrics.insert(MetricId::Min, 1.0);
        metrics.insert(MetricId::Min, 2.0);

        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics.get(MetricId::Min), Some(2.0));
        assert!(!metrics.contains(MetricId::Avg));
    }
}
