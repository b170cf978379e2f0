use tracing::trace;

use crate::convert::{convert, MetricKind, MetricRef};
use crate::model::SampleGroup;
use crate::registry::Registry;

/// Turns the current state of a registry into exposable metric families.
///
/// A collector keeps no state between calls. Every `collect()` reads the
/// registry afresh and builds new families.
pub struct Collector<R> {
    registry: R,
}

impl<R: Registry> Collector<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Families of all registered metrics: gauges first, then counters,
    /// histograms, timers and meters, each kind in registry order.
    pub fn collect(&self) -> Vec<SampleGroup> {
        let mut groups = Vec::new();
        for kind in MetricKind::ALL.iter() {
            self.collect_kind(*kind, &mut groups);
        }

        trace!(families = groups.len(), "collected registry metrics");
        groups
    }

    /// Families known ahead of a scrape. Nothing is known before the
    /// registry is read, so this is always empty.
    pub fn describe(&self) -> Vec<SampleGroup> {
        Vec::new()
    }

    fn collect_kind(&self, kind: MetricKind, groups: &mut Vec<SampleGroup>) {
        let r = &self.registry;
        match kind {
            MetricKind::Gauge => r
                .gauges()
                .into_iter()
                .for_each(|(id, m)| groups.extend(convert(id, MetricRef::Gauge(m)))),
            MetricKind::Counter => r
                .counters()
                .into_iter()
                .for_each(|(id, m)| groups.extend(convert(id, MetricRef::Counter(m)))),
            MetricKind::Histogram => r
                .histograms()
                .into_iter()
                .for_each(|(id, m)| groups.extend(convert(id, MetricRef::Histogram(m)))),
            MetricKind::Timer => r
                .timers()
                .into_iter()
                .for_each(|(id, m)| groups.extend(convert(id, MetricRef::Timer(m)))),
            MetricKind::Meter => r
                .meters()
                .into_iter()
                .for_each(|(id, m)| groups.extend(convert(id, MetricRef::Meter(m)))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::MetricType;
    use crate::registry::SnapshotRegistry;

    // Kinds are listed in reverse export order on purpose.
    const REGISTRY: &str = r#"{
        "meters": [{"key": "requests", "count": 42}],
        "timers": [
            {"key": "http.latency", "tags": {"route": "/"}, "count": 3,
             "snapshot": {"p50": 5e8, "p75": 1e9, "p95": 2e9, "p98": 2e9, "p99": 3e9, "p999": 4e9}}
        ],
        "histograms": [
            {"key": "batch.size", "count": 10,
             "snapshot": {"p50": 1, "p75": 2, "p95": 3, "p98": 4, "p99": 5, "p999": 6}}
        ],
        "counters": [
            {"key": "jobs.b", "count": 2},
            {"key": "jobs.a", "count": 1}
        ],
        "gauges": [
            {"key": "version", "value": "1.0.0"},
            {"key": "2xx.count", "value": 7},
            {"key": "healthy", "value": true}
        ]
    }"#;

    fn registry() -> SnapshotRegistry {
        SnapshotRegistry::from_reader(REGISTRY.as_bytes()).unwrap()
    }

    #[test]
    fn test_collect_order() {
        let collector = Collector::new(registry());
        let groups = collector.collect();

        let names: Vec<&str> = groups.iter().map(|g| g.name().as_str()).collect();
        assert_eq!(
            names,
            vec![
                "_2xx_count",
                "healthy",
                "jobs_a",
                "jobs_b",
                "batch_size",
                "http_latency",
                "requests_total",
            ]
        );

        let kinds: Vec<MetricType> = groups.iter().map(|g| g.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                MetricType::Gauge,
                MetricType::Gauge,
                MetricType::Gauge,
                MetricType::Gauge,
                MetricType::Summary,
                MetricType::Summary,
                MetricType::Counter,
            ]
        );
    }

    #[test]
    fn test_collect_values() {
        let groups = Collector::new(registry()).collect();

        let healthy = &groups[1];
        assert_eq!(healthy.samples()[0].value(), 1.0);

        let latency = &groups[5];
        assert_eq!(latency.samples().len(), 7);
        assert_eq!(latency.samples()[0].value(), 0.5);
        assert_eq!(
            latency.samples()[0].labels().values(),
            &["/".to_owned(), "0.5".to_owned()]
        );
        assert_eq!(latency.samples()[6].name(), "http_latency_count");
        assert_eq!(latency.samples()[6].value(), 3.0);

        assert_eq!(groups[6].samples()[0].value(), 42.0);
    }

    #[test]
    fn test_collect_is_repeatable() {
        let collector = Collector::new(Arc::new(registry()));
        assert_eq!(collector.collect(), collector.collect());
        assert_eq!(collector.registry().len(), 8);
    }

    #[test]
    fn test_describe_and_empty_registry() {
        let registry = SnapshotRegistry::default();
        let collector = Collector::new(&registry);

        assert!(collector.describe().is_empty());
        assert!(collector.collect().is_empty());
        assert!(Collector::new(self::registry()).describe().is_empty());
    }
}
