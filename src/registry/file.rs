use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use super::metric::{
    Counter, Counting, Gauge, GaugeValue, Histogram, Meter, Metric, Sampling, Snapshot, Timer,
};
use super::metric_id::MetricId;
use super::Registry;
use crate::error::Result;

// {
//   "gauges":     [{"key": "pool.size", "tags": {"pool": "db"}, "value": 12}],
//   "counters":   [{"key": "jobs.failed", "count": 3}],
//   "histograms": [{"key": "batch.size", "count": 10,
//                   "snapshot": {"p50": 1, "p75": 2, "p95": 3, "p98": 4, "p99": 5, "p999": 6}}],
//   "timers":     [same as histograms, snapshot in nanoseconds],
//   "meters":     [{"key": "requests", "count": 42}]
// }
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RegistryFile {
    gauges: Vec<Entry<StaticGauge>>,
    counters: Vec<Entry<StaticCounter>>,
    histograms: Vec<Entry<StaticHistogram>>,
    timers: Vec<Entry<StaticTimer>>,
    meters: Vec<Entry<StaticMeter>>,
}

#[derive(Debug, Deserialize)]
struct Entry<M> {
    key: String,
    #[serde(default)]
    tags: Tags,
    #[serde(flatten)]
    metric: M,
}

// Tags are kept in document order, a JSON object can't guarantee that
// through the usual map types.
#[derive(Debug, Default)]
struct Tags(Vec<(String, String)>);

impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TagsVisitor;

        impl<'de> Visitor<'de> for TagsVisitor {
            type Value = Tags;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of tag names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut tags = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    tags.push((name, value));
                }
                Ok(Tags(tags))
            }
        }

        deserializer.deserialize_map(TagsVisitor)
    }
}

impl<M> Entry<M> {
    fn into_pair(self) -> (MetricId, M) {
        (MetricId::tagged(self.key, self.tags.0), self.metric)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticGauge {
    value: GaugeValue,
}

impl Metric for StaticGauge {}

impl Gauge for StaticGauge {
    fn value(&self) -> GaugeValue {
        self.value.clone()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticCounter {
    count: i64,
}

impl Metric for StaticCounter {}

impl Counting for StaticCounter {
    fn count(&self) -> i64 {
        self.count
    }
}

impl Counter for StaticCounter {}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticMeter {
    count: i64,
}

impl Metric for StaticMeter {}

impl Counting for StaticMeter {
    fn count(&self) -> i64 {
        self.count
    }
}

impl Meter for StaticMeter {}

/// Percentiles as captured by the registry at snapshot time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PercentileSnapshot {
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
    pub p98: f64,
    pub p99: f64,
    pub p999: f64,
}

impl Snapshot for PercentileSnapshot {
    fn median(&self) -> f64 {
        self.p50
    }

    fn p75(&self) -> f64 {
        self.p75
    }

    fn p95(&self) -> f64 {
        self.p95
    }

    fn p98(&self) -> f64 {
        self.p98
    }

    fn p99(&self) -> f64 {
        self.p99
    }

    fn p999(&self) -> f64 {
        self.p999
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticHistogram {
    count: i64,
    snapshot: PercentileSnapshot,
}

impl Metric for StaticHistogram {}

impl Counting for StaticHistogram {
    fn count(&self) -> i64 {
        self.count
    }
}

impl Sampling for StaticHistogram {
    fn snapshot(&self) -> Box<dyn Snapshot> {
        Box::new(self.snapshot)
    }
}

impl Histogram for StaticHistogram {}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticTimer {
    count: i64,
    snapshot: PercentileSnapshot,
}

impl Metric for StaticTimer {}

impl Counting for StaticTimer {
    fn count(&self) -> i64 {
        self.count
    }
}

impl Sampling for StaticTimer {
    fn snapshot(&self) -> Box<dyn Snapshot> {
        Box::new(self.snapshot)
    }
}

impl Timer for StaticTimer {}

/// Registry frozen from a JSON dump of metric values.
///
/// Within one kind a repeated identifier overrides the earlier entry.
#[derive(Debug, Default)]
pub struct SnapshotRegistry {
    gauges: BTreeMap<MetricId, StaticGauge>,
    counters: BTreeMap<MetricId, StaticCounter>,
    histograms: BTreeMap<MetricId, StaticHistogram>,
    timers: BTreeMap<MetricId, StaticTimer>,
    meters: BTreeMap<MetricId, StaticMeter>,
}

impl SnapshotRegistry {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: RegistryFile = serde_json::from_reader(reader)
            .map_err(|e| ("couldn't decode registry snapshot", e))?;

        Ok(Self {
            gauges: file.gauges.into_iter().map(Entry::into_pair).collect(),
            counters: file.counters.into_iter().map(Entry::into_pair).collect(),
            histograms: file.histograms.into_iter().map(Entry::into_pair).collect(),
            timers: file.timers.into_iter().map(Entry::into_pair).collect(),
            meters: file.meters.into_iter().map(Entry::into_pair).collect(),
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            (
                format!("couldn't open registry snapshot {}", path.as_ref().display()),
                e,
            )
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.gauges.len()
            + self.counters.len()
            + self.histograms.len()
            + self.timers.len()
            + self.meters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Registry for SnapshotRegistry {
    fn gauges(&self) -> BTreeMap<&MetricId, &dyn Gauge> {
        self.gauges.iter().map(|(id, m)| (id, m as &dyn Gauge)).collect()
    }

    fn counters(&self) -> BTreeMap<&MetricId, &dyn Counter> {
        self.counters.iter().map(|(id, m)| (id, m as &dyn Counter)).collect()
    }

    fn histograms(&self) -> BTreeMap<&MetricId, &dyn Histogram> {
        self.histograms
            .iter()
            .map(|(id, m)| (id, m as &dyn Histogram))
            .collect()
    }

    fn timers(&self) -> BTreeMap<&MetricId, &dyn Timer> {
        self.timers.iter().map(|(id, m)| (id, m as &dyn Timer)).collect()
    }

    fn meters(&self) -> BTreeMap<&MetricId, &dyn Meter> {
        self.meters.iter().map(|(id, m)| (id, m as &dyn Meter)).collect()
    }
}
