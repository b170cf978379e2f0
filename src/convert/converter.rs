use tracing::debug;

use crate::model::{sanitize_metric_name, LabelSet, MetricType, Sample, SampleGroup};
use crate::registry::{Counter, Gauge, Histogram, Meter, MetricId, Snapshot, Timer};

const SOURCE: &str = "Dropwizard";

const QUANTILE_LABEL: &str = "quantile";

const NANOS_PER_SECOND: f64 = 1e9;

/// Kinds of registry metrics in the order they are exported.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MetricKind {
    Gauge,
    Counter,
    Histogram,
    Timer,
    Meter,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Gauge,
        MetricKind::Counter,
        MetricKind::Histogram,
        MetricKind::Timer,
        MetricKind::Meter,
    ];
}

/// A borrowed registry metric tagged with its kind.
#[derive(Copy, Clone)]
pub enum MetricRef<'a> {
    Gauge(&'a dyn Gauge),
    Counter(&'a dyn Counter),
    Histogram(&'a dyn Histogram),
    Timer(&'a dyn Timer),
    Meter(&'a dyn Meter),
}

/// Converts one metric into the family it is exposed as. `None` means the
/// metric has nothing exportable right now.
pub fn convert(id: &MetricId, metric: MetricRef) -> Option<SampleGroup> {
    match metric {
        MetricRef::Gauge(g) => from_gauge(id, g),
        MetricRef::Counter(c) => Some(from_counter(id, c)),
        MetricRef::Histogram(h) => Some(from_histogram(id, h)),
        MetricRef::Timer(t) => Some(from_timer(id, t)),
        MetricRef::Meter(m) => Some(from_meter(id, m)),
    }
}

/// Counters may go down, so they are exposed as gauges.
pub fn from_counter(id: &MetricId, counter: &dyn Counter) -> SampleGroup {
    let name = sanitize_metric_name(id.key());
    let sample = Sample::new(name.clone(), labels_of(id), counter.count() as f64);

    SampleGroup::new(
        name,
        MetricType::Gauge,
        help_message(id, counter.class_name()),
        vec![sample],
    )
}

/// Numeric and boolean gauges become a single gauge sample. Gauges holding
/// anything else are skipped.
pub fn from_gauge(id: &MetricId, gauge: &dyn Gauge) -> Option<SampleGroup> {
    let name = sanitize_metric_name(id.key());
    let obj = gauge.value();

    let value = match obj.as_f64() {
        Some(v) => v,
        None => {
            debug!("Invalid type for Gauge {}: {}", name, obj.type_name());
            return None;
        }
    };

    let sample = Sample::new(name.clone(), labels_of(id), value);
    Some(SampleGroup::new(
        name,
        MetricType::Gauge,
        help_message(id, gauge.class_name()),
        vec![sample],
    ))
}

pub fn from_histogram(id: &MetricId, histogram: &dyn Histogram) -> SampleGroup {
    from_snapshot_and_count(
        id,
        histogram.snapshot().as_ref(),
        histogram.count(),
        1.0,
        help_message(id, histogram.class_name()),
    )
}

/// Timer snapshots are in nanoseconds and get exported in seconds.
pub fn from_timer(id: &MetricId, timer: &dyn Timer) -> SampleGroup {
    from_snapshot_and_count(
        id,
        timer.snapshot().as_ref(),
        timer.count(),
        1.0 / NANOS_PER_SECOND,
        help_message(id, timer.class_name()),
    )
}

/// Meters only grow, so unlike counters they map to a true counter.
pub fn from_meter(id: &MetricId, meter: &dyn Meter) -> SampleGroup {
    let name = format!("{}_total", sanitize_metric_name(id.key()));
    let sample = Sample::new(name.clone(), labels_of(id), meter.count() as f64);

    SampleGroup::new(
        name,
        MetricType::Counter,
        help_message(id, meter.class_name()),
        vec![sample],
    )
}

// Six quantile samples sharing the tag labels plus an unlabeled `_count`.
fn from_snapshot_and_count(
    id: &MetricId,
    snapshot: &dyn Snapshot,
    count: i64,
    factor: f64,
    help: String,
) -> SampleGroup {
    let name = sanitize_metric_name(id.key());
    let labels = labels_of(id);

    let quantiles = [
        ("0.5", snapshot.median()),
        ("0.75", snapshot.p75()),
        ("0.95", snapshot.p95()),
        ("0.98", snapshot.p98()),
        ("0.99", snapshot.p99()),
        ("0.999", snapshot.p999()),
    ];

    let mut samples: Vec<Sample> = quantiles
        .iter()
        .map(|&(quantile, value)| {
            Sample::new(
                name.clone(),
                labels.with_added(QUANTILE_LABEL, quantile),
                value * factor,
            )
        })
        .collect();

    samples.push(Sample::new(
        format!("{}_count", name),
        LabelSet::new(),
        count as f64,
    ));

    SampleGroup::new(name, MetricType::Summary, help, samples)
}

fn labels_of(id: &MetricId) -> LabelSet {
    LabelSet::from_tags(id.tags())
}

fn help_message(id: &MetricId, class_name: &str) -> String {
    format!(
        "Generated from {} metric import (metric={}, type={})",
        SOURCE,
        id.key(),
        class_name
    )
}
