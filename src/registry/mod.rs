mod file;
mod metric;
mod metric_id;

use std::collections::BTreeMap;
use std::sync::Arc;

pub use file::*;
pub use metric::*;
pub use metric_id::*;

/// Source of metrics read on every scrape.
///
/// Each accessor returns the metrics of one kind keyed by identifier, so a
/// map iterates in the registry's natural order. Implementations take care
/// of their own synchronization.
pub trait Registry {
    fn gauges(&self) -> BTreeMap<&MetricId, &dyn Gauge>;

    fn counters(&self) -> BTreeMap<&MetricId, &dyn Counter>;

    fn histograms(&self) -> BTreeMap<&MetricId, &dyn Histogram>;

    fn timers(&self) -> BTreeMap<&MetricId, &dyn Timer>;

    fn meters(&self) -> BTreeMap<&MetricId, &dyn Meter>;
}

impl<R: Registry + ?Sized> Registry for &R {
    fn gauges(&self) -> BTreeMap<&MetricId, &dyn Gauge> {
        (**self).gauges()
    }

    fn counters(&self) -> BTreeMap<&MetricId, &dyn Counter> {
        (**self).counters()
    }

    fn histograms(&self) -> BTreeMap<&MetricId, &dyn Histogram> {
        (**self).histograms()
    }

    fn timers(&self) -> BTreeMap<&MetricId, &dyn Timer> {
        (**self).timers()
    }

    fn meters(&self) -> BTreeMap<&MetricId, &dyn Meter> {
        (**self).meters()
    }
}

impl<R: Registry + ?Sized> Registry for Arc<R> {
    fn gauges(&self) -> BTreeMap<&MetricId, &dyn Gauge> {
        (**self).gauges()
    }

    fn counters(&self) -> BTreeMap<&MetricId, &dyn Counter> {
        (**self).counters()
    }

    fn histograms(&self) -> BTreeMap<&MetricId, &dyn Histogram> {
        (**self).histograms()
    }

    fn timers(&self) -> BTreeMap<&MetricId, &dyn Timer> {
        (**self).timers()
    }

    fn meters(&self) -> BTreeMap<&MetricId, &dyn Meter> {
        (**self).meters()
    }
}
