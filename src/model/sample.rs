use std::fmt;

use super::labels::LabelSet;
use super::types::{MetricName, SampleValue};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MetricType {
    Gauge,
    Counter,
    Summary,
}

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Gauge => "gauge",
            MetricType::Counter => "counter",
            MetricType::Summary => "summary",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    name: MetricName,
    labels: LabelSet,
    value: SampleValue,
}

impl Sample {
    pub fn new(name: MetricName, labels: LabelSet, value: SampleValue) -> Self {
        Self {
            name,
            labels,
            value,
        }
    }

    #[inline]
    pub fn name(&self) -> &MetricName {
        &self.name
    }

    #[inline]
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    #[inline]
    pub fn value(&self) -> SampleValue {
        self.value
    }
}

/// One exposed metric family: a name, a type, a help text and its samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGroup {
    name: MetricName,
    kind: MetricType,
    help: String,
    samples: Vec<Sample>,
}

impl SampleGroup {
    pub fn new(name: MetricName, kind: MetricType, help: String, samples: Vec<Sample>) -> Self {
        Self {
            name,
            kind,
            help,
            samples,
        }
    }

    #[inline]
    pub fn name(&self) -> &MetricName {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> MetricType {
        self.kind
    }

    #[inline]
    pub fn help(&self) -> &str {
        &self.help
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}
