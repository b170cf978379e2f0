pub type MetricName = String;

pub type LabelName = String;

pub type LabelValue = String;

pub type SampleValue = f64;
