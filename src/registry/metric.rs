use std::any;

use serde::{Deserialize, Deserializer};

/// Common ground of every registry metric.
pub trait Metric {
    /// Implementation type name, reported in the help text of exported families.
    fn class_name(&self) -> &'static str {
        any::type_name::<Self>()
    }
}

pub trait Counting: Metric {
    fn count(&self) -> i64;
}

/// Distribution snapshot taken by the registry.
///
/// Percentiles are computed by the registry, never here.
pub trait Snapshot {
    fn median(&self) -> f64;
    fn p75(&self) -> f64;
    fn p95(&self) -> f64;
    fn p98(&self) -> f64;
    fn p99(&self) -> f64;
    fn p999(&self) -> f64;
}

pub trait Sampling: Metric {
    fn snapshot(&self) -> Box<dyn Snapshot>;
}

pub trait Counter: Counting {}

pub trait Meter: Counting {}

pub trait Histogram: Counting + Sampling {}

/// A timer's snapshot is expressed in nanoseconds.
pub trait Timer: Counting + Sampling {}

pub trait Gauge: Metric {
    fn value(&self) -> GaugeValue;
}

/// Untyped value read from a gauge.
#[derive(Debug, Clone, PartialEq)]
pub enum GaugeValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    /// Any other value, identified by its type name.
    Unsupported(&'static str),
}

impl GaugeValue {
    /// Numeric view of the value: numbers as is, booleans as 1 or 0.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            GaugeValue::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            GaugeValue::Int(n) => Some(n as f64),
            GaugeValue::UInt(n) => Some(n as f64),
            GaugeValue::Float(n) => Some(n),
            GaugeValue::Text(_) | GaugeValue::Unsupported(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            GaugeValue::Bool(_) => "bool",
            GaugeValue::Int(_) => "i64",
            GaugeValue::UInt(_) => "u64",
            GaugeValue::Float(_) => "f64",
            GaugeValue::Text(_) => "String",
            GaugeValue::Unsupported(name) => *name,
        }
    }
}

impl From<serde_json::Value> for GaugeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Bool(b) => GaugeValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    GaugeValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    GaugeValue::UInt(u)
                } else {
                    GaugeValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => GaugeValue::Text(s),
            Value::Null => GaugeValue::Unsupported("null"),
            Value::Array(_) => GaugeValue::Unsupported("array"),
            Value::Object(_) => GaugeValue::Unsupported("object"),
        }
    }
}

// Any JSON value is accepted, the kinds a gauge can't export end up as
// `Unsupported` instead of failing the whole document.
impl<'de> Deserialize<'de> for GaugeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(GaugeValue::from)
    }
}

macro_rules! gauge_value_from {
    ($($t:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$t> for GaugeValue {
                fn from(v: $t) -> Self {
                    GaugeValue::$variant(v as $target)
                }
            }
        )*
    };
}

gauge_value_from! {
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    u64 => UInt as u64,
    f32 => Float as f64,
    f64 => Float as f64,
}

impl From<bool> for GaugeValue {
    fn from(b: bool) -> Self {
        GaugeValue::Bool(b)
    }
}

impl From<String> for GaugeValue {
    fn from(s: String) -> Self {
        GaugeValue::Text(s)
    }
}

impl From<&str> for GaugeValue {
    fn from(s: &str) -> Self {
        GaugeValue::Text(s.to_owned())
    }
}
