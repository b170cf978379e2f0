use serde::{Serialize, Serializer};

use super::encoder::Encoder;
use crate::error::Result;
use crate::model::{Sample, SampleGroup};

// [
//   {
//     "name": "http_latency",
//     "type": "summary",
//     "help": "Generated from Dropwizard metric import (metric=http.latency, type=...)",
//     "samples": [
//       {
//         "name": "http_latency",
//         "labelNames": ["route", "quantile"],
//         "labelValues": ["/", "0.5"],
//         "value": 0.5
//       },
//       ...
//     ]
//   }
// ]
#[derive(Serialize)]
struct Family<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    help: &'a str,
    samples: Vec<Item<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Item<'a> {
    name: &'a str,
    label_names: &'a [String],
    label_values: &'a [String],
    #[serde(serialize_with = "serialize_value")]
    value: f64,
}

// JSON numbers can't hold NaN or infinities, those go out in their
// exposition spelling.
fn serialize_value<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_infinite() {
        serializer.serialize_str(if *value > 0.0 { "+Inf" } else { "-Inf" })
    } else {
        serializer.serialize_f64(*value)
    }
}

impl<'a> Family<'a> {
    fn new(group: &'a SampleGroup) -> Self {
        Self {
            name: group.name(),
            kind: group.kind().as_str(),
            help: group.help(),
            samples: group.samples().iter().map(Item::new).collect(),
        }
    }
}

impl<'a> Item<'a> {
    fn new(sample: &'a Sample) -> Self {
        Self {
            name: sample.name(),
            label_names: sample.labels().names(),
            label_values: sample.labels().values(),
            value: sample.value(),
        }
    }
}

pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, groups: &[SampleGroup]) -> Result<Vec<u8>> {
        let families: Vec<Family> = groups.iter().map(Family::new).collect();
        Ok(serde_json::to_vec(&families).map_err(|e| ("JSON serialization failed", e))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LabelSet, MetricType};
    use serde_json::json;

    #[test]
    fn test_encode() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let labels = LabelSet::from_tags(vec![("method", "GET")]);
        let group = SampleGroup::new(
            "requests_total".to_owned(),
            MetricType::Counter,
            "help".to_owned(),
            vec![Sample::new("requests_total".to_owned(), labels, 42.0)],
        );

        let buf = JsonEncoder::new().encode(&[group]).map_err(|e| e.to_string())?;
        let actual: serde_json::Value = serde_json::from_slice(&buf)?;

        assert_eq!(
            actual,
            json!([{
                "name": "requests_total",
                "type": "counter",
                "help": "help",
                "samples": [{
                    "name": "requests_total",
                    "labelNames": ["method"],
                    "labelValues": ["GET"],
                    "value": 42.0
                }]
            }])
        );
        Ok(())
    }

    #[test]
    fn test_encode_non_finite() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let sample = |value| Sample::new("x".to_owned(), LabelSet::new(), value);
        let group = SampleGroup::new(
            "x".to_owned(),
            MetricType::Gauge,
            String::new(),
            vec![
                sample(f64::NAN),
                sample(f64::INFINITY),
                sample(f64::NEG_INFINITY),
                sample(-0.5),
            ],
        );

        let buf = JsonEncoder::new().encode(&[group]).map_err(|e| e.to_string())?;
        let actual: serde_json::Value = serde_json::from_slice(&buf)?;

        let values: Vec<&serde_json::Value> = actual[0]["samples"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| &s["value"])
            .collect();
        assert_eq!(
            values,
            vec![&json!("NaN"), &json!("+Inf"), &json!("-Inf"), &json!(-0.5)]
        );
        Ok(())
    }

    #[test]
    fn test_encode_nothing() {
        let buf = JsonEncoder::new().encode(&[]).unwrap();
        assert_eq!(buf, b"[]");
    }
}
