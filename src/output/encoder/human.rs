use super::encoder::Encoder;
use crate::error::Result;
use crate::model::{Sample, SampleGroup};

pub struct HumanReadableEncoder {}

impl HumanReadableEncoder {
    pub fn new() -> Self {
        Self {}
    }

    fn encode_sample(&self, sample: &Sample) -> String {
        let labels: Vec<String> = sample
            .labels()
            .iter()
            .map(|(name, value)| format!("{}: '{}'", name, value))
            .collect();

        if labels.is_empty() {
            format!("\t{}\t\t\t{}", sample.name(), sample.value())
        } else {
            format!(
                "\t{}\t\t{}\t\t\t{}",
                sample.name(),
                labels.join("\t\t"),
                sample.value()
            )
        }
    }
}

impl Default for HumanReadableEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for HumanReadableEncoder {
    fn encode(&self, groups: &[SampleGroup]) -> Result<Vec<u8>> {
        let mut lines = Vec::new();

        for group in groups {
            lines.push(format!("{} ({})", group.name(), group.kind()));
            for sample in group.samples() {
                lines.push(self.encode_sample(sample));
            }
        }

        Ok(String::into_bytes(lines.join("\n")))
    }
}
