use crate::error::Result;
use crate::model::SampleGroup;

pub trait Encoder {
    fn encode(&self, groups: &[SampleGroup]) -> Result<Vec<u8>>;
}
