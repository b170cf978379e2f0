use std::io::Write;

use super::encoder::Encoder;
use super::writer::Writer;
use crate::error::Result;
use crate::model::SampleGroup;

pub struct Output<W> {
    writer: Box<dyn Writer<W>>,
    encoder: Box<dyn Encoder>,
}

impl<W: Write> Output<W> {
    pub fn new(writer: Box<dyn Writer<W>>, encoder: Box<dyn Encoder>) -> Self {
        Self { writer, encoder }
    }

    pub fn write(&mut self, groups: &[SampleGroup]) -> Result<()> {
        let buf = self.encoder.encode(groups)?;

        self.writer
            .write(&buf)
            .map_err(|e| ("writer failed with error", e))?;

        Ok(())
    }
}
