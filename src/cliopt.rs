use std::path::PathBuf;

use structopt::StructOpt;

use crate::error::{Error, Result};

#[derive(Debug, StructOpt)]
#[structopt(name = "dwexport", about = "dwexport command line arguments")]
pub struct CliOpt {
    /// JSON registry snapshot to export. Read from stdin when omitted.
    #[structopt(parse(from_os_str))]
    pub registry: Option<PathBuf>,

    #[structopt(long = "encode", short = "e", default_value = "json", parse(try_from_str = parse_encoding))]
    pub encode: Encoding,

    /// Used when RUST_LOG is not set.
    #[structopt(long = "log-level", short = "l", default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    HumanReadable,
}

fn parse_encoding(s: &str) -> Result<Encoding> {
    match s {
        "json" => Ok(Encoding::Json),
        "h" | "human" => Ok(Encoding::HumanReadable),
        _ => Err(Error::from(format!("unknown encoding '{}'", s))),
    }
}
