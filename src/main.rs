use std::io::{self, BufReader};

use structopt::StructOpt;
use tracing::info;

use dwexport::cliopt::{CliOpt, Encoding};
use dwexport::collector::Collector;
use dwexport::output::{HumanReadableEncoder, JsonEncoder, LineWriter, Output};
use dwexport::registry::SnapshotRegistry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&opt.log_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let registry = match &opt.registry {
        Some(path) => SnapshotRegistry::from_path(path)?,
        None => SnapshotRegistry::from_reader(BufReader::new(io::stdin()))?,
    };
    info!(metrics = registry.len(), "registry snapshot loaded");

    let mut output = Output::new(
        Box::new(LineWriter::new(io::stdout())),
        match opt.encode {
            Encoding::Json => Box::new(JsonEncoder::new()),
            Encoding::HumanReadable => Box::new(HumanReadableEncoder::new()),
        },
    );

    let collector = Collector::new(registry);
    output.write(&collector.collect())?;

    Ok(())
}
