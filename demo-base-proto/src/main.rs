use std::io;

use anyhow::Result;
use demo_base_proto::demo;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, Layer as _};

fn main() -> Result<()> {
    // stdout carries only the report
    let layer = Layer::new()
        .with_writer(io::stderr)
        .with_filter(LevelFilter::INFO);
    tracing_subscriber::registry().with(layer).init();

    let stdout = io::stdout();
    demo::run(&mut stdout.lock())?;
    Ok(())
}
