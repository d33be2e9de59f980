use std::time::Duration;

use anyhow::Result;
use demo_base_proto::{run_talker, AppConfig, Node};
use futures::StreamExt;
use tracing::info;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, Layer as _};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let layer = Layer::new().with_filter(config.log.level_filter()?);
    tracing_subscriber::registry().with(layer).init();

    let talker = &config.talker;
    let node = Node::new(&talker.node);
    let (writer, reader) = node.create_channel(&talker.channel, talker.capacity);

    info!(
        "node {} publishing {} messages on {} every {}ms",
        node.name(),
        talker.count,
        writer.channel(),
        talker.interval_ms
    );
    let handle = tokio::spawn(run_talker(
        writer,
        Duration::from_millis(talker.interval_ms),
        talker.count,
    ));

    let mut students = reader.into_stream();
    while let Some(stu) = students.next().await {
        println!("{}", stu);
    }

    let sent = handle.await??;
    info!("talker finished after {} messages", sent);
    Ok(())
}
