use std::{pin::Pin, time::Duration};

use anyhow::{anyhow, ensure, Result};
use futures::{Stream, StreamExt};
use prost::Message;
use tokio::{sync::mpsc, time};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{info, warn};

use crate::pb::Student;

pub type StudentStream = Pin<Box<dyn Stream<Item = Student> + Send>>;

/// A named participant that owns channels.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
}

/// Sending end of a channel. Messages travel as encoded protobuf frames.
#[derive(Debug, Clone)]
pub struct Writer {
    node: String,
    channel: String,
    tx: mpsc::Sender<Vec<u8>>,
}

#[derive(Debug)]
pub struct Reader {
    channel: String,
    rx: mpsc::Receiver<Vec<u8>>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn create_channel(&self, channel: &str, capacity: usize) -> (Writer, Reader) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        info!("node {} created channel {}", self.name, channel);
        let writer = Writer {
            node: self.name.clone(),
            channel: channel.to_string(),
            tx,
        };
        let reader = Reader {
            channel: channel.to_string(),
            rx,
        };
        (writer, reader)
    }
}

impl Writer {
    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub async fn write(&self, msg: &Student) -> Result<()> {
        self.tx.send(msg.encode_to_vec()).await.map_err(|_| {
            anyhow!(
                "channel {} of node {} has no reader",
                self.channel,
                self.node
            )
        })
    }
}

impl Reader {
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Decoded messages in the order they were written. Frames that fail to
    /// decode are skipped.
    pub fn into_stream(self) -> StudentStream {
        let channel = self.channel;
        let frames = ReceiverStream::new(self.rx);
        Box::pin(frames.filter_map(move |frame| {
            let channel = channel.clone();
            async move {
                match Student::decode(frame.as_slice()) {
                    Ok(stu) => Some(stu),
                    Err(e) => {
                        warn!("Failed to decode message on {}: {:?}", channel, e);
                        None
                    }
                }
            }
        }))
    }
}

/// The message published as number `seq`.
pub fn talker_message(seq: u64) -> Student {
    let mut stu = Student::new("huluwa", seq, 1.4);
    stu.add_book("yuwen");
    stu.add_book("shuxue");
    stu.add_book("yingyu");
    stu
}

/// Publish `count` messages, one per `period`, starting at seq 1. Returns how
/// many were delivered; stops early if the reader went away.
pub async fn run_talker(writer: Writer, period: Duration, count: u64) -> Result<u64> {
    ensure!(!period.is_zero(), "publish interval must be positive");

    let mut ticker = time::interval(period);
    for seq in 1..=count {
        ticker.tick().await;
        info!("message #{}", seq);

        if let Err(e) = writer.write(&talker_message(seq)).await {
            warn!("Failed to send message: {:?}", e);
            return Ok(seq - 1);
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(1);

    #[test]
    fn talker_message_should_carry_seq() {
        let stu = talker_message(3);

        assert_eq!(stu.name, "huluwa");
        assert_eq!(stu.age, 3);
        assert_eq!(stu.height, 1.4);
        assert_eq!(stu.books, vec!["yuwen", "shuxue", "yingyu"]);
    }

    #[tokio::test]
    async fn writer_and_reader_should_keep_order() -> Result<()> {
        let node = Node::new("ergou");
        let (writer, reader) = node.create_channel("chatter", 8);
        assert_eq!(writer.channel(), "chatter");
        assert_eq!(reader.channel(), "chatter");

        let sent: Vec<Student> = (1..=3).map(talker_message).collect();
        for stu in &sent {
            writer.write(stu).await?;
        }
        drop(writer);

        let received: Vec<Student> = reader.into_stream().collect().await;
        assert_eq!(received, sent);
        Ok(())
    }

    #[tokio::test]
    async fn run_talker_should_publish_count_messages() -> Result<()> {
        let (writer, reader) = Node::new("ergou").create_channel("chatter", 1);
        let talker = tokio::spawn(run_talker(writer, PERIOD, 3));

        let received: Vec<Student> = reader.into_stream().collect().await;
        assert_eq!(talker.await??, 3);

        let ages: Vec<u64> = received.iter().map(|stu| stu.age).collect();
        assert_eq!(ages, vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn run_talker_should_stop_without_reader() -> Result<()> {
        let (writer, reader) = Node::new("ergou").create_channel("chatter", 1);
        drop(reader);

        assert_eq!(run_talker(writer, PERIOD, 5).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn run_talker_should_reject_zero_interval() {
        let (writer, _reader) = Node::new("ergou").create_channel("chatter", 1);
        assert!(run_talker(writer, Duration::ZERO, 1).await.is_err());
    }

    #[tokio::test]
    async fn reader_should_skip_undecodable_frames() -> Result<()> {
        let (tx, rx) = mpsc::channel(4);
        let reader = Reader {
            channel: "chatter".to_string(),
            rx,
        };

        tx.send(vec![0xff]).await?;
        tx.send(talker_message(7).encode_to_vec()).await?;
        drop(tx);

        let received: Vec<Student> = reader.into_stream().collect().await;
        assert_eq!(received, vec![talker_message(7)]);
        Ok(())
    }
}
