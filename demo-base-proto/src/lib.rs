mod abi;
mod config;

pub mod channel;
pub mod demo;
pub mod pb;

pub use channel::{run_talker, talker_message, Node, Reader, StudentStream, Writer};
pub use config::{AppConfig, LogConfig, TalkerConfig};
