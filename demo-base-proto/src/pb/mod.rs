#[path = "apollo.cyber.demo_base_proto.rs"]
mod demo_base_proto;

pub use demo_base_proto::*;
