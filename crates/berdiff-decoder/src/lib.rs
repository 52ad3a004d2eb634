#![warn(clippy::pedantic)]

pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod hex_input;
pub mod node;
pub mod session;

pub use compare::{Comparison, compare, compare_hex};
pub use config::{DEFAULT_MAX_DEPTH, DecoderConfig, MAX_DEPTH_LIMIT};
pub use engine::{GATEWAY_FORCED_CHILDREN, ParseOutcome};
pub use error::DecodeError;
pub use hex_input::decode_hex;
pub use node::{Node, NodeBody};
pub use session::ParseSession;

pub use berdiff_wire::ParseMode;
