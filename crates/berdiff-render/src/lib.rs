#![warn(clippy::pedantic)]

pub mod byte_groups;
pub mod comparison;
pub mod config;
pub mod outline;
pub mod renderer;

pub use byte_groups::{AnnotatedByte, ByteGroupRenderer, ByteRole};
pub use comparison::render_comparison;
pub use config::{RenderConfig, RenderMode};
pub use outline::OutlineRenderer;
pub use renderer::{DefaultRenderer, TreeRenderer};
