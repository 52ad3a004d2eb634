use berdiff_decoder::Node;

use crate::byte_groups::ByteGroupRenderer;
use crate::config::{RenderConfig, RenderMode};
use crate::outline::OutlineRenderer;

/// Turns a decoded tree into text.
///
/// ```text
/// Node ──▶ TreeRenderer::render() ──▶ String
///                 │
///           RenderConfig
///           (mode, show_offsets, max_content_bytes)
/// ```
///
/// Rendering cannot fail: every tree the decoder hands out is complete.
pub trait TreeRenderer {
    fn render(&self, root: &Node, config: &RenderConfig) -> String;
}

/// Dispatches to [`OutlineRenderer`] or [`ByteGroupRenderer`] by
/// `config.mode`.
pub struct DefaultRenderer;

impl TreeRenderer for DefaultRenderer {
    fn render(&self, root: &Node, config: &RenderConfig) -> String {
        match config.mode {
            RenderMode::Outline => OutlineRenderer::render(root, config),
            RenderMode::ByteGroups => ByteGroupRenderer::render(root),
        }
    }
}
