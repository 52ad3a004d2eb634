use std::fmt::Write as _;

use berdiff_decoder::Node;
use berdiff_wire::LengthValue;

use crate::config::RenderConfig;

/// One line per node, indented two spaces per nesting level.
///
/// Each line shows the raw tag octets, the raw length octets, and for
/// primitive nodes the content octets, followed by a label, the decoded
/// length and (optionally) the input span.
///
/// ```text
/// 30 22  SEQUENCE len=34 children=3 @0..36
///   02 01 01  INTEGER len=1 @2..5
///   04 08 6669726577616c6c  OCTET STRING len=8 @5..15
///   a1 13  [1] len=19 children=4 @15..36
/// ```
///
/// Content longer than `max_content_bytes` is cut and suffixed with the
/// number of hidden octets, e.g. `0866...(+113)`.
pub struct OutlineRenderer;

impl OutlineRenderer {
    /// Render `root` and its descendants. No trailing newline.
    #[must_use]
    pub fn render(root: &Node, config: &RenderConfig) -> String {
        let mut lines = Vec::with_capacity(root.node_count());
        Self::render_node(root, 0, config, &mut lines);
        lines.join("\n")
    }

    fn render_node(node: &Node, depth: usize, config: &RenderConfig, lines: &mut Vec<String>) {
        let mut line = "  ".repeat(depth);
        let _ = write!(
            line,
            "{} {}",
            hex::encode(node.tag.as_bytes()),
            hex::encode(node.length.raw())
        );

        if let Some(content) = node.content()
            && !content.is_empty()
        {
            line.push(' ');
            line.push_str(&content_hex(content, config.max_content_bytes));
        }

        let _ = write!(line, "  {} {}", node.tag.label(), length_label(node.length.value()));

        if node.is_container() {
            let _ = write!(line, " children={}", node.children().len());
        }
        if config.show_offsets {
            let _ = write!(line, " @{}..{}", node.start, node.end);
        }
        lines.push(line);

        for child in node.children() {
            Self::render_node(child, depth + 1, config, lines);
        }
    }
}

fn length_label(value: LengthValue) -> String {
    match value {
        LengthValue::Definite(n) => format!("len={n}"),
        LengthValue::Indefinite(n) => format!("len=indefinite({n})"),
        LengthValue::Unterminated => "len=indefinite(?)".to_string(),
    }
}

fn content_hex(content: &[u8], max: usize) -> String {
    if content.len() <= max {
        return hex::encode(content);
    }
    format!("{}...(+{})", hex::encode(&content[..max]), content.len() - max)
}
