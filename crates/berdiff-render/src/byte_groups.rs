use std::fmt::Write as _;

use berdiff_decoder::{Node, NodeBody};

/// What part of a TLV a byte belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRole {
    Tag,
    Length,
    Value,
}

impl ByteRole {
    fn letter(self) -> char {
        match self {
            Self::Tag => 'T',
            Self::Length => 'L',
            Self::Value => 'V',
        }
    }
}

/// One annotated input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatedByte {
    pub offset: usize,
    pub byte: u8,
    pub role: ByteRole,
    /// Preorder index of the innermost node that owns the byte.
    pub group: usize,
}

/// Byte-by-byte view of a tree: every byte the parser claimed, with its
/// role and the node (group) it belongs to.
///
/// Groups are numbered in preorder, root = 0, so hovering or grepping for
/// a group number selects exactly one element's tag, length and content.
/// Bytes inside a container belong to whichever child decoded them.
///
/// ```text
/// 0000  30  T  0
/// 0001  06  L  0
/// 0002  02  T  1
/// 0003  01  L  1
/// 0004  2a  V  1
/// ```
pub struct ByteGroupRenderer;

impl ByteGroupRenderer {
    /// Render one line per byte. No trailing newline.
    #[must_use]
    pub fn render(root: &Node) -> String {
        let mut out = String::new();
        for (i, b) in Self::annotate(root).iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(
                out,
                "{:04x}  {:02x}  {}  {}",
                b.offset,
                b.byte,
                b.role.letter(),
                b.group
            );
        }
        out
    }

    /// The annotated bytes of `root`, in input order.
    #[must_use]
    pub fn annotate(root: &Node) -> Vec<AnnotatedByte> {
        let mut out = Vec::with_capacity(root.end.saturating_sub(root.start));
        let mut next_group = 0;
        annotate_node(root, &mut next_group, &mut out);
        out
    }
}

fn annotate_node(node: &Node, next_group: &mut usize, out: &mut Vec<AnnotatedByte>) {
    let group = *next_group;
    *next_group += 1;

    let mut offset = node.start;
    let mut push = |bytes: &[u8], role: ByteRole, out: &mut Vec<AnnotatedByte>| {
        for &byte in bytes {
            out.push(AnnotatedByte {
                offset,
                byte,
                role,
                group,
            });
            offset += 1;
        }
    };

    push(node.tag.as_bytes(), ByteRole::Tag, out);
    push(node.length.raw(), ByteRole::Length, out);

    match &node.body {
        NodeBody::Primitive { content } => push(content, ByteRole::Value, out),
        NodeBody::Constructed { children } => {
            for child in children {
                annotate_node(child, next_group, out);
            }
        }
    }
}
