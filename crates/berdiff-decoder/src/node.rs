use std::ops::Range;

use berdiff_wire::{Length, Tag};

/// One decoded TLV element.
///
/// A node remembers where it sits in the input: `start` is the offset of
/// its first tag octet and `end` is the cursor position once the node and
/// everything beneath it were decoded. For well-formed input `end` equals
/// the end of the declared value region; when the gateway exception
/// forces children past that boundary, `end` follows the children.
///
/// ```text
///   start                                      end
///   │ tag │ length │ value ───────────────────── │
///                  ├ child 0 ┤├ child 1 ┤├ ... ┤
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub start: usize,
    pub end: usize,
    pub tag: Tag,
    pub length: Length,
    pub body: NodeBody,
}

/// What sits in a node's value region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    /// Raw content octets.
    Primitive { content: Vec<u8> },
    /// Nested elements, in wire order.
    Constructed { children: Vec<Node> },
}

impl Node {
    /// Input range this node was decoded from.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Child nodes, empty for primitive nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match &self.body {
            NodeBody::Constructed { children } => children,
            NodeBody::Primitive { .. } => &[],
        }
    }

    /// Content octets, `None` for constructed nodes.
    #[must_use]
    pub fn content(&self) -> Option<&[u8]> {
        match &self.body {
            NodeBody::Primitive { content } => Some(content),
            NodeBody::Constructed { .. } => None,
        }
    }

    /// True when the body holds children. The gateway exception can give
    /// a primitive-tagged node children, so this is not the same as
    /// `tag.is_constructed()`.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self.body, NodeBody::Constructed { .. })
    }

    /// Offset of the first value octet.
    #[must_use]
    pub fn value_start(&self) -> usize {
        self.start + self.tag.as_bytes().len() + self.length.raw().len()
    }

    /// Re-assemble the bytes this node was decoded from: tag octets,
    /// length octets, then content or the children's bytes in order.
    #[must_use]
    pub fn encoded_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.end.saturating_sub(self.start));
        self.write_encoded(&mut out);
        out
    }

    fn write_encoded(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.tag.as_bytes());
        out.extend_from_slice(self.length.raw());
        match &self.body {
            NodeBody::Primitive { content } => out.extend_from_slice(content),
            NodeBody::Constructed { children } => {
                for child in children {
                    child.write_encoded(out);
                }
            }
        }
    }

    /// This node and every descendant, in preorder.
    #[must_use]
    pub fn preorder(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_preorder(&mut out);
        out
    }

    fn collect_preorder<'n>(&'n self, out: &mut Vec<&'n Node>) {
        out.push(self);
        for child in self.children() {
            child.collect_preorder(out);
        }
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    /// Deepest nesting level below this node (0 for a leaf).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
