use berdiff_wire::{Cursor, ParseMode, decode_length, decode_tag};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::node::{Node, NodeBody};

/// How many children the gateway exception decodes from the first node.
pub const GATEWAY_FORCED_CHILDREN: usize = 3;

/// A completed parse: the root node and where the cursor stopped.
///
/// `consumed` is informational. Bytes after the root are not an error,
/// and in gateway mode `consumed` can exceed the root's declared length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub mode: ParseMode,
    pub root: Node,
    pub consumed: usize,
}

/// Recursive-descent TLV decoder for one run over one buffer.
///
/// Each node goes through the same states:
///
/// ```text
///   TagRead ─► LengthRead ─► ValueRead ─┬─► Done                  (primitive)
///                                       ├─► Recurse ─► Done       (constructed)
///                                       └─► Forced(3) ─► Done     (gateway, once)
/// ```
///
/// `ValueRead` always reads the whole declared value region first, so a
/// length that overruns the buffer fails before any child is decoded.
/// `Recurse` then seeks back to the start of that region and decodes it
/// again as nested elements until the cursor reaches the region's end. A
/// child that ends past that point fails with `ChildOverrunsParent`; only
/// the gateway's forced children may leave the region.
///
/// The gateway latch is borrowed from the owning
/// [`ParseSession`](crate::ParseSession), so it survives across nodes and
/// across runs until the session is reset.
pub(crate) struct Engine<'a, 's> {
    cursor: Cursor<'a>,
    mode: ParseMode,
    config: DecoderConfig,
    gateway_exception_fired: &'s mut bool,
}

impl<'a, 's> Engine<'a, 's> {
    pub(crate) fn new(
        input: &'a [u8],
        mode: ParseMode,
        config: DecoderConfig,
        gateway_exception_fired: &'s mut bool,
    ) -> Self {
        Self {
            cursor: Cursor::new(input),
            mode,
            config,
            gateway_exception_fired,
        }
    }

    /// Decode the root element and report the final cursor position.
    pub(crate) fn run(mut self) -> Result<ParseOutcome, DecodeError> {
        let root = self.decode_node(0)?;
        Ok(ParseOutcome {
            mode: self.mode,
            root,
            consumed: self.cursor.position(),
        })
    }

    fn decode_node(&mut self, depth: usize) -> Result<Node, DecodeError> {
        let start = self.cursor.position();
        if depth > self.config.max_depth {
            return Err(DecodeError::MaxDepthExceeded {
                offset: start,
                max_depth: self.config.max_depth,
            });
        }

        let tag = decode_tag(&mut self.cursor, self.mode)?;
        let length_offset = self.cursor.position();
        let length = decode_length(&mut self.cursor, tag.is_constructed(), self.mode)?;
        let content_len = length
            .content_len()
            .ok_or(DecodeError::IndefiniteTerminatorNotFound {
                offset: length_offset,
            })?;

        let value_start = self.cursor.position();
        let content = self.cursor.read(content_len)?;
        let content_end = self.cursor.position();

        let body = if self.mode.is_gateway() && !*self.gateway_exception_fired {
            *self.gateway_exception_fired = true;
            tracing::debug!(
                target: "berdiff::decoder",
                offset = start,
                declared_len = content_len,
                "gateway exception: forcing {GATEWAY_FORCED_CHILDREN} children"
            );

            self.cursor.seek(value_start)?;
            let mut children = Vec::with_capacity(GATEWAY_FORCED_CHILDREN);
            for _ in 0..GATEWAY_FORCED_CHILDREN {
                children.push(self.decode_node(depth + 1)?);
            }
            NodeBody::Constructed { children }
        } else if tag.is_constructed() {
            self.cursor.seek(value_start)?;
            let mut children = Vec::new();
            while self.cursor.position() < content_end {
                let child = self.decode_node(depth + 1)?;
                if child.end > content_end {
                    return Err(DecodeError::ChildOverrunsParent {
                        offset: child.start,
                        parent_end: content_end,
                    });
                }
                children.push(child);
            }
            NodeBody::Constructed { children }
        } else {
            NodeBody::Primitive {
                content: content.to_vec(),
            }
        };

        let end = self.cursor.position();
        tracing::trace!(
            target: "berdiff::decoder",
            mode = %self.mode,
            start,
            end,
            depth,
            tag = %tag.label(),
            "decoded node"
        );

        Ok(Node {
            start,
            end,
            tag,
            length,
            body,
        })
    }
}
