/// JSON views of decoded trees, for `--format json`.
///
/// The decoder types stay serde-free; these borrow-free view structs are
/// built on demand and carry every octet as lowercase hex.
///
/// ```json
/// {
///   "mode": "gateway",
///   "consumed": 8,
///   "root": {
///     "start": 0, "end": 8,
///     "tag": "30", "label": "SEQUENCE", "constructed": true,
///     "length": { "raw": "02", "form": "short", "value": 2 },
///     "children": [ ... ]
///   }
/// }
/// ```
use berdiff_decoder::{Comparison, DecodeError, Node, NodeBody, ParseOutcome};
use berdiff_wire::{LengthForm, LengthValue};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NodeView {
    pub start: usize,
    pub end: usize,
    pub tag: String,
    pub label: String,
    pub constructed: bool,
    pub length: LengthView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeView>>,
}

#[derive(Debug, Serialize)]
pub struct LengthView {
    pub raw: String,
    pub form: &'static str,
    /// Content octet count; `None` only for an unterminated indefinite
    /// length, which never reaches a finished tree.
    pub value: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ErrorView {
    pub kind: &'static str,
    pub offset: usize,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OutcomeView {
    Parsed {
        mode: String,
        consumed: usize,
        root: NodeView,
    },
    Failed {
        mode: String,
        error: ErrorView,
    },
}

#[derive(Debug, Serialize)]
pub struct ComparisonView {
    pub standard: OutcomeView,
    pub gateway: OutcomeView,
    pub diverges: bool,
}

impl From<&Node> for NodeView {
    fn from(node: &Node) -> Self {
        let (content, children) = match &node.body {
            NodeBody::Primitive { content } => (Some(hex::encode(content)), None),
            NodeBody::Constructed { children } => {
                (None, Some(children.iter().map(NodeView::from).collect()))
            }
        };
        Self {
            start: node.start,
            end: node.end,
            tag: hex::encode(node.tag.as_bytes()),
            label: node.tag.label(),
            constructed: node.tag.is_constructed(),
            length: LengthView {
                raw: hex::encode(node.length.raw()),
                form: match node.length.form() {
                    LengthForm::Short => "short",
                    LengthForm::Long => "long",
                    LengthForm::Indefinite => "indefinite",
                },
                value: match node.length.value() {
                    LengthValue::Definite(n) | LengthValue::Indefinite(n) => Some(n),
                    LengthValue::Unterminated => None,
                },
            },
            content,
            children,
        }
    }
}

impl From<&DecodeError> for ErrorView {
    fn from(e: &DecodeError) -> Self {
        Self {
            kind: e.kind(),
            offset: e.offset(),
            message: e.to_string(),
        }
    }
}

impl OutcomeView {
    pub fn new(mode: &str, result: &Result<ParseOutcome, DecodeError>) -> Self {
        match result {
            Ok(outcome) => Self::Parsed {
                mode: mode.to_string(),
                consumed: outcome.consumed,
                root: NodeView::from(&outcome.root),
            },
            Err(e) => Self::Failed {
                mode: mode.to_string(),
                error: ErrorView::from(e),
            },
        }
    }
}

impl From<&Comparison> for ComparisonView {
    fn from(comparison: &Comparison) -> Self {
        Self {
            standard: OutcomeView::new("standard", &comparison.standard),
            gateway: OutcomeView::new("gateway", &comparison.gateway),
            diverges: comparison.diverges(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berdiff_decoder::{DecoderConfig, compare};

    #[test]
    fn comparison_as_json() {
        let input = [0x30, 0x02, 0x05, 0x00, 0x05, 0x00, 0x05, 0x00];
        let view = ComparisonView::from(&compare(&input, DecoderConfig::default()));
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["diverges"], true);
        assert_eq!(value["standard"]["consumed"], 4);
        assert_eq!(value["gateway"]["consumed"], 8);
        assert_eq!(value["gateway"]["root"]["children"].as_array().unwrap().len(), 3);
        assert_eq!(value["standard"]["root"]["length"]["form"], "short");
        assert_eq!(value["standard"]["root"]["children"][0]["content"], "");
        assert!(value["standard"]["root"].get("content").is_none());
    }

    #[test]
    fn failure_as_json() {
        let input = [0x30, 0x04, 0x05, 0x00, 0x05, 0x00];
        let view = ComparisonView::from(&compare(&input, DecoderConfig::default()));
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["gateway"]["error"]["kind"], "BufferUnderrun");
        assert_eq!(value["gateway"]["error"]["offset"], 6);
        assert_eq!(value["gateway"]["mode"], "gateway");
    }
}
