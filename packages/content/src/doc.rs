//! Rich-text document tree.
//!
//! Nodes are kept as the editor produced them: unknown attributes and keys
//! survive a load/save cycle untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder shown by an empty document
pub const EMPTY_PLACEHOLDER: &str = "Start writing your amazing content...";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocNode {
    #[serde(rename = "type")]
    pub node_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<DocNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<Mark>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Inline formatting (bold, link, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

impl DocNode {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            attrs: None,
            content: None,
            marks: None,
            text: None,
            extra: Map::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new("text")
        }
    }

    pub fn with_children(mut self, children: Vec<DocNode>) -> Self {
        self.content = Some(children);
        self
    }

    /// A document holding one empty paragraph
    pub fn empty() -> Self {
        Self::new("doc").with_children(vec![Self::new("paragraph")])
    }

    /// Parse the `content` mount attribute; absent or blank means empty
    pub fn parse(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::empty()),
            Some(json) => serde_json::from_str(json),
        }
    }

    pub fn children(&self) -> &[DocNode] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Concatenated text of every text node, blocks separated by newlines
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out.trim_end().to_string()
    }

    fn write_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in self.children() {
            child.write_text(out);
        }
        if self.text.is_none() && self.node_type != "doc" && !self.is_inline() {
            out.push('\n');
        }
    }

    fn is_inline(&self) -> bool {
        matches!(self.node_type.as_str(), "hardBreak" | "image")
    }

    pub fn word_count(&self) -> usize {
        self.plain_text().split_whitespace().count()
    }

    /// Whether the document has no text at all
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

impl Default for DocNode {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_keys_survive() {
        let raw = json!({
            "type": "doc",
            "content": [{
                "type": "heading",
                "attrs": { "level": 2, "textAlign": "center" },
                "content": [{
                    "type": "text",
                    "text": "Hello",
                    "marks": [{ "type": "link", "attrs": { "href": "https://example.com" } }]
                }],
                "customKey": [1, 2, 3]
            }]
        });

        let doc: DocNode = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(doc.children()[0].extra["customKey"], json!([1, 2, 3]));
        assert_eq!(serde_json::to_value(&doc).unwrap(), raw);
    }

    #[test]
    fn test_parse_absent_or_blank() {
        assert_eq!(DocNode::parse(None).unwrap(), DocNode::empty());
        assert_eq!(DocNode::parse(Some("  ")).unwrap(), DocNode::empty());
        assert!(DocNode::parse(Some("{")).is_err());
    }

    #[test]
    fn test_plain_text_and_word_count() {
        let doc = DocNode::new("doc").with_children(vec![
            DocNode::new("paragraph").with_children(vec![DocNode::text("Hello world")]),
            DocNode::new("paragraph").with_children(vec![DocNode::text("again")]),
        ]);

        assert_eq!(doc.plain_text(), "Hello world\nagain");
        assert_eq!(doc.word_count(), 3);
        assert!(!doc.is_blank());
        assert!(DocNode::empty().is_blank());
    }
}
