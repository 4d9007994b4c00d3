//! Tree Snapshots
//!
//! A detached, comparable copy of a concrete subtree. Two snapshots are equal
//! when their tags, attributes, text values, and child order match; node
//! identity is not part of a snapshot.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Observable shape of a concrete subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Snapshot {
    /// A text node.
    Text { value: String },

    /// An element and its subtree.
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        attributes: IndexMap<String, String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Snapshot>,
    },
}

impl Snapshot {
    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The element tag, or `None` for text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Snapshot::Element { tag, .. } => Some(tag),
            Snapshot::Text { .. } => None,
        }
    }

    /// The children. Empty for text.
    pub fn children(&self) -> &[Snapshot] {
        match self {
            Snapshot::Element { children, .. } => children,
            Snapshot::Text { .. } => &[],
        }
    }

    /// Render as markup. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Snapshot::Text { value } => escape_into(value, out),
            Snapshot::Element {
                tag,
                attributes,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(value, out);
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn escape_into(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot_json() {
        let json = r#"{
            "kind": "element",
            "tag": "ul",
            "attributes": {"class": "fruits"},
            "children": [
                {"kind": "element", "tag": "li", "children": [{"kind": "text", "value": "apples"}]}
            ]
        }"#;

        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.tag(), Some("ul"));
        assert_eq!(snapshot.children().len(), 1);
        assert_eq!(
            snapshot.to_html(),
            r#"<ul class="fruits"><li>apples</li></ul>"#
        );
    }

    #[test]
    fn escapes_markup() {
        let snapshot = Snapshot::Element {
            tag: "p".to_string(),
            attributes: IndexMap::from([("title".to_string(), "\"q\"".to_string())]),
            children: vec![Snapshot::Text {
                value: "a < b".to_string(),
            }],
        };
        assert_eq!(snapshot.to_html(), r#"<p title="&quot;q&quot;">a &lt; b</p>"#);
    }
}
