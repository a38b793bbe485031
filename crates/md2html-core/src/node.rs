//! HTML node tree
//!
//! A document is a tree of [`HtmlNode`]s built bottom-up. Leaves carry text
//! (optionally wrapped in a single inline element), parents carry children.
//! Once a node is attached to its parent it is never mutated again.

use indexmap::IndexMap;

/// Element attributes, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Raw text (`tag` is `None`) or a single element wrapping text
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },

    /// Element with child nodes (block-level or wrapping elements)
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Create a raw text leaf, rendered verbatim
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a leaf element, e.g. `<b>value</b>`
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a parent element owning `children`
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute, replacing the value if the key already exists.
    /// Replacing keeps the key's original position.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.insert(key.into(), value.into());
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Leaf value; parents never have one
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// Child nodes; leaves have none
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, HtmlNode::Parent { .. })
    }

    /// Render this node and its descendants to an HTML fragment
    pub fn render(&self) -> crate::Result<String> {
        crate::render::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_text() {
        let node = HtmlNode::text("Hello World");
        assert!(node.is_leaf());
        assert_eq!(node.tag(), None);
        assert_eq!(node.value(), Some("Hello World"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_create_parent() {
        let node = HtmlNode::parent("ul", vec![HtmlNode::leaf("li", "one")]);
        assert!(node.is_parent());
        assert_eq!(node.tag(), Some("ul"));
        assert_eq!(node.value(), None);
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let node = HtmlNode::leaf("img", "")
            .with_attribute("src", "a.png")
            .with_attribute("alt", "A")
            .with_attribute("title", "T");

        let keys: Vec<&str> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["src", "alt", "title"]);
        assert_eq!(node.attr("alt"), Some("A"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_replacing_attribute_keeps_position() {
        let node = HtmlNode::leaf("a", "x")
            .with_attribute("href", "one")
            .with_attribute("target", "_blank")
            .with_attribute("href", "two");

        let pairs: Vec<(&str, &str)> = node
            .attributes()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("href", "two"), ("target", "_blank")]);
    }

    #[test]
    fn test_equality() {
        let a = HtmlNode::leaf("a", "x").with_attribute("href", "https://www.boot.dev");
        let b = HtmlNode::leaf("a", "x").with_attribute("href", "https://www.boot.dev");
        let c = HtmlNode::leaf("a", "x").with_attribute("href", "https://www.boot.org");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
