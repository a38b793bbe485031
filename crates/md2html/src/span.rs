//! Typed inline text spans and their HTML mapping.

use md2html_core::HtmlNode;

use crate::{Md2HtmlError, Result};

/// Formatting kind of a [`TextSpan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a target URL
    pub fn has_target(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// A contiguous run of inline text with one formatting kind.
///
/// For images `content` is the alt text. `target` is set exactly for
/// [`SpanKind::Link`] and [`SpanKind::Image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl TextSpan {
    /// Create a span of a kind without a target
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Bold)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Italic)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Code)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Map this span to its HTML leaf.
    ///
    /// A span whose target does not agree with its kind has no mapping and
    /// fails with [`Md2HtmlError::UnsupportedSpanKind`].
    pub fn to_html_node(&self) -> Result<HtmlNode> {
        let url = match (self.kind.has_target(), self.target.as_deref()) {
            (true, Some(url)) => url,
            (false, None) => "",
            _ => return Err(Md2HtmlError::UnsupportedSpanKind(self.kind)),
        };

        let content = self.content.as_str();
        let node = match self.kind {
            SpanKind::Plain => HtmlNode::text(content),
            SpanKind::Bold => HtmlNode::leaf("b", content),
            SpanKind::Italic => HtmlNode::leaf("i", content),
            SpanKind::Code => HtmlNode::leaf("code", content),
            SpanKind::Link => HtmlNode::leaf("a", content).with_attribute("href", url),
            SpanKind::Image => HtmlNode::leaf("img", "")
                .with_attribute("src", url)
                .with_attribute("alt", content),
        };
        Ok(node)
    }
}

/// Map a sequence of spans to HTML leaves, in order
pub fn spans_to_html_nodes(spans: &[TextSpan]) -> Result<Vec<HtmlNode>> {
    spans.iter().map(TextSpan::to_html_node).collect()
}
