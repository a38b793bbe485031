//! md2html-core - HTML node tree and rendering
//!
//! This crate provides the HTML tree produced by the `md2html` converter and
//! the renderer that turns it into an HTML fragment string. It knows nothing
//! about Markdown.
//!
//! # Architecture
//!
//! ```text
//!                      ┌───────────────┐
//! Markdown blocks ───▶ │ HtmlNode tree │ ──render──▶ HTML String
//!                      └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use md2html_core::HtmlNode;
//!
//! let tree = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::text("Some "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::leaf("a", "link").with_attribute("href", "https://example.com"),
//!     ],
//! );
//!
//! assert_eq!(
//!     tree.render().unwrap(),
//!     r#"<p>Some <b>bold</b><a href="https://example.com">link</a></p>"#
//! );
//! ```

mod node;
mod render;

pub use node::{Attributes, HtmlNode};
pub use render::render;

/// Error type for rendering a node tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Leaf node <{}> has no value", .tag.as_deref().unwrap_or("raw text"))]
    MissingValue { tag: Option<String> },

    #[error("Parent node has no tag")]
    MissingTag,

    #[error("Parent node <{tag}> has no children")]
    EmptyChildren { tag: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
