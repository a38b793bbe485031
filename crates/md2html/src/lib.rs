//! # md2html
//!
//! Convert a restricted Markdown dialect to an HTML node tree.
//!
//! ## Design
//!
//! A document is cut into blank-line separated blocks. Each block is
//! classified (paragraph, heading, ordered list, unordered list, fenced code,
//! quote) and compiled on its own into an [`HtmlNode`] subtree; the subtrees
//! become the children of one root `div`. Inline text is split into typed
//! spans (image, link, bold, italic, code) by a fixed sequence of passes.
//!
//! Conversion is pure: no I/O, no shared state, and the same input always
//! gives the same tree. Any error aborts the whole document.
//!
//! ## Example
//!
//! ```rust
//! let md = "# Title\n\nSome **bold** and _italic_.";
//!
//! let tree = md2html::convert(md).unwrap();
//! assert_eq!(
//!     tree.render().unwrap(),
//!     "<div><h1>Title</h1><p>Some <b>bold</b> and <i>italic</i>.</p></div>"
//! );
//! assert_eq!(md2html::extract_title(md).unwrap(), "Title");
//! ```

mod block;
mod convert;
pub mod inline;
mod options;
mod service;
pub mod span;

pub use block::{block_to_block_type, markdown_to_blocks, BlockType};
pub use inline::text_to_spans;
pub use md2html_core::{HtmlNode, RenderError};
pub use options::{EmptyListPolicy, Options};
pub use service::HtmlConverter;
pub use span::{SpanKind, TextSpan};

/// Error type for md2html operations
#[derive(Debug, thiserror::Error)]
pub enum Md2HtmlError {
    #[error("Unmatched delimiter: {0}")]
    UnmatchedDelimiter(String),

    #[error("Unsupported span kind: {0:?}")]
    UnsupportedSpanKind(SpanKind),

    #[error("No level 1 heading found")]
    NoTitleFound,

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, Md2HtmlError>;

/// Convert Markdown to a node tree using default options
pub fn convert(markdown: &str) -> Result<HtmlNode> {
    HtmlConverter::new().convert(markdown)
}

/// Convert and render Markdown using default options
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    HtmlConverter::new().convert_to_html(markdown)
}

/// Text of the first `# ` heading of the document
pub fn extract_title(markdown: &str) -> Result<String> {
    HtmlConverter::new().extract_title(markdown)
}
