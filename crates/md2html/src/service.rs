//! HtmlConverter - the main entry point for Markdown to HTML conversion.

use md2html_core::HtmlNode;

use crate::block::{block_to_block_type, markdown_to_blocks, BlockType};
use crate::convert::convert;
use crate::options::Options;
use crate::{Md2HtmlError, Result};

/// The main service for converting Markdown to HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlConverter {
    options: Options,
}

impl HtmlConverter {
    /// Create a new HtmlConverter with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create an HtmlConverter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Convert Markdown to a node tree rooted at a `div`
    pub fn convert(&self, markdown: &str) -> Result<HtmlNode> {
        convert(markdown, &self.options)
    }

    /// Convert Markdown straight to an HTML fragment string
    pub fn convert_to_html(&self, markdown: &str) -> Result<String> {
        let tree = self.convert(markdown)?;
        Ok(tree.render()?)
    }

    /// Text of the first level-1 heading (`# `) of the document.
    ///
    /// Only blocks classified as headings count; a `# ` line that opens a
    /// fenced code block is not a title.
    pub fn extract_title(&self, markdown: &str) -> Result<String> {
        markdown_to_blocks(markdown)
            .iter()
            .filter(|block| block_to_block_type(block) == BlockType::Heading)
            .find_map(|block| {
                let first_line = block.lines().next()?;
                first_line.strip_prefix("# ").map(|title| title.trim().to_string())
            })
            .ok_or(Md2HtmlError::NoTitleFound)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
