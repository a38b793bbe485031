//! Convert Markdown text to an HTML node tree
//!
//! Every block is compiled on its own; the only state carried between
//! blocks is the list of finished subtrees that becomes the children of the
//! root `div`.

use md2html_core::HtmlNode;

use crate::block::{
    block_to_block_type, markdown_to_blocks, ordered_item_text, unordered_item_text, BlockType,
};
use crate::inline::text_to_spans;
use crate::options::{EmptyListPolicy, Options};
use crate::span::{spans_to_html_nodes, TextSpan};
use crate::Result;

const MAX_HEADING_LEVEL: usize = 6;

/// Convert a Markdown document to a tree rooted at a `div`
pub fn convert(markdown: &str, options: &Options) -> Result<HtmlNode> {
    let blocks = markdown_to_blocks(markdown);
    let mut children = Vec::with_capacity(blocks.len());

    for block in &blocks {
        let block_type = block_to_block_type(block);
        log::debug!("compiling {:?} block ({} bytes)", block_type, block.len());

        if let Some(node) = convert_block(block, block_type, options)? {
            children.push(node);
        }
    }

    log::debug!(
        "converted {} blocks into {} block elements",
        blocks.len(),
        children.len()
    );
    Ok(HtmlNode::parent("div", children))
}

/// Compile one classified block. `None` means the block emits nothing.
fn convert_block(
    block: &str,
    block_type: BlockType,
    options: &Options,
) -> Result<Option<HtmlNode>> {
    let node = match block_type {
        BlockType::Paragraph => convert_paragraph(block)?,
        BlockType::Heading => convert_heading(block)?,
        BlockType::OrderedList => {
            return convert_list(block, "ol", ordered_item_text, options);
        }
        BlockType::UnorderedList => {
            return convert_list(block, "ul", unordered_item_text, options);
        }
        BlockType::Code => convert_code(block)?,
        BlockType::Quote => convert_quote(block, options)?,
    };
    Ok(Some(node))
}

/// Wrap the inline spans of `text` in a `tag` parent
fn inline_parent(tag: &str, text: &str) -> Result<HtmlNode> {
    let spans = text_to_spans(text)?;
    Ok(HtmlNode::parent(tag, spans_to_html_nodes(&spans)?))
}

fn convert_paragraph(block: &str) -> Result<HtmlNode> {
    let text = block.lines().map(str::trim).collect::<Vec<_>>().join(" ");
    inline_parent("p", &text)
}

fn convert_heading(block: &str) -> Result<HtmlNode> {
    let line = block.lines().next().unwrap_or("").trim_start();
    let hashes = line.len() - line.trim_start_matches('#').len();
    let level = hashes.clamp(1, MAX_HEADING_LEVEL);
    let content = line[hashes..].trim();

    inline_parent(&format!("h{level}"), content)
}

/// Compile an `ol` or `ul` block.
///
/// A line that starts with a marker opens a new item; any other line
/// continues the item before it.
fn convert_list(
    block: &str,
    tag: &str,
    item_text: fn(&str) -> Option<&str>,
    options: &Options,
) -> Result<Option<HtmlNode>> {
    let mut items: Vec<Vec<&str>> = Vec::new();

    for line in block.lines().map(str::trim_start).filter(|l| !l.is_empty()) {
        if let Some(text) = item_text(line) {
            items.push(vec![text]);
        } else if let Some(current) = items.last_mut() {
            current.push(line);
        } else {
            items.push(vec![line]);
        }
    }

    let mut list_items = Vec::with_capacity(items.len());
    for lines in items {
        let text = lines.join("\n");
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        list_items.push(inline_parent("li", text)?);
    }

    if list_items.is_empty() && options.empty_list == EmptyListPolicy::Skip {
        log::debug!("skipping <{tag}> block without items");
        return Ok(None);
    }

    Ok(Some(HtmlNode::parent(tag, list_items)))
}

/// Compile a fenced code block. The fence lines are dropped and the body is
/// dedented; inline markers are kept as literal text.
fn convert_code(block: &str) -> Result<HtmlNode> {
    let lines: Vec<&str> = block.lines().collect();
    let inner = if lines.len() > 2 {
        &lines[1..lines.len() - 1]
    } else {
        &[][..]
    };

    let indent = inner
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|&c| c == ' ').count())
        .min()
        .unwrap_or(0);

    let mut code = inner
        .iter()
        .map(|line| skip_chars(line, indent))
        .collect::<Vec<_>>()
        .join("\n");
    if !code.ends_with('\n') {
        code.push('\n');
    }

    let code_node = TextSpan::code(code).to_html_node()?;
    Ok(HtmlNode::parent("pre", vec![code_node]))
}

/// `line` without its first `n` characters, empty if it is shorter
fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((i, _)) => &line[i..],
        None => "",
    }
}

fn convert_quote(block: &str, options: &Options) -> Result<HtmlNode> {
    let lines: Vec<&str> = block
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix('>'))
        .map(|rest| rest.strip_prefix(' ').unwrap_or(rest).trim_end())
        .collect();

    inline_parent("blockquote", &lines.join(&options.quote_line_break))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn to_html(markdown: &str) -> String {
        convert(markdown, &Options::default())
            .unwrap()
            .render()
            .unwrap()
    }

    #[test]
    fn test_paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
        assert_eq!(
            to_html(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[rstest]
    #[case("# one", "<div><h1>one</h1></div>")]
    #[case("### three", "<div><h3>three</h3></div>")]
    #[case("###### six", "<div><h6>six</h6></div>")]
    #[case("####### seven", "<div><h6>seven</h6></div>")]
    #[case("## _styled_ heading", "<div><h2><i>styled</i> heading</h2></div>")]
    fn test_heading_levels(#[case] md: &str, #[case] expected: &str) {
        assert_eq!(to_html(md), expected);
    }

    #[test]
    fn test_heading_uses_first_line() {
        assert_eq!(to_html("# Title  \nignored"), "<div><h1>Title</h1></div>");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            to_html("1. a\n2. b"),
            "<div><ol><li>a</li><li>b</li></ol></div>"
        );
    }

    #[test]
    fn test_unordered_list_with_inline() {
        assert_eq!(
            to_html("- **one**\n* [two](/2)\n+ `three`"),
            r#"<div><ul><li><b>one</b></li><li><a href="/2">two</a></li><li><code>three</code></li></ul></div>"#
        );
    }

    #[test]
    fn test_list_continuation_lines() {
        assert_eq!(
            to_html("1. first\n   still first\n2. second"),
            "<div><ol><li>first\nstill first</li><li>second</li></ol></div>"
        );
    }

    #[test]
    fn test_list_empty_items_are_skipped() {
        assert_eq!(
            to_html("- x\n-  \n- y"),
            "<div><ul><li>x</li><li>y</li></ul></div>"
        );
    }

    #[test]
    fn test_code_block() {
        let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
        assert_eq!(
            to_html(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn test_code_block_dedent() {
        let md = "```\n    fn main() {\n        body();\n  \n    }\n```";
        assert_eq!(
            to_html(md),
            "<div><pre><code>fn main() {\n    body();\n\n}\n</code></pre></div>"
        );
    }

    #[test]
    fn test_code_block_short_blank_line_becomes_empty() {
        assert_eq!(skip_chars("  ", 4), "");
        assert_eq!(skip_chars("      ", 4), "  ");
        assert_eq!(skip_chars("    x", 4), "x");
    }

    #[test]
    fn test_code_block_without_body() {
        assert_eq!(to_html("```\n```"), "<div><pre><code>\n</code></pre></div>");
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            to_html("> first line\n>second _line_\n>  indented"),
            "<div><blockquote>first line<br>second <i>line</i><br> indented</blockquote></div>"
        );
    }

    #[test]
    fn test_quote_custom_line_break() {
        let options = Options {
            quote_line_break: " ".to_string(),
            ..Default::default()
        };
        let html = convert("> a\n> b", &options).unwrap().render().unwrap();
        assert_eq!(html, "<div><blockquote>a b</blockquote></div>");
    }

    #[test]
    fn test_empty_list_policy() {
        let skip = convert_list("- ", "ul", unordered_item_text, &Options::default()).unwrap();
        assert!(skip.is_none());

        let options = Options {
            empty_list: EmptyListPolicy::Emit,
            ..Default::default()
        };
        let emitted = convert_list("- ", "ul", unordered_item_text, &options)
            .unwrap()
            .unwrap();
        assert_eq!(emitted.tag(), Some("ul"));
        assert!(emitted.render().is_err());
    }

    #[test]
    fn test_mixed_document() {
        let md = "# Title\n\n> quote\n\n- a\n- b\n\n1. c\n\n```\nx\n```\n\nend";
        assert_eq!(
            to_html(md),
            "<div><h1>Title</h1><blockquote>quote</blockquote><ul><li>a</li><li>b</li></ul><ol><li>c</li></ol><pre><code>x\n</code></pre><p>end</p></div>"
        );
    }
}
