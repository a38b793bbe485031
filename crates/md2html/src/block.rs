//! Block segmentation and classification.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#+ ").expect("heading pattern is valid"));

static ORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+").expect("ordered item pattern is valid"));

static UNORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*+]\s+").expect("unordered item pattern is valid"));

const FENCE: &str = "```";

/// Structural type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    OrderedList,
    UnorderedList,
    Code,
    Quote,
}

/// Split a document into trimmed, non-empty blocks separated by blank lines
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let markdown = markdown.replace("\r\n", "\n");

    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a single block.
///
/// A fenced code block wins over every other marker, even when the block
/// also starts like a heading, quote or list.
pub fn block_to_block_type(block: &str) -> BlockType {
    if has_code_fences(block) {
        return BlockType::Code;
    }

    let first_line = block.lines().next().unwrap_or("").trim();

    if HEADING_RE.is_match(block) {
        BlockType::Heading
    } else if first_line.starts_with('>') {
        BlockType::Quote
    } else if is_ordered_item(first_line) {
        BlockType::OrderedList
    } else if is_unordered_item(first_line) {
        BlockType::UnorderedList
    } else {
        BlockType::Paragraph
    }
}

/// An opening fence line followed by a closing fence on a later line
fn has_code_fences(block: &str) -> bool {
    let is_fence = |line: &str| line.trim().starts_with(FENCE);
    let lines: Vec<&str> = block.lines().collect();

    let first = lines.iter().position(|line| is_fence(line));
    let last = lines.iter().rposition(|line| is_fence(line));

    matches!((first, last), (Some(first), Some(last)) if last > first)
}

fn is_ordered_item(line: &str) -> bool {
    ORDERED_ITEM_RE.is_match(line)
}

fn is_unordered_item(line: &str) -> bool {
    UNORDERED_ITEM_RE.is_match(line)
}

/// Text of an ordered list line after its `<number>. ` marker
pub(crate) fn ordered_item_text(line: &str) -> Option<&str> {
    ORDERED_ITEM_RE.find(line).map(|m| &line[m.end()..])
}

/// Text of an unordered list line after its `-`, `*` or `+` marker
pub(crate) fn unordered_item_text(line: &str) -> Option<&str> {
    UNORDERED_ITEM_RE.find(line).map(|m| &line[m.end()..])
}
