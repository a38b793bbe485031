//! Inline span splitting
//!
//! A text run becomes a sequence of [`TextSpan`]s through five passes that
//! always run in this order:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)`
//! 3. bold `**`
//! 4. italic `_`
//! 5. code `` ` ``
//!
//! Each pass only looks at spans that are still plain; spans typed by an
//! earlier pass are passed through untouched. Images run before links so that
//! `![a](u)` is never read as a link.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::span::{SpanKind, TextSpan};
use crate::{Md2HtmlError, Result};

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image pattern is valid"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

/// Split a text run into typed spans
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_spans_image(spans);
    let spans = split_spans_link(spans);
    let spans = split_spans_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_spans_delimiter(spans, "_", SpanKind::Italic)?;
    let spans = split_spans_delimiter(spans, "`", SpanKind::Code)?;

    log::trace!("split {} bytes of inline text into {} spans", text.len(), spans.len());
    Ok(spans)
}

/// All `![alt](url)` pairs in `text`, left to right
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// All `[text](url)` pairs in `text` that are not part of an image
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    LinkMatches::new(text)
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

/// Replace every image in plain spans with an image span
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.content.as_str();
        let mut last = 0;
        for caps in IMAGE_RE.captures_iter(text) {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            push_plain(&mut result, &text[last..whole.start]);
            result.push(TextSpan::image(&caps[1], &caps[2]));
            last = whole.end;
        }
        push_plain(&mut result, &text[last..]);
    }

    result
}

/// Replace every link in plain spans with a link span
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.content.as_str();
        let mut last = 0;
        for link in LinkMatches::new(text) {
            push_plain(&mut result, &text[last..link.start]);
            result.push(TextSpan::link(link.text, link.url));
            last = link.end;
        }
        push_plain(&mut result, &text[last..]);
    }

    result
}

/// Split plain spans on `delimiter`, turning every odd-indexed piece into a
/// span of `kind`.
///
/// Typed pieces are kept even when empty; empty plain pieces are dropped.
/// An odd number of delimiters in any plain span is an error.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.content.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(Md2HtmlError::UnmatchedDelimiter(delimiter.to_string()));
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if i % 2 == 0 {
                push_plain(&mut result, piece);
            } else {
                result.push(TextSpan::new(piece, kind));
            }
        }
    }

    Ok(result)
}

fn push_plain(spans: &mut Vec<TextSpan>, text: &str) {
    if !text.is_empty() {
        spans.push(TextSpan::plain(text));
    }
}

struct LinkMatch<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    url: &'a str,
}

/// Iterator over link matches, skipping candidates directly preceded by `!`.
///
/// `regex` has no lookbehind, so a rejected candidate restarts the search one
/// character after its opening bracket.
struct LinkMatches<'a> {
    haystack: &'a str,
    pos: usize,
}

impl<'a> LinkMatches<'a> {
    fn new(haystack: &'a str) -> Self {
        Self { haystack, pos: 0 }
    }
}

impl<'a> Iterator for LinkMatches<'a> {
    type Item = LinkMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.haystack.len() {
            let caps = LINK_RE.captures_at(self.haystack, self.pos)?;
            let (whole, text, url) = (caps.get(0)?, caps.get(1)?, caps.get(2)?);

            if self.haystack[..whole.start()].ends_with('!') {
                // `[` is ASCII, so the next char boundary is one byte on
                self.pos = whole.start() + 1;
                continue;
            }

            self.pos = whole.end();
            return Some(LinkMatch {
                start: whole.start(),
                end: whole.end(),
                text: text.as_str(),
                url: url.as_str(),
            });
        }
        None
    }
}
