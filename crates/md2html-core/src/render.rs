//! HTML tree rendering
//!
//! Converts an [`HtmlNode`] tree into an HTML fragment string. Nothing is
//! escaped: values and attribute values are written verbatim. Every element,
//! `img` included, gets an explicit closing tag.

use crate::node::{Attributes, HtmlNode};
use crate::{RenderError, Result};

/// Render a node tree to an HTML string
pub fn render(node: &HtmlNode) -> Result<String> {
    let mut output = String::with_capacity(1024);
    render_node(node, &mut output)?;
    Ok(output)
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf {
            tag,
            value,
            attributes,
        } => render_leaf(tag.as_deref(), value.as_deref(), attributes, out),

        HtmlNode::Parent {
            tag,
            children,
            attributes,
        } => render_parent(tag.as_deref(), children, attributes, out),
    }
}

fn render_leaf(
    tag: Option<&str>,
    value: Option<&str>,
    attributes: &Attributes,
    out: &mut String,
) -> Result<()> {
    let Some(value) = value else {
        return Err(RenderError::MissingValue {
            tag: tag.map(str::to_string),
        });
    };

    match tag {
        None => out.push_str(value),
        Some(tag) => {
            open_tag(tag, attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }
    }

    Ok(())
}

fn render_parent(
    tag: Option<&str>,
    children: &[HtmlNode],
    attributes: &Attributes,
    out: &mut String,
) -> Result<()> {
    let Some(tag) = tag else {
        return Err(RenderError::MissingTag);
    };
    if children.is_empty() {
        return Err(RenderError::EmptyChildren {
            tag: tag.to_string(),
        });
    }

    open_tag(tag, attributes, out);
    for child in children {
        render_node(child, out)?;
    }
    close_tag(tag, out);

    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    render_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Each attribute renders as ` key="value"`
fn render_attributes(attributes: &Attributes, out: &mut String) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
