//! HTML pretty-printing
//!
//! The body is parsed with scraper's error-recovering HTML5 parser, then
//! written back one node per line, indented one space per nesting level.

use scraper::node::Doctype;
use scraper::{ElementRef, Html, Node};

use crate::error::RenderError;

const INDENT: &str = " ";

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose content is written back untouched, on the same line
const VERBATIM_ELEMENTS: &[&str] = &["pre", "textarea", "script", "style"];

/// Deeper documents are rejected and shown verbatim
pub const MAX_DEPTH: usize = 256;

pub fn prettify(body: &str) -> Result<String, RenderError> {
    let document = Html::parse_document(body);
    let mut lines = Vec::new();

    // (node, depth, closing); children pushed in reverse so they pop in order
    let mut stack: Vec<_> = document
        .tree
        .root()
        .children()
        .rev()
        .map(|child| (child, 0, false))
        .collect();

    while let Some((node, depth, closing)) = stack.pop() {
        let indent = INDENT.repeat(depth);

        let Some(element) = ElementRef::wrap(node) else {
            write_leaf(node.value(), &indent, &mut lines);
            continue;
        };

        let name = element.value().name();
        if closing {
            lines.push(format!("{indent}</{name}>"));
            continue;
        }
        if depth > MAX_DEPTH {
            return Err(RenderError::MalformedHtml(depth));
        }

        let open = open_tag(element);
        if VOID_ELEMENTS.contains(&name) {
            lines.push(format!("{indent}{open}"));
        } else if VERBATIM_ELEMENTS.contains(&name) {
            lines.push(format!("{indent}{open}{}</{name}>", element.inner_html()));
        } else {
            lines.push(format!("{indent}{open}"));
            stack.push((node, depth, true));
            stack.extend(node.children().rev().map(|child| (child, depth + 1, false)));
        }
    }

    Ok(lines.join("\n"))
}

/// Text, comments and doctypes
fn write_leaf(node: &Node, indent: &str, lines: &mut Vec<String>) {
    match node {
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(format!("{indent}{}", escape_text(trimmed)));
            }
        }
        Node::Comment(comment) => {
            lines.push(format!("{indent}<!--{}-->", &**comment));
        }
        Node::Doctype(doctype) => {
            lines.push(format!("{indent}{}", doctype_tag(doctype)));
        }
        _ => {}
    }
}

fn doctype_tag(doctype: &Doctype) -> String {
    let (public_id, system_id) = (doctype.public_id(), doctype.system_id());
    if !public_id.is_empty() {
        let mut tag = format!("<!DOCTYPE {} PUBLIC \"{}\"", doctype.name(), public_id);
        if !system_id.is_empty() {
            tag.push_str(&format!(" \"{}\"", system_id));
        }
        tag.push('>');
        tag
    } else if !system_id.is_empty() {
        format!("<!DOCTYPE {} SYSTEM \"{}\">", doctype.name(), system_id)
    } else {
        format!("<!DOCTYPE {}>", doctype.name())
    }
}

fn open_tag(element: ElementRef<'_>) -> String {
    let value = element.value();
    let mut tag = format!("<{}", value.name());
    for (name, attr) in value.attrs() {
        tag.push_str(&format!(" {}=\"{}\"", name, escape_attr(attr)));
    }
    tag.push('>');
    tag
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
