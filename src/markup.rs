// ABOUTME: Markup codec between XHTML-style source text and the headless document
// ABOUTME: Parses with quick-xml and writes the tree back, preserving untouched markup

use crate::dom::{Document, NodeId, NodeKind};
use crate::errors::{Result, SliderError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse a complete document.
pub fn parse(source: &str) -> Result<Document> {
    let mut doc = Document::new();
    let root = doc.root();
    parse_into(&mut doc, root, source)?;
    Ok(doc)
}

/// Parse `markup` and append the resulting nodes under `parent`.
pub fn parse_fragment(doc: &mut Document, parent: NodeId, markup: &str) -> Result<()> {
    parse_into(doc, parent, markup)
}

fn parse_into(doc: &mut Document, parent: NodeId, source: &str) -> Result<()> {
    let mut reader = Reader::from_str(source);
    reader.trim_text(false);
    reader.check_end_names(true);

    let mut stack = vec![parent];

    loop {
        let start = reader.buffer_position();
        let event = reader.read_event().map_err(|e| SliderError::MarkupError {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;
        let end = reader.buffer_position();
        let current = *stack.last().unwrap_or(&parent);

        match event {
            Event::Start(e) => {
                let id = element_from(doc, &e, false, start)?;
                doc.append_child(current, id);
                stack.push(id);
            }
            Event::Empty(e) => {
                let id = element_from(doc, &e, true, start)?;
                doc.append_child(current, id);
            }
            Event::End(_) => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            Event::Text(t) => {
                let id = doc.create_escaped_text(String::from_utf8_lossy(&t).into_owned());
                doc.append_child(current, id);
            }
            Event::Eof => break,
            // Comments, CDATA, doctype, declarations and processing instructions.
            _ => {
                let id = doc.create_raw(source[start..end].to_string());
                doc.append_child(current, id);
            }
        }
    }

    if stack.len() > 1 {
        return Err(SliderError::MarkupError {
            position: source.len(),
            message: format!("{} unclosed element(s) at end of input", stack.len() - 1),
        });
    }

    Ok(())
}

fn element_from(
    doc: &mut Document,
    start: &BytesStart<'_>,
    self_closing: bool,
    position: usize,
) -> Result<NodeId> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.html_attributes() {
        let attr = attr.map_err(|e| SliderError::MarkupError {
            position,
            message: format!("bad attribute on <{}>: {}", tag, e),
        })?;
        // Values are written back inside double quotes; a single-quoted
        // value may hold a bare `"`.
        attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            String::from_utf8_lossy(&attr.value).replace('"', "&quot;"),
        ));
    }
    Ok(doc.create_parsed_element(tag, attributes, self_closing))
}

/// Serialize the whole document.
pub fn to_string(doc: &Document) -> String {
    let mut out = String::new();
    for child in doc.children(doc.root()) {
        serialize_node(doc, *child, &mut out);
    }
    out
}

/// Serialize `id` and its subtree onto `out`.
pub fn serialize_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.kind(id) {
        NodeKind::Root => {
            for child in doc.children(id) {
                serialize_node(doc, *child, out);
            }
        }
        NodeKind::Text(text) | NodeKind::Raw(text) => out.push_str(text),
        NodeKind::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attributes {
                out.push_str(&format!(" {}=\"{}\"", name, value));
            }
            let children = doc.children(id);
            if children.is_empty() && element.self_closing {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in children {
                serialize_node(doc, *child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}

/// Serialize the subtree below `id`, like `innerHTML`.
pub fn inner_markup(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    for child in doc.children(id) {
        serialize_node(doc, *child, &mut out);
    }
    out
}
