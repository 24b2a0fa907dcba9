//! Serializes markup trees to HTML text.

use viewkit_core::{
    AttrValue, Element, Node, RenderOptions, ViewError, is_valid_attribute_name,
};

use crate::component::{Component, render_inline};

/// Serializes an element and its descendants.
///
/// Attributes are written in tree order. Text and attribute values are
/// escaped; `true` flags are written bare and `false` flags are skipped.
/// Attributes whose names cannot be written unquoted are skipped.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

/// Renders a component to HTML, or to an empty string when it is not renderable.
pub fn render_to_string<C: Component + ?Sized>(
    component: &C,
    options: &RenderOptions,
) -> Result<String, ViewError> {
    Ok(render_inline(component, options)?
        .map(|element| to_html(&element))
        .unwrap_or_default())
}

fn write_element(element: &Element, out: &mut String) {
    let tag = element.tag().name();
    out.push('<');
    out.push_str(tag);
    for (name, value) in element.attributes() {
        if !is_valid_attribute_name(name) {
            continue;
        }
        match value {
            AttrValue::Flag(false) => continue,
            AttrValue::Flag(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Text(text) => {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                html_escape::encode_double_quoted_attribute_to_string(text, out);
                out.push('"');
            }
        }
    }
    out.push('>');
    for child in element.children() {
        match child {
            Node::Element(nested) => write_element(nested, out),
            Node::Text(text) => {
                html_escape::encode_text_to_string(text, out);
            }
        }
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
