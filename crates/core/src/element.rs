//! The emitted markup tree.
//!
//! Components never produce HTML text themselves; they build an
//! [`Element`] (tag, ordered attributes, children) and leave serialization
//! to whoever consumes the tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTML and SVG tags the component library emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `<div>`
    Div,
    /// `<span>`
    Span,
    /// `<a>`
    A,
    /// `<button>`
    Button,
    /// `<summary>`
    Summary,
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// `<svg>`
    Svg,
    /// `<path>`
    Path,
    /// `<ul>`
    Ul,
    /// `<li>`
    Li,
}

impl Tag {
    /// Returns the lowercase tag name.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::A => "a",
            Tag::Button => "button",
            Tag::Summary => "summary",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
            Tag::Svg => "svg",
            Tag::Path => "path",
            Tag::Ul => "ul",
            Tag::Li => "li",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `name` can be written as an HTML attribute name.
///
/// Rejects empty names and names containing whitespace, control characters,
/// quotes, `<`, `>`, `/` or `=`, any of which would end the attribute (or the
/// tag) early when serialized.
///
/// ```
/// use viewkit_core::is_valid_attribute_name;
///
/// assert!(is_valid_attribute_name("data-test-id"));
/// assert!(!is_valid_attribute_name("x\"><script>"));
/// ```
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// An attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A text value, emitted as `name="value"`.
    Text(String),
    /// A boolean attribute: `true` emits a bare `name`, `false` omits it.
    Flag(bool),
}

impl AttrValue {
    /// Returns the text value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(value) => Some(value),
            AttrValue::Flag(_) => None,
        }
    }

    /// Returns false for a `false` flag, which serializes to nothing.
    pub fn is_present(&self) -> bool {
        !matches!(self, AttrValue::Flag(false))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Text content, escaped on serialization.
    Text(String),
}

impl Node {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Returns the element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

/// One rendered element: tag, ordered attributes, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    attributes: Vec<(String, AttrValue)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the attributes in emission order.
    pub fn attributes(&self) -> &[(String, AttrValue)] {
        &self.attributes
    }

    /// Returns the children in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Returns the value of the named attribute.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns the `class` attribute text.
    pub fn class(&self) -> Option<&str> {
        self.attribute("class").and_then(AttrValue::as_text)
    }

    /// Appends a child node.
    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Builder form of [`Element::push_child`].
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push_child(child);
        self
    }

    /// Appends every node of `children`.
    pub fn extend_children(&mut self, children: impl IntoIterator<Item = Node>) {
        self.children.extend(children);
    }

    /// Returns the concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(&self.children, &mut text);
        text
    }

    /// Returns the first descendant (depth-first, excluding self) with `token` in its class list.
    pub fn find_by_class(&self, token: &str) -> Option<&Element> {
        for child in &self.children {
            if let Node::Element(element) = child {
                if element
                    .class()
                    .is_some_and(|classes| classes.split_whitespace().any(|t| t == token))
                {
                    return Some(element);
                }
                if let Some(found) = element.find_by_class(token) {
                    return Some(found);
                }
            }
        }
        None
    }
}

fn collect_text(nodes: &[Node], buffer: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => buffer.push_str(text),
            Node::Element(element) => collect_text(&element.children, buffer),
        }
    }
}
