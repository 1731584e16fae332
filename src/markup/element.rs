//! Markup element tree and its HTML serializer

use serde::Serialize;
use std::fmt;

/// A single attribute; `None` values serialize as bare boolean attributes
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

/// Child of an element
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element with ordered attributes and children
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a `name="value"` attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: Some(value.into()),
        });
        self
    }

    /// Add a bare boolean attribute when `present` is true
    pub fn flag(mut self, name: impl Into<String>, present: bool) -> Self {
        if present {
            self.attributes.push(Attribute {
                name: name.into(),
                value: None,
            });
        }
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn children(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(elements.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Value of a valued attribute
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }

    /// Whether the attribute is present, valued or not
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Direct element children with the given tag
    pub fn child_elements<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter_map(move |node| match node {
            Node::Element(e) if e.tag == tag => Some(e),
            _ => None,
        })
    }

    /// Concatenated text of direct text children
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Serialize to an HTML string
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for attr in &self.attributes {
            match &attr.value {
                Some(value) => write!(f, " {}=\"{}\"", attr.name, escape_html(value))?,
                None => write!(f, " {}", attr.name)?,
            }
        }
        f.write_str(">")?;
        for child in &self.children {
            match child {
                Node::Element(e) => write!(f, "{}", e)?,
                Node::Text(t) => f.write_str(&escape_html(t))?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Escape special HTML characters in text and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_nested() {
        let el = Element::new("select")
            .attr("name", "7")
            .child(Element::new("option").attr("value", "1").text("One"));

        assert_eq!(
            el.to_html(),
            r#"<select name="7"><option value="1">One</option></select>"#
        );
    }

    #[test]
    fn test_flag_only_when_present() {
        let on = Element::new("select").flag("disabled", true);
        let off = Element::new("select").flag("disabled", false);

        assert_eq!(on.to_html(), "<select disabled></select>");
        assert_eq!(off.to_html(), "<select></select>");
        assert!(on.has_attr("disabled"));
        assert_eq!(on.get_attr("disabled"), None);
    }

    #[test]
    fn test_escaping() {
        let el = Element::new("option")
            .attr("value", "a\"b")
            .text("<b>Tom & Jerry's</b>");

        assert_eq!(
            el.to_html(),
            "<option value=\"a&quot;b\">&lt;b&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;</option>"
        );
    }
}
