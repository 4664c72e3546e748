//! Generic XML serializer driven by [`crate::schema`] descriptor tables.
//!
//! Serialization happens in two steps: a [`Record`] is first turned into an
//! [`Element`] tree, which is then rendered either compact or tab-indented.
//! Both renderings carry the same content.

use crate::schema::{FieldKind, Record, Value};

/// A node of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Markup written verbatim, such as CDATA sections in inner content.
    Raw(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Build an element from a record by walking its descriptor table.
    pub fn from_record(name: &str, record: &dyn Record) -> Self {
        let mut element = Self::new(name);

        for field in record.fields() {
            let value = record.value(field.name);
            if matches!(value, Value::Absent) || (field.omit_empty && value.is_empty()) {
                continue;
            }

            match field.kind {
                FieldKind::Attribute => {
                    if let Some(text) = value.scalar() {
                        element.attributes.push((field.name.to_string(), text));
                    }
                }
                FieldKind::Inner => {
                    if let Some(text) = value.scalar() {
                        element.children.push(Node::Raw(text));
                    }
                }
                FieldKind::Element => element.push_value(field.name, value),
            }
        }

        element
    }

    fn push_value(&mut self, name: &str, value: Value<'_>) {
        match value {
            Value::Absent => {}
            Value::Texts(items) => {
                for item in items {
                    self.children.push(Node::Element(Self::text(name, item.clone())));
                }
            }
            Value::Record(record) => {
                self.children.push(Node::Element(Self::from_record(name, record)));
            }
            Value::Records(records) => {
                for record in records {
                    self.children.push(Node::Element(Self::from_record(name, record)));
                }
            }
            Value::Group { item, records } => {
                let mut group = Self::new(name);
                for record in records {
                    group.children.push(Node::Element(Self::from_record(item, record)));
                }
                self.children.push(Node::Element(group));
            }
            scalar => {
                if let Some(text) = scalar.scalar() {
                    self.children.push(Node::Element(Self::text(name, text)));
                }
            }
        }
    }

    fn text(name: &str, text: String) -> Self {
        let mut element = Self::new(name);
        element.children.push(Node::Text(text));
        element
    }

    /// First attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter_map(move |child| match child {
            Node::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// Concatenated direct text content, raw markup included.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) | Node::Raw(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Render the element. Pretty output puts each nested element on its own
    /// tab-indented line; elements with only text stay on one line.
    pub fn render(&self, pretty: bool) -> String {
        let mut out = String::new();
        self.write_to(&mut out, 0, pretty);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize, pretty: bool) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape_into(out, value, true);
            out.push('"');
        }
        out.push('>');

        let mut nested = false;
        for child in &self.children {
            match child {
                Node::Text(text) => escape_into(out, text, false),
                Node::Raw(markup) => out.push_str(markup),
                Node::Element(element) => {
                    nested = true;
                    if pretty {
                        newline(out, depth + 1);
                    }
                    element.write_to(out, depth + 1, pretty);
                }
            }
        }

        if pretty && nested {
            newline(out, depth);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push('\t');
    }
}

fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '\n' if attribute => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            '\t' if attribute => out.push_str("&#x9;"),
            c => out.push(c),
        }
    }
}

/// Serialize a record as the document element `name`.
pub fn to_xml(name: &str, record: &dyn Record, pretty: bool) -> String {
    Element::from_record(name, record).render(pretty)
}
