//! A small owned XML tree for reading SOAP responses.
//!
//! vSphere answers carry namespace prefixes that differ between server
//! versions (`soapenv:`, `soap:`, none), so elements are keyed by their local
//! name. Attributes keep their qualified name because `type` and `xsi:type`
//! both appear on managed object references and mean different things.

use crate::core::domain::{
    error::{VsanError, VsanResult},
    model::managed_object::ManagedObjectReference,
};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parses a document and returns its root element.
    pub(crate) fn parse(xml: &str) -> VsanResult<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event().map_err(parse_error)? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let node = Self::from_start(&start)?;
                    attach(&mut stack, &mut root, node);
                }
                Event::End(_) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| VsanError::Parse("Unbalanced closing tag".to_string()))?;
                    attach(&mut stack, &mut root, node);
                }
                Event::Text(text) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&text.unescape().map_err(parse_error)?);
                    }
                }
                Event::CData(data) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(VsanError::Parse("Unexpected end of document".to_string()));
        }
        root.ok_or_else(|| VsanError::Parse("Document has no root element".to_string()))
    }

    fn from_start(start: &BytesStart<'_>) -> VsanResult<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(parse_error)?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value().map_err(parse_error)?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn first_child(&self) -> Option<&XmlNode> {
        self.children.first()
    }

    pub(crate) fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub(crate) fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Depth-first search for the first element with the given local name.
    pub(crate) fn descendant(&self, name: &str) -> Option<&XmlNode> {
        self.children
            .iter()
            .find_map(|c| if c.name == name { Some(c) } else { c.descendant(name) })
    }

    pub(crate) fn require_child(&self, name: &str) -> VsanResult<&XmlNode> {
        self.child(name).ok_or_else(|| {
            VsanError::Parse(format!("Element <{}> has no <{}> child", self.name, name))
        })
    }

    pub(crate) fn require_text(&self, name: &str) -> VsanResult<&str> {
        self.require_child(name).map(XmlNode::text)
    }

    /// Reads a child element as a signed 64-bit integer (`xsd:long`).
    pub(crate) fn require_i64(&self, name: &str) -> VsanResult<i64> {
        let raw = self.require_text(name)?;
        raw.trim().parse::<i64>().map_err(|e| {
            VsanError::Parse(format!("<{}> is not an integer ({}): {}", name, raw, e))
        })
    }

    /// Reads this element as a managed object reference:
    /// `<x type="Folder">group-d1</x>`.
    pub(crate) fn as_moref(&self) -> VsanResult<ManagedObjectReference> {
        let kind = self.attribute("type").ok_or_else(|| {
            VsanError::Parse(format!(
                "Element <{}> is not a managed object reference",
                self.name
            ))
        })?;
        if self.text.is_empty() {
            return Err(VsanError::Parse(format!(
                "Managed object reference <{}> has no value",
                self.name
            )));
        }
        Ok(ManagedObjectReference::new(kind, self.text.as_str()))
    }

    pub(crate) fn require_moref(&self, name: &str) -> VsanResult<ManagedObjectReference> {
        self.require_child(name)?.as_moref()
    }
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => *root = Some(node),
    }
}

fn parse_error(error: impl std::fmt::Display) -> VsanError {
    VsanError::Parse(format!("Malformed XML: {}", error))
}
