//! In-memory XML tree and the operations the extractors build on.
//!
//! The tree is fully owned: a [`Document`] holds one root [`Element`], and
//! every element owns its attributes and child [`Node`]s. Tags keep the
//! qualified name as written (`cml:atom`) alongside the namespace URI the
//! prefix resolved to, so matching can ignore namespaces while
//! [`strip_namespaces`] can still produce prefix-free markup.

use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

pub mod error;
pub mod locate;
pub mod reader;
pub mod writer;

pub use error::Error;
pub use locate::{Descendants, find_tag, find_tags};
pub use writer::write_element;

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified name as written in the source, prefix included.
    pub tag: String,
    /// Namespace URI the tag's prefix (or the default namespace) resolved to.
    pub namespace: Option<String>,
    /// `xmlns` declarations made on this element, as `(prefix, uri)`; the
    /// default namespace uses an empty prefix.
    pub namespace_declarations: Vec<(String, String)>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            namespace: None,
            namespace_declarations: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn local_name(&self) -> &str {
        local_name(&self.tag)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets `name` to `value`, replacing an existing attribute in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Element> + '_ {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Concatenated text and CDATA directly under this element.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) | Node::CData(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// This element and all elements below it, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        reader::read_path(path.as_ref())
    }

    pub fn from_reader<R: BufRead>(source: R) -> Result<Self, Error> {
        reader::read(source)
    }

    #[inline]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every namespace declared anywhere in the document, as `(prefix, uri)`
    /// in document order.
    pub fn namespaces(&self) -> Vec<(&str, &str)> {
        self.root
            .descendants()
            .flat_map(|element| element.namespace_declarations.iter())
            .map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
            .collect()
    }

    pub fn strip_namespaces(&mut self) {
        strip_namespaces(&mut self.root);
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        reader::read(s.as_bytes())
    }
}

const XML_PREFIX: &str = "xml";

/// Part of a qualified name after the last `:`.
pub fn local_name(tag: &str) -> &str {
    tag.rsplit(':').next().unwrap_or(tag)
}

/// Rewrites every tag and attribute name under `element` to its local name
/// and drops namespace bindings, so the subtree serializes without prefixes.
///
/// `xml:` attributes are bound implicitly and keep their prefix. When a
/// stripped attribute collides with one already on the element, the first
/// in source order wins.
pub fn strip_namespaces(element: &mut Element) {
    let mut pending = vec![element];
    while let Some(current) = pending.pop() {
        let local = local_name(&current.tag);
        if local.len() != current.tag.len() {
            current.tag = local.to_string();
        }
        current.namespace = None;
        current.namespace_declarations.clear();

        for (key, value) in std::mem::take(&mut current.attributes) {
            let key = match key.split_once(':') {
                Some((XML_PREFIX, _)) | None => key,
                Some(_) => local_name(&key).to_string(),
            };
            if current.attribute(&key).is_none() {
                current.attributes.push((key, value));
            }
        }
        pending.extend(current.children.iter_mut().filter_map(|node| match node {
            Node::Element(child) => Some(child),
            _ => None,
        }));
    }
}
