use super::{Document, Element, Node, error::Error};
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads a whole document from `path`. The file is closed before this
/// returns, whether or not parsing succeeded.
pub fn read_path(path: &Path) -> Result<Document, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read(BufReader::new(file))
}

pub fn read<R: BufRead>(source: R) -> Result<Document, Error> {
    let mut reader = NsReader::from_reader(source);
    let mut buf = Vec::new();
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut prolog_open = true;

    loop {
        let (resolved, event) = match reader.read_resolved_event_into(&mut buf) {
            Ok(pair) => pair,
            Err(source) => return Err(Error::xml(reader.error_position() as u64, source)),
        };
        let namespace = match resolved {
            ResolveResult::Bound(ns) => Ok(Some(String::from_utf8_lossy(ns.into_inner()).into_owned())),
            ResolveResult::Unbound => Ok(None),
            ResolveResult::Unknown(prefix) => Err(prefix),
        };
        let position = reader.buffer_position() as u64;
        let namespace = namespace.map_err(|prefix| {
            Error::malformed(
                position,
                format!("unbound namespace prefix '{}'", String::from_utf8_lossy(&prefix)),
            )
        })?;

        match event {
            Event::Start(start) => {
                open.push(open_element(&start, namespace, position)?);
            }
            Event::Empty(start) => {
                let element = open_element(&start, namespace, position)?;
                attach(element, &mut open, &mut root, position)?;
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| Error::malformed(position, "closing tag without matching opening tag"))?;
                attach(element, &mut open, &mut root, position)?;
            }
            Event::Text(text) => {
                if contains(&text, b"]]>") {
                    return Err(Error::malformed(
                        position,
                        "']]>' is not allowed in character data",
                    ));
                }
                let content = text
                    .unescape()
                    .map_err(|source| Error::xml(position, source))?;
                match open.last_mut() {
                    Some(parent) => push_text(parent, &content),
                    None if content.trim().is_empty() => {}
                    None => {
                        return Err(Error::malformed(
                            position,
                            "character data outside the root element",
                        ));
                    }
                }
            }
            Event::CData(data) => {
                let content = decode(&data, position)?;
                let parent = open.last_mut().ok_or_else(|| {
                    Error::malformed(position, "CDATA section outside the root element")
                })?;
                parent.children.push(Node::CData(content));
            }
            Event::Comment(comment) => {
                if contains(&comment, b"--") || comment.ends_with(b"-") {
                    return Err(Error::malformed(position, "'--' is not allowed inside a comment"));
                }
                if let Some(parent) = open.last_mut() {
                    parent.children.push(Node::Comment(decode(&comment, position)?));
                }
            }
            Event::Decl(_) if !prolog_open => {
                return Err(Error::malformed(
                    position,
                    "XML declaration is only allowed at the start of the document",
                ));
            }
            Event::DocType(_) if root.is_some() || !open.is_empty() => {
                return Err(Error::malformed(
                    position,
                    "document type declaration after the root element",
                ));
            }
            Event::Eof => break,
            _ => {}
        }
        prolog_open = false;
        buf.clear();
    }

    let end = reader.buffer_position() as u64;
    if let Some(unclosed) = open.last() {
        return Err(Error::malformed(
            end,
            format!("element '{}' is never closed", unclosed.tag),
        ));
    }
    root.map(Document::new)
        .ok_or_else(|| Error::malformed(end, "document has no root element"))
}

fn decode(bytes: &[u8], position: u64) -> Result<String, Error> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| Error::malformed(position, format!("invalid UTF-8: {e}")))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == ':' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-' || c == '.'
}

/// Checks `name` against the XML `Name` production. Non-ASCII characters
/// are accepted as-is.
fn check_name(name: &str, position: u64) -> Result<(), Error> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(is_name_start) && chars.all(is_name_char);
    if valid {
        Ok(())
    } else {
        Err(Error::malformed(position, format!("invalid XML name '{name}'")))
    }
}

fn open_element(
    start: &BytesStart<'_>,
    namespace: Option<String>,
    position: u64,
) -> Result<Element, Error> {
    let tag = decode(start.name().as_ref(), position)?;
    check_name(&tag, position)?;
    let mut element = Element::new(tag);
    element.namespace = namespace;

    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::xml(position, e.into()))?;
        let key = decode(attr.key.as_ref(), position)?;
        check_name(&key, position)?;
        if attr.value.contains(&b'<') {
            return Err(Error::malformed(
                position,
                format!("'<' is not allowed in the value of attribute '{key}'"),
            ));
        }
        let value = attr
            .unescape_value()
            .map_err(|source| Error::xml(position, source))?
            .into_owned();

        if key == "xmlns" {
            element.namespace_declarations.push((String::new(), value));
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            element
                .namespace_declarations
                .push((prefix.to_string(), value));
        } else {
            element.attributes.push((key, value));
        }
    }

    Ok(element)
}

fn attach(
    element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
    position: u64,
) -> Result<(), Error> {
    match open.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Element(element));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(Error::malformed(
            position,
            format!("second root element '{}'", element.tag),
        )),
    }
}

fn push_text(parent: &mut Element, content: &str) {
    if let Some(Node::Text(previous)) = parent.children.last_mut() {
        previous.push_str(content);
    } else {
        parent.children.push(Node::Text(content.to_string()));
    }
}
