use super::{Element, Node};
use quick_xml::escape::escape;

/// Serializes `element` and its subtree into a markup string.
///
/// Namespace declarations are written back as `xmlns` attributes; call
/// [`strip_namespaces`](super::strip_namespaces) first for prefix-free
/// output.
pub fn write_element(element: &Element) -> String {
    let mut out = String::new();
    write_into(&mut out, element);
    out
}

fn write_into(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);

    for (prefix, uri) in &element.namespace_declarations {
        if prefix.is_empty() {
            write_attribute(out, "xmlns", uri);
        } else {
            write_attribute(out, &format!("xmlns:{prefix}"), uri);
        }
    }
    for (key, value) in &element.attributes {
        write_attribute(out, key, value);
    }

    if element.children.is_empty() {
        out.push_str(" />");
        return;
    }
    out.push('>');

    for child in &element.children {
        match child {
            Node::Element(inner) => write_into(out, inner),
            Node::Text(text) => out.push_str(&escape(text.as_str())),
            Node::CData(data) => {
                out.push_str("<![CDATA[");
                out.push_str(data);
                out.push_str("]]>");
            }
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn write_attribute(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{Document, strip_namespaces};
    use std::str::FromStr;

    #[test]
    fn writes_nested_elements_and_attributes() {
        let mut cell = Element::new("td");
        cell.children.push(Node::Text("-76.0240".into()));
        let table = Element::new("table")
            .with_attribute("border", "1")
            .with_child(Element::new("tr").with_child(cell).with_child(Element::new("td")));

        assert_eq!(
            write_element(&table),
            r#"<table border="1"><tr><td>-76.0240</td><td /></tr></table>"#
        );
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let mut cell = Element::new("td").with_attribute("title", "\"E\" < 0");
        cell.children.push(Node::Text("a & b".into()));
        assert_eq!(
            write_element(&cell),
            r#"<td title="&quot;E&quot; &lt; 0">a &amp; b</td>"#
        );
    }

    #[test]
    fn keeps_cdata_and_comments_verbatim() {
        let mut p = Element::new("p");
        p.children.push(Node::CData("<b>".into()));
        p.children.push(Node::Comment(" c ".into()));
        assert_eq!(write_element(&p), "<p><![CDATA[<b>]]><!-- c --></p>");
    }

    #[test]
    fn stripped_subtree_has_no_prefixes() {
        let document = Document::from_str(
            r#"<x:table xmlns:x="http://www.w3.org/1999/xhtml"><x:tr><x:td>1</x:td></x:tr></x:table>"#,
        )
        .expect("parse document");

        let raw = write_element(document.root());
        assert_eq!(
            raw,
            r#"<x:table xmlns:x="http://www.w3.org/1999/xhtml"><x:tr><x:td>1</x:td></x:tr></x:table>"#
        );

        let mut table = document.root().clone();
        strip_namespaces(&mut table);
        assert_eq!(write_element(&table), "<table><tr><td>1</td></tr></table>");
    }
}
