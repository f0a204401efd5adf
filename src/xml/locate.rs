//! Namespace-agnostic tag search.
//!
//! Output files nest the interesting blocks at depths that change between
//! program versions, so lookups walk the whole subtree instead of following
//! fixed paths. A tag matches when it ends with the requested name, which
//! lets `atom` find `cml:atom` without knowing the prefix.

use super::Element;

/// Pre-order walk over an element and everything below it.
pub struct Descendants<'a> {
    pending: Vec<&'a Element>,
}

impl<'a> Descendants<'a> {
    pub(super) fn new(root: &'a Element) -> Self {
        Self {
            pending: vec![root],
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.pop()?;
        self.pending.extend(current.child_elements().rev());
        Some(current)
    }
}

#[inline]
fn matches(element: &Element, name: &str) -> bool {
    element.tag.ends_with(name)
}

/// All elements under `root` (inclusive) whose tag ends with `name`, in
/// document order. Finding nothing is not an error.
pub fn find_tags<'a>(name: &str, root: &'a Element) -> Vec<&'a Element> {
    root.descendants()
        .filter(|element| matches(element, name))
        .collect()
}

/// First element in document order whose tag ends with `name`.
pub fn find_tag<'a>(name: &str, root: &'a Element) -> Option<&'a Element> {
    root.descendants().find(|element| matches(element, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{Node, strip_namespaces};
    use proptest::prelude::*;

    fn molecule() -> Element {
        Element::new("molpro").with_child(
            Element::new("job")
                .with_child(
                    Element::new("cml:molecule")
                        .with_child(
                            Element::new("cml:atomArray")
                                .with_child(Element::new("cml:atom").with_attribute("id", "a1"))
                                .with_child(Element::new("cml:atom").with_attribute("id", "a2")),
                        )
                        .with_child(
                            Element::new("cml:bondArray")
                                .with_child(Element::new("cml:bond").with_attribute("atomRefs2", "a1 a2")),
                        ),
                )
                .with_child(Element::new("cml:atom").with_attribute("id", "a3")),
        )
    }

    fn ids(found: &[&Element]) -> Vec<String> {
        found
            .iter()
            .filter_map(|e| e.attribute("id"))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn finds_prefixed_tags_in_document_order() {
        let root = molecule();
        let atoms = find_tags("atom", &root);
        assert_eq!(atoms.len(), 3);
        assert_eq!(ids(&atoms), vec!["a1", "a2", "a3"]);
    }

    #[test]
    fn suffix_match_does_not_hit_containers() {
        let root = molecule();
        let bonds = find_tags("bond", &root);
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].tag, "cml:bond");
        assert_eq!(find_tags("Array", &root).len(), 2);
    }

    #[test]
    fn parent_is_collected_before_children() {
        let root = Element::new("table")
            .with_attribute("id", "outer")
            .with_child(Element::new("table").with_attribute("id", "inner"));
        let tables = find_tags("table", &root);
        assert_eq!(ids(&tables), vec!["outer", "inner"]);
    }

    #[test]
    fn missing_tag_yields_empty_result() {
        let root = molecule();
        assert!(find_tags("table", &root).is_empty());
        assert!(find_tag("version", &root).is_none());
    }

    #[test]
    fn find_tag_returns_first_match() {
        let root = molecule();
        let first = find_tag("atom", &root).expect("atom present");
        assert_eq!(first.attribute("id"), Some("a1"));
    }

    #[test]
    fn descendants_include_root() {
        let root = molecule();
        let first = root.descendants().next().expect("root");
        assert_eq!(first.tag, "molpro");
        assert_eq!(root.descendants().count(), 9);
    }

    fn arb_tag() -> impl Strategy<Value = String> + Clone {
        (
            prop::option::of(prop::sample::select(vec!["cml", "m", "xhtml"])),
            prop::sample::select(vec!["atom", "bond", "table", "atomArray", "molecule", "version"]),
        )
            .prop_map(|(prefix, local)| match prefix {
                Some(prefix) => format!("{prefix}:{local}"),
                None => local.to_string(),
            })
    }

    fn arb_tree() -> impl Strategy<Value = Element> {
        let tag = arb_tag();
        arb_tag()
            .prop_map(Element::new)
            .prop_recursive(4, 48, 4, move |inner| {
                (tag.clone(), prop::collection::vec(inner, 0..4)).prop_map(|(tag, children)| {
                    let mut element = Element::new(tag);
                    element.children = children.into_iter().map(Node::Element).collect();
                    element
                })
            })
    }

    fn number(root: &mut Element) {
        let mut next = 0usize;
        let mut pending = vec![root];
        while let Some(current) = pending.pop() {
            current.set_attribute("n", next.to_string());
            next += 1;
            let children: Vec<&mut Element> = current
                .children
                .iter_mut()
                .filter_map(|node| match node {
                    Node::Element(child) => Some(child),
                    _ => None,
                })
                .collect();
            pending.extend(children.into_iter().rev());
        }
    }

    fn ordinals(found: &[&Element]) -> Vec<usize> {
        found
            .iter()
            .filter_map(|e| e.attribute("n"))
            .filter_map(|n| n.parse().ok())
            .collect()
    }

    proptest! {
        #[test]
        fn results_are_in_order_and_survive_stripping(
            mut root in arb_tree(),
            name in prop::sample::select(vec!["atom", "bond", "table", "Array", "version"]),
        ) {
            number(&mut root);
            let before = ordinals(&find_tags(name, &root));
            prop_assert!(before.windows(2).all(|w| w[0] < w[1]));

            let mut stripped = root.clone();
            strip_namespaces(&mut stripped);
            let after = ordinals(&find_tags(name, &stripped));
            prop_assert_eq!(before, after);
        }
    }
}
