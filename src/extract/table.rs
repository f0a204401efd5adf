use super::context::ExtractionContext;
use crate::diagnostics::{Logger, Warning};
use crate::model::archive::ResultTable;
use crate::xml::{find_tags, strip_namespaces, write_element};

const TABLE_TAG: &str = "table";

/// Renders the first `table` node for display.
///
/// Later tables are dropped after a single warning. The document itself is
/// left untouched: the selected subtree is cloned before its namespaces are
/// stripped and `border="1"` is forced on it.
pub fn extract_table(ctx: &ExtractionContext<'_>, logger: &mut dyn Logger) -> Option<ResultTable> {
    let tables = find_tags(TABLE_TAG, ctx.document.root());
    let Some(&first) = tables.first() else {
        tracing::debug!("document carries no result table");
        return None;
    };
    if tables.len() > 1 {
        logger.warn(Warning::MultipleTables {
            count: tables.len(),
        });
    }

    let mut table = first.clone();
    strip_namespaces(&mut table);
    table.set_attribute("border", "1");
    Some(ResultTable::new(write_element(&table)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::WarningKind;
    use crate::extract::ParserConfig;
    use crate::xml::Document;
    use std::str::FromStr;

    fn extract(xml: &str) -> (Option<ResultTable>, Vec<Warning>, Document) {
        let doc = Document::from_str(xml).expect("parse document");
        let config = ParserConfig::default();
        let mut warnings: Vec<Warning> = Vec::new();
        let table = {
            let ctx = ExtractionContext::new(&doc, &config);
            extract_table(&ctx, &mut warnings)
        };
        (table, warnings, doc)
    }

    #[test]
    fn no_table_is_absent_without_warning() {
        let (table, warnings, _) = extract("<molpro><job/></molpro>");
        assert!(table.is_none());
        assert!(warnings.is_empty());
    }

    #[test]
    fn single_table_is_stripped_and_bordered() {
        let (table, warnings, _) = extract(
            r#"<molpro xmlns="http://www.molpro.net/schema/molpro-output" xmlns:xhtml="http://www.w3.org/1999/xhtml">
                 <xhtml:table class="energies"><xhtml:tr><xhtml:td>-76.02</xhtml:td></xhtml:tr></xhtml:table>
               </molpro>"#,
        );
        assert!(warnings.is_empty());
        assert_eq!(
            table.expect("table present").markup,
            r#"<table class="energies" border="1"><tr><td>-76.02</td></tr></table>"#
        );
    }

    #[test]
    fn default_namespace_declaration_is_dropped() {
        let (table, _, _) = extract(
            r#"<molpro><table xmlns="http://www.w3.org/1999/xhtml" border="0"><tr/></table></molpro>"#,
        );
        assert_eq!(
            table.expect("table present").markup,
            r#"<table border="1"><tr /></table>"#
        );
    }

    #[test]
    fn prefixed_attributes_lose_their_prefix() {
        let (table, _, _) = extract(
            r#"<molpro xmlns:x="http://www.w3.org/1999/xhtml" xmlns:xlink="http://www.w3.org/1999/xlink">
                 <x:table x:class="e"><x:tr><x:td xlink:href="r">1</x:td></x:tr></x:table>
               </molpro>"#,
        );
        assert_eq!(
            table.expect("table present").markup,
            r#"<table class="e" border="1"><tr><td href="r">1</td></tr></table>"#
        );
    }

    #[test]
    fn first_of_two_tables_with_one_warning() {
        let (table, warnings, _) = extract(
            r#"<molpro>
                 <table id="first"><tr><td>1</td></tr></table>
                 <job><table id="second"><tr><td>2</td></tr></table></job>
               </molpro>"#,
        );
        assert_eq!(
            table.expect("table present").markup,
            r#"<table id="first" border="1"><tr><td>1</td></tr></table>"#
        );
        assert_eq!(warnings, vec![Warning::MultipleTables { count: 2 }]);
        assert_eq!(warnings[0].kind(), WarningKind::AmbiguousData);
    }

    #[test]
    fn document_is_left_untouched() {
        let xml = r#"<m:molpro xmlns:m="urn:molpro"><m:table><m:tr/></m:table></m:molpro>"#;
        let (table, _, doc) = extract(xml);
        assert_eq!(
            table.expect("table present").markup,
            r#"<table border="1"><tr /></table>"#
        );
        assert_eq!(doc, Document::from_str(xml).expect("parse document"));
        assert_eq!(doc.root().tag, "m:molpro");
    }
}
