mod config;
mod context;
mod program;
mod structure;
mod table;

pub use config::ParserConfig;

use crate::diagnostics::Logger;
use crate::model::archive::ArchiveOutput;
use crate::model::system::{Run, System};
use crate::xml::Document;
use context::ExtractionContext;

/// Runs every extractor over `document` in a fixed order and assembles the
/// result. Never fails: missing or odd data only produces warnings.
pub fn extract(document: &Document, config: &ParserConfig, logger: &mut dyn Logger) -> ArchiveOutput {
    let ctx = ExtractionContext::new(document, config);

    let program = program::extract_program(&ctx, logger);
    let atoms = structure::extract_atoms(&ctx, logger);
    let atoms_group = structure::extract_connectivity(&ctx, logger);
    let result_table = if config.extract_table {
        table::extract_table(&ctx, logger)
    } else {
        None
    };

    tracing::debug!(
        atoms = atoms.len(),
        bonds = atoms_group.bond_count(),
        table = result_table.is_some(),
        "extraction finished"
    );

    ArchiveOutput::new(
        Run {
            program,
            system: System::new(atoms, atoms_group),
        },
        result_table,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Warning;
    use std::str::FromStr;

    const MINIMAL: &str = r#"<molpro xmlns="http://www.molpro.net/schema/molpro-output" xmlns:cml="http://www.xml-cml.org/schema">
  <platform><version major="2022" minor="3" SHA="deadbeef"/></platform>
  <cml:molecule>
    <cml:atomArray>
      <cml:atom id="a1" elementType="H" x3="0.0" y3="0.0" z3="0.0"/>
      <cml:atom id="a2" elementType="H" x3="0.0" y3="0.0" z3="0.74"/>
    </cml:atomArray>
    <cml:bondArray><cml:bond atomRefs2="a1 a2"/></cml:bondArray>
  </cml:molecule>
  <table><tr><td>E</td></tr></table>
</molpro>"#;

    #[test]
    fn assembles_every_section() {
        let doc = Document::from_str(MINIMAL).expect("parse document");
        let mut warnings: Vec<Warning> = Vec::new();
        let archive = extract(&doc, &ParserConfig::default(), &mut warnings);

        assert!(warnings.is_empty());
        assert_eq!(archive.run.program.version.as_deref(), Some("2022.3"));
        assert_eq!(archive.run.system.atom_count(), 2);
        assert_eq!(archive.run.system.atoms_group.index_values(), vec![1, 2]);
        assert_eq!(archive.run.system.atoms_group.bond_values(), vec![[1, 2]]);
        assert!(archive.has_table());
    }

    #[test]
    fn table_extraction_can_be_disabled() {
        let doc = Document::from_str(MINIMAL).expect("parse document");
        let config = ParserConfig {
            extract_table: false,
            ..Default::default()
        };
        let mut warnings: Vec<Warning> = Vec::new();
        let archive = extract(&doc, &config, &mut warnings);
        assert!(archive.result_table.is_none());
    }

    #[test]
    fn empty_document_still_yields_well_formed_output() {
        let doc = Document::from_str("<molpro/>").expect("parse document");
        let mut warnings: Vec<Warning> = Vec::new();
        let archive = extract(&doc, &ParserConfig::default(), &mut warnings);

        assert_eq!(archive.run.program.name, "Molpro");
        assert!(archive.run.system.atoms.is_empty());
        assert_eq!(archive.run.system.atoms_group.label, "all");
        assert!(archive.result_table.is_none());
        assert_eq!(warnings, vec![Warning::MissingVersion]);
    }
}
