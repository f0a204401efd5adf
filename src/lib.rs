//! A pure Rust reader for Molpro's XML output.
//! It pulls the program identity, the molecular geometry, the bonding topology
//! and the post-analysis result table out of the namespaced output document
//! and maps them onto a small, version-stable data model.
//!
//! # Features
//!
//! - **Namespace-agnostic lookup** — Blocks are found anywhere in the tree by
//!   tag suffix, so `atom` matches `cml:atom` regardless of nesting depth
//! - **Graceful degradation** — Missing, duplicated or malformed nodes become
//!   typed [`Warning`]s; only unreadable or ill-formed XML is an [`Error`]
//! - **Unit handling** — Positions carry one [`LengthUnit`] for the whole
//!   collection and convert on demand
//! - **Display-ready tables** — The result table is re-serialized without
//!   namespace prefixes
//!
//! # Quick Start
//!
//! ```
//! use molpro_xml::{ParserConfig, Warning, parse_str};
//!
//! let xml = r#"<molpro xmlns="http://www.molpro.net/schema/molpro-output"
//!                      xmlns:cml="http://www.xml-cml.org/schema">
//!   <platform><version major="2022" minor="3" SHA="0123abcd"/></platform>
//!   <cml:molecule>
//!     <cml:atomArray>
//!       <cml:atom id="a1" elementType="H" x3="0.0" y3="0.0" z3="0.0"/>
//!       <cml:atom id="a2" elementType="H" x3="0.0" y3="0.0" z3="0.74"/>
//!     </cml:atomArray>
//!     <cml:bondArray><cml:bond atomRefs2="a1 a2"/></cml:bondArray>
//!   </cml:molecule>
//! </molpro>"#;
//!
//! let mut warnings: Vec<Warning> = Vec::new();
//! let archive = parse_str(xml, &ParserConfig::default(), &mut warnings)?;
//!
//! assert_eq!(archive.run.program.version.as_deref(), Some("2022.3"));
//! assert_eq!(archive.run.system.atoms.labels().collect::<Vec<_>>(), ["H", "H"]);
//! assert_eq!(archive.run.system.atoms_group.index_values(), [1, 2]);
//! assert_eq!(archive.run.system.atoms_group.bond_values(), [[1, 2]]);
//! assert!(archive.result_table.is_none());
//! assert!(warnings.is_empty());
//! # Ok::<(), molpro_xml::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`xml`] — Owned element tree, loader, tag locator and markup writer
//! - [`MolproXmlParser`] and [`parse`] / [`parse_reader`] / [`parse_str`] / [`parse_into`] — Entry points
//! - [`extract()`] — Extraction over an already loaded [`Document`]
//!
//! # Data Types
//!
//! - [`ArchiveOutput`] — Everything extracted from one file
//! - [`Run`] — Program identity plus one structural [`System`]
//! - [`Program`] — Name, version and build hash
//! - [`Atoms`] / [`AtomRecord`] — Labels and positions
//! - [`AtomsGroup`] / [`AtomIndex`] / [`Bond`] — Whole-system connectivity
//! - [`ResultTable`] — Serialized result table markup

mod diagnostics;
mod extract;
mod model;
mod parser;

pub mod xml;

pub use model::archive::{ArchiveOutput, ResultTable};
pub use model::atom::{AtomRecord, Atoms};
pub use model::program::{PROGRAM_NAME, Program};
pub use model::system::{Run, System};
pub use model::topology::{AtomIndex, AtomsGroup, Bond, ParseAtomIdError, WHOLE_SYSTEM_LABEL};
pub use model::types::{LengthUnit, ParseLengthUnitError};

pub use diagnostics::{Logger, NodeDefect, NullLogger, TracingLogger, Warning, WarningKind};
pub use extract::{ParserConfig, extract};
pub use parser::{ArchiveSink, MolproXmlParser, parse, parse_into, parse_reader, parse_str};
pub use xml::{Document, Error};
