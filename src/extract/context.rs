use super::config::ParserConfig;
use super::structure::{self, ScannedAtom};
use crate::diagnostics::Logger;
use crate::xml::Document;
use std::cell::OnceCell;

/// State shared by the extractors during a single parse call.
///
/// A fresh context is built for every document, so the memoized atom scan
/// can never leak from one file into another.
pub struct ExtractionContext<'a> {
    pub document: &'a Document,
    pub config: &'a ParserConfig,
    atom_scan: OnceCell<Vec<ScannedAtom>>,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(document: &'a Document, config: &'a ParserConfig) -> Self {
        Self {
            document,
            config,
            atom_scan: OnceCell::new(),
        }
    }

    /// Decoded atom nodes, computed on first use. Warnings for skipped
    /// nodes are raised only on that first call.
    pub fn atom_scan(&self, logger: &mut dyn Logger) -> &[ScannedAtom] {
        self.atom_scan
            .get_or_init(|| structure::scan_atoms(self.document.root(), logger))
    }
}
