//! Recoverable anomalies and the collaborator that receives them.
//!
//! Extraction never fails because of the *shape* of the data: a missing
//! version node, a second result table or an atom with a broken coordinate
//! each become a [`Warning`] handed to a [`Logger`], and the affected field
//! is left empty.

use crate::model::topology::ParseAtomIdError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// An expected node or attribute is absent.
    MissingData,
    /// More data than expected; the first occurrence was used.
    AmbiguousData,
    /// A node is present but could not be decoded and was skipped.
    MalformedData,
}

/// Why a single atom or bond node could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeDefect {
    #[error("missing attribute '{0}'")]
    MissingAttribute(&'static str),

    #[error("attribute '{name}' is not a number: '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error(transparent)]
    InvalidAtomId(#[from] ParseAtomIdError),

    #[error("expected two atom references, found {0}")]
    ReferenceCount(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("no version node found; program version left unset")]
    MissingVersion,

    #[error("version node lacks attribute(s) {}; program version left unset", .attributes.join(", "))]
    MissingVersionAttributes { attributes: Vec<&'static str> },

    #[error("version node lacks attribute '{attribute}'; build identifier left unset")]
    MissingBuildHash { attribute: &'static str },

    #[error("found {count} result tables; keeping the first and dropping the rest")]
    MultipleTables { count: usize },

    #[error("skipping atom node #{ordinal}: {defect}")]
    MalformedAtom { ordinal: usize, defect: NodeDefect },

    #[error("skipping bond node #{ordinal}: {defect}")]
    MalformedBond { ordinal: usize, defect: NodeDefect },
}

impl Warning {
    pub fn kind(&self) -> WarningKind {
        match self {
            Warning::MissingVersion
            | Warning::MissingVersionAttributes { .. }
            | Warning::MissingBuildHash { .. } => WarningKind::MissingData,
            Warning::MultipleTables { .. } => WarningKind::AmbiguousData,
            Warning::MalformedAtom { .. } | Warning::MalformedBond { .. } => {
                WarningKind::MalformedData
            }
        }
    }
}

/// Receives warnings raised while extracting one document.
pub trait Logger {
    fn warn(&mut self, warning: Warning);
}

impl Logger for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn warn(&mut self, warning: Warning) {
        (**self).warn(warning);
    }
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn warn(&mut self, warning: Warning) {
        tracing::warn!(kind = ?warning.kind(), "{warning}");
    }
}

/// Discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn warn(&mut self, _warning: Warning) {}
}
