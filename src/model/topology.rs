use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const WHOLE_SYSTEM_LABEL: &str = "all";

const ATOM_ID_PREFIX: char = 'a';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid atom id: '{0}'")]
pub struct ParseAtomIdError(String);

/// Integer atom identifier as written in the source document.
///
/// Ids look like `a12`; the first character is dropped and the rest is read
/// as an integer. Values are kept verbatim and need not be contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomIndex(pub i64);

impl AtomIndex {
    pub fn from_id(id: &str) -> Result<Self, ParseAtomIdError> {
        let mut chars = id.chars();
        chars
            .next()
            .and_then(|_| chars.as_str().parse::<i64>().ok())
            .map(AtomIndex)
            .ok_or_else(|| ParseAtomIdError(id.to_string()))
    }

    pub fn to_id(self) -> String {
        format!("{ATOM_ID_PREFIX}{}", self.0)
    }

    #[inline]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AtomIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AtomIndex {
    type Err = ParseAtomIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

/// A bond between two atoms, kept in the order the document lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bond {
    pub i: AtomIndex,
    pub j: AtomIndex,
}

impl Bond {
    pub fn new(i: AtomIndex, j: AtomIndex) -> Self {
        Self { i, j }
    }

    #[inline]
    pub fn indices(&self) -> [i64; 2] {
        [self.i.value(), self.j.value()]
    }
}

/// Bonding graph of the whole system.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomsGroup {
    pub label: String,
    pub atom_indices: Vec<AtomIndex>,
    pub bonds: Vec<Bond>,
}

impl AtomsGroup {
    pub fn whole_system() -> Self {
        Self {
            label: WHOLE_SYSTEM_LABEL.to_string(),
            atom_indices: Vec::new(),
            bonds: Vec::new(),
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atom_indices.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn index_values(&self) -> Vec<i64> {
        self.atom_indices.iter().map(|idx| idx.value()).collect()
    }

    pub fn bond_values(&self) -> Vec<[i64; 2]> {
        self.bonds.iter().map(Bond::indices).collect()
    }
}

impl Default for AtomsGroup {
    fn default() -> Self {
        Self::whole_system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn atom_index_from_id_strips_prefix() {
        assert_eq!(AtomIndex::from_id("a1").unwrap(), AtomIndex(1));
        assert_eq!(AtomIndex::from_id("a012").unwrap(), AtomIndex(12));
        assert_eq!(AtomIndex::from_id("b7").unwrap(), AtomIndex(7));
        assert_eq!("a-3".parse::<AtomIndex>().unwrap(), AtomIndex(-3));
        assert_eq!(AtomIndex::from_id("a42").unwrap().value(), 42);
    }

    #[test]
    fn atom_index_from_id_rejects_bad_ids() {
        for bad in ["", "a", "ab", "a1.5", "a 1"] {
            let err = AtomIndex::from_id(bad).unwrap_err();
            assert_eq!(err.to_string(), format!("invalid atom id: '{bad}'"));
        }
    }

    #[test]
    fn atom_index_handles_multibyte_prefix() {
        assert_eq!(AtomIndex::from_id("α4").unwrap(), AtomIndex(4));
    }

    #[test]
    fn bond_keeps_document_order() {
        let bond = Bond::new(AtomIndex(5), AtomIndex(2));
        assert_eq!(bond.indices(), [5, 2]);
    }

    #[test]
    fn whole_system_group_starts_empty() {
        let group = AtomsGroup::default();
        assert_eq!(group.label, "all");
        assert_eq!(group.atom_count(), 0);
        assert_eq!(group.bond_count(), 0);
        assert!(group.bond_values().is_empty());
    }

    proptest! {
        #[test]
        fn atom_id_round_trips(n in any::<i64>()) {
            let index = AtomIndex(n);
            prop_assert_eq!(AtomIndex::from_id(&index.to_id()), Ok(index));
        }
    }
}
