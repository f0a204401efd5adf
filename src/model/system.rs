use super::atom::Atoms;
use super::program::Program;
use super::topology::AtomsGroup;

/// One structural snapshot: atom records plus the whole-system bonding graph.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct System {
    pub atoms: Atoms,
    pub atoms_group: AtomsGroup,
}

impl System {
    pub fn new(atoms: Atoms, atoms_group: AtomsGroup) -> Self {
        Self { atoms, atoms_group }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.atoms_group.bond_count()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    pub program: Program,
    pub system: System,
}
