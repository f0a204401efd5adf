use super::context::ExtractionContext;
use crate::diagnostics::{Logger, NodeDefect, Warning};
use crate::model::atom::{AtomRecord, Atoms};
use crate::model::topology::{AtomIndex, AtomsGroup, Bond};
use crate::xml::{Element, find_tags};

const ATOM_TAG: &str = "atom";
const BOND_TAG: &str = "bond";

const ID_ATTR: &str = "id";
const ELEMENT_ATTR: &str = "elementType";
const COORD_ATTRS: [&str; 3] = ["x3", "y3", "z3"];
const BOND_REFS_ATTR: &str = "atomRefs2";

#[derive(Debug, Clone, PartialEq)]
pub struct ScannedAtom {
    pub index: AtomIndex,
    pub record: AtomRecord,
}

pub fn scan_atoms(root: &Element, logger: &mut dyn Logger) -> Vec<ScannedAtom> {
    let nodes = find_tags(ATOM_TAG, root);
    let mut scanned = Vec::with_capacity(nodes.len());

    for (ordinal, node) in nodes.into_iter().enumerate() {
        match decode_atom(node) {
            Ok(atom) => scanned.push(atom),
            Err(defect) => logger.warn(Warning::MalformedAtom { ordinal, defect }),
        }
    }

    scanned
}

pub fn extract_atoms(ctx: &ExtractionContext<'_>, logger: &mut dyn Logger) -> Atoms {
    let scan = ctx.atom_scan(logger);
    let mut atoms = Atoms::with_capacity(scan.len(), ctx.config.length_unit);
    for atom in scan {
        atoms.push(atom.record.clone());
    }
    atoms
}

pub fn extract_connectivity(ctx: &ExtractionContext<'_>, logger: &mut dyn Logger) -> AtomsGroup {
    let mut group = AtomsGroup::whole_system();
    group.atom_indices = ctx.atom_scan(logger).iter().map(|a| a.index).collect();

    for (ordinal, node) in find_tags(BOND_TAG, ctx.document.root())
        .into_iter()
        .enumerate()
    {
        match decode_bond(node) {
            Ok(bond) => group.bonds.push(bond),
            Err(defect) => logger.warn(Warning::MalformedBond { ordinal, defect }),
        }
    }

    group
}

fn decode_atom(node: &Element) -> Result<ScannedAtom, NodeDefect> {
    let index = AtomIndex::from_id(required(node, ID_ATTR)?)?;
    let label = required(node, ELEMENT_ATTR)?;
    let [x, y, z] = COORD_ATTRS;
    let position = [
        coordinate(node, x)?,
        coordinate(node, y)?,
        coordinate(node, z)?,
    ];

    Ok(ScannedAtom {
        index,
        record: AtomRecord::new(label, position),
    })
}

fn decode_bond(node: &Element) -> Result<Bond, NodeDefect> {
    let refs: Vec<&str> = required(node, BOND_REFS_ATTR)?.split_whitespace().collect();
    let [first, second] = refs.as_slice() else {
        return Err(NodeDefect::ReferenceCount(refs.len()));
    };
    Ok(Bond::new(
        AtomIndex::from_id(first)?,
        AtomIndex::from_id(second)?,
    ))
}

fn required<'a>(node: &'a Element, name: &'static str) -> Result<&'a str, NodeDefect> {
    node.attribute(name)
        .ok_or(NodeDefect::MissingAttribute(name))
}

fn coordinate(node: &Element, name: &'static str) -> Result<f64, NodeDefect> {
    let raw = required(node, name)?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| NodeDefect::InvalidNumber {
            name,
            value: raw.to_string(),
        })
}
