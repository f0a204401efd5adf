use super::types::LengthUnit;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomRecord {
    pub label: String,
    pub position: [f64; 3],
}

impl AtomRecord {
    pub fn new(label: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// Ordered atom records sharing one length unit.
///
/// Labels and positions are both views over `records`, so the two
/// sequences can never disagree in length.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atoms {
    pub records: Vec<AtomRecord>,
    pub length_unit: LengthUnit,
}

impl Atoms {
    pub fn new(length_unit: LengthUnit) -> Self {
        Self {
            records: Vec::new(),
            length_unit,
        }
    }

    pub fn with_capacity(capacity: usize, length_unit: LengthUnit) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            length_unit,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: AtomRecord) {
        self.records.push(record);
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.label.as_str())
    }

    pub fn positions(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.records.iter().map(|r| r.position)
    }

    pub fn positions_in(&self, unit: LengthUnit) -> Vec<[f64; 3]> {
        let factor = self.length_unit.factor_to(unit);
        self.positions()
            .map(|[x, y, z]| [x * factor, y * factor, z * factor])
            .collect()
    }
}
