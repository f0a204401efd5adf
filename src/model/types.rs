use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported length unit: '{0}'")]
pub struct ParseLengthUnitError(String);

const BOHR_IN_METERS: f64 = 5.291_772_109_03e-11;

/// Length unit attached to a whole position collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    #[default]
    Angstrom,
    Bohr,
    Nanometer,
    Meter,
}

impl LengthUnit {
    pub fn meters(&self) -> f64 {
        match self {
            LengthUnit::Angstrom => 1e-10,
            LengthUnit::Bohr => BOHR_IN_METERS,
            LengthUnit::Nanometer => 1e-9,
            LengthUnit::Meter => 1.0,
        }
    }

    /// Multiplier that converts a length in `self` into `target`.
    #[inline]
    pub fn factor_to(&self, target: LengthUnit) -> f64 {
        if *self == target {
            1.0
        } else {
            self.meters() / target.meters()
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Angstrom => "Å",
            LengthUnit::Bohr => "bohr",
            LengthUnit::Nanometer => "nm",
            LengthUnit::Meter => "m",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = ParseLengthUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "angstrom" | "ang" | "a" | "å" => Ok(LengthUnit::Angstrom),
            "bohr" | "au" | "a0" => Ok(LengthUnit::Bohr),
            "nanometer" | "nm" => Ok(LengthUnit::Nanometer),
            "meter" | "m" => Ok(LengthUnit::Meter),
            _ => Err(ParseLengthUnitError(s.to_string())),
        }
    }
}
