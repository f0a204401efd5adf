use crate::model::program::PROGRAM_NAME;
use crate::model::types::LengthUnit;

/// Settings for one or more parse calls.
///
/// # Examples
///
/// ```
/// use molpro_xml::{LengthUnit, ParserConfig};
///
/// let default = ParserConfig::default();
/// assert_eq!(default.program_name, "Molpro");
///
/// let custom = ParserConfig {
///     length_unit: LengthUnit::Bohr,
///     extract_table: false,
///     ..Default::default()
/// };
/// assert!(!custom.extract_table);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Name recorded on every extracted program identity.
    pub program_name: String,

    /// Unit the `x3`/`y3`/`z3` coordinates are written in.
    pub length_unit: LengthUnit,

    /// Whether to serialize the result table, if the document has one.
    pub extract_table: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            program_name: PROGRAM_NAME.to_string(),
            length_unit: LengthUnit::Angstrom,
            extract_table: true,
        }
    }
}
