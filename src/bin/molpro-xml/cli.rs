use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use molpro_xml::{LengthUnit, ParserConfig};

#[derive(Parser)]
#[command(
    name = "molpro-xml",
    about = "Summarize Molpro XML output files",
    version,
    author
)]
pub struct Cli {
    /// Molpro XML output file(s)
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Unit the coordinates in the file are written in
    #[arg(long, value_name = "UNIT", default_value = "angstrom")]
    pub unit: UnitArg,

    /// Skip result table extraction
    #[arg(long, conflicts_with = "show_table")]
    pub no_table: bool,

    /// Print the serialized result table
    #[arg(long)]
    pub show_table: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UnitArg {
    /// Ångström (Molpro's CML default)
    #[value(alias = "ang")]
    Angstrom,
    /// Bohr radius
    #[value(alias = "au")]
    Bohr,
    /// Nanometer
    #[value(alias = "nm")]
    Nanometer,
    /// Meter
    #[value(alias = "m")]
    Meter,
}

impl From<UnitArg> for LengthUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Angstrom => LengthUnit::Angstrom,
            UnitArg::Bohr => LengthUnit::Bohr,
            UnitArg::Nanometer => LengthUnit::Nanometer,
            UnitArg::Meter => LengthUnit::Meter,
        }
    }
}

impl Cli {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            length_unit: self.unit.into(),
            extract_table: !self.no_table,
            ..Default::default()
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
