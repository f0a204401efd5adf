use std::io::{self, Write};
use std::path::Path;

use anyhow::Error;
use molpro_xml::ArchiveOutput;

const INDENT: &str = "   ";
const KEY_WIDTH: usize = 16;

pub fn print_summary(path: &Path, archive: &ArchiveOutput, show_table: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let program = &archive.run.program;
    let system = &archive.run.system;

    let rows = [
        ("Program", program.name.clone()),
        ("Version", or_unset(program.version.as_deref())),
        ("Build", or_unset(program.version_internal.as_deref())),
        ("Atoms", system.atom_count().to_string()),
        ("Bonds", system.bond_count().to_string()),
        ("Length unit", system.atoms.length_unit.to_string()),
        ("Formula", formula(archive)),
        (
            "Result table",
            if archive.has_table() { "present" } else { "absent" }.to_string(),
        ),
    ];

    writeln!(out, "{}", path.display())?;
    for (key, value) in rows {
        writeln!(out, "{INDENT}{key:<KEY_WIDTH$} {value}")?;
    }

    if show_table {
        if let Some(table) = &archive.result_table {
            writeln!(out)?;
            writeln!(out, "{}", table.markup)?;
        }
    }
    writeln!(out)
}

fn or_unset(value: Option<&str>) -> String {
    value.unwrap_or("(unset)").to_string()
}

/// Element counts in order of first appearance, e.g. `O1 H2`.
fn formula(archive: &ArchiveOutput) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in archive.run.system.atoms.labels() {
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }
    if counts.is_empty() {
        return "-".to_string();
    }
    counts
        .iter()
        .map(|(label, n)| format!("{label}{n}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr, "error: {err}");
    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "  caused by: {cause}");
    }
}
