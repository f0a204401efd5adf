use std::process::ExitCode;

use anyhow::Context;
use molpro_xml::{ArchiveOutput, MolproXmlParser, TracingLogger};
use tracing_subscriber::EnvFilter;

mod cli;
mod display;

fn main() -> ExitCode {
    let cli = cli::parse();
    init_tracing(cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let fallback = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &cli::Cli) -> anyhow::Result<()> {
    let parser = MolproXmlParser::new(cli.parser_config());
    let mut logger = TracingLogger;
    let mut archives: Vec<ArchiveOutput> = Vec::with_capacity(cli.inputs.len());

    for input in &cli.inputs {
        let _span = tracing::warn_span!("file", path = %input.display()).entered();
        parser
            .parse_into(input, &mut archives, &mut logger)
            .with_context(|| format!("failed to parse '{}'", input.display()))?;
    }

    if cli.quiet {
        return Ok(());
    }
    for (input, archive) in cli.inputs.iter().zip(&archives) {
        display::print_summary(input, archive, cli.show_table)
            .context("failed to write summary")?;
    }
    Ok(())
}
