use crate::diagnostics::Logger;
use crate::extract::{ParserConfig, extract};
use crate::model::archive::ArchiveOutput;
use crate::xml::{Document, Error};
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

/// Host-side destination for finished archives.
pub trait ArchiveSink {
    fn accept(&mut self, archive: ArchiveOutput);
}

impl ArchiveSink for Vec<ArchiveOutput> {
    fn accept(&mut self, archive: ArchiveOutput) {
        self.push(archive);
    }
}

/// Parses the Molpro XML file at `path`.
///
/// Unreadable or ill-formed input is the only failure; everything else
/// degrades to a partial [`ArchiveOutput`] plus warnings sent to `logger`.
pub fn parse(
    path: impl AsRef<Path>,
    config: &ParserConfig,
    logger: &mut dyn Logger,
) -> Result<ArchiveOutput, Error> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("parse", path = %path.display()).entered();
    let document = Document::from_path(path)?;
    Ok(extract(&document, config, logger))
}

pub fn parse_reader<R: BufRead>(
    reader: R,
    config: &ParserConfig,
    logger: &mut dyn Logger,
) -> Result<ArchiveOutput, Error> {
    let document = Document::from_reader(reader)?;
    Ok(extract(&document, config, logger))
}

pub fn parse_str(
    xml: &str,
    config: &ParserConfig,
    logger: &mut dyn Logger,
) -> Result<ArchiveOutput, Error> {
    let document = Document::from_str(xml)?;
    Ok(extract(&document, config, logger))
}

/// Parses `path` and hands the archive to `sink`. Nothing reaches the sink
/// when loading fails.
pub fn parse_into(
    path: impl AsRef<Path>,
    config: &ParserConfig,
    sink: &mut dyn ArchiveSink,
    logger: &mut dyn Logger,
) -> Result<(), Error> {
    let archive = parse(path, config, logger)?;
    sink.accept(archive);
    Ok(())
}

/// Reusable parser bound to one [`ParserConfig`].
///
/// Holds no per-file state, so one instance can serve any number of files
/// and be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MolproXmlParser {
    config: ParserConfig,
}

impl MolproXmlParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, path: impl AsRef<Path>, logger: &mut dyn Logger) -> Result<ArchiveOutput, Error> {
        parse(path, &self.config, logger)
    }

    pub fn parse_reader<R: BufRead>(&self, reader: R, logger: &mut dyn Logger) -> Result<ArchiveOutput, Error> {
        parse_reader(reader, &self.config, logger)
    }

    pub fn parse_str(&self, xml: &str, logger: &mut dyn Logger) -> Result<ArchiveOutput, Error> {
        parse_str(xml, &self.config, logger)
    }

    pub fn parse_into(
        &self,
        path: impl AsRef<Path>,
        sink: &mut dyn ArchiveSink,
        logger: &mut dyn Logger,
    ) -> Result<(), Error> {
        parse_into(path, &self.config, sink, logger)
    }
}
