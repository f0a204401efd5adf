use super::context::ExtractionContext;
use crate::diagnostics::{Logger, Warning};
use crate::model::program::Program;
use crate::xml::find_tag;

const VERSION_TAG: &str = "version";
const MAJOR_ATTR: &str = "major";
const MINOR_ATTR: &str = "minor";
const BUILD_HASH_ATTR: &str = "SHA";

pub fn extract_program(ctx: &ExtractionContext<'_>, logger: &mut dyn Logger) -> Program {
    let mut program = Program::new(ctx.config.program_name.as_str());

    let Some(node) = find_tag(VERSION_TAG, ctx.document.root()) else {
        logger.warn(Warning::MissingVersion);
        return program;
    };

    match (node.attribute(MAJOR_ATTR), node.attribute(MINOR_ATTR)) {
        (Some(major), Some(minor)) => program.version = Some(format!("{major}.{minor}")),
        (major, minor) => {
            let attributes = [(MAJOR_ATTR, major), (MINOR_ATTR, minor)]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| name)
                .collect();
            logger.warn(Warning::MissingVersionAttributes { attributes });
        }
    }

    match node.attribute(BUILD_HASH_ATTR) {
        Some(sha) => program.version_internal = Some(sha.to_string()),
        None => logger.warn(Warning::MissingBuildHash {
            attribute: BUILD_HASH_ATTR,
        }),
    }

    program
}
