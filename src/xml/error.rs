use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("XML syntax error at byte {position}: {source}")]
    Xml {
        position: u64,
        source: quick_xml::Error,
    },

    #[error("malformed XML document at byte {position}: {details}")]
    Malformed { position: u64, details: String },
}

impl Error {
    pub fn xml(position: u64, source: quick_xml::Error) -> Self {
        Self::Xml { position, source }
    }

    pub fn malformed(position: u64, details: impl Into<String>) -> Self {
        Self::Malformed {
            position,
            details: details.into(),
        }
    }
}
