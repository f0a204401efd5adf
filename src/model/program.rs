pub const PROGRAM_NAME: &str = "Molpro";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub name: String,
    /// `<major>.<minor>` as written on the version node.
    pub version: Option<String>,
    /// Build hash of the program binary.
    pub version_internal: Option<String>,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            version_internal: None,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.version.is_some() && self.version_internal.is_some()
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new(PROGRAM_NAME)
    }
}
