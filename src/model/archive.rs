use super::system::Run;

/// Serialized markup of a single result table, meant for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultTable {
    pub markup: String,
}

impl ResultTable {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

/// Everything extracted from one output file.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchiveOutput {
    pub run: Run,
    pub result_table: Option<ResultTable>,
}

impl ArchiveOutput {
    pub fn new(run: Run, result_table: Option<ResultTable>) -> Self {
        Self { run, result_table }
    }

    #[inline]
    pub fn has_table(&self) -> bool {
        self.result_table.is_some()
    }
}
