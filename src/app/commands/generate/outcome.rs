use crate::domain::DevContainerDocument;

/// Result of one generation session.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// The document was written to `path` (relative to the working directory).
    Written { path: String, document: DevContainerDocument, warnings: Vec<String> },
    /// The user declined the write. Nothing was touched.
    Cancelled,
}

impl GenerateOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, GenerateOutcome::Written { .. })
    }
}
