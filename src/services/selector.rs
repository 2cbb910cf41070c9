use crate::domain::constants::{FIRST_NODE, SECOND_NODE};
use crate::domain::models::{ManifestDocument, ManifestSelection};
use crate::error::LookupError;

/// Body names compare case-insensitively.
pub fn same_body(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Manifests loaded once per run, kept sorted by file name.
#[derive(Debug, Default)]
pub struct ManifestCatalog {
    documents: Vec<ManifestDocument>,
}

impl ManifestCatalog {
    pub fn new(mut documents: Vec<ManifestDocument>) -> Self {
        documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// First document, by file name, whose declared body matches.
    pub fn find_declared(&self, body: &str) -> Option<&ManifestDocument> {
        self.documents.iter().find(|doc| {
            doc.declared_body()
                .map(|declared| !declared.is_empty() && same_body(declared, body))
                .unwrap_or(false)
        })
    }

    /// Picks the manifest for `body`.
    ///
    /// The second node with no manifest of its own is served from the first
    /// node's manifest, flagged for the +180° shift.
    pub fn select(&self, body: &str) -> Result<ManifestSelection<'_>, LookupError> {
        if let Some(document) = self.find_declared(body) {
            return Ok(ManifestSelection {
                document,
                node_fallback: false,
            });
        }
        if same_body(body, SECOND_NODE) {
            if let Some(document) = self.find_declared(FIRST_NODE) {
                return Ok(ManifestSelection {
                    document,
                    node_fallback: true,
                });
            }
        }
        Err(LookupError::ManifestNotFound(body.to_string()))
    }
}
