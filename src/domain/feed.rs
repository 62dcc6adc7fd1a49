use crate::domain::Entry;

/// A titled, ordered collection of entries from one source.
///
/// Immutable after fetch; a refresh replaces the whole snapshot rather than
/// patching it in place.
#[derive(Debug, Clone)]
pub struct Feed {
    pub title: String,
    pub source: String,
    pub entries: Vec<Entry>,
}

impl Feed {
    /// Number of entries actually shown once the `-n` cap is applied.
    pub fn effective_count(&self, limit: Option<usize>) -> usize {
        match limit {
            Some(n) => n.min(self.entries.len()),
            None => self.entries.len(),
        }
    }
}
