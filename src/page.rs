//! Page and document types shared between the plugin and the host contract.

/// A route/content pair supplied programmatically to the host.
///
/// Virtual pages are not backed by an on-disk source file; the host renders
/// them as if a source document existed at `route_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualPage {
    pub route_path: String,
    pub content: String,
}

/// Lifecycle state of the remotely fetched document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentState {
    /// No fetch has completed yet.
    Pending,
    /// Fetch succeeded; holds the decoded document text.
    Ready(String),
    /// Fetch failed; the build is expected to abort.
    Failed,
}

impl DocumentState {
    /// Short label for diagnostics.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready(_) => "ready",
            Self::Failed => "failed",
        }
    }
}

/// Single-slot cache for the fetched document.
///
/// Owned exclusively by the plugin instance: written once by the pre-build
/// hook, read by every page-enumeration call afterwards. The explicit state
/// tag makes the hook ordering observable instead of assumed.
#[derive(Debug)]
pub struct RemoteDocument {
    address: String,
    state: DocumentState,
}

impl RemoteDocument {
    /// Create a pending document for `address`.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            state: DocumentState::Pending,
        }
    }

    /// The address the document is fetched from.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, DocumentState::Pending)
    }

    /// Transition `Pending` to `Ready`.
    ///
    /// The slot is single-shot: returns `false` without touching the state
    /// when the document has already been resolved.
    pub fn fulfill(&mut self, content: String) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.state = DocumentState::Ready(content);
        true
    }

    /// Transition `Pending` to `Failed`. Single-shot like [`fulfill`].
    ///
    /// [`fulfill`]: RemoteDocument::fulfill
    pub fn fail(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.state = DocumentState::Failed;
        true
    }

    /// The cached text, when the document is `Ready`.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match &self.state {
            DocumentState::Ready(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_is_pending() {
        let doc = RemoteDocument::new("https://example.com/doc.md");
        assert!(doc.is_pending());
        assert_eq!(doc.address(), "https://example.com/doc.md");
        assert_eq!(doc.content(), None);
    }

    #[test]
    fn fulfill_moves_pending_to_ready() {
        let mut doc = RemoteDocument::new("https://example.com/doc.md");
        assert!(doc.fulfill("# Hello".to_owned()));
        assert_eq!(doc.content(), Some("# Hello"));
        assert_eq!(doc.state().label(), "ready");
    }

    #[test]
    fn fail_moves_pending_to_failed() {
        let mut doc = RemoteDocument::new("https://example.com/doc.md");
        assert!(doc.fail());
        assert_eq!(*doc.state(), DocumentState::Failed);
        assert_eq!(doc.content(), None);
    }

    #[test]
    fn resolved_document_never_transitions_again() {
        let mut doc = RemoteDocument::new("https://example.com/doc.md");
        assert!(doc.fulfill("first".to_owned()));
        assert!(!doc.fulfill("second".to_owned()));
        assert!(!doc.fail());
        assert_eq!(doc.content(), Some("first"));

        let mut failed = RemoteDocument::new("https://example.com/doc.md");
        assert!(failed.fail());
        assert!(!failed.fulfill("late".to_owned()));
        assert_eq!(*failed.state(), DocumentState::Failed);
    }
}
