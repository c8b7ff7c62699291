//! The page's execution environment.
//!
//! Control flow depends on two facts about the page (its URL path and whether
//! it runs in the top-level browsing context) and produces one side effect
//! (full-page navigation). [`Environment`] is that boundary; the classifier
//! only ever sees an [`EnvironmentSnapshot`].

/// Facts about the current page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    /// The current URL path, e.g. "/auth".
    pub path: String,
    /// True when this window is the top-level browsing context
    /// (not an iframe or a popup's nested frame).
    pub is_top_level: bool,
}

impl EnvironmentSnapshot {
    /// Snapshot of a top-level window at `path`.
    #[must_use]
    pub fn top_level(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_top_level: true,
        }
    }

    /// Snapshot of a nested frame at `path`.
    #[must_use]
    pub fn framed(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_top_level: false,
        }
    }
}

/// Access to the hosting page.
pub trait Environment {
    /// Captures the current path and framing relationship.
    fn snapshot(&self) -> EnvironmentSnapshot;

    /// Performs a full-page navigation to `uri`. The current page is abandoned.
    fn navigate(&self, uri: &str);
}
