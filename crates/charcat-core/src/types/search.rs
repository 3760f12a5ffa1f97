//! Name search term.

/// A user-supplied search string matched case-insensitively against names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    /// Lowercased `raw`.
    folded: String,
}

impl SearchTerm {
    /// Create a search term from user input.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// The term exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the term is empty, which matches every name.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether `name` contains this term, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        name.to_lowercase().contains(&self.folded)
    }
}

impl From<&str> for SearchTerm {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SearchTerm {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
