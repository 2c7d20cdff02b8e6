/// Static set of admin email addresses.
///
/// Parsed once from configuration; membership is checked on every auth-state
/// transition, not only at login, so a persisted non-admin session can never
/// slip through.
#[derive(Debug, Clone, Default)]
pub struct AdminAllowList {
    emails: Vec<String>,
}

impl AdminAllowList {
    /// Builds the list from a comma-separated string, trimming whitespace
    /// and lowercasing. Empty segments are dropped.
    pub fn from_csv(raw: &str) -> Self {
        let emails = raw
            .split(',')
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { emails }
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, email: &str) -> bool {
        let needle = email.trim().to_lowercase();
        self.emails.iter().any(|e| e == &needle)
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }
}
