//! Free-text search over listing headlines and descriptions.

/// Case-insensitive substring search term.
///
/// A listing matches when its title (or pet name) or its description contains
/// the term, ignoring case. Blank input yields no term at all, which callers
/// treat as "no search filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Builds a search term, returning `None` for blank input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            raw: trimmed.to_owned(),
            folded: trimmed.to_lowercase(),
        })
    }

    /// Returns the trimmed term as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` when either field contains the term, ignoring case.
    #[must_use]
    pub fn matches(&self, title: &str, description: &str) -> bool {
        title.to_lowercase().contains(&self.folded)
            || description.to_lowercase().contains(&self.folded)
    }

    /// Returns an `ILIKE` pattern matching the term literally anywhere.
    ///
    /// `%`, `_` and `\` are escaped with a backslash, the default `ILIKE`
    /// escape character in `PostgreSQL`.
    #[must_use]
    pub fn ilike_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.raw.len() + 2);
        pattern.push('%');
        for ch in self.raw.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

/// Normalises a filter selection from a query string.
///
/// Blank values and the catch-all `all` mean "no filter" and yield `None`.
#[must_use]
pub fn filter_choice(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}
