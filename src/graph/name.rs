use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A user's name.
///
/// Equality and hashing ignore ASCII and Unicode case, so `"Foo"` and `"foo"`
/// name the same user. The spelling given at creation is kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName {
    display: String,
}

impl UserName {
    pub fn new(name: &impl ToString) -> Self {
        Self {
            display: name.to_string(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Case-insensitive comparison against a raw name.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        fold(&self.display).eq(fold(other))
    }
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl PartialEq for UserName {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.display)
    }
}

impl Eq for UserName {}

impl Hash for UserName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in fold(&self.display) {
            c.hash(state);
        }
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<&str> for UserName {
    fn from(value: &str) -> Self {
        Self::new(&value)
    }
}

impl From<String> for UserName {
    fn from(display: String) -> Self {
        Self { display }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_ignores_case() {
        assert_eq!(UserName::from("Foo"), UserName::from("fOO"));
        assert_ne!(UserName::from("Foo"), UserName::from("Fooo"));
    }

    #[test]
    fn case_variants_collide_in_sets() {
        let set: HashSet<_> = ["Bar", "BAR", "bar"].into_iter().map(UserName::from).collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn display_keeps_given_spelling() {
        assert_eq!(UserName::from("McBaz").to_string(), "McBaz");
    }
}
