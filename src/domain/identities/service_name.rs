use super::validation::{fold_separators, validate_identifier};
use crate::domain::AppError;

/// A normalized service identifier.
///
/// Guarantees:
/// - Camel-case folded (no spaces, hyphens, or underscores between words)
/// - Starts with a letter, `_` or `$`
/// - Contains only alphanumerics, `_` or `$`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    /// Normalize raw operator input into a service identifier.
    ///
    /// Normalizing an already-normalized name returns it unchanged.
    pub fn normalize(raw: &str) -> Result<Self, AppError> {
        let folded = fold_separators(raw.trim());
        if validate_identifier(&folded) {
            Ok(Self(folded))
        } else {
            Err(AppError::InvalidName(raw.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for ServiceName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_name_is_unchanged() {
        assert_eq!(ServiceName::normalize("billing").unwrap().as_str(), "billing");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(ServiceName::normalize("  billing \t").unwrap().as_str(), "billing");
    }

    #[test]
    fn separators_fold_to_camel_case() {
        let name = ServiceName::normalize("prior auth-connect").unwrap();
        assert_eq!(name.as_str(), "priorAuthConnect");
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(ServiceName::normalize(""), Err(AppError::InvalidName(_))));
        assert!(matches!(ServiceName::normalize("   "), Err(AppError::InvalidName(_))));
    }

    #[test]
    fn separator_only_name_is_invalid() {
        assert!(matches!(ServiceName::normalize("-_-"), Err(AppError::InvalidName(_))));
    }

    #[test]
    fn traversal_is_invalid() {
        assert!(ServiceName::normalize("../etc").is_err());
        assert!(ServiceName::normalize("a/b").is_err());
    }

    #[test]
    fn display_impl() {
        let name = ServiceName::normalize("user api").unwrap();
        assert_eq!(format!("{}", name), "userApi");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "[ _-]{0,2}[a-zA-Z][a-zA-Z0-9 _-]{0,24}") {
            let once = ServiceName::normalize(&raw).unwrap();
            let twice = ServiceName::normalize(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalized_names_have_no_separators(raw in "[a-z][a-z0-9 _-]{0,24}") {
            let name = ServiceName::normalize(&raw).unwrap();
            prop_assert!(!name.contains([' ', '-', '_']));
        }
    }
}
