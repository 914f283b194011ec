use serde::Serialize;

/// Outcome of checking a submitted form for required fields.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequiredFieldsResult {
    pub passed: bool,
    /// Labels of the required fields that were empty, in form order.
    pub missing: Vec<&'static str>,
}

impl RequiredFieldsResult {
    /// "First Name, Email" style list for notices.
    pub fn missing_list(&self) -> String {
        self.missing.join(", ")
    }
}

/// A value counts as present when it has at least one non-whitespace character.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks `(label, value)` pairs and reports every blank one.
pub fn require_fields(fields: &[(&'static str, &str)]) -> RequiredFieldsResult {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(label, _)| *label)
        .collect();

    RequiredFieldsResult {
        passed: missing.is_empty(),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present_passes() {
        let r = require_fields(&[("Email", "a@b.c"), ("Password", "pw")]);
        assert!(r.passed);
        assert!(r.missing.is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let r = require_fields(&[("Name", "  \t"), ("Email", "a@b.c")]);
        assert!(!r.passed);
        assert_eq!(r.missing, vec!["Name"]);
    }

    #[test]
    fn test_missing_list_keeps_form_order() {
        let r = require_fields(&[("First Name", ""), ("Last Name", "X"), ("Phone", "")]);
        assert_eq!(r.missing_list(), "First Name, Phone");
    }

    #[test]
    fn test_no_fields_passes() {
        assert!(require_fields(&[]).passed);
    }
}
