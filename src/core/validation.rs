//! Declarative validation rules for cat input
//!
//! The rule set is a small ordered table of (field, check) pairs evaluated by
//! [`validate`], which returns a mapping from field name to the list of
//! human-readable messages for every rule that field failed. An empty mapping
//! means the candidate is valid. The validator itself never fails.
//!
//! The same rules apply to create and update; there is no relaxed
//! partial-update mode.

use crate::core::cat::CatParams;
use indexmap::IndexMap;
use serde::Serialize;

/// Message attached to a field that is missing, null, or whitespace-only
pub const BLANK_MESSAGE: &str = "can't be blank";

/// Minimum number of characters required in `enjoys`
pub const ENJOYS_MIN_LENGTH: usize = 10;

/// A single check a rule applies to its field
#[derive(Debug, Clone, Copy)]
enum Check {
    /// Field must be non-blank
    Presence,
    /// Text field must contain at least this many characters.
    ///
    /// A blank text field counts as length 0, so it fails this check in
    /// addition to `Presence`; both messages are reported.
    MinLength(usize),
}

struct Rule {
    field: &'static str,
    check: Check,
}

// Declaration order fixes both the field order in the violation mapping and
// the message order within a field (presence before length for `enjoys`).
const RULES: &[Rule] = &[
    Rule { field: "name", check: Check::Presence },
    Rule { field: "age", check: Check::Presence },
    Rule { field: "enjoys", check: Check::Presence },
    Rule { field: "image", check: Check::Presence },
    Rule { field: "enjoys", check: Check::MinLength(ENJOYS_MIN_LENGTH) },
];

/// A candidate field value as seen by the checks
enum FieldValue<'a> {
    Text(Option<&'a str>),
    Number(Option<i64>),
}

impl FieldValue<'_> {
    /// Blank means missing, null, or (for text) empty after trimming
    fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.is_none_or(|s| s.trim().is_empty()),
            FieldValue::Number(value) => value.is_none(),
        }
    }

    /// Character count for text fields; `None` for non-text fields so that
    /// length checks pass through them.
    fn char_len(&self) -> Option<usize> {
        match self {
            FieldValue::Text(value) => Some(value.map_or(0, |s| s.chars().count())),
            FieldValue::Number(_) => None,
        }
    }
}

fn field_value<'a>(params: &'a CatParams, field: &str) -> FieldValue<'a> {
    match field {
        "name" => FieldValue::Text(params.name.as_deref()),
        "age" => FieldValue::Number(params.age),
        "enjoys" => FieldValue::Text(params.enjoys.as_deref()),
        "image" => FieldValue::Text(params.image.as_deref()),
        _ => FieldValue::Text(None),
    }
}

/// Mapping from field name to the ordered messages for every failed rule.
///
/// Serializes transparently as `{"<field>": ["<message>", ...]}` with only
/// offending fields present, which is exactly the 422 response body.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Violations(IndexMap<&'static str, Vec<String>>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field; empty when the field passed all rules
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Fields that failed at least one rule, in rule-declaration order
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    fn add(&mut self, field: &'static str, message: String) {
        self.0.entry(field).or_default().push(message);
    }
}

/// Check a candidate against the rule table.
///
/// Returns the violation mapping; an empty mapping means valid.
pub fn validate(params: &CatParams) -> Violations {
    let mut violations = Violations::default();

    for rule in RULES {
        let value = field_value(params, rule.field);
        match rule.check {
            Check::Presence => {
                if value.is_blank() {
                    violations.add(rule.field, BLANK_MESSAGE.to_string());
                }
            }
            Check::MinLength(min) => {
                if let Some(len) = value.char_len() {
                    if len < min {
                        violations.add(
                            rule.field,
                            format!("is too short (minimum is {min} characters)"),
                        );
                    }
                }
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cat::CatParams;
    use serde_json::json;

    fn valid_params() -> CatParams {
        CatParams::new("Felix", 2, "Walks in the park", "https://cats.example/felix.jpg")
    }

    #[test]
    fn test_valid_params_produce_empty_mapping() {
        let violations = validate(&valid_params());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_missing_name_is_blank() {
        let mut params = valid_params();
        params.name = None;

        let violations = validate(&params);
        assert_eq!(violations.messages("name"), [BLANK_MESSAGE]);
        assert!(violations.messages("age").is_empty());
    }

    #[test]
    fn test_missing_age_is_blank() {
        let mut params = valid_params();
        params.age = None;

        let violations = validate(&params);
        assert_eq!(violations.messages("age"), [BLANK_MESSAGE]);
    }

    #[test]
    fn test_missing_image_is_blank() {
        let mut params = valid_params();
        params.image = None;

        let violations = validate(&params);
        assert_eq!(violations.messages("image"), [BLANK_MESSAGE]);
    }

    #[test]
    fn test_whitespace_only_text_is_blank() {
        let mut params = valid_params();
        params.name = Some("   ".to_string());

        let violations = validate(&params);
        assert_eq!(violations.messages("name"), [BLANK_MESSAGE]);
    }

    #[test]
    fn test_short_enjoys_fails_length_only() {
        let mut params = valid_params();
        params.enjoys = Some("Walks".to_string());

        let violations = validate(&params);
        assert_eq!(
            violations.messages("enjoys"),
            ["is too short (minimum is 10 characters)"]
        );
    }

    #[test]
    fn test_blank_enjoys_fails_presence_then_length() {
        let mut params = valid_params();
        params.enjoys = Some(String::new());

        let violations = validate(&params);
        assert_eq!(
            violations.messages("enjoys"),
            [BLANK_MESSAGE, "is too short (minimum is 10 characters)"]
        );
    }

    #[test]
    fn test_enjoys_exactly_ten_characters_passes_length() {
        let mut params = valid_params();
        params.enjoys = Some("0123456789".to_string());

        let violations = validate(&params);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_all_blank_reports_every_field_in_rule_order() {
        let violations = validate(&CatParams::default());

        let fields: Vec<_> = violations.fields().collect();
        assert_eq!(fields, ["name", "age", "enjoys", "image"]);
        for field in ["name", "age", "enjoys", "image"] {
            assert!(violations.messages(field).contains(&BLANK_MESSAGE.to_string()));
        }
    }

    #[test]
    fn test_serializes_as_bare_mapping() {
        let mut params = valid_params();
        params.name = None;

        let violations = validate(&params);
        let value = serde_json::to_value(&violations).unwrap();
        assert_eq!(value, json!({"name": ["can't be blank"]}));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut params = valid_params();
        // 9 characters, more than 10 bytes
        params.enjoys = Some("ééééééééé".to_string());

        let violations = validate(&params);
        assert_eq!(
            violations.messages("enjoys"),
            ["is too short (minimum is 10 characters)"]
        );
    }
}
