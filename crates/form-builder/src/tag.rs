// File: form-builder/src/tag.rs
// Purpose: Parsing of `key=value;key=value` form tags

use crate::error::{FormError, Result};
use crate::field::Field;

/// Overrides parsed from a member's form tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub label: Option<String>,
    pub name: Option<String>,
    pub field_type: Option<String>,
    pub placeholder: Option<String>,
}

impl Tag {
    /// Parse the raw tag attached to `member`
    ///
    /// A missing or empty tag yields no overrides. Each `;`-separated clause
    /// must split into exactly one key and one value on `=`. Values are kept
    /// verbatim, spaces included. A repeated key keeps its last value.
    ///
    /// Unknown keys are ignored unless `strict` is set.
    pub fn parse(member: &str, raw: Option<&str>, strict: bool) -> Result<Self> {
        let mut tag = Tag::default();
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(tag),
        };

        for clause in raw.split(';') {
            let (key, value) = split_clause(clause).ok_or_else(|| FormError::MalformedTag {
                member: member.to_string(),
                clause: clause.to_string(),
            })?;

            match key {
                "label" => tag.label = Some(value.to_string()),
                "name" => tag.name = Some(value.to_string()),
                "type" => tag.field_type = Some(value.to_string()),
                "placeholder" => tag.placeholder = Some(value.to_string()),
                _ if strict => {
                    return Err(FormError::UnknownTagKey {
                        member: member.to_string(),
                        key: key.to_string(),
                    })
                }
                _ => tracing::warn!(member, key, "ignoring unknown form tag key"),
            }
        }

        Ok(tag)
    }

    /// Replace the matching attributes of `field` with the tag's values
    pub fn apply(self, field: &mut Field) {
        if let Some(label) = self.label {
            field.label = label;
        }
        // Replaces the whole dotted path, ancestor prefix included.
        if let Some(name) = self.name {
            field.name = name;
        }
        if let Some(field_type) = self.field_type {
            field.field_type = field_type;
        }
        if let Some(placeholder) = self.placeholder {
            field.placeholder = placeholder;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Tag::default()
    }
}

fn split_clause(clause: &str) -> Option<(&str, &str)> {
    let mut parts = clause.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Some((key, value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_absent_and_empty_tags() {
        assert!(Tag::parse("Name", None, false).unwrap().is_empty());
        assert!(Tag::parse("Name", Some(""), true).unwrap().is_empty());
    }

    #[test]
    fn test_all_keys() {
        let tag = Tag::parse(
            "Email",
            Some("label=Email Address;name=email;type=email;placeholder=you@example.com"),
            true,
        )
        .unwrap();

        assert_eq!(
            tag,
            Tag {
                label: Some("Email Address".to_string()),
                name: Some("email".to_string()),
                field_type: Some("email".to_string()),
                placeholder: Some("you@example.com".to_string()),
            }
        );
    }

    #[test]
    fn test_values_keep_spaces() {
        let tag = Tag::parse("Name", Some("label= Full Name "), false).unwrap();
        assert_eq!(tag.label.as_deref(), Some(" Full Name "));
    }

    #[test]
    fn test_last_repeated_key_wins() {
        let tag = Tag::parse("Name", Some("label=First;label=Second"), false).unwrap();
        assert_eq!(tag.label.as_deref(), Some("Second"));
    }

    #[rstest]
    #[case("label")]
    #[case("label=a=b")]
    #[case("label=Name;")]
    #[case(";type=email")]
    #[case("label=Name;;type=email")]
    fn test_malformed_clauses(#[case] raw: &str) {
        let err = Tag::parse("Name", Some(raw), false).unwrap_err();
        assert!(matches!(err, FormError::MalformedTag { ref member, .. } if member == "Name"));
    }

    #[test]
    fn test_unknown_key_lenient() {
        let tag = Tag::parse("Name", Some("id=name-input;label=Name"), false).unwrap();
        assert_eq!(tag.label.as_deref(), Some("Name"));
    }

    #[test]
    fn test_unknown_key_strict() {
        let err = Tag::parse("Name", Some("label=Name;id=name-input"), true).unwrap_err();
        assert!(matches!(err, FormError::UnknownTagKey { ref key, .. } if key == "id"));
    }

    #[test]
    fn test_apply_overrides_only_tagged_attributes() {
        let mut field = Field {
            label: "Name".to_string(),
            name: "User.Name".to_string(),
            field_type: "text".to_string(),
            placeholder: "Name".to_string(),
            ..Field::default()
        };
        Tag::parse("Name", Some("name=full_name;type=search"), false)
            .unwrap()
            .apply(&mut field);

        assert_eq!(field.label, "Name");
        assert_eq!(field.name, "full_name");
        assert_eq!(field.field_type, "search");
        assert_eq!(field.placeholder, "Name");
    }
}
