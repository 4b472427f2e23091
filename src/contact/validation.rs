use std::{collections::BTreeMap, sync::LazyLock};

use regex::RegexBuilder;

use super::{ContactFormData, Field};
use crate::{locale::LocaleCode, strings::strings};

const SUBJECT_LEN: (usize, usize) = (3, 100);
const MESSAGE_LEN: (usize, usize) = (10, 1000);

static EMAIL_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
        .case_insensitive(true)
        .build()
        .expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    InvalidEmail,
    TooShort(usize),
    TooLong(usize),
}

impl ValidationError {
    pub fn message(&self, field: Field, locale: LocaleCode) -> &'static str {
        let s = strings(locale);
        match (field, self) {
            (Field::Email, Self::Required) => s.email_required,
            (Field::Email, _) => s.email_invalid,
            (Field::Subject, Self::Required) => s.subject_required,
            (Field::Subject, Self::TooLong(_)) => s.subject_max_length,
            (Field::Subject, _) => s.subject_min_length,
            (Field::Message, Self::Required) => s.message_required,
            (Field::Message, Self::TooLong(_)) => s.message_max_length,
            (Field::Message, _) => s.message_min_length,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Field name to localized message.
    pub fn messages(&self, locale: LocaleCode) -> BTreeMap<&'static str, &'static str> {
        self.0
            .iter()
            .map(|(field, err)| (field.name(), err.message(*field, locale)))
            .collect()
    }
}

fn check_length(value: &str, (min, max): (usize, usize)) -> Option<ValidationError> {
    let len = value.chars().count();
    if len < min {
        Some(ValidationError::TooShort(min))
    } else if len > max {
        Some(ValidationError::TooLong(max))
    } else {
        None
    }
}

fn check(field: Field, value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::Required);
    }
    match field {
        Field::Email if !EMAIL_PATTERN.is_match(value) => Some(ValidationError::InvalidEmail),
        Field::Email => None,
        Field::Subject => check_length(value, SUBJECT_LEN),
        Field::Message => check_length(value, MESSAGE_LEN),
    }
}

/// Checks every field and collects all errors.
pub fn validate(data: &ContactFormData) -> FieldErrors {
    FieldErrors(
        Field::all()
            .into_iter()
            .filter_map(|field| check(field, data.get(field)).map(|err| (field, err)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let errors = validate(&ContactFormData::new("a@b.co", "Hi!", "0123456789"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_bad_email_only() {
        let errors = validate(&ContactFormData::new("bad", "Hi!", "0123456789"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_all_fields_collected() {
        let errors = validate(&ContactFormData::new("", "ab", "short"));
        assert_eq!(errors.get(Field::Email), Some(ValidationError::Required));
        assert_eq!(errors.get(Field::Subject), Some(ValidationError::TooShort(3)));
        assert_eq!(errors.get(Field::Message), Some(ValidationError::TooShort(10)));
    }

    #[test]
    fn test_email_pattern() {
        for ok in ["USER@EXAMPLE.COM", "first.last+tag@sub.domain.io", "a_b%c@d-e.fg"] {
            assert!(!validate(&ContactFormData::new(ok, "Hi!", "0123456789")).contains(Field::Email), "{ok}");
        }
        for bad in ["a@b", "a@b.c", "@b.co", "a b@c.co", "a@b.c0"] {
            assert_eq!(
                validate(&ContactFormData::new(bad, "Hi!", "0123456789")).get(Field::Email),
                Some(ValidationError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let at = |subject: String, message: String| validate(&ContactFormData::new("a@b.co", subject, message));
        assert!(at("a".repeat(3), "m".repeat(10)).is_empty());
        assert!(at("a".repeat(100), "m".repeat(1000)).is_empty());

        let errors = at("a".repeat(101), "m".repeat(1001));
        assert_eq!(errors.get(Field::Subject), Some(ValidationError::TooLong(100)));
        assert_eq!(errors.get(Field::Message), Some(ValidationError::TooLong(1000)));
    }

    #[test]
    fn test_length_counts_chars() {
        // three multi-byte chars still satisfy the minimum
        assert!(!validate(&ContactFormData::new("a@b.co", "¡Añ", "ññññññññññ")).contains(Field::Subject));
    }

    #[test]
    fn test_whitespace_is_missing() {
        let errors = validate(&ContactFormData::new("   ", "   ", "          "));
        assert!(Field::all()
            .iter()
            .all(|f| errors.get(*f) == Some(ValidationError::Required)));
    }

    #[test]
    fn test_messages_localized() {
        let errors = validate(&ContactFormData::new("", "Hi!", "0123456789"));
        let en = errors.messages(LocaleCode::En);
        let es = errors.messages(LocaleCode::Es);
        assert_eq!(en.get("email"), Some(&"Email is required"));
        assert_eq!(es.get("email"), Some(&"El correo es obligatorio"));
        assert_eq!(en.len(), 1);
    }
}
