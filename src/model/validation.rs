use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::Field;

/// Minimum number of characters a first name must have by default.
pub const DEFAULT_FIRST_NAME_MIN_LEN: usize = 5;

/// Validation errors for contact form fields.
///
/// The display text is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("firstName must have at least {min} characters")]
    FirstNameTooShort { min: usize },
    #[error("lastName is a required field")]
    LastNameRequired,
    #[error("email must be a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::FirstNameTooShort { .. } => Field::FirstName,
            Self::LastNameRequired => Field::LastName,
            Self::InvalidEmail => Field::Email,
        }
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dotted domain
/// with non-empty labels.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid hardcoded regex")
});

/// Tunable validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Minimum first name length, counted in characters.
    pub first_name_min_len: usize,
    /// Whether an empty email blocks a submit.
    pub email_required: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            first_name_min_len: DEFAULT_FIRST_NAME_MIN_LEN,
            email_required: true,
        }
    }
}

impl Rules {
    /// Returns `true` if an empty value for `field` fails a submit.
    pub fn is_required(&self, field: Field) -> bool {
        match field {
            Field::FirstName | Field::LastName => true,
            Field::Email => self.email_required,
            Field::Message => false,
        }
    }
}

/// Validates a first name: must have at least `min` characters.
pub fn validate_first_name(value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        Err(ValidationError::FirstNameTooShort { min })
    } else {
        Ok(())
    }
}

/// Validates a last name: must be non-empty.
pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::LastNameRequired)
    } else {
        Ok(())
    }
}

/// Validates the shape of an email address (e.g. `tuan@example.com`).
///
/// An empty string is rejected; whether empty is acceptable is decided by the
/// caller.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Keystroke rule: validates `field` after its value changed.
///
/// An empty email is not an error while typing.
pub fn validate_on_change(field: Field, value: &str, rules: &Rules) -> Result<(), ValidationError> {
    match field {
        Field::FirstName => validate_first_name(value, rules.first_name_min_len),
        Field::LastName => validate_last_name(value),
        Field::Email if value.is_empty() => Ok(()),
        Field::Email => validate_email(value),
        Field::Message => Ok(()),
    }
}

/// Submit rule: validates `field` when the form is submitted.
///
/// Identical to [`validate_on_change`] except that an empty email fails when
/// [`Rules::email_required`] is set.
pub fn validate_on_submit(field: Field, value: &str, rules: &Rules) -> Result<(), ValidationError> {
    match field {
        Field::Email if value.is_empty() && rules.email_required => {
            Err(ValidationError::InvalidEmail)
        }
        _ => validate_on_change(field, value, rules),
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- validate_first_name ---

    #[test]
    fn first_name_four_chars_rejected() {
        assert_eq!(
            validate_first_name("Tuan", 5),
            Err(ValidationError::FirstNameTooShort { min: 5 })
        );
    }

    #[test]
    fn first_name_five_chars_accepted() {
        assert_eq!(validate_first_name("Tuann", 5), Ok(()));
    }

    #[test]
    fn first_name_empty_rejected() {
        assert!(validate_first_name("", 5).is_err());
    }

    #[test]
    fn first_name_counts_chars_not_bytes() {
        // five chars, ten bytes
        assert_eq!(validate_first_name("ÅÄÖÜÉ", 5), Ok(()));
    }

    #[test]
    fn first_name_message_text() {
        assert_eq!(
            ValidationError::FirstNameTooShort { min: 5 }.to_string(),
            "firstName must have at least 5 characters"
        );
    }

    #[quickcheck]
    fn first_name_shorter_than_min_always_rejected(s: String) -> bool {
        let short: String = s.chars().take(4).collect();
        validate_first_name(&short, 5) == Err(ValidationError::FirstNameTooShort { min: 5 })
    }

    #[quickcheck]
    fn first_name_at_least_min_always_accepted(s: String) -> bool {
        let long = format!("abcde{s}");
        validate_first_name(&long, 5).is_ok()
    }

    // --- validate_last_name ---

    #[test]
    fn last_name_empty_rejected() {
        assert_eq!(
            validate_last_name(""),
            Err(ValidationError::LastNameRequired)
        );
    }

    #[test]
    fn last_name_single_char_accepted() {
        assert_eq!(validate_last_name("N"), Ok(()));
    }

    #[test]
    fn last_name_message_text() {
        assert_eq!(
            ValidationError::LastNameRequired.to_string(),
            "lastName is a required field"
        );
    }

    // --- validate_email ---

    #[test]
    fn email_simple() {
        assert_eq!(validate_email("tuan@yahoo.com"), Ok(()));
    }

    #[test]
    fn email_subdomain_and_dotted_local() {
        assert_eq!(validate_email("tuan.nguyen@mail.example.co.uk"), Ok(()));
    }

    #[test]
    fn email_without_at() {
        assert_eq!(validate_email("tuanyahoo.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_without_tld() {
        assert_eq!(validate_email("tuan@yahoo"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_empty_domain_label() {
        assert_eq!(validate_email("tuan@.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("tuan@yahoo..com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("tuan@yahoo."), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_with_whitespace() {
        assert_eq!(validate_email("tu an@yahoo.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_two_ats() {
        assert_eq!(validate_email("a@b@c.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_empty_local_part() {
        assert_eq!(validate_email("@yahoo.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_message_text() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "email must be a valid email address"
        );
    }

    #[quickcheck]
    fn email_without_at_always_rejected(s: String) -> bool {
        let no_at: String = s.chars().filter(|&c| c != '@').collect();
        validate_email(&no_at).is_err()
    }

    // --- validate_on_change / validate_on_submit ---

    #[test]
    fn empty_email_ok_while_typing() {
        let rules = Rules::default();
        assert_eq!(validate_on_change(Field::Email, "", &rules), Ok(()));
    }

    #[test]
    fn empty_email_rejected_on_submit_when_required() {
        let rules = Rules::default();
        assert_eq!(
            validate_on_submit(Field::Email, "", &rules),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn empty_email_accepted_on_submit_when_optional() {
        let rules = Rules {
            email_required: false,
            ..Rules::default()
        };
        assert_eq!(validate_on_submit(Field::Email, "", &rules), Ok(()));
    }

    #[test]
    fn malformed_email_rejected_even_when_optional() {
        let rules = Rules {
            email_required: false,
            ..Rules::default()
        };
        assert_eq!(
            validate_on_submit(Field::Email, "tuan", &rules),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn custom_min_len_is_applied() {
        let rules = Rules {
            first_name_min_len: 2,
            ..Rules::default()
        };
        assert_eq!(validate_on_change(Field::FirstName, "Al", &rules), Ok(()));
        assert_eq!(
            validate_on_change(Field::FirstName, "A", &rules),
            Err(ValidationError::FirstNameTooShort { min: 2 })
        );
    }

    #[test]
    fn errors_report_their_field() {
        assert_eq!(
            ValidationError::FirstNameTooShort { min: 5 }.field(),
            Field::FirstName
        );
        assert_eq!(ValidationError::LastNameRequired.field(), Field::LastName);
        assert_eq!(ValidationError::InvalidEmail.field(), Field::Email);
    }

    #[test]
    fn required_fields() {
        let rules = Rules::default();
        assert!(rules.is_required(Field::FirstName));
        assert!(rules.is_required(Field::LastName));
        assert!(rules.is_required(Field::Email));
        assert!(!rules.is_required(Field::Message));

        let optional_email = Rules {
            email_required: false,
            ..Rules::default()
        };
        assert!(!optional_email.is_required(Field::Email));
    }

    #[quickcheck]
    fn message_never_errors(s: String) -> bool {
        let rules = Rules::default();
        validate_on_change(Field::Message, &s, &rules).is_ok()
            && validate_on_submit(Field::Message, &s, &rules).is_ok()
    }

    #[quickcheck]
    fn submit_rule_at_least_as_strict_as_change_rule(s: String) -> bool {
        let rules = Rules::default();
        Field::all().iter().all(|&field| {
            validate_on_change(field, &s, &rules).is_ok()
                || validate_on_submit(field, &s, &rules).is_err()
        })
    }
}
