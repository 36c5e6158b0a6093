//! Contact form validation rules.
//!
//! Two independent surfaces share these rules:
//! - the submit-time check ([`validate_submission`]), evaluated in a fixed
//!   order with first-failure-wins short-circuit
//! - the real-time border cue ([`marker_on_blur`] / [`marker_on_input`]),
//!   driven by blur and input events per field
//!
//! Minimum lengths apply to trimmed values, counted in characters (a
//! five-character accented word is five, not its byte width); the email
//! check runs on the raw
//! value (whitespace anywhere makes it invalid, so an untrimmed draft with a
//! trailing space is flagged until corrected).

use thiserror::Error;

/// Minimum trimmed length for the name field
pub const NAME_MIN_LEN: usize = 2;
/// Minimum trimmed length for the company field
pub const COMPANY_MIN_LEN: usize = 2;
/// Minimum trimmed length for the message field
pub const MESSAGE_MIN_LEN: usize = 10;

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
    Message,
}

impl Field {
    /// All fields that persist drafts, in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Company,
        Field::Email,
        Field::Phone,
        Field::Message,
    ];

    /// Storage key for this field's draft.
    ///
    /// The phone field stores under "Mobile" (the element id the page has
    /// always used), not "phone".
    pub fn storage_key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Company => "company",
            Field::Email => "email",
            Field::Phone => "Mobile",
            Field::Message => "message",
        }
    }

    /// Minimum trimmed length, for fields with a length rule.
    pub fn min_len(&self) -> Option<usize> {
        match self {
            Field::Name => Some(NAME_MIN_LEN),
            Field::Company => Some(COMPANY_MIN_LEN),
            Field::Message => Some(MESSAGE_MIN_LEN),
            Field::Email | Field::Phone => None,
        }
    }
}

/// A submit-time validation failure. The display strings are the exact
/// messages surfaced in the error toast.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired,

    #[error("Name must be at least 2 characters long")]
    NameTooShort,

    #[error("Company name must be at least 2 characters long")]
    CompanyTooShort,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Check an email address: one `@` with a non-empty local part, a non-empty
/// domain containing at least one `.` with non-empty segments around the last
/// one, and no whitespace anywhere.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate trimmed submit-time values, in order, first failure wins.
pub fn validate_submission(
    name: &str,
    company: &str,
    email: &str,
    message: &str,
) -> Result<(), ValidationError> {
    if name.is_empty() || company.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingRequired);
    }
    if name.chars().count() < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort);
    }
    if company.chars().count() < COMPANY_MIN_LEN {
        return Err(ValidationError::CompanyTooShort);
    }
    if !validate_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    if message.chars().count() < MESSAGE_MIN_LEN {
        return Err(ValidationError::MessageTooShort);
    }
    Ok(())
}

/// Visual state of a field's border cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMarker {
    #[default]
    Neutral,
    Invalid,
}

/// Border cue after a blur event.
///
/// A field is marked invalid only when it holds something: an empty (or
/// all-whitespace) value stays neutral so a user tabbing through an untouched
/// form is not shouted at.
pub fn marker_on_blur(field: Field, value: &str) -> FieldMarker {
    let trimmed_len = value.trim().chars().count();
    match field {
        Field::Email => {
            if trimmed_len > 0 && !validate_email(value) {
                FieldMarker::Invalid
            } else {
                FieldMarker::Neutral
            }
        }
        Field::Phone => FieldMarker::Neutral,
        _ => match field.min_len() {
            Some(min) if trimmed_len > 0 && trimmed_len < min => FieldMarker::Invalid,
            _ => FieldMarker::Neutral,
        },
    }
}

/// Border cue after an input event.
///
/// Input events only ever clear the cue: `Some(Neutral)` once the value meets
/// the rule or is emptied, `None` to leave the current marker as-is.
pub fn marker_on_input(field: Field, value: &str) -> Option<FieldMarker> {
    let trimmed_len = value.trim().chars().count();
    match field {
        Field::Email => {
            if trimmed_len == 0 || validate_email(value) {
                Some(FieldMarker::Neutral)
            } else {
                None
            }
        }
        Field::Phone => None,
        _ => match field.min_len() {
            Some(min) if trimmed_len >= min || trimmed_len == 0 => Some(FieldMarker::Neutral),
            Some(_) => None,
            None => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_basic_address() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("jo@acme.com"));
        assert!(validate_email("a.b@c.d.org"));
    }

    #[test]
    fn email_rejects_missing_tld() {
        assert!(!validate_email("a@b"));
    }

    #[test]
    fn email_rejects_whitespace() {
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b.com "));
        assert!(!validate_email(" a@b.com"));
    }

    #[test]
    fn email_rejects_empty_local_part() {
        assert!(!validate_email("@b.com"));
    }

    #[test]
    fn email_rejects_empty_domain_segments() {
        assert!(!validate_email("a@.com"));
        assert!(!validate_email("a@b."));
        assert!(!validate_email("a@"));
    }

    #[test]
    fn email_rejects_multiple_at_signs() {
        assert!(!validate_email("a@b@c.com"));
    }

    #[test]
    fn email_trimmed_trailing_space_accepted_after_trim() {
        let raw = "a@b.com ";
        assert!(!validate_email(raw));
        assert!(validate_email(raw.trim()));
    }

    #[test]
    fn submission_rules_fire_in_order() {
        // Empty required field wins over everything else
        assert_eq!(
            validate_submission("", "A", "bad", "short"),
            Err(ValidationError::MissingRequired)
        );
        // Name length beats company length
        assert_eq!(
            validate_submission("J", "A", "bad", "short"),
            Err(ValidationError::NameTooShort)
        );
        assert_eq!(
            validate_submission("Jo", "A", "bad", "short"),
            Err(ValidationError::CompanyTooShort)
        );
        assert_eq!(
            validate_submission("Jo", "Acme", "bad", "short"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(
            validate_submission("Jo", "Acme", "jo@acme.com", "short"),
            Err(ValidationError::MessageTooShort)
        );
        assert_eq!(
            validate_submission("Jo", "Acme", "jo@acme.com", "long enough now"),
            Ok(())
        );
    }

    #[test]
    fn empty_message_is_missing_required_not_too_short() {
        assert_eq!(
            validate_submission("Jo", "Acme", "jo@acme.com", ""),
            Err(ValidationError::MissingRequired)
        );
    }

    #[test]
    fn blur_marks_short_but_nonempty_values() {
        assert_eq!(marker_on_blur(Field::Name, "J"), FieldMarker::Invalid);
        assert_eq!(marker_on_blur(Field::Name, "Jo"), FieldMarker::Neutral);
        assert_eq!(marker_on_blur(Field::Name, ""), FieldMarker::Neutral);
        assert_eq!(marker_on_blur(Field::Name, "   "), FieldMarker::Neutral);
        assert_eq!(
            marker_on_blur(Field::Message, "too short"),
            FieldMarker::Invalid
        );
        assert_eq!(
            marker_on_blur(Field::Message, "this one is long enough"),
            FieldMarker::Neutral
        );
    }

    #[test]
    fn blur_marks_email_by_format() {
        assert_eq!(marker_on_blur(Field::Email, "nope"), FieldMarker::Invalid);
        assert_eq!(marker_on_blur(Field::Email, "a@b.co"), FieldMarker::Neutral);
        assert_eq!(marker_on_blur(Field::Email, ""), FieldMarker::Neutral);
    }

    #[test]
    fn phone_never_gets_a_marker() {
        assert_eq!(marker_on_blur(Field::Phone, "1"), FieldMarker::Neutral);
        assert_eq!(marker_on_input(Field::Phone, "1"), None);
    }

    #[test]
    fn input_only_clears_never_sets() {
        // Still short: leave whatever the blur handler set
        assert_eq!(marker_on_input(Field::Name, "J"), None);
        // Meets the rule or emptied: clear
        assert_eq!(
            marker_on_input(Field::Name, "Jo"),
            Some(FieldMarker::Neutral)
        );
        assert_eq!(marker_on_input(Field::Name, ""), Some(FieldMarker::Neutral));
        assert_eq!(marker_on_input(Field::Email, "a@"), None);
        assert_eq!(
            marker_on_input(Field::Email, "a@b.co"),
            Some(FieldMarker::Neutral)
        );
    }

    #[test]
    fn length_rules_count_characters_not_bytes() {
        // Five characters but ten bytes: still below the ten-character rule
        assert_eq!(
            validate_submission("Jo", "Acme", "jo@acme.com", "\u{f1}\u{f1}\u{f1}\u{f1}\u{f1}"),
            Err(ValidationError::MessageTooShort)
        );
        // Two accented characters satisfy the two-character name rule
        assert_eq!(
            validate_submission("\u{f1}\u{e9}", "Acme", "jo@acme.com", "a long enough message"),
            Ok(())
        );
        assert_eq!(
            marker_on_blur(Field::Message, "\u{f1}\u{f1}\u{f1}\u{f1}\u{f1}"),
            FieldMarker::Invalid
        );
        assert_eq!(
            marker_on_input(Field::Name, "\u{f1}\u{e9}"),
            Some(FieldMarker::Neutral)
        );
    }

    #[test]
    fn storage_keys_match_page_element_ids() {
        let keys: Vec<_> = Field::ALL.iter().map(|f| f.storage_key()).collect();
        assert_eq!(keys, ["name", "company", "email", "Mobile", "message"]);
    }
}
