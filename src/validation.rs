//! The validation pass. This is a fixed checklist of string predicates run
//! over a record on demand. It never fails fast: every problem gets collected
//! so the user can fix them all in one go.
//!
//! Nothing is rejected at write time. A record can hold any text at all until
//! somebody asks for it to be validated (or exported).

use crate::models::{
    field::Field,
    record::Record,
};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A user-correctable problem with the form's data. The `Display` impl is the
/// message the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is empty (or only whitespace)
    #[error("{} is required", .0.noun())]
    Required(Field),
    /// The field doesn't look like an email address
    #[error("{} format is invalid", .0.noun())]
    InvalidEmail(Field),
    /// The field needs to be "Yes" or "No"
    #[error("{} must be \"Yes\" or \"No\"", .0.noun())]
    NotYesNo(Field),
    /// The field needs to be a number
    #[error("{} must be a valid number", .0.noun())]
    NotNumeric(Field),
    /// None of the category fields is "Yes"
    #[error("At least one category (Staff, UCSC Student, Volunteer, Academic/Faculty, or Non UCSC Student) must be \"Yes\"")]
    NoCategorySelected,
}

impl ValidationError {
    /// The field this error is about, if it's about just one.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::Required(field) |
                ValidationError::InvalidEmail(field) |
                ValidationError::NotYesNo(field) |
                ValidationError::NotNumeric(field) => Some(*field),
            ValidationError::NoCategorySelected => None,
        }
    }
}

/// Check a value against the simple address shape: something, an `@`,
/// something, a `.`, something, with no whitespace or extra `@` anywhere.
pub fn is_email(val: &str) -> bool {
    EMAIL_SHAPE.is_match(val)
}

/// Case-insensitive "yes". Surrounding whitespace is *not* ignored.
pub fn is_yes(val: &str) -> bool {
    val.to_lowercase() == "yes"
}

/// Case-insensitive "yes" or "no". Surrounding whitespace is *not* ignored.
pub fn is_yes_or_no(val: &str) -> bool {
    let val = val.to_lowercase();
    val == "yes" || val == "no"
}

/// Determine if a value reads as a number the way a browser's numeric
/// conversion does it: whitespace around the value is ignored, decimals may
/// carry a sign, a fraction, and an exponent, and `0x`/`0o`/`0b` integer
/// literals and the word `Infinity` are accepted.
///
/// Note that an empty (or all-whitespace) value converts to zero and is
/// therefore numeric. The required check is what catches empty values.
pub fn is_numeric(val: &str) -> bool {
    let val = val.trim();
    if val.is_empty() {
        return true;
    }
    if let Some((radix, digits)) = radix_literal(val) {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    match val {
        "Infinity" | "+Infinity" | "-Infinity" => return true,
        _ => {}
    }
    // the float parser is happy to take "inf" and "NaN" in any case, which a
    // browser won't
    if val.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return false;
    }
    val.parse::<f64>().is_ok()
}

fn radix_literal(val: &str) -> Option<(u32, &str)> {
    let lower = val.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, &val[2..]))
}

fn check_required(record: &Record, field: Field, errors: &mut Vec<ValidationError>) {
    if record.is_blank(field) {
        errors.push(ValidationError::Required(field));
    }
}

fn check_email(record: &Record, field: Field, errors: &mut Vec<ValidationError>) {
    if record.is_blank(field) {
        errors.push(ValidationError::Required(field));
    } else if !is_email(record.get(field)) {
        errors.push(ValidationError::InvalidEmail(field));
    }
}

fn check_yes_no(record: &Record, field: Field, errors: &mut Vec<ValidationError>) {
    if !is_yes_or_no(record.get(field)) {
        errors.push(ValidationError::NotYesNo(field));
    }
}

fn check_numeric(record: &Record, field: Field, errors: &mut Vec<ValidationError>) {
    if record.is_blank(field) {
        errors.push(ValidationError::Required(field));
    } else if !is_numeric(record.get(field)) {
        errors.push(ValidationError::NotNumeric(field));
    }
}

fn check_category(record: &Record, errors: &mut Vec<ValidationError>) {
    let has_yes = Field::CATEGORIES.iter().any(|field| is_yes(record.get(*field)));
    if !has_yes {
        errors.push(ValidationError::NoCategorySelected);
    }
}

/// Run the full checklist against a record, returning every problem found, in
/// a fixed order. An empty list means the record is valid.
pub fn validate(record: &Record) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check_required(record, Field::First, &mut errors);
    check_required(record, Field::Last, &mut errors);
    check_required(record, Field::HiringUnit, &mut errors);
    check_required(record, Field::JobTitle, &mut errors);
    check_email(record, Field::Email, &mut errors);
    check_email(record, Field::ManagerEmail, &mut errors);
    check_yes_no(record, Field::FbiBackground, &mut errors);
    check_yes_no(record, Field::ReclassDuties, &mut errors);
    check_numeric(record, Field::JobNumber, &mut errors);
    check_numeric(record, Field::Mailcode, &mut errors);
    check_category(record, &mut errors);
    debug!("validation: {} error(s)", errors.len());
    errors
}

/// Shorthand for `validate(record).is_empty()`.
pub fn is_valid(record: &Record) -> bool {
    validate(record).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::make_record;
    use proptest::prelude::*;

    fn messages(errors: &[ValidationError]) -> Vec<String> {
        errors.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn valid_record_passes() {
        let record = make_record();
        assert!(validate(&record).is_empty());
        assert!(is_valid(&record));
    }

    #[test]
    fn empty_record_fails_everything_in_order() {
        let errors = validate(&Record::new());
        assert_eq!(messages(&errors), vec![
            "First name is required",
            "Last name is required",
            "Hiring Unit is required",
            "Job Title for Position is required",
            "Email is required",
            "Manager or Supervisor Email is required",
            "FBI Background Check must be \"Yes\" or \"No\"",
            "Reclass Duties Reassigned must be \"Yes\" or \"No\"",
            "Job Number is required",
            "Mailcode is required",
            "At least one category (Staff, UCSC Student, Volunteer, Academic/Faculty, or Non UCSC Student) must be \"Yes\"",
        ]);
        assert_eq!(errors[0].field(), Some(Field::First));
        assert_eq!(errors[10].field(), None);
    }

    #[test]
    fn bad_email_is_the_only_error() {
        let mut record = make_record();
        record.set(Field::Email, "bad-email");
        let errors = validate(&record);
        assert_eq!(errors, vec![ValidationError::InvalidEmail(Field::Email)]);
        assert_eq!(messages(&errors), vec!["Email format is invalid"]);

        let mut record = make_record();
        record.set(Field::ManagerEmail, "boss@@ucsc.edu");
        assert_eq!(messages(&validate(&record)), vec!["Manager or Supervisor Email format is invalid"]);
    }

    #[test]
    fn email_format_checks_untrimmed_value() {
        let mut record = make_record();
        record.set(Field::Email, " slug@ucsc.edu");
        assert_eq!(validate(&record), vec![ValidationError::InvalidEmail(Field::Email)]);
        record.set(Field::Email, "   ");
        assert_eq!(validate(&record), vec![ValidationError::Required(Field::Email)]);
    }

    #[test]
    fn empty_job_number_is_only_required() {
        let mut record = make_record();
        record.set(Field::JobNumber, "");
        let errors = validate(&record);
        assert_eq!(messages(&errors), vec!["Job Number is required"]);
        assert!(!errors.contains(&ValidationError::NotNumeric(Field::JobNumber)));

        record.set(Field::JobNumber, "12a");
        assert_eq!(messages(&validate(&record)), vec!["Job Number must be a valid number"]);

        record.set(Field::JobNumber, " 12 ");
        assert!(is_valid(&record));

        record.set(Field::Mailcode, "mail");
        assert_eq!(messages(&validate(&record)), vec!["Mailcode must be a valid number"]);
    }

    #[test]
    fn yes_no_fields() {
        let mut record = make_record();
        record.set(Field::FbiBackground, "YES");
        record.set(Field::ReclassDuties, "nO");
        assert!(is_valid(&record));

        record.set(Field::FbiBackground, "");
        record.set(Field::ReclassDuties, "Yes ");
        assert_eq!(validate(&record), vec![
            ValidationError::NotYesNo(Field::FbiBackground),
            ValidationError::NotYesNo(Field::ReclassDuties),
        ]);
    }

    #[test]
    fn categories() {
        let mut record = make_record();
        for field in Field::CATEGORIES {
            record.set(*field, "No");
        }
        assert_eq!(validate(&record), vec![ValidationError::NoCategorySelected]);

        record.set(Field::Volunteer, "yEs");
        assert!(is_valid(&record));

        // two yeses are fine as far as validation goes
        record.set(Field::NonUcscStudent, "Yes");
        assert!(is_valid(&record));
    }

    #[test]
    fn numbers() {
        for val in &["0", "42", " 42 ", "-3.5", "+7", ".5", "5.", "1e3", "1E-3", "0x1F", "0X1f", "0o17", "0b101", "Infinity", "-Infinity", "\t9\n"] {
            assert!(is_numeric(val), "{:?} should be numeric", val);
        }
        for val in &["abc", "12a", "1,000", "NaN", "nan", "inf", "infinity", "1e", "e5", ".", "-", "0x", "0xZZ", "-0x10", "1 2", "$5"] {
            assert!(!is_numeric(val), "{:?} should not be numeric", val);
        }
        assert!(is_numeric(""));
    }

    #[test]
    fn emails() {
        assert!(is_email("a@b.c"));
        assert!(is_email("first.last@ucsc.edu"));
        assert!(is_email("x@mail.dept.ucsc.edu"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.c"));
        assert!(!is_email("a@.c"));
        assert!(!is_email("a@b."));
        assert!(!is_email("a b@c.d"));
        assert!(!is_email("a@b@c.d"));
        assert!(!is_email(""));
    }

    proptest! {
        #[test]
        fn empty_iff_invariants_hold(
            first in "[ a-z]{0,3}",
            email in prop_oneof![Just("a@b.c"), Just("bad"), Just(""), Just(" a@b.c")],
            fbi in prop_oneof![Just("yes"), Just("No"), Just(""), Just("maybe")],
            job_number in prop_oneof![Just("12"), Just(""), Just("x1"), Just(" ")],
            staff in prop_oneof![Just("Yes"), Just("No"), Just("")],
        ) {
            let mut record = make_record();
            record.set(Field::First, first.as_str());
            record.set(Field::Email, email);
            record.set(Field::FbiBackground, fbi);
            record.set(Field::JobNumber, job_number);
            for field in Field::CATEGORIES {
                record.set(*field, "");
            }
            record.set(Field::Staff, staff);

            let holds = !first.trim().is_empty()
                && is_email(email)
                && is_yes_or_no(fbi)
                && !job_number.trim().is_empty() && is_numeric(job_number)
                && is_yes(staff);
            prop_assert_eq!(validate(&record).is_empty(), holds);
        }
    }
}
