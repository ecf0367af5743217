use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::form::data::{Field, Gender, SignupFormData};

static FIRST_NAME_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z]{3,20}$"));
static LAST_NAME_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z]{1,20}$"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[0-9]{10}$"));

// The regex crate has no lookahead, so each class of the password rule is its own check.
static UPPER_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"[A-Z]"));
static LOWER_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"[a-z]"));
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"[0-9]"));
static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"[!@#$%^&*]"));
static PASSWORD_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[A-Za-z0-9!@#$%^&*]+$"));

const PASSWORD_MIN_LEN: usize = 8;

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("invalid field pattern")
}

pub const GENDER_MESSAGE: &str = "Please select a gender.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Password does not match";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldValidationError {}

/// Inputs a rule may need besides the field value itself.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    pub today: NaiveDate,
}

pub type FieldRule = fn(&str, &RuleContext) -> Option<String>;
pub type RecordRule = fn(&SignupFormData) -> Option<String>;

pub const FIELD_RULES: [(Field, FieldRule); 7] = [
    (Field::FirstName, first_name),
    (Field::LastName, last_name),
    (Field::Dob, dob),
    (Field::Gender, gender),
    (Field::Email, email),
    (Field::Phone, phone),
    (Field::Password, password),
];

/// Rules that read the whole record; run after every field rule.
pub const RECORD_RULES: [(Field, RecordRule); 1] = [(Field::ConfirmPassword, confirm_password)];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// One validation pass over the whole record. Every rule runs; nothing
/// short-circuits, so all failing fields are reported together.
pub fn validate(data: &SignupFormData, ctx: &RuleContext) -> ValidationReport {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, data, ctx).map(|message| FieldValidationError { field, message })
        })
        .collect();

    ValidationReport { errors }
}

/// Runs the single rule owning `field`.
pub fn validate_field(field: Field, data: &SignupFormData, ctx: &RuleContext) -> Option<String> {
    if let Some((_, rule)) = FIELD_RULES.iter().find(|(f, _)| *f == field) {
        return rule(data.value(field), ctx);
    }
    RECORD_RULES
        .iter()
        .find(|(f, _)| *f == field)
        .and_then(|(_, rule)| rule(data))
}

fn required_message(field: Field) -> String {
    format!("{} is a required field", field.display_name())
}

fn first_name(value: &str, _: &RuleContext) -> Option<String> {
    if value.is_empty() {
        return Some(required_message(Field::FirstName));
    }
    (!FIRST_NAME_RE.is_match(value))
        .then(|| "FirstName should be at least 3-20 alphabets only".to_string())
}

fn last_name(value: &str, _: &RuleContext) -> Option<String> {
    if value.is_empty() {
        return Some(required_message(Field::LastName));
    }
    (!LAST_NAME_RE.is_match(value))
        .then(|| "LastName should be at least 1-20 alphabets only".to_string())
}

fn dob(value: &str, ctx: &RuleContext) -> Option<String> {
    if value.is_empty() {
        return Some(required_message(Field::Dob));
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) if date > ctx.today => Some(format!(
            "DOB field must be at earlier than {}",
            ctx.today.format("%Y-%m-%d")
        )),
        Ok(_) => None,
        Err(_) => Some("DOB must be a valid date".to_string()),
    }
}

fn gender(value: &str, _: &RuleContext) -> Option<String> {
    value
        .parse::<Gender>()
        .is_err()
        .then(|| GENDER_MESSAGE.to_string())
}

fn email(value: &str, _: &RuleContext) -> Option<String> {
    if value.is_empty() {
        return Some(required_message(Field::Email));
    }
    (!EMAIL_RE.is_match(value)).then(|| "Please enter a valid Email-Id".to_string())
}

fn phone(value: &str, _: &RuleContext) -> Option<String> {
    if value.is_empty() {
        return Some(required_message(Field::Phone));
    }
    (!PHONE_RE.is_match(value)).then(|| "Please enter a valid Phone Number".to_string())
}

fn password(value: &str, _: &RuleContext) -> Option<String> {
    if value.is_empty() {
        return Some(required_message(Field::Password));
    }

    let checks: [(bool, &str); 6] = [
        (value.chars().count() >= PASSWORD_MIN_LEN, "at least 8 characters"),
        (UPPER_RE.is_match(value), "one uppercase letter"),
        (LOWER_RE.is_match(value), "one lowercase letter"),
        (DIGIT_RE.is_match(value), "one number"),
        (SYMBOL_RE.is_match(value), "one special character (!@#$%^&*)"),
        (PASSWORD_CHARSET_RE.is_match(value), "only letters, numbers and !@#$%^&*"),
    ];

    let missing: Vec<&str> = checks
        .iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, requirement)| *requirement)
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!("Password must contain {}", missing.join(", ")))
    }
}

fn confirm_password(data: &SignupFormData) -> Option<String> {
    if data.confirm_password.is_empty() {
        return Some(required_message(Field::ConfirmPassword));
    }
    (data.confirm_password != data.password).then(|| PASSWORD_MISMATCH_MESSAGE.to_string())
}
