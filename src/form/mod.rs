pub mod data;

use chrono::{Local, NaiveDate};
use log::debug;

use crate::services::render;
use crate::services::sink::SubmissionSink;
use crate::services::validation::{self, RuleContext, ValidationReport};
use data::{Field, SignupFormData};

pub const SUCCESS_MESSAGE: &str = "SignUp Form Submitted Successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected(ValidationReport),
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The signup form: current record, the errors on display and the
/// acknowledgment of the last accepted submit.
pub struct SignupForm {
    data: SignupFormData,
    report: ValidationReport,
    notice: Option<&'static str>,
    submit_attempted: bool,
    today: fn() -> NaiveDate,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        SignupForm {
            data: SignupFormData::default(),
            report: ValidationReport::default(),
            notice: None,
            submit_attempted: false,
            today,
        }
    }

    fn context(&self) -> RuleContext {
        RuleContext {
            today: (self.today)(),
        }
    }

    #[allow(dead_code)]
    pub fn data(&self) -> &SignupFormData {
        &self.data
    }

    #[allow(dead_code)]
    pub fn errors(&self) -> &ValidationReport {
        &self.report
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice
    }

    /// Change handler shared by every control. Once a submit has been
    /// attempted, the edited field is checked again right away.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        *self.data.value_mut(field) = value.into();
        self.notice = None;

        if !self.submit_attempted {
            return;
        }

        self.revalidate(field);
        if field == Field::Password && !self.data.confirm_password.is_empty() {
            self.revalidate(Field::ConfirmPassword);
        }
    }

    fn revalidate(&mut self, field: Field) {
        let ctx = self.context();
        self.report.errors.retain(|e| e.field != field);
        if let Some(message) = validation::validate_field(field, &self.data, &ctx) {
            self.report.errors.push(validation::FieldValidationError { field, message });
            self.report.errors.sort_by_key(|e| e.field);
        }
    }

    pub fn validate(&self) -> ValidationReport {
        validation::validate(&self.data, &self.context())
    }

    /// Validates the whole record. A rejected submit only updates what is
    /// displayed; an accepted one emits the record once and clears the form.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> SubmitOutcome {
        self.submit_attempted = true;
        let report = self.validate();

        if !report.is_valid() {
            debug!("Signup rejected with {} failing field(s)", report.errors.len());
            self.report = report.clone();
            self.notice = None;
            return SubmitOutcome::Rejected(report);
        }

        sink.emit(&self.data);
        self.data = SignupFormData::default();
        self.report = ValidationReport::default();
        self.submit_attempted = false;
        self.notice = Some(SUCCESS_MESSAGE);
        SubmitOutcome::Submitted
    }

    pub fn render_field(&self, field: Field) -> String {
        render::field_html(
            field,
            self.data.value(field),
            self.report.message_for(field),
            (self.today)(),
        )
    }

    pub fn render(&self) -> String {
        let fields: Vec<String> = Field::ALL.into_iter().map(|f| self.render_field(f)).collect();
        render::page(&fields, self.notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sink::testing::RecordingSink;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled_form() -> SignupForm {
        let mut form = SignupForm::with_clock(fixed_today);
        form.update(Field::FirstName, "Alice");
        form.update(Field::LastName, "Smith");
        form.update(Field::Dob, "2024-06-15");
        form.update(Field::Gender, "Other");
        form.update(Field::Email, "alice@example.com");
        form.update(Field::Phone, "1234567890");
        form.update(Field::Password, "Abc123!@");
        form.update(Field::ConfirmPassword, "Abc123!@");
        form
    }

    #[test]
    fn edits_before_submit_show_no_errors() {
        let mut form = SignupForm::with_clock(fixed_today);
        form.update(Field::FirstName, "Al");
        assert!(form.errors().is_valid());
        assert!(!form.render_field(Field::FirstName).contains("error"));
    }

    #[test]
    fn valid_submit_emits_once_and_resets() {
        let mut form = filled_form();
        let mut sink = RecordingSink::default();

        assert_eq!(form.submit(&mut sink), SubmitOutcome::Submitted);
        assert_eq!(sink.records.len(), 1);
        assert_eq!(sink.records[0].first_name, "Alice");
        assert_eq!(form.notice(), Some(SUCCESS_MESSAGE));
        assert_eq!(form.data(), &SignupFormData::default());
        assert!(form.render().contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn invalid_submit_emits_nothing_and_shows_each_error() {
        let mut form = filled_form();
        form.update(Field::Email, "foo@bar");
        form.update(Field::Phone, "12345");
        let mut sink = RecordingSink::default();

        let SubmitOutcome::Rejected(report) = form.submit(&mut sink) else {
            panic!("expected rejection");
        };
        assert!(sink.records.is_empty());
        assert_eq!(report.errors.len(), 2);
        assert_eq!(form.notice(), None);

        let html = form.render();
        assert_eq!(html.matches(r#"class="error-message""#).count(), 2);
        assert!(html.contains("Please enter a valid Email-Id"));
        assert!(html.contains("Please enter a valid Phone Number"));
    }

    #[test]
    fn future_dob_blocks_submit() {
        let mut form = filled_form();
        form.update(Field::Dob, "2024-06-16");
        let mut sink = RecordingSink::default();

        assert!(matches!(form.submit(&mut sink), SubmitOutcome::Rejected(_)));
        assert!(form.errors().message_for(Field::Dob).is_some());
        assert!(sink.records.is_empty());
    }

    #[test]
    fn fixing_a_field_after_submit_clears_its_error() {
        let mut form = filled_form();
        form.update(Field::FirstName, "Al");
        let mut sink = RecordingSink::default();
        form.submit(&mut sink);
        assert!(form.errors().message_for(Field::FirstName).is_some());

        form.update(Field::FirstName, "Alice");
        assert!(form.errors().is_valid());
        assert_eq!(form.submit(&mut sink), SubmitOutcome::Submitted);
        assert_eq!(sink.records.len(), 1);
    }

    #[test]
    fn changing_password_rechecks_confirmation() {
        let mut form = filled_form();
        form.update(Field::Phone, "1");
        let mut sink = RecordingSink::default();
        form.submit(&mut sink);
        assert_eq!(form.errors().message_for(Field::ConfirmPassword), None);

        form.update(Field::Password, "Abc123!#");
        assert_eq!(
            form.errors().message_for(Field::ConfirmPassword),
            Some(validation::PASSWORD_MISMATCH_MESSAGE)
        );
        let fields: Vec<Field> = form.errors().errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Phone, Field::ConfirmPassword]);
    }

    #[test]
    fn editing_after_success_hides_the_notice() {
        let mut form = filled_form();
        form.submit(&mut RecordingSink::default());
        form.update(Field::FirstName, "Bob");
        assert_eq!(form.notice(), None);
        assert!(form.errors().is_valid());
    }
}
