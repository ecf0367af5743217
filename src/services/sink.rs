use log::{error, info};
use serde_json::json;

use crate::form::data::SignupFormData;

/// Receives each record that passed a full validation pass.
pub trait SubmissionSink {
    fn emit(&mut self, record: &SignupFormData);
}

/// Writes accepted records to the log as json. Passwords are masked.
#[derive(Debug, Default)]
pub struct LogSink;

const MASK: &str = "********";

pub fn masked(record: &SignupFormData) -> serde_json::Value {
    let mut value = json!(record);
    for key in ["password", "confirmPassword"] {
        if let Some(slot) = value.get_mut(key) {
            *slot = json!(MASK);
        }
    }
    value
}

impl SubmissionSink for LogSink {
    fn emit(&mut self, record: &SignupFormData) {
        match serde_json::to_string(&masked(record)) {
            Ok(body) => info!("SignUp Form Submitted: {}", body),
            Err(e) => error!("Failed to serialize submitted record: {:?}", e),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_hides_both_passwords() {
        let record = SignupFormData {
            first_name: "Alice".into(),
            password: "Abc123!@".into(),
            confirm_password: "Abc123!@".into(),
            ..Default::default()
        };
        let value = masked(&record);
        assert_eq!(value["firstName"], "Alice");
        assert_eq!(value["password"], MASK);
        assert_eq!(value["confirmPassword"], MASK);
        assert!(!value.to_string().contains("Abc123!@"));
    }
}
