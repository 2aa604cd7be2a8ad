//! Intake form lifecycle.
//!
//! Every public form (creator application, brand request, community creation)
//! moves through `Collecting -> Submitting -> Succeeded | Failed`. Validation
//! runs on the `Collecting -> Submitting` edge, so nothing reaches the store
//! unless it has been validated first.

use std::fmt;
use std::future::Future;

use thiserror::Error;
use tracing::warn;

use super::validation::ValidationError;

/// Generic failure notice shown when the store rejects an otherwise valid form.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Form input that can be turned into a validated value.
pub trait FormInput {
    type Valid;

    fn validate(&self) -> Result<Self::Valid, ValidationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Collecting,
    Submitting,
    Succeeded,
    Failed,
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormPhase::Collecting => "collecting",
            FormPhase::Submitting => "submitting",
            FormPhase::Succeeded => "succeeded",
            FormPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("cannot {action} a form that is {phase}")]
    InvalidTransition { phase: FormPhase, action: &'static str },
}

/// Outcome of running a form through validation and the store.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Failed to save form: {0}")]
    Store(#[source] anyhow::Error),
}

impl SubmitError {
    /// What the submitter gets to see: validation problems verbatim, store
    /// failures as a generic notice.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Form(e) => e.to_string(),
            SubmitError::Store(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

/// Drive `input` through `Collecting -> Submitting -> Succeeded | Failed`,
/// calling `store` with the validated value.
pub async fn submit_form<I, T, F, Fut>(input: I, store: F) -> Result<T, SubmitError>
where
    I: FormInput,
    F: FnOnce(I::Valid) -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let mut form = FormMachine::new(input);
    let valid = form.submit()?;

    match store(valid).await {
        Ok(saved) => {
            form.succeed()?;
            Ok(saved)
        }
        Err(e) => {
            warn!(error = %e, "Form submission failed");
            form.fail(e.to_string())?;
            Err(SubmitError::Store(e))
        }
    }
}

#[derive(Debug)]
pub struct FormMachine<I> {
    input: I,
    phase: FormPhase,
    error: Option<String>,
}

impl<I: FormInput> FormMachine<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            phase: FormPhase::Collecting,
            error: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Message recorded by the last failed submit or validation attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and enter `Submitting`. On invalid input the form stays in
    /// `Collecting` with the validation message recorded.
    pub fn submit(&mut self) -> Result<I::Valid, FormError> {
        self.expect(FormPhase::Collecting, "submit")?;

        match self.input.validate() {
            Ok(valid) => {
                self.phase = FormPhase::Submitting;
                self.error = None;
                Ok(valid)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    pub fn succeed(&mut self) -> Result<(), FormError> {
        self.expect(FormPhase::Submitting, "complete")?;
        self.phase = FormPhase::Succeeded;
        Ok(())
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), FormError> {
        self.expect(FormPhase::Submitting, "fail")?;
        self.phase = FormPhase::Failed;
        self.error = Some(message.into());
        Ok(())
    }

    fn expect(&self, phase: FormPhase, action: &'static str) -> Result<(), FormError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(FormError::InvalidTransition {
                phase: self.phase,
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::validation::required;

    struct NameForm(String);

    impl FormInput for NameForm {
        type Valid = String;

        fn validate(&self) -> Result<String, ValidationError> {
            required("name", &self.0)
        }
    }

    #[test]
    fn test_happy_path() {
        let mut form = FormMachine::new(NameForm(" Jane ".into()));
        assert_eq!(form.phase(), FormPhase::Collecting);

        assert_eq!(form.submit().unwrap(), "Jane");
        assert_eq!(form.phase(), FormPhase::Submitting);

        form.succeed().unwrap();
        assert_eq!(form.phase(), FormPhase::Succeeded);
        assert!(form.error().is_none());
    }

    #[test]
    fn test_invalid_input_stays_collecting() {
        let mut form = FormMachine::new(NameForm("".into()));
        let err = form.submit().unwrap_err();

        assert_eq!(err, FormError::Invalid(ValidationError::Required("name")));
        assert_eq!(form.phase(), FormPhase::Collecting);
        assert_eq!(form.error(), Some("name is required"));
    }

    #[test]
    fn test_store_failure_records_message() {
        let mut form = FormMachine::new(NameForm("Jane".into()));
        form.submit().unwrap();
        form.fail("connection reset").unwrap();

        assert_eq!(form.phase(), FormPhase::Failed);
        assert_eq!(form.error(), Some("connection reset"));
    }

    #[test]
    fn test_rejects_out_of_order_transitions() {
        let mut form = FormMachine::new(NameForm("Jane".into()));
        assert!(matches!(
            form.succeed(),
            Err(FormError::InvalidTransition { phase: FormPhase::Collecting, .. })
        ));

        form.submit().unwrap();
        assert!(matches!(
            form.submit(),
            Err(FormError::InvalidTransition { phase: FormPhase::Submitting, .. })
        ));
    }

    #[tokio::test]
    async fn test_submit_form_skips_store_on_invalid_input() {
        let mut called = false;
        let result = submit_form(NameForm(" ".into()), |_| {
            called = true;
            async { Ok(()) }
        })
        .await;

        let err = result.unwrap_err();
        assert!(!called);
        assert_eq!(err.user_message(), "name is required");
    }

    #[tokio::test]
    async fn test_submit_form_hides_store_errors() {
        let result: Result<(), _> = submit_form(NameForm("Jane".into()), |_| async {
            Err(anyhow::anyhow!("duplicate key value violates constraint"))
        })
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, SubmitError::Store(_)));
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_submit_form_passes_validated_value() {
        let saved = submit_form(NameForm("  Jane ".into()), |name| async move {
            Ok(format!("saved {}", name))
        })
        .await
        .unwrap();

        assert_eq!(saved, "saved Jane");
    }
}
