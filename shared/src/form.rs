//! The profile form controller.
//!
//! Owns the draft, the per-field error map and the submission phase. The
//! phase moves Editing -> Validating -> Submitting -> Editing; a failed
//! validation drops straight back to Editing with the errors attached. The
//! delay between accepting a submission and pushing it to the display is
//! owned by the caller: `begin_submit` hands out a `PendingSubmission`, and
//! `complete_submission` consumes it once the delay has elapsed.

use log::{debug, info, warn};
use std::future::Future;
use std::time::Duration;

use crate::config::FormConfig;
use crate::display::DisplaySink;
use crate::error::FormError;
use crate::profile::{ProfileDraft, SubmittedProfile, TechStackEntry};
use crate::validation::{FieldPath, ProfileSchema, ValidationErrors};

pub const SUCCESS_MESSAGE: &str = "Data Submitted Successfully !";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Validating,
    Submitting,
}

/// An accepted, normalized profile waiting out the submit delay.
///
/// Not `Clone`: completing it consumes it, so it reaches the display once.
#[derive(Debug, PartialEq)]
pub struct PendingSubmission {
    profile: SubmittedProfile,
    delay: Duration,
}

impl PendingSubmission {
    pub fn profile(&self) -> &SubmittedProfile {
        &self.profile
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn delay_ms(&self) -> u32 {
        u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX)
    }
}

/// What the UI needs to announce a finished submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub message: String,
    pub toast_duration: Duration,
}

/// Strip non-digits and cap the length; applied on every phone keystroke
pub fn sanitize_phone_input(raw: &str, max_digits: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max_digits).collect()
}

#[derive(Debug, Clone)]
pub struct FormController {
    config: FormConfig,
    schema: ProfileSchema,
    draft: ProfileDraft,
    errors: ValidationErrors,
    phase: FormPhase,
    /// After the first failed submit, edits re-check the field they touch
    revalidate_on_change: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl FormController {
    pub fn new(config: FormConfig) -> Self {
        let schema = ProfileSchema::new(&config);
        Self {
            config,
            schema,
            draft: ProfileDraft::default(),
            errors: ValidationErrors::default(),
            phase: FormPhase::Editing,
            revalidate_on_change: false,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, path: FieldPath) -> Option<&str> {
        self.errors.get(path)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// True while a submission is waiting out its delay
    pub fn is_busy(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(FieldPath::FirstName, |draft| draft.first_name = value);
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(FieldPath::LastName, |draft| draft.last_name = value);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(FieldPath::Email, |draft| draft.email = value);
    }

    /// Store the sanitized phone input and return what was stored
    pub fn set_phone_number(&mut self, raw: &str) -> String {
        let sanitized = sanitize_phone_input(raw, self.config.phone_digits);
        let stored = sanitized.clone();
        self.edit(FieldPath::PhoneNumber, |draft| draft.phone_number = stored);
        sanitized
    }

    pub fn set_gender(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(FieldPath::Gender, |draft| draft.gender = value);
    }

    pub fn set_date_of_birth(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(FieldPath::DateOfBirth, |draft| draft.date_of_birth = value);
    }

    pub fn set_tech_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), FormError> {
        if self.is_busy() {
            debug!("ignoring tech stack edit while submitting");
            return Ok(());
        }
        self.draft.tech_stack.set_name(index, name)?;
        self.recheck(FieldPath::TechStackName(index));
        Ok(())
    }

    /// Add an empty entry at the end of the tech stack
    pub fn append_tech(&mut self) {
        if self.is_busy() {
            debug!("ignoring tech stack append while submitting");
            return;
        }
        self.draft.tech_stack.append(TechStackEntry::empty());
    }

    pub fn remove_tech(&mut self, index: usize) -> Result<(), FormError> {
        if self.is_busy() {
            debug!("ignoring tech stack removal while submitting");
            return Ok(());
        }
        self.draft.tech_stack.remove(index)?;
        // Later entries shifted down; their errors must follow them.
        self.errors.clear_tech_stack();
        if self.revalidate_on_change {
            for i in 0..self.draft.tech_stack.len() {
                self.recheck(FieldPath::TechStackName(i));
            }
        }
        Ok(())
    }

    /// Validate the whole draft and, if it passes, enter Submitting
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, FormError> {
        if self.is_busy() {
            warn!("submit rejected: a submission is already in flight");
            return Err(FormError::SubmissionInFlight);
        }

        self.phase = FormPhase::Validating;
        match self.schema.parse(&self.draft) {
            Ok(profile) => {
                self.errors = ValidationErrors::default();
                self.phase = FormPhase::Submitting;
                debug!("submission accepted, waiting {:?}", self.config.submit_delay());
                Ok(PendingSubmission {
                    profile,
                    delay: self.config.submit_delay(),
                })
            }
            Err(errors) => {
                warn!("submit rejected: {}", errors);
                self.errors = errors.clone();
                self.revalidate_on_change = true;
                self.phase = FormPhase::Editing;
                Err(FormError::Validation(errors))
            }
        }
    }

    /// Push the pending profile to the display and start a fresh draft
    pub fn complete_submission<S>(
        &mut self,
        pending: PendingSubmission,
        sink: &mut S,
    ) -> SubmissionReceipt
    where
        S: DisplaySink + ?Sized,
    {
        info!(
            "submitted profile for {} {}",
            pending.profile.first_name, pending.profile.last_name
        );
        sink.update_display(pending.profile);
        self.reset();
        SubmissionReceipt {
            message: SUCCESS_MESSAGE.to_string(),
            toast_duration: self.config.toast_duration(),
        }
    }

    /// Full submit cycle with a caller-supplied delay (a timer future)
    pub async fn submit<S, F, Fut>(
        &mut self,
        sink: &mut S,
        sleep: F,
    ) -> Result<SubmissionReceipt, FormError>
    where
        S: DisplaySink + ?Sized,
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        let pending = self.begin_submit()?;
        sleep(pending.delay()).await;
        Ok(self.complete_submission(pending, sink))
    }

    /// Back to an empty draft with no errors
    pub fn reset(&mut self) {
        self.draft = ProfileDraft::default();
        self.errors = ValidationErrors::default();
        self.phase = FormPhase::Editing;
        self.revalidate_on_change = false;
    }

    fn edit(&mut self, path: FieldPath, apply: impl FnOnce(&mut ProfileDraft)) {
        if self.is_busy() {
            debug!("ignoring edit to {} while submitting", path);
            return;
        }
        apply(&mut self.draft);
        self.recheck(path);
    }

    fn recheck(&mut self, path: FieldPath) {
        if !self.revalidate_on_change {
            return;
        }
        match self.schema.validate_field(&self.draft, path) {
            Some(message) => self.errors.insert(path, message),
            None => self.errors.remove(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingSink;
    use crate::profile::Gender;

    fn fill_valid(form: &mut FormController) {
        form.set_first_name("Ann");
        form.set_last_name("Lee");
        form.set_email("ann@x.com");
        form.set_phone_number("1234567890");
        form.set_gender("female");
        form.set_date_of_birth("1990-01-15");
        form.set_tech_name(0, "Go").unwrap();
    }

    #[test]
    fn test_sanitize_phone_input() {
        assert_eq!(sanitize_phone_input("98-76-54-3210extra", 10), "9876543210");
        assert_eq!(sanitize_phone_input("(+91) 98765 43210 99", 10), "9198765432");
        assert_eq!(sanitize_phone_input("abc", 10), "");
        assert_eq!(sanitize_phone_input("١٢٣", 10), "");
    }

    #[test]
    fn test_phone_is_sanitized_on_input() {
        let mut form = FormController::default();
        let stored = form.set_phone_number("98-76-54-3210extra");
        assert_eq!(stored, "9876543210");
        assert_eq!(form.draft().phone_number, "9876543210");
    }

    #[test]
    fn test_empty_submit_reports_errors_and_stays_editing() {
        let mut form = FormController::default();
        let sink = RecordingSink::default();

        let err = form.begin_submit().unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.len(), 7);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.error_for(FieldPath::Email), Some("Email is required"));
        assert!(sink.received.is_empty());
    }

    #[test]
    fn test_valid_submit_pushes_once_and_resets() {
        let mut form = FormController::default();
        let mut sink = RecordingSink::default();
        fill_valid(&mut form);

        let pending = form.begin_submit().unwrap();
        assert!(form.is_busy());
        assert_eq!(pending.delay(), Duration::from_secs(3));
        assert_eq!(pending.delay_ms(), 3000);
        assert!(sink.received.is_empty());

        let receipt = form.complete_submission(pending, &mut sink);
        assert_eq!(receipt.message, SUCCESS_MESSAGE);
        assert_eq!(sink.received.len(), 1);
        assert_eq!(sink.received[0].date_of_birth, "15/Jan/1990");
        assert_eq!(sink.received[0].gender, Gender::Female);

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft(), &ProfileDraft::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_resubmit_while_submitting_is_rejected() {
        let mut form = FormController::default();
        let mut sink = RecordingSink::default();
        fill_valid(&mut form);

        let pending = form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::SubmissionInFlight));
        assert!(form.is_busy());

        form.complete_submission(pending, &mut sink);
        assert_eq!(sink.received.len(), 1);
    }

    #[test]
    fn test_edits_are_ignored_while_submitting() {
        let mut form = FormController::default();
        fill_valid(&mut form);
        let _pending = form.begin_submit().unwrap();

        form.set_first_name("Zed");
        form.append_tech();
        assert_eq!(form.remove_tech(0), Ok(()));
        assert_eq!(form.draft().first_name, "Ann");
        assert_eq!(form.draft().tech_stack.len(), 1);
    }

    #[test]
    fn test_fields_revalidate_after_failed_submit() {
        let mut form = FormController::default();

        // no errors shown while typing before the first submit
        form.set_first_name("John3");
        assert!(form.errors().is_empty());

        assert!(form.begin_submit().is_err());
        assert_eq!(
            form.error_for(FieldPath::FirstName),
            Some("Name cannot contain numbers or special characters")
        );

        form.set_first_name("John");
        assert_eq!(form.error_for(FieldPath::FirstName), None);

        form.set_email("nope");
        assert_eq!(form.error_for(FieldPath::Email), Some("Invalid email"));
    }

    #[test]
    fn test_remove_tech_shifts_errors() {
        let mut form = FormController::default();
        form.append_tech();
        form.append_tech();
        form.set_tech_name(0, "Go").unwrap();
        form.set_tech_name(2, "Rust").unwrap();

        assert!(form.begin_submit().is_err());
        assert!(form.errors().contains(FieldPath::TechStackName(1)));

        form.remove_tech(1).unwrap();
        assert!(!form.errors().contains(FieldPath::TechStackName(1)));
        assert_eq!(form.draft().tech_stack.len(), 2);
    }

    #[test]
    fn test_tech_stack_never_empties() {
        let mut form = FormController::default();
        assert!(matches!(form.remove_tech(0), Err(FormError::Collection(_))));
        form.append_tech();
        form.remove_tech(1).unwrap();
        assert!(form.remove_tech(0).is_err());
        assert_eq!(form.draft().tech_stack.len(), 1);
    }

    #[tokio::test]
    async fn test_async_submit_waits_then_pushes() {
        let config = FormConfig {
            submit_delay_ms: 5,
            ..FormConfig::default()
        };
        let mut form = FormController::new(config);
        let mut sink = RecordingSink::default();
        fill_valid(&mut form);

        let receipt = form.submit(&mut sink, tokio::time::sleep).await.unwrap();
        assert_eq!(receipt.message, SUCCESS_MESSAGE);
        assert_eq!(sink.received.len(), 1);
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[tokio::test]
    async fn test_async_submit_with_errors_never_sleeps() {
        let mut form = FormController::default();
        let mut sink = RecordingSink::default();
        let mut slept = false;

        let result = form
            .submit(&mut sink, |_| {
                slept = true;
                async {}
            })
            .await;

        assert!(matches!(result, Err(FormError::Validation(_))));
        assert!(!slept);
        assert!(sink.received.is_empty());
    }
}
