//! Framework-independent state machine behind the reset password page.
//!
//! [`ResetPasswordFormState`] owns the two editable fields, the link
//! parameters, per-field errors, and the
//! [`SubmissionState`]. The view model drives it from Leptos signals; tests
//! drive it directly.

use leptos_router::ParamsMap;

use super::utils::{self, FieldErrors, ResetField};
use crate::api::{ApiError, ResetPasswordRequest};

/// `token` / `userId` delivered by the emailed link. Never edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetLink {
    token: String,
    user_id: String,
}

impl ResetLink {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
        }
    }

    pub fn from_query(query: &ParamsMap) -> Self {
        Self::new(
            query.get("token").cloned().unwrap_or_default(),
            query.get("userId").cloned().unwrap_or_default(),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    Form,
    Submitting,
    Success,
}

impl From<SubmissionState> for RenderState {
    fn from(state: SubmissionState) -> Self {
        match state {
            SubmissionState::Idle | SubmissionState::Failed => RenderState::Form,
            SubmissionState::Submitting => RenderState::Submitting,
            SubmissionState::Succeeded => RenderState::Success,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// All fields valid; the caller must send this request and report back
    /// through [`ResetPasswordFormState::complete`].
    Dispatch(ResetPasswordRequest),
    Blocked(FieldErrors),
    /// A submission is in flight or already succeeded.
    Ignored,
}

/// Write-only banner slots of the hosting layout.
pub trait StatusSink {
    fn set_header_text(&self, message: String);
    fn set_error(&self, message: String);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetPasswordFormState {
    link: ResetLink,
    password: String,
    confirm_password: String,
    /// Set by the first submit attempt; edits re-validate from then on.
    live_validation: bool,
    errors: FieldErrors,
    submission: SubmissionState,
}

impl ResetPasswordFormState {
    pub fn new(link: ResetLink) -> Self {
        Self {
            link,
            ..Self::default()
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: ResetField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn render_state(&self) -> RenderState {
        self.submission.into()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.submission == SubmissionState::Submitting
            || self.errors.contains(ResetField::Password)
            || self.errors.contains(ResetField::ConfirmPassword)
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.revalidate(ResetField::Password);
        // the confirmation is compared against the live password
        self.revalidate(ResetField::ConfirmPassword);
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.confirm_password = value;
        self.revalidate(ResetField::ConfirmPassword);
    }

    pub fn submit(&mut self) -> SubmitAttempt {
        if matches!(
            self.submission,
            SubmissionState::Submitting | SubmissionState::Succeeded
        ) {
            return SubmitAttempt::Ignored;
        }

        self.live_validation = true;
        for field in ResetField::ALL {
            self.validate_field(field);
        }
        if !self.errors.is_empty() {
            return SubmitAttempt::Blocked(self.errors.clone());
        }

        self.submission = SubmissionState::Submitting;
        SubmitAttempt::Dispatch(ResetPasswordRequest {
            token: self.link.token.clone(),
            user_id: self.link.user_id.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }

    /// Applies the backend outcome. Returns `false` when no submission was in
    /// flight and the outcome was dropped.
    pub fn complete(&mut self, outcome: &Result<(), ApiError>, sink: &impl StatusSink) -> bool {
        if self.submission != SubmissionState::Submitting {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.submission = SubmissionState::Succeeded;
                sink.set_header_text(t!("auth.reset_password_success").to_string());
            }
            Err(_) => {
                // Rejections and transport failures alike read as a bad link.
                self.submission = SubmissionState::Failed;
                sink.set_error(t!("auth.error_invalid_reset_token").to_string());
            }
        }
        true
    }

    fn revalidate(&mut self, field: ResetField) {
        if self.live_validation {
            self.validate_field(field);
        }
    }

    fn validate_field(&mut self, field: ResetField) {
        let result = match field {
            ResetField::Token => utils::validate_token(&self.link.token),
            ResetField::UserId => utils::validate_user_id(&self.link.user_id),
            ResetField::Password => utils::validate_password(&self.password),
            ResetField::ConfirmPassword => {
                utils::validate_confirm_password(&self.password, &self.confirm_password)
            }
        };
        self.errors.record(field, result);
    }
}
