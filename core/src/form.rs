//! Form draft state machine and client-side validation.
//!
//! The form owns the only transient, not-yet-persisted state in the
//! client: the editable name/email draft, one optional validation error
//! per field, and the in-flight submit flag. Validation runs on submit
//! only; editing a field clears that field's error immediately without
//! re-validating.

use crate::types::{User, UserDraft};

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
}

/// Editable form state for a single user draft.
#[derive(Debug, Default)]
pub struct UserForm {
    draft: UserDraft,
    name_error: Option<FieldError>,
    email_error: Option<FieldError>,
    submitting: bool,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the draft to the target's current field values (or to empty
    /// when there is no target) and clear all validation errors. Called
    /// whenever the editing target changes.
    pub fn reset_for(&mut self, target: Option<&User>) {
        self.draft = match target {
            Some(user) => UserDraft::new(user.name.clone(), user.email.clone()),
            None => UserDraft::default(),
        };
        self.name_error = None;
        self.email_error = None;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.name_error = None;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
        self.email_error = None;
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn name_error(&self) -> Option<FieldError> {
        self.name_error
    }

    pub fn email_error(&self) -> Option<FieldError> {
        self.email_error
    }

    /// Human-readable message for the name field's current error.
    pub fn name_error_message(&self) -> Option<&'static str> {
        self.name_error.map(|_| "Name is required")
    }

    /// Human-readable message for the email field's current error.
    pub fn email_error_message(&self) -> Option<&'static str> {
        self.email_error.map(|err| match err {
            FieldError::Required => "Email is required",
            FieldError::InvalidFormat => "Please enter a valid email address",
        })
    }

    /// Validate the draft, recording per-field errors. Returns `true`
    /// when the draft may be submitted. Runs before any request is
    /// built; a failing draft never reaches the network.
    pub fn validate(&mut self) -> bool {
        self.name_error = if self.draft.name.trim().is_empty() {
            Some(FieldError::Required)
        } else {
            None
        };
        self.email_error = if self.draft.email.trim().is_empty() {
            Some(FieldError::Required)
        } else if !email_is_valid(&self.draft.email) {
            Some(FieldError::InvalidFormat)
        } else {
            None
        };
        self.name_error.is_none() && self.email_error.is_none()
    }

    /// Mark a submit as in flight. Returns `false` if one already is,
    /// in which case the caller must not start another.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

/// Shape check for an email address: one or more non-space-non-`@`
/// characters, `@`, then a domain containing an interior dot. Exactly
/// the looseness a client-side gate wants; the server has the final say.
fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
