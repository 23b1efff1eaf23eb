//! Add/edit form state machine.
//!
//! [`UniversityForm`] owns the draft of one form instance and gates
//! submission:
//!
//! ```text
//! Idle --begin_submit (valid)--> Submitting --finish_submit--> Idle
//! ```
//!
//! `begin_submit` hands back the single request the caller must issue and
//! `finish_submit` feeds its result back in. While `Submitting`, further
//! submits are refused so at most one request is in flight per form.

use crate::error::ApiError;
use crate::model::draft::{EmailEntry, UniversityDraft};
use crate::model::university::{University, UniversityId, UniversityPayload};
use crate::validation::{validate, FieldErrors};

/// Which operation the form performs on submit.
#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    Add,
    Edit(University),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    Location,
    Website,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// The request a successful `begin_submit` asks the caller to send.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitRequest {
    Create(UniversityPayload),
    Update(UniversityId, UniversityPayload),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    AlreadySubmitting,
    /// Validation failed; errors are available through [`UniversityForm::errors`].
    Invalid,
}

/// Signal sent to the parent once the service has accepted the submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Created,
    Updated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UniversityForm {
    target: Option<UniversityId>,
    draft: UniversityDraft,
    errors: FieldErrors,
    state: SubmissionState,
    attempted: bool,
    failure: Option<String>,
}

impl UniversityForm {
    pub fn new(mode: &FormMode) -> Self {
        match mode {
            FormMode::Add => Self::add(),
            FormMode::Edit(university) => Self::edit(university),
        }
    }

    /// Empty fields and a single empty email slot; submits a create.
    pub fn add() -> Self {
        Self::with_draft(None, UniversityDraft::empty())
    }

    /// Pre-populated from `university`; submits an update for its id.
    pub fn edit(university: &University) -> Self {
        Self::with_draft(Some(university.id.clone()), UniversityDraft::from(university))
    }

    fn with_draft(target: Option<UniversityId>, draft: UniversityDraft) -> Self {
        Self {
            target,
            draft,
            errors: FieldErrors::default(),
            state: SubmissionState::Idle,
            attempted: false,
            failure: None,
        }
    }

    pub fn draft(&self) -> &UniversityDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    /// Message of the last failed submission, cleared on the next attempt.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn set_field(&mut self, field: TextField, value: String) {
        match field {
            TextField::Name => self.draft.name = value,
            TextField::Location => self.draft.location = value,
            TextField::Website => self.draft.website = value,
        }
        self.revalidate();
    }

    /// Returns `false` when `index` is out of range.
    pub fn set_email(&mut self, index: usize, value: String) -> bool {
        let Some(entry) = self.draft.contact_emails.get_mut(index) else {
            return false;
        };
        entry.email = value;
        self.revalidate();
        true
    }

    pub fn append_email(&mut self) {
        self.draft.contact_emails.push(EmailEntry::default());
        self.revalidate();
    }

    /// Whether the entry at any position may be removed; the list never drops
    /// below one entry through the form.
    pub fn can_remove_email(&self) -> bool {
        self.draft.contact_emails.len() > 1
    }

    /// Removes the entry at `index`. Refuses out-of-range indices and the last
    /// remaining entry.
    pub fn remove_email(&mut self, index: usize) -> bool {
        if index >= self.draft.contact_emails.len() || !self.can_remove_email() {
            return false;
        }
        self.draft.contact_emails.remove(index);
        self.revalidate();
        true
    }

    /// Validates the draft and, if it passes, moves to `Submitting` and returns
    /// the one request to issue.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        self.attempted = true;
        self.failure = None;

        match validate(&self.draft) {
            Ok(payload) => {
                self.errors = FieldErrors::default();
                self.state = SubmissionState::Submitting;
                Ok(match &self.target {
                    Some(id) => SubmitRequest::Update(id.clone(), payload),
                    None => SubmitRequest::Create(payload),
                })
            }
            Err(errors) => {
                self.errors = errors;
                Err(SubmitBlocked::Invalid)
            }
        }
    }

    /// Records the outcome of the request returned by `begin_submit`.
    ///
    /// Always returns to `Idle`. A cancelled request leaves no trace; any other
    /// failure is kept for display.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<FormOutcome> {
        self.state = SubmissionState::Idle;
        match result {
            Ok(()) => {
                self.failure = None;
                Some(if self.is_edit() {
                    FormOutcome::Updated
                } else {
                    FormOutcome::Created
                })
            }
            Err(ApiError::Aborted) => None,
            Err(err) => {
                self.failure = Some(err.to_string());
                None
            }
        }
    }

    // Inline errors only start tracking edits after the first submit attempt.
    fn revalidate(&mut self) {
        if self.attempted {
            self.errors = validate(&self.draft).err().unwrap_or_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ErrorKind, FieldPath};
    use pretty_assertions::assert_eq;

    fn fill_mit(form: &mut UniversityForm) {
        form.set_field(TextField::Name, "MIT".to_string());
        form.set_field(TextField::Location, "Cambridge".to_string());
        form.set_field(TextField::Website, "https://mit.edu".to_string());
        assert!(form.set_email(0, "a@mit.edu".to_string()));
    }

    fn stanford() -> University {
        University {
            id: UniversityId::new("17"),
            name: "Stanford".to_string(),
            location: "Stanford".to_string(),
            website: "https://stanford.edu".to_string(),
            contact_emails: vec!["a@stanford.edu".to_string(), "b@stanford.edu".to_string()],
        }
    }

    #[test]
    fn add_form_starts_with_one_empty_email() {
        let form = UniversityForm::add();
        assert_eq!(form.draft(), &UniversityDraft::empty());
        assert_eq!(form.draft().contact_emails.len(), 1);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!form.is_edit());
    }

    #[test]
    fn add_submission_creates_once_and_signals_created() {
        let mut form = UniversityForm::add();
        fill_mit(&mut form);

        let request = form.begin_submit().unwrap();
        assert_eq!(
            request,
            SubmitRequest::Create(UniversityPayload {
                name: "MIT".to_string(),
                location: "Cambridge".to_string(),
                website: "https://mit.edu".to_string(),
                contact_emails: vec!["a@mit.edu".to_string()],
            })
        );
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::AlreadySubmitting));

        assert_eq!(form.finish_submit(Ok(())), Some(FormOutcome::Created));
        assert!(!form.is_submitting());
        assert_eq!(form.failure(), None);
    }

    #[test]
    fn edit_form_wraps_existing_emails() {
        let form = UniversityForm::edit(&stanford());
        let emails: Vec<&str> = form
            .draft()
            .contact_emails
            .iter()
            .map(|e| e.email.as_str())
            .collect();
        assert_eq!(emails, vec!["a@stanford.edu", "b@stanford.edu"]);
        assert!(form.is_edit());
    }

    #[test]
    fn edit_after_removal_updates_with_remaining_email() {
        let mut form = UniversityForm::new(&FormMode::Edit(stanford()));
        assert!(form.remove_email(0));

        let request = form.begin_submit().unwrap();
        match request {
            SubmitRequest::Update(id, payload) => {
                assert_eq!(id, UniversityId::new("17"));
                assert_eq!(payload.contact_emails, vec!["b@stanford.edu".to_string()]);
            }
            other => panic!("expected update, got {other:?}"),
        }
        assert_eq!(form.finish_submit(Ok(())), Some(FormOutcome::Updated));
    }

    #[test]
    fn invalid_website_blocks_submission() {
        let mut form = UniversityForm::add();
        fill_mit(&mut form);
        form.set_field(TextField::Website, "not-a-url".to_string());

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert!(!form.is_submitting());
        assert_eq!(form.errors().len(), 1);
        assert_eq!(
            form.errors().message_for(&FieldPath::Website),
            Some("Invalid website URL")
        );
    }

    #[test]
    fn empty_email_list_blocks_submission() {
        let mut form = UniversityForm::edit(&University {
            contact_emails: vec![],
            ..stanford()
        });

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(
            form.errors().get(&FieldPath::ContactEmails).map(|e| e.kind),
            Some(ErrorKind::MinCount)
        );
    }

    #[test]
    fn last_email_cannot_be_removed() {
        let mut form = UniversityForm::add();
        assert!(!form.can_remove_email());
        assert!(!form.remove_email(0));
        assert!(!form.remove_email(5));

        form.append_email();
        assert_eq!(form.draft().contact_emails.len(), 2);
        assert!(form.remove_email(1));
        assert_eq!(form.draft().contact_emails.len(), 1);
    }

    #[test]
    fn errors_appear_only_after_first_attempt_then_track_edits() {
        let mut form = UniversityForm::add();
        form.set_field(TextField::Website, "nope".to_string());
        assert!(form.errors().is_empty());

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert!(form.errors().get(&FieldPath::Name).is_some());

        form.set_field(TextField::Name, "MIT".to_string());
        assert!(form.errors().get(&FieldPath::Name).is_none());
        assert!(form.errors().get(&FieldPath::Website).is_some());
    }

    #[test]
    fn transport_failure_is_kept_and_cleared_on_retry() {
        let mut form = UniversityForm::add();
        fill_mit(&mut form);
        form.begin_submit().unwrap();

        let outcome = form.finish_submit(Err(ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }));
        assert_eq!(outcome, None);
        assert!(!form.is_submitting());
        assert_eq!(form.failure(), Some("server responded with 500: boom"));

        form.begin_submit().unwrap();
        assert_eq!(form.failure(), None);
    }

    #[test]
    fn aborted_request_is_silent() {
        let mut form = UniversityForm::add();
        fill_mit(&mut form);
        form.begin_submit().unwrap();

        assert_eq!(form.finish_submit(Err(ApiError::Aborted)), None);
        assert_eq!(form.failure(), None);
        assert_eq!(form.state(), SubmissionState::Idle);
    }
}
