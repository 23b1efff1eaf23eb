//! Component state for the add/edit form.

use common::form::UniversityForm;
use web_sys::{AbortController, AbortSignal};

use super::props::UniversityFormProps;
use crate::helpers::new_abort_controller;

/// Main state container for the `UniversityFormComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct UniversityFormComponent {
    /// Draft, inline errors and submission state of this form instance.
    pub form: UniversityForm,

    /// Cancels the in-flight submission when the form is torn down.
    pub abort: Option<AbortController>,
}

impl UniversityFormComponent {
    pub fn new(props: &UniversityFormProps) -> Self {
        Self {
            form: UniversityForm::new(&props.mode),
            abort: new_abort_controller(),
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.abort.as_ref().map(AbortController::signal)
    }
}
