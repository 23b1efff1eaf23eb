//! Properties for the `UniversityFormComponent`.
//!
//! The same component backs both the add and the edit form; `mode` decides
//! the initial values and whether submitting creates or updates a record.

use common::form::{FormMode, FormOutcome};
use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct UniversityFormProps {
    /// `Add` starts empty with one email slot; `Edit` is pre-populated from
    /// the record and submits an update for its id.
    pub mode: FormMode,

    pub api: ApiClient,

    /// Fired once the service accepts the submission. The parent owns any
    /// refresh of shared lists.
    pub on_success: Callback<FormOutcome>,

    /// Fired by the "Cancel" button.
    pub on_cancel: Callback<()>,
}
