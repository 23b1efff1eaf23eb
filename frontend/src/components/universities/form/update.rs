//! Update function for the add/edit form component.
//!
//! Field edits go straight into the `UniversityForm` state machine. `Submit`
//! asks it for the request to send and issues exactly that one call;
//! `Finished` feeds the result back and notifies the parent on success.

use common::form::SubmitBlocked;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UniversityFormComponent;

pub fn update(
    component: &mut UniversityFormComponent,
    ctx: &Context<UniversityFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetField(field, value) => {
            component.form.set_field(field, value);
            true
        }
        Msg::SetEmail(index, value) => component.form.set_email(index, value),
        Msg::AddEmail => {
            component.form.append_email();
            true
        }
        Msg::RemoveEmail(index) => component.form.remove_email(index),
        Msg::Submit => match component.form.begin_submit() {
            Ok(request) => {
                let api = ctx.props().api.clone();
                let signal = component.signal();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.submit(&request, signal.as_ref()).await;
                    link.send_message(Msg::Finished(result));
                });
                true
            }
            Err(SubmitBlocked::AlreadySubmitting) => false,
            Err(SubmitBlocked::Invalid) => true,
        },
        Msg::Finished(result) => {
            if let Err(err) = &result {
                if !err.is_aborted() {
                    gloo_console::error!(format!("Failed to save university: {err}"));
                }
            }
            if let Some(outcome) = component.form.finish_submit(result) {
                ctx.props().on_success.emit(outcome);
            }
            true
        }
        Msg::Cancel => {
            ctx.props().on_cancel.emit(());
            false
        }
    }
}
