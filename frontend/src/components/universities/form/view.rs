//! View rendering for the add/edit form.
//!
//! Layout: Name, Location and Website inputs, the contact-email list with a
//! "Remove" button per entry and an "Add Email" button, an optional failure
//! banner, then Cancel/Submit. Each field's validation message is rendered
//! directly under it.

use common::form::TextField;
use common::validation::{FieldErrors, FieldPath};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UniversityFormComponent;
use crate::components::spinner::spinner;

const INPUT_STYLE: &str = "border:1px solid #ccc;padding:8px;width:100%;border-radius:4px;box-sizing:border-box;";
const PRIMARY_BUTTON: &str = "background:#1976d2;color:#fff;border:none;border-radius:4px;padding:8px 16px;cursor:pointer;display:flex;align-items:center;";
const DANGER_BUTTON: &str = "background:#d32f2f;color:#fff;border:none;border-radius:4px;padding:8px 12px;cursor:pointer;";
const NEUTRAL_BUTTON: &str = "background:#757575;color:#fff;border:none;border-radius:4px;padding:8px 16px;cursor:pointer;margin-right:8px;";

pub fn view(component: &UniversityFormComponent, ctx: &Context<UniversityFormComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;
    let draft = form.draft();
    let errors = form.errors();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="university-form" {onsubmit} novalidate={true} style="display:flex;flex-direction:column;gap:16px;">
            { text_field(link, "Name", TextField::Name, &draft.name, field_error(errors, &FieldPath::Name)) }
            { text_field(link, "Location", TextField::Location, &draft.location, field_error(errors, &FieldPath::Location)) }
            { text_field(link, "Website", TextField::Website, &draft.website, field_error(errors, &FieldPath::Website)) }
            { build_email_list(component, link) }
            { build_failure_banner(component) }
            { build_actions(component, link) }
        </form>
    }
}

/// Renders a labelled single-line input bound to `field`.
fn text_field(
    link: &Scope<UniversityFormComponent>,
    label: &'static str,
    field: TextField,
    value: &str,
    error: Html,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        Msg::SetField(field, input.value())
    });

    html! {
        <div>
            <label style="display:block;font-weight:bold;margin-bottom:4px;">{ label }</label>
            <input type="text" value={value.to_string()} {oninput} style={INPUT_STYLE} />
            { error }
        </div>
    }
}

/// Builds the dynamic contact-email list. The last remaining entry cannot be
/// removed.
fn build_email_list(component: &UniversityFormComponent, link: &Scope<UniversityFormComponent>) -> Html {
    let form = &component.form;
    let errors = form.errors();
    let removable = form.can_remove_email();

    let entries = form
        .draft()
        .contact_emails
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let oninput = link.callback(move |e: InputEvent| {
                let input = e.target_unchecked_into::<HtmlInputElement>();
                Msg::SetEmail(index, input.value())
            });
            let onremove = link.callback(move |_: MouseEvent| Msg::RemoveEmail(index));

            html! {
                <div>
                    <div style="display:flex;align-items:center;gap:8px;">
                        <input
                            type="email"
                            value={entry.email.clone()}
                            placeholder={format!("Email {}", index + 1)}
                            {oninput}
                            style={INPUT_STYLE}
                        />
                        <button type="button" onclick={onremove} disabled={!removable} style={DANGER_BUTTON}>
                            {"Remove"}
                        </button>
                    </div>
                    { field_error(errors, &FieldPath::ContactEmail(index)) }
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div>
            <label style="display:block;font-weight:bold;margin-bottom:8px;">{"Contact Emails"}</label>
            <div style="display:flex;flex-direction:column;gap:8px;">
                { entries }
            </div>
            <button
                type="button"
                onclick={link.callback(|_: MouseEvent| Msg::AddEmail)}
                style={format!("{PRIMARY_BUTTON}margin-top:12px;")}
            >
                {"Add Email"}
            </button>
            { field_error(errors, &FieldPath::ContactEmails) }
        </div>
    }
}

/// Shows why the last submission failed, if it did.
fn build_failure_banner(component: &UniversityFormComponent) -> Html {
    match component.form.failure() {
        Some(failure) => html! {
            <div
                role="alert"
                style="background:#fdecea;color:#b71c1c;border:1px solid #f5c6cb;border-radius:4px;padding:8px 12px;"
            >
                { format!("Could not save university: {failure}") }
            </div>
        },
        None => html! {},
    }
}

fn build_actions(component: &UniversityFormComponent, link: &Scope<UniversityFormComponent>) -> Html {
    let submitting = component.form.is_submitting();
    let label = if component.form.is_edit() {
        "Update University"
    } else {
        "Add University"
    };

    html! {
        <div style="display:flex;justify-content:flex-end;margin-top:8px;">
            <button type="button" onclick={link.callback(|_: MouseEvent| Msg::Cancel)} style={NEUTRAL_BUTTON}>
                {"Cancel"}
            </button>
            <button type="submit" disabled={submitting} style={PRIMARY_BUTTON}>
                {
                    if submitting {
                        html! {
                            <>
                                { spinner() }
                                <span style="margin-left:8px;">{"Submitting..."}</span>
                            </>
                        }
                    } else {
                        html! { <>{ label }</> }
                    }
                }
            </button>
        </div>
    }
}

fn field_error(errors: &FieldErrors, path: &FieldPath) -> Html {
    match errors.message_for(path) {
        Some(message) => html! {
            <p class="field-error" style="color:#d32f2f;margin:4px 0 0 0;font-size:0.875rem;">{ message }</p>
        },
        None => html! {},
    }
}
