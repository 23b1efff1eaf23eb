//! Table of university records.
//!
//! Fetches `GET /universities` on first render and again whenever the parent
//! bumps `refresh`. Each row offers "Edit", which hands the record to the
//! parent, and "Delete", which asks for confirmation and then issues
//! `DELETE /universities/{id}` before reloading.
//!
//! Loads are numbered; a response that arrives after a newer load was issued
//! is dropped, so the table always shows the latest list.

use common::error::ApiError;
use common::model::university::{University, UniversityId};
use web_sys::AbortController;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::spinner::page_spinner;
use crate::helpers::{confirm, new_abort_controller, show_toast, ToastKind};

pub enum Msg {
    Reload,
    Loaded(u64, Result<Vec<University>, ApiError>),
    Delete(UniversityId),
    Deleted(Result<(), ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct UniversityTableProps {
    pub api: ApiClient,
    /// Changing this value makes the table fetch the list again.
    #[prop_or_default]
    pub refresh: u32,
    pub on_edit: Callback<University>,
}

pub struct UniversityTable {
    universities: Vec<University>,
    loading: bool,
    error: Option<String>,
    loads: LoadSequence,
    abort: Option<AbortController>,
}

/// Tickets handed to list requests; only the most recent one is current.
#[derive(Debug, Default)]
struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Toast text for a failed load. Aborted loads are silent.
fn load_failure_notice(err: &ApiError) -> Option<String> {
    if err.is_aborted() {
        None
    } else {
        Some(format!("Could not load universities: {err}"))
    }
}

impl Component for UniversityTable {
    type Message = Msg;
    type Properties = UniversityTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            universities: Vec::new(),
            loading: true,
            error: None,
            loads: LoadSequence::default(),
            abort: new_abort_controller(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Reload => {
                self.loading = true;
                self.load(ctx);
                true
            }
            Msg::Loaded(ticket, _) if !self.loads.is_current(ticket) => false,
            Msg::Loaded(_, Ok(universities)) => {
                self.universities = universities;
                self.loading = false;
                self.error = None;
                true
            }
            Msg::Loaded(_, Err(err)) => {
                let Some(notice) = load_failure_notice(&err) else {
                    return false;
                };
                gloo_console::error!(format!("Failed to load universities: {err}"));
                show_toast(ToastKind::Failure, &notice);
                self.loading = false;
                self.error = Some(err.to_string());
                true
            }
            Msg::Delete(id) => {
                let name = self
                    .universities
                    .iter()
                    .find(|u| u.id == id)
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| id.to_string());
                if !confirm(&format!("Delete {name}?")) {
                    return false;
                }

                let api = ctx.props().api.clone();
                let signal = self.signal();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.delete(&id, signal.as_ref()).await;
                    link.send_message(Msg::Deleted(result));
                });
                false
            }
            Msg::Deleted(Ok(())) => {
                show_toast(ToastKind::Success, "University deleted.");
                ctx.link().send_message(Msg::Reload);
                false
            }
            Msg::Deleted(Err(ApiError::Aborted)) => false,
            Msg::Deleted(Err(err)) => {
                gloo_console::error!(format!("Failed to delete university: {err}"));
                show_toast(ToastKind::Failure, &format!("Could not delete university: {err}"));
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().refresh != old_props.refresh || ctx.props().api != old_props.api {
            ctx.link().send_message(Msg::Reload);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_edit = ctx.props().on_edit.clone();
        let link = ctx.link();

        html! {
            <table class="university-table" style="width:100%;border-collapse:collapse;">
                <thead>
                    <tr style="text-align:left;border-bottom:2px solid #ddd;">
                        <th style="padding:8px;">{"Name"}</th>
                        <th style="padding:8px;">{"Location"}</th>
                        <th style="padding:8px;">{"Website"}</th>
                        <th style="padding:8px;">{"Contact Emails"}</th>
                        <th style="padding:8px;">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        if self.loading && self.universities.is_empty() {
                            html! { <tr><td colspan="5">{ page_spinner() }</td></tr> }
                        } else if let Some(error) = &self.error {
                            html! {
                                <tr>
                                    <td colspan="5" style="padding:8px;color:#d32f2f;">
                                        { format!("Could not load universities: {error}") }
                                    </td>
                                </tr>
                            }
                        } else if self.universities.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="5" style="padding:8px;color:#777;">{"No universities yet."}</td>
                                </tr>
                            }
                        } else {
                            self.universities
                                .iter()
                                .map(|university| row(university, &on_edit, link))
                                .collect::<Html>()
                        }
                    }
                </tbody>
            </table>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.load(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(controller) = &self.abort {
            controller.abort();
        }
    }
}

impl UniversityTable {
    fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.abort.as_ref().map(AbortController::signal)
    }

    fn load(&mut self, ctx: &Context<Self>) {
        let ticket = self.loads.begin();
        let api = ctx.props().api.clone();
        let signal = self.signal();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api.list(signal.as_ref()).await;
            link.send_message(Msg::Loaded(ticket, result));
        });
    }
}

fn row(university: &University, on_edit: &Callback<University>, link: &Scope<UniversityTable>) -> Html {
    let edit = {
        let on_edit = on_edit.clone();
        let university = university.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(university.clone()))
    };
    let delete = {
        let id = university.id.clone();
        link.callback(move |_: MouseEvent| Msg::Delete(id.clone()))
    };

    html! {
        <tr key={university.id.to_string()} style="border-bottom:1px solid #eee;">
            <td style="padding:8px;">{ university.name.clone() }</td>
            <td style="padding:8px;">{ university.location.clone() }</td>
            <td style="padding:8px;">
                <a href={university.website.clone()} target="_blank" rel="noopener noreferrer">
                    { university.website.clone() }
                </a>
            </td>
            <td style="padding:8px;">{ university.contact_emails.join(", ") }</td>
            <td style="padding:8px;white-space:nowrap;">
                <button
                    type="button"
                    onclick={edit}
                    style="background:#1976d2;color:#fff;border:none;border-radius:4px;padding:4px 12px;margin-right:8px;cursor:pointer;"
                >
                    {"Edit"}
                </button>
                <button
                    type="button"
                    onclick={delete}
                    style="background:#d32f2f;color:#fff;border:none;border-radius:4px;padding:4px 12px;cursor:pointer;"
                >
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_the_latest_load_is_current() {
        let mut loads = LoadSequence::default();
        let first = loads.begin();
        assert!(loads.is_current(first));

        let second = loads.begin();
        assert!(!loads.is_current(first));
        assert!(loads.is_current(second));
    }

    #[test]
    fn failed_load_produces_a_notice() {
        let err = ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(
            load_failure_notice(&err),
            Some("Could not load universities: server responded with 500: boom".to_string())
        );
        assert!(load_failure_notice(&ApiError::Transport("offline".to_string())).is_some());
    }

    #[test]
    fn aborted_load_is_silent() {
        assert_eq!(load_failure_notice(&ApiError::Aborted), None);
    }
}
