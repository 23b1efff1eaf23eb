//! Root composition: the "Add University" button, the records table and the
//! modal hosting the add/edit form.
//!
//! On first render the runtime config is fetched from the static host; the
//! table mounts once it is known. Form outcomes close the modal and bump the
//! table's refresh counter.

use common::form::{FormMode, FormOutcome};
use common::model::config::ClientConfig;
use common::model::university::University;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_config, ApiClient};
use crate::components::modal::Modal;
use crate::components::spinner::page_spinner;
use crate::components::universities::form::UniversityFormComponent;
use crate::components::universities::table::UniversityTable;
use crate::helpers::{show_toast, ToastKind};

pub enum ModalState {
    Closed,
    Adding,
    Editing(University),
}

pub enum Msg {
    ConfigLoaded(ClientConfig),
    OpenAdd,
    OpenEdit(University),
    CloseModal,
    Submitted(FormOutcome),
}

pub struct App {
    api: Option<ApiClient>,
    modal: ModalState,
    refresh: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            api: None,
            modal: ModalState::Closed,
            refresh: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.api = Some(ApiClient::new(config));
                true
            }
            Msg::OpenAdd => {
                self.modal = ModalState::Adding;
                true
            }
            Msg::OpenEdit(university) => {
                self.modal = ModalState::Editing(university);
                true
            }
            Msg::CloseModal => {
                self.modal = ModalState::Closed;
                true
            }
            Msg::Submitted(outcome) => {
                self.modal = ModalState::Closed;
                self.refresh = self.refresh.wrapping_add(1);
                show_toast(
                    ToastKind::Success,
                    match outcome {
                        FormOutcome::Created => "University created.",
                        FormOutcome::Updated => "University updated.",
                    },
                );
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let Some(api) = &self.api else {
            return html! {
                <div class="container" style="max-width:1024px;margin:0 auto;padding:16px;">
                    { page_spinner() }
                </div>
            };
        };

        html! {
            <div class="container" style="max-width:1024px;margin:0 auto;padding:16px;font-family:Arial, sans-serif;">
                <h1 style="font-size:1.5rem;font-weight:bold;margin-bottom:16px;">{"Universities"}</h1>
                <button
                    type="button"
                    onclick={link.callback(|_: MouseEvent| Msg::OpenAdd)}
                    style="background:#1976d2;color:#fff;border:none;border-radius:4px;padding:8px 16px;margin-bottom:16px;cursor:pointer;"
                >
                    {"Add University"}
                </button>
                <UniversityTable
                    api={api.clone()}
                    refresh={self.refresh}
                    on_edit={link.callback(Msg::OpenEdit)}
                />
                { self.build_modal(api, link) }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let config = match fetch_config().await {
                    Ok(config) => config,
                    Err(err) => {
                        gloo_console::warn!(format!(
                            "Could not load runtime config, using same-origin API: {err}"
                        ));
                        ClientConfig::default()
                    }
                };
                link.send_message(Msg::ConfigLoaded(config));
            });
        }
    }
}

impl App {
    fn build_modal(&self, api: &ApiClient, link: &Scope<Self>) -> Html {
        let (is_open, title, mode) = match &self.modal {
            ModalState::Closed => (false, "", FormMode::Add),
            ModalState::Adding => (true, "Add University", FormMode::Add),
            ModalState::Editing(university) => {
                (true, "Edit University", FormMode::Edit(university.clone()))
            }
        };
        let key = match &mode {
            FormMode::Add => "add".to_string(),
            FormMode::Edit(university) => format!("edit-{}", university.id),
        };

        html! {
            <Modal {is_open} {title} on_close={link.callback(|_| Msg::CloseModal)}>
                <UniversityFormComponent
                    key={key}
                    {mode}
                    api={api.clone()}
                    on_success={link.callback(Msg::Submitted)}
                    on_cancel={link.callback(|_| Msg::CloseModal)}
                />
            </Modal>
        }
    }
}
