//! Add/edit university form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `UniversityFormProps`, `UniversityFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Reset the draft when the parent swaps the record being edited.
//! - Abort the in-flight submission when the form is destroyed.

use common::form::UniversityForm;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UniversityFormProps;
pub use state::UniversityFormComponent;

impl Component for UniversityFormComponent {
    type Message = Msg;
    type Properties = UniversityFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        UniversityFormComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().mode != old_props.mode && !self.form.is_submitting() {
            self.form = UniversityForm::new(&ctx.props().mode);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(controller) = &self.abort {
            controller.abort();
        }
    }
}
