//! Generic modal container.
//!
//! Presentation only: `is_open` decides whether anything is rendered, and the
//! overlay or the close button report back through `on_close`. Hosted content
//! never sees the modal's state.

use uuid::Uuid;
use yew::prelude::*;

pub struct Modal {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.is_open {
            return html! {};
        }

        let title_id = format!("{}-title", self.id);
        let on_overlay = props.on_close.reform(|_: MouseEvent| ());
        let on_close_button = props.on_close.reform(|_: MouseEvent| ());
        // Clicks inside the dialog must not reach the overlay.
        let keep_inside = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div
                class="modal-overlay"
                id={self.id.clone()}
                onclick={on_overlay}
                style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.5);z-index:9000;display:flex;align-items:center;justify-content:center;"
            >
                <div
                    class="modal-dialog"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                    onclick={keep_inside}
                    style="position:relative;background:#fff;border-radius:8px;padding:24px;min-width:420px;max-width:90vw;max-height:90vh;overflow:auto;box-shadow:0 8px 24px rgba(0,0,0,0.25);"
                >
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        onclick={on_close_button}
                        style="position:absolute;top:12px;right:12px;background:none;border:none;font-size:1.25rem;cursor:pointer;"
                    >
                        { "✕" }
                    </button>
                    <h2 id={title_id} style="font-size:1.125rem;font-weight:bold;margin:0 0 16px 0;">
                        { props.title.clone() }
                    </h2>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
