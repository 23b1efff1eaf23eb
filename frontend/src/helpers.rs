//! Small DOM utilities shared by the components.
//!
//! - **User feedback**: short-lived toast notifications for completed or
//!   failed operations.
//! - **Confirmation**: the browser's native confirm prompt, used before
//!   destructive actions.
//! - **Cancellation**: creation of the per-component `AbortController`.

use web_sys::AbortController;

const TOAST_LIFETIME_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "#2e7d32",
            ToastKind::Failure => "#c62828",
        }
    }
}

/// Inline style of a toast: pinned to the bottom centre, above the modal.
fn toast_style(kind: ToastKind) -> String {
    [
        ("position", "fixed"),
        ("bottom", "24px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", kind.background()),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("box-shadow", "0 2px 6px rgba(0, 0, 0, 0.3)"),
        ("z-index", "10000"),
        ("font-family", "Arial, sans-serif"),
    ]
    .iter()
    .map(|(property, value)| format!("{property}:{value};"))
    .collect()
}

/// Shows `message` in a toast that removes itself after three seconds.
///
/// The root component posts the created/updated notices; the table posts the
/// deleted notice and any load or delete failure.
pub fn show_toast(kind: ToastKind, message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_attribute("role", "status").ok();
    toast.set_attribute("style", &toast_style(kind)).ok();
    if body.append_child(&toast).is_err() {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        toast.remove();
    });
}

/// Asks the user to confirm `message`. Anything other than an explicit "OK"
/// (including a missing window) counts as a refusal.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Creates the controller whose signal accompanies every request a component
/// issues. `None` when the browser lacks `AbortController`; requests then run
/// uncancellable.
pub fn new_abort_controller() -> Option<AbortController> {
    match AbortController::new() {
        Ok(controller) => Some(controller),
        Err(err) => {
            gloo_console::warn!("AbortController unavailable:", err);
            None
        }
    }
}
