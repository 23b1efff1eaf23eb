use yew::prelude::*;

/// Inline rotating indicator, sized to sit next to button text.
pub fn spinner() -> Html {
    html! {
        <>
            <span
                class="spinner"
                style="display:inline-block;width:16px;height:16px;border:3px solid rgba(255,255,255,0.4);border-top-color:#fff;border-radius:50%;animation:spin 1s linear infinite;vertical-align:middle;"
            />
            <style>{r#"
                @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
            "#}</style>
        </>
    }
}

/// Larger, dark variant used while the table is loading.
pub fn page_spinner() -> Html {
    html! {
        <div style="display:flex;align-items:center;justify-content:center;padding:24px;">
            <div
                class="spinner"
                style="width:32px;height:32px;border:4px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;"
            />
            <style>{r#"
                @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
            "#}</style>
        </div>
    }
}
