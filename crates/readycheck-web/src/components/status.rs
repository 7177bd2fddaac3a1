use leptos::prelude::*;
use readycheck_core::{ProbeKind, ProbeStatus};

#[component]
pub fn TestStatus(kind: ProbeKind, status: Signal<ProbeStatus>) -> impl IntoView {
    view! {
        <div class="test-status">
            <span class="status-label">"Test Status:"</span>
            {move || {
                let s = status.get();
                let text = match s {
                    ProbeStatus::Pending => kind.pending_text(),
                    ProbeStatus::Passed => "✓ Passed",
                    ProbeStatus::Failed => "✗ Failed",
                };
                view! { <span class=s.css_class()>{text}</span> }
            }}
        </div>
    }
}

/// One "label: detected / not detected" row with an indicator dot.
#[component]
pub fn CheckRow(
    #[prop(into)] label: String,
    ok: Signal<bool>,
    text: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="check-row">
            <span class=move || if ok.get() { "dot ok" } else { "dot" }></span>
            <span>{label} ": " {move || text.get()}</span>
        </div>
    }
}

#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="error-panel">
            <p style="color: var(--error);">{message}</p>
        </div>
    }
}
