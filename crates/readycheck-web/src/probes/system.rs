use leptos::prelude::*;
use readycheck_core::{ProbeKind, SystemProbe, SystemSnapshot};

use crate::browser::read_environment;
use crate::components::status::{CheckRow, TestStatus};

fn info_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{value}</span>
        </div>
    }
}

fn requirement(label: &'static str, ok: bool) -> impl IntoView {
    let text = if ok { "Yes" } else { "No" };
    view! { <CheckRow label=label ok=Signal::stored(ok) text=Signal::stored(text.to_string()) /> }
}

fn snapshot_view(s: SystemSnapshot) -> impl IntoView {
    view! {
        <div class="system-info">
            {info_row("Browser", format!("{} {}", s.browser.label(), s.browser_version))}
            {info_row("Operating System", s.os.label().to_string())}
            {info_row("Screen Resolution", s.screen_resolution())}
            {info_row("Device Type", s.device_type.label().to_string())}
            {info_row("Language", s.language.clone())}
        </div>
        <div class="requirements">
            <h4>"System Requirements"</h4>
            {requirement("Modern Browser", s.is_modern_browser())}
            {requirement("HD Resolution or higher", s.has_hd_resolution())}
            {requirement("Cookies Enabled", s.cookies_enabled)}
        </div>
    }
}

#[component]
pub fn SystemProbePanel() -> impl IntoView {
    let probe = RwSignal::new(SystemProbe::new());
    let refresh = move || {
        let env = read_environment();
        probe.update(|p| {
            p.refresh(&env);
        });
    };
    refresh();

    let status = Signal::derive(move || probe.with(|p| p.result.status()));

    view! {
        <div class="probe system-probe">
            <h3>{ProbeKind::System.title()}</h3>

            {move || match probe.with(|p| p.snapshot().cloned()) {
                Some(s) => snapshot_view(s).into_any(),
                None => view! { <p class="placeholder">"Loading system information..."</p> }.into_any(),
            }}

            <TestStatus kind=ProbeKind::System status=status />

            <div class="button-group">
                <button class="run-btn" on:click=move |_| refresh()>"Refresh System Info"</button>
            </div>
        </div>
    }
}
