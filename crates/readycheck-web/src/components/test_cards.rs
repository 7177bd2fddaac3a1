use leptos::prelude::*;
use readycheck_core::{ProbeKind, TestSelector};

use crate::probes::{
    camera::CameraProbePanel, keyboard::KeyboardProbePanel, microphone::MicrophoneProbePanel,
    mouse::MouseProbePanel, speed::SpeedProbePanel, system::SystemProbePanel,
};

fn probe_panel(kind: ProbeKind) -> AnyView {
    match kind {
        ProbeKind::Keyboard => view! { <KeyboardProbePanel /> }.into_any(),
        ProbeKind::Mouse => view! { <MouseProbePanel /> }.into_any(),
        ProbeKind::Microphone => view! { <MicrophoneProbePanel /> }.into_any(),
        ProbeKind::Camera => view! { <CameraProbePanel /> }.into_any(),
        ProbeKind::Speed => view! { <SpeedProbePanel /> }.into_any(),
        ProbeKind::System => view! { <SystemProbePanel /> }.into_any(),
    }
}

#[component]
pub fn TestCards() -> impl IntoView {
    let selector = RwSignal::new(TestSelector::new());
    let showing_grid = Memo::new(move |_| selector.with(|s| s.is_grid()));
    let active = Memo::new(move |_| selector.with(|s| s.active_probe()));

    view! {
        <section id="test-cards" class="test-cards">
            <h2>"System Requirement Tests"</h2>
            {move || if showing_grid.get() {
                view! {
                    <div class="card-grid">
                        {ProbeKind::all().iter().map(|kind| {
                            let kind = *kind;
                            view! {
                                <button
                                    class="probe-card"
                                    on:click=move |_| selector.update(|s| s.select(kind.id()))
                                >
                                    <h3>{kind.title()}</h3>
                                    <p>{kind.blurb()}</p>
                                </button>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="probe-panel">
                        <button class="back-btn" on:click=move |_| selector.update(|s| s.back())>
                            "← Back to all tests"
                        </button>
                        <div class="probe-body">
                            {move || active.get().map(probe_panel)}
                        </div>
                    </div>
                }.into_any()
            }}
        </section>
    }
}
