use leptos::prelude::*;
use readycheck_core::{CapturePhase, MicrophoneProbe, ProbeKind};

use crate::components::status::{ErrorPanel, TestStatus};
use crate::config::use_config;
use crate::media::MicrophoneSession;

#[component]
pub fn MicrophoneProbePanel() -> impl IntoView {
    let probe = RwSignal::new(MicrophoneProbe::new());
    let session = StoredValue::new_local(None::<MicrophoneSession>);
    let fft_size = use_config().microphone.fft_size;

    let release = move || {
        session.try_update_value(|s| *s = None);
    };
    on_cleanup(release);

    let start = move |_| {
        let Some(ticket) = probe.try_update(|p| p.request()).flatten() else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let mut opened = match MicrophoneSession::open(fft_size).await {
                Ok(s) => s,
                Err(e) => {
                    probe.try_update(|p| p.denied(ticket, &e));
                    return;
                }
            };

            if !probe.try_update(|p| p.granted(ticket)).unwrap_or(false) {
                tracing::debug!("Microphone grant arrived after stop, releasing");
                return;
            }

            opened.start_sampling(move |bins| {
                probe.try_update(|p| {
                    p.sample(bins);
                });
            });
            // A disposed store drops the session with the closure.
            session.try_update_value(|s| *s = Some(opened));
        });
    };

    let stop = move |_| {
        release();
        probe.update(|p| p.stop());
    };

    let reset = move |_| {
        release();
        probe.update(|p| p.reset());
    };

    let status = Signal::derive(move || probe.with(|p| p.result.status()));
    let recording = move || probe.with(|p| p.is_recording());

    view! {
        <div class="probe microphone-probe">
            <h3>{ProbeKind::Microphone.title()}</h3>

            {move || match probe.with(|p| p.result.error.clone()) {
                Some(message) => view! { <ErrorPanel message=message /> }.into_any(),
                None => view! {
                    <div class="level-meter">
                        {move || probe.with(|p| {
                            p.levels().iter().map(|level| view! {
                                <div class="level-bar" style=format!("height: {:.0}%;", level * 100.0)></div>
                            }).collect::<Vec<_>>()
                        })}
                    </div>
                    <p class="hint">
                        {move || if recording() {
                            "Speak into your microphone to see the audio levels"
                        } else {
                            "Click Start to test your microphone"
                        }}
                    </p>
                }.into_any(),
            }}

            <TestStatus kind=ProbeKind::Microphone status=status />

            <div class="button-group">
                {move || if recording() {
                    view! { <button class="cancel-btn" on:click=stop>"Stop Test"</button> }.into_any()
                } else {
                    view! {
                        <button
                            class="run-btn"
                            disabled=move || !probe.with(|p| p.phase() == CapturePhase::Idle)
                            on:click=start
                        >
                            "Start Test"
                        </button>
                    }.into_any()
                }}
                <button class="reset-btn" on:click=reset>"Reset Test"</button>
            </div>
        </div>
    }
}
