use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use readycheck_core::network::{MAX_LATENCY_MS, MIN_DOWNLOAD_MBPS, MIN_UPLOAD_MBPS};
use readycheck_core::{
    run_speed_test, Grade, NetworkHost, NetworkProbe, ProbeKind, ReadyCheckError, Result,
    SimulatedSampler,
};

use crate::browser::{self, random_seed};
use crate::components::status::{CheckRow, ErrorPanel, TestStatus};
use crate::config::use_config;

/// Runs the speed test against the panel's signal. Once the panel unmounts
/// the signal is disposed and the run unwinds at its next wait.
struct SignalHost {
    probe: RwSignal<NetworkProbe>,
}

#[async_trait(?Send)]
impl NetworkHost for SignalHost {
    fn update<R: Default>(&self, f: impl FnOnce(&mut NetworkProbe) -> R) -> R {
        self.probe.try_update(f).unwrap_or_default()
    }

    async fn check_connectivity(&self, url: &str, timeout_ms: u32) -> bool {
        browser::check_connectivity(url, timeout_ms).await
    }

    async fn sleep(&self, ms: u32) -> Result<()> {
        TimeoutFuture::new(ms).await;
        if self.probe.try_with_untracked(|_| ()).is_none() {
            return Err(ReadyCheckError::ProbeFailed("speed test unmounted".to_string()));
        }
        Ok(())
    }
}

fn gauge(
    label: &'static str,
    unit: &'static str,
    value: Signal<Option<u32>>,
    grade: Signal<Grade>,
    fill: Signal<f64>,
) -> impl IntoView {
    view! {
        <div class=move || grade.get().css_class()>
            <div class="gauge-track">
                <div class="gauge-fill" style=move || format!("width: {:.0}%;", fill.get() * 100.0)></div>
            </div>
            <div class="gauge-value">
                {move || value.get().map_or("--".to_string(), |v| v.to_string())}
                " " {unit}
            </div>
            <div class="gauge-label">{label}</div>
        </div>
    }
}

fn threshold_text(value: Option<u32>, unit: &str) -> String {
    value.map_or("Not tested".to_string(), |v| format!("{} {}", v, unit))
}

#[component]
pub fn SpeedProbePanel() -> impl IntoView {
    let probe = RwSignal::new(NetworkProbe::new());
    let config = StoredValue::new(use_config().speed);

    probe.update(|p| p.set_online(browser::is_online()));
    let online = window_event_listener_untyped("online", move |_| {
        probe.update(|p| p.set_online(true));
    });
    let offline = window_event_listener_untyped("offline", move |_| {
        probe.update(|p| p.set_online(false));
    });
    on_cleanup(move || {
        online.remove();
        offline.remove();
    });

    let run = move |_| {
        let config = config.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let host = SignalHost { probe };
            let mut sampler = SimulatedSampler::from_seed(random_seed());
            run_speed_test(&host, &mut sampler, &config).await;
        });
    };

    let measured = move || probe.with(|p| *p.measurements());
    let status = Signal::derive(move || probe.with(|p| p.result.status()));
    let running = move || probe.with(|p| p.is_running());

    let latency = Signal::derive(move || measured().latency_ms);
    let download = Signal::derive(move || measured().download_mbps);
    let upload = Signal::derive(move || measured().upload_mbps);

    view! {
        <div class="probe speed-probe">
            <h3>{ProbeKind::Speed.title()}</h3>

            <Show when=move || !probe.with(|p| p.is_online())>
                <div class="offline-banner">
                    "You appear to be offline. Connect to the internet to run the speed test."
                </div>
            </Show>

            {move || probe.with(|p| p.result.error.clone())
                .map(|message| view! { <ErrorPanel message=message /> })}

            <div class="gauges">
                {gauge(
                    "Latency",
                    "ms",
                    latency,
                    Signal::derive(move || measured().latency_grade()),
                    Signal::derive(move || measured().latency_fill()),
                )}
                {gauge(
                    "Download",
                    "Mbps",
                    download,
                    Signal::derive(move || measured().download_grade()),
                    Signal::derive(move || measured().download_fill()),
                )}
                {gauge(
                    "Upload",
                    "Mbps",
                    upload,
                    Signal::derive(move || measured().upload_grade()),
                    Signal::derive(move || measured().upload_fill()),
                )}
            </div>

            <Show when=running>
                <div class="progress">
                    <div class="progress-track">
                        <div
                            class="progress-fill"
                            style=move || format!("width: {}%;", probe.with(|p| p.progress()))
                        ></div>
                    </div>
                    <p class="progress-label">{move || probe.with(|p| p.phase().label())}</p>
                </div>
            </Show>

            <div class="requirements">
                <h4>"Minimum Requirements"</h4>
                <CheckRow
                    label=format!("Latency below {} ms", MAX_LATENCY_MS)
                    ok=Signal::derive(move || measured().latency_ok().unwrap_or(false))
                    text=Signal::derive(move || threshold_text(latency.get(), "ms"))
                />
                <CheckRow
                    label=format!("Download above {} Mbps", MIN_DOWNLOAD_MBPS)
                    ok=Signal::derive(move || measured().download_ok().unwrap_or(false))
                    text=Signal::derive(move || threshold_text(download.get(), "Mbps"))
                />
                <CheckRow
                    label=format!("Upload above {} Mbps", MIN_UPLOAD_MBPS)
                    ok=Signal::derive(move || measured().upload_ok().unwrap_or(false))
                    text=Signal::derive(move || threshold_text(upload.get(), "Mbps"))
                />
            </div>

            <TestStatus kind=ProbeKind::Speed status=status />

            <div class="button-group">
                <button
                    class="run-btn"
                    disabled=move || !probe.with(|p| p.can_start())
                    on:click=run
                >
                    {move || if running() { "Testing..." } else { "Start Speed Test" }}
                </button>
                <button
                    class="reset-btn"
                    disabled=running
                    on:click=move |_| {
                        probe.update(|p| {
                            p.reset();
                        });
                    }
                >
                    "Reset Test"
                </button>
            </div>
        </div>
    }
}
