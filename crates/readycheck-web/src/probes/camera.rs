use leptos::html;
use leptos::prelude::*;
use readycheck_core::{CameraProbe, CaptureDevice, CaptureTicket, ProbeKind, ReadyCheckError};
use web_sys::HtmlVideoElement;

use crate::components::status::{ErrorPanel, TestStatus};
use crate::media::{CameraSession, MediaCapture};

/// Claim a granted stream for the preview element. `None` means the grant is
/// stale or the panel is gone, and the caller must release the stream.
fn claim_preview(
    probe: RwSignal<CameraProbe>,
    video_ref: NodeRef<html::Video>,
    ticket: CaptureTicket,
) -> Option<HtmlVideoElement> {
    if !probe.try_update(|p| p.granted(ticket)).unwrap_or(false) {
        tracing::debug!("Camera grant arrived after stop, releasing");
        return None;
    }

    let video = video_ref.try_get_untracked().flatten();
    if video.is_none() {
        tracing::warn!("Camera preview element missing, releasing");
        probe.try_update(|p| {
            p.denied(
                ticket,
                &ReadyCheckError::PermissionDenied {
                    device: CaptureDevice::Camera,
                },
            )
        });
    }
    video
}

#[component]
pub fn CameraProbePanel() -> impl IntoView {
    let probe = RwSignal::new(CameraProbe::new());
    let session = StoredValue::new_local(None::<CameraSession>);
    let video_ref = NodeRef::<html::Video>::new();

    let release = move || {
        session.try_update_value(|s| *s = None);
    };
    on_cleanup(release);

    let start = move |_| {
        let Some(ticket) = probe.try_update(|p| p.request()).flatten() else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let capture = match MediaCapture::acquire(CaptureDevice::Camera).await {
                Ok(c) => c,
                Err(e) => {
                    probe.try_update(|p| p.denied(ticket, &e));
                    return;
                }
            };

            let Some(video) = claim_preview(probe, video_ref, ticket) else {
                return;
            };

            let attached = CameraSession::attach(capture, video, move || {
                probe.try_update(|p| p.metadata_loaded(ticket));
            });
            // A disposed store drops the session with the closure.
            session.try_update_value(|s| *s = Some(attached));
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
    let active = move || probe.with(|p| p.is_active());
    let error = move || probe.with(|p| p.result.error.clone());

    view! {
        <div class="probe camera-probe">
            <h3>{ProbeKind::Camera.title()}</h3>

            {move || error().map(|message| view! { <ErrorPanel message=message /> })}

            <div class="camera-preview" class:hidden=move || error().is_some()>
                <video node_ref=video_ref class:live=active autoplay=true></video>
                <Show when=move || !active()>
                    <p class="placeholder">"Camera preview will appear here"</p>
                </Show>
            </div>

            <TestStatus kind=ProbeKind::Camera status=status />

            <div class="button-group">
                {move || if probe.with(|p| p.is_busy()) {
                    view! { <button class="cancel-btn" on:click=stop>"Stop Camera"</button> }.into_any()
                } else {
                    view! {
                        <button class="run-btn" on:click=start>"Start Camera"</button>
                    }.into_any()
                }}
                <button class="reset-btn" on:click=reset>"Reset Test"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    fn test_grant_after_unmount_is_released() {
        let owner = Owner::new();
        let (probe, video_ref, ticket) = owner.with(|| {
            let probe = RwSignal::new(CameraProbe::new());
            let ticket = probe.try_update(|p| p.request()).flatten();
            (probe, NodeRef::<html::Video>::new(), ticket)
        });
        let ticket = ticket.expect("idle probe hands out a ticket");

        owner.cleanup();

        assert!(claim_preview(probe, video_ref, ticket).is_none());
    }

    #[test]
    fn test_grant_without_preview_element_fails() {
        let owner = Owner::new();
        owner.with(|| {
            let probe = RwSignal::new(CameraProbe::new());
            let video_ref = NodeRef::<html::Video>::new();
            let ticket = probe
                .try_update(|p| p.request())
                .flatten()
                .expect("idle probe hands out a ticket");

            assert!(claim_preview(probe, video_ref, ticket).is_none());
            probe.with_untracked(|p| {
                assert!(!p.is_busy());
                assert_eq!(p.result.passed, Some(false));
                assert!(p.result.error.is_some());
            });
        });
    }
}
