//! Owned handles for capture devices and the per-frame sampling loop.
//!
//! Every handle releases its resource in `Drop`. Probes keep them in an
//! `Option` and release with `take()`, so stop, reset and unmount can run in
//! any order and the release still happens once.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

use leptos::prelude::*;
use readycheck_core::{CaptureDevice, ReadyCheckError, Result};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AnalyserNode, AudioContext, HtmlVideoElement, MediaStream, MediaStreamAudioSourceNode,
    MediaStreamConstraints, MediaStreamTrack,
};

use crate::browser::js_error;

/// A granted `getUserMedia` stream. Dropping it stops every track.
pub struct MediaCapture {
    device: CaptureDevice,
    stream: MediaStream,
}

impl MediaCapture {
    pub async fn acquire(device: CaptureDevice) -> Result<Self> {
        let denied = |e: JsValue| {
            tracing::debug!(device = device.label(), error = ?e, "getUserMedia rejected");
            ReadyCheckError::PermissionDenied { device }
        };

        let media = window().navigator().media_devices().map_err(denied)?;

        let constraints = MediaStreamConstraints::new();
        match device {
            CaptureDevice::Microphone => constraints.set_audio(&JsValue::TRUE),
            CaptureDevice::Camera => constraints.set_video(&JsValue::TRUE),
        }

        let promise = media
            .get_user_media_with_constraints(&constraints)
            .map_err(denied)?;
        let stream: MediaStream = JsFuture::from(promise)
            .await
            .map_err(denied)?
            .dyn_into()
            .map_err(js_error)?;

        tracing::info!(device = device.label(), "Capture granted");
        Ok(Self { device, stream })
    }

    pub fn stream(&self) -> &MediaStream {
        &self.stream
    }
}

impl Drop for MediaCapture {
    fn drop(&mut self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        tracing::info!(device = self.device.label(), "Capture released");
    }
}

type FrameSlot = RefCell<Option<AnimationFrame>>;

/// A `requestAnimationFrame` loop that runs `tick` once per frame until
/// cancelled. Only the pending frame is held; dropping it cancels the loop.
pub struct AnimationLoop {
    frame: Rc<FrameSlot>,
}

impl AnimationLoop {
    pub fn start(tick: impl FnMut() + 'static) -> Self {
        let frame = Rc::new(RefCell::new(None));
        schedule(Rc::downgrade(&frame), Rc::new(RefCell::new(tick)));
        Self { frame }
    }

    pub fn cancel(&self) {
        self.frame.borrow_mut().take();
    }
}

fn schedule<F: FnMut() + 'static>(slot: Weak<FrameSlot>, tick: Rc<RefCell<F>>) {
    let Some(frame) = slot.upgrade() else {
        return;
    };
    let handle = request_animation_frame(move |_| {
        (&mut *tick.borrow_mut())();
        schedule(slot, tick);
    });
    *frame.borrow_mut() = Some(handle);
}

/// Microphone stream wired into a frequency analyser.
pub struct MicrophoneSession {
    sampling: Option<AnimationLoop>,
    analyser: AnalyserNode,
    source: MediaStreamAudioSourceNode,
    context: AudioContext,
    // Dropped last so the graph is torn down before the tracks stop.
    _capture: MediaCapture,
}

impl MicrophoneSession {
    pub async fn open(fft_size: u32) -> Result<Self> {
        let capture = MediaCapture::acquire(CaptureDevice::Microphone).await?;

        let context = AudioContext::new().map_err(js_error)?;
        let analyser = context.create_analyser().map_err(js_error)?;
        analyser.set_fft_size(fft_size);

        let source = context
            .create_media_stream_source(capture.stream())
            .map_err(js_error)?;
        source.connect_with_audio_node(&analyser).map_err(js_error)?;

        tracing::debug!(
            fft_size,
            bins = analyser.frequency_bin_count(),
            "Audio analyser ready"
        );

        Ok(Self {
            sampling: None,
            analyser,
            source,
            context,
            _capture: capture,
        })
    }

    /// Read the analyser every animation frame and hand the bins to `on_frame`.
    pub fn start_sampling(&mut self, mut on_frame: impl FnMut(&[u8]) + 'static) {
        let analyser = self.analyser.clone();
        let mut bins = vec![0u8; analyser.frequency_bin_count() as usize];
        self.sampling = Some(AnimationLoop::start(move || {
            analyser.get_byte_frequency_data(&mut bins);
            on_frame(&bins);
        }));
    }
}

impl Drop for MicrophoneSession {
    fn drop(&mut self) {
        if let Some(sampling) = self.sampling.take() {
            sampling.cancel();
        }
        let _ = self.source.disconnect();
        let _ = self.context.close();
    }
}

/// Camera stream bound to a preview element.
pub struct CameraSession {
    video: HtmlVideoElement,
    _on_loaded: Closure<dyn FnMut()>,
    _capture: MediaCapture,
}

impl CameraSession {
    /// Attach `capture` to `video`; `on_ready` runs once the metadata has
    /// loaded and playback has been requested.
    pub fn attach(
        capture: MediaCapture,
        video: HtmlVideoElement,
        mut on_ready: impl FnMut() + 'static,
    ) -> Self {
        video.set_muted(true);
        let _ = video.set_attribute("playsinline", "");
        video.set_src_object(Some(capture.stream()));

        let player = video.clone();
        let on_loaded = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = player.play() {
                tracing::warn!(error = ?e, "Camera preview refused to play");
            }
            on_ready();
        });
        video.set_onloadedmetadata(Some(on_loaded.as_ref().unchecked_ref()));

        Self {
            video,
            _on_loaded: on_loaded,
            _capture: capture,
        }
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.video.set_onloadedmetadata(None);
        self.video.set_src_object(None);
    }
}
