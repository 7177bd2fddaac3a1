use crate::{
    CaptureDevice, CaptureLifecycle, CapturePhase, CaptureTicket, ProbeResult, ReadyCheckError,
};

/// Camera probe. A granted stream only passes once the preview has loaded its
/// metadata and can actually play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraProbe {
    capture: CaptureLifecycle,
    preview_ready: bool,
    pub result: ProbeResult,
}

impl CameraProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CapturePhase {
        self.capture.phase()
    }

    /// Live stream with a playable preview.
    pub fn is_active(&self) -> bool {
        self.capture.is_live() && self.preview_ready
    }

    pub fn is_busy(&self) -> bool {
        !self.capture.is_idle()
    }

    pub fn request(&mut self) -> Option<CaptureTicket> {
        let ticket = self.capture.begin()?;
        self.result.clear_error();
        Some(ticket)
    }

    /// `false` means the grant is stale and the stream must be released.
    pub fn granted(&mut self, ticket: CaptureTicket) -> bool {
        let claimed = self.capture.grant(ticket);
        if claimed {
            tracing::info!("Camera stream granted, waiting for preview");
        }
        claimed
    }

    pub fn metadata_loaded(&mut self, ticket: CaptureTicket) {
        if !self.capture.is_current(ticket) || !self.capture.is_live() {
            return;
        }
        tracing::info!("Camera preview ready");
        self.preview_ready = true;
        self.result.pass();
    }

    pub fn denied(&mut self, ticket: CaptureTicket, err: &ReadyCheckError) {
        if !self.capture.deny(ticket) {
            return;
        }
        tracing::warn!(error = %err, "Camera access failed");
        let message = ReadyCheckError::PermissionDenied {
            device: CaptureDevice::Camera,
        }
        .user_message();
        self.result.fail(Some(message));
    }

    pub fn stop(&mut self) {
        self.capture.stop();
        self.preview_ready = false;
    }

    pub fn reset(&mut self) {
        self.stop();
        self.result.clear();
    }
}
