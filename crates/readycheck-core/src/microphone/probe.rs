use crate::{
    CaptureDevice, CaptureLifecycle, CapturePhase, CaptureTicket, ProbeResult, ReadyCheckError,
};

use super::LevelWindow;

/// A level strictly above this counts as sound.
pub const SOUND_THRESHOLD: f32 = 0.1;

/// Normalized level of one analyser frame: the mean bin value doubled and
/// capped at 100, scaled to `[0, 1]`. Means of 50 or more read as 1.0.
pub fn frame_level(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    let mean = sum as f32 / bins.len() as f32;
    (mean * 2.0).min(100.0) / 100.0
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MicrophoneProbe {
    capture: CaptureLifecycle,
    levels: LevelWindow,
    pub result: ProbeResult,
}

impl MicrophoneProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CapturePhase {
        self.capture.phase()
    }

    pub fn is_recording(&self) -> bool {
        self.capture.is_live()
    }

    pub fn levels(&self) -> &LevelWindow {
        &self.levels
    }

    /// Start a permission request; `None` if one is pending or already recording.
    pub fn request(&mut self) -> Option<CaptureTicket> {
        let ticket = self.capture.begin()?;
        self.result.clear_error();
        Some(ticket)
    }

    /// `false` means the grant is stale and the stream must be released.
    pub fn granted(&mut self, ticket: CaptureTicket) -> bool {
        let claimed = self.capture.grant(ticket);
        if claimed {
            tracing::info!("Microphone capture started");
        }
        claimed
    }

    pub fn denied(&mut self, ticket: CaptureTicket, err: &ReadyCheckError) {
        if !self.capture.deny(ticket) {
            return;
        }
        tracing::warn!(error = %err, "Microphone access failed");
        let message = ReadyCheckError::PermissionDenied {
            device: CaptureDevice::Microphone,
        }
        .user_message();
        self.result.fail(Some(message));
    }

    /// Feed one analyser frame. Ignored unless recording. Returns the level pushed.
    pub fn sample(&mut self, bins: &[u8]) -> Option<f32> {
        if !self.capture.is_live() {
            return None;
        }
        let level = frame_level(bins);
        self.levels.push(level);
        if !self.result.is_passed() && self.levels.any_above(SOUND_THRESHOLD) {
            tracing::info!(level, "Microphone probe passed");
            self.result.pass();
        }
        Some(level)
    }

    pub fn stop(&mut self) {
        self.capture.stop();
    }

    pub fn reset(&mut self) {
        self.stop();
        self.levels.clear();
        self.result.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LEVEL_WINDOW_LEN;

    fn recording() -> MicrophoneProbe {
        let mut probe = MicrophoneProbe::new();
        let ticket = probe.request().unwrap();
        assert!(probe.granted(ticket));
        probe
    }

    #[test]
    fn test_frame_level_normalization() {
        assert_eq!(frame_level(&[]), 0.0);
        assert_eq!(frame_level(&[0; 128]), 0.0);
        assert!((frame_level(&[10; 128]) - 0.2).abs() < 1e-6);
        assert_eq!(frame_level(&[50; 128]), 1.0);
        assert_eq!(frame_level(&[255; 128]), 1.0);
    }

    #[test]
    fn test_quiet_window_stays_pending() {
        let mut probe = recording();
        for _ in 0..LEVEL_WINDOW_LEN {
            // mean 5 -> level 0.1, not above the threshold
            probe.sample(&[5; 128]);
        }
        assert_eq!(probe.result.passed, None);
    }

    #[test]
    fn test_sound_passes_and_stays_passed() {
        let mut probe = recording();
        probe.sample(&[0; 128]);
        probe.sample(&[20; 128]);
        assert_eq!(probe.result.passed, Some(true));

        for _ in 0..LEVEL_WINDOW_LEN * 2 {
            probe.sample(&[0; 128]);
        }
        assert!(!probe.levels().any_above(SOUND_THRESHOLD));
        assert_eq!(probe.result.passed, Some(true));
    }

    #[test]
    fn test_samples_ignored_when_not_recording() {
        let mut probe = MicrophoneProbe::new();
        assert_eq!(probe.sample(&[200; 128]), None);
        assert_eq!(probe.result.passed, None);
    }

    #[test]
    fn test_denial_fails_with_message() {
        let mut probe = MicrophoneProbe::new();
        let ticket = probe.request().unwrap();
        probe.denied(
            ticket,
            &ReadyCheckError::Browser("NotAllowedError".to_string()),
        );
        assert_eq!(probe.result.passed, Some(false));
        assert_eq!(
            probe.result.error.as_deref(),
            Some("Could not access microphone. Please check permissions.")
        );
        assert_eq!(probe.phase(), CapturePhase::Idle);
    }

    #[test]
    fn test_request_refused_while_recording() {
        let mut probe = recording();
        assert!(probe.request().is_none());
    }

    #[test]
    fn test_grant_after_reset_is_stale() {
        let mut probe = MicrophoneProbe::new();
        let ticket = probe.request().unwrap();
        probe.reset();
        assert!(!probe.granted(ticket));
        assert!(!probe.is_recording());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut probe = recording();
        probe.sample(&[40; 128]);
        assert!(probe.result.is_passed());

        probe.reset();
        assert_eq!(probe.phase(), CapturePhase::Idle);
        assert_eq!(probe.result, ProbeResult::default());
        assert!(probe.levels().iter().all(|level| level == 0.0));
    }
}
