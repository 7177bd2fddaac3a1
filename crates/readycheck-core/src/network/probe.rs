use crate::{ProbeResult, ReadyCheckError};

use super::NetworkResult;

pub(crate) const PROGRESS_LATENCY: u8 = 10;
pub(crate) const PROGRESS_DOWNLOAD: u8 = 30;
pub(crate) const PROGRESS_DOWNLOAD_LATE: u8 = 60;
pub(crate) const PROGRESS_UPLOAD: u8 = 80;
pub(crate) const PROGRESS_DONE: u8 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NetworkPhase {
    #[default]
    Idle,
    Connectivity,
    Latency,
    Download,
    Upload,
}

impl NetworkPhase {
    pub fn label(&self) -> &'static str {
        match self {
            NetworkPhase::Idle => "",
            NetworkPhase::Connectivity => "Checking connection...",
            NetworkPhase::Latency => "Testing latency...",
            NetworkPhase::Download => "Testing download speed...",
            NetworkPhase::Upload => "Testing upload speed...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProbe {
    running: bool,
    online: bool,
    phase: NetworkPhase,
    progress: u8,
    measurements: NetworkResult,
    pub result: ProbeResult,
}

impl Default for NetworkProbe {
    fn default() -> Self {
        Self {
            running: false,
            online: true,
            phase: NetworkPhase::Idle,
            progress: 0,
            measurements: NetworkResult::default(),
            result: ProbeResult::default(),
        }
    }
}

impl NetworkProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn phase(&self) -> NetworkPhase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn measurements(&self) -> &NetworkResult {
        &self.measurements
    }

    /// Passive connectivity indicator fed by the browser's online/offline events.
    pub fn set_online(&mut self, online: bool) {
        if self.online != online {
            tracing::info!(online, "Browser connectivity changed");
        }
        self.online = online;
    }

    pub fn can_start(&self) -> bool {
        !self.running && self.online
    }

    /// Begin a run. Returns `false`, changing nothing, if one is in progress.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.phase = NetworkPhase::Connectivity;
        self.progress = 0;
        self.measurements = NetworkResult::default();
        self.result.clear();
        true
    }

    pub fn enter(&mut self, phase: NetworkPhase, progress: u8) {
        tracing::debug!(?phase, progress, "Speed test phase");
        self.phase = phase;
        self.advance(progress);
    }

    /// Progress never moves backwards.
    pub fn advance(&mut self, progress: u8) {
        self.progress = self.progress.max(progress.min(PROGRESS_DONE));
    }

    pub fn record_latency(&mut self, ms: u32) {
        self.measurements.latency_ms = Some(ms);
    }

    pub fn record_download(&mut self, mbps: u32) {
        self.measurements.download_mbps = Some(mbps);
    }

    pub fn record_upload(&mut self, mbps: u32) {
        self.measurements.upload_mbps = Some(mbps);
    }

    /// Evaluate the completed run.
    pub fn finish(&mut self) -> Option<bool> {
        self.advance(PROGRESS_DONE);
        let verdict = self.measurements.verdict();
        match verdict {
            Some(passed) => self.result.set(passed),
            None => self.result.fail(Some(
                ReadyCheckError::ProbeFailed("incomplete measurements".into()).user_message(),
            )),
        }
        tracing::info!(
            latency_ms = ?self.measurements.latency_ms,
            download_mbps = ?self.measurements.download_mbps,
            upload_mbps = ?self.measurements.upload_mbps,
            passed = ?verdict,
            "Speed test finished"
        );
        self.settle();
        verdict
    }

    pub fn abort(&mut self, err: &ReadyCheckError) {
        tracing::warn!(error = %err, "Speed test failed");
        self.result.fail(Some(err.user_message()));
        self.settle();
    }

    fn settle(&mut self) {
        self.running = false;
        self.phase = NetworkPhase::Idle;
    }

    /// Clear results. A no-op while a run is in progress.
    pub fn reset(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.phase = NetworkPhase::Idle;
        self.progress = 0;
        self.measurements = NetworkResult::default();
        self.result.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_guarded() {
        let mut probe = NetworkProbe::new();
        assert!(probe.start());
        probe.enter(NetworkPhase::Latency, PROGRESS_LATENCY);
        let before = probe.clone();
        assert!(!probe.start());
        assert_eq!(probe, before);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut probe = NetworkProbe::new();
        probe.start();
        probe.enter(NetworkPhase::Download, PROGRESS_DOWNLOAD);
        probe.advance(PROGRESS_LATENCY);
        assert_eq!(probe.progress(), PROGRESS_DOWNLOAD);
        probe.advance(250);
        assert_eq!(probe.progress(), PROGRESS_DONE);
    }

    #[test]
    fn test_reset_ignored_while_running() {
        let mut probe = NetworkProbe::new();
        probe.start();
        probe.record_latency(20);
        assert!(!probe.reset());
        assert_eq!(probe.measurements().latency_ms, Some(20));
    }

    #[test]
    fn test_finish_without_measurements_fails() {
        let mut probe = NetworkProbe::new();
        probe.start();
        assert_eq!(probe.finish(), None);
        assert_eq!(probe.result.passed, Some(false));
        assert!(!probe.is_running());
    }

    #[test]
    fn test_can_start_requires_online() {
        let mut probe = NetworkProbe::new();
        assert!(probe.can_start());
        probe.set_online(false);
        assert!(!probe.can_start());
    }
}
