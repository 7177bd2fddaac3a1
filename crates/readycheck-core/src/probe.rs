use serde::{Deserialize, Serialize};

/// Outcome of a single probe. `passed` stays `None` until the probe decides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub passed: Option<bool>,
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pass(&mut self) {
        self.passed = Some(true);
    }

    pub fn fail(&mut self, message: Option<String>) {
        self.passed = Some(false);
        self.error = message;
    }

    pub fn set(&mut self, passed: bool) {
        self.passed = Some(passed);
    }

    pub fn clear(&mut self) {
        self.passed = None;
        self.error = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn status(&self) -> ProbeStatus {
        match self.passed {
            None => ProbeStatus::Pending,
            Some(true) => ProbeStatus::Passed,
            Some(false) => ProbeStatus::Failed,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.passed == Some(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Pending,
    Passed,
    Failed,
}

impl ProbeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProbeStatus::Pending => "Pending",
            ProbeStatus::Passed => "Passed",
            ProbeStatus::Failed => "Failed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProbeStatus::Pending => "status pending",
            ProbeStatus::Passed => "status passed",
            ProbeStatus::Failed => "status failed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeKind {
    Keyboard,
    Mouse,
    Microphone,
    Camera,
    Speed,
    System,
}

impl ProbeKind {
    pub fn id(&self) -> &'static str {
        match self {
            ProbeKind::Keyboard => "keyboard",
            ProbeKind::Mouse => "mouse",
            ProbeKind::Microphone => "microphone",
            ProbeKind::Camera => "camera",
            ProbeKind::Speed => "speed",
            ProbeKind::System => "system",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ProbeKind::Keyboard => "Keyboard Test",
            ProbeKind::Mouse => "Mouse Test",
            ProbeKind::Microphone => "Microphone Test",
            ProbeKind::Camera => "Camera Test",
            ProbeKind::Speed => "Internet Speed Test",
            ProbeKind::System => "System Information",
        }
    }

    pub fn blurb(&self) -> String {
        match self {
            ProbeKind::System => "Click to verify your system specifications".to_string(),
            other => format!("Click to verify your {} functionality", other.id()),
        }
    }

    /// Status text before the probe has reached a verdict.
    pub fn pending_text(&self) -> &'static str {
        match self {
            ProbeKind::Keyboard => "Waiting for input...",
            ProbeKind::Mouse => "Complete all tasks...",
            ProbeKind::System => "Checking...",
            ProbeKind::Microphone | ProbeKind::Camera | ProbeKind::Speed => "Not started",
        }
    }

    pub fn from_id(id: &str) -> Option<ProbeKind> {
        Self::all().iter().copied().find(|kind| kind.id() == id)
    }

    pub fn all() -> &'static [ProbeKind] {
        &[
            ProbeKind::Keyboard,
            ProbeKind::Mouse,
            ProbeKind::Microphone,
            ProbeKind::Camera,
            ProbeKind::Speed,
            ProbeKind::System,
        ]
    }
}
