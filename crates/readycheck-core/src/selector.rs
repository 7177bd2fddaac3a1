use crate::ProbeKind;

/// Tracks which probe panel, if any, is on screen.
///
/// The raw id is kept as selected so that a lookup miss shows an empty panel
/// rather than silently falling back to the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSelector {
    active: Option<String>,
}

impl TestSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: &str) {
        tracing::info!(probe = id, "Probe selected");
        self.active = Some(id.to_string());
    }

    pub fn back(&mut self) {
        tracing::debug!("Returning to probe grid");
        self.active = None;
    }

    pub fn is_grid(&self) -> bool {
        self.active.is_none()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The probe to render, or `None` for the grid or an unknown id.
    pub fn active_probe(&self) -> Option<ProbeKind> {
        self.active.as_deref().and_then(ProbeKind::from_id)
    }
}
