//! Lifecycle bookkeeping shared by the camera and microphone probes.
//!
//! Permission prompts resolve asynchronously, so a grant can arrive after the
//! user has already stopped or reset the probe. Every request is stamped with a
//! ticket and only the ticket of the request still in flight may claim the
//! device; anything else must be released by the caller.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapturePhase {
    #[default]
    Idle,
    Requesting,
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureLifecycle {
    phase: CapturePhase,
    generation: u64,
}

impl CaptureLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == CapturePhase::Idle
    }

    pub fn is_live(&self) -> bool {
        self.phase == CapturePhase::Live
    }

    /// Begin a permission request. Returns `None` while another request is
    /// pending or a capture is already live.
    pub fn begin(&mut self) -> Option<CaptureTicket> {
        if self.phase != CapturePhase::Idle {
            return None;
        }
        self.generation += 1;
        self.phase = CapturePhase::Requesting;
        Some(CaptureTicket(self.generation))
    }

    pub fn is_current(&self, ticket: CaptureTicket) -> bool {
        ticket.0 == self.generation && self.phase != CapturePhase::Idle
    }

    /// Claim the device for `ticket`. `false` means the request went stale and
    /// the stream must be dropped.
    pub fn grant(&mut self, ticket: CaptureTicket) -> bool {
        if !self.is_current(ticket) || self.phase != CapturePhase::Requesting {
            return false;
        }
        self.phase = CapturePhase::Live;
        true
    }

    /// A denial only counts if it belongs to the request in flight.
    pub fn deny(&mut self, ticket: CaptureTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = CapturePhase::Idle;
        true
    }

    /// Return to idle and invalidate any outstanding ticket.
    pub fn stop(&mut self) {
        self.phase = CapturePhase::Idle;
        self.generation += 1;
    }
}
