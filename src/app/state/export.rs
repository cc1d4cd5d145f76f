use iced::Rectangle;
use std::path::PathBuf;

/// Where the current export request is in its pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportPhase {
    Idle,
    ResolvingBounds,
    Capturing { bounds: Rectangle },
    Encoding,
}

/// Export bookkeeping. Only one export runs at a time; every request gets a
/// fresh id so late results from a timed-out request can be told apart.
#[derive(Debug)]
pub struct ExportState {
    pub(in crate::app) phase: ExportPhase,
    pub(in crate::app) request_id: u64,
    pub(in crate::app) last_saved: Option<PathBuf>,
}

impl ExportState {
    pub(in crate::app) fn new() -> Self {
        ExportState {
            phase: ExportPhase::Idle,
            request_id: 0,
            last_saved: None,
        }
    }

    pub(in crate::app) fn in_flight(&self) -> bool {
        self.phase != ExportPhase::Idle
    }

    /// Start a new request, or return `None` while one is still pending.
    pub(in crate::app) fn begin(&mut self) -> Option<u64> {
        if self.in_flight() {
            return None;
        }
        self.request_id = self.request_id.wrapping_add(1);
        self.phase = ExportPhase::ResolvingBounds;
        Some(self.request_id)
    }

    pub(in crate::app) fn is_current(&self, request_id: u64) -> bool {
        self.in_flight() && self.request_id == request_id
    }

    pub(in crate::app) fn reset(&mut self) {
        self.phase = ExportPhase::Idle;
    }
}
