use super::super::state::{
    Alert, App, CARD_HEIGHT_PX, CARD_WIDTH_PX, EXPORT_FAILED_MESSAGE, ExportPhase,
};
use super::Effect;
use crate::export::{CapturedFrame, ExportJob, LogicalRegion};
use iced::Rectangle;
use iced::window::Screenshot;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Visible bounds may differ from the card size by rounding only.
const BOUNDS_TOLERANCE_PX: f32 = 1.0;

impl App {
    pub(in crate::app::update) fn handle_export_requested(&mut self, effects: &mut Vec<Effect>) {
        let Some(request_id) = self.export.begin() else {
            debug!("Export already in flight; ignoring request");
            return;
        };
        info!(request_id, "Export requested");
        effects.push(Effect::ResolvePreviewBounds { request_id });
        effects.push(Effect::ArmExportTimeout { request_id });
    }

    pub(in crate::app::update) fn handle_preview_bounds_resolved(
        &mut self,
        request_id: u64,
        bounds: Option<Rectangle>,
        effects: &mut Vec<Effect>,
    ) {
        if !self.export.is_current(request_id) {
            debug!(request_id, "Ignoring preview bounds for stale export");
            return;
        }
        let Some(bounds) = bounds else {
            self.fail_export(request_id, "preview surface is not on screen");
            return;
        };
        if (bounds.width - CARD_WIDTH_PX).abs() > BOUNDS_TOLERANCE_PX
            || (bounds.height - CARD_HEIGHT_PX).abs() > BOUNDS_TOLERANCE_PX
        {
            warn!(
                width = bounds.width,
                height = bounds.height,
                "Preview is partially hidden; enlarge the window to export"
            );
            self.fail_export(request_id, "preview surface is clipped");
            return;
        }
        self.export.phase = ExportPhase::Capturing { bounds };
        effects.push(Effect::CaptureWindow { request_id });
    }

    pub(in crate::app::update) fn handle_screenshot_captured(
        &mut self,
        request_id: u64,
        screenshot: Screenshot,
        effects: &mut Vec<Effect>,
    ) {
        let frame = CapturedFrame {
            rgba: screenshot.bytes.to_vec(),
            width: screenshot.size.width,
            height: screenshot.size.height,
        };
        self.handle_frame_captured(request_id, frame, effects);
    }

    pub(in crate::app::update) fn handle_frame_captured(
        &mut self,
        request_id: u64,
        frame: CapturedFrame,
        effects: &mut Vec<Effect>,
    ) {
        if !self.export.is_current(request_id) {
            debug!(request_id, "Ignoring screenshot for stale export");
            return;
        }
        let ExportPhase::Capturing { bounds } = self.export.phase else {
            self.fail_export(request_id, "screenshot arrived before preview bounds");
            return;
        };

        let scale = self.capture_scale(frame.width);
        let job = ExportJob {
            frame,
            region: LogicalRegion {
                x: bounds.x,
                y: bounds.y,
                width: bounds.width,
                height: bounds.height,
            },
            scale,
            target_width: CARD_WIDTH_PX as u32,
            target_height: CARD_HEIGHT_PX as u32,
            directory: self.export_dir(),
            file_name: self.config.variant.export_file_name(),
        };
        self.export.phase = ExportPhase::Encoding;
        effects.push(Effect::EncodeExport { request_id, job });
    }

    pub(in crate::app::update) fn handle_export_finished(
        &mut self,
        request_id: u64,
        result: Result<PathBuf, String>,
    ) {
        if !self.export.is_current(request_id) {
            debug!(request_id, "Ignoring result of stale export");
            return;
        }
        match result {
            Ok(path) => {
                self.export.reset();
                info!(request_id, path = %path.display(), "Card saved");
                self.export.last_saved = Some(path);
            }
            Err(err) => self.fail_export(request_id, &err),
        }
    }

    pub(in crate::app::update) fn handle_export_timed_out(&mut self, request_id: u64) {
        if self.export.is_current(request_id) {
            self.fail_export(request_id, "timed out");
        }
    }

    fn fail_export(&mut self, request_id: u64, reason: &str) {
        warn!(request_id, reason, "Export failed");
        self.export.reset();
        self.alert = Some(Alert::failure(EXPORT_FAILED_MESSAGE));
    }
}
