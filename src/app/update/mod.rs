use crate::export::ExportJob;

mod core;
mod editor;
mod export;
mod prompt;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    ResolvePreviewBounds { request_id: u64 },
    CaptureWindow { request_id: u64 },
    ArmExportTimeout { request_id: u64 },
    EncodeExport { request_id: u64, job: ExportJob },
    LoadPrompt,
    WriteClipboard(String),
}
