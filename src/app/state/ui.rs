#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Failure,
}

/// Modal notice shown over the editor until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub(in crate::app) kind: AlertKind,
    pub(in crate::app) message: String,
}

impl Alert {
    pub(in crate::app) fn success(message: impl Into<String>) -> Self {
        Alert {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub(in crate::app) fn failure(message: impl Into<String>) -> Self {
        Alert {
            kind: AlertKind::Failure,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PromptState {
    pub(in crate::app) loading: bool,
}

/// Last known logical window size, used to convert screenshot pixels back to
/// logical units.
#[derive(Debug, Clone, Copy)]
pub struct WindowState {
    pub(in crate::app) width: f32,
}
