//! Error taxonomy shared by every layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppmixError {
    #[error("no process with name '{name}' found")]
    ProcessNotFound { name: String },

    #[error("no audio sessions found for '{name}'")]
    NoAudioSession { name: String },

    /// A platform call failed. `call` names the API, `detail` carries the
    /// OS-provided message.
    #[error("{call} failed: {detail}")]
    OsApi { call: &'static str, detail: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("per-application volume control is only available on Windows")]
    Unsupported,
}

impl AppmixError {
    pub fn os_api(call: &'static str, detail: impl ToString) -> Self {
        Self::OsApi {
            call,
            detail: detail.to_string(),
        }
    }

    /// True for failures reported by the operating system.
    pub fn is_os_api(&self) -> bool {
        matches!(self, Self::OsApi { .. })
    }
}
