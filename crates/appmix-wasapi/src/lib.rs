//! appmix-wasapi: Windows IO boundary.
//! Implements the `appmix-core` backend traits on top of the Toolhelp process
//! snapshot and the WASAPI session manager. No business logic.
//!
//! Every COM interface is held by a `windows` crate smart pointer and released
//! on drop; raw handles get explicit guard types.

#[cfg(windows)]
mod com;
#[cfg(windows)]
mod process;
#[cfg(windows)]
mod session;

#[cfg(windows)]
pub use com::ComApartment;
#[cfg(windows)]
pub use process::ToolhelpProcesses;
#[cfg(windows)]
pub use session::{
    AUDCLNT_S_NO_CURRENT_PROCESS, DefaultRenderDevice, WasapiSession, WasapiSessionList,
    WasapiVolume,
};

/// Decode a fixed-size, NUL-terminated UTF-16 buffer as filled in by Win32.
pub fn utf16_until_nul(raw: &[u16]) -> String {
    let len = raw.iter().position(|&c| c == 0).unwrap_or(raw.len());
    String::from_utf16_lossy(&raw[..len])
}

#[cfg(windows)]
fn os_err(call: &'static str) -> impl FnOnce(windows::core::Error) -> appmix_core::AppmixError {
    move |e| appmix_core::AppmixError::os_api(call, e)
}
