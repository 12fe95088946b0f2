//! Traits at the OS boundary. The Windows binding crate implements these;
//! tests inject in-memory fakes.
//!
//! Every associated handle type owns an OS reference and releases it on drop.

use crate::error::AppmixError;
use crate::types::ProcessEntry;

/// Point-in-time listing of running processes.
pub trait ProcessSnapshot {
    fn processes(&self) -> Result<Vec<ProcessEntry>, AppmixError>;
}

impl<T: ProcessSnapshot + ?Sized> ProcessSnapshot for &T {
    fn processes(&self) -> Result<Vec<ProcessEntry>, AppmixError> {
        (**self).processes()
    }
}

/// The default audio-rendering device.
pub trait AudioDevice {
    type Sessions: AudioSessionList;

    /// Enumerate the device's sessions as of now.
    fn sessions(&self) -> Result<Self::Sessions, AppmixError>;
}

/// Fixed-size, ordered session collection captured at enumeration time.
pub trait AudioSessionList {
    type Session: AudioSessionHandle;

    fn count(&self) -> Result<usize, AppmixError>;

    fn session(&self, index: usize) -> Result<Self::Session, AppmixError>;
}

/// Who owns a session, as far as the OS can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOwner {
    Process(u32),
    /// The OS reports that the session is not bound to any process yet.
    NoCurrentProcess,
    /// Ownership lookup failed for another reason.
    Unresolved(String),
}

pub trait AudioSessionHandle {
    type Volume: SessionVolume;

    fn owner(&self) -> SessionOwner;

    /// Obtain the session's volume interface. The session handle itself is
    /// released when `self` drops.
    fn volume(&self) -> Result<Self::Volume, AppmixError>;
}

/// Per-session volume control, normalized to `[0.0, 1.0]`.
pub trait SessionVolume {
    fn level(&self) -> Result<f32, AppmixError>;

    fn set_level(&self, level: f32) -> Result<(), AppmixError>;
}
