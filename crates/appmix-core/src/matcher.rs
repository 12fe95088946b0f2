//! Correlate a resolved process identity with the device's live audio sessions.

use crate::backend::{AudioDevice, AudioSessionHandle, AudioSessionList, SessionOwner};
use crate::error::AppmixError;
use crate::types::ProcessIdentity;

/// A session volume handle together with the pid that owns it.
#[derive(Debug)]
pub struct MatchedSession<V> {
    pub pid: u32,
    pub volume: V,
}

/// Non-empty, enumeration-ordered set of matched session volumes.
#[derive(Debug)]
pub struct MatchedVolumeSet<V> {
    sessions: Vec<MatchedSession<V>>,
}

impl<V> MatchedVolumeSet<V> {
    /// Returns `None` for an empty list.
    pub fn new(sessions: Vec<MatchedSession<V>>) -> Option<Self> {
        if sessions.is_empty() {
            None
        } else {
            Some(Self { sessions })
        }
    }

    /// First session in enumeration order.
    pub fn first(&self) -> &MatchedSession<V> {
        &self.sessions[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchedSession<V>> {
        self.sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub(crate) fn into_inner(self) -> Vec<MatchedSession<V>> {
        self.sessions
    }
}

pub type DeviceVolume<D> =
    <<<D as AudioDevice>::Sessions as AudioSessionList>::Session as AudioSessionHandle>::Volume;

/// Scan every session on `device` and keep the volume handles of those owned
/// by a pid in `identity`.
///
/// Sessions whose owner cannot be determined are skipped; the scan always
/// covers the full list. Session handles are dropped at the end of each
/// iteration, so only the kept volume handles outlive the call.
pub fn match_sessions<D: AudioDevice>(
    device: &D,
    identity: &ProcessIdentity,
) -> Result<MatchedVolumeSet<DeviceVolume<D>>, AppmixError> {
    let list = device.sessions()?;
    let count = list.count()?;
    tracing::debug!("enumerating {count} audio session(s)");

    let mut matched = Vec::new();
    for index in 0..count {
        let session = list.session(index)?;
        let pid = match session.owner() {
            SessionOwner::Process(pid) => pid,
            SessionOwner::NoCurrentProcess => {
                tracing::debug!("session {index}: not bound to a process, skipping");
                continue;
            }
            SessionOwner::Unresolved(reason) => {
                tracing::debug!("session {index}: owner lookup failed ({reason}), skipping");
                continue;
            }
        };
        if !identity.contains(pid) {
            continue;
        }
        let volume = session.volume()?;
        tracing::debug!("session {index}: matched pid {pid}");
        matched.push(MatchedSession { pid, volume });
    }

    MatchedVolumeSet::new(matched).ok_or_else(|| AppmixError::NoAudioSession {
        name: identity.name().to_string(),
    })
}
