//! Read and write the volume of a matched session set.

use crate::backend::SessionVolume;
use crate::error::AppmixError;
use crate::matcher::MatchedVolumeSet;
use crate::types::VolumeLevel;

/// Pass-through over a fixed, non-empty set of session volume handles.
///
/// Handles are released when the controller is dropped or explicitly
/// [`released`](Self::release).
pub struct VolumeController<V: SessionVolume> {
    sessions: MatchedVolumeSet<V>,
}

impl<V: SessionVolume> VolumeController<V> {
    pub fn new(sessions: MatchedVolumeSet<V>) -> Self {
        Self { sessions }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Level of the first session in enumeration order.
    ///
    /// Sessions are assumed to be in sync because `set` writes them all; a
    /// session changed by another program is not detected here.
    pub fn get(&self) -> Result<VolumeLevel, AppmixError> {
        let level = self.sessions.first().volume.level()?;
        Ok(VolumeLevel::from_normalized(level))
    }

    /// Level of every session, tagged with its owning pid.
    pub fn levels(&self) -> Result<Vec<(u32, VolumeLevel)>, AppmixError> {
        self.sessions
            .iter()
            .map(|s| Ok((s.pid, VolumeLevel::from_normalized(s.volume.level()?))))
            .collect()
    }

    /// Write `level` to every session in order.
    ///
    /// Stops at the first failure. Sessions written before it keep the new
    /// level; there is no rollback.
    pub fn set(&self, level: VolumeLevel) -> Result<(), AppmixError> {
        let normalized = level.to_normalized();
        for (applied, session) in self.sessions.iter().enumerate() {
            if let Err(e) = session.volume.set_level(normalized) {
                tracing::warn!(
                    "volume write failed for pid {} after {applied} of {} session(s) were updated",
                    session.pid,
                    self.sessions.len()
                );
                return Err(e);
            }
        }
        tracing::debug!("set {} session(s) to {level}", self.sessions.len());
        Ok(())
    }

    /// Release every handle, in enumeration order.
    pub fn release(self) {
        let sessions = self.sessions.into_inner();
        let count = sessions.len();
        for session in sessions {
            drop(session);
        }
        tracing::debug!("released {count} session volume handle(s)");
    }
}
