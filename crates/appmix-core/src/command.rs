//! The closed set of volume commands and their single dispatch point.

use serde::Serialize;

use crate::backend::SessionVolume;
use crate::controller::VolumeController;
use crate::error::AppmixError;
use crate::types::{VolumeDelta, VolumeLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Report the current level.
    Get,
    /// Apply an absolute level.
    Set(VolumeLevel),
    /// Apply a relative change, clamped to `[0, 100]`.
    Change(VolumeDelta),
    /// Report the level of every matched session.
    Sessions,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set(_) => "set",
            Self::Change(_) => "change",
            Self::Sessions => "sessions",
        }
    }

    pub fn execute<V: SessionVolume>(
        self,
        controller: &VolumeController<V>,
    ) -> Result<Outcome, AppmixError> {
        match self {
            Self::Get => controller.get().map(Outcome::Level),
            Self::Set(level) => {
                controller.set(level)?;
                Ok(Outcome::Level(level))
            }
            Self::Change(delta) => {
                let current = controller.get()?;
                let next = delta.apply(current);
                tracing::debug!("change {delta}: {current} -> {next}");
                controller.set(next)?;
                Ok(Outcome::Level(next))
            }
            Self::Sessions => {
                let sessions = controller
                    .levels()?
                    .into_iter()
                    .map(|(pid, level)| SessionLevel { pid, level })
                    .collect();
                Ok(Outcome::Sessions(sessions))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionLevel {
    pub pid: u32,
    pub level: VolumeLevel,
}

/// What a command produced, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Level(VolumeLevel),
    Sessions(Vec<SessionLevel>),
}
