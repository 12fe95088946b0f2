//! appmix-core: per-application volume control logic.
//! Resolves a process name to pids, matches pids to audio sessions and
//! drives their volume. OS access goes through the traits in [`backend`].

pub mod backend;
pub mod command;
pub mod controller;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod resolver;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::{
    AudioDevice, AudioSessionHandle, AudioSessionList, ProcessSnapshot, SessionOwner,
    SessionVolume,
};
pub use command::{Command, Outcome, SessionLevel};
pub use controller::VolumeController;
pub use error::AppmixError;
pub use matcher::{MatchedSession, MatchedVolumeSet, match_sessions};
pub use resolver::ProcessResolver;
pub use types::{ProcessEntry, ProcessIdentity, VolumeDelta, VolumeLevel};
