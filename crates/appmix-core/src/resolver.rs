//! Executable name → set of running pids.

use crate::backend::ProcessSnapshot;
use crate::error::AppmixError;
use crate::types::ProcessIdentity;

pub struct ProcessResolver<S> {
    source: S,
}

impl<S: ProcessSnapshot> ProcessResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Take one snapshot and collect every pid whose executable name matches.
    ///
    /// Names compare case-insensitively, as Windows file names do. Duplicate
    /// names are expected: all of them are returned.
    pub fn resolve(&self, name: &str) -> Result<ProcessIdentity, AppmixError> {
        let entries = self.source.processes()?;
        tracing::debug!("process snapshot has {} entries", entries.len());

        let pids = entries
            .iter()
            .filter(|entry| exe_name_matches(&entry.exe_name, name))
            .map(|entry| entry.pid);

        let identity =
            ProcessIdentity::new(name, pids).ok_or_else(|| AppmixError::ProcessNotFound {
                name: name.to_string(),
            })?;
        tracing::debug!(
            "resolved {name:?} to {} process(es): {:?}",
            identity.len(),
            identity.pids().collect::<Vec<_>>()
        );
        Ok(identity)
    }
}

fn exe_name_matches(exe_name: &str, target: &str) -> bool {
    if exe_name.eq_ignore_ascii_case(target) {
        return true;
    }
    // Non-ASCII names need full case folding.
    !exe_name.is_ascii() && exe_name.to_lowercase() == target.to_lowercase()
}
