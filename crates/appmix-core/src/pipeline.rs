//! One invocation: resolve → match → execute → release.

use crate::backend::{AudioDevice, ProcessSnapshot};
use crate::command::{Command, Outcome};
use crate::controller::VolumeController;
use crate::error::AppmixError;
use crate::matcher::match_sessions;
use crate::resolver::ProcessResolver;

/// Run `command` against every audio session owned by a process named `name`.
///
/// Session enumeration only happens after at least one process matched. The
/// matched handles are released before returning, whether or not the command
/// succeeded.
pub fn run<P, D>(
    command: Command,
    name: &str,
    processes: P,
    device: &D,
) -> Result<Outcome, AppmixError>
where
    P: ProcessSnapshot,
    D: AudioDevice,
{
    let identity = ProcessResolver::new(processes).resolve(name)?;
    let controller = VolumeController::new(match_sessions(device, &identity)?);
    tracing::debug!(
        "{} on {name:?}: {} session(s)",
        command.as_str(),
        controller.session_count()
    );

    let outcome = command.execute(&controller);
    controller.release();
    outcome
}
