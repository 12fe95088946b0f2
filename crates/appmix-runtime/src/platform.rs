//! Wire the core pipeline to the OS backend for this target.

use appmix_core::{AppmixError, Command, Outcome};

#[cfg(windows)]
pub fn run(command: Command, process: &str) -> Result<Outcome, AppmixError> {
    // Declared first so it is dropped after every COM object below.
    let _com = appmix_wasapi::ComApartment::init()?;
    appmix_core::pipeline::run(
        command,
        process,
        appmix_wasapi::ToolhelpProcesses,
        &appmix_wasapi::DefaultRenderDevice,
    )
}

#[cfg(not(windows))]
pub fn run(_command: Command, _process: &str) -> Result<Outcome, AppmixError> {
    Err(AppmixError::Unsupported)
}
