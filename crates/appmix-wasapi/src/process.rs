//! Process listing via the Toolhelp snapshot API.

use appmix_core::{AppmixError, ProcessEntry, ProcessSnapshot};
use windows::Win32::Foundation::{CloseHandle, ERROR_NO_MORE_FILES, HANDLE};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW,
    TH32CS_SNAPPROCESS,
};

use crate::{os_err, utf16_until_nul};

/// Closes the snapshot handle on every exit path.
struct SnapshotHandle(HANDLE);

impl Drop for SnapshotHandle {
    fn drop(&mut self) {
        // Nothing useful to do if closing fails.
        let _ = unsafe { CloseHandle(self.0) };
    }
}

/// Snapshot of every running process on the machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToolhelpProcesses;

impl ProcessSnapshot for ToolhelpProcesses {
    fn processes(&self) -> Result<Vec<ProcessEntry>, AppmixError> {
        let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }
            .map(SnapshotHandle)
            .map_err(os_err("CreateToolhelp32Snapshot"))?;

        let mut entry = PROCESSENTRY32W {
            dwSize: std::mem::size_of::<PROCESSENTRY32W>() as u32,
            ..Default::default()
        };
        unsafe { Process32FirstW(snapshot.0, &mut entry) }.map_err(os_err("Process32FirstW"))?;

        let mut entries = Vec::new();
        loop {
            entries.push(ProcessEntry::new(
                entry.th32ProcessID,
                utf16_until_nul(&entry.szExeFile),
            ));
            match unsafe { Process32NextW(snapshot.0, &mut entry) } {
                Ok(()) => {}
                Err(e) if e.code() == ERROR_NO_MORE_FILES.to_hresult() => break,
                Err(e) => return Err(AppmixError::os_api("Process32NextW", e)),
            }
        }
        Ok(entries)
    }
}
