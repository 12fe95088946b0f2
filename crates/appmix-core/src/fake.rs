//! In-memory stand-ins for the OS boundary, used by unit tests.
//!
//! `FakeDevice` counts live session and volume handles so tests can assert
//! that every handle is released.

use std::cell::Cell;
use std::rc::Rc;

use crate::backend::{
    AudioDevice, AudioSessionHandle, AudioSessionList, ProcessSnapshot, SessionOwner,
    SessionVolume,
};
use crate::error::AppmixError;
use crate::types::ProcessEntry;

// ─── Processes ────────────────────────────────────────────────────

pub struct FakeProcesses {
    entries: Vec<ProcessEntry>,
    fail: Option<&'static str>,
    snapshots: Cell<usize>,
}

impl FakeProcesses {
    pub fn new(entries: impl IntoIterator<Item = ProcessEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            fail: None,
            snapshots: Cell::new(0),
        }
    }

    pub fn failing(call: &'static str) -> Self {
        Self {
            entries: Vec::new(),
            fail: Some(call),
            snapshots: Cell::new(0),
        }
    }

    pub fn snapshots(&self) -> usize {
        self.snapshots.get()
    }
}

impl ProcessSnapshot for FakeProcesses {
    fn processes(&self) -> Result<Vec<ProcessEntry>, AppmixError> {
        self.snapshots.set(self.snapshots.get() + 1);
        match self.fail {
            Some(call) => Err(AppmixError::os_api(call, "fake failure")),
            None => Ok(self.entries.clone()),
        }
    }
}

// ─── Sessions ─────────────────────────────────────────────────────

/// Builder for one fake session.
pub struct FakeSession {
    owner: SessionOwner,
    level: f32,
    has_volume: bool,
    fail_reads: bool,
    fail_writes: bool,
}

impl FakeSession {
    pub fn owned(pid: u32, level: f32) -> Self {
        Self {
            owner: SessionOwner::Process(pid),
            level,
            has_volume: true,
            fail_reads: false,
            fail_writes: false,
        }
    }

    pub fn unbound() -> Self {
        Self {
            owner: SessionOwner::NoCurrentProcess,
            ..Self::owned(0, 1.0)
        }
    }

    pub fn unresolved(reason: &str) -> Self {
        Self {
            owner: SessionOwner::Unresolved(reason.to_string()),
            ..Self::owned(0, 1.0)
        }
    }

    pub fn without_volume(mut self) -> Self {
        self.has_volume = false;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

struct Slot {
    setup: FakeSession,
    level: Cell<f32>,
}

struct DeviceState {
    slots: Vec<Slot>,
    fail_enumeration: bool,
    enumerations: Cell<usize>,
    live_sessions: Cell<usize>,
    live_volumes: Cell<usize>,
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

fn dip(counter: &Cell<usize>) {
    counter.set(counter.get() - 1);
}

pub struct FakeDevice {
    state: Rc<DeviceState>,
}

impl FakeDevice {
    pub fn new(sessions: Vec<FakeSession>) -> Self {
        let slots = sessions
            .into_iter()
            .map(|setup| Slot {
                level: Cell::new(setup.level),
                setup,
            })
            .collect();
        Self::from_slots(slots, false)
    }

    pub fn failing_enumeration() -> Self {
        Self::from_slots(Vec::new(), true)
    }

    fn from_slots(slots: Vec<Slot>, fail_enumeration: bool) -> Self {
        Self {
            state: Rc::new(DeviceState {
                slots,
                fail_enumeration,
                enumerations: Cell::new(0),
                live_sessions: Cell::new(0),
                live_volumes: Cell::new(0),
            }),
        }
    }

    /// Current normalized level of every session, in enumeration order.
    pub fn levels(&self) -> Vec<f32> {
        self.state.slots.iter().map(|s| s.level.get()).collect()
    }

    pub fn enumerations(&self) -> usize {
        self.state.enumerations.get()
    }

    pub fn live_sessions(&self) -> usize {
        self.state.live_sessions.get()
    }

    pub fn live_volumes(&self) -> usize {
        self.state.live_volumes.get()
    }
}

impl AudioDevice for FakeDevice {
    type Sessions = FakeSessionList;

    fn sessions(&self) -> Result<FakeSessionList, AppmixError> {
        bump(&self.state.enumerations);
        if self.state.fail_enumeration {
            return Err(AppmixError::os_api("GetSessionEnumerator", "fake failure"));
        }
        Ok(FakeSessionList {
            state: Rc::clone(&self.state),
        })
    }
}

pub struct FakeSessionList {
    state: Rc<DeviceState>,
}

impl AudioSessionList for FakeSessionList {
    type Session = FakeSessionHandle;

    fn count(&self) -> Result<usize, AppmixError> {
        Ok(self.state.slots.len())
    }

    fn session(&self, index: usize) -> Result<FakeSessionHandle, AppmixError> {
        if index >= self.state.slots.len() {
            return Err(AppmixError::os_api("GetSession", "index out of range"));
        }
        bump(&self.state.live_sessions);
        Ok(FakeSessionHandle {
            state: Rc::clone(&self.state),
            index,
        })
    }
}

pub struct FakeSessionHandle {
    state: Rc<DeviceState>,
    index: usize,
}

impl Drop for FakeSessionHandle {
    fn drop(&mut self) {
        dip(&self.state.live_sessions);
    }
}

impl AudioSessionHandle for FakeSessionHandle {
    type Volume = FakeVolume;

    fn owner(&self) -> SessionOwner {
        self.state.slots[self.index].setup.owner.clone()
    }

    fn volume(&self) -> Result<FakeVolume, AppmixError> {
        if !self.state.slots[self.index].setup.has_volume {
            return Err(AppmixError::os_api("QueryInterface", "no volume interface"));
        }
        bump(&self.state.live_volumes);
        Ok(FakeVolume {
            state: Rc::clone(&self.state),
            index: self.index,
        })
    }
}

#[derive(Debug)]
pub struct FakeVolume {
    state: Rc<DeviceState>,
    index: usize,
}

impl std::fmt::Debug for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceState")
            .field("sessions", &self.slots.len())
            .finish()
    }
}

impl Drop for FakeVolume {
    fn drop(&mut self) {
        dip(&self.state.live_volumes);
    }
}

impl SessionVolume for FakeVolume {
    fn level(&self) -> Result<f32, AppmixError> {
        let slot = &self.state.slots[self.index];
        if slot.setup.fail_reads {
            return Err(AppmixError::os_api("GetMasterVolume", "fake failure"));
        }
        Ok(slot.level.get())
    }

    fn set_level(&self, level: f32) -> Result<(), AppmixError> {
        let slot = &self.state.slots[self.index];
        if slot.setup.fail_writes {
            return Err(AppmixError::os_api("SetMasterVolume", "fake failure"));
        }
        slot.level.set(level);
        Ok(())
    }
}
