use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::AppmixError;

// ─── Process identity ─────────────────────────────────────────────

/// One row of a process snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: u32,
    /// Base executable file name as reported by the OS (e.g. `app.exe`).
    pub exe_name: String,
}

impl ProcessEntry {
    pub fn new(pid: u32, exe_name: impl Into<String>) -> Self {
        Self {
            pid,
            exe_name: exe_name.into(),
        }
    }
}

/// Every running pid that shares one executable name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessIdentity {
    name: String,
    pids: BTreeSet<u32>,
}

impl ProcessIdentity {
    /// Returns `None` when `pids` is empty.
    pub fn new(name: impl Into<String>, pids: impl IntoIterator<Item = u32>) -> Option<Self> {
        let pids: BTreeSet<u32> = pids.into_iter().collect();
        if pids.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            pids,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, pid: u32) -> bool {
        self.pids.contains(&pid)
    }

    pub fn pids(&self) -> impl Iterator<Item = u32> + '_ {
        self.pids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }
}

// ─── Volume level ─────────────────────────────────────────────────

/// Integer volume percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VolumeLevel(u8);

impl VolumeLevel {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Fails with `InvalidInput` outside `[0, 100]`.
    pub fn new(percent: i32) -> Result<Self, AppmixError> {
        if !(0..=100).contains(&percent) {
            return Err(AppmixError::InvalidInput(format!(
                "volume must be in the range of 0 - 100, got {percent}"
            )));
        }
        Ok(Self(percent as u8))
    }

    /// Clamps into `[0, 100]` instead of failing.
    pub fn saturating(percent: i32) -> Self {
        Self(percent.clamp(0, 100) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Scalar in `[0.0, 1.0]` as used by the session volume API.
    pub fn to_normalized(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    /// Rounds to the nearest percent. Values the OS reports slightly outside
    /// `[0.0, 1.0]` are clamped; NaN reads as silence.
    pub fn from_normalized(level: f32) -> Self {
        if level.is_nan() {
            return Self::MIN;
        }
        Self::saturating((level * 100.0).round() as i32)
    }
}

impl fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VolumeLevel {
    type Err = AppmixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = parse_number(s)?;
        Self::new(n)
    }
}

// ─── Volume delta ─────────────────────────────────────────────────

/// Relative change in `[-100, 100]` percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeDelta(i8);

impl VolumeDelta {
    pub fn new(delta: i32) -> Result<Self, AppmixError> {
        if !(-100..=100).contains(&delta) {
            return Err(AppmixError::InvalidInput(format!(
                "volume change must be in the range of -100 - 100, got {delta}"
            )));
        }
        Ok(Self(delta as i8))
    }

    pub fn value(self) -> i32 {
        i32::from(self.0)
    }

    /// `clamp(level + delta, 0, 100)`.
    pub fn apply(self, level: VolumeLevel) -> VolumeLevel {
        VolumeLevel::saturating(i32::from(level.percent()) + self.value())
    }
}

impl fmt::Display for VolumeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl FromStr for VolumeDelta {
    type Err = AppmixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = parse_number(s)?;
        Self::new(n)
    }
}

fn parse_number(s: &str) -> Result<i32, AppmixError> {
    s.trim()
        .parse::<i32>()
        .map_err(|_| AppmixError::InvalidInput(format!("volume must be a number, got {s:?}")))
}
