//! CLI definition using clap derive.

use std::ffi::OsString;

use appmix_core::{VolumeDelta, VolumeLevel};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "appmix",
    version,
    about = "Per-application playback volume control",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get the volume of a process
    Get(TargetOpts),
    /// Set the volume of a process [0 to 100]
    Set(SetOpts),
    /// Change the volume of a process [-100 to 100]
    Change(ChangeOpts),
    /// Show the volume of each audio session of a process
    Sessions(TargetOpts),
}

#[derive(Debug, clap::Args)]
pub struct TargetOpts {
    /// Executable name, e.g. spotify.exe
    pub process: String,
}

#[derive(Debug, clap::Args)]
pub struct SetOpts {
    /// Executable name, e.g. spotify.exe
    pub process: String,

    /// New volume in percent [0 to 100]
    pub level: VolumeLevel,
}

#[derive(Debug, clap::Args)]
pub struct ChangeOpts {
    /// Executable name, e.g. spotify.exe
    pub process: String,

    /// Volume change in percent [-100 to 100]
    #[arg(allow_negative_numbers = true)]
    pub delta: VolumeDelta,
}

impl Command {
    /// Split into the core command and the target process name.
    pub fn into_parts(self) -> (appmix_core::Command, String) {
        match self {
            Self::Get(opts) => (appmix_core::Command::Get, opts.process),
            Self::Set(opts) => (appmix_core::Command::Set(opts.level), opts.process),
            Self::Change(opts) => (appmix_core::Command::Change(opts.delta), opts.process),
            Self::Sessions(opts) => (appmix_core::Command::Sessions, opts.process),
        }
    }
}

const COMMAND_NAMES: &[&str] = &["get", "set", "change", "sessions"];

/// Lower-case the command word so `GET` and `Set` are accepted.
///
/// Only the first non-flag argument is touched, and only when it names a
/// known command.
pub fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args: Vec<OsString> = args.into_iter().collect();
    let word = args
        .iter_mut()
        .skip(1)
        .find(|arg| !arg.to_string_lossy().starts_with('-'));
    if let Some(word) = word {
        let lower = word.to_string_lossy().to_lowercase();
        if COMMAND_NAMES.contains(&lower.as_str()) {
            *word = OsString::from(lower);
        }
    }
    args
}
