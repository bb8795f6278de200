use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid box dimensions {width}x{height}: both sides must be positive")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("Failed to parse /proc/stat: {0}")]
    CpuStat(#[from] crate::stats::cpu::CpuLineError),
    #[error("Failed to read /proc: {0}")]
    Proc(#[from] procfs::ProcError),
    #[error("System call failed: {0}")]
    Sys(#[from] nix::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
