use procfs::{
    process::Process as ProcfsProcess,
    ProcError,
};
use std::convert::TryFrom;

mod status;

pub use status::ProcessStatus;

/// A process as seen at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: i32,
    pub name: String,
    pub status: ProcessStatus,
}

impl TryFrom<&ProcfsProcess> for ProcessRecord {
    type Error = ProcError;

    fn try_from(procfs_proc: &ProcfsProcess) -> Result<Self, Self::Error> {
        let stat = procfs_proc.stat()?;

        Ok(ProcessRecord {
            pid: stat.pid,
            name: stat.comm,
            status: ProcessStatus::from(stat.state),
        })
    }
}

/// Lists the current process table.
///
/// Listing `/proc` itself can fail as a whole; each entry can then fail on its
/// own when the process exits between listing and reading its stat file.
pub fn snapshot() -> Result<impl Iterator<Item = Result<ProcessRecord, ProcError>>, ProcError> {
    let all = procfs::process::all_processes()?;

    Ok(all.map(|entry| entry.and_then(|procfs_proc| ProcessRecord::try_from(&procfs_proc))))
}
