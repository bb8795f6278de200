use nix::sys::statvfs::{statvfs, Statvfs};

use crate::error::Result;

/// Block counts of a mounted filesystem, already scaled to bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskSpace {
    pub total: u64,
    pub free: u64,
    /// Free space usable by unprivileged users; excludes the root reserve
    pub available: u64,
}

impl From<&Statvfs> for DiskSpace {
    fn from(vfs: &Statvfs) -> Self {
        DiskSpace::from_blocks(
            vfs.blocks() as u64,
            vfs.blocks_free() as u64,
            vfs.blocks_available() as u64,
            vfs.fragment_size() as u64,
        )
    }
}

impl DiskSpace {
    /// Scales `statvfs` block counts, which are in units of `frsize` bytes.
    pub fn from_blocks(blocks: u64, blocks_free: u64, blocks_available: u64, frsize: u64) -> Self {
        DiskSpace {
            total: blocks.saturating_mul(frsize),
            free: blocks_free.saturating_mul(frsize),
            available: blocks_available.saturating_mul(frsize),
        }
    }

    pub fn read(path: &str) -> Result<Self> {
        let vfs = statvfs(path)?;
        Ok(DiskSpace::from(&vfs))
    }

    /// Used share of the space a normal user can reach, in percent.
    ///
    /// The root reserve is left out of the denominator, matching what `df`
    /// prints in its `Use%` column.
    pub fn used_percent(&self) -> f64 {
        let used = self.total.saturating_sub(self.free);
        let reachable = used + self.available;
        if reachable == 0 {
            return 0.0;
        }
        (used as f64 / reachable as f64) * 100.0
    }
}
