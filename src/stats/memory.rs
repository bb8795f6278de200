use procfs::{FromRead, Meminfo};

use crate::error::Result;

/// Physical memory figures needed for the RAM meter, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub total: u64,
    pub available: u64,
}

impl From<&Meminfo> for MemoryUsage {
    fn from(meminfo: &Meminfo) -> Self {
        // Kernels before 3.14 have no MemAvailable
        let available = meminfo
            .mem_available
            .unwrap_or(meminfo.mem_free + meminfo.buffers + meminfo.cached);

        MemoryUsage { total: meminfo.mem_total, available }
    }
}

impl MemoryUsage {
    pub fn read() -> Result<Self> {
        let meminfo = Meminfo::from_file("/proc/meminfo")?;
        Ok(MemoryUsage::from(&meminfo))
    }

    /// Share of memory not available to new allocations, in percent.
    pub fn used_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let used = self.total.saturating_sub(self.available);
        (used as f64 / self.total as f64) * 100.0
    }
}
