use tracing::warn;

use crate::error::Result;

pub mod cpu;
pub mod disk;
pub mod memory;

use cpu::CpuTotals;
use disk::DiskSpace;
use memory::MemoryUsage;

/// One reading of the three meters, each an integer percentage in 0..=100.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Utilization {
    pub cpu: u8,
    pub memory: u8,
    pub disk: u8,
}

/// Rounds a float percentage to one decimal, then truncates it to a whole
/// number clamped to 0..=100, so 99.95 reads as 100 and 99.94 as 99.
pub fn to_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let tenths = (value * 10.0).round() / 10.0;
    tenths.clamp(0.0, 100.0) as u8
}

/// A provider of host utilization readings.
pub trait StatsSource {
    /// Busy share of all cpus since the previous call.
    fn cpu_percent(&mut self) -> Result<u8>;
    fn memory_percent(&mut self) -> Result<u8>;
    /// Usage of the filesystem mounted at `path`.
    fn disk_percent(&mut self, path: &str) -> Result<u8>;
}

/// Readings backed by `/proc` and `statvfs(3)`.
#[derive(Debug, Default)]
pub struct ProcSource {
    last_cpu: Option<CpuTotals>,
}

impl StatsSource for ProcSource {
    fn cpu_percent(&mut self) -> Result<u8> {
        let current = CpuTotals::read()?;
        // No baseline on the first call
        let percent = match self.last_cpu.replace(current) {
            Some(prev) => cpu::busy_percent(&prev, &current),
            None => 0.0,
        };
        Ok(to_percent(percent))
    }

    fn memory_percent(&mut self) -> Result<u8> {
        let usage = MemoryUsage::read()?;
        Ok(to_percent(usage.used_percent()))
    }

    fn disk_percent(&mut self, path: &str) -> Result<u8> {
        let space = DiskSpace::read(path)?;
        Ok(to_percent(space.used_percent()))
    }
}

/// Takes one [`Utilization`] per tick from a [`StatsSource`].
///
/// A meter whose read fails keeps its previous value.
pub struct Sampler<S = ProcSource> {
    source: S,
    disk_path: String,
    last: Utilization,
}

impl<S: StatsSource> Sampler<S> {
    pub fn new(source: S, disk_path: impl Into<String>) -> Self {
        Sampler {
            source,
            disk_path: disk_path.into(),
            last: Utilization::default(),
        }
    }

    pub fn sample(&mut self) -> Utilization {
        let last = self.last;

        let cpu = self.source.cpu_percent().unwrap_or_else(|e| {
            warn!("Failed to sample CPU usage: {}", e);
            last.cpu
        });
        let memory = self.source.memory_percent().unwrap_or_else(|e| {
            warn!("Failed to sample memory usage: {}", e);
            last.memory
        });
        let disk = self.source.disk_percent(&self.disk_path).unwrap_or_else(|e| {
            warn!(path = %self.disk_path, "Failed to sample disk usage: {}", e);
            last.disk
        });

        self.last = Utilization { cpu, memory, disk };
        self.last
    }
}
