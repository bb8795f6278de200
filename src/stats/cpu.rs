use std::fs;
use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;

const PROC_STAT: &str = "/proc/stat";

/// Aggregate jiffy counters of the `cpu` line in `/proc/stat`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuTotals {
    pub busy: u64,
    pub idle: u64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed cpu line: {0:?}")]
pub struct CpuLineError(String);

impl FromStr for CpuTotals {
    type Err = CpuLineError;

    /// Parses the aggregate line, e.g. `cpu  10132153 290696 3084719 46828483 16683 0 25195 0 175628 0`.
    ///
    /// Kernels older than 2.6.33 print fewer columns; missing ones count as zero.
    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let err = || CpuLineError(line.to_string());
        let mut fields = line.split_whitespace();

        if fields.next() != Some("cpu") {
            return Err(err());
        }

        let mut times = [0u64; 8];
        let mut seen = 0;
        // guest and guest_nice (columns 9 and 10) are already part of user and nice
        for (slot, field) in times.iter_mut().zip(fields) {
            *slot = field.parse().map_err(|_| err())?;
            seen += 1;
        }
        if seen < 4 {
            return Err(err());
        }

        let [user, nice, system, idle, iowait, irq, softirq, steal] = times;
        Ok(CpuTotals {
            busy: user + nice + system + irq + softirq + steal,
            idle: idle + iowait,
        })
    }
}

impl CpuTotals {
    pub fn read() -> Result<Self> {
        let stat = fs::read_to_string(PROC_STAT)?;
        Self::from_proc_stat(&stat)
    }

    fn from_proc_stat(stat: &str) -> Result<Self> {
        let line = stat
            .lines()
            .find(|line| line.starts_with("cpu "))
            .unwrap_or_default();

        Ok(line.parse()?)
    }

    pub fn total(&self) -> u64 {
        self.busy + self.idle
    }
}

/// Busy share of the cpus between two readings, in percent.
pub fn busy_percent(prev: &CpuTotals, cur: &CpuTotals) -> f64 {
    let total = cur.total().saturating_sub(prev.total());
    if total == 0 {
        return 0.0;
    }
    let busy = cur.busy.saturating_sub(prev.busy);
    (busy as f64 / total as f64) * 100.0
}
