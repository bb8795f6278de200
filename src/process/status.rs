use std::fmt;

/// Scheduler state of a process, named after the letter the kernel reports in
/// `/proc/[pid]/stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Running,
    Sleeping,
    DiskSleep,
    Zombie,
    Stopped,
    TracingStop,
    Dead,
    WakeKill,
    Waking,
    Parked,
    Idle,
    Unknown(char),
}

impl From<char> for ProcessStatus {
    fn from(state: char) -> Self {
        match state {
            'R' => ProcessStatus::Running,
            'S' => ProcessStatus::Sleeping,
            'D' => ProcessStatus::DiskSleep,
            'Z' => ProcessStatus::Zombie,
            'T' => ProcessStatus::Stopped,
            't' => ProcessStatus::TracingStop,
            'X' | 'x' => ProcessStatus::Dead,
            'K' => ProcessStatus::WakeKill,
            'W' => ProcessStatus::Waking,
            'P' => ProcessStatus::Parked,
            'I' => ProcessStatus::Idle,
            other => ProcessStatus::Unknown(other),
        }
    }
}

impl ProcessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessStatus::Running => "running",
            ProcessStatus::Sleeping => "sleeping",
            ProcessStatus::DiskSleep => "disk-sleep",
            ProcessStatus::Zombie => "zombie",
            ProcessStatus::Stopped => "stopped",
            ProcessStatus::TracingStop => "tracing-stop",
            ProcessStatus::Dead => "dead",
            ProcessStatus::WakeKill => "wake-kill",
            ProcessStatus::Waking => "waking",
            ProcessStatus::Parked => "parked",
            ProcessStatus::Idle => "idle",
            ProcessStatus::Unknown(_) => "unknown",
        }
    }

    pub fn is_running(&self) -> bool {
        *self == ProcessStatus::Running
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_r_is_running() {
        assert!(ProcessStatus::from('R').is_running());
        for state in ['S', 'D', 'Z', 'T', 't', 'X', 'x', 'K', 'W', 'P', 'I', '?'] {
            assert!(!ProcessStatus::from(state).is_running(), "state {}", state);
        }
    }

    #[test]
    fn names_follow_kernel_letters() {
        assert_eq!(ProcessStatus::from('D').to_string(), "disk-sleep");
        assert_eq!(ProcessStatus::from('t').to_string(), "tracing-stop");
        assert_eq!(ProcessStatus::from('x'), ProcessStatus::Dead);
        assert_eq!(ProcessStatus::from('Q'), ProcessStatus::Unknown('Q'));
        assert_eq!(ProcessStatus::from('Q').as_str(), "unknown");
    }
}
