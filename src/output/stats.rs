//! Process diagnostics for a generator run
//!
//! Elapsed wall time since the generator was created and the peak resident
//! memory of the process, where the platform exposes it.

use std::time::{Duration, Instant};

/// Timing and memory figures for one run
#[derive(Debug, Clone, Copy)]
pub struct RunStatistics {
    started_at: Instant,
}

impl RunStatistics {
    /// Starts measuring from now
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Wall time since [`RunStatistics::start`]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Peak resident set size in MiB
    ///
    /// Read from `VmHWM` in `/proc/self/status`; `None` on platforms without it.
    pub fn peak_memory_mb(&self) -> Option<f64> {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        parse_peak_kb(&status).map(|kb| kb as f64 / 1024.0)
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::start()
    }
}

/// Extracts the `VmHWM` value (in kB) from a `/proc/<pid>/status` listing
fn parse_peak_kb(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmHWM:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|value| value.parse().ok())
}

/// Formats memory usage the way it is reported on the command line
pub fn format_memory_usage(stats: &RunStatistics) -> String {
    match stats.peak_memory_mb() {
        Some(mb) => format!("Memory Usage: {:.2} mb.", mb),
        None => "Memory Usage: unavailable".to_string(),
    }
}

/// Formats the elapsed time with four decimals
pub fn format_duration(stats: &RunStatistics) -> String {
    format!("Total Duration: {:.4} s.", stats.elapsed().as_secs_f64())
}

/// Prints run statistics to stdout
pub fn print_statistics(stats: &RunStatistics) {
    println!("{}", format_memory_usage(stats));
    println!("{}", format_duration(stats));
}
