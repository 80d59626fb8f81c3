//! Hardware providers (CPU model, CPU usage, memory, disk).

use crate::error::{FetchError, Result};
use crate::logo::{CLEAR, SENSORS};
use crate::utils::command::run_command;
use crate::utils::file::read_file_safe;
use crate::utils::format::{scale_bytes, used_percent};
use std::path::Path;
use std::thread;
use std::time::Duration;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};

/// Sampling window for per-core utilization; the provider blocks for
/// the whole duration.
const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// CPU model string: sysctl brand on Mac OS X, /proc/cpuinfo elsewhere.
pub fn cpu_model(distro_id: &str) -> Result<String> {
    if distro_id == "Mac OS X" {
        let raw = run_command("sysctl", &["-n", "machdep.cpu.brand_string"])?;
        Ok(clean_cpu_brand(&raw))
    } else {
        let cpuinfo = read_file_safe("/proc/cpuinfo")?;
        model_name(&cpuinfo).ok_or_else(|| {
            FetchError::Detection("model name not found in /proc/cpuinfo".to_string())
        })
    }
}

/// First "model name" value in cpuinfo text.
fn model_name(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .find(|line| line.starts_with("model name"))
        .and_then(|line| line.split(':').nth(1))
        .map(|value| value.trim().to_string())
}

/// Drop marketing tokens and collapse runs of whitespace.
fn clean_cpu_brand(raw: &str) -> String {
    raw.replace("(R)", "")
        .replace("(TM)", "")
        .replace("CPU", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Per-core utilization percentages over a blocking one-second window,
/// rendered as "[12.5, 3.1, ...]".
pub fn cpu_usage() -> String {
    let mut sys =
        System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::everything()));
    sys.refresh_cpu_usage();
    thread::sleep(CPU_SAMPLE_WINDOW);
    sys.refresh_cpu_usage();

    let cores: Vec<String> = sys
        .cpus()
        .iter()
        .map(|cpu| format!("{:.1}", cpu.cpu_usage()))
        .collect();
    format!("[{}]", cores.join(", "))
}

/// Used and total physical memory, scaled to a shared unit.
pub fn ram() -> String {
    let mut sys =
        System::new_with_specifics(RefreshKind::new().with_memory(MemoryRefreshKind::everything()));
    sys.refresh_memory();

    let (used, total, unit) = scale_bytes(sys.used_memory(), sys.total_memory());
    format!("{} {}/ {} {}", used, unit, total, unit)
}

/// Root filesystem usage. Structured mode yields the plain
/// "used / total unit" string; display mode wraps the used figure in a
/// sensors tier color.
pub fn disk(structured: bool) -> Result<String> {
    let (used, total) = root_disk_usage()?;
    let (used, total, unit) = scale_bytes(used, total);

    if structured {
        return Ok(format!("{} / {} {}", used, total, unit));
    }

    let tier = usage_tier(used_percent(used, total));
    Ok(format!("{}{} {}/ {} {}", tier, used, CLEAR, total, unit))
}

/// Sensors tier for a usage percentage: low up to 33, mid up to 67,
/// high beyond.
fn usage_tier(percent: u64) -> &'static str {
    if percent <= 33 {
        SENSORS[1]
    } else if percent <= 67 {
        SENSORS[2]
    } else {
        SENSORS[0]
    }
}

fn root_disk_usage() -> Result<(u64, u64)> {
    let disks = Disks::new_with_refreshed_list();
    let root = disks
        .list()
        .iter()
        .find(|disk| disk.mount_point() == Path::new("/"))
        .or_else(|| disks.list().first())
        .ok_or_else(|| FetchError::Detection("no disks reported".to_string()))?;

    let total = root.total_space();
    let used = total.saturating_sub(root.available_space());
    Ok((used, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo;

    #[test]
    fn brand_cleanup_collapses_marketing_tokens() {
        assert_eq!(
            clean_cpu_brand("Intel(R) Core(TM) i7-4770HQ CPU @ 2.20GHz"),
            "Intel Core i7-4770HQ @ 2.20GHz"
        );
        assert_eq!(clean_cpu_brand("Apple M1"), "Apple M1");
    }

    #[test]
    fn model_name_takes_first_core() {
        let cpuinfo = "processor\t: 0\nmodel name\t: AMD Ryzen 7 5800X\nprocessor\t: 1\nmodel name\t: AMD Ryzen 7 5800X\n";
        assert_eq!(model_name(cpuinfo).unwrap(), "AMD Ryzen 7 5800X");
        assert!(model_name("flags\t: fpu vme\n").is_none());
    }

    #[test]
    fn usage_tier_boundaries() {
        assert_eq!(usage_tier(0), logo::SENSORS[1]);
        assert_eq!(usage_tier(33), logo::SENSORS[1]);
        assert_eq!(usage_tier(34), logo::SENSORS[2]);
        assert_eq!(usage_tier(67), logo::SENSORS[2]);
        assert_eq!(usage_tier(68), logo::SENSORS[0]);
        assert_eq!(usage_tier(100), logo::SENSORS[0]);
    }

    #[test]
    fn cpu_usage_renders_a_bracketed_list() {
        let value = cpu_usage();
        assert!(value.starts_with('['));
        assert!(value.ends_with(']'));
    }
}
