//! Identity and OS-level providers (user, hostname, kernel, uptime,
//! shell, process count).

use crate::distro::Distro;
use crate::error::{FetchError, Result};
use crate::utils::format::format_uptime;
use std::env;
use sysinfo::{ProcessesToUpdate, System};

/// Invoking user per the environment; empty when unset, which mirrors
/// the environment rather than being an error.
pub fn user() -> String {
    env::var("USER").unwrap_or_default()
}

/// Environment-declared login shell path; empty when unset.
pub fn shell() -> String {
    env::var("SHELL").unwrap_or_default()
}

/// OS-reported host name.
pub fn hostname() -> Result<String> {
    System::host_name().ok_or_else(|| FetchError::Detection("host name unavailable".to_string()))
}

/// Kernel release string.
pub fn kernel() -> Result<String> {
    System::kernel_version()
        .ok_or_else(|| FetchError::Detection("kernel version unavailable".to_string()))
}

/// Distro display name plus platform detail: marketing version and
/// architecture on Mac OS X, machine architecture everywhere else.
pub fn os(distro: &Distro) -> String {
    if distro.id == "Mac OS X" {
        let version = System::os_version().unwrap_or_default();
        format!(
            "{} {} {}",
            distro.display_name(),
            version,
            env::consts::ARCH
        )
    } else {
        format!("{} {}", distro.display_name(), env::consts::ARCH)
    }
}

/// Time since boot as "D days H hrs M mins".
pub fn uptime() -> String {
    format_uptime(System::uptime())
}

/// Count of live processes, "N running".
pub fn processes() -> String {
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::All, true);
    format!("{} running", sys.processes().len())
}
