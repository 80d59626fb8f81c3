//! The metric provider set.
//!
//! Every provider is a self-contained unit producing one key/value pair.
//! Failures never cross the provider boundary: each variant degrades to
//! its sentinel value and the reason is logged.

pub mod hardware;
pub mod network;
pub mod packages;
pub mod system;

use crate::distro::Distro;
use crate::error::Result;
use crate::report::{Metric, MetricValue};
use tracing::debug;

/// Options forwarded from the CLI boundary into individual providers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectOptions {
    /// Append ".local" to the hostname before IP resolution.
    pub zeroconfig: bool,
    /// Structured output: skip presentation-only coloring.
    pub structured: bool,
}

/// Closed set of metric providers, one variant per reported field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    User,
    Hostname,
    Ip,
    Os,
    Kernel,
    Uptime,
    Shell,
    Processes,
    Packages,
    Cpu,
    CpuUsage,
    Ram,
    Disk,
}

impl Provider {
    /// Collection order. Fixed: it decides which template slot each
    /// metric lands in, so reordering silently misaligns the art.
    pub const PIPELINE: [Provider; 13] = [
        Provider::User,
        Provider::Hostname,
        Provider::Ip,
        Provider::Os,
        Provider::Kernel,
        Provider::Uptime,
        Provider::Shell,
        Provider::Processes,
        Provider::Packages,
        Provider::Cpu,
        Provider::CpuUsage,
        Provider::Ram,
        Provider::Disk,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Provider::User => "User",
            Provider::Hostname => "Hostname",
            Provider::Ip => "IP",
            Provider::Os => "OS",
            Provider::Kernel => "Kernel",
            Provider::Uptime => "Uptime",
            Provider::Shell => "Shell",
            Provider::Processes => "Processes",
            Provider::Packages => "Packages",
            Provider::Cpu => "CPU",
            Provider::CpuUsage => "CPU Usage",
            Provider::Ram => "RAM",
            Provider::Disk => "Disk",
        }
    }

    /// Compute this provider's metric, substituting the sentinel on any
    /// failure.
    pub fn collect(self, distro: &Distro, opts: &CollectOptions) -> Metric {
        let value = match self.compute(distro, opts) {
            Ok(value) => value,
            Err(err) => {
                debug!(key = self.key(), %err, "provider failed, using sentinel");
                self.sentinel()
            }
        };
        Metric {
            key: self.key(),
            value,
        }
    }

    fn compute(self, distro: &Distro, opts: &CollectOptions) -> Result<MetricValue> {
        match self {
            Provider::User => Ok(system::user().into()),
            Provider::Hostname => system::hostname().map(MetricValue::Text),
            Provider::Ip => Ok(network::ip_and_mac(opts.zeroconfig).into()),
            Provider::Os => Ok(system::os(distro).into()),
            Provider::Kernel => system::kernel().map(MetricValue::Text),
            Provider::Uptime => Ok(system::uptime().into()),
            Provider::Shell => Ok(system::shell().into()),
            Provider::Processes => Ok(system::processes().into()),
            Provider::Packages => packages::count(&distro.id).map(MetricValue::Count),
            Provider::Cpu => hardware::cpu_model(&distro.id).map(MetricValue::Text),
            Provider::CpuUsage => Ok(hardware::cpu_usage().into()),
            Provider::Ram => Ok(hardware::ram().into()),
            Provider::Disk => hardware::disk(opts.structured).map(MetricValue::Text),
        }
    }

    fn sentinel(self) -> MetricValue {
        match self {
            Provider::Hostname | Provider::Kernel | Provider::Cpu => {
                MetricValue::Text("unknown".to_string())
            }
            Provider::Ip => MetricValue::Text(network::loopback_fallback()),
            Provider::Processes => MetricValue::Text("0 running".to_string()),
            Provider::Packages => MetricValue::Count(0),
            Provider::Disk => MetricValue::Text("0 / 0 B".to_string()),
            _ => MetricValue::Text(String::new()),
        }
    }
}
