//! ferrofetch library
//!
//! Collects a fixed set of host metrics and renders them beside
//! per-distribution ASCII art, or as a single JSON object.

pub mod collectors;
pub mod config;
pub mod distro;
pub mod error;
pub mod logo;
pub mod report;
pub mod utils;

pub use collectors::{CollectOptions, Provider};
pub use error::{FetchError, Result};
pub use report::{Metric, MetricValue, Report};

use distro::Distro;
use logo::Profile;

/// One full collection run: the resolved distribution, the profile that
/// renders it, and the ordered metrics.
pub struct Snapshot {
    pub distro: Distro,
    pub profile: &'static Profile,
    pub report: Report,
}

/// Resolve the distribution and run every provider in pipeline order.
pub fn collect(opts: &CollectOptions) -> Snapshot {
    collect_with_logo(opts, None)
}

/// As [`collect`], with the logo profile forced (config `logo` key).
/// Metrics are still collected against the resolved distribution.
pub fn collect_with_logo(opts: &CollectOptions, forced_logo: Option<&str>) -> Snapshot {
    let distro = distro::resolve();
    let profile = logo::profile_for(forced_logo.unwrap_or(&distro.id));

    let mut report = Report::new(profile.key_color());
    for provider in Provider::PIPELINE {
        report.append(provider.collect(&distro, opts));
    }

    Snapshot {
        distro,
        profile,
        report,
    }
}
