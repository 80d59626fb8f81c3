//! Numeric formatting helpers

/// Unit ladder walked by `scale_bytes`.
pub const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Scale a used/total byte pair to a human unit.
///
/// Both values are ceiling-divided by 1024 in lockstep until the total
/// fits under 1000, so their ratio survives scaling. Stops after PB at
/// the latest. A total already at or below 1000 is returned untouched
/// at the base unit.
pub fn scale_bytes(used: u64, total: u64) -> (u64, u64, &'static str) {
    let mut used = used;
    let mut total = total;
    let mut unit = UNITS[0];

    for step in 1..UNITS.len() {
        if total <= 1000 {
            break;
        }
        used = used.div_ceil(1024);
        total = total.div_ceil(1024);
        unit = UNITS[step];
    }

    (used, total, unit)
}

/// Rounded-up usage percentage; 0 when the total is 0.
pub fn used_percent(used: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (used as f64 / total as f64 * 100.0).ceil() as u64
}

/// Format seconds since boot as "D days H hrs M mins"
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let rem = seconds % 86_400;
    format!("{} days {} hrs {} mins", days, rem / 3600, (rem % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_totals_stay_at_base_unit() {
        assert_eq!(scale_bytes(512, 900), (512, 900, "B"));
        assert_eq!(scale_bytes(0, 0), (0, 0, "B"));
        assert_eq!(scale_bytes(1000, 1000), (1000, 1000, "B"));
    }

    #[test]
    fn scales_gigabytes() {
        let used = 3 * 1024 * 1024 * 1024u64;
        let total = 16 * 1024 * 1024 * 1024u64;
        assert_eq!(scale_bytes(used, total), (3, 16, "GB"));
    }

    #[test]
    fn divides_with_ceiling() {
        // 1025 B rounds up to 2 KB; the used side rounds up too
        assert_eq!(scale_bytes(1, 1025), (1, 2, "KB"));
    }

    #[test]
    fn never_scales_past_petabytes() {
        let total = 1u64 << 60; // 1024 PB in bytes
        let (_, scaled_total, unit) = scale_bytes(total, total);
        assert_eq!(unit, "PB");
        assert_eq!(scaled_total, 1024);
    }

    #[test]
    fn used_percent_stays_in_bounds() {
        assert_eq!(used_percent(0, 0), 0);
        assert_eq!(used_percent(0, 100), 0);
        assert_eq!(used_percent(1, 3), 34);
        assert_eq!(used_percent(3, 3), 100);
    }

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(0), "0 days 0 hrs 0 mins");
        assert_eq!(format_uptime(60), "0 days 0 hrs 1 mins");
        assert_eq!(format_uptime(90_060), "1 days 1 hrs 1 mins");
        assert_eq!(format_uptime(86_399), "0 days 23 hrs 59 mins");
    }
}
