//! Primary IPv4 address and a MAC-like hardware identifier.
//!
//! The MAC comes from whichever non-loopback interface reports one
//! first (names sorted for determinism). It is an identifier for the
//! host, not a statement about which NIC carries traffic; it can be
//! absent entirely, in which case an all-zero address stands in.

use std::net::{IpAddr, ToSocketAddrs};
use sysinfo::{Networks, System};
use tracing::warn;

const FALLBACK_IP: &str = "127.0.0.1";

/// "ip / MAC: AA:BB:..." for the host, best effort. Resolution failure
/// degrades to the loopback address; the reason is logged, never raised.
pub fn ip_and_mac(zeroconfig: bool) -> String {
    let mac = mac_address();
    let mut host = System::host_name().unwrap_or_default();
    if zeroconfig {
        host = zeroconf_host(&host);
    }

    let ip = match resolve_ipv4(&host) {
        Ok(ip) => ip,
        Err(err) => {
            warn!(%host, %err, "IP resolution failed, reporting loopback");
            FALLBACK_IP.to_string()
        }
    };

    format!("{} / MAC: {}", ip, mac)
}

/// Sentinel when the whole provider fails.
pub fn loopback_fallback() -> String {
    format!("{} / MAC: {}", FALLBACK_IP, format_mac(&[0; 6]))
}

/// mDNS-style name: append ".local" unless the name already carries it.
fn zeroconf_host(host: &str) -> String {
    if host.contains(".local") {
        host.to_string()
    } else {
        format!("{}.local", host)
    }
}

fn resolve_ipv4(host: &str) -> std::io::Result<String> {
    for addr in (host, 0).to_socket_addrs()? {
        if let IpAddr::V4(v4) = addr.ip() {
            return Ok(v4.to_string());
        }
    }
    Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "no IPv4 address",
    ))
}

/// Hardware address of the first non-loopback interface reporting a
/// non-zero one; all zeros otherwise.
fn mac_address() -> String {
    let networks = Networks::new_with_refreshed_list();
    let mut interfaces: Vec<(&str, [u8; 6])> = networks
        .iter()
        .map(|(name, data)| (name.as_str(), data.mac_address().0))
        .collect();
    interfaces.sort_by(|a, b| a.0.cmp(b.0));

    let octets = interfaces
        .iter()
        .find(|(name, mac)| *name != "lo" && mac.iter().any(|byte| *byte != 0))
        .map(|(_, mac)| *mac)
        .unwrap_or([0; 6]);
    format_mac(&octets)
}

/// Six uppercase colon-separated hex octets.
fn format_mac(octets: &[u8; 6]) -> String {
    octets
        .iter()
        .map(|byte| format!("{:02X}", byte))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroconf_appends_local_once() {
        assert_eq!(zeroconf_host("box"), "box.local");
        assert_eq!(zeroconf_host("box.local"), "box.local");
        assert_eq!(zeroconf_host("box.local.lan"), "box.local.lan");
    }

    #[test]
    fn mac_renders_uppercase_hex() {
        assert_eq!(
            format_mac(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0x42]),
            "DE:AD:BE:EF:00:42"
        );
    }

    #[test]
    fn fallback_keeps_output_shape() {
        assert_eq!(loopback_fallback(), "127.0.0.1 / MAC: 00:00:00:00:00:00");
    }

    #[test]
    fn localhost_resolves() {
        assert_eq!(resolve_ipv4("localhost").unwrap(), "127.0.0.1");
    }
}
