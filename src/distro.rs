//! Distribution detection fallback chain.

use crate::utils::command::run_command;
use crate::utils::file::read_file_safe;
use std::path::Path;
use tracing::debug;

const OS_RELEASE: &str = "/etc/os-release";

/// Resolved distribution identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distro {
    /// Canonical id ("Ubuntu", "Mac OS X", ..., "Linux" as the fallback).
    pub id: String,
    /// Human-readable name; empty when unavailable.
    pub pretty: String,
}

impl Distro {
    fn plain(id: &str) -> Self {
        Distro {
            id: id.to_string(),
            pretty: String::new(),
        }
    }

    /// Pretty name when present, id otherwise.
    pub fn display_name(&self) -> &str {
        if self.pretty.is_empty() {
            &self.id
        } else {
            &self.pretty
        }
    }
}

/// Walk the detection chain: platform alias, os-release descriptor,
/// `lsb_release -is`, then the "Linux" default. Never fails; every I/O
/// error means "continue the chain".
pub fn resolve() -> Distro {
    match std::env::consts::OS {
        "macos" => Distro::plain("Mac OS X"),
        "freebsd" => Distro::plain("FreeBSD"),
        _ => resolve_from(Path::new(OS_RELEASE)),
    }
}

fn resolve_from(path: &Path) -> Distro {
    match read_file_safe(path) {
        Ok(text) => {
            if let Some(distro) = parse_os_release(&text) {
                return distro;
            }
            debug!("no NAME field in {}", path.display());
        }
        Err(err) => debug!("cannot read {}: {}", path.display(), err),
    }
    lsb_release_id().unwrap_or_else(|| Distro::plain("Linux"))
}

/// Extract NAME and PRETTY_NAME from os-release text.
///
/// NAME loses surrounding quotes and the " GNU/Linux" suffix; the pretty
/// name additionally loses "GNU/Linux " and "LTS" noise.
fn parse_os_release(text: &str) -> Option<Distro> {
    let mut name = String::new();
    let mut pretty = String::new();

    for line in text.lines() {
        if let Some(value) = line.strip_prefix("PRETTY_NAME=") {
            pretty = value
                .trim()
                .trim_matches('"')
                .replace("GNU/Linux ", "")
                .replace("LTS", "")
                .trim()
                .to_string();
        } else if let Some(value) = line.strip_prefix("NAME=") {
            name = value
                .trim()
                .trim_matches('"')
                .replace(" GNU/Linux", "")
                .trim()
                .to_string();
        }
    }

    if name.is_empty() {
        None
    } else {
        Some(Distro { id: name, pretty })
    }
}

fn lsb_release_id() -> Option<Distro> {
    match run_command("lsb_release", &["-is"]) {
        Ok(id) if !id.is_empty() => Some(Distro::plain(&id)),
        Ok(_) => None,
        Err(err) => {
            debug!("lsb_release probe failed: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const UBUNTU_RELEASE: &str = r#"NAME="Ubuntu"
VERSION="16.04.3 LTS (Xenial Xerus)"
ID=ubuntu
ID_LIKE=debian
PRETTY_NAME="Ubuntu 16.04.3 LTS"
VERSION_ID="16.04"
HOME_URL="http://www.ubuntu.com/"
VERSION_CODENAME=xenial
"#;

    #[test]
    fn parses_name_and_pretty_name() {
        let distro = parse_os_release(UBUNTU_RELEASE).unwrap();
        assert_eq!(distro.id, "Ubuntu");
        assert_eq!(distro.pretty, "Ubuntu 16.04.3");
        assert_eq!(distro.display_name(), "Ubuntu 16.04.3");
    }

    #[test]
    fn strips_gnu_linux_suffix() {
        let distro = parse_os_release("NAME=\"Raspbian GNU/Linux\"\n").unwrap();
        assert_eq!(distro.id, "Raspbian");
        assert_eq!(distro.display_name(), "Raspbian");
    }

    #[test]
    fn pretty_name_loses_gnu_linux_prefix() {
        let text = "NAME=\"Debian GNU/Linux\"\nPRETTY_NAME=\"Debian GNU/Linux 9 (stretch)\"\n";
        let distro = parse_os_release(text).unwrap();
        assert_eq!(distro.id, "Debian");
        assert_eq!(distro.pretty, "Debian 9 (stretch)");
    }

    #[test]
    fn missing_name_yields_none() {
        assert!(parse_os_release("").is_none());
        assert!(parse_os_release("ID=ubuntu\nVERSION_ID=\"16.04\"\n").is_none());
    }

    #[test]
    fn chain_ends_with_nonempty_id() {
        let distro = resolve_from(Path::new("/nonexistent/os-release"));
        assert!(!distro.id.is_empty());
    }

    #[test]
    fn reads_descriptor_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(UBUNTU_RELEASE.as_bytes()).unwrap();
        let distro = resolve_from(file.path());
        assert_eq!(distro.id, "Ubuntu");
    }

    #[test]
    fn resolve_is_total() {
        assert!(!resolve().id.is_empty());
    }
}
