//! Installed package counting via the distribution's package manager.

use crate::error::Result;
use crate::utils::command::{run_command, run_piped};

/// Count installed packages for the resolved distribution.
///
/// Mac OS X asks Homebrew; the Debian family pipes dpkg's selections
/// through `grep -v deinstall`. Distributions without a known package
/// manager report zero rather than failing, as does any subprocess
/// error at the caller's sentinel boundary.
pub fn count(distro_id: &str) -> Result<u64> {
    let listing = match distro_id {
        "Mac OS X" => run_command("brew", &["list", "-1"])?,
        "Ubuntu" | "Debian" | "Raspbian" => {
            let producer: (&str, &[&str]) = ("dpkg", &["--get-selections"]);
            let filter: (&str, &[&str]) = ("grep", &["-v", "deinstall"]);
            run_piped(producer, filter)?
        }
        _ => return Ok(0),
    };
    Ok(count_lines(&listing))
}

/// Non-empty lines in a package listing.
fn count_lines(listing: &str) -> u64 {
    listing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_nonempty_lines() {
        assert_eq!(count_lines("bash\t\tinstall\nvim\t\tinstall\n"), 2);
        assert_eq!(count_lines("bash\t\tinstall"), 1);
    }

    #[test]
    fn empty_listing_counts_zero() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("\n\n"), 0);
    }

    #[test]
    fn unknown_distro_counts_zero() {
        assert_eq!(count("Gentoo").unwrap(), 0);
        assert_eq!(count("FreeBSD").unwrap(), 0);
    }
}
