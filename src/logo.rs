//! Distribution profiles: palettes, compiled-in ASCII art and the
//! positional template renderer.

use crate::error::{FetchError, Result};

pub const CLEAR: &str = "\x1b[0;0m";
pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const BOLD_RED: &str = "\x1b[1;31m";
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const BOLD_BLUE: &str = "\x1b[1;34m";

/// Reset sequence terminating every rendered block.
pub const RESET: &str = "\x1b[0m";

/// Tier colors for threshold-colored readings: high, low, mid.
pub const SENSORS: [&str; 3] = [BOLD_RED, BOLD_GREEN, BOLD_YELLOW];

/// Value slots every template declares, `{results[0]}`..`{results[12]}`.
pub const RESULT_SLOTS: usize = 13;

/// Compiled-in bundle of id, color palette and ASCII art for one
/// distribution.
pub struct Profile {
    pub id: &'static str,
    pub palette: &'static [&'static str],
    template: &'static str,
}

/// The full compiled set. "Linux" doubles as the fallback for ids
/// without art of their own.
pub static PROFILES: [Profile; 4] = [
    Profile {
        id: "Ubuntu",
        palette: &[RED, BOLD_RED, BOLD_YELLOW],
        template: include_str!("../ascii/ubuntu.txt"),
    },
    Profile {
        id: "Mac OS X",
        palette: &[GREEN, YELLOW, RED, BLUE],
        template: include_str!("../ascii/macosx.txt"),
    },
    Profile {
        id: "Raspbian",
        palette: &[RED, BOLD_RED, GREEN],
        template: include_str!("../ascii/raspbian.txt"),
    },
    Profile {
        id: "Linux",
        palette: &[CLEAR, BOLD_BLUE],
        template: include_str!("../ascii/linux.txt"),
    },
];

/// Profile for a resolved distribution id. Unknown ids draw the generic
/// penguin instead of failing.
pub fn profile_for(id: &str) -> &'static Profile {
    PROFILES
        .iter()
        .find(|profile| profile.id == id)
        .unwrap_or(&PROFILES[3])
}

impl Profile {
    /// Palette entry that colors metric keys in rendered output.
    pub fn key_color(&self) -> &'static str {
        self.palette.get(1).copied().unwrap_or(CLEAR)
    }

    /// Substitute palette colors and ordered values into the template.
    ///
    /// Slots past the end of `values` render as empty strings; the block
    /// always terminates with a color reset.
    pub fn render(&self, values: &[String]) -> String {
        let mut out = self.template.to_string();
        for (index, color) in self.palette.iter().enumerate() {
            out = out.replace(&format!("{{color[{}]}}", index), color);
        }
        for slot in 0..RESULT_SLOTS {
            let value = values.get(slot).map(String::as_str).unwrap_or("");
            out = out.replace(&format!("{{results[{}]}}", slot), value);
        }
        out.push_str(RESET);
        out
    }

    /// Check the template against the slot schema: every value slot
    /// present exactly once, every color index inside the palette.
    pub fn validate(&self) -> Result<()> {
        for slot in 0..RESULT_SLOTS {
            let token = format!("{{results[{}]}}", slot);
            if self.template.matches(token.as_str()).count() != 1 {
                return Err(FetchError::Parse(format!(
                    "{}: value slot {} missing or duplicated",
                    self.id, slot
                )));
            }
        }
        for index in self.palette.len()..8 {
            let token = format!("{{color[{}]}}", index);
            if self.template.contains(token.as_str()) {
                return Err(FetchError::Parse(format!(
                    "{}: color index {} outside palette of {}",
                    self.id,
                    index,
                    self.palette.len()
                )));
            }
        }
        Ok(())
    }
}

/// Render every compiled profile with literal slot indexes substituted,
/// id line first. Alignment diagnostic; collects nothing.
pub fn preview_all() -> String {
    let slots: Vec<String> = (0..RESULT_SLOTS).map(|slot| slot.to_string()).collect();
    let mut out = String::new();
    for profile in &PROFILES {
        out.push_str(profile.id);
        out.push('\n');
        out.push_str(&profile.render(&slots));
        out.push('\n');
    }
    out
}
