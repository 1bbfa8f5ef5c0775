//! Status colours for rendering candidate lists.
//!
//! The palette matches the web portal, so a terminal listing and the
//! browser table badge the same statuses the same way.

use std::fmt;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Badge colours for one status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub background: Rgb,
    pub foreground: Rgb,
}

/// Brand accent, used for headings and counts
pub const ACCENT: Rgb = Rgb(0xea, 0x5b, 0x0c);

const HIRED: StatusStyle = StatusStyle {
    background: Rgb(0xe8, 0xf5, 0xe9),
    foreground: Rgb(0x2e, 0x7d, 0x32),
};
const REJECTED: StatusStyle = StatusStyle {
    background: Rgb(0xff, 0xeb, 0xee),
    foreground: Rgb(0xd3, 0x2f, 0x2f),
};
const INTERVIEW: StatusStyle = StatusStyle {
    background: Rgb(0xff, 0xf3, 0xe0),
    foreground: Rgb(0xef, 0x6c, 0x00),
};
const NEW: StatusStyle = StatusStyle {
    background: Rgb(0xe3, 0xf2, 0xfd),
    foreground: Rgb(0x02, 0x88, 0xd1),
};

/// Badge colours for a status label.
///
/// Unknown labels get the "New" style.
pub fn status_style(status: &str) -> StatusStyle {
    match status {
        "Hired" => HIRED,
        "Rejected" => REJECTED,
        "Interview" => INTERVIEW,
        _ => NEW,
    }
}
