use serde::Serialize;

/// ATX heading depth. Only levels 1 through 4 are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }
}

/// Heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// Markers ordered longest first. Matching must walk them in this order.
    pub const MARKERS: [(&'static str, HeadingLevel); 4] = [
        ("#### ", HeadingLevel::H4),
        ("### ", HeadingLevel::H3),
        ("## ", HeadingLevel::H2),
        ("# ", HeadingLevel::H1),
    ];

    /// Strips a heading marker, returning the level and the remaining text.
    pub fn strip_marker(trimmed: &str) -> Option<(HeadingLevel, &str)> {
        Self::MARKERS.iter().find_map(|(marker, level)| {
            trimmed.strip_prefix(marker).map(|rest| (*level, rest))
        })
    }
}
