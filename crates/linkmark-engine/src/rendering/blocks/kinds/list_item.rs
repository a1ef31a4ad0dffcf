/// Bullet list item type with owned marker constants.
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    /// Strips a bullet marker, returning the item text.
    pub fn strip_marker(trimmed: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
    }
}
