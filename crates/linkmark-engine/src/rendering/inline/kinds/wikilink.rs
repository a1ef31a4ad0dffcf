/// Double-bracket cross-document reference: `[[target]]` or `[[target|alias]]`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const ALIAS: u8 = b'|';

    /// The text shown for a link: the alias when it has content, else the target.
    pub fn display_text<'a>(target: &'a str, alias: Option<&'a str>) -> &'a str {
        match alias.map(str::trim) {
            Some(a) if !a.is_empty() => a,
            _ => target.trim(),
        }
    }
}
