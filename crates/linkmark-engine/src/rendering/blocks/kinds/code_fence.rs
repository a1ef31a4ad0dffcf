/// Signature of a line that opens or closes a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    /// Info string after the backticks (`rust` in ```` ```rust ````), if any.
    pub info: Option<&'a str>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the fence signature if `trimmed` begins with three backticks.
    ///
    /// `trimmed` is the line with trailing whitespace already removed.
    pub fn sig(trimmed: &str) -> Option<FenceSig<'_>> {
        let rest = trimmed.strip_prefix(Self::BACKTICKS)?;
        let info = rest.trim_start_matches('`').trim();
        Some(FenceSig {
            info: (!info.is_empty()).then_some(info),
        })
    }
}
