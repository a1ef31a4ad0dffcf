/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline rule applies inside them and no
/// cross-document link is detected inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: u8 = b'`';
}
