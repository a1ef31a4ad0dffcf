use std::fmt::Write;

use crate::rendering::blocks::Block;

/// Renders blocks as a stable, line-oriented outline for snapshot assertions.
///
/// ```text
/// Paragraph "see Ideas"
///   link 4..9 "Ideas" -> ideas.md (resolved)
/// ```
pub fn normalize(blocks: &[Block]) -> String {
    let mut out = String::new();
    for b in blocks {
        let _ = writeln!(out, "{:?} {:?}", b.kind, b.content);
        for link in &b.links {
            let _ = writeln!(
                out,
                "  link {}..{} {:?} -> {} ({})",
                link.start_index,
                link.range().end,
                link.display_text,
                link.target_identifier,
                if link.resolved { "resolved" } else { "unresolved" }
            );
        }
    }
    out.truncate(out.trim_end().len());
    out
}
