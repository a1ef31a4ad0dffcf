use crate::links::LinkSpan;

/// Replaces each link's source syntax in `text` with its display text.
///
/// Spans are processed rightmost first, so a replacement never moves the
/// start of a span still waiting its turn. Spans already replaced sit to the
/// right and are shifted by the size change, which keeps
/// `text[start_index..start_index + length] == display_text` for all of them.
///
/// A span whose range no longer fits `text` is logged as position drift and
/// left untouched.
pub fn reconcile(text: &mut String, spans: &mut [LinkSpan]) {
    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by(|a, b| spans[*b].start_index.cmp(&spans[*a].start_index));

    let mut replaced: Vec<usize> = Vec::with_capacity(spans.len());
    for i in order {
        let range = spans[i].range();
        let fits = range.end <= text.len()
            && text.is_char_boundary(range.start)
            && text.is_char_boundary(range.end);
        if !fits {
            log::warn!(
                "position drift: link to {:?} at {:?} outside text of {} bytes; left unadjusted",
                spans[i].target_identifier,
                range,
                text.len()
            );
            continue;
        }

        let old_len = spans[i].length;
        text.replace_range(range, &spans[i].display_text);
        let new_len = spans[i].display_text.len();
        spans[i].length = new_len;

        let delta = new_len as isize - old_len as isize;
        for &j in &replaced {
            spans[j].start_index = spans[j].start_index.saturating_add_signed(delta);
        }
        replaced.push(i);
    }
}
