//! Shift effect spans over characters inserted during wrapping.

use crate::markup::EffectSpan;

/// Return `spans` adjusted for characters inserted at `insertions`.
///
/// `insertions` are positions in the wrapped text. They are applied in
/// ascending order (the input is sorted first) because every adjustment moves
/// the comparisons that follow; duplicates are applied independently. For
/// each insertion `p` and span:
///
/// - `start <= p <= start + len - 1`: the insertion landed inside the span,
///   so its length grows by one (`p == start` counts as inside)
/// - `p < start`: the span moves one character to the right
/// - otherwise the span is untouched
///
/// The input is not modified.
#[must_use]
pub fn remap_spans(spans: &[EffectSpan], insertions: &[usize]) -> Vec<EffectSpan> {
    let mut ordered = insertions.to_vec();
    ordered.sort_unstable();

    spans
        .iter()
        .map(|span| {
            let mut span = *span;
            for &pos in &ordered {
                if pos >= span.start && pos < span.end() {
                    span.len += 1;
                } else if pos < span.start {
                    span.start += 1;
                }
            }
            span
        })
        .collect()
}
