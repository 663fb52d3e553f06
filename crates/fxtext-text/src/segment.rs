#![forbid(unsafe_code)]

//! Plain/effect segment interleaving.
//!
//! Wrapped text is consumed as an alternating sequence
//! `plain, effect, plain, effect, ..., plain`: for `N` effect spans there are
//! always `N + 1` plain segments, any of which may be empty. Each segment is
//! stored as its lines (split on `'\n'`), so a segment with `k` line breaks
//! has `k + 1` lines.
//!
//! Joining every segment's lines with `'\n'` and concatenating the segments
//! in order reproduces the wrapped text exactly.

use crate::markup::EffectSpan;

/// Slice `len` characters of `text` starting at character `start`.
///
/// Out-of-range bounds are clamped to the end of `text`.
#[must_use]
pub fn slice_chars(text: &str, start: usize, len: usize) -> &str {
    let byte_at = |char_idx: usize| {
        text.char_indices()
            .nth(char_idx)
            .map_or(text.len(), |(b, _)| b)
    };
    let from = byte_at(start);
    let to = byte_at(start.saturating_add(len)).max(from);
    &text[from..to]
}

/// What a segment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Untagged text.
    Plain,
    /// The text of the effect span at this index.
    Effect(usize),
}

/// One run of the interleaving, already split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Plain or effect.
    pub kind: SegmentKind,
    /// Lines of the run; never empty (an empty run has one empty line).
    pub lines: Vec<String>,
}

impl Segment {
    fn new(kind: SegmentKind, text: &str) -> Self {
        Self {
            kind,
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Number of line breaks inside this segment.
    #[must_use]
    pub fn break_count(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// The segment's text with its lines rejoined.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// The full plain/effect interleaving of a wrapped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    items: Vec<Segment>,
}

impl Segments {
    /// Split `wrapped` around `spans`.
    ///
    /// Spans must be ascending and non-overlapping, as produced by
    /// [`parse_markup`](crate::parse_markup) and
    /// [`remap_spans`](crate::remap_spans).
    #[must_use]
    pub fn build(wrapped: &str, spans: &[EffectSpan]) -> Self {
        let mut items = Vec::with_capacity(spans.len() * 2 + 1);
        let mut cursor = 0;

        for (i, span) in spans.iter().enumerate() {
            let gap = span.start.saturating_sub(cursor);
            items.push(Segment::new(
                SegmentKind::Plain,
                slice_chars(wrapped, cursor, gap),
            ));
            items.push(Segment::new(SegmentKind::Effect(i), span.text_in(wrapped)));
            cursor = cursor.max(span.end());
        }

        let total = wrapped.chars().count();
        items.push(Segment::new(
            SegmentKind::Plain,
            slice_chars(wrapped, cursor, total.saturating_sub(cursor)),
        ));

        Self { items }
    }

    /// All segments in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.items.iter()
    }

    /// The plain segments (`N + 1` of them).
    pub fn plain(&self) -> impl Iterator<Item = &Segment> {
        self.items.iter().filter(|s| s.kind == SegmentKind::Plain)
    }

    /// The effect segments (`N` of them).
    pub fn effects(&self) -> impl Iterator<Item = &Segment> {
        self.items.iter().filter(|s| s.kind != SegmentKind::Plain)
    }

    /// Total number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: there is at least one plain segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reassemble the wrapped text.
    #[must_use]
    pub fn join(&self) -> String {
        self.items.iter().map(Segment::text).collect()
    }
}

impl Default for Segments {
    fn default() -> Self {
        Self::build("", &[])
    }
}
