#![forbid(unsafe_code)]

//! Line and page accounting.
//!
//! [`LineCursor`] walks the plain/effect segment interleaving exactly the way
//! drawing does, so the line count it produces always agrees with what is
//! drawn. [`ScrollState`] turns that count and the box capacity into a
//! clamped first-visible-line offset.
//!
//! # Example
//! ```
//! use fxtext::ScrollState;
//!
//! let mut scroll = ScrollState::new(10, 3, false);
//! for _ in 0..5 {
//!     scroll.next_page();
//! }
//! assert_eq!(scroll.offset(), 7);
//! assert_eq!(scroll.page(), 2);
//! assert_eq!(scroll.page_count(), 3);
//! ```

use fxtext_core::TextMetrics;
use fxtext_text::Segments;

/// One line (or line fragment) of a segment, as visited by [`LineCursor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePiece<'a> {
    /// Visual line index across the whole document.
    pub line: usize,
    /// Index of this piece within its segment.
    pub index: usize,
    /// Horizontal start.
    pub x: f32,
    pub text: &'a str,
}

/// Pen position while walking segments.
///
/// A break inside a segment starts a new visual line at the left edge. The
/// last line of a segment leaves the pen after its measured width, so the
/// next segment continues on the same visual line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCursor {
    left: f32,
    x: f32,
    line: usize,
}

impl LineCursor {
    /// Cursor at line 0, with `left` as the left edge.
    pub fn new(left: f32) -> Self {
        Self {
            left,
            x: left,
            line: 0,
        }
    }

    /// Visit every line of one segment and move past it.
    pub fn walk<'a, M, F>(&mut self, lines: &'a [String], metrics: &M, mut visit: F)
    where
        M: TextMetrics + ?Sized,
        F: FnMut(LinePiece<'a>),
    {
        for (index, text) in lines.iter().enumerate() {
            if index > 0 {
                self.line += 1;
                self.x = self.left;
            }
            visit(LinePiece {
                line: self.line,
                index,
                x: self.x,
                text,
            });
        }

        if let Some(last) = lines.last() {
            if !last.is_empty() {
                self.x += metrics.measure_width(last);
            }
        }
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }
}

/// Number of visual lines in `segments`. Never zero.
pub fn count_lines<M: TextMetrics + ?Sized>(segments: &Segments, metrics: &M) -> usize {
    let mut cursor = LineCursor::new(0.0);
    for segment in segments.iter() {
        cursor.walk(&segment.lines, metrics, |_| {});
    }
    cursor.line() + 1
}

/// First visible line and paging over a fixed line count.
///
/// Out-of-range requests clamp silently. With overflow allowed every line is
/// visible and the offset stays pinned at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    line_count: usize,
    line_capacity: usize,
    offset: usize,
    allow_overflow: bool,
}

impl ScrollState {
    /// Offset 0 over `line_count` lines, `line_capacity` visible at once.
    pub fn new(line_count: usize, line_capacity: usize, allow_overflow: bool) -> Self {
        Self {
            line_count,
            line_capacity,
            offset: 0,
            allow_overflow,
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    #[must_use]
    pub fn line_capacity(&self) -> usize {
        self.line_capacity
    }

    /// Index of the first visible line.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn allow_overflow(&self) -> bool {
        self.allow_overflow
    }

    /// Toggle overflow mode. Always resets the offset to 0.
    pub fn set_allow_overflow(&mut self, allow: bool) {
        self.allow_overflow = allow;
        self.offset = 0;
    }

    /// Move to `offset`, clamped to `[0, line_count - 1]`.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = if self.allow_overflow {
            0
        } else {
            offset.min(self.last_line())
        };
    }

    pub fn next_line(&mut self) {
        self.set_offset(self.offset.saturating_add(1));
    }

    pub fn previous_line(&mut self) {
        self.set_offset(self.offset.saturating_sub(1));
    }

    /// Advance one page, clamped to `line_count - line_capacity`.
    ///
    /// After single-line steps past the last full page this pulls the
    /// offset back so the final page fills the box.
    pub fn next_page(&mut self) {
        self.set_offset(
            self.offset
                .saturating_add(self.line_capacity)
                .min(self.last_page_start()),
        );
    }

    pub fn previous_page(&mut self) {
        self.set_offset(self.offset.saturating_sub(self.line_capacity));
    }

    /// Current page: `offset / line_capacity`, or 0 without capacity.
    #[must_use]
    pub fn page(&self) -> usize {
        self.offset.checked_div(self.line_capacity).unwrap_or(0)
    }

    /// Jump to the start of page `page`.
    pub fn set_page(&mut self, page: usize) {
        self.set_offset(page.saturating_mul(self.line_capacity));
    }

    /// Whole pages: `line_count / line_capacity`, or 0 without capacity.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.line_count.checked_div(self.line_capacity).unwrap_or(0)
    }

    #[must_use]
    pub fn has_next_line(&self) -> bool {
        self.offset < self.last_line()
    }

    #[must_use]
    pub fn has_previous_line(&self) -> bool {
        self.offset > 0
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page() + 1 < self.page_count()
    }

    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.page() > 0
    }

    /// Whether line `line` is drawn.
    #[must_use]
    pub fn is_line_visible(&self, line: usize) -> bool {
        self.allow_overflow
            || (line >= self.offset && line < self.offset.saturating_add(self.line_capacity))
    }

    fn last_line(&self) -> usize {
        self.line_count.saturating_sub(1)
    }

    fn last_page_start(&self) -> usize {
        self.line_count.saturating_sub(self.line_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxtext_core::CellMetrics;
    use fxtext_text::{EffectSpan, FxParams};

    // ==========================================================================
    // Line counting
    // ==========================================================================

    #[test]
    fn single_line() {
        let segs = Segments::build("abc", &[]);
        assert_eq!(count_lines(&segs, &CellMetrics::default()), 1);
    }

    #[test]
    fn empty_text_is_one_line() {
        assert_eq!(count_lines(&Segments::default(), &CellMetrics::default()), 1);
    }

    #[test]
    fn breaks_in_every_segment_count() {
        let text = "a\nb c\nd\ne";
        let segs = Segments::build(text, &[EffectSpan::new(2, 4, FxParams::NONE)]);
        assert_eq!(count_lines(&segs, &CellMetrics::default()), 4);
    }

    #[test]
    fn cursor_carries_last_line_extent() {
        let m = CellMetrics::new(2.0, 1.0);
        let mut cursor = LineCursor::new(10.0);
        let mut seen = Vec::new();
        let first = vec!["ab".to_string()];
        cursor.walk(&first, &m, |p| seen.push((p.line, p.x)));
        let second = vec!["cd".to_string(), "e".to_string()];
        cursor.walk(&second, &m, |p| seen.push((p.line, p.x)));
        assert_eq!(seen, vec![(0, 10.0), (0, 14.0), (1, 10.0)]);
        assert_eq!(cursor.x(), 12.0);
        assert_eq!(cursor.line(), 1);
    }

    #[test]
    fn empty_last_line_leaves_pen_at_left_edge() {
        let m = CellMetrics::default();
        let mut cursor = LineCursor::new(0.0);
        cursor.walk(&["abc".to_string(), String::new()], &m, |_| {});
        assert_eq!(cursor.x(), 0.0);
    }

    // ==========================================================================
    // Scrolling
    // ==========================================================================

    #[test]
    fn next_page_converges_to_last_full_page() {
        let mut s = ScrollState::new(10, 3, false);
        let offsets: Vec<usize> = (0..5)
            .map(|_| {
                s.next_page();
                s.offset()
            })
            .collect();
        assert_eq!(offsets, vec![3, 6, 7, 7, 7]);
    }

    #[test]
    fn next_line_stops_at_last_line() {
        let mut s = ScrollState::new(4, 2, false);
        for _ in 0..10 {
            s.next_line();
        }
        assert_eq!(s.offset(), 3);
        assert!(!s.has_next_line());
        assert!(s.has_previous_line());
    }

    #[test]
    fn next_page_from_last_line_settles_on_last_full_page() {
        let mut s = ScrollState::new(10, 3, false);
        s.set_offset(9);
        for _ in 0..5 {
            s.next_page();
            assert_eq!(s.offset(), 7);
        }
    }

    #[test]
    fn previous_moves_clamp_at_zero() {
        let mut s = ScrollState::new(10, 3, false);
        s.set_offset(2);
        s.previous_page();
        assert_eq!(s.offset(), 0);
        s.previous_line();
        assert_eq!(s.offset(), 0);
        assert!(!s.has_previous_page());
    }

    #[test]
    fn set_offset_clamps() {
        let mut s = ScrollState::new(5, 2, false);
        s.set_offset(100);
        assert_eq!(s.offset(), 4);
    }

    #[test]
    fn pages() {
        let mut s = ScrollState::new(10, 3, false);
        assert_eq!(s.page_count(), 3);
        s.set_page(2);
        assert_eq!(s.offset(), 6);
        assert_eq!(s.page(), 2);
        assert!(!s.has_next_page());
        assert!(s.has_previous_page());
        s.set_page(1);
        assert!(s.has_next_page());
    }

    #[test]
    fn zero_capacity() {
        let mut s = ScrollState::new(5, 0, false);
        assert_eq!(s.page(), 0);
        assert_eq!(s.page_count(), 0);
        s.next_page();
        assert_eq!(s.offset(), 0);
        assert!(!s.is_line_visible(0));
    }

    #[test]
    fn overflow_pins_offset_and_shows_everything() {
        let mut s = ScrollState::new(10, 3, false);
        s.set_offset(5);
        s.set_allow_overflow(true);
        assert_eq!(s.offset(), 0);
        s.next_page();
        s.next_line();
        assert_eq!(s.offset(), 0);
        assert!(s.is_line_visible(9));
    }

    #[test]
    fn toggling_overflow_off_also_resets() {
        let mut s = ScrollState::new(10, 3, true);
        s.set_allow_overflow(false);
        s.set_offset(4);
        s.set_allow_overflow(false);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn visibility_window() {
        let mut s = ScrollState::new(10, 3, false);
        s.set_offset(3);
        let visible: Vec<usize> = (0..10).filter(|&l| s.is_line_visible(l)).collect();
        assert_eq!(visible, vec![3, 4, 5]);
    }
}
