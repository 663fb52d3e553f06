#![forbid(unsafe_code)]

//! Font measurement capability.
//!
//! Layout never talks to a font directly. It asks a [`TextMetrics`]
//! implementation how wide a run of text is, how tall a line is and whether
//! a character can be drawn at all. Hosts plug in their real font; tests and
//! terminal renderers use [`CellMetrics`].

use rustc_hash::FxHashSet;
use unicode_width::UnicodeWidthStr;

/// Text measurement provided by the host's font.
///
/// Implementations must be pure with respect to the core: measuring never
/// changes layout or animation state.
pub trait TextMetrics {
    /// Rendered width of a single line of text.
    fn measure_width(&self, text: &str) -> f32;

    /// Rendered height of `text`. Layout calls this with `" "` to obtain the
    /// line height.
    fn measure_height(&self, text: &str) -> f32;

    /// Whether the font has a glyph for `ch`.
    fn is_renderable(&self, ch: char) -> bool;
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn measure_width(&self, text: &str) -> f32 {
        (**self).measure_width(text)
    }

    fn measure_height(&self, text: &str) -> f32 {
        (**self).measure_height(text)
    }

    fn is_renderable(&self, ch: char) -> bool {
        (**self).is_renderable(ch)
    }
}

/// Width of the widest line in `text` (lines split on `'\n'`).
///
/// This is how multi-line runs are measured during wrapping.
pub fn widest_line<M: TextMetrics + ?Sized>(metrics: &M, text: &str) -> f32 {
    text.split('\n')
        .map(|line| metrics.measure_width(line))
        .fold(0.0, f32::max)
}

/// Fixed-cell metrics: every terminal cell has the same pixel size.
///
/// Width is the Unicode display width of the text times the cell width, so
/// CJK and emoji take two cells. Every non-control character is renderable
/// unless an explicit character set is supplied with [`CellMetrics::charset`].
#[derive(Debug, Clone)]
pub struct CellMetrics {
    cell_width: f32,
    cell_height: f32,
    charset: Option<FxHashSet<char>>,
}

impl CellMetrics {
    /// Create metrics for cells of the given pixel size.
    #[must_use]
    pub fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
            charset: None,
        }
    }

    /// Restrict the renderable set to `chars`.
    #[must_use]
    pub fn charset(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.charset = Some(chars.into_iter().collect());
        self
    }

    /// Pixel width of one cell.
    #[must_use]
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Pixel height of one cell.
    #[must_use]
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl TextMetrics for CellMetrics {
    fn measure_width(&self, text: &str) -> f32 {
        text.width() as f32 * self.cell_width
    }

    fn measure_height(&self, _text: &str) -> f32 {
        self.cell_height
    }

    fn is_renderable(&self, ch: char) -> bool {
        match &self.charset {
            Some(set) => set.contains(&ch),
            None => !ch.is_control(),
        }
    }
}
