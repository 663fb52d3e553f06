#![forbid(unsafe_code)]

//! Greedy word wrapping against measured widths.
//!
//! Words are separated by single ASCII spaces, so a run of `n` spaces yields
//! `n - 1` empty words and the original spacing survives the round trip.
//! Every separator either stays a space or becomes the `'\n'` that ends a
//! line, which keeps the output the same length as the input except for two
//! kinds of **inserted** characters:
//!
//! - the line break placed between two slices of a word that was too wide
//!   for a line on its own
//! - the space that stands in for an empty word landing at a line break
//!
//! Their positions in the output are reported in [`WrapOutput::insertions`]
//! so effect spans can be shifted over them.
//!
//! # Example
//! ```
//! use fxtext_core::CellMetrics;
//! use fxtext_text::wrap::wrap_text;
//!
//! let out = wrap_text("hello world foo", 11.0, &CellMetrics::default());
//! assert_eq!(out.text, "hello world\nfoo");
//! assert!(out.insertions.is_empty());
//!
//! let out = wrap_text("abcdefgh", 3.0, &CellMetrics::default());
//! assert_eq!(out.text, "abc\ndef\ngh");
//! assert_eq!(out.insertions, vec![3, 7]);
//! ```

use fxtext_core::{TextMetrics, widest_line};

/// Result of [`wrap_text`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrapOutput {
    /// Wrapped text with line breaks inserted.
    pub text: String,
    /// Character positions in `text` of every inserted character, ascending.
    pub insertions: Vec<usize>,
}

/// One unit handed to line assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Word {
    text: String,
    /// Second or later slice of an over-wide word.
    continuation: bool,
}

/// Wrap `text` so that no line is wider than `max_width`.
///
/// A word wider than `max_width` on its own is sliced into the longest
/// prefixes that fit, one character at a time. A non-positive `max_width`
/// therefore slices every word down to single characters; slicing never
/// produces an empty piece, so layout always makes progress.
pub fn wrap_text<M: TextMetrics + ?Sized>(text: &str, max_width: f32, metrics: &M) -> WrapOutput {
    let words = split_words(text, max_width, metrics);
    assemble_lines(&words, max_width, metrics)
}

/// Split on single spaces and slice over-wide words.
fn split_words<M: TextMetrics + ?Sized>(text: &str, max_width: f32, metrics: &M) -> Vec<Word> {
    let mut words = Vec::new();

    for raw in text.split(' ') {
        if widest_line(metrics, raw) > max_width {
            let parts = slice_long_word(raw, max_width, metrics);
            tracing::trace!(word = raw, parts = parts.len(), "sliced long word");
            for (i, part) in parts.into_iter().enumerate() {
                words.push(Word {
                    text: part,
                    continuation: i != 0,
                });
            }
        } else {
            words.push(Word {
                text: raw.to_string(),
                continuation: false,
            });
        }
    }

    words
}

/// Cut `word` into the longest prefixes that still fit `max_width`.
///
/// Grows the current piece one character at a time and backs off by one
/// when it no longer fits. A single character is always accepted.
fn slice_long_word<M: TextMetrics + ?Sized>(
    word: &str,
    max_width: f32,
    metrics: &M,
) -> Vec<String> {
    let mut parts = Vec::new();
    let mut piece = String::new();
    let mut piece_chars = 0;

    for ch in word.chars() {
        piece.push(ch);
        piece_chars += 1;

        if piece_chars > 1 && widest_line(metrics, &piece) > max_width {
            piece.pop();
            parts.push(std::mem::take(&mut piece));
            piece.push(ch);
            piece_chars = 1;
        }
    }

    parts.push(piece);
    parts
}

/// Greedily pack words onto lines.
fn assemble_lines<M: TextMetrics + ?Sized>(
    words: &[Word],
    max_width: f32,
    metrics: &M,
) -> WrapOutput {
    let mut output = String::new();
    let mut output_chars = 0;
    let mut line = String::new();
    let mut insertions = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let candidate = if i == 0 {
            word.text.clone()
        } else {
            format!("{line} {}", word.text)
        };

        // Slices of one word never share a line, even if a font would let
        // them: the break between them is what gets reported as inserted.
        if word.continuation || widest_line(metrics, &candidate) > max_width {
            if i > 0 {
                line.push('\n');
            }
            output_chars += line.chars().count();
            output.push_str(&line);

            if word.continuation {
                insertions.push(output_chars - 1);
            }

            line.clear();
            if word.text.is_empty() {
                line.push(' ');
                insertions.push(output_chars);
            } else {
                line.push_str(&word.text);
            }
        } else {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&word.text);
        }
    }

    output.push_str(&line);
    WrapOutput {
        text: output,
        insertions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxtext_core::CellMetrics;

    fn cells() -> CellMetrics {
        CellMetrics::default()
    }

    /// Proportional test font: 'W' is three units wide, everything else one.
    struct Proportional;

    impl TextMetrics for Proportional {
        fn measure_width(&self, text: &str) -> f32 {
            text.chars().map(|c| if c == 'W' { 3.0 } else { 1.0 }).sum()
        }

        fn measure_height(&self, _text: &str) -> f32 {
            1.0
        }

        fn is_renderable(&self, _ch: char) -> bool {
            true
        }
    }

    // ==========================================================================
    // Greedy packing
    // ==========================================================================

    #[test]
    fn fits_on_one_line() {
        let out = wrap_text("ab cd ef", 8.0, &cells());
        assert_eq!(out.text, "ab cd ef");
        assert!(out.insertions.is_empty());
    }

    #[test]
    fn breaks_replace_separators() {
        let out = wrap_text("hello world foo bar", 11.0, &cells());
        assert_eq!(out.text, "hello world\nfoo bar");
        assert!(out.insertions.is_empty());
    }

    #[test]
    fn empty_input() {
        let out = wrap_text("", 10.0, &cells());
        assert_eq!(out, WrapOutput::default());
    }

    #[test]
    fn existing_newlines_measure_per_line() {
        let out = wrap_text("abcd\nab cd", 5.0, &cells());
        assert_eq!(out.text, "abcd\nab cd");
    }

    #[test]
    fn consecutive_spaces_are_preserved() {
        let out = wrap_text("a   b", 10.0, &cells());
        assert_eq!(out.text, "a   b");
    }

    #[test]
    fn leading_spaces_are_preserved() {
        let out = wrap_text("  b", 10.0, &cells());
        assert_eq!(out.text, "  b");
        assert!(out.insertions.is_empty());
    }

    #[test]
    fn separator_space_before_break_is_kept_when_it_fits() {
        // "aaaa " fits in 5, so the empty word joins the first line.
        let out = wrap_text("aaaa  bbbb", 5.0, &cells());
        assert_eq!(out.text, "aaaa \nbbbb");
        assert!(out.insertions.is_empty());
    }

    #[test]
    fn empty_word_at_break_becomes_inserted_space() {
        let out = wrap_text("aaaa  bbbb", 4.0, &cells());
        assert_eq!(out.text, "aaaa\n \nbbbb");
        assert_eq!(out.insertions, vec![5]);
    }

    // ==========================================================================
    // Long-word slicing
    // ==========================================================================

    #[test]
    fn long_word_is_sliced_with_recorded_breaks() {
        let out = wrap_text("abcdefgh", 3.0, &cells());
        assert_eq!(out.text, "abc\ndef\ngh");
        assert_eq!(out.insertions, vec![3, 7]);
    }

    #[test]
    fn long_word_after_short_word() {
        let out = wrap_text("ab cdefgh", 4.0, &cells());
        // "ab" then slices "cdef", "gh"
        assert_eq!(out.text, "ab\ncdef\ngh");
        assert_eq!(out.insertions, vec![7]);
    }

    #[test]
    fn slicing_follows_measured_width() {
        // 'W' = 3 units: "aW" = 4 fits in 4, "aWb" = 5 does not.
        let out = wrap_text("aWbW", 4.0, &Proportional);
        assert_eq!(out.text, "aW\nbW");
        assert_eq!(out.insertions, vec![2]);
    }

    #[test]
    fn non_positive_width_slices_to_single_chars() {
        let out = wrap_text("abc de", 0.0, &cells());
        assert_eq!(out.text, "a\nb\nc\nd\ne");
        assert_eq!(out.insertions, vec![1, 3, 7]);

        let out = wrap_text("xy", -10.0, &cells());
        assert_eq!(out.text, "x\ny");
    }

    #[test]
    fn glyph_wider_than_line_still_progresses() {
        let out = wrap_text("WWW", 2.0, &Proportional);
        assert_eq!(out.text, "W\nW\nW");
        assert_eq!(out.insertions, vec![1, 3]);
    }

    #[test]
    fn slice_long_word_never_yields_empty_pieces() {
        let parts = slice_long_word("abcde", 0.0, &cells());
        assert_eq!(parts, vec!["a", "b", "c", "d", "e"]);
    }

    // ==========================================================================
    // Output length bookkeeping
    // ==========================================================================

    #[test]
    fn output_len_is_input_len_plus_insertions() {
        for (text, width) in [
            ("the quick  brown fox jumps", 6.0),
            ("supercalifragilistic is long", 5.0),
            ("a    b", 1.0),
        ] {
            let out = wrap_text(text, width, &cells());
            assert_eq!(
                out.text.chars().count(),
                text.chars().count() + out.insertions.len(),
                "{text:?} at width {width}"
            );
        }
    }
}
