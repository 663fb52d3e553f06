//! End-to-end layout behaviour: markup in, wrapped text and spans out.

use fxtext::prelude::*;
use fxtext::text::FxParams;
use proptest::prelude::*;

/// Test font with a width per character: `a`/`b` 25, `c`..`f` 27.5, space 10,
/// everything else 20. Lines are 30 high.
struct TableFont;

impl TextMetrics for TableFont {
    fn measure_width(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| match c {
                'a' | 'b' => 25.0,
                'c'..='f' => 27.5,
                ' ' => 10.0,
                _ => 20.0,
            })
            .sum()
    }

    fn measure_height(&self, _text: &str) -> f32 {
        30.0
    }

    fn is_renderable(&self, _ch: char) -> bool {
        true
    }
}

fn laid_out(text: &str, width: f32, height: f32) -> Document<CellMetrics> {
    let mut doc = Document::new(CellMetrics::default(), text)
        .with_config(TextBoxConfig::new(Vec2::new(width, height)))
        .with_seed_source(FixedSeed(0));
    doc.layout();
    doc
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn single_span_on_one_line() {
    let doc = laid_out("ab <fx 1,0,0,0>cd</fx> ef", 8.0, 1.0);

    assert_eq!(doc.plain_text(), Ok("ab cd ef"));
    assert_eq!(doc.wrapped_text(), Ok("ab cd ef"));
    assert_eq!(doc.insertions(), Ok(&[][..]));
    assert_eq!(doc.line_count(), 1);

    let spans = doc.spans().unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text_in("ab cd ef"), "cd");
    assert_eq!(spans[0].params, FxParams::new(1, 0, 0, 0));

    let layout = doc.laid_out().unwrap();
    let anim = &layout.animations()[0];
    assert!(anim.rotator().is_some());
    assert!(anim.wave().is_none());
    assert!(anim.shake().is_none());
    assert!(anim.hang().is_none());
}

#[test]
fn long_word_is_sliced_to_fit_measured_width() {
    let mut doc = Document::new(TableFont, "ab cdef")
        .with_config(TextBoxConfig::new(Vec2::new(100.0, 90.0)));
    doc.layout();

    assert_eq!(doc.wrapped_text(), Ok("ab\ncde\nf"));
    assert_eq!(doc.insertions(), Ok(&[6][..]));
    for line in doc.wrapped_text().unwrap().split('\n') {
        assert!(TableFont.measure_width(line) <= 100.0, "{line:?} too wide");
    }
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line_capacity(), 3);
}

#[test]
fn padding_and_scale_move_the_wrap_boundary() {
    let mut doc = Document::new(CellMetrics::default(), "aaa bbb ccc").with_config(
        TextBoxConfig::new(Vec2::new(5.0, 3.0))
            .scale(Vec2::new(2.0, 1.0))
            .padding(Vec2::new(1.0, 0.0)),
    );
    doc.layout();
    // usable = 5 * 2 - 2 * 1 = 8
    assert_eq!(doc.wrapped_text(), Ok("aaa bbb\nccc"));
}

#[test]
fn span_across_a_slice_break() {
    let doc = laid_out("xx <fx 0,1,0,0>abcdefgh</fx> yy", 3.0, 5.0);
    assert_eq!(doc.wrapped_text(), Ok("xx\nabc\ndef\ngh\nyy"));
    let spans = doc.spans().unwrap();
    assert_eq!(spans[0].text_in("xx\nabc\ndef\ngh\nyy"), "abc\ndef\ngh");
    assert_eq!(doc.line_count(), 5);
}

#[test]
fn multi_line_markup_counts_explicit_breaks() {
    let doc = laid_out("one\n<fx 1,0,0,0>two\nthree</fx>\nfour", 20.0, 2.0);
    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.page_count(), 2);
}

#[test]
fn malformed_tags_fall_back_to_no_effect() {
    let doc = laid_out("<fx 1,2>ab</fx> <fx 9,9,9,9>cd</fx>", 20.0, 1.0);
    let layout = doc.laid_out().unwrap();
    assert_eq!(layout.spans()[0].params, FxParams::NONE);
    assert!(layout.animations().iter().all(|a| a.is_static()));
}

#[test]
fn custom_profiles_are_used() {
    use fxtext::fx::{ColorProfile, Palette};
    use std::sync::Arc;

    let profiles = EffectProfiles::new().with_color(
        42,
        ColorProfile::new(Palette::custom("mono", [PackedRgba::RED]), 1.0),
    );
    let mut doc = Document::new(CellMetrics::default(), "<fx 42,0,0,0>x</fx>")
        .with_config(TextBoxConfig::new(Vec2::new(5.0, 1.0)))
        .with_profiles(Arc::new(profiles));
    doc.layout();
    let cmds = doc.draw_commands().unwrap();
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].color, PackedRgba::RED);
}

// =============================================================================
// Properties
// =============================================================================

/// Removes inserted characters and turns breaks back into spaces.
fn restore(wrapped: &str, insertions: &[usize], start: usize, end: usize) -> String {
    wrapped
        .chars()
        .enumerate()
        .filter(|(i, _)| *i >= start && *i < end && !insertions.contains(i))
        .map(|(_, c)| if c == '\n' { ' ' } else { c })
        .collect()
}

fn words() -> impl Strategy<Value = String> {
    "[a-z]{1,9}( [a-z]{1,9}){0,3}"
}

/// Runs of letters and spaces, including empty, blank and double-spaced text.
fn spaced() -> impl Strategy<Value = String> {
    "[a-z ]{0,9}"
}

fn tagged() -> impl Strategy<Value = (String, Vec<String>)> {
    tagged_from(words)
}

fn tagged_spaced() -> impl Strategy<Value = (String, Vec<String>)> {
    tagged_from(spaced)
}

fn tagged_from<S: Strategy<Value = String>>(
    text: fn() -> S,
) -> impl Strategy<Value = (String, Vec<String>)> {
    proptest::collection::vec((text(), text()), 1..4).prop_map(|pieces| {
        let mut markup = String::new();
        let mut inners = Vec::new();
        for (before, inner) in pieces {
            markup.push_str(&format!("{before} <fx 1,1,0,0>{inner}</fx> "));
            inners.push(inner);
        }
        (markup, inners)
    })
}

proptest! {
    #[test]
    fn spans_round_trip_through_wrapping((markup, inners) in tagged_spaced(), width in 1usize..16) {
        let doc = laid_out(&markup, width as f32, 4.0);
        let wrapped = doc.wrapped_text().unwrap();
        let insertions = doc.insertions().unwrap();
        let spans = doc.spans().unwrap();
        prop_assert_eq!(spans.len(), inners.len());
        for (span, inner) in spans.iter().zip(&inners) {
            prop_assert_eq!(&restore(wrapped, insertions, span.start, span.end()), inner);
        }
    }

    #[test]
    fn spans_stay_ordered_and_disjoint((markup, _) in tagged_spaced(), width in 1usize..16) {
        let doc = laid_out(&markup, width as f32, 4.0);
        let spans = doc.spans().unwrap();
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start, "{:?}", pair);
        }
    }

    #[test]
    fn segments_rebuild_wrapped_text((markup, _) in tagged_spaced(), width in 1usize..16) {
        let doc = laid_out(&markup, width as f32, 4.0);
        let segments = doc.segments().unwrap();
        prop_assert_eq!(segments.join(), doc.wrapped_text().unwrap());
    }

    #[test]
    fn every_line_fits((markup, _) in tagged(), width in 1usize..16) {
        let doc = laid_out(&markup, width as f32, 4.0);
        for line in doc.wrapped_text().unwrap().split('\n') {
            prop_assert!(line.chars().count() <= width, "{:?} wider than {}", line, width);
        }
    }
}
