#![forbid(unsafe_code)]

//! Markup and layout for fxtext.
//!
//! The pipeline in this crate turns raw markup into wrapped text whose effect
//! spans still point at the right characters:
//!
//! 1. [`substitute_unrenderable`] swaps glyphs the font lacks for `?`
//! 2. [`parse_markup`] strips `<fx C,W,S,H>...</fx>` tags into [`EffectSpan`]s
//! 3. [`wrap_text`] inserts line breaks and reports inserted characters
//! 4. [`remap_spans`] shifts spans over those insertions
//! 5. [`Segments::build`] splits the result into alternating plain/effect runs
//!
//! All offsets are **character** offsets (Unicode scalar values), never bytes.
//!
//! # Example
//! ```
//! use fxtext_core::CellMetrics;
//! use fxtext_text::{Segments, parse_markup, remap_spans, wrap_text};
//!
//! let parsed = parse_markup("ab <fx 1,0,0,0>cd</fx> ef");
//! assert_eq!(parsed.plain, "ab cd ef");
//!
//! let wrapped = wrap_text(&parsed.plain, 8.0, &CellMetrics::default());
//! assert!(wrapped.insertions.is_empty());
//!
//! let spans = remap_spans(&parsed.spans, &wrapped.insertions);
//! assert_eq!(spans[0].text_in(&wrapped.text), "cd");
//!
//! let segments = Segments::build(&wrapped.text, &spans);
//! assert_eq!(segments.join(), "ab cd ef");
//! ```

pub mod markup;
pub mod remap;
pub mod segment;
pub mod wrap;

pub use markup::{
    EffectSpan, FxParams, PLACEHOLDER, ParsedMarkup, parse_markup, substitute_unrenderable,
};
pub use remap::remap_spans;
pub use segment::{Segment, SegmentKind, Segments, slice_chars};
pub use wrap::{WrapOutput, wrap_text};
