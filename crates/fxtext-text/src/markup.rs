//! Effect-tag markup parsing.
//!
//! # Syntax
//!
//! ```text
//! <fx C,W,S,H>inner text</fx>
//! ```
//!
//! `C`, `W`, `S` and `H` select the colour-palette, wave, shake and hang
//! profiles (`0` = none). The inner text may span lines. Matching is
//! non-greedy and tags do not nest: an `<fx ...>` inside another tag's inner
//! text is kept as literal text and its stray `</fx>` stays in the output.
//!
//! Markup errors never fail parsing. A parameter list that does not have
//! exactly four comma-separated entries disables every effect, and an entry
//! that is not a valid integer disables just that effect.
//!
//! # Example
//! ```
//! use fxtext_text::markup::{FxParams, parse_markup};
//!
//! let parsed = parse_markup("Hello <fx 2,0,0,1>good</fx> friend");
//! assert_eq!(parsed.plain, "Hello good friend");
//! assert_eq!(parsed.spans[0].start, 6);
//! assert_eq!(parsed.spans[0].len, 4);
//! assert_eq!(parsed.spans[0].params, FxParams::new(2, 0, 0, 1));
//! ```

use fxtext_core::TextMetrics;
use regex::Regex;
use std::sync::OnceLock;

/// Glyph substituted for characters the font cannot render.
pub const PLACEHOLDER: char = '?';

/// Profile ids attached to one tagged span.
///
/// `0` always means the effect is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FxParams {
    /// Colour-palette profile.
    pub color: u32,
    /// Wave profile.
    pub wave: u32,
    /// Shake profile.
    pub shake: u32,
    /// Hang profile.
    pub hang: u32,
}

impl FxParams {
    /// No effects at all.
    pub const NONE: Self = Self::new(0, 0, 0, 0);

    /// Create params from the four profile ids.
    #[must_use]
    pub const fn new(color: u32, wave: u32, shake: u32, hang: u32) -> Self {
        Self {
            color,
            wave,
            shake,
            hang,
        }
    }

    /// Parse a tag parameter list such as `"1,0,2,0"`.
    ///
    /// Anything other than exactly four entries yields [`FxParams::NONE`];
    /// individual entries that fail to parse become `0`.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        let values: Vec<&str> = list.split(',').collect();
        if values.len() != 4 {
            return Self::NONE;
        }
        let id = |s: &str| s.parse::<u32>().unwrap_or(0);
        Self::new(id(values[0]), id(values[1]), id(values[2]), id(values[3]))
    }

    /// True when every profile id is `0`.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.color == 0 && self.wave == 0 && self.shake == 0 && self.hang == 0
    }
}

/// A tagged run of text, addressed in characters.
///
/// After parsing the offsets refer to the tag-stripped text; after
/// [`remap_spans`](crate::remap_spans) they refer to the wrapped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectSpan {
    /// First character of the span.
    pub start: usize,
    /// Number of characters in the span.
    pub len: usize,
    /// Profiles requested by the tag.
    pub params: FxParams,
}

impl EffectSpan {
    /// Create a span.
    #[must_use]
    pub const fn new(start: usize, len: usize, params: FxParams) -> Self {
        Self { start, len, params }
    }

    /// One past the last character.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// The span's characters within `text`.
    #[must_use]
    pub fn text_in<'a>(&self, text: &'a str) -> &'a str {
        crate::segment::slice_chars(text, self.start, self.len)
    }
}

/// Output of [`parse_markup`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedMarkup {
    /// Input with every tag wrapper removed.
    pub plain: String,
    /// Tagged spans in ascending, non-overlapping order.
    pub spans: Vec<EffectSpan>,
}

fn fx_tag_regex() -> &'static Regex {
    static FX_TAG_RE: OnceLock<Regex> = OnceLock::new();
    FX_TAG_RE.get_or_init(|| {
        Regex::new(r"(?s)<fx\s+([0-9,]+)>(.*?)</fx>").expect("fx tag regex should compile")
    })
}

/// Strip effect tags from `input`.
///
/// Every span's `start` is measured in the stripped text: each removed tag
/// wrapper shifts later offsets back by the number of tag characters it
/// contained.
#[must_use]
pub fn parse_markup(input: &str) -> ParsedMarkup {
    let mut plain = String::with_capacity(input.len());
    let mut spans = Vec::new();
    let mut last_byte = 0;
    let mut plain_chars = 0;

    for caps in fx_tag_regex().captures_iter(input) {
        let (Some(whole), Some(list), Some(inner)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        let before = &input[last_byte..whole.start()];
        plain.push_str(before);
        plain_chars += before.chars().count();

        let inner_text = inner.as_str();
        let inner_len = inner_text.chars().count();
        let params = FxParams::parse(list.as_str());
        tracing::trace!(
            start = plain_chars,
            len = inner_len,
            ?params,
            "parsed fx tag"
        );
        spans.push(EffectSpan::new(plain_chars, inner_len, params));

        plain.push_str(inner_text);
        plain_chars += inner_len;
        last_byte = whole.end();
    }

    plain.push_str(&input[last_byte..]);
    ParsedMarkup { plain, spans }
}

/// Replace every character the font cannot draw with [`PLACEHOLDER`].
///
/// Line breaks are always kept.
#[must_use]
pub fn substitute_unrenderable<M: TextMetrics + ?Sized>(text: &str, metrics: &M) -> String {
    text.chars()
        .map(|c| {
            if c == '\n' || metrics.is_renderable(c) {
                c
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}
