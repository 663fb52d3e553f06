#![forbid(unsafe_code)]

//! The text box document.
//!
//! A [`Document`] is either [`LayoutState::Dirty`] or
//! [`LayoutState::LaidOut`]. Changing the text or anything that moves the
//! wrap boundary makes it dirty; only [`Document::layout`] lays it out again.
//! Drawing a dirty document is reported as [`DocumentError::StaleLayout`]
//! instead of painting stale lines.
//!
//! # Example
//! ```
//! use fxtext::{Document, TextBoxConfig};
//! use fxtext_core::{CellMetrics, Vec2};
//!
//! let mut doc = Document::new(CellMetrics::default(), "ab <fx 1,0,0,0>cd</fx> ef")
//!     .with_config(TextBoxConfig::new(Vec2::new(8.0, 4.0)));
//! assert!(doc.draw_commands().is_err());
//!
//! doc.layout();
//! assert_eq!(doc.wrapped_text().ok(), Some("ab cd ef"));
//! assert_eq!(doc.line_count(), 1);
//!
//! doc.update(1.0 / 60.0);
//! let cmds = doc.draw_commands().unwrap();
//! // "ab " + one command per effect char + " ef"
//! assert_eq!(cmds.len(), 4);
//! ```

use std::fmt;
use std::sync::Arc;

use fxtext_core::{PackedRgba, TextMetrics, Vec2};
use fxtext_fx::{AnimationClock, EffectProfiles, SeedSource, SpanAnimation};
use fxtext_text::{
    EffectSpan, Segments, parse_markup, remap_spans, substitute_unrenderable, wrap_text,
};

use crate::config::TextBoxConfig;
use crate::error::{DocumentError, Result};
use crate::render::{DrawCommand, FrameContext, GlyphSink, draw_frame};
use crate::scroll::{ScrollState, count_lines};

/// Output of one layout pass.
#[derive(Debug, Clone)]
pub struct Layout {
    plain: String,
    wrapped: String,
    spans: Vec<EffectSpan>,
    insertions: Vec<usize>,
    segments: Segments,
    animations: Vec<SpanAnimation>,
    line_height: f32,
}

impl Layout {
    /// Tag-free text before wrapping.
    #[must_use]
    pub fn plain_text(&self) -> &str {
        &self.plain
    }

    /// Text with line breaks inserted.
    #[must_use]
    pub fn wrapped_text(&self) -> &str {
        &self.wrapped
    }

    /// Effect spans addressed in the wrapped text.
    #[must_use]
    pub fn spans(&self) -> &[EffectSpan] {
        &self.spans
    }

    /// Character positions in the wrapped text that wrapping added.
    #[must_use]
    pub fn insertions(&self) -> &[usize] {
        &self.insertions
    }

    #[must_use]
    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// Live animation state, one per span.
    #[must_use]
    pub fn animations(&self) -> &[SpanAnimation] {
        &self.animations
    }

    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Whether the document can be drawn.
#[derive(Debug, Clone, Default)]
pub enum LayoutState {
    /// Changed since the last layout.
    #[default]
    Dirty,
    LaidOut(Layout),
}

/// An animated, wrapped, pageable text box.
pub struct Document<M> {
    metrics: M,
    profiles: Arc<EffectProfiles>,
    seeds: Box<dyn SeedSource>,
    text: String,
    config: TextBoxConfig,
    clock: AnimationClock,
    scroll: ScrollState,
    state: LayoutState,
}

impl<M: fmt::Debug> fmt::Debug for Document<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("metrics", &self.metrics)
            .field("text", &self.text)
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("scroll", &self.scroll)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<M: TextMetrics> Document<M> {
    /// Dirty document with default configuration, the standard effect
    /// profiles and entropy-seeded shake.
    pub fn new(metrics: M, text: impl Into<String>) -> Self {
        Self {
            metrics,
            profiles: Arc::new(EffectProfiles::standard()),
            seeds: Box::new(fastrand::Rng::new()),
            text: text.into(),
            config: TextBoxConfig::default(),
            clock: AnimationClock::new(),
            scroll: ScrollState::default(),
            state: LayoutState::Dirty,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: TextBoxConfig) -> Self {
        self.scroll.set_allow_overflow(config.allow_overflow);
        self.config = config;
        self.invalidate();
        self
    }

    /// Use other effect presets. Takes effect at the next layout.
    #[must_use]
    pub fn with_profiles(mut self, profiles: Arc<EffectProfiles>) -> Self {
        self.profiles = profiles;
        self.invalidate();
        self
    }

    /// Draw shake seeds from `seeds` instead of entropy.
    #[must_use]
    pub fn with_seed_source(mut self, seeds: impl SeedSource + 'static) -> Self {
        self.seeds = Box::new(seeds);
        self
    }

    // --- Layout ----------------------------------------------------------

    /// Run the full pipeline and become drawable.
    ///
    /// Substitutes unrenderable glyphs, strips tags, wraps at the usable
    /// width, shifts spans over inserted characters, splits segments, counts
    /// lines and resets the scroll offset to 0. Span animations start fresh.
    pub fn layout(&mut self) {
        let usable_width = self.config.usable_width();
        let line_height = self.metrics.measure_height(" ");
        if usable_width <= 0.0 {
            tracing::warn!(
                usable_width,
                "non-positive usable width; every word will be sliced to single characters"
            );
        }
        if line_height <= 0.0 {
            tracing::warn!(line_height, "non-positive line height; no line fits the box");
        }

        let filtered = substitute_unrenderable(&self.text, &self.metrics);
        let parsed = parse_markup(&filtered);
        let wrapped = wrap_text(&parsed.plain, usable_width, &self.metrics);
        let spans = remap_spans(&parsed.spans, &wrapped.insertions);
        let segments = Segments::build(&wrapped.text, &spans);

        let animations = spans
            .iter()
            .map(|span| SpanAnimation::new(self.profiles.resolve(span.params), self.seeds.as_mut()))
            .collect();

        let line_count = count_lines(&segments, &self.metrics);
        let line_capacity = if line_height > 0.0 {
            (self.config.visible_height() / line_height).floor().max(0.0) as usize
        } else {
            0
        };
        self.scroll = ScrollState::new(line_count, line_capacity, self.config.allow_overflow);

        tracing::debug!(
            line_count,
            line_capacity,
            spans = spans.len(),
            insertions = wrapped.insertions.len(),
            "laid out document"
        );

        self.state = LayoutState::LaidOut(Layout {
            plain: parsed.plain,
            wrapped: wrapped.text,
            spans,
            insertions: wrapped.insertions,
            segments,
            animations,
            line_height,
        });
    }

    fn invalidate(&mut self) {
        self.state = LayoutState::Dirty;
    }

    #[must_use]
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        matches!(self.state, LayoutState::LaidOut(_))
    }

    /// The current layout, or [`DocumentError::StaleLayout`] while dirty.
    pub fn laid_out(&self) -> Result<&Layout> {
        match &self.state {
            LayoutState::LaidOut(layout) => Ok(layout),
            LayoutState::Dirty => Err(DocumentError::StaleLayout),
        }
    }

    pub fn plain_text(&self) -> Result<&str> {
        self.laid_out().map(Layout::plain_text)
    }

    pub fn wrapped_text(&self) -> Result<&str> {
        self.laid_out().map(Layout::wrapped_text)
    }

    pub fn spans(&self) -> Result<&[EffectSpan]> {
        self.laid_out().map(Layout::spans)
    }

    pub fn insertions(&self) -> Result<&[usize]> {
        self.laid_out().map(Layout::insertions)
    }

    pub fn segments(&self) -> Result<&Segments> {
        self.laid_out().map(Layout::segments)
    }

    /// Visual lines as of the last layout.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.scroll.line_count()
    }

    /// Lines that fit the box as of the last layout.
    #[must_use]
    pub fn line_capacity(&self) -> usize {
        self.scroll.line_capacity()
    }

    // --- Animation and drawing -------------------------------------------

    /// Advance the clock and every span's time-driven state by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if let LayoutState::LaidOut(layout) = &mut self.state {
            for animation in &mut layout.animations {
                animation.update(dt, self.seeds.as_mut());
            }
        }
        self.clock.tick(dt);
    }

    /// Paint the visible lines into `sink`.
    pub fn draw<S: GlyphSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        let LayoutState::LaidOut(layout) = &mut self.state else {
            tracing::debug!("draw requested on a dirty document");
            return Err(DocumentError::StaleLayout);
        };
        let ctx = FrameContext {
            config: &self.config,
            scroll: &self.scroll,
            clock: &self.clock,
            line_height: layout.line_height,
        };
        draw_frame(
            &ctx,
            &layout.segments,
            &mut layout.animations,
            &self.metrics,
            sink,
        );
        Ok(())
    }

    /// Paint the visible lines into a fresh command list.
    pub fn draw_commands(&mut self) -> Result<Vec<DrawCommand>> {
        let mut commands = Vec::new();
        self.draw(&mut commands)?;
        Ok(commands)
    }

    #[must_use]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    // --- Properties ------------------------------------------------------

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn config(&self) -> &TextBoxConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    #[must_use]
    pub fn profiles(&self) -> &Arc<EffectProfiles> {
        &self.profiles
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidate();
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.config.position = position;
        self.invalidate();
    }

    pub fn set_dimension(&mut self, dimension: Vec2) {
        self.config.dimension = dimension;
        self.invalidate();
    }

    /// Part of the box geometry, so it forces a re-layout like the other
    /// geometry setters even though wrapping never reads it.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.config.offset = offset;
        self.invalidate();
    }

    pub fn set_padding(&mut self, padding: Vec2) {
        self.config.padding = padding;
        self.invalidate();
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.config.scale = scale;
        self.invalidate();
    }

    /// Takes effect on the next draw.
    pub fn set_color(&mut self, color: PackedRgba) {
        self.config.color = color;
    }

    /// Takes effect on the next draw. [`PackedRgba::TRANSPARENT`] disables
    /// the shadow.
    pub fn set_shadow_color(&mut self, shadow_color: PackedRgba) {
        self.config.shadow_color = shadow_color;
    }

    /// Takes effect on the next draw.
    pub fn set_shadow_offset(&mut self, shadow_offset: Vec2) {
        self.config.shadow_offset = shadow_offset;
    }

    /// Toggle overflow. Resets the scroll offset to 0.
    pub fn set_allow_overflow(&mut self, allow: bool) {
        self.config.allow_overflow = allow;
        self.scroll.set_allow_overflow(allow);
    }

    // --- Scrolling -------------------------------------------------------

    #[must_use]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// First visible line.
    #[must_use]
    pub fn starting_line(&self) -> usize {
        self.scroll.offset()
    }

    pub fn set_starting_line(&mut self, line: usize) {
        self.scroll.set_offset(line);
    }

    pub fn next_line(&mut self) {
        self.scroll.next_line();
    }

    pub fn previous_line(&mut self) {
        self.scroll.previous_line();
    }

    pub fn next_page(&mut self) {
        self.scroll.next_page();
    }

    pub fn previous_page(&mut self) {
        self.scroll.previous_page();
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.scroll.page()
    }

    pub fn set_page(&mut self, page: usize) {
        self.scroll.set_page(page);
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.scroll.page_count()
    }
}
