#![forbid(unsafe_code)]

//! Turning a laid-out document into glyph draws.
//!
//! The walk visits the segment interleaving in order. Plain lines are drawn
//! as whole strings in the base colour. Effect lines are drawn one character
//! at a time with the span's [`CharTransform`]. When the document has a
//! shadow, each draw is preceded by a [`DrawLayer::Shadow`] draw of the same
//! glyphs at `position + shadow_offset`.

use fxtext_core::{PackedRgba, TextMetrics, Vec2};
use fxtext_fx::{AnimationClock, CharTransform, SpanAnimation};
use fxtext_text::{SegmentKind, Segments};

use crate::config::TextBoxConfig;
use crate::scroll::{LineCursor, LinePiece, ScrollState};

/// Which pass a draw belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawLayer {
    Shadow,
    Foreground,
}

/// One glyph run to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub text: String,
    /// Top-left of the run before rotation.
    pub position: Vec2,
    pub color: PackedRgba,
    /// Radians about `origin`.
    pub rotation: f32,
    /// Pivot relative to the run's top-left corner.
    pub origin: Vec2,
    pub layer: DrawLayer,
}

/// Receives draw commands in paint order.
pub trait GlyphSink {
    fn draw(&mut self, cmd: &DrawCommand);
}

impl GlyphSink for Vec<DrawCommand> {
    fn draw(&mut self, cmd: &DrawCommand) {
        self.push(cmd.clone());
    }
}

impl<S: GlyphSink + ?Sized> GlyphSink for &mut S {
    fn draw(&mut self, cmd: &DrawCommand) {
        (**self).draw(cmd);
    }
}

/// Everything a frame needs besides the segments and animations.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameContext<'a> {
    pub config: &'a TextBoxConfig,
    pub scroll: &'a ScrollState,
    pub clock: &'a AnimationClock,
    pub line_height: f32,
}

impl FrameContext<'_> {
    fn line_y(&self, line: usize) -> f32 {
        let origin = self.config.text_origin();
        origin.y + self.line_height * (line as f32 - self.scroll.offset() as f32)
    }

    fn emit<S: GlyphSink + ?Sized>(
        &self,
        sink: &mut S,
        text: String,
        position: Vec2,
        transform: &CharTransform,
    ) {
        let mut cmd = DrawCommand {
            text,
            position: position + self.config.shadow_offset,
            color: transform.shadow_color,
            rotation: transform.rotation,
            origin: transform.origin,
            layer: DrawLayer::Shadow,
        };
        if self.config.has_shadow() {
            sink.draw(&cmd);
        }
        cmd.position = position;
        cmd.color = transform.color;
        cmd.layer = DrawLayer::Foreground;
        sink.draw(&cmd);
    }
}

/// Draw one frame.
pub(crate) fn draw_frame<M, S>(
    ctx: &FrameContext<'_>,
    segments: &Segments,
    animations: &mut [SpanAnimation],
    metrics: &M,
    sink: &mut S,
) where
    M: TextMetrics + ?Sized,
    S: GlyphSink + ?Sized,
{
    let mut cursor = LineCursor::new(ctx.config.text_origin().x);

    for segment in segments.iter() {
        match segment.kind {
            SegmentKind::Plain => cursor.walk(&segment.lines, metrics, |piece| {
                if let Some(y) = visible_y(ctx, &piece) {
                    let plain = CharTransform::identity(ctx.config.color, ctx.config.shadow_color);
                    ctx.emit(sink, piece.text.to_string(), Vec2::new(piece.x, y), &plain);
                }
            }),
            SegmentKind::Effect(span) => {
                let Some(animation) = animations.get_mut(span) else {
                    continue;
                };
                animation.begin_pass();
                cursor.walk(&segment.lines, metrics, |piece| {
                    if let Some(y) = visible_y(ctx, &piece) {
                        draw_effect_line(ctx, animation, piece, y, metrics, sink);
                    }
                });
            }
        }
    }
}

fn visible_y(ctx: &FrameContext<'_>, piece: &LinePiece<'_>) -> Option<f32> {
    (!piece.text.is_empty() && ctx.scroll.is_line_visible(piece.line)).then(|| ctx.line_y(piece.line))
}

fn draw_effect_line<M, S>(
    ctx: &FrameContext<'_>,
    animation: &mut SpanAnimation,
    piece: LinePiece<'_>,
    y: f32,
    metrics: &M,
    sink: &mut S,
) where
    M: TextMetrics + ?Sized,
    S: GlyphSink + ?Sized,
{
    let mut pen = piece.x;
    let mut buf = [0u8; 4];

    for (i, ch) in piece.text.chars().enumerate() {
        let glyph: &str = ch.encode_utf8(&mut buf);
        let width = metrics.measure_width(glyph);
        let t = animation.transform(
            ctx.clock,
            i,
            width,
            ctx.config.color,
            ctx.config.shadow_color,
        );
        ctx.emit(sink, glyph.to_string(), Vec2::new(pen, y) + t.offset, &t);
        pen += width;
    }
}

/// Character grid sink for fixed-cell output.
///
/// Foreground draws are snapped to cells of `cell` size; shadows, rotation
/// and colour are ignored. Glyphs landing outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
    cell_width: u32,
    cell_height: u32,
}

impl TextGrid {
    /// Blank grid of `width` x `height` cells, each `cell_width` x
    /// `cell_height` units.
    pub fn new(width: usize, height: usize, cell_width: u32, cell_height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Rows with trailing blanks trimmed.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    fn put(&mut self, col: i64, row: i64, ch: char) {
        let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
            return;
        };
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = ch;
        }
    }
}

impl GlyphSink for TextGrid {
    fn draw(&mut self, cmd: &DrawCommand) {
        if cmd.layer != DrawLayer::Foreground {
            return;
        }
        let col = (cmd.position.x / self.cell_width as f32).round() as i64;
        let row = (cmd.position.y / self.cell_height as f32).round() as i64;
        for (i, ch) in cmd.text.chars().enumerate() {
            self.put(col + i as i64, row, ch);
        }
    }
}
