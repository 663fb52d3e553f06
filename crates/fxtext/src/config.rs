#![forbid(unsafe_code)]

//! Text box configuration.

use fxtext_core::{PackedRgba, Vec2};

/// Geometry and colours of a text box.
///
/// `scale` stretches the box (width and height) but not the font or the
/// padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBoxConfig {
    /// Top-left corner of the box.
    pub position: Vec2,
    /// Unscaled box size.
    pub dimension: Vec2,
    /// Translation applied to everything drawn.
    pub offset: Vec2,
    /// Inner margin on each side.
    pub padding: Vec2,
    pub scale: Vec2,
    /// Colour of plain text and of effect text without a palette.
    pub color: PackedRgba,
    /// [`PackedRgba::TRANSPARENT`] disables the shadow.
    pub shadow_color: PackedRgba,
    pub shadow_offset: Vec2,
    /// Draw every line and disable scrolling.
    pub allow_overflow: bool,
}

impl Default for TextBoxConfig {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            dimension: Vec2::ZERO,
            offset: Vec2::ZERO,
            padding: Vec2::ZERO,
            scale: Vec2::ONE,
            color: PackedRgba::WHITE,
            shadow_color: PackedRgba::TRANSPARENT,
            shadow_offset: Vec2::new(-4.0, 4.0),
            allow_overflow: false,
        }
    }
}

impl TextBoxConfig {
    /// Default configuration for a box of `dimension`.
    #[must_use]
    pub fn new(dimension: Vec2) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn dimension(mut self, dimension: Vec2) -> Self {
        self.dimension = dimension;
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Vec2) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn color(mut self, color: PackedRgba) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn shadow_color(mut self, shadow_color: PackedRgba) -> Self {
        self.shadow_color = shadow_color;
        self
    }

    #[must_use]
    pub fn shadow_offset(mut self, shadow_offset: Vec2) -> Self {
        self.shadow_offset = shadow_offset;
        self
    }

    #[must_use]
    pub fn allow_overflow(mut self, allow: bool) -> Self {
        self.allow_overflow = allow;
        self
    }

    /// Wrap boundary: scaled width minus padding on both sides.
    #[must_use]
    pub fn usable_width(&self) -> f32 {
        self.dimension.x * self.scale.x - 2.0 * self.padding.x
    }

    /// Scaled height available to lines.
    #[must_use]
    pub fn visible_height(&self) -> f32 {
        self.dimension.y * self.scale.y
    }

    /// Where the first line starts.
    #[must_use]
    pub fn text_origin(&self) -> Vec2 {
        self.position + self.padding + self.offset
    }

    /// Whether a shadow is drawn at all.
    #[must_use]
    pub fn has_shadow(&self) -> bool {
        self.shadow_color != PackedRgba::TRANSPARENT
    }
}
