#![forbid(unsafe_code)]

//! Colour palettes cycled by effect spans.

use std::sync::Arc;

use fxtext_core::PackedRgba;

/// An immutable, cheaply clonable ordered colour list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: Arc<str>,
    colors: Arc<[PackedRgba]>,
}

impl Palette {
    /// A palette with any colours, possibly none.
    pub fn custom(name: impl Into<Arc<str>>, colors: impl Into<Arc<[PackedRgba]>>) -> Self {
        Self {
            name: name.into(),
            colors: colors.into(),
        }
    }

    /// Red through violet, ten stops.
    pub fn rainbow() -> Self {
        Self::custom(
            "rainbow",
            [
                PackedRgba::rgb(255, 0, 0),
                PackedRgba::rgb(255, 135, 0),
                PackedRgba::rgb(255, 211, 0),
                PackedRgba::rgb(222, 255, 10),
                PackedRgba::rgb(161, 255, 10),
                PackedRgba::rgb(10, 255, 153),
                PackedRgba::rgb(10, 239, 255),
                PackedRgba::rgb(20, 125, 245),
                PackedRgba::rgb(88, 10, 255),
                PackedRgba::rgb(190, 10, 255),
            ],
        )
    }

    /// Pale pastels.
    pub fn soft_candy() -> Self {
        Self::custom(
            "soft-candy",
            [
                PackedRgba::rgb(245, 255, 198),
                PackedRgba::rgb(180, 225, 255),
                PackedRgba::rgb(171, 135, 255),
                PackedRgba::rgb(255, 172, 228),
                PackedRgba::rgb(193, 255, 155),
            ],
        )
    }

    /// Lilac to periwinkle.
    pub fn soft_purple() -> Self {
        Self::custom(
            "soft-purple",
            [
                PackedRgba::rgb(255, 214, 255),
                PackedRgba::rgb(231, 198, 255),
                PackedRgba::rgb(200, 182, 255),
                PackedRgba::rgb(184, 192, 255),
                PackedRgba::rgb(187, 208, 255),
            ],
        )
    }

    /// Muted warm-to-cool seven stop palette.
    pub fn retro() -> Self {
        Self::custom(
            "retro",
            [
                PackedRgba::rgb(249, 65, 68),
                PackedRgba::rgb(243, 114, 44),
                PackedRgba::rgb(248, 150, 30),
                PackedRgba::rgb(249, 199, 79),
                PackedRgba::rgb(144, 190, 109),
                PackedRgba::rgb(67, 170, 139),
                PackedRgba::rgb(87, 117, 144),
            ],
        )
    }

    /// Indigo through sea green to amber.
    pub fn elemental() -> Self {
        Self::custom(
            "elemental",
            [
                PackedRgba::rgb(84, 71, 140),
                PackedRgba::rgb(44, 105, 154),
                PackedRgba::rgb(4, 139, 168),
                PackedRgba::rgb(13, 179, 158),
                PackedRgba::rgb(22, 219, 147),
                PackedRgba::rgb(131, 227, 119),
                PackedRgba::rgb(185, 231, 105),
                PackedRgba::rgb(239, 234, 90),
                PackedRgba::rgb(241, 196, 83),
                PackedRgba::rgb(242, 158, 76),
            ],
        )
    }

    /// Single opaque white.
    pub fn white() -> Self {
        Self::custom("white", [PackedRgba::WHITE])
    }

    /// Nine invisible slots then red: one lit character marching along the span.
    pub fn ten_moving_red() -> Self {
        let mut colors = vec![PackedRgba::TRANSPARENT; 9];
        colors.push(PackedRgba::RED);
        Self::custom("ten-moving-red", colors)
    }

    /// Palette name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The colours in order.
    #[must_use]
    pub fn colors(&self) -> &[PackedRgba] {
        &self.colors
    }

    /// Number of colours.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the palette has no colours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colour at `index` modulo the palette length.
    #[must_use]
    pub fn wrapping_get(&self, index: usize) -> Option<PackedRgba> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index % self.colors.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_sizes() {
        assert_eq!(Palette::rainbow().len(), 10);
        assert_eq!(Palette::soft_candy().len(), 5);
        assert_eq!(Palette::soft_purple().len(), 5);
        assert_eq!(Palette::retro().len(), 7);
        assert_eq!(Palette::elemental().len(), 10);
        assert_eq!(Palette::white().len(), 1);
        assert_eq!(Palette::ten_moving_red().len(), 10);
    }

    #[test]
    fn ten_moving_red_ends_lit() {
        let p = Palette::ten_moving_red();
        assert!(p.colors()[..9].iter().all(|c| c.is_transparent()));
        assert_eq!(p.colors()[9], PackedRgba::RED);
    }

    #[test]
    fn wrapping_get_cycles() {
        let p = Palette::retro();
        assert_eq!(p.wrapping_get(7), Some(p.colors()[0]));
        assert_eq!(p.wrapping_get(9), Some(p.colors()[2]));
    }

    #[test]
    fn empty_custom_palette() {
        let p = Palette::custom("none", Vec::<PackedRgba>::new());
        assert!(p.is_empty());
        assert_eq!(p.wrapping_get(3), None);
    }

    #[test]
    fn clones_share_storage() {
        let a = Palette::rainbow();
        let b = a.clone();
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.colors().as_ptr(), b.colors().as_ptr()));
        assert_eq!(b.name(), "rainbow");
    }
}
