#![forbid(unsafe_code)]

//! Palette rotation.
//!
//! Two counters index the palette: a slow **starting position** that steps
//! backwards once every `rotation_time` seconds, and a fast **moving
//! position** that advances once per drawn character. A character's colour
//! is `palette[(starting + moving) % len]`, so neighbouring characters get
//! neighbouring colours and the whole band drifts over time.

use fxtext_core::PackedRgba;

use crate::palette::Palette;

/// Stateful colour stepper for one effect span.
#[derive(Debug, Clone)]
pub struct PaletteRotator {
    palette: Palette,
    rotation_time: f32,
    timer: f32,
    starting: usize,
    moving: usize,
}

impl PaletteRotator {
    /// Rotator at position zero.
    pub fn new(palette: Palette, rotation_time: f32) -> Self {
        Self {
            palette,
            rotation_time,
            timer: 0.0,
            starting: 0,
            moving: 0,
        }
    }

    /// Colour for the next character of the current redraw pass.
    ///
    /// Returns `None` only for an empty palette.
    pub fn advance(&mut self) -> Option<PackedRgba> {
        let color = self
            .palette
            .wrapping_get(self.starting.wrapping_add(self.moving))?;
        self.moving = self.moving.wrapping_add(1);
        Some(color)
    }

    /// Start a new redraw pass.
    pub fn restart(&mut self) {
        self.moving = 0;
    }

    /// Advance the rotation timer by `dt` seconds.
    ///
    /// The timer is compared before it is incremented, so the first step
    /// happens on the tick *after* the timer reaches `rotation_time`.
    pub fn update(&mut self, dt: f32) {
        if self.timer >= self.rotation_time {
            self.timer = 0.0;
            let len = self.palette.len();
            if len > 0 {
                self.starting = (self.starting + len - 1) % len;
            }
        }
        self.timer += dt;
    }

    /// Swap palettes, keeping the counters in range.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.starting = match self.palette.len() {
            0 => 0,
            len => self.starting % len,
        };
    }

    /// Change how often the starting position steps.
    pub fn set_rotation_time(&mut self, rotation_time: f32) {
        self.rotation_time = rotation_time;
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn rotation_time(&self) -> f32 {
        self.rotation_time
    }

    #[must_use]
    pub fn starting_position(&self) -> usize {
        self.starting
    }

    #[must_use]
    pub fn moving_position(&self) -> usize {
        self.moving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Palette {
        Palette::soft_candy()
    }

    #[test]
    fn advance_walks_the_palette() {
        let mut r = PaletteRotator::new(five(), 1.0);
        let got: Vec<_> = (0..5).filter_map(|_| r.advance()).collect();
        assert_eq!(got, five().colors());
        assert_eq!(r.moving_position(), 5);
    }

    #[test]
    fn sixth_advance_wraps_to_first_colour() {
        let mut r = PaletteRotator::new(five(), 1.0);
        for _ in 0..5 {
            r.advance();
        }
        assert_eq!(r.advance(), Some(five().colors()[0]));
    }

    #[test]
    fn restart_resets_moving_position_only() {
        let mut r = PaletteRotator::new(five(), 0.5);
        r.update(0.5);
        r.update(0.1);
        assert_eq!(r.starting_position(), 4);
        r.advance();
        r.advance();
        r.restart();
        assert_eq!(r.moving_position(), 0);
        assert_eq!(r.starting_position(), 4);
        assert_eq!(r.advance(), Some(five().colors()[4]));
    }

    #[test]
    fn timer_is_checked_before_it_advances() {
        let mut r = PaletteRotator::new(five(), 0.1);
        r.update(0.1);
        assert_eq!(r.starting_position(), 0, "reaches threshold, no step yet");
        r.update(0.05);
        assert_eq!(r.starting_position(), 4, "steps on the following tick");
        r.update(0.01);
        assert_eq!(r.starting_position(), 4);
    }

    #[test]
    fn zero_rotation_time_steps_every_tick() {
        let mut r = PaletteRotator::new(five(), 0.0);
        r.update(0.016);
        r.update(0.016);
        r.update(0.016);
        assert_eq!(r.starting_position(), 2);
    }

    #[test]
    fn empty_palette_never_panics() {
        let mut r = PaletteRotator::new(Palette::custom("none", Vec::<PackedRgba>::new()), 0.0);
        r.update(1.0);
        r.update(1.0);
        assert_eq!(r.advance(), None);
        assert_eq!(r.starting_position(), 0);
    }

    #[test]
    fn set_palette_clamps_starting_position() {
        let mut r = PaletteRotator::new(Palette::rainbow(), 0.0);
        for _ in 0..3 {
            r.update(0.0);
        }
        assert_eq!(r.starting_position(), 7);
        r.set_palette(five());
        assert_eq!(r.starting_position(), 2);
        r.set_rotation_time(2.0);
        assert_eq!(r.rotation_time(), 2.0);
        assert_eq!(r.palette().len(), 5);
    }
}
