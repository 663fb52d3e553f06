#![forbid(unsafe_code)]

//! Per-frame effect animation.
//!
//! Animation state is split in two:
//!
//! - **Time-driven** state advances in [`SpanAnimation::update`], once per
//!   frame: the palette rotator's slow starting position and the shake seed.
//! - **Pass-driven** state advances once per drawn character inside a redraw
//!   pass and is reset by [`SpanAnimation::begin_pass`]: the rotator's moving
//!   position and the shake generator.
//!
//! Wave and hang carry no state of their own. They are pure functions of the
//! shared [`AnimationClock`] and the character's index within its line.

use std::f32::consts::TAU;

use fxtext_core::{PackedRgba, Vec2};

use crate::profile::{HangProfile, ResolvedEffects, ShakeProfile, WaveProfile};
use crate::rotator::PaletteRotator;
use crate::seed::SeedSource;

/// Seconds after which the clock wraps back to zero.
pub const CLOCK_PERIOD: f32 = 3600.0;

/// Factor applied to a palette colour to get its shadow.
pub const SHADOW_DARKEN: f32 = 0.45;

/// Shared animation time in seconds, wrapped to `[0, CLOCK_PERIOD)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationClock {
    time: f32,
}

impl AnimationClock {
    /// Clock at time zero.
    pub const fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Clock at `time` (wrapped).
    pub fn with_time(time: f32) -> Self {
        Self {
            time: time.rem_euclid(CLOCK_PERIOD),
        }
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.time = (self.time + dt).rem_euclid(CLOCK_PERIOD);
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}

/// Vertical offset of the `char_index`-th character of a line.
#[inline]
#[must_use]
pub fn wave_offset(profile: &WaveProfile, time: f32, char_index: usize) -> f32 {
    (time * profile.frequency + char_index as f32).sin() * profile.amplitude
}

/// Rotation in radians of the `char_index`-th character of a line.
#[inline]
#[must_use]
pub fn hang_rotation(profile: &HangProfile, time: f32, char_index: usize) -> f32 {
    ((time * profile.frequency + char_index as f32).sin() * profile.amplitude_degrees).to_radians()
}

/// Shake jitter for one span.
///
/// The seed is re-rolled from a [`SeedSource`] every `interval` seconds.
/// Each redraw pass rebuilds the generator from the current seed, so the
/// same seed always yields the same jitter sequence.
#[derive(Debug, Clone)]
pub struct ShakeState {
    profile: ShakeProfile,
    timer: f32,
    seed: u64,
    rng: fastrand::Rng,
}

impl ShakeState {
    pub fn new<S: SeedSource + ?Sized>(profile: ShakeProfile, seeds: &mut S) -> Self {
        let seed = seeds.next_seed();
        Self {
            profile,
            timer: 0.0,
            seed,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Advance the re-roll timer.
    pub fn update<S: SeedSource + ?Sized>(&mut self, dt: f32, seeds: &mut S) {
        self.timer += dt;
        if self.timer >= self.profile.interval {
            self.timer = 0.0;
            self.seed = seeds.next_seed();
            tracing::trace!(seed = self.seed, "shake reseeded");
        }
    }

    /// Restart the jitter sequence from the current seed.
    pub fn begin_pass(&mut self) {
        self.rng = fastrand::Rng::with_seed(self.seed);
    }

    /// Next jitter: `strength * sin(phase)` on each axis with a uniform phase.
    pub fn offset(&mut self) -> Vec2 {
        let x = (self.rng.f32() * TAU).sin() * self.profile.strength;
        let y = (self.rng.f32() * TAU).sin() * self.profile.strength;
        Vec2::new(x, y)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn profile(&self) -> ShakeProfile {
        self.profile
    }
}

/// How to draw one character of an effect span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharTransform {
    /// Added to the character's laid-out position.
    pub offset: Vec2,
    /// Radians, about `origin`.
    pub rotation: f32,
    /// Pivot relative to the glyph's top-left corner.
    pub origin: Vec2,
    pub color: PackedRgba,
    pub shadow_color: PackedRgba,
}

impl CharTransform {
    /// No motion, given colours.
    #[must_use]
    pub const fn identity(color: PackedRgba, shadow_color: PackedRgba) -> Self {
        Self {
            offset: Vec2::ZERO,
            rotation: 0.0,
            origin: Vec2::ZERO,
            color,
            shadow_color,
        }
    }
}

/// Live effect state of one span.
#[derive(Debug, Clone, Default)]
pub struct SpanAnimation {
    rotator: Option<PaletteRotator>,
    wave: Option<WaveProfile>,
    shake: Option<ShakeState>,
    hang: Option<HangProfile>,
}

impl SpanAnimation {
    /// Instantiate the resolved presets. A shake preset draws its first seed
    /// from `seeds`.
    pub fn new<S: SeedSource + ?Sized>(effects: ResolvedEffects, seeds: &mut S) -> Self {
        Self {
            rotator: effects
                .color
                .map(|c| PaletteRotator::new(c.palette, c.rotation_time)),
            wave: effects.wave,
            shake: effects.shake.map(|p| ShakeState::new(p, seeds)),
            hang: effects.hang,
        }
    }

    /// Advance time-driven state by `dt` seconds.
    pub fn update<S: SeedSource + ?Sized>(&mut self, dt: f32, seeds: &mut S) {
        if let Some(rotator) = &mut self.rotator {
            rotator.update(dt);
        }
        if let Some(shake) = &mut self.shake {
            shake.update(dt, seeds);
        }
    }

    /// Start a redraw pass: reset the palette's moving position and the
    /// shake generator.
    pub fn begin_pass(&mut self) {
        if let Some(rotator) = &mut self.rotator {
            rotator.restart();
        }
        if let Some(shake) = &mut self.shake {
            shake.begin_pass();
        }
    }

    /// Transform for the next character of the pass.
    ///
    /// Must be called exactly once per drawn character, left to right, since
    /// it steps the palette and the shake generator. `char_index` is the
    /// character's index within its line and `glyph_width` its measured
    /// width. A character drawn in `base_color` keeps `shadow_color`; a
    /// palette colour gets a darkened copy of itself as shadow.
    pub fn transform(
        &mut self,
        clock: &AnimationClock,
        char_index: usize,
        glyph_width: f32,
        base_color: PackedRgba,
        shadow_color: PackedRgba,
    ) -> CharTransform {
        let color = self
            .rotator
            .as_mut()
            .and_then(PaletteRotator::advance)
            .unwrap_or(base_color);
        let shadow_color = if color == base_color {
            shadow_color
        } else {
            color.scale_rgb(SHADOW_DARKEN)
        };
        let mut out = CharTransform::identity(color, shadow_color);

        if let Some(shake) = &mut self.shake {
            out.offset = out.offset + shake.offset();
        }
        if let Some(wave) = &self.wave {
            out.offset.y += wave_offset(wave, clock.time(), char_index);
        }
        if let Some(hang) = &self.hang {
            out.origin = Vec2::new(glyph_width / 2.0, 0.0);
            out.rotation = hang_rotation(hang, clock.time(), char_index);
            out.offset.x += out.origin.x;
        }

        out
    }

    /// True when no effect is active and every transform is the identity.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.rotator.is_none() && self.wave.is_none() && self.shake.is_none() && self.hang.is_none()
    }

    #[must_use]
    pub fn rotator(&self) -> Option<&PaletteRotator> {
        self.rotator.as_ref()
    }

    #[must_use]
    pub fn shake(&self) -> Option<&ShakeState> {
        self.shake.as_ref()
    }

    #[must_use]
    pub fn wave(&self) -> Option<WaveProfile> {
        self.wave
    }

    #[must_use]
    pub fn hang(&self) -> Option<HangProfile> {
        self.hang
    }
}
