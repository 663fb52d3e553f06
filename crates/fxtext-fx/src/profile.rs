#![forbid(unsafe_code)]

//! Numbered effect presets.
//!
//! The four numbers of an `<fx C,W,S,H>` tag select one entry in each of four
//! tables. Id `0` always means "no effect", so it can never be registered;
//! ids missing from a table resolve to no effect as well.
//!
//! # Example
//! ```
//! use fxtext_fx::{EffectProfiles, WaveProfile};
//! use fxtext_text::FxParams;
//!
//! let profiles = EffectProfiles::standard().with_wave(2, WaveProfile::new(4.0, 2.0));
//! let fx = profiles.resolve(FxParams::new(1, 2, 0, 9));
//! assert!(fx.color.is_some());
//! assert_eq!(fx.wave, Some(WaveProfile::new(4.0, 2.0)));
//! assert!(fx.shake.is_none());
//! assert!(fx.hang.is_none());
//! ```

use rustc_hash::FxHashMap;

use fxtext_text::FxParams;

use crate::palette::Palette;

/// Palette plus how often it rotates.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorProfile {
    pub palette: Palette,
    /// Seconds between starting-position steps.
    pub rotation_time: f32,
}

impl ColorProfile {
    pub fn new(palette: Palette, rotation_time: f32) -> Self {
        Self {
            palette,
            rotation_time,
        }
    }
}

/// Vertical sine bob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveProfile {
    /// Radians per second.
    pub frequency: f32,
    /// Pixels.
    pub amplitude: f32,
}

impl WaveProfile {
    pub const fn new(frequency: f32, amplitude: f32) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

/// Discrete random jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeProfile {
    /// Seconds between re-seeds.
    pub interval: f32,
    /// Maximum offset in pixels on each axis.
    pub strength: f32,
}

impl ShakeProfile {
    pub const fn new(interval: f32, strength: f32) -> Self {
        Self { interval, strength }
    }
}

/// Pendulum rotation about each glyph's top centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HangProfile {
    /// Radians per second.
    pub frequency: f32,
    /// Peak swing in degrees.
    pub amplitude_degrees: f32,
}

impl HangProfile {
    pub const fn new(frequency: f32, amplitude_degrees: f32) -> Self {
        Self {
            frequency,
            amplitude_degrees,
        }
    }
}

/// The four preset tables.
#[derive(Debug, Clone, Default)]
pub struct EffectProfiles {
    color: FxHashMap<u32, ColorProfile>,
    wave: FxHashMap<u32, WaveProfile>,
    shake: FxHashMap<u32, ShakeProfile>,
    hang: FxHashMap<u32, HangProfile>,
}

impl EffectProfiles {
    /// Empty tables: every id resolves to no effect.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock presets.
    ///
    /// | id | colour                  | wave   | shake      | hang     |
    /// |----|-------------------------|--------|------------|----------|
    /// | 1  | rainbow, 0.075 s        | (8, 8) | (0.06, 3)  | (6, 12°) |
    /// | 2  | elemental, 0.075 s      |        |            |          |
    /// | 3  | soft candy, 0.075 s     |        |            |          |
    /// | 4  | soft purple, 0.075 s    |        |            |          |
    /// | 5  | retro, 0.075 s          |        |            |          |
    /// | 6  | white, 0.075 s          |        |            |          |
    /// | 7  | ten moving red, 0.125 s |        |            |          |
    pub fn standard() -> Self {
        Self::new()
            .with_color(1, ColorProfile::new(Palette::rainbow(), 0.075))
            .with_color(2, ColorProfile::new(Palette::elemental(), 0.075))
            .with_color(3, ColorProfile::new(Palette::soft_candy(), 0.075))
            .with_color(4, ColorProfile::new(Palette::soft_purple(), 0.075))
            .with_color(5, ColorProfile::new(Palette::retro(), 0.075))
            .with_color(6, ColorProfile::new(Palette::white(), 0.075))
            .with_color(7, ColorProfile::new(Palette::ten_moving_red(), 0.125))
            .with_wave(1, WaveProfile::new(8.0, 8.0))
            .with_shake(1, ShakeProfile::new(0.06, 3.0))
            .with_hang(1, HangProfile::new(6.0, 12.0))
    }

    /// Register a colour preset. Id `0` is ignored.
    #[must_use]
    pub fn with_color(mut self, id: u32, profile: ColorProfile) -> Self {
        if id != 0 {
            self.color.insert(id, profile);
        }
        self
    }

    /// Register a wave preset. Id `0` is ignored.
    #[must_use]
    pub fn with_wave(mut self, id: u32, profile: WaveProfile) -> Self {
        if id != 0 {
            self.wave.insert(id, profile);
        }
        self
    }

    /// Register a shake preset. Id `0` is ignored.
    #[must_use]
    pub fn with_shake(mut self, id: u32, profile: ShakeProfile) -> Self {
        if id != 0 {
            self.shake.insert(id, profile);
        }
        self
    }

    /// Register a hang preset. Id `0` is ignored.
    #[must_use]
    pub fn with_hang(mut self, id: u32, profile: HangProfile) -> Self {
        if id != 0 {
            self.hang.insert(id, profile);
        }
        self
    }

    #[must_use]
    pub fn color(&self, id: u32) -> Option<&ColorProfile> {
        self.color.get(&id)
    }

    #[must_use]
    pub fn wave(&self, id: u32) -> Option<WaveProfile> {
        self.wave.get(&id).copied()
    }

    #[must_use]
    pub fn shake(&self, id: u32) -> Option<ShakeProfile> {
        self.shake.get(&id).copied()
    }

    #[must_use]
    pub fn hang(&self, id: u32) -> Option<HangProfile> {
        self.hang.get(&id).copied()
    }

    /// Look up all four ids of a tag.
    pub fn resolve(&self, params: FxParams) -> ResolvedEffects {
        let resolved = ResolvedEffects {
            color: self.color(params.color).cloned(),
            wave: self.wave(params.wave),
            shake: self.shake(params.shake),
            hang: self.hang(params.hang),
        };
        tracing::trace!(
            ?params,
            color = resolved.color.is_some(),
            wave = resolved.wave.is_some(),
            shake = resolved.shake.is_some(),
            hang = resolved.hang.is_some(),
            "resolved effect profiles"
        );
        resolved
    }
}

/// The presets one span ended up with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedEffects {
    pub color: Option<ColorProfile>,
    pub wave: Option<WaveProfile>,
    pub shake: Option<ShakeProfile>,
    pub hang: Option<HangProfile>,
}

impl ResolvedEffects {
    /// True when no effect applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.wave.is_none() && self.shake.is_none() && self.hang.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_colour_table() {
        let p = EffectProfiles::standard();
        let names: Vec<&str> = (1..=7)
            .filter_map(|id| p.color(id))
            .map(|c| c.palette.name())
            .collect();
        assert_eq!(names, vec![
            "rainbow",
            "elemental",
            "soft-candy",
            "soft-purple",
            "retro",
            "white",
            "ten-moving-red"
        ]);
        assert_eq!(p.color(7).map(|c| c.rotation_time), Some(0.125));
        assert!(p.color(8).is_none());
    }

    #[test]
    fn standard_motion_tables() {
        let p = EffectProfiles::standard();
        assert_eq!(p.wave(1), Some(WaveProfile::new(8.0, 8.0)));
        assert_eq!(p.shake(1), Some(ShakeProfile::new(0.06, 3.0)));
        assert_eq!(p.hang(1), Some(HangProfile::new(6.0, 12.0)));
        assert_eq!(p.wave(2), None);
    }

    #[test]
    fn id_zero_is_never_registered() {
        let p = EffectProfiles::new()
            .with_wave(0, WaveProfile::new(1.0, 1.0))
            .with_color(0, ColorProfile::new(Palette::white(), 1.0));
        assert!(p.wave(0).is_none());
        assert!(p.color(0).is_none());
    }

    #[test]
    fn later_registration_replaces() {
        let p = EffectProfiles::standard().with_wave(1, WaveProfile::new(2.0, 3.0));
        assert_eq!(p.wave(1), Some(WaveProfile::new(2.0, 3.0)));
    }

    #[test]
    fn resolve_none_is_empty() {
        let p = EffectProfiles::standard();
        assert!(p.resolve(FxParams::NONE).is_empty());
        assert!(p.resolve(FxParams::new(99, 99, 99, 99)).is_empty());
    }

    #[test]
    fn resolve_mixes_known_and_unknown() {
        let fx = EffectProfiles::standard().resolve(FxParams::new(0, 1, 5, 1));
        assert!(fx.color.is_none());
        assert!(fx.wave.is_some());
        assert!(fx.shake.is_none());
        assert!(fx.hang.is_some());
        assert!(!fx.is_empty());
    }
}
