#![forbid(unsafe_code)]

//! Effect animation for fxtext spans.
//!
//! - [`Palette`] / [`PaletteRotator`]: per-character colour cycling
//! - [`EffectProfiles`]: the numbered presets behind `<fx C,W,S,H>`
//! - [`SpanAnimation`]: live state of one span, producing a
//!   [`CharTransform`] per drawn character
//! - [`SeedSource`]: where shake seeds come from
//!
//! # Example
//! ```
//! use fxtext_core::PackedRgba;
//! use fxtext_fx::{AnimationClock, EffectProfiles, FixedSeed, SpanAnimation};
//! use fxtext_text::FxParams;
//!
//! let profiles = EffectProfiles::standard();
//! let mut seeds = FixedSeed(1);
//! let mut anim = SpanAnimation::new(profiles.resolve(FxParams::new(1, 1, 0, 0)), &mut seeds);
//!
//! let mut clock = AnimationClock::new();
//! clock.tick(1.0 / 60.0);
//! anim.update(1.0 / 60.0, &mut seeds);
//!
//! anim.begin_pass();
//! let t = anim.transform(&clock, 0, 8.0, PackedRgba::WHITE, PackedRgba::TRANSPARENT);
//! assert_eq!(t.color, PackedRgba::rgb(255, 0, 0));
//! ```

pub mod animator;
pub mod palette;
pub mod profile;
pub mod rotator;
pub mod seed;

pub use animator::{
    AnimationClock, CLOCK_PERIOD, CharTransform, SHADOW_DARKEN, ShakeState, SpanAnimation,
    hang_rotation, wave_offset,
};
pub use palette::Palette;
pub use profile::{
    ColorProfile, EffectProfiles, HangProfile, ResolvedEffects, ShakeProfile, WaveProfile,
};
pub use rotator::PaletteRotator;
pub use seed::{FixedSeed, SeedSequence, SeedSource};
