#![forbid(unsafe_code)]

//! Animated text boxes.
//!
//! `fxtext` lays out text containing `<fx C,W,S,H>...</fx>` effect tags into
//! a box, wraps it at the box width, pages it by the box height and draws it
//! with per-character palette rotation, wave, shake and hang effects.
//!
//! ```
//! use fxtext::prelude::*;
//!
//! let config = TextBoxConfig::new(Vec2::new(12.0, 2.0)).shadow_color(PackedRgba::BLACK);
//! let mut doc = Document::new(CellMetrics::default(), "hello <fx 1,1,0,0>wavy</fx> world")
//!     .with_config(config);
//!
//! doc.layout();
//! assert_eq!(doc.wrapped_text()?, "hello wavy\nworld");
//!
//! doc.update(0.016);
//! let commands = doc.draw_commands()?;
//! assert!(commands.iter().any(|c| c.layer == DrawLayer::Shadow));
//! # Ok::<(), fxtext::DocumentError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod render;
pub mod scroll;

pub use config::TextBoxConfig;
pub use document::{Document, Layout, LayoutState};
pub use error::{DocumentError, Result};
pub use render::{DrawCommand, DrawLayer, GlyphSink, TextGrid};
pub use scroll::{LineCursor, LinePiece, ScrollState, count_lines};

pub use fxtext_core as core;
pub use fxtext_fx as fx;
pub use fxtext_text as text;

pub mod prelude {
    pub use crate::{
        Document, DocumentError, DrawCommand, DrawLayer, GlyphSink, Result, ScrollState,
        TextBoxConfig, TextGrid,
    };

    pub use fxtext_core::{CachedMetrics, CellMetrics, PackedRgba, TextMetrics, Vec2};
    pub use fxtext_fx::{EffectProfiles, FixedSeed, SeedSource};

    pub use crate::{core, fx, text};
}
