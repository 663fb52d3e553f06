#![forbid(unsafe_code)]

//! Core primitives for fxtext.
//!
//! This crate holds the pieces every other fxtext crate leans on:
//! - [`Vec2`] - 2D float vector for positions, sizes and offsets
//! - [`PackedRgba`] - straight-alpha RGBA colour packed into a `u32`
//! - [`TextMetrics`] - the font measurement capability consumed by layout
//! - [`CellMetrics`] - a fixed-cell reference implementation of [`TextMetrics`]
//! - [`WidthCache`] / [`CachedMetrics`] - LRU memoisation of width queries
//!
//! # Example
//! ```
//! use fxtext_core::{CachedMetrics, CellMetrics, TextMetrics};
//!
//! let metrics = CachedMetrics::new(CellMetrics::new(8.0, 16.0));
//! assert_eq!(metrics.measure_width("hello"), 40.0);
//! assert_eq!(metrics.measure_height(" "), 16.0);
//! assert_eq!(metrics.stats().misses, 1);
//! ```

pub mod color;
pub mod geometry;
pub mod metrics;
pub mod width_cache;

pub use color::PackedRgba;
pub use geometry::Vec2;
pub use metrics::{CellMetrics, TextMetrics, widest_line};
pub use width_cache::{CacheStats, CachedMetrics, DEFAULT_CACHE_CAPACITY, WidthCache};
