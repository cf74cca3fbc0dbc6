//! Weighted Markov quote generator for a small touchscreen art piece.
//!
//! This crate provides:
//! - An order-1 word-level Markov chain built from a quotes corpus
//! - Frequency-weighted sampling with an injectable random source
//! - Greedy fixed-width word wrapping for a pixel budget
//! - The screen state driven by a polling loop (debounce, tint, CRT colour)
//!
//! The crate never touches hardware or clocks: the caller polls input,
//! supplies the time and renders the result.

/// Markov chain: corpus, distributions, chain model and generator.
pub mod model;

/// Word wrapping for fixed-width glyphs.
pub mod layout;

/// Display geometry, debounce and scan-line settings.
pub mod config;

/// Touch tint, CRT colour effect and scan-line motion.
pub mod effects;

/// Per-frame screen state owned by the polling loop.
pub mod ui_state;

/// Crate error type.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Result, TruismError};
