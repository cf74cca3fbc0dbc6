//! Greedy word wrapping for a fixed-width bitmap font.

use std::fmt;

use crate::error::{Result, TruismError};

/// Layout parameters of the quote label.
///
/// Glyphs are assumed fixed-width: a word of `n` characters is
/// `n * glyph_width_px * scale` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
	/// Width budget of one line, in pixels.
	max_width_px: u32,
	/// Width of one unscaled glyph, in pixels.
	glyph_width_px: u32,
	/// Integer text scale factor.
	scale: u32,
}

impl LayoutParams {
	/// # Errors
	/// `InvalidConfig` if the glyph width or the scale is zero.
	pub fn new(max_width_px: u32, glyph_width_px: u32, scale: u32) -> Result<Self> {
		if glyph_width_px == 0 || scale == 0 {
			return Err(TruismError::InvalidConfig(format!(
				"glyph width and scale must be positive, got {glyph_width_px} and {scale}"
			)));
		}
		Ok(Self { max_width_px, glyph_width_px, scale })
	}

	pub fn max_width_px(&self) -> u32 {
		self.max_width_px
	}

	pub fn glyph_width_px(&self) -> u32 {
		self.glyph_width_px
	}

	pub fn scale(&self) -> u32 {
		self.scale
	}

	/// Pixel width of `chars` scaled glyphs.
	fn span(&self, chars: usize) -> u64 {
		chars as u64 * u64::from(self.glyph_width_px) * u64::from(self.scale)
	}
}

/// Text broken into lines that fit the layout width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappedText {
	lines: Vec<String>,
}

impl WrappedText {
	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}
}

impl fmt::Display for WrappedText {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.lines.join("\n"))
	}
}

/// Wraps `text` to the width of `params`.
///
/// Greedy fill: a word joins the current line while
/// `width + (len + 1) * glyph * scale <= max_width`, the `+ 1` accounting
/// for the separating space. Otherwise the line is closed and the word opens
/// a new one whose width restarts at `len * glyph * scale`, without the
/// space. This asymmetry is intentional and must be kept: the rendered
/// output depends on it.
///
/// A word wider than the budget still gets a line of its own; words are
/// never split.
pub fn wrap(text: &str, params: &LayoutParams) -> WrappedText {
	let budget = u64::from(params.max_width_px);
	let mut lines = Vec::new();
	let mut current: Vec<&str> = Vec::new();
	let mut current_width = 0u64;

	for word in text.split_ascii_whitespace() {
		let chars = word.chars().count();
		let padded = params.span(chars + 1);

		if current_width + padded <= budget {
			current.push(word);
			current_width += padded;
		} else {
			if !current.is_empty() {
				lines.push(current.join(" "));
			}
			current = vec![word];
			current_width = params.span(chars);
		}
	}

	if !current.is_empty() {
		lines.push(current.join(" "));
	}

	WrappedText { lines }
}
