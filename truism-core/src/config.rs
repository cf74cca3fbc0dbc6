//! Display configuration of the art piece.

use std::time::Duration;

use crate::error::{Result, TruismError};
use crate::layout::LayoutParams;

/// Width of one glyph of the built-in terminal font, unscaled.
pub const GLYPH_WIDTH_PX: u32 = 6;

/// Geometry and timing of the quote screen.
///
/// # Responsibilities
/// - Hold panel size, margins, text scale and scan-line parameters
/// - Derive the `LayoutParams` used to wrap quotes
/// - Hold the debounce interval applied by the polling loop
///
/// # Invariants
/// - Width, height and text scale are positive
/// - The horizontal margin is smaller than the width
/// - There is at least one scan line, each with a colour
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
	/// Panel width in pixels.
	width: u32,

	/// Panel height in pixels.
	height: u32,

	/// Horizontal space kept free around the quote, in pixels.
	margin: u32,

	/// Integer scale applied to the font.
	pub text_scale: u32,

	/// Minimum time between two regenerations.
	pub debounce: Duration,

	/// Scan-line speed in pixels per second.
	pub scan_speed: f32,

	/// One colour per scan line (`0xRRGGBB`), drawn top to bottom.
	scan_colors: Vec<u32>,
}

impl Default for DisplayConfig {
	/// Defaults of the touchscreen device: 320x240 panel, 20 px margin,
	/// scale 2, 0.5 s debounce, two grey scan lines at 15 px/s.
	fn default() -> Self {
		Self {
			width: 320,
			height: 240,
			margin: 20,
			text_scale: 2,
			debounce: Duration::from_millis(500),
			scan_speed: 15.0,
			scan_colors: vec![0x444444, 0x333333],
		}
	}
}

impl DisplayConfig {
	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn margin(&self) -> u32 {
		self.margin
	}

	pub fn scan_colors(&self) -> &[u32] {
		&self.scan_colors
	}

	/// Sets the panel size.
	///
	/// # Errors
	/// `InvalidConfig` if a dimension is zero or the width does not exceed
	/// the margin.
	pub fn set_size(&mut self, width: u32, height: u32) -> Result<()> {
		if width == 0 || height == 0 {
			return Err(TruismError::InvalidConfig(format!("panel size must be positive, got {width}x{height}")));
		}
		if width <= self.margin {
			return Err(TruismError::InvalidConfig(format!("width {width} must exceed margin {}", self.margin)));
		}
		self.width = width;
		self.height = height;
		Ok(())
	}

	/// Sets the horizontal margin.
	///
	/// # Errors
	/// `InvalidConfig` if the margin is not smaller than the width.
	pub fn set_margin(&mut self, margin: u32) -> Result<()> {
		if margin >= self.width {
			return Err(TruismError::InvalidConfig(format!("margin {margin} must be below width {}", self.width)));
		}
		self.margin = margin;
		Ok(())
	}

	/// Replaces the scan lines, one per colour.
	///
	/// # Errors
	/// `InvalidConfig` if `colors` is empty.
	pub fn set_scan_colors(&mut self, colors: Vec<u32>) -> Result<()> {
		if colors.is_empty() {
			return Err(TruismError::InvalidConfig("at least one scan line is required".to_owned()));
		}
		self.scan_colors = colors;
		Ok(())
	}

	/// Layout of the quote label: full width minus the margin.
	///
	/// # Errors
	/// `InvalidConfig` if `text_scale` is zero.
	pub fn layout(&self) -> Result<LayoutParams> {
		LayoutParams::new(self.width - self.margin, GLYPH_WIDTH_PX, self.text_scale)
	}

	/// Number of block glyphs in a scan line: `(width - 20) / 12`.
	pub fn scan_line_glyphs(&self) -> usize {
		(self.width.saturating_sub(20) / 12) as usize
	}
}
