//! State of the quote screen, owned by the polling loop.
//!
//! The loop samples the touchscreen and the clock, then hands both to
//! `UiState::on_frame`. Generation and wrapping stay pure; the debounce
//! policy lives here.

use std::time::Duration;

use log::debug;
use rand::Rng;

use crate::config::DisplayConfig;
use crate::effects::{crt_effect, touch_color};
use crate::error::Result;
use crate::layout::{LayoutParams, WrappedText, wrap};
use crate::model::generator::Generator;

/// Caption shown while the screen is being touched.
pub const TOUCH_CAPTION: &str = "creating a 'new' truism";

/// Base colour before the first touch.
pub const INITIAL_COLOR: u32 = 0xFFFFFF;

/// A touch position in panel pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
	pub x: f32,
	pub y: f32,
}

/// What the display should show after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameUpdate {
	/// A new quote was generated on this frame.
	pub regenerated: bool,
	/// Colour for the quote and caption, CRT effect applied.
	pub color: u32,
}

/// Mutable screen state: current quote, tint, and debounce bookkeeping.
#[derive(Debug, Clone)]
pub struct UiState {
	layout: LayoutParams,
	debounce: Duration,
	panel_width: u32,

	text: WrappedText,
	base_color: u32,
	last_regeneration: Option<Duration>,
	caption_visible: bool,
}

impl UiState {
	/// Creates the state and generates the first quote.
	///
	/// # Errors
	/// `InvalidConfig` for an unusable layout, or a generation error.
	pub fn new<R: Rng + ?Sized>(config: &DisplayConfig, generator: &Generator, rng: &mut R) -> Result<Self> {
		let layout = config.layout()?;
		let text = wrap(&generator.generate(rng)?.to_string(), &layout);
		Ok(Self {
			layout,
			debounce: config.debounce,
			panel_width: config.width(),
			text,
			base_color: INITIAL_COLOR,
			last_regeneration: None,
			caption_visible: false,
		})
	}

	/// Advances the screen by one polling step.
	///
	/// # Parameters
	/// - `touch`: current touch point, if the panel is pressed
	/// - `now`: monotonic time since the loop started
	///
	/// # Behavior
	/// - With a touch: shows the caption, regenerates the quote if the
	///   debounce interval has elapsed since the last regeneration (or if
	///   none happened yet), and tints the quote from the touch x.
	/// - Without a touch: hides the caption.
	/// - In both cases returns the CRT-adjusted colour for `now`.
	pub fn on_frame<R: Rng + ?Sized>(
		&mut self,
		generator: &Generator,
		rng: &mut R,
		touch: Option<TouchPoint>,
		now: Duration,
	) -> Result<FrameUpdate> {
		let mut regenerated = false;

		match touch {
			Some(point) => {
				self.caption_visible = true;

				let due = match self.last_regeneration {
					Some(last) => now.saturating_sub(last) > self.debounce,
					None => true,
				};
				if due {
					let quote = generator.generate(rng)?;
					debug!("Touch at ({}, {}): {quote}", point.x, point.y);
					self.text = wrap(&quote.to_string(), &self.layout);
					self.last_regeneration = Some(now);
					regenerated = true;
				}

				self.base_color = touch_color(point.x, self.panel_width);
			}
			None => self.caption_visible = false,
		}

		Ok(FrameUpdate {
			regenerated,
			color: crt_effect(self.base_color, now.as_secs_f32()),
		})
	}

	/// Current wrapped quote.
	pub fn text(&self) -> &WrappedText {
		&self.text
	}

	/// Caption to draw under the quote, if any.
	pub fn caption(&self) -> Option<&'static str> {
		self.caption_visible.then_some(TOUCH_CAPTION)
	}

	/// Last tint, before the CRT effect.
	pub fn base_color(&self) -> u32 {
		self.base_color
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::chain_model::ChainModel;
	use crate::model::corpus::Corpus;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn model() -> ChainModel {
		ChainModel::build(&Corpus::from_lines([
			"the cat sat",
			"the dog ran",
			"a quiet mind is a loud room",
		]))
		.unwrap()
	}

	fn touch(x: f32) -> Option<TouchPoint> {
		Some(TouchPoint { x, y: 100.0 })
	}

	#[test]
	fn starts_white_with_a_quote() {
		let model = model();
		let generator = Generator::new(&model);
		let mut rng = StdRng::seed_from_u64(1);
		let state = UiState::new(&DisplayConfig::default(), &generator, &mut rng).unwrap();
		assert!(!state.text().is_empty());
		assert_eq!(state.base_color(), INITIAL_COLOR);
		assert_eq!(state.caption(), None);
	}

	#[test]
	fn regenerates_at_most_once_per_debounce() {
		let model = model();
		let generator = Generator::new(&model);
		let mut rng = StdRng::seed_from_u64(2);
		let mut state = UiState::new(&DisplayConfig::default(), &generator, &mut rng).unwrap();

		let ms = Duration::from_millis;
		let first = state.on_frame(&generator, &mut rng, touch(10.0), ms(1_000)).unwrap();
		assert!(first.regenerated);

		// Held touch polled every 50 ms
		let mut regenerations = 0;
		for step in 1..=10 {
			let update = state.on_frame(&generator, &mut rng, touch(10.0), ms(1_000 + step * 50)).unwrap();
			if update.regenerated {
				regenerations += 1;
			}
		}
		// 1050..=1500 ms: only strictly more than 500 ms counts, so none
		assert_eq!(regenerations, 0);

		let later = state.on_frame(&generator, &mut rng, touch(10.0), ms(1_550)).unwrap();
		assert!(later.regenerated);
	}

	#[test]
	fn caption_follows_touch() {
		let model = model();
		let generator = Generator::new(&model);
		let mut rng = StdRng::seed_from_u64(3);
		let mut state = UiState::new(&DisplayConfig::default(), &generator, &mut rng).unwrap();

		state.on_frame(&generator, &mut rng, touch(0.0), Duration::ZERO).unwrap();
		assert_eq!(state.caption(), Some(TOUCH_CAPTION));

		let update = state.on_frame(&generator, &mut rng, None, Duration::from_secs(5)).unwrap();
		assert_eq!(state.caption(), None);
		assert!(!update.regenerated);
	}

	#[test]
	fn touch_x_sets_the_tint() {
		let model = model();
		let generator = Generator::new(&model);
		let mut rng = StdRng::seed_from_u64(4);
		let mut state = UiState::new(&DisplayConfig::default(), &generator, &mut rng).unwrap();

		let update = state.on_frame(&generator, &mut rng, touch(160.0), Duration::ZERO).unwrap();
		assert_eq!(state.base_color(), 0x00FFFF);
		assert_eq!(update.color, crt_effect(0x00FFFF, 0.0));

		// Tint persists after release
		state.on_frame(&generator, &mut rng, None, Duration::from_secs(1)).unwrap();
		assert_eq!(state.base_color(), 0x00FFFF);
	}

	#[test]
	fn wrapped_lines_fit_the_panel() {
		let model = model();
		let generator = Generator::new(&model);
		let mut rng = StdRng::seed_from_u64(5);
		let config = DisplayConfig::default();
		let mut state = UiState::new(&config, &generator, &mut rng).unwrap();

		for step in 0..50u64 {
			state.on_frame(&generator, &mut rng, touch(42.0), Duration::from_secs(step)).unwrap();
			for line in state.text().lines() {
				let single_word = !line.contains(' ');
				let width = line.chars().count() as u32 * 12;
				assert!(single_word || width <= config.width() - config.margin(), "{line:?}");
			}
		}
	}
}
