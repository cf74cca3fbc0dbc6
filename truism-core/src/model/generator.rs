use std::fmt;

use log::debug;
use rand::Rng;

use super::chain_model::{ChainModel, Token};
use crate::error::{Result, TruismError};

/// Hard cap on the number of words in a quote (fits the screen).
pub const MAX_QUOTE_WORDS: usize = 15;

/// A generated quote: between 1 and `MAX_QUOTE_WORDS` words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
	words: Vec<String>,
}

impl Quote {
	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Always false for a generated quote; kept for API symmetry.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

impl fmt::Display for Quote {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.words.join(" "))
	}
}

/// Walks a `ChainModel` to produce quotes.
///
/// # Responsibilities
/// - Pick a weighted-random sentence opener
/// - Follow weighted transitions until `End` or the word cap
///
/// The generator only borrows the model, so any number of generators can
/// share one model.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
	model: &'a ChainModel,
	max_words: usize,
}

impl<'a> Generator<'a> {
	/// Creates a generator capped at `MAX_QUOTE_WORDS`.
	pub fn new(model: &'a ChainModel) -> Self {
		Self { model, max_words: MAX_QUOTE_WORDS }
	}

	/// Lowers the word cap.
	///
	/// # Errors
	/// `InvalidConfig` if `max_words` is 0 or above `MAX_QUOTE_WORDS`.
	pub fn with_max_words(mut self, max_words: usize) -> Result<Self> {
		if !(1..=MAX_QUOTE_WORDS).contains(&max_words) {
			return Err(TruismError::InvalidConfig(format!(
				"max_words must be between 1 and {MAX_QUOTE_WORDS}, got {max_words}"
			)));
		}
		self.max_words = max_words;
		Ok(self)
	}

	/// Generates one quote.
	///
	/// # Behavior
	/// - The first word is drawn from the opener distribution.
	/// - While under the cap, the next token is drawn from the current
	///   word's transitions; drawing `End` stops the quote.
	/// - A word without transitions also stops the quote (only possible
	///   with a hand-made model).
	///
	/// # Errors
	/// `EmptyDistribution` if the model has no opener, which a built or
	/// validated model never has.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Quote> {
		let mut word = self.model.initial_words().sample(rng)?.clone();
		let mut words = Vec::with_capacity(self.max_words);

		loop {
			words.push(word);
			if words.len() >= self.max_words {
				break;
			}

			let next = match words.last().and_then(|current| self.model.transitions(current)) {
				Some(transitions) if !transitions.is_empty() => transitions.sample(rng)?,
				_ => break,
			};

			match next {
				Token::Word(next_word) => word = next_word.clone(),
				Token::End => break,
			}
		}

		debug!("Generated quote of {} words", words.len());
		Ok(Quote { words })
	}
}
