use std::path::Path;

use crate::error::{Result, TruismError};

/// A tokenized quotes corpus.
///
/// Each line of the source text becomes one sentence, split on ASCII
/// whitespace. Lines without any token are dropped at load time, so every
/// stored sentence holds at least one token.
///
/// The corpus is only needed while the chain is built; callers are expected
/// to drop it right after `ChainModel::build`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
	sentences: Vec<Vec<String>>,
}

impl Corpus {
	/// Tokenizes an iterator of lines.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let sentences = lines
			.into_iter()
			.map(|line| {
				line.as_ref()
					.split_ascii_whitespace()
					.map(str::to_owned)
					.collect::<Vec<_>>()
			})
			.filter(|tokens| !tokens.is_empty())
			.collect();
		Self { sentences }
	}

	/// Tokenizes a whole text, one sentence per line.
	pub fn parse(text: &str) -> Self {
		Self::from_lines(text.lines())
	}

	/// Reads and tokenizes a corpus file.
	///
	/// # Errors
	/// `CorpusUnavailable` if the file cannot be read.
	/// An empty file is *not* an error here; `ChainModel::build` rejects it.
	pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|e| {
			TruismError::CorpusUnavailable(format!("{}: {e}", path.display()))
		})?;
		Ok(Self::parse(&text))
	}

	/// Non-empty sentences, in file order.
	pub fn sentences(&self) -> impl Iterator<Item = &[String]> {
		self.sentences.iter().map(Vec::as_slice)
	}

	pub fn len(&self) -> usize {
		self.sentences.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sentences.is_empty()
	}

	/// Total number of tokens over all sentences.
	pub fn token_count(&self) -> usize {
		self.sentences.iter().map(Vec::len).sum()
	}
}
