use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::corpus::Corpus;
use super::distribution::{Distribution, Tally};
use crate::error::{Result, TruismError};
use crate::io::{is_up_to_date, snapshot_path};

/// Successor of a word in the transition table.
///
/// `End` marks the natural end of a sentence. Being a separate variant, it
/// can never collide with a corpus word (even a literal `"<end>"` token).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
	Word(String),
	End,
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Word(word) => f.write_str(word),
			Self::End => f.write_str("<end>"),
		}
	}
}

/// An order-1, word-level Markov chain with frequency-weighted transitions.
///
/// The model stores:
/// - `initial_words`: how many sentences start with each word
/// - `transitions`: for each word, how often each successor (or `End`) follows it
///
/// # Invariants
/// - `initial_words` is non-empty
/// - Every word seen in the corpus has a non-empty transition distribution
///   (its successors, or at least `End` if it closed a sentence)
/// - All counts are >= 1
///
/// A model is built once and never mutated; share it by reference.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChainModel {
	pub(crate) initial_words: Distribution<String>,
	pub(crate) transitions: HashMap<String, Distribution<Token>>,
}

impl ChainModel {
	/// Builds the chain from a tokenized corpus in a single pass.
	///
	/// For each sentence:
	/// - the first token is counted as a sentence opener
	/// - each consecutive pair `(current, next)` is counted as a transition
	/// - the last token gets a transition to `Token::End`
	///
	/// # Errors
	/// `CorpusUnavailable` if the corpus has no sentence.
	pub fn build(corpus: &Corpus) -> Result<Self> {
		if corpus.is_empty() {
			return Err(TruismError::CorpusUnavailable("corpus contains no words".to_owned()));
		}

		let mut initial_words = Tally::new();
		let mut transitions: HashMap<String, Tally<Token>> = HashMap::new();

		for sentence in corpus.sentences() {
			// Corpus never yields empty sentences
			let (first, last) = match (sentence.first(), sentence.last()) {
				(Some(first), Some(last)) => (first, last),
				_ => continue,
			};
			initial_words.record(first.clone());

			for pair in sentence.windows(2) {
				transitions
					.entry(pair[0].clone())
					.or_insert_with(Tally::new)
					.record(Token::Word(pair[1].clone()));
			}

			transitions
				.entry(last.clone())
				.or_insert_with(Tally::new)
				.record(Token::End);
		}

		let model = Self {
			initial_words: initial_words.finish(),
			transitions: transitions
				.into_iter()
				.map(|(word, tally)| (word, tally.finish()))
				.collect(),
		};

		info!(
			"Built chain from {} sentences ({} tokens): {} openers, {} words",
			corpus.len(),
			corpus.token_count(),
			model.initial_words.len(),
			model.transitions.len()
		);
		Ok(model)
	}

	/// Reads a corpus file and builds the chain from it.
	///
	/// # Errors
	/// `CorpusUnavailable` if the file is missing, unreadable or empty.
	pub fn from_path<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let corpus = Corpus::read(&filepath)?;
		Self::build(&corpus).map_err(|e| match e {
			TruismError::CorpusUnavailable(msg) => {
				TruismError::CorpusUnavailable(format!("{}: {msg}", filepath.as_ref().display()))
			}
			other => other,
		})
	}

	/// Loads a chain for the corpus at `filepath`.
	///
	/// The corpus must exist. If a snapshot (`<stem>.bin`) next to it is at
	/// least as recent as the corpus, it is decoded instead of re-reading the
	/// text. An older snapshot is ignored and the corpus is built.
	/// Nothing is written; see `save_snapshot`.
	///
	/// # Errors
	/// - `CorpusUnavailable` if the corpus is missing, unreadable or empty,
	///   even when a snapshot exists.
	/// - `Snapshot` if a fresh snapshot cannot be decoded.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let corpus_path = filepath.as_ref();
		let snapshot = snapshot_path(corpus_path)
			.map_err(|e| TruismError::CorpusUnavailable(format!("{}: {e}", corpus_path.display())))?;
		let fresh = is_up_to_date(&snapshot, corpus_path)
			.map_err(|e| TruismError::CorpusUnavailable(format!("{}: {e}", corpus_path.display())))?;

		if !fresh {
			if snapshot.exists() {
				warn!("Snapshot {} is older than {}, rebuilding", snapshot.display(), corpus_path.display());
			}
			return Self::from_path(corpus_path);
		}

		let bytes = std::fs::read(&snapshot)
			.map_err(|e| TruismError::Snapshot(format!("{}: {e}", snapshot.display())))?;
		let model = Self::from_bytes(&bytes)?;
		info!("Loaded chain snapshot {}", snapshot.display());
		Ok(model)
	}

	/// Writes the snapshot of this model next to the corpus at `filepath`
	/// (`data/quotes.txt` → `data/quotes.bin`).
	///
	/// Returns the path written.
	pub fn save_snapshot<P: AsRef<Path>>(&self, filepath: P) -> Result<std::path::PathBuf> {
		let snapshot = snapshot_path(&filepath)
			.map_err(|e| TruismError::Snapshot(e.to_string()))?;
		std::fs::write(&snapshot, self.to_bytes()?)
			.map_err(|e| TruismError::Snapshot(format!("{}: {e}", snapshot.display())))?;
		info!("Wrote chain snapshot {}", snapshot.display());
		Ok(snapshot)
	}

	/// Encodes the model with `postcard`.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		Ok(postcard::to_stdvec(self)?)
	}

	/// Decodes and validates a model produced by `to_bytes`.
	///
	/// # Errors
	/// `Snapshot` if the bytes are not a model, or if the decoded model breaks
	/// the chain invariants.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		let model: Self = postcard::from_bytes(bytes)?;
		model.validate()?;
		debug!("Decoded chain snapshot ({} bytes)", bytes.len());
		Ok(model)
	}

	/// Checks the structural invariants listed on the type.
	fn validate(&self) -> Result<()> {
		if !self.initial_words.is_valid() {
			return Err(TruismError::Snapshot("initial word table is empty".to_owned()));
		}
		if let Some((word, _)) = self.transitions.iter().find(|(_, dist)| !dist.is_valid()) {
			return Err(TruismError::Snapshot(format!("no valid transition for '{word}'")));
		}
		Ok(())
	}

	/// Sentence-opener distribution.
	pub fn initial_words(&self) -> &Distribution<String> {
		&self.initial_words
	}

	/// Successor distribution of `word`, if the word was ever seen.
	pub fn transitions(&self, word: &str) -> Option<&Distribution<Token>> {
		self.transitions.get(word)
	}

	/// Number of distinct words in the chain.
	pub fn vocabulary_len(&self) -> usize {
		self.transitions.len()
	}
}
