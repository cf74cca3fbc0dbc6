//! Error type shared by the whole crate.

use std::fmt;

/// Everything that can go wrong while building, loading or sampling a chain.
///
/// Only `CorpusUnavailable` and `Snapshot` are expected at runtime (startup).
/// `EmptyDistribution` is an invariant violation: a `ChainModel` built from a
/// non-empty corpus never contains an empty distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruismError {
	/// The corpus file is missing, unreadable, or holds no tokens.
	CorpusUnavailable(String),
	/// The sampler was asked to draw from a distribution with no outcomes.
	EmptyDistribution,
	/// A chain snapshot could not be written, read or validated.
	Snapshot(String),
	/// A configuration value was rejected.
	InvalidConfig(String),
}

impl fmt::Display for TruismError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CorpusUnavailable(msg) => write!(f, "CorpusUnavailable: {msg}"),
			Self::EmptyDistribution => write!(f, "EmptyDistribution: no outcome to sample from"),
			Self::Snapshot(msg) => write!(f, "SnapshotError: {msg}"),
			Self::InvalidConfig(msg) => write!(f, "InvalidConfig: {msg}"),
		}
	}
}

impl std::error::Error for TruismError {}

impl From<postcard::Error> for TruismError {
	fn from(err: postcard::Error) -> Self {
		Self::Snapshot(err.to_string())
	}
}

pub type Result<T> = std::result::Result<T, TruismError>;
