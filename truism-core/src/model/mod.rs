//! Top-level module for the Markov quote chain.
//!
//! This module provides an order-1, word-level Markov generator, including:
//! - Corpus loading and tokenization (`Corpus`)
//! - Weighted outcome tables and sampling (`Distribution`)
//! - The immutable chain built from a corpus (`ChainModel`)
//! - Bounded quote generation (`Generator`)

/// Newline-delimited corpus reader and whitespace tokenizer.
pub mod corpus;

/// Ordered outcome -> count table with weighted random sampling.
///
/// Used for both the sentence-opener table and each word's transitions.
pub mod distribution;

/// Single-pass chain builder, accessors, and `postcard` snapshots.
pub mod chain_model;

/// Quote generation over a borrowed `ChainModel`.
///
/// Draws an opener, follows weighted transitions, stops on the end
/// marker or the word cap.
pub mod generator;
