use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use rand::SeedableRng;
use rand::rngs::StdRng;
use truism_core::TruismError;
use truism_core::config::DisplayConfig;
use truism_core::layout::wrap;
use truism_core::model::chain_model::ChainModel;
use truism_core::model::corpus::Corpus;
use truism_core::model::generator::{Generator, MAX_QUOTE_WORDS};

fn corpus_path() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/quotes.txt")
}

fn scratch_dir(name: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("truism-{name}-{}", std::process::id()));
	std::fs::create_dir_all(&dir).unwrap();
	dir
}

#[test]
fn sample_corpus_generates_bounded_quotes() {
	let model = ChainModel::from_path(corpus_path()).unwrap();
	let corpus = Corpus::read(corpus_path()).unwrap();
	let openers: HashSet<&str> = corpus.sentences().map(|s| s[0].as_str()).collect();

	let generator = Generator::new(&model);
	let mut rng = StdRng::seed_from_u64(1984);
	for _ in 0..500 {
		let quote = generator.generate(&mut rng).unwrap();
		assert!((1..=MAX_QUOTE_WORDS).contains(&quote.len()));
		assert!(openers.contains(quote.words()[0].as_str()));
	}
}

#[test]
fn generated_quotes_wrap_within_the_panel() {
	let model = ChainModel::from_path(corpus_path()).unwrap();
	let layout = DisplayConfig::default().layout().unwrap();
	let generator = Generator::new(&model);
	let mut rng = StdRng::seed_from_u64(7);

	for _ in 0..200 {
		let text = generator.generate(&mut rng).unwrap().to_string();
		let wrapped = wrap(&text, &layout);
		assert_eq!(wrapped.lines().join(" "), text);
		for line in wrapped.lines() {
			let px = line.chars().count() as u32 * 12;
			assert!(px <= layout.max_width_px() || !line.contains(' '));
		}
	}
}

#[test]
fn missing_corpus_is_unavailable() {
	let result = ChainModel::from_path("definitely/missing/quotes.txt");
	assert!(matches!(result, Err(TruismError::CorpusUnavailable(_))));
}

#[test]
fn empty_corpus_file_is_unavailable() {
	let dir = scratch_dir("empty");
	let path = dir.join("quotes.txt");
	std::fs::write(&path, "\n\n   \n").unwrap();

	let result = ChainModel::from_path(&path);
	assert!(matches!(result, Err(TruismError::CorpusUnavailable(_))));
	std::fs::remove_dir_all(dir).unwrap();
}

fn set_mtime(path: &Path, time: SystemTime) {
	File::options().write(true).open(path).unwrap().set_modified(time).unwrap();
}

#[test]
fn load_uses_a_fresh_snapshot() {
	let dir = scratch_dir("fresh");
	let path = dir.join("quotes.txt");
	std::fs::write(&path, "the cat sat\nthe dog ran\n").unwrap();

	// No snapshot yet: built from text, nothing written
	let built = ChainModel::load(&path).unwrap();
	assert!(!dir.join("quotes.bin").exists());

	let written = built.save_snapshot(&path).unwrap();
	assert_eq!(written, dir.join("quotes.bin"));

	let now = SystemTime::now();
	set_mtime(&path, now - Duration::from_secs(60));
	set_mtime(&written, now);
	assert_eq!(ChainModel::load(&path).unwrap(), built);

	// A fresh but corrupt snapshot is reported, not silently rebuilt
	std::fs::write(&written, b"not a chain").unwrap();
	set_mtime(&written, now);
	assert!(matches!(ChainModel::load(&path), Err(TruismError::Snapshot(_))));

	std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn load_rebuilds_after_the_corpus_changes() {
	let dir = scratch_dir("stale");
	let path = dir.join("quotes.txt");
	std::fs::write(&path, "old words here\n").unwrap();
	let snapshot = ChainModel::load(&path).unwrap().save_snapshot(&path).unwrap();

	std::fs::write(&path, "brand new corpus\n").unwrap();
	let now = SystemTime::now();
	set_mtime(&snapshot, now - Duration::from_secs(60));
	set_mtime(&path, now);

	let model = ChainModel::load(&path).unwrap();
	assert!(model.transitions("brand").is_some());
	assert!(model.transitions("old").is_none());

	std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn load_requires_the_corpus_even_with_a_snapshot() {
	let dir = scratch_dir("orphan");
	let path = dir.join("quotes.txt");
	std::fs::write(&path, "the cat sat\n").unwrap();
	ChainModel::load(&path).unwrap().save_snapshot(&path).unwrap();
	std::fs::remove_file(&path).unwrap();

	assert!(matches!(ChainModel::load(&path), Err(TruismError::CorpusUnavailable(_))));

	std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn non_breaking_space_survives_generate_and_wrap() {
	let model = ChainModel::build(&Corpus::parse("a\u{a0}b c")).unwrap();
	let layout = DisplayConfig::default().layout().unwrap();
	let mut rng = StdRng::seed_from_u64(3);

	let quote = Generator::new(&model).generate(&mut rng).unwrap();
	assert_eq!(quote.words(), ["a\u{a0}b", "c"]);
	assert_eq!(wrap(&quote.to_string(), &layout).lines().join(" "), quote.to_string());
}
