use std::path::{Path, PathBuf};
use std::{fs, io};

/// Path of the `.bin` snapshot that goes with a corpus file.
///
/// Example:
/// `data/quotes.txt` → `data/quotes.bin`
pub(crate) fn snapshot_path<P: AsRef<Path>>(corpus_path: P) -> io::Result<PathBuf> {
	let corpus_path = corpus_path.as_ref();
	let stem = corpus_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Corpus path has no filename"))?;

	Ok(corpus_path.with_file_name(stem).with_extension("bin"))
}

/// Whether `derived` was modified at or after `source`.
///
/// A missing `derived` file is never fresh; a missing `source` is an error.
pub(crate) fn is_up_to_date<P: AsRef<Path>, Q: AsRef<Path>>(derived: P, source: Q) -> io::Result<bool> {
	let source_time = fs::metadata(source)?.modified()?;
	match fs::metadata(derived) {
		Ok(meta) => Ok(meta.modified()? >= source_time),
		Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
		Err(e) => Err(e),
	}
}
