use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Reads a wordset file and returns its non-blank lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Lines that are empty after trimming are dropped
pub(crate) fn read_nonblank_lines<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Counts the non-blank lines of a file without keeping them in memory.
///
/// Blank lines are skipped here exactly as in `read_nonblank_lines` and
/// `nonblank_line_at`, so the three helpers always agree on the index space.
pub(crate) fn count_nonblank_lines<P: AsRef<Path>>(filename: P) -> io::Result<usize> {
	let reader = BufReader::new(File::open(filename)?);
	let mut count = 0;
	for line in reader.lines() {
		if !line?.trim().is_empty() {
			count += 1;
		}
	}
	Ok(count)
}

/// Returns the `index`-th non-blank line of a file (zero-based).
///
/// Streams the file once per call; nothing is cached between calls.
///
/// # Returns
/// - `Ok(Some(line))` when the file holds at least `index + 1` non-blank lines
/// - `Ok(None)` when it does not
pub(crate) fn nonblank_line_at<P: AsRef<Path>>(filename: P, index: usize) -> io::Result<Option<String>> {
	let reader = BufReader::new(File::open(filename)?);
	let mut seen = 0;
	for line in reader.lines() {
		let line = line?;
		let trimmed = line.trim();
		if trimmed.is_empty() {
			continue;
		}
		if seen == index {
			return Ok(Some(trimmed.to_owned()));
		}
		seen += 1;
	}
	Ok(None)
}
