//! Line based reading of the UCD text files.

use std::{
	fs::File,
	io::{BufRead, BufReader},
	path::Path,
};

use unidb_unicode_info::CodePointRange;

use crate::error::{BuildError, Result};

/// A single data line, comments and empty lines never make it here.
#[derive(Clone, Copy, Debug)]
pub struct Line<'a> {
	pub file:   &'static str,
	pub number: usize,
	/// Full line without the line ending.
	pub text:   &'a str,
}

impl<'a> Line<'a> {
	/// Get the `;` separated fields of the line, without a trailing `#` comment.
	pub fn fields(&self) -> Vec<&'a str> {
		let data = self.text.split_once('#').map_or(self.text, |(data, _)| data);
		data.split(';').map(str::trim).collect()
	}

	/// Get the `;` separated fields of the line, with `expected` fields at minimum.
	pub fn fields_min(&self, expected: usize) -> Result<Vec<&'a str>> {
		let fields = self.fields();
		if fields.len() < expected {
			return Err(self.malformed(format!("expected {expected} fields, found {}", fields.len())));
		}
		Ok(fields)
	}

	pub fn malformed(&self, message: impl Into<String>) -> BuildError {
		BuildError::Malformed { file: self.file, line: self.number, message: message.into() }
	}

	pub fn unknown(&self, kind: &'static str, value: &str) -> BuildError {
		BuildError::UnknownValue { file: self.file, line: self.number, kind, value: value.to_string() }
	}

	/// Parse a hexadecimal code point, optionally prefixed with `U+`.
	pub fn code_point(&self, s: &str) -> Result<u32> {
		let hex = s.strip_prefix("U+").unwrap_or(s);
		match u32::from_str_radix(hex, 16) {
			Ok(code_point) if code_point <= unidb_unicode_info::MAX_CODE_POINT && !hex.is_empty() => Ok(code_point),
			_ => Err(self.malformed(format!("invalid code point '{s}'"))),
		}
	}

	/// Parse a `XXXX` or `XXXX..YYYY` code point range.
	pub fn range(&self, s: &str) -> Result<CodePointRange> {
		s.parse::<CodePointRange>().map_err(|_| BuildError::InvalidRange { file: self.file, line: self.number, text: s.to_string() })
	}
}

/// Call `f` for every data line of `reader`, skipping empty lines and `#` comment lines.
pub fn parse_lines<R, F>(file: &'static str, reader: R, f: F) -> Result<()>
where
	R: BufRead,
	F: FnMut(Line) -> Result<()>,
{
	parse_lines_from(file, 0, reader, f)
}

/// Same as [`parse_lines`], for a reader of which the first `lines_read` lines were already consumed.
pub fn parse_lines_from<R, F>(file: &'static str, lines_read: usize, reader: R, mut f: F) -> Result<()>
where
	R: BufRead,
	F: FnMut(Line) -> Result<()>,
{
	for (idx, text) in reader.lines().enumerate() {
		let text = text?;
		let trimmed = text.trim();
		if trimmed.is_empty() || trimmed.starts_with('#') {
			continue;
		}

		f(Line { file, number: lines_read + idx + 1, text: text.trim_end_matches('\r') })?;
	}
	Ok(())
}

/// Open a source file in `dir`.
pub fn open_source(dir: &Path, file: &str) -> Result<BufReader<File>> {
	let path = dir.join(file);
	if !path.is_file() {
		return Err(BuildError::MissingFile(path));
	}
	Ok(BufReader::new(File::open(path)?))
}

/// Turn a list of space separated hexadecimal code points into the string they represent.
pub fn code_points_to_string(line: &Line, s: &str) -> Result<String> {
	s.split_whitespace()
		.map(|hex| {
			let code_point = line.code_point(hex)?;
			char::from_u32(code_point).ok_or_else(|| line.malformed(format!("U+{code_point:04X} is not a character")))
		})
		.collect()
}
