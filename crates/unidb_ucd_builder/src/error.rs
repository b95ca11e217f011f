use std::{io, path::PathBuf};
use thiserror::Error;

/// Error while turning the UCD and Unihan text files into a database.
#[derive(Error, Debug)]
pub enum BuildError {
	#[error("{file}:{line}: {message}")]
	Malformed { file: &'static str, line: usize, message: String },
	#[error("{file}:{line}: invalid code point range '{text}'")]
	InvalidRange { file: &'static str, line: usize, text: String },
	#[error("{file}:{line}: range end without a range start")]
	UnmatchedRangeEnd { file: &'static str, line: usize },
	#[error("{file}: range starting at U+{first:04X} is never closed")]
	UnterminatedRange { file: &'static str, first: u32 },
	#[error("{file}:{line}: unknown {kind} '{value}'")]
	UnknownValue { file: &'static str, line: usize, kind: &'static str, value: String },
	#[error("character records overlap at U+{0:04X}")]
	Overlap(u32),
	#[error("missing source file '{}'", .0.display())]
	MissingFile(PathBuf),
	#[error(transparent)]
	Io(#[from] io::Error),
	#[error("invalid database: {0}")]
	Database(#[from] unidb_unicode_info::Error),
}

impl BuildError {
	/// Check if the error comes from inconsistent or malformed source data.
	pub fn is_source_data_inconsistency(&self) -> bool {
		!matches!(self, BuildError::Io(_) | BuildError::Database(_))
	}
}

pub type Result<T> = core::result::Result<T, BuildError>;
