//! `NamesList.txt`: cross references between characters.
//!
//! Only character entries (`XXXX<tab>NAME`) and their cross reference lines (`<tab>x ...`) are used.
//! https://www.unicode.org/Public/UCD/latest/ucd/NamesList.html

use std::io::BufRead;

use unidb_logging::{log_debug, log_info, log_warning};
use unidb_unicode_info::codec::records::MAX_CROSS_REFERENCES;

use crate::{
	builder::UnicodeInfoBuilder,
	error::Result,
	source::{self, Line},
	LOG_CAT,
};

pub const FILE: &str = "NamesList.txt";

/// Parse the target of a cross reference, either `(name - XXXX)` or a bare `XXXX`.
///
/// Returns `Ok(None)` for references to character sequences.
fn parse_cross_reference(line: &Line, reference: &str) -> Result<Option<u32>> {
	let reference = reference.trim();
	let hex = match reference.strip_prefix('(').and_then(|inner| inner.strip_suffix(')')) {
		Some(inner) => inner.rsplit_once(" - ").map(|(_, hex)| hex).ok_or_else(|| line.malformed(format!("invalid cross reference '{reference}'")))?,
		None if reference.contains(' ') => return Ok(None),
		None => reference,
	};
	line.code_point(hex.trim()).map(Some)
}

pub fn process<R: BufRead>(reader: R, builder: &mut UnicodeInfoBuilder) -> Result<()> {
	let mut current: Option<u32> = None;
	let mut count = 0;

	source::parse_lines(FILE, reader, |line| {
		let text = line.text.trim_start_matches('\u{FEFF}');
		if text.starts_with('\t') {
			let Some(reference) = text.trim_start().strip_prefix("x ") else {
				return Ok(());
			};
			let Some(code_point) = current else {
				return Err(line.malformed("cross reference outside of a character entry"));
			};
			let Some(target) = parse_cross_reference(&line, reference)? else {
				log_debug!(LOG_CAT, "{FILE}:{}: skipping sequence cross reference '{}'", line.number, reference.trim());
				return Ok(());
			};

			let Some(record) = builder.character_mut(code_point) else {
				log_warning!(LOG_CAT, "{FILE}:{}: cross reference for U+{code_point:04X}, which has no character record", line.number);
				return Ok(());
			};
			if record.cross_references.contains(&target) {
				return Ok(());
			}
			if record.cross_references.len() == MAX_CROSS_REFERENCES {
				log_warning!(LOG_CAT, "{FILE}:{}: U+{code_point:04X} has more than {MAX_CROSS_REFERENCES} cross references", line.number);
				return Ok(());
			}
			record.cross_references.push(target);
			count += 1;
		} else if text.starts_with('@') || text.starts_with(';') {
			// Block headers, subheaders and comments end the current character entry
			current = None;
		} else {
			let (hex, _) = text.split_once('\t').ok_or_else(|| line.malformed("expected a character entry"))?;
			current = Some(line.code_point(hex)?);
		}
		Ok(())
	})?;

	log_info!(LOG_CAT, "Added {count} cross references from {FILE}");
	Ok(())
}
