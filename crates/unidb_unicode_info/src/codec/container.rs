//! Database file layout.
//!
//! ```text
//! "UCD" | format version (u8) | unicode major (u16) | unicode minor (u8)
//! character count | character records...
//! block count     | block records...
//! ideograph count | ideograph records...
//! ```
//!
//! Counts use the code point encoding, except for the block count of format version 1, which is a single byte.

use crate::{
	codec::{
		primitive::{ByteReader, ByteWriter},
		records,
	},
	data::*,
	error::{Error, Result},
	range::MAX_CODE_POINT,
};

/// Magic tag at the start of every uncompressed database.
pub const MAGIC: &[u8; 3] = b"UCD";

/// Format version with a single byte block count.
pub const FORMAT_VERSION_1: u8 = 1;
/// Format version with a code point encoded block count.
pub const FORMAT_VERSION_2: u8 = 2;

/// Decoded content of a database file.
pub struct Tables {
	pub version:    UnicodeVersion,
	pub characters: Vec<CharacterRecord>,
	pub blocks:     Vec<BlockRecord>,
	pub ideographs: Vec<IdeographRecord>,
}

/// Get the format version needed to store `block_count` blocks.
pub fn format_version_for(block_count: usize) -> u8 {
	if block_count <= u8::MAX as usize {
		FORMAT_VERSION_1
	} else {
		FORMAT_VERSION_2
	}
}

fn write_count(writer: &mut ByteWriter, what: &'static str, count: usize) -> Result<()> {
	let max = super::primitive::MAX_ENCODED_CODE_POINT as usize;
	if count > max {
		return Err(Error::TooMany { what, count, max });
	}
	writer.write_code_point(count as u32)
}

/// Encode the tables into an uncompressed database image.
pub fn write_tables(
	writer: &mut ByteWriter,
	version: UnicodeVersion,
	characters: &[CharacterRecord],
	blocks: &[BlockRecord],
	ideographs: &[IdeographRecord],
) -> Result<()> {
	let format_version = format_version_for(blocks.len());

	writer.write_bytes(MAGIC);
	writer.write_u8(format_version);
	writer.write_u16(version.major);
	writer.write_u8(version.minor);

	write_count(writer, "characters", characters.len())?;
	for record in characters {
		records::write_character(writer, record)?;
	}

	if format_version == FORMAT_VERSION_1 {
		writer.write_u8(blocks.len() as u8);
	} else {
		write_count(writer, "blocks", blocks.len())?;
	}
	for block in blocks {
		records::write_block(writer, block)?;
	}

	write_count(writer, "ideographs", ideographs.len())?;
	for record in ideographs {
		records::write_ideograph(writer, record)?;
	}
	Ok(())
}

/// Read `count` records, without trusting the count for the initial allocation.
fn read_records<T>(reader: &mut ByteReader, count: usize, read: fn(&mut ByteReader) -> Result<T>) -> Result<Vec<T>> {
	let mut records = Vec::with_capacity(count.min(reader.remaining()));
	for _ in 0..count {
		records.push(read(reader)?);
	}
	Ok(records)
}

/// Decode an uncompressed database image.
///
/// Only the encoding is checked here, table ordering is validated when building the database.
pub fn read_tables(data: &[u8]) -> Result<Tables> {
	let mut reader = ByteReader::new(data);

	if reader.remaining() < MAGIC.len() || reader.read_bytes(MAGIC.len())? != MAGIC {
		return Err(Error::InvalidMagic);
	}

	let format_version = reader.read_u8()?;
	if format_version != FORMAT_VERSION_1 && format_version != FORMAT_VERSION_2 {
		return Err(Error::UnsupportedVersion(format_version));
	}

	let major = reader.read_u16()?;
	let minor = reader.read_u8()?;

	let count = reader.read_code_point()? as usize;
	let characters = read_records(&mut reader, count, records::read_character)?;

	let count = if format_version == FORMAT_VERSION_1 {
		reader.read_u8()? as usize
	} else {
		reader.read_code_point()? as usize
	};
	let blocks = read_records(&mut reader, count, records::read_block)?;

	let count = reader.read_code_point()? as usize;
	let ideographs = read_records(&mut reader, count, records::read_ideograph)?;

	if !reader.is_at_end() {
		return Err(Error::TrailingData);
	}

	Ok(Tables {
		version: UnicodeVersion::new(major, minor),
		characters,
		blocks,
		ideographs,
	})
}

/// Length of the longest prefix of `characters` where the record at index `i` contains code point `i`.
pub fn contiguous_len(characters: &[CharacterRecord]) -> usize {
	characters.iter()
		.enumerate()
		.take_while(|(idx, record)| record.range.contains(*idx as u32))
		.count()
}

fn check_code_point(code_point: u32) -> Result<()> {
	if code_point > MAX_CODE_POINT {
		Err(Error::InvalidValue { kind: "code point", value: code_point })
	} else {
		Ok(())
	}
}

/// Check that the tables are strictly increasing, that no entries overlap and that every code point is at most U+10FFFF.
pub fn validate_order(characters: &[CharacterRecord], blocks: &[BlockRecord], ideographs: &[IdeographRecord]) -> Result<()> {
	if let Some(index) = characters.windows(2).position(|pair| pair[0].range.last() >= pair[1].range.first()) {
		return Err(Error::UnorderedTable { table: "character", index: index + 1 });
	}
	if let Some(index) = blocks.windows(2).position(|pair| pair[0].range.last() >= pair[1].range.first()) {
		return Err(Error::UnorderedTable { table: "block", index: index + 1 });
	}
	if let Some(index) = ideographs.windows(2).position(|pair| pair[0].code_point >= pair[1].code_point) {
		return Err(Error::UnorderedTable { table: "ideograph", index: index + 1 });
	}

	// Tables are ordered, so only the last entry can end past the code point range
	if let Some(record) = characters.last() {
		check_code_point(record.range.last())?;
	}
	if let Some(block) = blocks.last() {
		check_code_point(block.range.last())?;
	}
	if let Some(record) = ideographs.last() {
		check_code_point(record.code_point)?;
	}
	for code_point in characters.iter().flat_map(|record| record.cross_references.iter()) {
		check_code_point(*code_point)?;
	}
	Ok(())
}
