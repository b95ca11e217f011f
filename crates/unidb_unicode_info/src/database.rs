use std::{
	fs,
	io::{Read, Write},
	path::Path,
};

use flate2::{read::DeflateDecoder, write::DeflateEncoder, Compression};
use unidb_logging::{log_info, log_verbose};

use crate::{
	char_info::{self, CharInfo},
	codec::{container, primitive::ByteWriter},
	data::*,
	error::{Error, Result},
	properties::Category,
	range::MAX_CODE_POINT,
	LOG_CAT,
};

/// Block name of code points outside every block.
pub const NO_BLOCK: &str = "No_Block";

fn inflate(data: &[u8]) -> Result<Vec<u8>> {
	let mut inflated = Vec::new();
	DeflateDecoder::new(data).read_to_end(&mut inflated).map_err(Error::from_inflate)?;
	Ok(inflated)
}

/// Immutable, in-memory unicode character database.
pub struct UnicodeDatabase {
	version:        UnicodeVersion,
	characters:     Vec<CharacterRecord>,
	blocks:         Vec<BlockRecord>,
	ideographs:     Vec<IdeographRecord>,
	/// Number of leading records where the record at index `i` contains code point `i`.
	contiguous_len: usize,
}

impl UnicodeDatabase {
	/// Create a database from its tables.
	///
	/// Every table must be strictly increasing without overlapping entries.
	pub fn new(version: UnicodeVersion, characters: Vec<CharacterRecord>, blocks: Vec<BlockRecord>, ideographs: Vec<IdeographRecord>) -> Result<Self> {
		container::validate_order(&characters, &blocks, &ideographs)?;
		let contiguous_len = container::contiguous_len(&characters);
		Ok(Self { version, characters, blocks, ideographs, contiguous_len })
	}

	/// Load a database from its binary form, either raw or deflate compressed.
	///
	/// Data starting with the magic tag is read as a raw image first. A deflate stream can start with the same bytes,
	/// so when that fails the data is inflated instead, and the raw error is returned if that does not give a database either.
	pub fn from_bytes(data: &[u8]) -> Result<Self> {
		let tables = if data.starts_with(container::MAGIC) {
			match container::read_tables(data) {
				Ok(tables) => tables,
				Err(err) => match inflate(data).and_then(|inflated| container::read_tables(&inflated)) {
					Ok(tables) => tables,
					Err(_) => return Err(err),
				},
			}
		} else {
			container::read_tables(&inflate(data)?)?
		};

		let db = Self::new(tables.version, tables.characters, tables.blocks, tables.ideographs)?;
		log_info!(LOG_CAT, "Loaded unicode {} database: {} characters, {} blocks, {} ideographs",
			db.version, db.characters.len(), db.blocks.len(), db.ideographs.len());
		log_verbose!(LOG_CAT, "Contiguous character prefix: {:?}", db.contiguous_boundary());
		Ok(db)
	}

	/// Load a database from a reader, either raw or deflate compressed.
	pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Load a database from a file, either raw or deflate compressed.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let data = fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Encode the database into its uncompressed binary form.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		let mut writer = ByteWriter::new();
		container::write_tables(&mut writer, self.version, &self.characters, &self.blocks, &self.ideographs)?;
		Ok(writer.into_inner())
	}

	/// Write the database, optionally deflate compressed.
	pub fn write_to<W: Write>(&self, writer: W, compress: bool) -> Result<()> {
		let data = self.to_bytes()?;
		if compress {
			let mut encoder = DeflateEncoder::new(writer, Compression::best());
			encoder.write_all(&data)?;
			encoder.finish()?.flush()?;
		} else {
			let mut writer = writer;
			writer.write_all(&data)?;
			writer.flush()?;
		}
		Ok(())
	}

	pub fn unicode_version(&self) -> UnicodeVersion {
		self.version
	}

	pub fn characters(&self) -> &[CharacterRecord] {
		&self.characters
	}

	pub fn blocks(&self) -> &[BlockRecord] {
		&self.blocks
	}

	pub fn ideographs(&self) -> &[IdeographRecord] {
		&self.ideographs
	}

	/// Get the last index of the contiguous prefix, i.e. the largest code point that is also its own index in the character table.
	pub fn contiguous_boundary(&self) -> Option<usize> {
		self.contiguous_len.checked_sub(1)
	}

	/// Find the character record covering a code point.
	pub fn find_character(&self, code_point: u32) -> Option<&CharacterRecord> {
		let idx = code_point as usize;
		if idx < self.contiguous_len {
			return Some(&self.characters[idx]);
		}
		if code_point > MAX_CODE_POINT {
			return None;
		}

		// Records cover at least one code point each, so the record for a code point past the contiguous prefix comes before index `code_point`
		let end = idx.min(self.characters.len());
		let candidates = self.characters.get(self.contiguous_len..end)?;
		candidates.binary_search_by(|record| record.range.compare_code_point(code_point))
			.ok()
			.map(|pos| &candidates[pos])
	}

	/// Find the Unihan record of a code point.
	pub fn find_ideograph(&self, code_point: u32) -> Option<&IdeographRecord> {
		let (first, last) = (self.ideographs.first()?, self.ideographs.last()?);
		if code_point < first.code_point || code_point > last.code_point {
			return None;
		}
		self.ideographs.binary_search_by_key(&code_point, |record| record.code_point)
			.ok()
			.map(|idx| &self.ideographs[idx])
	}

	/// Find the block containing a code point.
	pub fn find_block(&self, code_point: u32) -> Option<&BlockRecord> {
		self.blocks.binary_search_by(|block| block.range.compare_code_point(code_point))
			.ok()
			.map(|idx| &self.blocks[idx])
	}

	/// Get all information about a code point.
	pub fn get_char_info(&self, code_point: u32) -> CharInfo<'_> {
		CharInfo::new(code_point, self.find_character(code_point), self.find_ideograph(code_point), self.get_block_name(code_point))
	}

	/// Get the general category, `OtherNotAssigned` for code points without a record.
	pub fn get_category(&self, code_point: u32) -> Category {
		self.find_character(code_point).map_or(Category::OtherNotAssigned, |record| record.category)
	}

	/// Get the name of a code point.
	pub fn get_name(&self, code_point: u32) -> Option<String> {
		char_info::resolve_name(code_point, self.find_character(code_point))
	}

	/// Get the name of the block containing the code point, or "No_Block".
	pub fn get_block_name(&self, code_point: u32) -> &str {
		self.find_block(code_point).map_or(NO_BLOCK, |block| block.name.as_str())
	}

	/// Get text that can be used to display the code point.
	pub fn get_display_text(&self, code_point: u32) -> String {
		char_info::display_text(code_point, self.get_category(code_point))
	}

	/// Get a copy of all blocks.
	pub fn get_blocks(&self) -> Vec<BlockRecord> {
		self.blocks.clone()
	}
}

impl std::fmt::Debug for UnicodeDatabase {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("UnicodeDatabase")
			.field("version", &self.version)
			.field("characters", &self.characters.len())
			.field("blocks", &self.blocks.len())
			.field("ideographs", &self.ideographs.len())
			.field("contiguous_len", &self.contiguous_len)
			.finish()
	}
}

impl TryFrom<&[u8]> for UnicodeDatabase {
	type Error = Error;

	fn try_from(data: &[u8]) -> Result<Self> {
		Self::from_bytes(data)
	}
}
