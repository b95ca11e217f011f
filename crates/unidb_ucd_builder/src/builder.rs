use std::{collections::BTreeMap, ops::Range};

use unidb_unicode_info::*;

use crate::error::{BuildError, Result};

/// Collects the records parsed from the source files and turns them into a database.
///
/// Character records must be inserted in increasing order, properties applied afterwards may split range records.
#[derive(Default)]
pub struct UnicodeInfoBuilder {
	version:    UnicodeVersion,
	characters: Vec<CharacterRecord>,
	blocks:     Vec<BlockRecord>,
	ideographs: BTreeMap<u32, IdeographRecord>,
}

impl UnicodeInfoBuilder {
	pub fn new(version: UnicodeVersion) -> Self {
		Self { version, ..Default::default() }
	}

	pub fn version(&self) -> UnicodeVersion {
		self.version
	}

	pub fn set_version(&mut self, version: UnicodeVersion) {
		self.version = version;
	}

	pub fn characters(&self) -> &[CharacterRecord] {
		&self.characters
	}

	pub fn blocks(&self) -> &[BlockRecord] {
		&self.blocks
	}

	pub fn ideograph(&self, code_point: u32) -> Option<&IdeographRecord> {
		self.ideographs.get(&code_point)
	}

	/// Add a character record after all previously inserted records.
	pub fn insert(&mut self, record: CharacterRecord) -> Result<()> {
		if let Some(last) = self.characters.last() {
			if last.range.last() >= record.range.first() {
				return Err(BuildError::Overlap(record.range.first()));
			}
		}
		self.characters.push(record);
		Ok(())
	}

	/// Add a block after all previously added blocks.
	pub fn add_block(&mut self, block: BlockRecord) -> Result<()> {
		if let Some(last) = self.blocks.last() {
			if last.range.last() >= block.range.first() {
				return Err(BuildError::Overlap(block.range.first()));
			}
		}
		self.blocks.push(block);
		Ok(())
	}

	/// Apply `f` to every record covering a part of `range`, records partially covered are split first.
	///
	/// Returns the number of records `f` was applied to, code points without a record are skipped.
	pub fn set_properties<F: FnMut(&mut CharacterRecord)>(&mut self, range: CodePointRange, mut f: F) -> usize {
		let indices = self.split_range(range);
		let count = indices.len();
		for record in &mut self.characters[indices] {
			f(record);
		}
		count
	}

	/// Get the record of a single code point, splitting it off from a range record when needed.
	pub fn character_mut(&mut self, code_point: u32) -> Option<&mut CharacterRecord> {
		let indices = self.split_range(CodePointRange::single(code_point));
		self.characters.get_mut(indices).and_then(|records| records.first_mut())
	}

	/// Get the Unihan record of a code point, creating it when it doesn't exist yet.
	pub fn ideograph_mut(&mut self, code_point: u32) -> &mut IdeographRecord {
		self.ideographs.entry(code_point).or_insert_with(|| IdeographRecord::new(code_point))
	}

	/// Split records so that `range` is covered by whole records and return their indices.
	fn split_range(&mut self, range: CodePointRange) -> Range<usize> {
		let mut start = self.characters.partition_point(|record| record.range.last() < range.first());
		if start < self.characters.len() && self.characters[start].range.first() < range.first() {
			self.split_at(start, range.first());
			start += 1;
		}

		let mut end = self.characters.partition_point(|record| record.range.last() < range.last());
		if end < self.characters.len() && self.characters[end].range.first() <= range.last() {
			if self.characters[end].range.last() > range.last() {
				self.split_at(end, range.last() + 1);
			}
			end += 1;
		}
		start..end.max(start)
	}

	/// Split the record at `idx` into `[first, at - 1]` and `[at, last]`.
	fn split_at(&mut self, idx: usize, at: u32) {
		let record = &mut self.characters[idx];
		let (Some(low), Some(high)) = (CodePointRange::new(record.range.first(), at - 1), CodePointRange::new(at, record.range.last())) else {
			return;
		};

		let mut upper = record.clone();
		record.range = low;
		upper.range = high;
		fix_split_name(record);
		fix_split_name(&mut upper);
		self.characters.insert(idx + 1, upper);
	}

	/// Validate all tables and create the database.
	pub fn build(self) -> Result<UnicodeDatabase> {
		let ideographs = self.ideographs.into_values().collect();
		Ok(UnicodeDatabase::new(self.version, self.characters, self.blocks, ideographs)?)
	}
}

/// A range record's name is a base name, once a single code point is split off it needs its full name.
fn fix_split_name(record: &mut CharacterRecord) {
	if record.range.is_single() {
		if let Some(base) = &record.name {
			record.name = Some(format!("{base}-{:04X}", record.range.first()));
		}
	}
}
