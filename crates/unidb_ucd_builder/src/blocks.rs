//! `Blocks.txt`: named blocks of code points.

use std::io::BufRead;

use unidb_logging::log_info;
use unidb_unicode_info::BlockRecord;

use crate::{
	builder::UnicodeInfoBuilder,
	error::Result,
	source,
	LOG_CAT,
};

pub const FILE: &str = "Blocks.txt";

pub fn process<R: BufRead>(reader: R, builder: &mut UnicodeInfoBuilder) -> Result<()> {
	source::parse_lines(FILE, reader, |line| {
		let fields = line.fields_min(2)?;
		let range = line.range(fields[0])?;
		if fields[1].is_empty() {
			return Err(line.malformed("empty block name"));
		}
		builder.add_block(BlockRecord { range, name: fields[1].to_string() })
	})?;

	log_info!(LOG_CAT, "Added {} blocks from {FILE}", builder.blocks().len());
	Ok(())
}
