//! `NameAliases.txt`: formal name aliases.

use std::io::BufRead;

use unidb_base::EnumFromNameT;
use unidb_logging::{log_info, log_warning};
use unidb_unicode_info::{codec::records::MAX_NAME_ALIASES, NameAlias, NameAliasKind};

use crate::{
	builder::UnicodeInfoBuilder,
	error::Result,
	source,
	LOG_CAT,
};

pub const FILE: &str = "NameAliases.txt";

pub fn process<R: BufRead>(reader: R, builder: &mut UnicodeInfoBuilder) -> Result<()> {
	let mut count = 0;
	source::parse_lines(FILE, reader, |line| {
		let fields = line.fields_min(3)?;
		let code_point = line.code_point(fields[0])?;
		let kind = NameAliasKind::parse(fields[2]).ok_or_else(|| line.unknown("name alias kind", fields[2]))?;
		if fields[1].is_empty() {
			return Err(line.malformed("empty name alias"));
		}

		let Some(record) = builder.character_mut(code_point) else {
			log_warning!(LOG_CAT, "{FILE}:{}: alias '{}' for U+{code_point:04X}, which has no character record", line.number, fields[1]);
			return Ok(());
		};
		if record.name_aliases.len() == MAX_NAME_ALIASES {
			log_warning!(LOG_CAT, "{FILE}:{}: U+{code_point:04X} has more than {MAX_NAME_ALIASES} aliases, '{}' is dropped", line.number, fields[1]);
			return Ok(());
		}

		record.name_aliases.push(NameAlias { name: fields[1].to_string(), kind });
		count += 1;
		Ok(())
	})?;

	log_info!(LOG_CAT, "Added {count} name aliases from {FILE}");
	Ok(())
}
