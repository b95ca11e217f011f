//! `PropList.txt` and `DerivedCoreProperties.txt`: binary properties stored as flag sets.

use std::{collections::BTreeSet, io::BufRead, ops::BitOrAssign};

use unidb_logging::{log_debug, log_info, log_verbose};
use unidb_unicode_info::*;

use crate::{
	builder::UnicodeInfoBuilder,
	error::Result,
	source::{self, Line},
	LOG_CAT,
};

pub const PROP_LIST_FILE: &str = "PropList.txt";
pub const DERIVED_CORE_PROPERTIES_FILE: &str = "DerivedCoreProperties.txt";

/// Parse a `# DerivedCoreProperties-15.1.0.txt` style header into its unicode version.
pub fn parse_version_header(header: &str) -> Option<UnicodeVersion> {
	let name = header.trim().strip_prefix('#')?.trim();
	let version = name.strip_suffix(".txt")?.rsplit_once('-')?.1;
	version.parse().ok()
}

/// Apply a single property line, lines naming a property outside of the stored set are collected in `skipped`.
fn apply_property<T>(
	line: &Line,
	builder: &mut UnicodeInfoBuilder,
	skipped: &mut BTreeSet<String>,
	parse: fn(&str) -> Option<T>,
	field: fn(&mut CharacterRecord) -> &mut T,
) -> Result<()>
where
	T: Copy + BitOrAssign,
{
	let fields = line.fields_min(2)?;
	let range = line.range(fields[0])?;

	// Non-binary properties have a value field, e.g. `InCB; Linker`
	let property = match parse(fields[1]) {
		Some(property) if fields.len() == 2 => property,
		_ => {
			skipped.insert(fields[1].to_string());
			return Ok(());
		}
	};

	if builder.set_properties(range, |record| *field(record) |= property) == 0 {
		log_debug!(LOG_CAT, "{}:{}: no character records in {range} for '{}'", line.file, line.number, fields[1]);
	}
	Ok(())
}

fn contributory_of(record: &mut CharacterRecord) -> &mut ContributoryProperties {
	&mut record.contributory_properties
}

fn core_of(record: &mut CharacterRecord) -> &mut CoreProperties {
	&mut record.core_properties
}

fn log_skipped(file: &str, skipped: &BTreeSet<String>) {
	if !skipped.is_empty() {
		let names = skipped.iter().map(String::as_str).collect::<Vec<_>>();
		log_verbose!(LOG_CAT, "{file}: skipped properties: {}", names.join(", "));
	}
}

/// Apply the contributory properties from `PropList.txt`.
pub fn process_prop_list<R: BufRead>(reader: R, builder: &mut UnicodeInfoBuilder) -> Result<()> {
	let mut skipped = BTreeSet::new();
	source::parse_lines(PROP_LIST_FILE, reader, |line| {
		apply_property(&line, builder, &mut skipped, ContributoryProperties::parse, contributory_of)
	})?;

	log_skipped(PROP_LIST_FILE, &skipped);
	log_info!(LOG_CAT, "Applied contributory properties from {PROP_LIST_FILE}");
	Ok(())
}

/// Apply the core properties from `DerivedCoreProperties.txt`, returning the unicode version from its header.
pub fn process_derived_core_properties<R: BufRead>(mut reader: R, builder: &mut UnicodeInfoBuilder) -> Result<Option<UnicodeVersion>> {
	let mut header = String::new();
	reader.read_line(&mut header)?;
	let version = parse_version_header(&header);

	let mut skipped = BTreeSet::new();
	source::parse_lines_from(DERIVED_CORE_PROPERTIES_FILE, 1, reader, |line| {
		apply_property(&line, builder, &mut skipped, CoreProperties::parse, core_of)
	})?;

	log_skipped(DERIVED_CORE_PROPERTIES_FILE, &skipped);
	log_info!(LOG_CAT, "Applied core properties from {DERIVED_CORE_PROPERTIES_FILE}");
	Ok(version)
}
