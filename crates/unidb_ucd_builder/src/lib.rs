//! Builds a [`UnicodeDatabase`] from the text files of the Unicode Character Database and, optionally, the Unihan database.
//!
//! Only local directories are read, the files need to be downloaded and extracted beforehand.

use std::path::{Path, PathBuf};

use unidb_logging::{log_info, LogCategory};
use unidb_unicode_info::{UnicodeDatabase, UnicodeVersion};

mod error;
pub use error::*;

pub mod source;

mod builder;
pub use builder::UnicodeInfoBuilder;

pub mod unicode_data;
pub mod properties;
pub mod name_aliases;
pub mod names_list;
pub mod blocks;
pub mod unihan;

pub const LOG_CAT: LogCategory = LogCategory::new_with_sub("UnicodeInfo", "Builder");

/// UCD files needed to build a database.
pub const UCD_FILES: [&str; 6] = [
	unicode_data::FILE,
	properties::PROP_LIST_FILE,
	properties::DERIVED_CORE_PROPERTIES_FILE,
	name_aliases::FILE,
	names_list::FILE,
	blocks::FILE,
];

/// Unihan files needed when ideograph data is included.
pub const UNIHAN_FILES: [&str; 3] = [
	unihan::NUMERIC_VALUES_FILE,
	unihan::READINGS_FILE,
	unihan::VARIANTS_FILE,
];

/// Where to find the source files and how to interpret them.
#[derive(Clone, Debug)]
pub struct BuildOptions {
	/// Directory with the UCD text files.
	pub ucd_dir:         PathBuf,
	/// Directory with the Unihan text files, no ideograph data is included when `None`.
	pub unihan_dir:      Option<PathBuf>,
	/// Unicode version to store, instead of the one from the `DerivedCoreProperties.txt` header.
	pub unicode_version: Option<UnicodeVersion>,
}

fn check_files(dir: &Path, files: &[&str]) -> Result<()> {
	match files.iter().map(|file| dir.join(file)).find(|path| !path.is_file()) {
		Some(path) => Err(BuildError::MissingFile(path)),
		None => Ok(()),
	}
}

/// Parse all source files into a builder.
pub fn parse_sources(options: &BuildOptions) -> Result<UnicodeInfoBuilder> {
	let ucd_dir = options.ucd_dir.as_path();
	check_files(ucd_dir, &UCD_FILES)?;
	if let Some(unihan_dir) = &options.unihan_dir {
		check_files(unihan_dir, &UNIHAN_FILES)?;
	}

	let mut builder = UnicodeInfoBuilder::default();

	log_info!(LOG_CAT, "Reading UCD files from '{}'", ucd_dir.display());
	unicode_data::process(source::open_source(ucd_dir, unicode_data::FILE)?, &mut builder)?;
	properties::process_prop_list(source::open_source(ucd_dir, properties::PROP_LIST_FILE)?, &mut builder)?;
	let file_version = properties::process_derived_core_properties(source::open_source(ucd_dir, properties::DERIVED_CORE_PROPERTIES_FILE)?, &mut builder)?;
	name_aliases::process(source::open_source(ucd_dir, name_aliases::FILE)?, &mut builder)?;
	names_list::process(source::open_source(ucd_dir, names_list::FILE)?, &mut builder)?;
	blocks::process(source::open_source(ucd_dir, blocks::FILE)?, &mut builder)?;

	if let Some(unihan_dir) = &options.unihan_dir {
		log_info!(LOG_CAT, "Reading Unihan files from '{}'", unihan_dir.display());
		for file in UNIHAN_FILES {
			unihan::process(file, source::open_source(unihan_dir, file)?, &mut builder)?;
		}
	}

	let version = options.unicode_version.or(file_version).ok_or_else(|| BuildError::Malformed {
		file:    properties::DERIVED_CORE_PROPERTIES_FILE,
		line:    1,
		message: "no unicode version in the header, pass it explicitly instead".to_string(),
	})?;
	builder.set_version(version);
	Ok(builder)
}

/// Parse all source files and build the database.
pub fn build_database(options: &BuildOptions) -> Result<UnicodeDatabase> {
	let builder = parse_sources(options)?;
	let version = builder.version();
	let db = builder.build()?;
	log_info!(LOG_CAT, "Built unicode {version} database: {} characters, {} blocks, {} ideographs",
		db.characters().len(), db.blocks().len(), db.ideographs().len());
	Ok(db)
}
