//! Unicode character database.
//!
//! Character properties from the UCD, block names and Unihan data for ideographs, stored in a compact binary file and queried in memory.
//!
//! The free functions in this crate query the global database, which is loaded on first use from the file named by `UNIDB_DATA_PATH` (`ucd.dat` by default).
//! Use [`UnicodeDatabase`] directly to work with a database that is not global.

use unidb_logging::LogCategory;

mod error;
pub use error::*;

mod range;
pub use range::*;

mod properties;
pub use properties::*;

mod data;
pub use data::*;

pub mod codec;

mod hangul;
pub use hangul::{is_hangul_syllable, name_for_hangul};

mod char_info;
pub use char_info::CharInfo;

mod database;
pub use database::{UnicodeDatabase, NO_BLOCK};

pub mod global;

pub const LOG_CAT: LogCategory = LogCategory::new("UnicodeInfo");

/// Get all information about a code point.
pub fn get_char_info(code_point: u32) -> CharInfo<'static> {
	global::database().get_char_info(code_point)
}

/// Get the general category of a code point.
pub fn get_category(code_point: u32) -> Category {
	global::database().get_category(code_point)
}

/// Get the name of a code point.
pub fn get_name(code_point: u32) -> Option<String> {
	global::database().get_name(code_point)
}

/// Get the name of the block containing a code point, or "No_Block".
pub fn get_block_name(code_point: u32) -> &'static str {
	global::database().get_block_name(code_point)
}

/// Get text that can be used to display a code point.
pub fn get_display_text(code_point: u32) -> String {
	global::database().get_display_text(code_point)
}

/// Get all blocks.
pub fn get_blocks() -> Vec<BlockRecord> {
	global::database().get_blocks()
}

/// Get the unicode version of the global database.
pub fn unicode_version() -> UnicodeVersion {
	global::database().unicode_version()
}
