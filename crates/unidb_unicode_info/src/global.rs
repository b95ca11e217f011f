//! Process-wide database, loaded once on first use.

use std::{
	env,
	path::{Path, PathBuf},
};

use once_cell::sync::OnceCell;
use unidb_logging::{log_info, log_severe};

use crate::{
	database::UnicodeDatabase,
	error::Result,
	LOG_CAT,
};

/// Environment variable overriding the path of the database file.
pub const DATA_PATH_VAR: &str = "UNIDB_DATA_PATH";
/// Database file used when `UNIDB_DATA_PATH` is not set.
pub const DEFAULT_DATA_PATH: &str = "ucd.dat";

static DATABASE: OnceCell<UnicodeDatabase> = OnceCell::new();

/// Get the path the global database is loaded from.
pub fn data_path() -> PathBuf {
	env::var_os(DATA_PATH_VAR).map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from)
}

/// Install an already loaded database as the global database.
///
/// Returns the database back when a global database is already set.
pub fn init(db: UnicodeDatabase) -> core::result::Result<(), UnicodeDatabase> {
	DATABASE.set(db)
}

/// Load the global database from a file, unless it is already loaded.
pub fn init_from_file<P: AsRef<Path>>(path: P) -> Result<&'static UnicodeDatabase> {
	DATABASE.get_or_try_init(|| {
		let path = path.as_ref();
		log_info!(LOG_CAT, "Loading unicode database from '{}'", path.display());
		UnicodeDatabase::from_file(path)
	})
}

/// Get the global database, loading it from [`data_path`] on first use.
pub fn try_database() -> Result<&'static UnicodeDatabase> {
	match DATABASE.get() {
		Some(db) => Ok(db),
		None => init_from_file(data_path()),
	}
}

/// Get the global database, loading it from [`data_path`] on first use.
///
/// # Panics
///
/// Panics when the database cannot be loaded.
pub fn database() -> &'static UnicodeDatabase {
	match try_database() {
		Ok(db) => db,
		Err(err) => {
			log_severe!(LOG_CAT, "Failed to load the unicode database from '{}': {err}", data_path().display());
			panic!("failed to load the unicode database: {err}");
		}
	}
}

/// Check if the global database has been loaded.
pub fn is_loaded() -> bool {
	DATABASE.get().is_some()
}
