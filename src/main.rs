use std::{fs::File, io::BufWriter, path::PathBuf, process::ExitCode};

use clap::Parser;
use unidb_logging::{log_error, log_info, set_logger, LogCategory, LogLevel, Logger};
use unidb_ucd_builder::{build_database, BuildError, BuildOptions};
use unidb_unicode_info::UnicodeVersion;

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

static LOGGER: Logger = Logger::new();

/// Build a unicode character database file from the UCD and Unihan text files
#[derive(Parser, Debug)]
#[command(name = "unidb", version, about = "Build a unicode character database file from the UCD and Unihan text files")]
struct BuildSettings {
    /// Directory containing the extracted UCD text files
    #[arg(long, env = "UNIDB_UCD_DIR", default_value = "UCD")]
    ucd_dir: PathBuf,

    /// Directory containing the extracted Unihan text files, ideographs are left out when not set
    #[arg(long, env = "UNIDB_UNIHAN_DIR")]
    unihan_dir: Option<PathBuf>,

    /// Path of the database file to write
    #[arg(long, short, env = "UNIDB_OUTPUT", default_value = "ucd.dat")]
    output: PathBuf,

    /// Write the database without deflate compression
    #[arg(long)]
    no_compress: bool,

    /// Unicode version to store (e.g. 15.1), overrides the version found in DerivedCoreProperties.txt
    #[arg(long)]
    unicode_version: Option<UnicodeVersion>,

    /// Additionally write the log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn setup_logger(settings: &BuildSettings) {
    set_logger(&LOGGER);
    if settings.verbose {
        LOGGER.set_max_level(LogLevel::Verbose);
    }

    if let Some(path) = &settings.log_file {
        match File::create(path) {
            Ok(file) => _ = LOGGER.add_writer(Box::new(file)),
            Err(err) => log_error!(LOG_CAT, "Failed to create log file '{}': {err}", path.display()),
        }
    }
}

fn run(settings: &BuildSettings) -> Result<(), BuildError> {
    let options = BuildOptions {
        ucd_dir: settings.ucd_dir.clone(),
        unihan_dir: settings.unihan_dir.clone(),
        unicode_version: settings.unicode_version,
    };
    let db = build_database(&options)?;

    let file = File::create(&settings.output)?;
    db.write_to(BufWriter::new(file), !settings.no_compress)?;
    log_info!(LOG_CAT, "Wrote unicode {} database to '{}'{}", db.unicode_version(), settings.output.display(),
        if settings.no_compress { "" } else { " (compressed)" });
    Ok(())
}

fn main() -> ExitCode {
    let settings = BuildSettings::parse();
    setup_logger(&settings);

    let result = run(&settings);
    if let Err(err) = &result {
        if err.is_source_data_inconsistency() {
            log_error!(LOG_CAT, "Invalid source data: {err}");
        } else {
            log_error!(LOG_CAT, "Failed to build the database: {err}");
        }
    }
    LOGGER.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
