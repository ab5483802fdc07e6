use std::fs;
use std::path::{Path, PathBuf};

use irs990_schema::catalog::Catalog;
use irs990_schema::{Extractor, Filing, FilingRows, IngestConfig, Result};
use tempfile::TempDir;

/// Full Form 990 with Schedules A and O
pub const FULL_990: &str = "201913139349300001_public.xml";
/// Form 990-EZ
pub const FORM_990EZ: &str = "201923139349300102_public.xml";
/// Form 990-PF with two grants
pub const FORM_990PF: &str = "201933139349300203_public.xml";
/// 2010 schema version using the old element names
pub const OLD_990: &str = "201103139349300304_public.xml";
/// Header without a filer EIN
pub const MISSING_EIN: &str = "201943139349300405_public.xml";

/// Directory holding the sample returns
#[must_use]
pub fn returns_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("returns")
}

/// Path to one sample return
#[must_use]
pub fn return_file(name: &str) -> PathBuf {
    returns_dir().join(name)
}

/// Copy the named sample returns into a fresh temporary directory
pub fn returns_subset(names: &[&str]) -> std::io::Result<TempDir> {
    let dir = tempfile::tempdir()?;
    for name in names {
        fs::copy(return_file(name), dir.path().join(name))?;
    }
    Ok(dir)
}

/// Parse and extract one sample return with the default configuration
pub fn extract_return(name: &str) -> Result<FilingRows> {
    let filing = Filing::from_path(&return_file(name))?;
    Extractor::new(Catalog::global(), &IngestConfig::default()).extract(&filing)
}

/// Configuration used by tests: small batches, two workers
#[must_use]
pub fn test_config() -> IngestConfig {
    IngestConfig::default().with_batch_size(2).with_threads(2)
}
