//! Configuration for XML ingestion and Parquet output.

use std::env;
use std::str::FromStr;

use parquet::basic::{Compression, ZstdLevel};

/// Default number of rows buffered per table before a batch is written
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Date formats accepted in returns, tried in order
pub const DEFAULT_DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Format dates are stored in
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Compression codec for Parquet output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputCompression {
    None,
    #[default]
    Snappy,
    Zstd,
}

impl OutputCompression {
    /// The Parquet codec for this setting
    #[must_use]
    pub fn to_parquet(self) -> Compression {
        match self {
            OutputCompression::None => Compression::UNCOMPRESSED,
            OutputCompression::Snappy => Compression::SNAPPY,
            OutputCompression::Zstd => Compression::ZSTD(ZstdLevel::default()),
        }
    }
}

impl FromStr for OutputCompression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "uncompressed" => Ok(OutputCompression::None),
            "snappy" => Ok(OutputCompression::Snappy),
            "zstd" => Ok(OutputCompression::Zstd),
            other => Err(format!("unknown compression '{other}'")),
        }
    }
}

/// Settings for parsing returns and writing tables
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Fail a filing on the first invalid value instead of recording an issue
    pub strict: bool,
    /// Rows buffered per table before a record batch is written
    pub batch_size: usize,
    /// Worker threads used for parsing
    pub threads: usize,
    /// Input date formats, tried in order
    pub date_formats: Vec<String>,
    /// Parquet compression
    pub compression: OutputCompression,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            strict: false,
            batch_size: DEFAULT_BATCH_SIZE,
            threads: num_cpus::get(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(ToString::to_string).collect(),
            compression: OutputCompression::default(),
        }
    }
}

impl IngestConfig {
    /// Defaults overridden by `IRS990_STRICT`, `IRS990_BATCH_SIZE`,
    /// `IRS990_THREADS` and `IRS990_COMPRESSION`
    ///
    /// Invalid values are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Defaults overridden by the variables `lookup` resolves
    ///
    /// `IRS990_STRICT` accepts the values [`parse_flag`] does.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(strict) = lookup_value(&lookup, "IRS990_STRICT", parse_flag) {
            config.strict = strict;
        }
        let count = |raw: &str| raw.parse::<usize>().ok().filter(|&n| n > 0);
        if let Some(batch_size) = lookup_value(&lookup, "IRS990_BATCH_SIZE", count) {
            config.batch_size = batch_size;
        }
        if let Some(threads) = lookup_value(&lookup, "IRS990_THREADS", count) {
            config.threads = threads;
        }
        let compression = |raw: &str| raw.parse::<OutputCompression>().ok();
        if let Some(compression) = lookup_value(&lookup, "IRS990_COMPRESSION", compression) {
            config.compression = compression;
        }
        config
    }

    /// Switch strict mode
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the batch size; zero keeps the current value
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        if batch_size > 0 {
            self.batch_size = batch_size;
        }
        self
    }

    /// Set the worker thread count; zero keeps the current value
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        if threads > 0 {
            self.threads = threads;
        }
        self
    }
}

/// Parse an on/off setting
///
/// Accepts `1`/`0`, `true`/`false`, `yes`/`no` and `on`/`off` in any case.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn lookup_value<T>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = lookup(name)?;
    let value = parse(raw.trim());
    if value.is_none() {
        log::warn!("Ignoring invalid {name}={raw}");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IngestConfig::default();
        assert!(!config.strict);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert!(config.threads >= 1);
        assert_eq!(config.date_formats[0], STORED_DATE_FORMAT);
    }

    #[test]
    fn test_builders_ignore_zero() {
        let config = IngestConfig::default().with_batch_size(0).with_threads(2);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.threads, 2);
    }

    #[test]
    fn test_flag_parsing() {
        for raw in ["1", "true", "YES", " on "] {
            assert_eq!(parse_flag(raw), Some(true), "{raw}");
        }
        for raw in ["0", "False", "no", "OFF"] {
            assert_eq!(parse_flag(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_lookup_overrides() {
        let vars = [
            ("IRS990_STRICT", "1"),
            ("IRS990_BATCH_SIZE", "500"),
            ("IRS990_THREADS", "0"),
            ("IRS990_COMPRESSION", "zstd"),
        ];
        let config = IngestConfig::from_lookup(|name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        });
        assert!(config.strict);
        assert_eq!(config.batch_size, 500);
        assert_eq!(config.threads, IngestConfig::default().threads);
        assert_eq!(config.compression, OutputCompression::Zstd);

        let lenient = IngestConfig::from_lookup(|name| {
            (name == "IRS990_STRICT").then(|| "no".to_string())
        });
        assert!(!lenient.strict);
        let invalid = IngestConfig::from_lookup(|name| {
            (name == "IRS990_STRICT").then(|| "sometimes".to_string())
        });
        assert!(!invalid.strict);
    }

    #[test]
    fn test_compression_parsing() {
        assert_eq!("ZSTD".parse::<OutputCompression>(), Ok(OutputCompression::Zstd));
        assert_eq!(
            OutputCompression::None.to_parquet(),
            Compression::UNCOMPRESSED
        );
        assert!("lz5".parse::<OutputCompression>().is_err());
    }
}
