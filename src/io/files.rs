//! Locating return and table files on disk

use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use rayon::prelude::*;

use crate::error::Result;
use crate::utils::{log_operation_complete, log_operation_start, log_warning, validate_directory};

/// Find all `.xml` files below `dir`, recursively, sorted by path
///
/// # Errors
/// Returns an error if `dir` is not a directory or cannot be read
pub fn find_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    find_files(dir, "xml")
}

/// Find all `.parquet` files directly in `dir`, sorted by path
pub fn find_parquet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    validate_directory(dir)?;
    let files = fs::read_dir(dir)?
        .par_bridge()
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .filter(|path| path.is_file() && has_extension(path, "parquet"))
        .sorted()
        .collect();
    Ok(files)
}

fn find_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    log_operation_start("Searching for return files in", dir);
    validate_directory(dir)?;

    let mut pending = vec![dir.to_path_buf()];
    let mut found = Vec::new();
    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if has_extension(&path, extension) {
                found.push(path);
            }
        }
    }

    let found: Vec<PathBuf> = found.into_iter().sorted().collect();
    if found.is_empty() {
        log_warning("No return files found in directory", Some(dir));
    } else {
        log_operation_complete("Found", dir, found.len(), "return files", None);
    }
    Ok(found)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_xml_files_recurses_and_sorts() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("2019/b")).expect("mkdir");
        fs::write(dir.path().join("2019/b/2_public.xml"), "<Return/>").expect("write");
        fs::write(dir.path().join("2019/1_public.XML"), "<Return/>").expect("write");
        fs::write(dir.path().join("index.csv"), "").expect("write");

        let files = find_xml_files(dir.path()).expect("find");
        let names: Vec<String> = files
            .iter()
            .map(|path| path.strip_prefix(dir.path()).expect("prefix").display().to_string())
            .collect();
        assert_eq!(names, vec!["2019/1_public.XML", "2019/b/2_public.xml"]);
    }

    #[test]
    fn test_missing_directory_fails() {
        assert!(find_xml_files(Path::new("/no/such/returns")).is_err());
    }
}
