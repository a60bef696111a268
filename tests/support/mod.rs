#![allow(dead_code)]

pub mod http;

use std::fs;
use std::path::{Path, PathBuf};

/// Write `contents` to `name` under `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

/// Data rows of a CSV file (header excluded), split on commas.
///
/// Only for fixtures without quoted fields.
pub fn csv_rows(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .expect("read csv")
        .lines()
        .skip(1)
        .map(|line| line.split(',').map(str::to_owned).collect())
        .collect()
}
