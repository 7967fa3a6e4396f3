/*!
 * Common test utilities for the sub2text test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample SubRip subtitle file for testing
pub fn create_test_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
"#;
    create_test_file(dir, filename, content)
}

/// Creates a sample WebVTT subtitle file for testing
pub fn create_test_webvtt(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"WEBVTT

00:00:01.000 --> 00:00:04.000
This is a test caption.

00:00:05.000 --> 00:00:09.000
It uses <i>web</i> timing lines.
"#;
    create_test_file(dir, filename, content)
}

/// The plain text expected from cleaning the sample SubRip file
pub const CLEANED_SUBTITLE_TEXT: &str =
    "This is a test subtitle. It contains multiple entries. For testing purposes.";

/// The plain text expected from cleaning the sample WebVTT file
pub const CLEANED_WEBVTT_TEXT: &str =
    "This is a test caption. It uses web timing lines.";
