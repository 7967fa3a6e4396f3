/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use sub2text::file_utils::{FileManager, SubtitleFormat};
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(&temp_dir.path().to_path_buf(), "probe.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that dir_exists distinguishes directories from files
#[test]
fn test_dir_exists_withFileAndDir_shouldDistinguish() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(&temp_dir.path().to_path_buf(), "probe.tmp", "x")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&test_file));
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));

    Ok(())
}

/// Test that ensure_dir creates missing parents
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateAllParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b").join("c");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

/// Test that write_to_file then read_to_string round-trips content
#[test]
fn test_write_and_read_withContent_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("deep").join("out.txt");

    FileManager::write_to_file(&target, "converted text")?;

    assert_eq!(FileManager::read_to_string(&target)?, "converted text");
    Ok(())
}

/// Test that write_to_file truncates a pre-existing file
#[test]
fn test_write_to_file_withExistingFile_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = common::create_test_file(&temp_dir.path().to_path_buf(), "out.txt", "old old old")?;

    FileManager::write_to_file(&target, "new")?;

    assert_eq!(FileManager::read_to_string(&target)?, "new");
    Ok(())
}

/// Test that subtitle enumeration picks up only supported immediate entries
#[test]
fn test_find_subtitle_files_withMixedDir_shouldReturnOnlySubtitles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_subtitle(&dir, "a.srt")?;
    common::create_test_webvtt(&dir, "b.vtt")?;
    common::create_test_file(&dir, "c.txt", "not a subtitle")?;

    let mut found: Vec<String> = FileManager::find_subtitle_files(temp_dir.path())?
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();
    found.sort();

    assert_eq!(found, vec!["a.srt".to_string(), "b.vtt".to_string()]);
    Ok(())
}

/// Test that the walk never descends into subdirectories
#[test]
fn test_find_subtitle_files_withNestedSubtitle_shouldNotRecurse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_subtitle(&dir, "top.srt")?;

    let nested_dir = dir.join("nested");
    std::fs::create_dir(&nested_dir)?;
    common::create_test_subtitle(&nested_dir, "below.srt")?;

    let found = FileManager::find_subtitle_files(temp_dir.path())?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].file_name().unwrap(), "top.srt");
    Ok(())
}

/// Test that extension matching ignores ASCII case
#[test]
fn test_find_subtitle_files_withUppercaseExtension_shouldMatch() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_subtitle(&temp_dir.path().to_path_buf(), "LOUD.SRT")?;

    let found = FileManager::find_subtitle_files(temp_dir.path())?;

    assert_eq!(found.len(), 1);
    Ok(())
}

/// Test format detection from file extensions
#[test]
fn test_subtitle_format_fromPath_shouldDetectSupportedExtensions() {
    assert_eq!(SubtitleFormat::from_path(Path::new("a.srt")), Some(SubtitleFormat::Srt));
    assert_eq!(SubtitleFormat::from_path(Path::new("b.VTT")), Some(SubtitleFormat::Vtt));
    assert_eq!(SubtitleFormat::from_path(Path::new("c.txt")), None);
    assert_eq!(SubtitleFormat::from_path(Path::new("no_extension")), None);
}

/// Test the canonical extension strings
#[test]
fn test_subtitle_format_extension_shouldMatchFormat() {
    assert_eq!(SubtitleFormat::Srt.extension(), "srt");
    assert_eq!(SubtitleFormat::Vtt.extension(), "vtt");
}
