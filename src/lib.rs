/*!
 * # sub2text - Subtitle to plain text converter
 *
 * A Rust library for converting subtitle files to plain text.
 *
 * ## Features
 *
 * - Strip markup tags, timing codes and format headers from subtitle text
 * - Supported input formats: SubRip (.srt) and WebVTT (.vtt)
 * - Convert a single file or every subtitle directly inside a directory
 * - Optional destination directory, created on demand
 * - Whitespace-normalized single-paragraph output
 * - Configurable batch failure policy (skip or abort)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_cleaner`: Regex-based subtitle text cleaning
 * - `output_naming`: Output file name derivation
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod output_naming;
pub mod subtitle_cleaner;

// Re-export main types for easier usage
pub use app_config::{Config, ErrorPolicy};
pub use app_controller::{Controller, ConversionSummary};
pub use errors::{AppError, ValidationError};
pub use file_utils::{FileManager, SubtitleFormat};
pub use output_naming::derive_output_path;
pub use subtitle_cleaner::SubtitleCleaner;
