use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::{Config, ErrorPolicy};
use crate::errors::ValidationError;
use crate::file_utils::{FileManager, SubtitleFormat};
use crate::output_naming;
use crate::subtitle_cleaner::SubtitleCleaner;

// @module: Application controller for subtitle conversion

/// Outcome of a conversion run
#[derive(Debug, Clone, Copy)]
pub struct ConversionSummary {
    /// Files successfully converted
    pub converted: usize,
    /// Files that failed and were skipped under the skip policy
    pub failed: usize,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

/// Main application controller for subtitle conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self {
            config,
        };

        Ok(controller)
    }

    /// Run the conversion workflow for a file or directory source.
    ///
    /// Validation happens before any I/O: a nonexistent path aborts the run,
    /// as does a single-file source that is neither .srt nor .vtt. The
    /// destination directory, when configured, is created (with parents)
    /// before the first conversion.
    pub fn run(&self, input_path: &Path) -> Result<ConversionSummary> {
        // Start timing the process
        let start_time = Instant::now();

        if FileManager::file_exists(input_path) {
            // A single-file source must end in one of the supported
            // extensions; directories are filtered during enumeration
            let format = match SubtitleFormat::from_path(input_path) {
                Some(format) => format,
                None => {
                    return Err(ValidationError::UnsupportedExtension(input_path.to_path_buf()).into());
                }
            };
            debug!("Detected .{} subtitle: {}", format.extension(), input_path.display());

            self.ensure_output_dir()?;

            let output_path = self.convert_file(input_path)?;
            info!("Success: {}", output_path.display());

            Ok(ConversionSummary {
                converted: 1,
                failed: 0,
                elapsed: start_time.elapsed(),
            })
        } else if FileManager::dir_exists(input_path) {
            self.ensure_output_dir()?;
            self.run_folder(input_path, start_time)
        } else {
            Err(ValidationError::PathNotFound(input_path.to_path_buf()).into())
        }
    }

    // Create the configured destination directory before any conversion runs
    fn ensure_output_dir(&self) -> Result<()> {
        if let Some(output_dir) = &self.config.output_dir {
            FileManager::ensure_dir(output_dir)
                .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
        }
        Ok(())
    }

    /// Convert every subtitle file among the immediate entries of a directory.
    ///
    /// Files are processed one at a time in enumeration order. A per-file
    /// failure is handled according to the configured error policy: skip
    /// logs the file and continues, abort stops the batch and propagates.
    /// An empty directory is a successful run of zero conversions.
    fn run_folder(&self, input_dir: &Path, start_time: Instant) -> Result<ConversionSummary> {
        let subtitle_files = FileManager::find_subtitle_files(input_dir)?;

        if subtitle_files.is_empty() {
            info!("No subtitle files found in directory: {}", input_dir.display());
            return Ok(ConversionSummary {
                converted: 0,
                failed: 0,
                elapsed: start_time.elapsed(),
            });
        }

        // Create a progress bar for folder processing
        let folder_pb = ProgressBar::new(subtitle_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Converting files");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;

        for subtitle_file in subtitle_files.iter() {
            // Get the file name for display
            let file_name = subtitle_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            folder_pb.set_message(format!("Converting: {}", file_name));

            match self.convert_file(subtitle_file) {
                Ok(output_path) => {
                    debug!("Success: {}", output_path.display());
                    success_count += 1;
                },
                Err(e) => match self.config.on_error {
                    ErrorPolicy::Abort => {
                        folder_pb.abandon_with_message("Folder conversion aborted");
                        return Err(e)
                            .with_context(|| format!("Conversion failed for {}", file_name));
                    },
                    ErrorPolicy::Skip => {
                        error!("Error converting file {}: {}", file_name, e);
                        error_count += 1;
                    }
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder conversion complete");

        let elapsed = start_time.elapsed();

        // Give summary results - important for batch operations
        info!("Folder conversion completed: {} converted, {} errors - Duration: {}",
            success_count, error_count, Self::format_duration(elapsed));

        Ok(ConversionSummary {
            converted: success_count,
            failed: error_count,
            elapsed,
        })
    }

    /// Convert one subtitle file: read, clean, derive the output name, write.
    /// Both handles are scoped to this call and released on any exit path.
    fn convert_file(&self, input_file: &Path) -> Result<PathBuf> {
        let content = FileManager::read_to_string(input_file)?;

        let cleaned = SubtitleCleaner::clean(&content);

        let output_path = output_naming::derive_output_path(
            input_file,
            &self.config.output_extension,
            self.config.output_dir.as_deref(),
        )?;

        FileManager::write_to_file(&output_path, &cleaned)?;

        Ok(output_path)
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
