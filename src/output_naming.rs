use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf, absolute};

// @module: Output file name derivation

// @const: Bracketed release-group tags, e.g. "[SubsCrew]"
static RELEASE_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[.*?\]").unwrap()
});

/// Remove every bracketed annotation segment from a file name and trim the
/// trailing whitespace the removal leaves behind
pub fn strip_release_tags(name: &str) -> String {
    RELEASE_TAG_PATTERN.replace_all(name, "").trim_end().to_string()
}

/// Swap the extension of a file name for `new_extension`.
///
/// Splits on the last '.' so extensions of any length are handled; a name
/// without a dot gets the new extension appended. Trailing whitespace on the
/// stem is trimmed so tag removal never leaves a gap before the extension.
pub fn replace_extension(name: &str, new_extension: &str) -> String {
    let stem = match name.rfind('.') {
        Some(index) => &name[..index],
        None => name,
    };
    format!("{}{}", stem.trim_end(), new_extension)
}

/// Derive the destination path for a converted subtitle file.
///
/// The base name is the source name with release tags stripped and the
/// extension swapped. With an output directory the result is that directory
/// resolved to an absolute path joined with the base name only; without one
/// the output sits alongside the source file. The destination is never
/// checked for existence, a pre-existing file there gets overwritten.
pub fn derive_output_path(
    source: &Path,
    new_extension: &str,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let derived = replace_extension(&strip_release_tags(&file_name), new_extension);

    match output_dir {
        Some(dir) => {
            let dir = absolute(dir)
                .with_context(|| format!("Failed to resolve output directory: {}", dir.display()))?;
            Ok(dir.join(derived))
        }
        None => Ok(source.with_file_name(derived)),
    }
}
