//! Output path derivation.
//!
//! Masked files mirror the input tree under the output root, with a suffix
//! injected before each file's extension: `a/b/app.log` becomes
//! `<out>/a/b/app_masked.log`.

use std::path::{Path, PathBuf};

/// Inserts `suffix` before the extension of `file_name`.
///
/// A blank suffix leaves the name unchanged. A name without a dot, or whose
/// only dot is the leading one of a dotfile, gets the suffix appended:
///
/// ```
/// use logmask_core::paths::suffixed_name;
///
/// assert_eq!(suffixed_name("app.log", "_masked"), "app_masked.log");
/// assert_eq!(suffixed_name("README", "_masked"), "README_masked");
/// assert_eq!(suffixed_name(".env", "_masked"), ".env_masked");
/// ```
pub fn suffixed_name(file_name: &str, suffix: &str) -> String {
    if suffix.trim().is_empty() {
        return file_name.to_string();
    }
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => {
            let (base, ext) = file_name.split_at(dot);
            format!("{base}{suffix}{ext}")
        }
        _ => format!("{file_name}{suffix}"),
    }
}

/// `output_root / <parents of relative> / suffixed_name(<file name of relative>)`.
pub fn map_output_path(output_root: &Path, relative: &Path, suffix: &str) -> PathBuf {
    let file_name = relative
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let out_name = suffixed_name(&file_name, suffix);

    match relative.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => output_root.join(parent).join(out_name),
        None => output_root.join(out_name),
    }
}
