//! Path helpers: unique destination names, file name validation and
//! glob matching for library search

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LibraryError, Result};

/// Upper bound on candidate names tried by [`unique_path`]
pub const MAX_UNIQUE_ATTEMPTS: usize = 10_000;

/// Trailing `_<N>` suffix on a file stem
static NUMERIC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)_(\d+)$").expect("valid suffix regex"));

/// Characters not allowed in library file names
const INVALID_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Names reserved by Windows regardless of extension
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Get a path that `exists` reports as free.
///
/// A colliding `New Folder` becomes `New Folder_0`, then `New Folder_1`.
/// A stem that already ends in `_<N>` continues counting from `N + 1`, so
/// `Item_5` becomes `Item_6`. The extension is preserved.
pub fn unique_path(path: &Path, exists: impl Fn(&Path) -> bool) -> Result<PathBuf> {
    if !exists(path) {
        return Ok(path.to_path_buf());
    }

    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = path.parent().unwrap_or(Path::new(""));

    // A suffix that cannot be counted past is kept as part of the base
    let continued = NUMERIC_SUFFIX.captures(&stem).and_then(|caps| {
        let next = caps[2].parse::<u64>().ok()?.checked_add(1)?;
        Some((caps[1].to_string(), next))
    });
    let (base, mut counter) = continued.unwrap_or_else(|| (stem.to_string(), 0));

    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let candidate = parent.join(format!("{}_{}{}", base, counter, ext));
        if !exists(&candidate) {
            return Ok(candidate);
        }
        let Some(next) = counter.checked_add(1) else {
            break;
        };
        counter = next;
    }

    Err(LibraryError::UniqueName {
        path: path.to_path_buf(),
        attempts: MAX_UNIQUE_ATTEMPTS,
    })
}

/// Check if a name can be used for a library file or folder
pub fn is_valid_file_name(name: &str) -> bool {
    if name.trim().is_empty() || name == "." || name == ".." {
        return false;
    }

    if name
        .chars()
        .any(|c| c.is_control() || INVALID_NAME_CHARS.contains(&c))
    {
        return false;
    }

    let stem = name.split('.').next().unwrap_or("").to_uppercase();
    !RESERVED_NAMES.contains(&stem.as_str())
}

/// File name without its extension
pub fn name_without_extension(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Strip trailing path separators from a path
pub fn trim_separators(path: &Path) -> PathBuf {
    let s = path.to_string_lossy();
    PathBuf::from(s.trim_end_matches(['/', '\\']))
}

/// Strip trailing dots from the last component. Windows treats `name.` as
/// `name`, so collisions are checked against the trimmed form.
pub fn trim_trailing_dots(path: &Path) -> PathBuf {
    let s = path.to_string_lossy();
    PathBuf::from(s.trim_end_matches('.'))
}

/// Check if `path` is `ancestor` or lies beneath it
pub fn is_part_of(path: &Path, ancestor: &Path) -> bool {
    path.starts_with(ancestor)
}

/// Check if a name matches a glob pattern
/// Supports simple glob patterns: * (any chars), ? (single char)
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let text: Vec<char> = name.to_lowercase().chars().collect();
    glob_match_impl(&pattern, &text)
}

fn glob_match_impl(pattern: &[char], text: &[char]) -> bool {
    let mut p_idx = 0;
    let mut t_idx = 0;
    let mut star_idx: Option<usize> = None;
    let mut match_idx = 0;

    while t_idx < text.len() {
        if p_idx < pattern.len() && (pattern[p_idx] == '?' || pattern[p_idx] == text[t_idx]) {
            p_idx += 1;
            t_idx += 1;
        } else if p_idx < pattern.len() && pattern[p_idx] == '*' {
            star_idx = Some(p_idx);
            match_idx = t_idx;
            p_idx += 1;
        } else if let Some(star) = star_idx {
            // Mismatch after star, backtrack
            p_idx = star + 1;
            match_idx += 1;
            t_idx = match_idx;
        } else {
            return false;
        }
    }

    while p_idx < pattern.len() && pattern[p_idx] == '*' {
        p_idx += 1;
    }

    p_idx == pattern.len()
}
