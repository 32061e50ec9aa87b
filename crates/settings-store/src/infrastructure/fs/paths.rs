//! Conversion between absolute and relative paths.
//!
//! Settings files store paths relative to the working directory so the
//! application folder can be moved or copied without breaking them.  Paths
//! are resolved back to absolute form whenever they are used for I/O.
//!
//! The public helpers ([`to_relative`], [`to_absolute`], [`ensure_directory`])
//! never fail: an error is logged and the input is returned unchanged (or
//! `false` is returned).  The fallible building blocks ([`relative_to`],
//! [`absolute_from`]) take an explicit base directory and are purely lexical:
//! they never touch the file system, so symlinks are not resolved.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

/// Error type for path conversions.
#[derive(Debug, Error)]
pub enum PathError {
    /// The process working directory could not be read.
    #[error("could not determine the current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The two paths live on different roots (e.g. different Windows drives).
    #[error("{path} and {base} do not share a common root")]
    NoCommonRoot { path: PathBuf, base: PathBuf },

    /// The path exists but is a file or other non-directory entry.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Creating the directory failed.
    #[error("could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ── Infallible API ────────────────────────────────────────────────────────────

/// Returns `path` relative to the current working directory.
///
/// Relative input is returned unchanged.  On failure the error is logged and
/// the input is returned unchanged.
pub fn to_relative(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_relative() {
        return path.to_path_buf();
    }

    match current_dir().and_then(|cwd| relative_to(path, &cwd)) {
        Ok(relative) => {
            info!("path converted to relative: {}", relative.display());
            relative
        }
        Err(e) => {
            error!("failed to convert {} to a relative path: {e}", path.display());
            path.to_path_buf()
        }
    }
}

/// Returns `path` resolved against the current working directory.
///
/// Absolute input is returned unchanged.  The result is lexically
/// normalised (`.` dropped, `..` collapsed).  On failure the error is logged
/// and the input is returned unchanged.
pub fn to_absolute(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        return path.to_path_buf();
    }

    match current_dir() {
        Ok(cwd) => {
            let absolute = absolute_from(path, &cwd);
            info!("path converted to absolute: {}", absolute.display());
            absolute
        }
        Err(e) => {
            error!("failed to convert {} to an absolute path: {e}", path.display());
            path.to_path_buf()
        }
    }
}

/// Makes sure `path` exists as a directory, creating missing parents.
///
/// Returns `true` if the directory already existed or was created, `false`
/// (logged) otherwise.  An existing directory is left untouched.
pub fn ensure_directory(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match try_ensure_directory(path) {
        Ok(()) => true,
        Err(e) => {
            error!("failed to create directory {}: {e}", path.display());
            false
        }
    }
}

// ── Fallible building blocks ──────────────────────────────────────────────────

/// Computes `path` relative to `base`.
///
/// Both are normalised lexically first.  `relative_to(base, base)` is `"."`.
///
/// # Errors
///
/// Returns [`PathError::NoCommonRoot`] if the paths have different roots or
/// prefixes, or if `base` climbs above a relative `path` with `..`.
pub fn relative_to(path: &Path, base: &Path) -> Result<PathBuf, PathError> {
    let path_norm = normalize_lexically(path);
    let base_norm = normalize_lexically(base);

    let no_common_root = || PathError::NoCommonRoot {
        path: path.to_path_buf(),
        base: base.to_path_buf(),
    };

    let path_root_len = root_len(&path_norm);
    let base_root_len = root_len(&base_norm);
    let path_parts: Vec<Component<'_>> = path_norm.components().collect();
    let base_parts: Vec<Component<'_>> = base_norm.components().collect();

    if path_parts[..path_root_len] != base_parts[..base_root_len] {
        return Err(no_common_root());
    }

    let path_rest = &path_parts[path_root_len..];
    let base_rest = &base_parts[base_root_len..];
    let common = path_rest
        .iter()
        .zip(base_rest)
        .take_while(|(a, b)| a == b)
        .count();

    if base_rest[common..].contains(&Component::ParentDir) {
        return Err(no_common_root());
    }

    let mut relative = PathBuf::new();
    for _ in common..base_rest.len() {
        relative.push("..");
    }
    for component in &path_rest[common..] {
        relative.push(component);
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Ok(relative)
}

/// Resolves `path` against `base`.
///
/// Absolute `path` is returned unchanged; otherwise `base.join(path)` is
/// normalised lexically.
pub fn absolute_from(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    normalize_lexically(&base.join(path))
}

/// Removes `.` components and collapses `..` against preceding names.
///
/// `..` directly under a root is dropped (`/..` is `/`); leading `..` of a
/// relative path is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.into_iter().collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn current_dir() -> Result<PathBuf, PathError> {
    std::env::current_dir().map_err(PathError::CurrentDir)
}

/// Number of leading prefix/root components.
fn root_len(path: &Path) -> usize {
    path.components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .count()
}

fn try_ensure_directory(path: &Path) -> Result<(), PathError> {
    let dir = to_absolute(path);
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(PathError::NotADirectory(dir));
    }
    std::fs::create_dir_all(&dir).map_err(|source| PathError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    info!("directory created: {}", dir.display());
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
