//! Path and copy utilities

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::BuildError;

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// Ok if `path` exists and is a directory.
pub fn is_directory(path: &Path) -> io::Result<()> {
    let meta = fs::metadata(path)?;
    if meta.is_dir() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{} is not a directory", path.display()),
        ))
    }
}

/// True if `path` is a regular file (symlinks followed).
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Access and modification times of `meta`, for [`File::set_times`].
fn file_times(meta: &fs::Metadata) -> io::Result<FileTimes> {
    Ok(FileTimes::new()
        .set_accessed(meta.accessed()?)
        .set_modified(meta.modified()?))
}

/// Copy one regular file, then carry over its access/modification times.
/// Returns bytes copied.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64, BuildError> {
    let meta = fs::metadata(src).map_err(|e| BuildError::io("stat", src, e))?;
    if !meta.is_file() {
        return Err(BuildError::io(
            "copy",
            src,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    let n = fs::copy(src, dst).map_err(|e| BuildError::io("copy", dst, e))?;
    set_times_from(dst, &meta)?;
    Ok(n)
}

fn set_times_from(dst: &Path, meta: &fs::Metadata) -> Result<(), BuildError> {
    apply_times(dst, meta).map_err(|e| BuildError::io("set times", dst, e))
}

/// Opened read-only: setting explicit times needs ownership, not write permission.
fn apply_times(path: &Path, meta: &fs::Metadata) -> io::Result<()> {
    File::open(path)?.set_times(file_times(meta)?)
}

/// Recursively copy the contents of `source` into the existing directory `destination`.
/// Files keep their times; directory times are applied after their contents are written,
/// deepest first. Symlinks are recreated, not followed (Unix). Returns files copied.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<usize, BuildError> {
    let mut dirs: Vec<(PathBuf, fs::Metadata)> = Vec::new();
    let mut files = 0_usize;

    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(|e| BuildError::walkdir("walk payload", e))?;
        let Some(relative) = path_relative_to(entry.path(), source) else {
            continue;
        };
        let target = destination.join(relative);
        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir(&target).map_err(|e| BuildError::io("create dir", &target, e))?;
            let meta = entry
                .metadata()
                .map_err(|e| BuildError::walkdir("stat payload dir", e))?;
            dirs.push((target, meta));
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            copy_file(entry.path(), &target)?;
            files += 1;
        }
    }

    for (dir, meta) in dirs.iter().rev() {
        if let Err(e) = apply_times(dir, meta) {
            log::debug!("could not preserve times on {}: {}", dir.display(), e);
        }
    }
    Ok(files)
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<(), BuildError> {
    let link = fs::read_link(src).map_err(|e| BuildError::io("read link", src, e))?;
    std::os::unix::fs::symlink(&link, dst).map_err(|e| BuildError::io("create link", dst, e))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<(), BuildError> {
    copy_file(src, dst).map(|_| ())
}
