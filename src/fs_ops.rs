//! Filesystem operations behind the dispatcher
//!
//! WHY: Every mutating call checks its precondition first and reports a typed `AppError`
//! (`AlreadyExists`, `NotFound`, `NotEmpty`) rather than relying on the native call to fail.
//! Directory walks use an explicit stack so pathological trees cannot exhaust the call stack.
//!
//! No locking: two requests on the same path may interleave.

use std::{
  fs,
  io::Write,
  path::{ Path, PathBuf },
};

use log::debug;

use crate::error::{ AppError, AppResult };

pub(crate) const CONTENT_TYPE_BINARY: &str = "binary";

/// Content type label for a served file, from its extension.
pub(crate) fn content_type_for(path: &Path) -> &'static str {
  match path.extension().and_then(|e| e.to_str()) {
    Some("js") => "text/javascript",
    Some("css") => "text/css",
    Some("html") => "text/html",
    _ => CONTENT_TYPE_BINARY,
  }
}

/// `base`-relative, `/`-separated form of `path`; falls back to the full path outside `base`.
fn relative_display(path: &Path, base: &Path) -> String {
  let rel = path.strip_prefix(base).unwrap_or(path);
  rel.components()
    .map(|c| c.as_os_str().to_string_lossy())
    .collect::<Vec<_>>()
    .join("/")
}

fn sorted_children(folder: &Path) -> Option<Vec<PathBuf>> {
  match fs::read_dir(folder) {
    Ok(entries) => {
      let mut children: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
      children.sort();
      Some(children)
    }
    Err(e) => {
      // inaccessible folders are skipped
      debug!("skip {}: {e}", folder.display());
      None
    }
  }
}

/// Every regular file under `dir`, depth first, as paths relative to `base`.
///
/// Unreadable folders and broken links are skipped. Symlinked directories are not descended.
pub(crate) fn list_files(dir: &Path, base: &Path) -> Vec<String> {
  let mut files = Vec::new();
  let Some(mut stack) = sorted_children(dir) else {
    return files;
  };
  stack.reverse();

  while let Some(path) = stack.pop() {
    let meta = match fs::metadata(&path) {
      Ok(m) => m,
      Err(e) => {
        debug!("skip {}: {e}", path.display());
        continue;
      }
    };
    if meta.is_file() {
      files.push(relative_display(&path, base));
    } else if meta.is_dir() {
      if path.is_symlink() {
        debug!("skip symlinked folder {}", path.display());
        continue;
      }
      if let Some(children) = sorted_children(&path) {
        stack.extend(children.into_iter().rev());
      }
    }
  }
  files
}

/// Remove `dir` and everything below it, children before parents.
pub(crate) fn remove_tree(dir: &Path) -> AppResult<()> {
  let mut stack = vec![(dir.to_path_buf(), false)];
  while let Some((path, emptied)) = stack.pop() {
    if emptied {
      fs::remove_dir(&path)?;
      continue;
    }
    stack.push((path.clone(), true));
    for entry in fs::read_dir(&path)? {
      let entry = entry?;
      // file_type does not follow links, so a linked folder is unlinked, not emptied
      if entry.file_type()?.is_dir() {
        stack.push((entry.path(), false));
      } else {
        fs::remove_file(entry.path())?;
      }
    }
  }
  Ok(())
}

/// Write `data` to `path`, creating missing parent folders when the first attempt finds none.
pub(crate) fn write_file(path: &Path, data: &[u8]) -> AppResult<()> {
  match fs::write(path, data) {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
      if let Some(parent) = path.parent() {
        debug!("create {}", parent.display());
        fs::create_dir_all(parent)?;
      }
      fs::write(path, data)?;
      Ok(())
    }
    Err(e) => Err(e.into()),
  }
}

/// Append `data` to an existing file.
pub(crate) fn append_file(path: &Path, data: &[u8]) -> AppResult<()> {
  if !path.is_file() {
    return Err(AppError::NotFound(path.to_path_buf()));
  }
  let mut file = fs::OpenOptions::new().append(true).open(path)?;
  file.write_all(data)?;
  Ok(())
}

/// Create the single folder `path`; its parent must exist.
pub(crate) fn create_dir(path: &Path) -> AppResult<()> {
  if path.exists() {
    return Err(AppError::AlreadyExists(path.to_path_buf()));
  }
  fs::create_dir(path)?;
  Ok(())
}

/// Remove the folder `path`. Absent is fine; non-empty is `NotEmpty` unless `recursive`.
///
/// A link is unlinked; its target is left alone.
pub(crate) fn delete_dir(path: &Path, recursive: bool) -> AppResult<()> {
  let Ok(meta) = fs::symlink_metadata(path) else {
    debug!("{} already absent", path.display());
    return Ok(());
  };
  if meta.file_type().is_symlink() {
    debug!("unlink {}", path.display());
    fs::remove_file(path)?;
    return Ok(());
  }
  if path.is_dir() && fs::read_dir(path)?.next().is_some() {
    if !recursive {
      return Err(AppError::NotEmpty(path.to_path_buf()));
    }
    return remove_tree(path);
  }
  fs::remove_dir(path)?;
  Ok(())
}

/// Remove the file `path` if it is there.
pub(crate) fn delete_file(path: &Path) -> AppResult<()> {
  if fs::symlink_metadata(path).is_err() {
    debug!("{} already absent", path.display());
    return Ok(());
  }
  fs::remove_file(path)?;
  Ok(())
}
