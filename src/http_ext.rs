//! Request path resolution and HttpRequest per-request cached helpers
//!
//! A request path is percent-decoded, joined under `fs.root_path` and folded lexically (`.` and
//! `..`), without touching the disk. Nothing stops a folded path from leaving the root unless
//! `fs.confine_to_root` is set: the server trusts its local test harness by default.
use actix_web::{ HttpMessage, HttpRequest };
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::path::{ Component, Path, PathBuf };

use crate::cofg::config::Cofg;
use crate::error::{ AppError, AppResult };

// Newtype keys for extensions cache
#[derive(Debug)]
struct DecodedPath(String);
#[derive(Debug)]
struct ResolvedPath(PathBuf);

/// `\` → `/` and `//` → `/`.
pub(crate) fn to_forward_slashes(s: &str) -> String {
  let s = s.replace('\\', "/");
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    if ch == '/' && out.ends_with('/') {
      continue;
    }
    out.push(ch);
  }
  out
}

/// Fold `.` and `..` components without resolving links.
pub(crate) fn fold_path(path: &Path) -> PathBuf {
  let mut out = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        if matches!(out.components().next_back(), Some(Component::Normal(_))) {
          out.pop();
        } else if !out.has_root() {
          out.push("..");
        }
      }
      other => out.push(other.as_os_str()),
    }
  }
  out
}

/// Percent-decode a URL path; undecodable input is kept as-is.
pub(crate) fn decode_url_path(raw: &str) -> String {
  percent_decode_str(raw)
    .decode_utf8()
    .unwrap_or(Cow::Borrowed(raw))
    .to_string()
}

/// Absolute disk path for `url_path` under `root`.
pub(crate) fn resolve_request_path(
  root: &Path,
  url_path: &str,
  confine: bool,
) -> AppResult<PathBuf> {
  let decoded = decode_url_path(url_path);
  let rel = decoded.trim_start_matches(['/', '\\']);
  let resolved = fold_path(&root.join(rel));
  if confine && !resolved.starts_with(root) {
    return Err(AppError::Traversal(resolved.display().to_string()));
  }
  Ok(resolved)
}

/// Cached helpers for HttpRequest
pub(crate) trait HttpRequestCachedExt {
  /// Percent-decoded request path
  fn cached_decoded_path(&self) -> String;

  /// Absolute path on disk under `fs.root_path` for this request
  fn cached_resolved_path(&self, c: &Cofg) -> AppResult<PathBuf>;
}

impl HttpRequestCachedExt for HttpRequest {
  fn cached_decoded_path(&self) -> String {
    if let Some(v) = self.extensions().get::<DecodedPath>() {
      return v.0.clone();
    }
    let p = decode_url_path(self.path());
    self.extensions_mut().insert(DecodedPath(p.clone()));
    p
  }

  fn cached_resolved_path(&self, c: &Cofg) -> AppResult<PathBuf> {
    if let Some(v) = self.extensions().get::<ResolvedPath>() {
      return Ok(v.0.clone());
    }
    let path = resolve_request_path(&c.root(), self.path(), c.fs.confine_to_root)?;
    self.extensions_mut().insert(ResolvedPath(path.clone()));
    Ok(path)
  }
}
