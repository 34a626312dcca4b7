//! Request classification
//!
//! Maps `(method, path, query)` onto the filesystem operation a request asks for. The function
//! is pure and total: any shape it does not recognize is `Intent::Unknown`.
//!
//! | Method | Shape                          | Intent                  |
//! |--------|--------------------------------|-------------------------|
//! | GET    | `/dir/` or `/dir`              | `ListDir`               |
//! | GET    | `/dir/file.ext`                | `ReadFile`              |
//! | GET    | `/path?resolve`                | `ResolvePath`           |
//! | GET    | `/path?grep=<pattern>`         | `ReadFile`              |
//! | POST   | `/file.ext?action=write`       | `WriteFile`             |
//! | POST   | `/file.ext?action=append`      | `AppendFile`            |
//! | POST   | `/file.ext?action=delete`      | `DeleteFile`            |
//! | POST   | `/dir?action=write`            | `WriteDir`              |
//! | POST   | `/dir?action=delete`           | `DeleteDir`             |

use std::collections::HashMap;

use actix_web::{ http::Method, web };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Intent {
  ReadFile,
  ListDir,
  ResolvePath,
  WriteFile,
  DeleteFile,
  WriteDir,
  DeleteDir,
  AppendFile,
  Unknown,
}

/// Whether the last `/`-separated segment of `url_path` names a file (contains a `.`).
pub(crate) fn names_file(url_path: &str) -> bool {
  url_path
    .rsplit('/')
    .next()
    .is_some_and(|segment| segment.contains('.'))
}

/// Classify a request.
///
/// An empty query string (`/dir/?`) counts as no query string.
pub(crate) fn classify(method: &Method, url_path: &str, query: &str) -> Intent {
  let is_file = names_file(url_path);

  if method == Method::GET && query.is_empty() {
    return if is_file {
      Intent::ReadFile
    } else {
      Intent::ListDir
    };
  }

  let Ok(params) = web::Query::<HashMap<String, String>>::from_query(query) else {
    return Intent::Unknown;
  };

  if method == Method::GET {
    if params.contains_key("resolve") {
      return Intent::ResolvePath;
    }
    // mocha filters tests with ?grep=<regexp>; the page itself is still a plain file
    if params.contains_key("grep") {
      return Intent::ReadFile;
    }
  }

  if method == Method::POST
    && let Some(action) = params.get("action").filter(|a| !a.is_empty())
  {
    return match (action.to_ascii_uppercase().as_str(), is_file) {
      ("WRITE", true) => Intent::WriteFile,
      ("WRITE", false) => Intent::WriteDir,
      ("DELETE", true) => Intent::DeleteFile,
      ("DELETE", false) => Intent::DeleteDir,
      ("APPEND", true) => Intent::AppendFile,
      _ => Intent::Unknown,
    };
  }

  Intent::Unknown
}
