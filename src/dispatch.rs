//! Operation dispatch
//!
//! Performs the filesystem action for a classified `Intent` and produces the `Reply`. Each
//! request is an independent `Intent × filesystem → filesystem' × Reply` step; nothing is
//! remembered between requests.
//!
//! Failure semantics
//! - `ReadFile` errors become `500` with the error text as body (the harness shows it).
//! - Write/append/mkdir/rmdir/unlink failures carry a typed status (404, 409, 500, ...).
//! - Deleting something that is already gone is a success.
//!
//! 中文：依分類結果執行對應的檔案操作；讀檔失敗回 500 與錯誤訊息，寫入類操作回傳具型別錯誤。

use std::path::Path;

use actix_web::{
  HttpRequest,
  http::Method,
  web::{ self, Bytes, BytesMut },
};
use futures_util::StreamExt;
use log::{ debug, error, warn };

use crate::{
  cofg::config::Cofg,
  error::{ AppError, AppResult },
  fs_ops,
  http_ext::{ resolve_request_path, to_forward_slashes },
  intent::Intent,
  reply::Reply,
};

/// Collect a POST body, failing once more than `limit` bytes have arrived.
pub(crate) async fn read_post_body(
  req: &HttpRequest,
  mut payload: web::Payload,
  limit: usize,
) -> AppResult<Bytes> {
  if req.method() != Method::POST {
    return Err(AppError::MethodNotAllowed(req.method().to_string()));
  }
  let mut body = BytesMut::new();
  while let Some(chunk) = payload.next().await {
    let chunk = chunk?;
    if body.len() + chunk.len() > limit {
      error!("POST body over {limit} bytes, destroying connection");
      return Err(AppError::PayloadTooLarge { limit });
    }
    body.extend_from_slice(&chunk);
  }
  Ok(body.freeze())
}

/// Cut `path` so it starts at the first segment below `root` equal to `marker`, with `/`
/// separators.
///
/// Segments of `root` itself never match. Without such a segment the whole path is returned.
pub(crate) fn marker_relative(path: &Path, root: &Path, marker: &str) -> String {
  let full = to_forward_slashes(&path.display().to_string());
  let searched = match path.strip_prefix(root) {
    Ok(rel) => to_forward_slashes(&rel.display().to_string()),
    Err(_) => full.clone(),
  };
  let segments: Vec<&str> = searched.split('/').collect();
  match segments.iter().position(|s| *s == marker) {
    Some(i) => segments[i..].join("/"),
    None => {
      warn!("'{marker}' not found in {full}");
      full
    }
  }
}

fn read_file(path: &Path) -> Reply {
  let content_type = fs_ops::content_type_for(path);
  match std::fs::read(path) {
    Ok(bytes) => Reply::success(bytes).with_content_type(content_type),
    Err(e) => {
      warn!("{}: {e}", path.display());
      Reply::fail(e.to_string()).with_content_type(content_type)
    }
  }
}

fn list_dir(path: &Path, c: &Cofg) -> Reply {
  Reply::success(fs_ops::list_files(path, &c.root()).join(","))
}

fn resolve_path(req: &HttpRequest, c: &Cofg) -> AppResult<Reply> {
  // the part of the raw URL in front of `?resolve`; `/a?x&resolve` falls back to the path
  let raw = req
    .uri()
    .path_and_query()
    .map(|pq| pq.as_str())
    .unwrap_or_else(|| req.path());
  let target = raw.rfind("?resolve").map_or(req.path(), |i| &raw[..i]);
  let root = c.root();
  let resolved = resolve_request_path(&root, target, c.fs.confine_to_root)?;
  Ok(Reply::success(marker_relative(&resolved, &root, &c.fs.resolve_marker)))
}

/// Run `intent` against `path`.
pub(crate) async fn dispatch(
  intent: Intent,
  path: &Path,
  req: &HttpRequest,
  payload: web::Payload,
  c: &Cofg,
) -> Reply {
  debug!("{intent:?} {}", path.display());
  let limit = c.server.max_body_size;
  let result = match intent {
    Intent::ListDir => Ok(list_dir(path, c)),
    Intent::ReadFile => Ok(read_file(path)),
    Intent::ResolvePath => resolve_path(req, c),
    Intent::WriteFile => read_post_body(req, payload, limit)
      .await
      .and_then(|body| fs_ops::write_file(path, &body))
      .map(|()| Reply::done()),
    Intent::AppendFile => read_post_body(req, payload, limit)
      .await
      .and_then(|body| fs_ops::append_file(path, &body))
      .map(|()| Reply::done()),
    Intent::WriteDir => fs_ops::create_dir(path).map(|()| Reply::done()),
    Intent::DeleteDir => {
      fs_ops::delete_dir(path, c.fs.recursive_delete).map(|()| Reply::done())
    }
    Intent::DeleteFile => fs_ops::delete_file(path).map(|()| Reply::done()),
    Intent::Unknown => Ok(Reply::unknown()),
  };
  result.unwrap_or_else(Reply::from_error)
}
