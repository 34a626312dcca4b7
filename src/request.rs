//! HTTP request handler (routing)
//!
//! One catch-all resource takes every method and path:
//! 1. resolve the disk path under `fs.root_path` (403 when confined and outside)
//! 2. classify `(method, path, query)` into an `Intent`
//! 3. dispatch the filesystem operation and answer with its `Reply`
//!
//! Quick examples
//! - `GET /tests/cases/foo.ts` → file bytes, content type `binary`
//! - `GET /tests/cases/` → `tests/cases/a.ts,tests/cases/sub/b.ts`
//! - `GET /tests/cases/foo.ts?resolve` → `tests/cases/foo.ts`
//! - `POST /out/result.txt?action=append` → appends the body, empty 200
//!
//! 中文：單一路由處理所有請求：解析路徑 → 分類 → 執行檔案操作。

use actix_web::{ HttpRequest, web };
use log::debug;

use crate::{
  cofg::config::Cofg,
  dispatch::dispatch,
  http_ext::HttpRequestCachedExt,
  intent::classify,
  reply::Reply,
};

pub(crate) async fn main_req(
  req: HttpRequest,
  payload: web::Payload,
  c: web::Data<Cofg>,
) -> Reply {
  let c = c.get_ref();
  let url_path = req.cached_decoded_path();
  debug!("{} {url_path}", req.method());

  let path = match req.cached_resolved_path(c) {
    Ok(p) => p,
    Err(err) => return Reply::from_error(err),
  };
  let intent = classify(req.method(), &url_path, req.query_string());
  dispatch(intent, &path, &req, payload, c).await
}

/// Register the catch-all resource.
pub(crate) fn routes(cfg: &mut web::ServiceConfig) {
  cfg.service(web::resource("/{tail:.*}").to(main_req));
}
