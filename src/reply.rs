//! Response shape shared by every operation
//!
//! A `Reply` is an outcome tag, a raw body and a content type label. Content type defaults to
//! `binary`, which is what the test harness has always been sent for anything that is not
//! script, stylesheet or markup.

use actix_web::{
  HttpRequest, HttpResponse, Responder, ResponseError,
  body::BoxBody,
  http::{ StatusCode, header },
  web::Bytes,
};
use log::warn;

use crate::{
  error::AppError,
  fs_ops::CONTENT_TYPE_BINARY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
  Success,
  Fail,
  Unknown,
  Code(u16),
}

impl Outcome {
  pub(crate) fn status(self) -> StatusCode {
    match self {
      Outcome::Success => StatusCode::OK,
      Outcome::Fail => StatusCode::INTERNAL_SERVER_ERROR,
      Outcome::Unknown => StatusCode::NOT_FOUND,
      Outcome::Code(code) => {
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
      }
    }
  }
}

#[derive(Debug)]
pub(crate) struct Reply {
  pub(crate) outcome: Outcome,
  pub(crate) body: Bytes,
  pub(crate) content_type: &'static str,
  /// close the connection after this response
  pub(crate) close: bool,
}

impl Reply {
  fn new(outcome: Outcome, body: impl Into<Bytes>) -> Self {
    Self {
      outcome,
      body: body.into(),
      content_type: CONTENT_TYPE_BINARY,
      close: false,
    }
  }

  pub(crate) fn success(body: impl Into<Bytes>) -> Self {
    Self::new(Outcome::Success, body)
  }

  pub(crate) fn done() -> Self {
    Self::new(Outcome::Success, Bytes::new())
  }

  pub(crate) fn fail(body: impl Into<Bytes>) -> Self {
    Self::new(Outcome::Fail, body)
  }

  pub(crate) fn unknown() -> Self {
    Self::new(Outcome::Unknown, Bytes::new())
  }

  pub(crate) fn code(code: u16, body: impl Into<Bytes>) -> Self {
    Self::new(Outcome::Code(code), body)
  }

  pub(crate) fn with_content_type(mut self, content_type: &'static str) -> Self {
    self.content_type = content_type;
    self
  }

  /// Status from the error, message as body. An oversized upload gets no body and a closed
  /// connection.
  pub(crate) fn from_error(err: AppError) -> Self {
    warn!("{err}");
    let code = err.status_code().as_u16();
    if let AppError::PayloadTooLarge { .. } = err {
      let mut reply = Self::code(code, Bytes::new());
      reply.close = true;
      return reply;
    }
    Self::code(code, err.to_string())
  }
}

impl Responder for Reply {
  type Body = BoxBody;

  fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
    let mut res = HttpResponse::build(self.outcome.status());
    if self.close {
      res.force_close();
    }
    res.insert_header((header::CONTENT_TYPE, self.content_type))
      .body(self.body)
  }
}
