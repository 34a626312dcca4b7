use actix_web::{Responder, http::StatusCode, http::header, test as actix_test};

use crate::error::AppError;
use crate::reply::{Outcome, Reply};

#[test]
fn test_outcome_status() {
    assert_eq!(Outcome::Success.status(), StatusCode::OK);
    assert_eq!(Outcome::Fail.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(Outcome::Unknown.status(), StatusCode::NOT_FOUND);
    assert_eq!(Outcome::Code(413).status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(Outcome::Code(1).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_reply_defaults_to_binary() {
    let req = actix_test::TestRequest::default().to_http_request();
    let res = Reply::success("abc").respond_to(&req);

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers().get(header::CONTENT_TYPE).unwrap(), "binary");
}

#[actix_web::test]
async fn test_reply_from_error() {
    let reply = Reply::from_error(AppError::NotFound("a.txt".into()));
    assert_eq!(reply.outcome, Outcome::Code(404));
    assert!(!reply.body.is_empty());
    assert!(!reply.close);

    let reply = Reply::from_error(AppError::PayloadTooLarge { limit: 4 });
    assert_eq!(reply.outcome, Outcome::Code(413));
    assert!(reply.body.is_empty());
    assert!(reply.close, "oversized uploads close the connection");
}
