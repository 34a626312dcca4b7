//! Classifier tests
//!
//! WHY: The classifier is the only place where request shape turns into a filesystem action, so
//! every row of the routing table gets a case, plus the shapes that must fall through to
//! `Unknown`.

use crate::intent::{Intent, classify, names_file};
use actix_web::http::Method;

#[test]
fn test_get_without_query_reads_files_and_lists_dirs() {
    let files = ["/tests/cases/foo.ts", "/a.b/c.d", "/x.html", "/tests/webTestResults.html"];
    for path in files {
        assert_eq!(classify(&Method::GET, path, ""), Intent::ReadFile, "{path}");
    }

    let dirs = ["/tests/cases/", "/tests/cases", "/", "/a.b/c", "/a.b/"];
    for path in dirs {
        assert_eq!(classify(&Method::GET, path, ""), Intent::ListDir, "{path}");
    }
}

#[test]
fn test_empty_query_counts_as_none() {
    // `/tests/cases/?` arrives with an empty query string
    assert_eq!(classify(&Method::GET, "/tests/cases/", ""), Intent::ListDir);
}

#[test]
fn test_get_resolve() {
    assert_eq!(
        classify(&Method::GET, "/tests/cases/foo.ts", "resolve"),
        Intent::ResolvePath
    );
    assert_eq!(
        classify(&Method::GET, "/tests/cases", "resolve="),
        Intent::ResolvePath
    );
}

#[test]
fn test_get_grep_reads_file() {
    assert_eq!(
        classify(&Method::GET, "/tests/webTestResults.html", "grep=parser"),
        Intent::ReadFile
    );
    // resolve wins over grep
    assert_eq!(
        classify(&Method::GET, "/tests/webTestResults.html", "grep=x&resolve"),
        Intent::ResolvePath
    );
}

#[test]
fn test_get_with_other_query_is_unknown() {
    assert_eq!(classify(&Method::GET, "/a.txt", "foo=1"), Intent::Unknown);
    assert_eq!(classify(&Method::GET, "/a.txt", "action=write"), Intent::Unknown);
}

#[test]
fn test_post_actions_on_files() {
    let cases = [
        ("write", Intent::WriteFile),
        ("WRITE", Intent::WriteFile),
        ("delete", Intent::DeleteFile),
        ("Delete", Intent::DeleteFile),
        ("append", Intent::AppendFile),
        ("APPEND", Intent::AppendFile),
    ];
    for (action, expected) in cases {
        let query = format!("action={action}");
        assert_eq!(
            classify(&Method::POST, "/out/result.txt", &query),
            expected,
            "{action}"
        );
    }
}

#[test]
fn test_post_actions_on_dirs() {
    assert_eq!(classify(&Method::POST, "/out/dir", "action=write"), Intent::WriteDir);
    assert_eq!(classify(&Method::POST, "/out/dir", "action=delete"), Intent::DeleteDir);
    assert_eq!(
        classify(&Method::POST, "/out/dir", "action=append"),
        Intent::Unknown,
        "append on a directory is not an operation"
    );
}

#[test]
fn test_post_file_check_uses_last_segment_only() {
    assert_eq!(
        classify(&Method::POST, "/out.d/dir", "action=write"),
        Intent::WriteDir
    );
    assert_eq!(
        classify(&Method::POST, "/out/dir.d", "action=delete"),
        Intent::DeleteFile
    );
}

#[test]
fn test_post_without_usable_action_is_unknown() {
    assert_eq!(classify(&Method::POST, "/out/a.txt", ""), Intent::Unknown);
    assert_eq!(classify(&Method::POST, "/out/a.txt", "action="), Intent::Unknown);
    assert_eq!(classify(&Method::POST, "/out/a.txt", "action=rename"), Intent::Unknown);
    assert_eq!(classify(&Method::POST, "/out/a.txt", "resolve"), Intent::Unknown);
}

#[test]
fn test_other_methods_are_unknown() {
    for method in [Method::PUT, Method::DELETE, Method::HEAD, Method::PATCH] {
        assert_eq!(classify(&method, "/a.txt", ""), Intent::Unknown, "{method}");
        assert_eq!(
            classify(&method, "/a.txt", "action=write"),
            Intent::Unknown,
            "{method}"
        );
    }
}

#[test]
fn test_malformed_query_is_unknown() {
    // invalid percent escape decodes leniently; a lone `%` must still not panic
    let intent = classify(&Method::POST, "/a.txt", "action=%");
    assert_eq!(intent, Intent::Unknown);
}

#[test]
fn test_names_file() {
    assert!(names_file("/a/b.txt"));
    assert!(names_file(".hidden"));
    assert!(!names_file("/a.b/c"));
    assert!(!names_file("/a/"));
    assert!(!names_file(""));
}
