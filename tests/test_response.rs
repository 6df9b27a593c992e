use koban::http::response::{Response, reason_phrase};
use koban::http::writer::serialize_response;

#[test]
fn test_reason_phrase_table() {
    assert_eq!(reason_phrase(200), "OK");
    assert_eq!(reason_phrase(201), "Created");
    assert_eq!(reason_phrase(204), "No Content");
    assert_eq!(reason_phrase(301), "Moved Permanently");
    assert_eq!(reason_phrase(302), "Found");
    assert_eq!(reason_phrase(304), "Not Modified");
    assert_eq!(reason_phrase(400), "Bad Request");
    assert_eq!(reason_phrase(401), "Unauthorized");
    assert_eq!(reason_phrase(403), "Forbidden");
    assert_eq!(reason_phrase(404), "Not Found");
    assert_eq!(reason_phrase(405), "Method Not Allowed");
    assert_eq!(reason_phrase(500), "Internal Server Error");
    assert_eq!(reason_phrase(502), "Bad Gateway");
    assert_eq!(reason_phrase(503), "Service Unavailable");
}

#[test]
fn test_reason_phrase_fallback_is_unknown() {
    assert_eq!(reason_phrase(418), "Unknown");
    assert_eq!(reason_phrase(599), "Unknown");
}

#[test]
fn test_serialize_basic_response() {
    let resp = Response::text(200, "pong");
    let bytes = serialize_response(&resp);

    assert_eq!(
        bytes,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 4\r\nConnection: close\r\n\r\npong"
    );
}

#[test]
fn test_serialize_unlisted_status_keeps_numeric_code() {
    let resp = Response::text(418, "teapot");
    let bytes = serialize_response(&resp);

    assert!(bytes.starts_with(b"HTTP/1.1 418 Unknown\r\n"));
}

#[test]
fn test_serialize_empty_body() {
    let resp = Response::new(204, "text/plain", "");
    let bytes = serialize_response(&resp);

    let text = std::str::from_utf8(&bytes).unwrap();
    assert!(text.contains("Content-Length: 0\r\n"));
    assert!(text.ends_with("\r\n\r\n"));
}

#[test]
fn test_serialize_set_cookie_header() {
    let resp = Response::html("<p>hi</p>").set_cookie("session=abc; HttpOnly");
    let bytes = serialize_response(&resp);

    let text = std::str::from_utf8(&bytes).unwrap();
    assert!(text.contains("Set-Cookie: session=abc; HttpOnly\r\n"));
    // Set-Cookie sits inside the header block, before the blank line.
    let header_end = text.find("\r\n\r\n").unwrap();
    assert!(text.find("Set-Cookie").unwrap() < header_end);
}

#[test]
fn test_serialize_always_closes_connection() {
    for resp in [
        Response::text(200, "ok"),
        Response::not_found(),
        Response::bad_request(),
    ] {
        let bytes = serialize_response(&resp);
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.contains("Connection: close\r\n"));
    }
}

#[test]
fn test_content_length_matches_body_len() {
    let body = vec![b'x'; 1234];
    let resp = Response::new(200, "application/octet-stream", body);
    let bytes = serialize_response(&resp);

    let text_head = std::str::from_utf8(&bytes[..bytes.len() - 1234]).unwrap();
    assert!(text_head.contains("Content-Length: 1234\r\n"));
}

#[test]
fn test_not_found_helper() {
    let resp = Response::not_found();

    assert_eq!(resp.status, 404);
    assert_eq!(resp.content_type, "text/plain");
    assert_eq!(resp.body.as_ref(), b"404 Not Found");
    assert!(resp.set_cookie.is_none());
}

#[test]
fn test_bad_request_helper() {
    let resp = Response::bad_request();

    assert_eq!(resp.status, 400);
    assert_eq!(resp.body.as_ref(), b"400 Bad Request");
}

#[test]
fn test_html_helper_sets_content_type() {
    let resp = Response::html("<h1>hi</h1>");

    assert_eq!(resp.status, 200);
    assert_eq!(resp.content_type, "text/html; charset=utf-8");
}
