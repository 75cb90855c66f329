use minihttpd::http::request::{Method, Request, RequestBuilder};

fn request(path: &str) -> Request {
    RequestBuilder::new()
        .method(Method::GET)
        .path(path)
        .build()
        .unwrap()
}

#[test]
fn test_method_from_known_tokens() {
    assert_eq!(Method::from("GET"), Method::GET);
    assert_eq!(Method::from("POST"), Method::POST);
    assert_eq!(Method::from("DELETE"), Method::DELETE);
}

#[test]
fn test_method_is_case_sensitive() {
    assert_eq!(Method::from("Get"), Method::Other("Get".to_string()));
    assert_eq!(Method::from("Get").as_str(), "Get");
}

#[test]
fn test_method_post_ignore_case() {
    assert!(Method::POST.is_post_ignore_case());
    assert!(Method::from("pOsT").is_post_ignore_case());
    assert!(!Method::PUT.is_post_ignore_case());
}

#[test]
fn test_method_display() {
    assert_eq!(Method::PATCH.to_string(), "PATCH");
    assert_eq!(Method::from("BREW").to_string(), "BREW");
}

#[test]
fn test_builder_defaults() {
    let req = request("/");

    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.user_agent, "");
    assert_eq!(req.host, "");
    assert_eq!(req.content_length, 0);
    assert_eq!(req.body, None);
    assert!(req.body_bytes().is_empty());
}

#[test]
fn test_builder_body_sets_content_length() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/files/x")
        .body("hello")
        .build()
        .unwrap();

    assert_eq!(req.content_length, 5);
    assert_eq!(req.body_bytes(), b"hello");
}

#[test]
fn test_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).path("x").build().is_err());
}

#[test]
fn test_first_segment() {
    assert_eq!(request("/").first_segment(), "");
    assert_eq!(request("/echo").first_segment(), "echo");
    assert_eq!(request("/echo/a/b").first_segment(), "echo");
    assert_eq!(request("//echo/a").first_segment(), "");
    assert_eq!(request("/user-agent").first_segment(), "user-agent");
}
