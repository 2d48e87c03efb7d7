use super::*;

fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

// =============================================================
// Bearer header
// =============================================================

#[test]
fn token_present_adds_bearer_header() {
    let headers = merged_headers(Some("tok-1"), &[]);
    assert_eq!(header(&headers, "Authorization"), Some("Bearer tok-1"));
}

#[test]
fn token_absent_omits_authorization_entirely() {
    let headers = merged_headers(None, &[]);
    assert_eq!(header(&headers, "Authorization"), None);
}

#[test]
fn caller_cannot_clobber_bearer_header() {
    let caller = vec![("Authorization".to_owned(), "Basic abc".to_owned())];
    let headers = merged_headers(Some("tok-1"), &caller);
    assert_eq!(header(&headers, "Authorization"), Some("Bearer tok-1"));
}

// =============================================================
// Content type and caller headers
// =============================================================

#[test]
fn default_content_type_is_json() {
    let headers = merged_headers(None, &[]);
    assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
}

#[test]
fn caller_may_override_content_type() {
    let caller = vec![("content-type".to_owned(), "text/plain".to_owned())];
    let headers = merged_headers(None, &caller);
    assert_eq!(header(&headers, "Content-Type"), Some("text/plain"));
    // Replacement, not duplication.
    assert_eq!(
        headers.iter().filter(|(n, _)| n.eq_ignore_ascii_case("content-type")).count(),
        1
    );
}

#[test]
fn caller_headers_pass_through() {
    let caller = vec![("X-Request-Id".to_owned(), "r-7".to_owned())];
    let headers = merged_headers(Some("tok-1"), &caller);
    assert_eq!(header(&headers, "X-Request-Id"), Some("r-7"));
}
