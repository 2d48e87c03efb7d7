//! Authorized HTTP helper for communicating with the backend services.
//!
//! Client-side (wasm32): real HTTP calls via `gloo-net`. The header merge
//! itself is target-independent so it can be unit tested natively.
//!
//! ERROR HANDLING
//! ==============
//! No retry, no timeout, no response validation: the raw response or
//! transport error is handed back to the caller unmodified.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Merge order: fixed JSON content type first, then caller headers, then
/// the bearer header when a token is present. Callers may override
/// `Content-Type` but cannot clobber `Authorization`.
pub fn merged_headers(token: Option<&str>, caller: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
    for (name, value) in caller {
        set_header(&mut headers, name, value);
    }
    if let Some(token) = token {
        set_header(&mut headers, "Authorization", &format!("Bearer {token}"));
    }
    headers
}

// Header names are case-insensitive; replace in place so the merge never
// produces duplicate slots.
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
        Some(slot) => slot.1 = value.to_owned(),
        None => headers.push((name.to_owned(), value.to_owned())),
    }
}

/// Issue a request with the session's bearer token attached. With no token
/// stored, the authorization header is omitted entirely.
///
/// # Errors
///
/// Propagates `gloo-net` build and transport failures unmodified.
#[cfg(target_arch = "wasm32")]
pub async fn authorized_fetch(
    method: gloo_net::http::Method,
    url: &str,
    headers: &[(String, String)],
    body: Option<String>,
) -> Result<gloo_net::http::Response, gloo_net::Error> {
    use gloo_net::http::RequestBuilder;

    use crate::store::SessionStore;

    let token = SessionStore::browser().token();
    let mut request = RequestBuilder::new(url).method(method);
    for (name, value) in merged_headers(token.as_deref(), headers) {
        request = request.header(&name, &value);
    }
    let request = match body {
        Some(body) => request.body(body)?,
        None => request.build()?,
    };
    request.send().await
}
