//! HTML form method override.
//!
//! Browsers only submit forms with GET or POST. A POST carrying `_method=DELETE`, `PUT`
//! or `PATCH` in its query string is rewritten to that method before routing, so delete
//! buttons can target the same path as the resource they remove.

use axum::{
    extract::Request,
    http::{Method, Uri},
};

const OVERRIDE_PARAM: &str = "_method";

/// Rewrites the method of an overridable POST request.
///
/// Applied through `tower::util::MapRequestLayer` around the whole router. Requests that
/// are not POST, or carry no recognised override, pass through unchanged.
pub fn method_override(mut request: Request) -> Request {
    if request.method() != Method::POST {
        return request;
    }

    if let Some(method) = override_method(request.uri()) {
        tracing::debug!("Overriding POST {} as {}", request.uri().path(), method);
        *request.method_mut() = method;
    }

    request
}

/// Reads the override method from the query string.
fn override_method(uri: &Uri) -> Option<Method> {
    let query = uri.query()?;

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == OVERRIDE_PARAM)
        .and_then(|(_, value)| match value.to_ascii_uppercase().as_str() {
            "DELETE" => Some(Method::DELETE),
            "PUT" => Some(Method::PUT),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        })
}
