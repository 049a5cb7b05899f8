//! Session token lookup in the `Cookie` request header.
//!
//! A missing header, a missing cookie or a header that is not valid ASCII all
//! mean "no token"; none of them is an error at this layer.

use axum::http::{HeaderMap, header};

pub const TOKEN_COOKIE_NAME: &str = "token";

/// Return the value of the `token` cookie, if any.
///
/// HTTP/2 clients may split cookies over several `Cookie` headers, so all of them are searched.
pub fn token_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name.trim() == TOKEN_COOKIE_NAME).then(|| value.trim().trim_matches('"'))
        })
}
