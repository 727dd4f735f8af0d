use super::*;

use crate::server::middleware::auth::bearer_token;

/// Tests bearer extraction accepts any scheme casing.
///
/// Expected: Some(token) for `Bearer`, `bearer`, and `BEARER`
#[test]
fn accepts_scheme_in_any_case() {
    for scheme in ["Bearer", "bearer", "BEARER"] {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("{} abc.def.ghi", scheme)).unwrap(),
        );

        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }
}

/// Tests malformed authorization headers.
///
/// Expected: None for a missing header, another scheme, or an empty token
#[test]
fn rejects_malformed_headers() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);

    for value in ["Basic abc", "Bearer", "Bearer   ", "abc.def.ghi"] {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));

        assert_eq!(bearer_token(&headers), None, "value: {:?}", value);
    }
}
