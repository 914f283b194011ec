use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Cookie holding the library bearer token.
pub const TOKEN_COOKIE: &str = "library_token";

/// The stored bearer token, if the visitor is logged in.
pub fn token_from(jar: &CookieJar) -> Option<String> {
    jar.get(TOKEN_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|t| !t.is_empty())
}

pub fn store_token(jar: CookieJar, token: String, secure: bool) -> CookieJar {
    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

pub fn clear_token(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(TOKEN_COOKIE).path("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};

    fn jar_with(cookie: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn test_token_read_from_cookie() {
        assert_eq!(
            token_from(&jar_with("library_token=abc; other=1")),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_empty_token_means_logged_out() {
        assert_eq!(token_from(&jar_with("library_token=")), None);
        assert_eq!(token_from(&CookieJar::new()), None);
    }

    #[test]
    fn test_store_then_clear() {
        let jar = store_token(CookieJar::new(), "tok".into(), false);
        assert_eq!(token_from(&jar), Some("tok".to_string()));
        let jar = clear_token(jar);
        assert_eq!(token_from(&jar), None);
    }
}
