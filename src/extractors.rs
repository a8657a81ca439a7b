use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::names;

/// Token of the visitor's play-through, read from the play cookie.
pub struct PlayCookie(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for PlayCookie {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(names::PLAY_COOKIE_NAME)
            .map(|c| c.value().to_string());
        Ok(PlayCookie(token))
    }
}
