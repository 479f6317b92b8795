use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::{
    id::UserId,
    session::{CurrentSession, SessionToken},
};
use registry::AppRegistry;
use shared::error::AppError;
use std::convert::Infallible;

/// A request that carries a live session, either as a bearer token or in
/// the session cookie.
pub struct AuthorizedUser {
    pub token: SessionToken,
    pub session: CurrentSession,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.session.user.user_id
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(parts, registry)
            .await
            .ok_or(AppError::UnauthenticatedError)?;
        let session = registry
            .session_repository()
            .find_current(&token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self { token, session })
    }
}

/// The session token, if the request has one. Pages resolve the session
/// themselves, so a missing token is not a rejection here.
pub struct MaybeSessionToken(pub Option<SessionToken>);

#[async_trait]
impl FromRequestParts<AppRegistry> for MaybeSessionToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(session_token(parts, registry).await))
    }
}

async fn session_token(parts: &mut Parts, registry: &AppRegistry) -> Option<SessionToken> {
    if let Ok(TypedHeader(Authorization(bearer))) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, registry).await
    {
        return Some(SessionToken::new(bearer.token()));
    }

    CookieJar::from_headers(&parts.headers)
        .get(&registry.auth_config().cookie_name)
        .map(|cookie| SessionToken::new(cookie.value()))
}
