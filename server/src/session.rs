use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::{cookie::SameSite, MemoryStore, Session, SessionManagerLayer};
use tracing::debug;

use crate::{
    errors::{AuthError, RestError, RestResult},
    model::user::User,
};

pub const SESSION_COOKIE: &str = "session";
const USER_KEY: &str = "user";

pub fn session_layer(secure_cookies: bool) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_path("/")
        .with_http_only(true)
        .with_same_site(SameSite::Strict)
        .with_secure(secure_cookies)
}

/// Session handle usable in documented handlers
pub struct CurrentSession(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Session::from_request_parts(parts, state)
            .await
            .map(CurrentSession)
    }
}

impl aide::OperationInput for CurrentSession {}

/// Bind `user` to a fresh session id
pub async fn start_session(session: &Session, user: &User) -> RestResult<()> {
    session.cycle_id().await?;
    session.insert(USER_KEY, user).await?;
    Ok(())
}

/// Drop the session and expire its cookie
pub async fn end_session(session: &Session) -> RestResult<()> {
    session.flush().await?;
    Ok(())
}

/// Resolves the session into an `Extension<User>`; rejects with 401 when
/// there is none. Runs before the handler reads the request body.
pub async fn require_user(session: Session, mut request: Request, next: Next) -> Response {
    match session.get::<User>(USER_KEY).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Ok(None) => {
            debug!("Rejected unauthenticated request to {}", request.uri().path());
            RestError::Authorization(AuthError::NotAuthenticated).into_response()
        }
        Err(e) => RestError::from(e).into_response(),
    }
}
