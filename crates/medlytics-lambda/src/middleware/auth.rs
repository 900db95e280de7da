use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use medlytics_auth::error::AuthError;
use medlytics_auth::jwt;
use medlytics_core::storage_keys::ANONYMOUS_OWNER;

use crate::error::ApiError;
use crate::state::AppState;

/// Caller identification middleware.
///
/// No `Authorization` header means an anonymous caller. A `Bearer` token must
/// validate against the configured secret; anything else is rejected with 401.
/// Inserts a [`Caller`] into request extensions for handlers to use.
pub async fn identify_caller(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = match req.headers().get(AUTHORIZATION) {
        None => None,
        Some(value) => {
            let header = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
            let token = jwt::bearer_token(header)?;
            let secret = state.jwt_secret.as_deref().ok_or(AuthError::MissingSecret)?;
            let claims = jwt::validate_token(token, secret.as_bytes())?;
            Some(AuthUser { sub: claims.sub })
        }
    };

    req.extensions_mut().insert(Caller { user });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}

/// Whoever made the request, authenticated or not.
#[derive(Clone, Debug, Default)]
pub struct Caller {
    pub user: Option<AuthUser>,
}

impl Caller {
    /// Owner id recorded on analyses this caller creates.
    pub fn owner_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.sub.as_str())
    }

    /// Subject for audit events.
    pub fn subject(&self) -> &str {
        self.owner_id().unwrap_or(ANONYMOUS_OWNER)
    }

    pub fn require_user(&self) -> Result<&AuthUser, ApiError> {
        self.user
            .as_ref()
            .ok_or_else(|| ApiError::Unauthorized("sign in to view analysis history".to_string()))
    }
}
