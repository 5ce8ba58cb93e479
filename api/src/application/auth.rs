use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::IntoResponse,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use base64::{Engine, engine::general_purpose};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yakjangsu_core::domain::user::{entities::UserProfile, services::UserProfileService};

use super::http::server::app_state::AppState;

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token not found")]
    TokenNotFound,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match self {
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", "Invalid token"),
            AuthError::TokenNotFound => (
                StatusCode::UNAUTHORIZED,
                "E_UNAUTHORIZED",
                "Token not found",
            ),
        };

        let error_response = ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            status: status.as_u16() as i64,
        };

        let body = serde_json::to_string(&error_response).unwrap_or_else(|_| {
            r#"{"code":"INTERNAL_SERVER_ERROR","message":"Failed to serialize error response"}"#
                .to_string()
        });

        axum::response::Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(body.clone().into())
            .unwrap_or_else(|_| axum::response::Response::new(body.into()))
    }
}

/// Claims read out of the (unverified) OAuth id token payload. The token is
/// still forwarded verbatim to the upstream API, which does the verification.
#[derive(Debug, Deserialize)]
struct OAuthClaims {
    sub: Option<String>,
    email: Option<String>,
    name: Option<String>,
}

/// Request identity derived from the bearer token: the matching profile is
/// upserted into the store and the raw token kept for pass-through calls.
pub struct BearerUser {
    pub profile: UserProfile,
    pub token: String,
}

impl<S> FromRequestParts<S> for BearerUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token_from_bearer(parts).await?;

        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(AuthError::InvalidToken);
        }

        let decoded = general_purpose::URL_SAFE_NO_PAD
            .decode(segments[1])
            .map_err(|err| {
                tracing::error!("Failed to decode token payload: {err:?}");
                AuthError::InvalidToken
            })?;
        let payload = String::from_utf8(decoded).map_err(|err| {
            tracing::error!("Failed to decode token payload: {err:?}");
            AuthError::InvalidToken
        })?;
        let claims: OAuthClaims = serde_json::from_str(&payload).map_err(|err| {
            tracing::error!("Failed to deserialize token claims: {err:?}");
            AuthError::InvalidToken
        })?;

        let email = claims.email.unwrap_or_default();
        let user_id = claims.sub.unwrap_or_else(|| email.clone());
        if user_id.is_empty() {
            return Err(AuthError::InvalidToken);
        }
        let name = claims.name.unwrap_or_else(|| user_id.clone());

        let state = AppState::from_ref(state);
        let profile = state
            .service
            .get_or_create_google_user(&user_id, &email, &name)
            .await
            .map_err(|err| {
                tracing::error!("Failed to upsert OAuth user: {err}");
                AuthError::InvalidToken
            })?;

        Ok(BearerUser { profile, token })
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}
