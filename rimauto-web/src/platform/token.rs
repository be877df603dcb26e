//! Session token issuance and validation.
//!
//! Two implementations behind one capability interface:
//!
//! - [`RemoteTokenIssuer`] sends the Telegram identity to the backend and
//!   gets a real session back. This is the only issuer release builds know.
//! - [`LocalFixtureTokenIssuer`] (debug builds) fabricates a base64 JSON
//!   envelope `{user, debug, exp}` with a 24-hour expiry and validates it
//!   purely client-side. It never talks to the network.
//!
//! The selection happens in exactly one place ([`issuer`]); pages never
//! branch on debug mode themselves.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::dto::auth::{AuthResponse, TelegramUser, UserInfo, ValidateResponse, WebAppAuthRequest};

use crate::services::api::{self, ApiError};

pub const DEBUG_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// What a successful issue produces: the backend profile plus the bearer
/// token pages attach to later calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub user: UserInfo,
    pub token: String,
}

#[derive(Debug, Error)]
pub enum AuthFlowError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The backend answered but refused the identity.
    #[error("{0}")]
    Rejected(String),
}

#[async_trait(?Send)]
pub trait TokenIssuer {
    async fn issue(
        &self,
        init_data: &str,
        user: &TelegramUser,
    ) -> Result<IssuedSession, AuthFlowError>;

    /// `Ok(false)` means "token no longer valid, log out"; errors are
    /// transport problems that should not end the session.
    async fn validate(&self, token: &str) -> Result<bool, AuthFlowError>;
}

/// Select the issuer for this build. Release builds compile only the
/// remote arm, so the fixture path is structurally unreachable there.
pub fn issuer() -> Box<dyn TokenIssuer> {
    #[cfg(debug_assertions)]
    if crate::platform::telegram::debug_mode_enabled() {
        return Box::new(LocalFixtureTokenIssuer);
    }
    Box::new(RemoteTokenIssuer)
}

// --- Remote --------------------------------------------------------------

pub struct RemoteTokenIssuer;

#[async_trait(?Send)]
impl TokenIssuer for RemoteTokenIssuer {
    async fn issue(
        &self,
        init_data: &str,
        user: &TelegramUser,
    ) -> Result<IssuedSession, AuthFlowError> {
        let request = WebAppAuthRequest { init_data: init_data.to_string(), user: user.clone() };
        let response: AuthResponse = api::post("/auth/telegram-webapp", &request).await?;
        match (response.success, response.user, response.token) {
            (true, Some(user), Some(token)) => Ok(IssuedSession { user, token }),
            _ => Err(AuthFlowError::Rejected(
                response.message.unwrap_or_else(|| "Ошибка авторизации".to_string()),
            )),
        }
    }

    async fn validate(&self, _token: &str) -> Result<bool, AuthFlowError> {
        match api::get::<ValidateResponse>("/auth/validate").await {
            Ok(body) => Ok(body.valid),
            Err(err) if err.is_unauthorized() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

// --- Debug token envelope ------------------------------------------------

/// Client-fabricated session envelope. Only ever decoded locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebugClaims {
    pub user: UserInfo,
    pub debug: bool,
    pub exp: i64,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is not a debug envelope")]
    Malformed,
    #[error("token expired")]
    Expired,
}

pub fn encode_debug_token(claims: &DebugClaims) -> String {
    let json = serde_json::to_string(claims).unwrap_or_default();
    BASE64.encode(json)
}

pub fn decode_debug_token(token: &str) -> Result<DebugClaims, TokenError> {
    let bytes = BASE64.decode(token).map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice::<DebugClaims>(&bytes).map_err(|_| TokenError::Malformed)
}

/// Decode and check expiry against `now` (unix seconds). A token without
/// the `debug` marker is rejected outright.
pub fn validate_debug_token(token: &str, now: i64) -> Result<DebugClaims, TokenError> {
    let claims = decode_debug_token(token)?;
    if !claims.debug {
        return Err(TokenError::Malformed);
    }
    if claims.exp <= now {
        return Err(TokenError::Expired);
    }
    Ok(claims)
}

/// Profile shown in debug sessions, derived from the bridge user the same
/// way the backend derives real profiles.
pub fn debug_user_from(tg: &TelegramUser) -> UserInfo {
    UserInfo {
        id: tg.id,
        name: tg.full_name(),
        username: tg.username.clone(),
        avatar: tg.photo_url.clone(),
        phone: None,
        telegram_id: Some(tg.id),
    }
}

// --- Local fixture (debug builds only) -----------------------------------

#[cfg(debug_assertions)]
pub struct LocalFixtureTokenIssuer;

#[cfg(debug_assertions)]
#[async_trait(?Send)]
impl TokenIssuer for LocalFixtureTokenIssuer {
    async fn issue(
        &self,
        _init_data: &str,
        user: &TelegramUser,
    ) -> Result<IssuedSession, AuthFlowError> {
        let profile = debug_user_from(user);
        let claims = DebugClaims {
            user: profile.clone(),
            debug: true,
            exp: chrono::Utc::now().timestamp() + DEBUG_TOKEN_TTL_SECS,
        };
        Ok(IssuedSession { user: profile, token: encode_debug_token(&claims) })
    }

    async fn validate(&self, token: &str) -> Result<bool, AuthFlowError> {
        Ok(validate_debug_token(token, chrono::Utc::now().timestamp()).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp: i64) -> DebugClaims {
        DebugClaims {
            user: UserInfo {
                id: 1,
                name: "Иван Петров".to_string(),
                username: Some("ivan_petrov".to_string()),
                avatar: None,
                phone: None,
                telegram_id: Some(1),
            },
            debug: true,
            exp,
        }
    }

    #[test]
    fn round_trips_through_base64() {
        let original = claims(2_000_000_000);
        let token = encode_debug_token(&original);
        assert_eq!(decode_debug_token(&token).unwrap(), original);
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = 1_700_000_000;
        let token = encode_debug_token(&claims(now - 10));
        assert_eq!(validate_debug_token(&token, now), Err(TokenError::Expired));
    }

    #[test]
    fn live_token_passes() {
        let now = 1_700_000_000;
        let token = encode_debug_token(&claims(now + 60));
        assert!(validate_debug_token(&token, now).is_ok());
    }

    #[test]
    fn garbage_is_malformed_not_a_panic() {
        assert_eq!(validate_debug_token("%%%not-base64%%%", 0), Err(TokenError::Malformed));
        let not_claims = BASE64.encode("{\"just\": \"json\"}");
        assert_eq!(validate_debug_token(&not_claims, 0), Err(TokenError::Malformed));
    }

    #[test]
    fn non_debug_envelope_is_rejected() {
        let mut c = claims(2_000_000_000);
        c.debug = false;
        let token = encode_debug_token(&c);
        assert_eq!(validate_debug_token(&token, 0), Err(TokenError::Malformed));
    }
}
