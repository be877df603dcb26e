//! Telegram authentication flow.
//!
//! Bridges three identity sources into one [`AuthState`]: WebApp init data
//! (seamless login inside Telegram), the Login Widget (web), and the debug
//! fixture (debug builds). Network failures here are reported, never fatal;
//! the app keeps running anonymously.

use shared::dto::auth::{AuthResponse, SavePhoneRequest, TelegramUser, UserInfo, WidgetAuthData};

use crate::platform::telegram;
use crate::platform::token::{self, AuthFlowError};
use crate::services::api::{self, ApiError};
use crate::state::auth::AuthContext;

/// Result of a widget login, returned instead of thrown so the page can
/// render the error inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebAuthOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl WebAuthOutcome {
    fn ok() -> Self {
        Self { success: true, error: None }
    }

    fn err(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()) }
    }
}

/// Boot-time entry point: restore the persisted session, then attempt a
/// seamless login when running inside Telegram.
pub async fn initialize(auth: AuthContext) {
    auth.initialize();
    if telegram::is_telegram_web_app() {
        init_telegram_auth(auth).await;
    }
}

/// Seamless WebApp login. No-op outside Telegram; missing init data is
/// normal on first paint and just leaves the user anonymous.
pub async fn init_telegram_auth(auth: AuthContext) {
    if !telegram::is_telegram_web_app() {
        return;
    }
    auth.set_loading(true);

    let (init_data, tg_user) = match (telegram::init_data(), telegram::telegram_user()) {
        (Some(data), Some(user)) => (data, user),
        _ => {
            log::info!("auth: no telegram init data");
            auth.set_loading(false);
            return;
        }
    };

    auth.set_telegram_user(tg_user.clone(), Some(&init_data));

    match token::issuer().issue(&init_data, &tg_user).await {
        Ok(session) => {
            auth.set_user(session.user, session.token);
            telegram::show_alert("Добро пожаловать!");
        }
        Err(AuthFlowError::Rejected(message)) => {
            log::error!("auth: rejected: {message}");
            telegram::show_alert(&message);
        }
        Err(AuthFlowError::Api(err)) => {
            log::error!("auth: telegram login failed: {err}");
            telegram::show_alert("Не удалось войти, попробуйте позже");
        }
    }
    auth.set_loading(false);
}

/// Web login via the Telegram Login Widget.
pub async fn handle_telegram_web_auth(auth: AuthContext, data: WidgetAuthData) -> WebAuthOutcome {
    auth.set_loading(true);
    let result = api::post::<AuthResponse, _>("/auth/telegram-web", &data).await;
    auth.set_loading(false);

    match result {
        Ok(response) if response.success => match (response.user, response.token) {
            (Some(user), Some(token)) => {
                auth.set_user(user, token);
                auth.set_telegram_user(widget_user(&data), None);
                WebAuthOutcome::ok()
            }
            _ => WebAuthOutcome::err("Ошибка авторизации"),
        },
        Ok(response) => {
            WebAuthOutcome::err(response.message.unwrap_or_else(|| "Ошибка авторизации".into()))
        }
        Err(ApiError::Http { detail, .. }) => WebAuthOutcome::err(detail),
        Err(err) => {
            log::error!("auth: widget login failed: {err}");
            WebAuthOutcome::err("Ошибка подключения")
        }
    }
}

/// Check the stored token. Logs out on a definitively invalid token; a
/// transport error keeps the session (it will be rechecked).
pub async fn validate_token(auth: AuthContext) -> bool {
    let Some(current) = auth.token() else {
        return false;
    };
    match token::issuer().validate(&current).await {
        Ok(true) => true,
        Ok(false) => {
            log::info!("auth: token invalid, logging out");
            auth.logout();
            false
        }
        Err(err) => {
            log::error!("auth: validation error: {err}");
            false
        }
    }
}

/// Logout: tell the backend (best effort), always clear local state.
pub async fn logout(auth: AuthContext) {
    if auth.token().is_some() {
        if let Err(err) = api::post::<serde_json::Value, _>("/auth/logout", &serde_json::json!({})).await
        {
            log::warn!("auth: logout request failed: {err}");
        }
    }
    auth.logout();
}

/// Persist a phone number and shallow-merge the response into the profile.
pub async fn save_phone(auth: AuthContext, phone: String) -> Result<(), ApiError> {
    let updated: UserInfo =
        api::post("/auth/save-phone", &SavePhoneRequest { phone }).await?;
    auth.update_user(|user| {
        user.phone = updated.phone.clone();
        if !updated.name.is_empty() {
            user.name = updated.name.clone();
        }
    });
    Ok(())
}

fn widget_user(data: &WidgetAuthData) -> TelegramUser {
    TelegramUser {
        id: data.id,
        first_name: data.first_name.clone(),
        last_name: data.last_name.clone(),
        username: data.username.clone(),
        photo_url: data.photo_url.clone(),
        is_premium: None,
        language_code: None,
    }
}
