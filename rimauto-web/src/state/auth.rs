//! Auth state management.
//!
//! One explicit store behind a Leptos context; every mutation goes through
//! a setter that re-establishes the invariant "no token ⇒ not
//! authenticated" and persists the snapshot under `auth-storage`.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use shared::dto::auth::{TelegramUser, UserInfo};

use crate::storage;
use crate::utils::constants::{KEY_AUTH_SNAPSHOT, KEY_AUTH_TOKEN, KEY_INIT_DATA};

/// The persisted part of the session. The loading flag lives next to it in
/// the context but never reaches storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<UserInfo>,
    pub telegram_user: Option<TelegramUser>,
    pub auth_token: Option<String>,
    pub is_telegram_web_app: bool,
}

impl AuthState {
    /// Re-establish the cross-field invariant after any merge of persisted
    /// and live data.
    pub fn normalize(mut self) -> Self {
        if self.auth_token.as_deref().is_none_or(str::is_empty) {
            self.auth_token = None;
            self.is_authenticated = false;
        }
        self
    }

    /// Display name with the same fallback chain the header always had:
    /// profile name, then Telegram first name, then "Гость".
    pub fn display_name(&self) -> String {
        if let Some(user) = &self.user {
            return user.name.clone();
        }
        if let Some(tg) = &self.telegram_user {
            return tg.first_name.clone();
        }
        "Гость".to_string()
    }

    pub fn avatar(&self) -> Option<String> {
        self.user
            .as_ref()
            .and_then(|u| u.avatar.clone())
            .or_else(|| self.telegram_user.as_ref().and_then(|t| t.photo_url.clone()))
    }
}

/// Global auth context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    pub loading: RwSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()), loading: RwSignal::new(false) }
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated)
    }

    pub fn is_telegram_web_app(&self) -> bool {
        self.state.with(|s| s.is_telegram_web_app)
    }

    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.auth_token.clone())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user.clone())
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    /// Successful login: adopt the backend profile and token.
    pub fn set_user(&self, user: UserInfo, token: String) {
        storage::set_raw(KEY_AUTH_TOKEN, &token);
        self.update(|state| {
            state.is_authenticated = true;
            state.user = Some(user);
            state.auth_token = Some(token);
        });
    }

    /// Remember the bridge identity (and its init data) before the backend
    /// has confirmed anything.
    pub fn set_telegram_user(&self, telegram_user: TelegramUser, init_data: Option<&str>) {
        if let Some(init_data) = init_data {
            storage::set_raw(KEY_INIT_DATA, init_data);
        }
        self.update(|state| {
            state.telegram_user = Some(telegram_user);
            state.is_telegram_web_app = true;
        });
    }

    /// Shallow-merge profile fields (phone save).
    pub fn update_user(&self, merge: impl FnOnce(&mut UserInfo)) {
        self.update(|state| {
            if let Some(user) = state.user.as_mut() {
                merge(user);
            }
        });
    }

    pub fn logout(&self) {
        storage::remove_item(KEY_AUTH_TOKEN);
        storage::remove_item(KEY_INIT_DATA);
        self.state.set(AuthState::default());
        storage::set_item(KEY_AUTH_SNAPSHOT, &AuthState::default());
    }

    /// Boot: restore the persisted snapshot, then overlay whatever raw keys
    /// survived (they are the source of truth for the API client).
    pub fn initialize(&self) {
        let mut restored: AuthState =
            storage::get_item(KEY_AUTH_SNAPSHOT).unwrap_or_default();
        restored.auth_token = storage::get_raw(KEY_AUTH_TOKEN);
        if storage::has_item(KEY_INIT_DATA) {
            restored.is_telegram_web_app = true;
        }
        self.state.set(restored.normalize());
    }

    fn update(&self, mutate: impl FnOnce(&mut AuthState)) {
        let mut next = self.state.get_untracked();
        mutate(&mut next);
        let next = next.normalize();
        storage::set_item(KEY_AUTH_SNAPSHOT, &next);
        self.state.set(next);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_auth_context() -> AuthContext {
    let context = AuthContext::new();
    provide_context(context);
    context
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: 1,
            name: "Иван Петров".into(),
            username: None,
            avatar: None,
            phone: None,
            telegram_id: Some(1),
        }
    }

    #[test]
    fn missing_token_forces_anonymous() {
        let state = AuthState {
            is_authenticated: true,
            user: Some(user()),
            telegram_user: None,
            auth_token: None,
            is_telegram_web_app: false,
        };
        let normalized = state.normalize();
        assert!(!normalized.is_authenticated);
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let state = AuthState {
            is_authenticated: true,
            auth_token: Some(String::new()),
            ..Default::default()
        };
        let normalized = state.normalize();
        assert!(!normalized.is_authenticated);
        assert_eq!(normalized.auth_token, None);
    }

    #[test]
    fn display_name_fallback_chain() {
        let mut state = AuthState::default();
        assert_eq!(state.display_name(), "Гость");

        state.telegram_user = Some(shared::dto::auth::TelegramUser {
            id: 2,
            first_name: "Анна".into(),
            last_name: None,
            username: None,
            photo_url: None,
            is_premium: None,
            language_code: None,
        });
        assert_eq!(state.display_name(), "Анна");

        state.user = Some(user());
        assert_eq!(state.display_name(), "Иван Петров");
    }

    #[test]
    fn snapshot_round_trips_as_json() {
        let state = AuthState {
            is_authenticated: true,
            user: Some(user()),
            telegram_user: None,
            auth_token: Some("tok".into()),
            is_telegram_web_app: true,
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: AuthState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
