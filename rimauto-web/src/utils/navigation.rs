//! Navigation shim over `leptos_router`.
//!
//! Pages navigate through [`routes`] constants instead of string literals,
//! and infrastructure code (the 401 handler) redirects through
//! `window.location` because it runs outside the component tree.

use web_sys::window;

/// Route table. Paths match the previous frontend generation so deep links
/// in already-sent Telegram messages keep working.
pub mod routes {
    pub const ROOT: &str = "/";
    pub const CARS: &str = "/cars";
    pub const MENU: &str = "/menu";
    pub const FAVORITES: &str = "/favorites";
    pub const ORDER: &str = "/order";
    pub const ABOUT: &str = "/about";
    pub const REVIEWS: &str = "/reviews";

    pub const CREDIT: &str = "/credit";
    pub const CREDIT_RENESANS: &str = "/credit/renesans";
    pub const LEASING: &str = "/leasing";
    pub const LEASING_DIRECT: &str = "/leasing/direct";
    pub const INSURANCE: &str = "/insurance";
    pub const GUARANTEE: &str = "/guarantee";

    pub const DETAILING: &str = "/detailing";
    pub const STO: &str = "/sto";
    pub const WASH: &str = "/wash";
    pub const TIRE: &str = "/tire";
    pub const HELP: &str = "/help";

    pub const SPECIAL_TECH: &str = "/special-tech";
    pub const PARTS: &str = "/parts";
    pub const MOTO: &str = "/moto";
    pub const NEWS: &str = "/news";

    pub const ADMIN: &str = "/admin";
    pub const AUTH_DEBUG: &str = "/auth-debug";

    pub fn car(id: &str) -> String {
        format!("/car/{id}")
    }

    pub fn leasing_company(company: &str) -> String {
        format!("/leasing/{company}")
    }

    pub fn insurance_company(company: &str) -> String {
        format!("/insurance/{company}")
    }

    pub fn guarantee_company(company: &str) -> String {
        format!("/guarantee/{company}")
    }
}

/// Hard redirect for use outside components (interceptors, JS callbacks).
/// Inside components prefer `leptos_router::hooks::use_navigate`.
pub fn redirect_to(path: &str) {
    if let Some(win) = window() {
        if win.location().set_href(path).is_err() {
            log::error!("navigation: failed to redirect to {path}");
        }
    }
}

/// Current pathname, or "/" when unavailable.
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// A 401 clears the session everywhere, but only navigates away when the
/// user is not already on an auth-related screen.
pub fn should_redirect_on_unauthorized(path: &str) -> bool {
    !(path.contains("/auth") || path.contains("/login"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_paths_are_exempt_from_401_redirect() {
        assert!(!should_redirect_on_unauthorized("/auth-debug"));
        assert!(!should_redirect_on_unauthorized("/login"));
        assert!(!should_redirect_on_unauthorized("/cars/auth"));
    }

    #[test]
    fn regular_paths_redirect() {
        assert!(should_redirect_on_unauthorized("/cars"));
        assert!(should_redirect_on_unauthorized("/admin"));
        assert!(should_redirect_on_unauthorized("/"));
    }

    #[test]
    fn dynamic_routes_build() {
        assert_eq!(routes::car("a1"), "/car/a1");
        assert_eq!(routes::leasing_company("carcade"), "/leasing/carcade");
    }
}
