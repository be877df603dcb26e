//! URL query helpers.
//!
//! The Login Widget redirect and the auth-debug page read parameters before
//! the router has settled, so these go straight to `window.location`.

use std::collections::HashMap;

use web_sys::window;

/// Get a single query parameter from the current URL.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    parse_query(&search).remove(key)
}

/// All query parameters of the current URL, decoded.
pub fn get_query_params() -> HashMap<String, String> {
    window()
        .and_then(|w| w.location().search().ok())
        .map(|s| parse_query(&s))
        .unwrap_or_default()
}

/// Parse a query string (with or without the leading '?'). Keys without a
/// value map to the empty string.
pub fn parse_query(search: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let query = search.strip_prefix('?').unwrap_or(search);
    // A hash router can leave a fragment glued to the query
    let query = query.split('#').next().unwrap_or(query);
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or_default();
        let value = parts.next().unwrap_or_default();
        let decoded = urlencoding::decode(value)
            .map(|c| c.into_owned())
            .unwrap_or_else(|_| value.to_string());
        params.insert(key.to_string(), decoded);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_pairs() {
        let params = parse_query("?page=2&title=Han");
        assert_eq!(params.get("page").map(String::as_str), Some("2"));
        assert_eq!(params.get("title").map(String::as_str), Some("Han"));
    }

    #[test]
    fn decodes_values() {
        let params = parse_query("city=%D0%9C%D0%BE%D1%81%D0%BA%D0%B2%D0%B0");
        assert_eq!(params.get("city").map(String::as_str), Some("Москва"));
    }

    #[test]
    fn valueless_key_maps_to_empty() {
        let params = parse_query("debug&x=1");
        assert_eq!(params.get("debug").map(String::as_str), Some(""));
    }

    #[test]
    fn trailing_fragment_is_ignored() {
        let params = parse_query("?token=abc#/cars");
        assert_eq!(params.get("token").map(String::as_str), Some("abc"));
    }
}
