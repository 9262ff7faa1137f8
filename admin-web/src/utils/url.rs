//! URL utilities: query-parameter deep links and the post-deploy redirect.

use web_sys::window;

/// Get a query parameter from the current URL.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    find_query_param(&search, key)
}

/// Find `key` in a raw query string (`?a=1&b=2` or `a=1&b=2`).
fn find_query_param(search: &str, key: &str) -> Option<String> {
    if search.is_empty() {
        return None;
    }
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some((k, value)) if k == key => {
                return Some(
                    urlencoding::decode(value)
                        .unwrap_or_else(|_| value.into())
                        .into_owned(),
                );
            }
            // Bare key with no value
            None if pair == key => return Some(String::new()),
            _ => {}
        }
    }
    None
}

/// The page's own URL with `?buyback=<address>` as the only query parameter.
fn buyback_url(origin: &str, pathname: &str, address: &str) -> String {
    format!("{origin}{pathname}?buyback={}", urlencoding::encode(address))
}

/// Redirect the page to itself, deep-linking the deployed address.
pub fn redirect_with_buyback(address: &str) {
    let Some(window) = window() else { return };
    let location = window.location();
    if let (Ok(origin), Ok(pathname)) = (location.origin(), location.pathname()) {
        let target = buyback_url(&origin, &pathname, address);
        if let Err(error) = location.set_href(&target) {
            log::error!("redirect failed: {error:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_query_param() {
        assert_eq!(
            find_query_param("?token=0xC1&buyback=0xC2", "token").as_deref(),
            Some("0xC1")
        );
        assert_eq!(
            find_query_param("?token=0xC1&buyback=0xC2", "buyback").as_deref(),
            Some("0xC2")
        );
        assert_eq!(find_query_param("?token=0xC1", "buyback"), None);
        assert_eq!(find_query_param("", "token"), None);
    }

    #[test]
    fn test_find_query_param_decodes() {
        assert_eq!(
            find_query_param("?name=a%20b", "name").as_deref(),
            Some("a b")
        );
    }

    #[test]
    fn test_find_query_param_bare_key() {
        assert_eq!(find_query_param("?debug&x=1", "debug").as_deref(), Some(""));
    }

    #[test]
    fn test_buyback_url() {
        assert_eq!(
            buyback_url("https://admin.example", "/buyback/", "0xBBB"),
            "https://admin.example/buyback/?buyback=0xBBB"
        );
    }
}
