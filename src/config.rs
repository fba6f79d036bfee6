//! Backend endpoint resolution.

/// Default backend when neither the flag nor the environment override it.
pub const DEFAULT_API_URL: &str = "http://localhost:3010";

/// Environment override for the backend base URL.
pub const API_URL_ENV: &str = "SLATE_API_URL";

/// Resolve the backend base URL: CLI flag, then environment, then the
/// compiled default.
pub fn resolve_api_url(flag: Option<String>) -> String {
    resolve_from(flag, std::env::var(API_URL_ENV).ok())
}

fn resolve_from(flag: Option<String>, env_value: Option<String>) -> String {
    let url = flag
        .or(env_value)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    // Trailing slash would double up in path joins.
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_env() {
        let url = resolve_from(
            Some("http://flag:1000".to_string()),
            Some("http://env:2000".to_string()),
        );
        assert_eq!(url, "http://flag:1000");
    }

    #[test]
    fn test_env_wins_over_default() {
        let url = resolve_from(None, Some("http://env:2000".to_string()));
        assert_eq!(url, "http://env:2000");
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(resolve_from(None, None), DEFAULT_API_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let url = resolve_from(Some("http://flag:1000/".to_string()), None);
        assert_eq!(url, "http://flag:1000");
    }
}
