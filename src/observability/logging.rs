//! Redaction helpers for anything that may end up in logs.

/// Query/form parameter names whose values are never printed
const SENSITIVE_PARAMS: [&str; 5] = ["token", "client_secret", "code", "secret", "password"];

/// Redact token from a string, preserving prefix for debugging
pub fn redact_token(token: &str) -> String {
    match token.get(..5) {
        Some(prefix) if token.len() > 8 => format!("{}...[REDACTED]", prefix),
        _ => "[REDACTED]".to_string(),
    }
}

/// Whether a parameter name carries a secret
pub fn is_sensitive_param(name: &str) -> bool {
    SENSITIVE_PARAMS
        .iter()
        .any(|sensitive| name.eq_ignore_ascii_case(sensitive))
}

/// Redact a URL, hiding any secrets in query parameters
pub fn redact_url(url: &str) -> String {
    match url.split_once('?') {
        Some((base, query)) => format!("{}?{}", base, redact_query(query)),
        None => url.to_string(),
    }
}

fn redact_query(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if is_sensitive_param(key) => format!("{}=[REDACTED]", key),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}
