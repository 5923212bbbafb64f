const MAX_API_ERROR_CHARS: usize = 200;

/// Markers whose following token is a credential we might otherwise echo.
/// The Gemini API carries the key as a `key=` query parameter, so transport
/// errors that print the request URL must never pass through unscrubbed.
const SECRET_MARKERS: [&str; 2] = ["key=", "Bearer "];

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

/// Redact credential tokens and cap the length of upstream error text before
/// it enters logs or error chains.
pub fn sanitize_api_error(raw: &str) -> String {
    let mut scrubbed = raw.to_string();

    for marker in SECRET_MARKERS {
        let mut search_from = 0;
        while let Some(rel) = scrubbed[search_from..].find(marker) {
            let token_start = search_from + rel + marker.len();
            let token_len: usize = scrubbed[token_start..]
                .chars()
                .take_while(|c| is_token_char(*c))
                .map(char::len_utf8)
                .sum();

            // Skip bare markers without a token value.
            if token_len == 0 {
                search_from = token_start;
                continue;
            }

            scrubbed.replace_range(token_start..token_start + token_len, "[REDACTED]");
            search_from = token_start + "[REDACTED]".len();
        }
    }

    if scrubbed.chars().count() > MAX_API_ERROR_CHARS {
        let truncated: String = scrubbed.chars().take(MAX_API_ERROR_CHARS).collect();
        format!("{truncated}…")
    } else {
        scrubbed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_key_query_param() {
        let input = "error sending request for url https://example.com/v1beta/models/m:generateContent?key=AIzaSySECRET123";
        let out = sanitize_api_error(input);
        assert!(!out.contains("AIzaSySECRET123"));
        assert!(out.contains("key=[REDACTED]"));
    }

    #[test]
    fn redacts_bearer_tokens() {
        let out = sanitize_api_error("unauthorized: Bearer eyJhbGciOiJIUzI1Ni rejected");
        assert!(!out.contains("eyJhbGciOiJIUzI1Ni"));
        assert!(out.contains("Bearer [REDACTED]"));
    }

    #[test]
    fn bare_marker_without_token_is_untouched() {
        assert_eq!(
            sanitize_api_error("query had key= and nothing else"),
            "query had key= and nothing else"
        );
        assert_eq!(sanitize_api_error("key= "), "key= ");
    }

    #[test]
    fn truncates_long_messages() {
        let input = "x".repeat(500);
        let out = sanitize_api_error(&input);
        assert!(out.chars().count() <= MAX_API_ERROR_CHARS + 1);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn short_clean_messages_pass_through() {
        assert_eq!(sanitize_api_error("quota exceeded"), "quota exceeded");
    }
}
