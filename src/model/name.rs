use lazy_static::lazy_static;
use regex::Regex;

use super::types::MetricName;

lazy_static! {
    static ref METRIC_NAME_RE: Regex = Regex::new(r"[^a-zA-Z0-9:_]").unwrap();
}

/// Replaces every character outside `[a-zA-Z0-9:_]` with `_` and prepends
/// `_` if the result starts with a digit.
pub fn sanitize_metric_name(key: &str) -> MetricName {
    let name = METRIC_NAME_RE.replace_all(key, "_");

    match name.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{}", name),
        _ => name.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_metric_name() {
        #[rustfmt::skip]
        let tests = [
            ("requests", "requests"),
            ("2xx.count", "_2xx_count"),
            ("http.server.requests", "http_server_requests"),
            ("jvm:memory_used", "jvm:memory_used"),
            ("latency-p99 (ms)", "latency_p99__ms_"),
            ("größe", "gr__e"),
            ("9", "_9"),
            ("_9", "_9"),
            (".9", "_9"),
            ("", ""),
        ];

        for (input, expected) in &tests {
            assert_eq!(*expected, sanitize_metric_name(input), "input: {:?}", input);
        }
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for input in &["2xx.count", "a b c", "0", "ok_name", "日本", "::", "1:2"] {
            let once = sanitize_metric_name(input);
            assert_eq!(once, sanitize_metric_name(&once));
        }
    }

    #[test]
    fn test_sanitized_charset() {
        for input in &["5xx/errors", "é", "tab\there", "0.0.0.0:80"] {
            let name = sanitize_metric_name(input);

            assert!(!name.starts_with(|c: char| c.is_ascii_digit()), "{}", name);
            assert!(
                name.chars().all(|c| c.is_ascii_alphanumeric() || c == ':' || c == '_'),
                "{}",
                name
            );
        }
    }
}
