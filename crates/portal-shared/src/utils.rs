//! Utility functions

/// Canonical form of a route path.
///
/// Query string and fragment are dropped, duplicate slashes collapse, a
/// leading `/` is guaranteed and a trailing `/` is removed (except for `/`).
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return "/".to_string();
    }

    format!("/{}", segments.join("/"))
}

/// True when `path` equals `prefix` or continues it at a `/` boundary.
///
/// `/doctor/statistics/trends` is under `/doctor/statistics`,
/// `/doctor/statistics-other` is not.
pub fn is_segment_prefix(path: &str, prefix: &str) -> bool {
    if prefix == "/" {
        return path.starts_with('/');
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Reads a persisted boolean (auth flag, sidebar preference).
///
/// Only `true` and `1` count as set; anything else, including garbage, is unset.
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/doctor/"), "/doctor");
        assert_eq!(normalize_path("doctor//patients"), "/doctor/patients");
        assert_eq!(normalize_path("/doctor/patients?tab=1#top"), "/doctor/patients");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn test_segment_prefix() {
        assert!(is_segment_prefix("/doctor/statistics/trends", "/doctor/statistics"));
        assert!(is_segment_prefix("/doctor/statistics", "/doctor/statistics"));
        assert!(!is_segment_prefix("/doctor/statistics-other", "/doctor/statistics"));
        assert!(!is_segment_prefix("/doc", "/doctor"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("TRUE!"));
        assert!(!parse_flag(""));
    }
}
