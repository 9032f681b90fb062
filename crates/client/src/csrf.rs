//! CSRF cookie extraction
//!
//! Mutating requests echo the `csrftoken` cookie back in a header. The
//! cookie value is URL-encoded by the backend, so it is decoded here.

use percent_encoding::percent_decode_str;

/// Read one cookie out of a `Cookie` header string
///
/// `header` is the `name=value; other=value` form. Returns the
/// percent-decoded value of the first cookie named exactly `name`.
pub fn read_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| percent_decode_str(value).decode_utf8().ok())
        .map(|value| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cookie() {
        assert_eq!(
            read_cookie("csrftoken=abc123", "csrftoken"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_among_other_cookies() {
        let header = "sessionid=xyz; csrftoken=tok%2Fen%3D; theme=dark";
        assert_eq!(read_cookie(header, "csrftoken"), Some("tok/en=".to_string()));
        assert_eq!(read_cookie(header, "theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_prefix_does_not_match() {
        assert_eq!(read_cookie("xcsrftoken=abc", "csrftoken"), None);
        assert_eq!(read_cookie("csrftoken2=abc", "csrftoken"), None);
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(read_cookie("", "csrftoken"), None);
        assert_eq!(read_cookie("sessionid=xyz", "csrftoken"), None);
    }

    #[test]
    fn test_value_with_equals_sign() {
        assert_eq!(read_cookie("a=b=c", "a"), Some("b=c".to_string()));
    }
}
