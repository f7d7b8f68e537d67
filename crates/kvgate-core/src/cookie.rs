//! Cookie jar string format.
//!
//! A jar is a single text blob of `key=value` segments separated by `;`.
//! Segments may carry leading whitespace after the separator. Lookups are
//! first-match-wins on the `key=` prefix.

use crate::error::{KvError, Result};

/// Separator used when this module writes a jar back out.
const SEGMENT_SEPARATOR: &str = "; ";

/// Iterate the non-empty segments of a jar, leading whitespace removed.
fn segments(jar: &str) -> impl Iterator<Item = &str> {
    jar.split(';')
        .map(str::trim_start)
        .filter(|segment| !segment.is_empty())
}

/// Return the value following `key=` in the first matching segment.
pub fn lookup<'a>(jar: &'a str, key: &str) -> Option<&'a str> {
    segments(jar).find_map(|segment| {
        segment
            .strip_prefix(key)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

/// Names of every segment in jar order. Segments without `=` are skipped.
pub fn keys(jar: &str) -> Vec<&str> {
    segments(jar)
        .filter_map(|segment| segment.split_once('=').map(|(name, _)| name))
        .collect()
}

/// Replace the first `key=` segment with `key=value`, or append one.
///
/// Later duplicates of `key` are left in place; they are unreachable through
/// [`lookup`] anyway.
pub fn upsert(jar: &str, key: &str, value: &str) -> String {
    let fresh = format_segment(key, value);
    let mut replaced = false;
    let mut out: Vec<String> = Vec::new();

    for segment in segments(jar) {
        if !replaced && matches_key(segment, key) {
            out.push(fresh.clone());
            replaced = true;
        } else {
            out.push(segment.to_string());
        }
    }
    if !replaced {
        out.push(fresh);
    }
    out.join(SEGMENT_SEPARATOR)
}

/// Drop every segment named `key`.
pub fn without(jar: &str, key: &str) -> String {
    segments(jar)
        .filter(|segment| !matches_key(segment, key))
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Reject a name that would not read back as the same segment.
///
/// Names may not contain `=` or `;`, and may not start or end with
/// whitespace (segments are trimmed when the jar is parsed).
pub fn check_name(name: &str) -> Result<()> {
    if name.contains(['=', ';']) {
        return Err(KvError::InvalidArgument(format!(
            "cookie name {name:?} must not contain '=' or ';'"
        )));
    }
    if name.trim() != name {
        return Err(KvError::InvalidArgument(format!(
            "cookie name {name:?} must not start or end with whitespace"
        )));
    }
    Ok(())
}

/// Reject a value that would split into more than one segment.
pub fn check_value(value: &str) -> Result<()> {
    if value.contains(';') {
        return Err(KvError::InvalidArgument(
            "cookie value must not contain ';'".to_string(),
        ));
    }
    Ok(())
}

/// Format one `key=value` segment.
pub fn format_segment(key: &str, value: &str) -> String {
    format!("{key}={value}")
}

fn matches_key(segment: &str, key: &str) -> bool {
    segment
        .strip_prefix(key)
        .is_some_and(|rest| rest.starts_with('='))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_mixed_spacing() {
        let jar = "a=1; b=2;c=3";
        assert_eq!(lookup(jar, "a"), Some("1"));
        assert_eq!(lookup(jar, "b"), Some("2"));
        assert_eq!(lookup(jar, "c"), Some("3"));
        assert_eq!(lookup(jar, "z"), None);
    }

    #[test]
    fn test_lookup_leading_space_on_first_segment() {
        assert_eq!(lookup(" x=1", "x"), Some("1"));
        assert_eq!(lookup("a=1;    \tx=9", "x"), Some("9"));
    }

    #[test]
    fn test_lookup_empty_jar() {
        assert_eq!(lookup("", "a"), None);
        assert_eq!(lookup(";;", "a"), None);
    }

    #[test]
    fn test_lookup_first_match_wins() {
        assert_eq!(lookup("k=first; k=second", "k"), Some("first"));
    }

    #[test]
    fn test_lookup_requires_exact_key_prefix() {
        // "ab=2" must not satisfy a lookup for "a"
        assert_eq!(lookup("ab=2", "a"), None);
        assert_eq!(lookup("ab=2; a=1", "a"), Some("1"));
    }

    #[test]
    fn test_lookup_value_may_contain_equals() {
        assert_eq!(lookup("token=abc==", "token"), Some("abc=="));
    }

    #[test]
    fn test_lookup_empty_value() {
        assert_eq!(lookup("a=", "a"), Some(""));
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        assert_eq!(upsert("a=1; b=2;c=3", "b", "20"), "a=1; b=20; c=3");
    }

    #[test]
    fn test_upsert_appends_missing_key() {
        assert_eq!(upsert("a=1", "b", "2"), "a=1; b=2");
        assert_eq!(upsert("", "b", "2"), "b=2");
    }

    #[test]
    fn test_without_drops_all_duplicates() {
        assert_eq!(without("a=1; b=2; a=3", "a"), "b=2");
        assert_eq!(without("a=1", "a"), "");
        assert_eq!(without("a=1", "z"), "a=1");
    }

    #[test]
    fn test_check_name_rejects_jar_syntax() {
        for bad in ["a=b", "a;b", " k", "k ", "\tk"] {
            assert!(
                matches!(check_name(bad), Err(KvError::InvalidArgument(_))),
                "{bad:?}"
            );
        }
        assert!(check_name("session-id").is_ok());
        assert!(check_name("a b").is_ok());
    }

    #[test]
    fn test_check_value_rejects_separator() {
        assert!(matches!(check_value("1;b=2"), Err(KvError::InvalidArgument(_))));
        assert!(check_value("abc==").is_ok());
        assert!(check_value("").is_ok());
    }

    #[test]
    fn test_keys_in_order() {
        assert_eq!(keys(" a=1;b=2; flag; c="), vec!["a", "b", "c"]);
    }
}
