//! Cleanup of the raw decoded symbol stream

/// Drop the first occurrence of `marker` and everything after it.
///
/// An empty marker leaves the text untouched.
pub fn truncate_at_marker<'a>(raw: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return raw;
    }
    raw.find(marker).map_or(raw, |pos| &raw[..pos])
}

/// Collapse runs of the same character into one.
///
/// Lossy: a genuine double letter ("ll" in "hello") is folded too.
pub fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous = None;

    for ch in text.chars() {
        if previous != Some(ch) {
            out.push(ch);
        }
        previous = Some(ch);
    }

    out
}

/// Collapse whitespace runs to a single space and trim both ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turn a raw symbol stream into presentable text
pub fn postprocess(raw: &str, end_marker: Option<&str>, collapse: bool) -> String {
    let kept = match end_marker {
        Some(marker) => truncate_at_marker(raw, marker),
        None => raw,
    };

    if collapse {
        normalize_whitespace(&collapse_repeats(kept))
    } else {
        normalize_whitespace(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_at_first_marker() {
        assert_eq!(truncate_at_marker("hello EOT garbage", "EOT"), "hello ");
        assert_eq!(truncate_at_marker("aEOTbEOTc", "EOT"), "a");
        assert_eq!(truncate_at_marker("no marker", "EOT"), "no marker");
        assert_eq!(truncate_at_marker("abc", ""), "abc");
    }

    #[test]
    fn collapses_consecutive_duplicates() {
        assert_eq!(collapse_repeats("hheelllo"), "helo");
        assert_eq!(collapse_repeats("abab"), "abab");
        assert_eq!(collapse_repeats(""), "");
    }

    #[test]
    fn collapses_multibyte_characters() {
        assert_eq!(collapse_repeats("ññaaé"), "ñaé");
    }

    #[test]
    fn normalizes_whitespace() {
        assert_eq!(normalize_whitespace("  hi   there  "), "hi there");
        assert_eq!(normalize_whitespace("a\t\nb"), "a b");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn full_postprocess() {
        assert_eq!(postprocess("hheelllo", None, true), "helo");
        assert_eq!(postprocess("hello EOT garbage", Some("EOT"), false), "hello");
        assert_eq!(postprocess("  hi   there  ", None, true), "hi there");
        assert_eq!(postprocess("aabc", Some("c"), true), "ab");
    }

    #[test]
    fn empty_after_marker() {
        assert_eq!(postprocess("EOT trailing", Some("EOT"), true), "");
        assert_eq!(postprocess("", Some("EOT"), true), "");
    }
}
