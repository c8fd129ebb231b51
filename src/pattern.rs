//! Compiled patterns for the link shapes this crate recognizes.
//!
//! Every pattern is compiled once on first use and shared afterwards.

use regex::Regex;
use std::sync::OnceLock;

/// A Bilibili video page URL, with or without a scheme.
///
/// `https://bilibili.com/...`, `http://www.bilibili.com/...` and the bare
/// `www.bilibili.com/...` form all match. At least two non-whitespace chars
/// must follow `bilibili.`.
const URL_SHAPE: &str = r"(?:https?://(?:www\.)?bilibili\.\S{2,}|www\.bilibili\.\S{2,})";

static URL_RE: OnceLock<Regex> = OnceLock::new();
static MARKDOWN_LINK_RE: OnceLock<Regex> = OnceLock::new();
static VIDEO_ID_RE: OnceLock<Regex> = OnceLock::new();
static PAGE_RE: OnceLock<Regex> = OnceLock::new();

pub(crate) fn url() -> &'static Regex {
    URL_RE.get_or_init(|| compile(&format!("(?i){URL_SHAPE}")))
}

/// `[label](url)` where `url` has the recognized shape and `label` contains no
/// square brackets.
pub(crate) fn markdown_link() -> &'static Regex {
    MARKDOWN_LINK_RE.get_or_init(|| compile(&format!(r"(?i)\[[^\[\]]*\]\({URL_SHAPE}\)")))
}

/// Group 1 is the id. Only the delimiter is case-insensitive: a case-folded
/// class would also admit non-ASCII letters such as the Kelvin sign.
pub(crate) fn video_id() -> &'static Regex {
    VIDEO_ID_RE.get_or_init(|| compile(r"(?i:/video/)([0-9A-Za-z]+)"))
}

/// Group 1 is the page number.
pub(crate) fn page() -> &'static Regex {
    PAGE_RE.get_or_init(|| compile(r"(?i:\?p=)([0-9]+)"))
}

fn compile(pattern: &str) -> Regex {
    // patterns are fixed at compile time; failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        let _ = url();
        let _ = markdown_link();
        let _ = video_id();
        let _ = page();
    }

    #[test]
    fn url_accepts_scheme_and_bare_www_forms() {
        for s in [
            "https://www.bilibili.com/video/BV1",
            "http://bilibili.com/video/BV1",
            "www.bilibili.com/video/BV1",
            "HTTPS://WWW.BILIBILI.COM/VIDEO/BV1",
        ] {
            assert!(url().is_match(s), "{s}");
        }
    }

    #[test]
    fn url_rejects_other_hosts_and_short_tails() {
        assert!(!url().is_match("https://www.youtube.com/watch?v=abc"));
        assert!(!url().is_match("https://bilibili.c"));
        assert!(!url().is_match("https://m.bilibili.com/video/BV1"));
        assert!(!url().is_match("bilibili.com/video/BV1"));
    }

    #[test]
    fn markdown_link_stops_at_closing_paren() {
        let line = "[clip](https://www.bilibili.com/video/BV1) after";
        let m = markdown_link().find(line).unwrap();
        assert_eq!(m.as_str(), "[clip](https://www.bilibili.com/video/BV1)");
    }

    #[test]
    fn video_id_ignores_non_ascii_letters() {
        let caps = video_id().captures("/video/BV1\u{212A}x").unwrap();
        assert_eq!(&caps[1], "BV1");
    }
}
