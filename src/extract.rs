use crate::pattern;

/// Page used when the text carries no `?p=` parameter.
pub const DEFAULT_PAGE: &str = "1";

/// What the player needs to know about a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIds {
    /// The id following `/video/`, e.g. `BV1xx411c7mD`.
    pub video_id: String,
    /// The part number following `?p=`. Digits only.
    pub page: String,
}

/// Pulls a video id and page number out of arbitrary text.
///
/// Returns `None` when no `/video/<id>` is present. The page search is
/// independent of the id search, so `?p=` may appear anywhere in `text`.
///
/// This does not check that `text` contains a Bilibili URL at all; callers
/// that need that guarantee use [`contains_video_url`] first.
pub fn extract(text: &str) -> Option<PlayerIds> {
    let video_id = pattern::video_id().captures(text)?.get(1)?.as_str();

    let page = pattern::page()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(DEFAULT_PAGE, |m| m.as_str());

    Some(PlayerIds {
        video_id: video_id.to_string(),
        page: page.to_string(),
    })
}

/// True if `text` contains a URL of the recognized Bilibili shape.
pub fn contains_video_url(text: &str) -> bool {
    pattern::url().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(video_id: &str, page: &str) -> Option<PlayerIds> {
        Some(PlayerIds {
            video_id: video_id.to_string(),
            page: page.to_string(),
        })
    }

    #[test]
    fn id_without_page_defaults_to_first_page() {
        assert_eq!(extract("watch /video/AbC123 now"), ids("AbC123", "1"));
    }

    #[test]
    fn id_and_page_from_full_url() {
        assert_eq!(
            extract("https://www.bilibili.com/video/BV1xx?p=3"),
            ids("BV1xx", "3")
        );
    }

    #[test]
    fn no_video_segment_fails() {
        assert_eq!(extract("no video link here"), None);
        assert_eq!(extract("https://www.bilibili.com/?p=3"), None);
        assert_eq!(extract("/video/"), None);
    }

    #[test]
    fn page_may_precede_video_segment() {
        assert_eq!(extract("?p=7 then /video/BV9"), ids("BV9", "7"));
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            extract("/video/AAA?p=2 and /video/BBB?p=5"),
            ids("AAA", "2")
        );
    }

    #[test]
    fn id_stops_at_first_non_alphanumeric() {
        assert_eq!(
            extract("https://www.bilibili.com/video/BV1xx411c7mD/?spm_id_from=333&p=4"),
            ids("BV1xx411c7mD", "1")
        );
        assert_eq!(extract("/video/av_170001"), ids("av", "1"));
    }

    #[test]
    fn delimiters_are_case_insensitive() {
        assert_eq!(extract("HTTPS://WWW.BILIBILI.COM/VIDEO/BV1?P=12"), ids("BV1", "12"));
    }

    #[test]
    fn markdown_link_text_is_accepted() {
        assert_eq!(
            extract("[clip](https://www.bilibili.com/video/BV1Q5?p=2)"),
            ids("BV1Q5", "2")
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "https://www.bilibili.com/video/BV1xx?p=3";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn url_gate_matches_only_bilibili() {
        assert!(contains_video_url("look https://www.bilibili.com/video/BV1"));
        assert!(!contains_video_url("watch /video/AbC123 now"));
    }
}
