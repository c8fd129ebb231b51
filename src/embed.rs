//! Embedded player HTML.

use crate::extract::PlayerIds;
use crate::settings::Settings;

/// Player endpoint the iframe points at.
pub const PLAYER_URL: &str = "https://player.bilibili.com/player.html";

/// Player behaviour switches rendered into the iframe query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedOptions {
    pub autoplay: bool,
    pub danmaku: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for EmbedOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            autoplay: settings.enable_auto_play,
            danmaku: settings.enable_danmaku,
        }
    }
}

/// Formats the embed snippet for `video_id` / `page`, ending in a newline.
///
/// Inputs are inlined verbatim. They must come from [`crate::extract`], whose
/// patterns only admit ASCII alphanumerics and digits.
pub fn build(video_id: &str, page: &str, opts: &EmbedOptions) -> String {
    let autoplay = flag(opts.autoplay);
    let danmaku = flag(opts.danmaku);
    format!(
        concat!(
            r#"<div style="position: relative; width: 100%; height: 0; padding-bottom: 75%;">"#,
            r#"<iframe src="{url}?bvid={id}&p={page}&autoplay={autoplay}&danmaku={danmaku}" "#,
            r#"scrolling="no" border="0" frameborder="no" framespacing="0" allowfullscreen="true" "#,
            r#"style="position: absolute; width: 100%; height: 100%; left: 0; top: 0;"> </iframe>"#,
            "</div>\n",
        ),
        url = PLAYER_URL,
        id = video_id,
        page = page,
        autoplay = autoplay,
        danmaku = danmaku,
    )
}

/// [`build`] for an already extracted id pair.
pub fn build_for(ids: &PlayerIds, opts: &EmbedOptions) -> String {
    build(&ids.video_id, &ids.page, opts)
}

fn flag(on: bool) -> &'static str {
    if on { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_carries_ids_and_flags() {
        let opts = EmbedOptions {
            autoplay: true,
            danmaku: false,
        };
        let html = build("BV1xx", "3", &opts);
        assert!(
            html.contains(r#"src="https://player.bilibili.com/player.html?bvid=BV1xx&p=3&autoplay=1&danmaku=0""#),
            "{html}"
        );
    }

    #[test]
    fn snippet_matches_template_exactly() {
        let html = build("BV9", "1", &EmbedOptions::default());
        let want = "<div style=\"position: relative; width: 100%; height: 0; padding-bottom: 75%;\">\
<iframe src=\"https://player.bilibili.com/player.html?bvid=BV9&p=1&autoplay=0&danmaku=1\" \
scrolling=\"no\" border=\"0\" frameborder=\"no\" framespacing=\"0\" allowfullscreen=\"true\" \
style=\"position: absolute; width: 100%; height: 100%; left: 0; top: 0;\"> </iframe></div>\n";
        assert_eq!(html, want);
    }

    #[test]
    fn options_follow_settings() {
        let settings = Settings {
            enhance_default_paste: false,
            enable_auto_play: true,
            enable_danmaku: false,
        };
        let opts = EmbedOptions::from(&settings);
        assert!(opts.autoplay);
        assert!(!opts.danmaku);
    }

    #[test]
    fn build_for_uses_extracted_ids() {
        let ids = PlayerIds {
            video_id: "BVabc".to_string(),
            page: "2".to_string(),
        };
        let html = build_for(&ids, &EmbedOptions::default());
        assert!(html.contains("bvid=BVabc&p=2&"), "{html}");
        assert!(html.ends_with("</div>\n"));
    }
}
