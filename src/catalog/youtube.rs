/// YouTube video identifier extraction
///
/// Turns whatever was pasted into a project's YouTube field into the
/// 11-character video id, and from there into embed and thumbnail URLs.
/// Absence of an id is a normal outcome, never an error.

use regex::Regex;
use std::sync::LazyLock;

/// Privacy-enhanced embed host
const EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";

/// Thumbnail host, `{id}` is substituted
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi/";

/// Patterns tried in order; the first one that matches wins.
///
/// The loose patterns after the first catch malformed links that still carry
/// a recognizable id fragment.
static VIDEO_ID_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([a-zA-Z0-9_-]{11})",
        r"v=([a-zA-Z0-9_-]{11})",
        r"be/([a-zA-Z0-9_-]{11})",
        r"embed/([a-zA-Z0-9_-]{11})",
    ]
    .map(|pattern| Regex::new(pattern).expect("static video id pattern"))
});

/// Extract the 11-character video id from a free-form YouTube URL
///
/// Returns `None` for empty input or when no pattern matches.
pub fn video_id(url: &str) -> Option<&str> {
    if url.is_empty() {
        return None;
    }

    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Build the embeddable player URL, or `None` when no id can be extracted
pub fn embed_url(url: &str) -> Option<String> {
    video_id(url).map(|id| format!("{EMBED_BASE}{id}"))
}

/// Build the high-quality thumbnail URL for a video id
pub fn thumbnail_url(id: &str) -> String {
    format!("{THUMBNAIL_BASE}{id}/hqdefault.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn extracts_id_from_standard_forms() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "www.youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://youtu.be/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgXcQ?si=abc",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "youtube.com/embed/dQw4w9WgXcQ",
        ];

        for url in urls {
            assert_eq!(video_id(url), Some(ID), "url: {url}");
        }
    }

    #[test]
    fn empty_input_is_not_found() {
        assert_eq!(video_id(""), None);
        assert_eq!(embed_url(""), None);
    }

    #[test]
    fn unrelated_url_is_not_found() {
        assert_eq!(video_id("https://vimeo.com/123456789"), None);
        assert_eq!(embed_url("https://github.com/someone/project"), None);
    }

    #[test]
    fn falls_back_to_query_fragment() {
        // Not a youtube.com host, so only the `v=` fallback can match.
        let url = "https://m.example.org/player?list=PL1&v=dQw4w9WgXcQ";
        assert_eq!(video_id(url), Some(ID));
    }

    #[test]
    fn falls_back_to_short_and_embed_fragments() {
        assert_eq!(video_id("https://www.youtu.be/dQw4w9WgXcQ"), Some(ID));
        assert_eq!(video_id("https://music.youtube.com/shorts-be/dQw4w9WgXcQ"), Some(ID));
        assert_eq!(video_id("https://proxy.local/embed/dQw4w9WgXcQ"), Some(ID));
    }

    #[test]
    fn first_matching_pattern_wins() {
        // The full form matches the path id even though a `v=` fragment follows.
        let url = "https://youtu.be/dQw4w9WgXcQ?v=AAAAAAAAAAA";
        assert_eq!(video_id(url), Some(ID));
    }

    #[test]
    fn pattern_priority_beats_position() {
        // A looser fragment earlier in the text loses to the full URL form.
        let url = "see v=BBBBBBBBBBB then https://youtu.be/dQw4w9WgXcQ";
        assert_eq!(video_id(url), Some(ID));

        // `v=` outranks `embed/` even when `embed/` comes first.
        let url = "embed/CCCCCCCCCCC v=dQw4w9WgXcQ";
        assert_eq!(video_id(url), Some(ID));

        // `be/` outranks `embed/` the same way.
        let url = "embed/CCCCCCCCCCC be/dQw4w9WgXcQ";
        assert_eq!(video_id(url), Some(ID));
    }

    #[test]
    fn short_token_is_not_found() {
        assert_eq!(video_id("https://youtu.be/short"), None);
    }

    #[test]
    fn embed_url_uses_nocookie_host() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn thumbnail_url_is_built_from_id() {
        assert_eq!(
            thumbnail_url(ID),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }

    #[test]
    fn extraction_is_repeatable() {
        let url = "garbage text v=abcDEF_12-3 trailing";
        assert_eq!(video_id(url), video_id(url));
        assert_eq!(video_id(url), Some("abcDEF_12-3"));
    }
}
