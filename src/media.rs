//! Media URL classification.
//!
//! Given the destination URL of a portfolio item, determines what kind of
//! content the modal should mount:
//! - YouTube host markers (`youtube.com`, `youtu.be`) -> [`MediaKind::Youtube`]
//! - Google Drive file path in preview form -> [`MediaKind::DrivePreview`]
//! - otherwise by file extension: video, gif, or image (default)
//!
//! Classification is a pure function of the URL string; it is computed per
//! activation and never stored.

use once_cell::sync::Lazy;
use regex::Regex;

/// File extensions treated as directly playable video. `download` is a
/// legacy pseudo-extension kept for old Drive direct-download links.
pub const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "webm", "ogg", "mov", "download"];

/// Extensions rendered as animated/alternate images.
pub const GIF_EXTENSIONS: [&str; 2] = ["gif", "webp"];

/// Regex extracting a YouTube video id from long-form URLs
/// (`watch?v=ID`, `/embed/ID`, `/v/ID`) and short-form (`youtu.be/ID`).
/// The id terminates at the first `&` when further query parameters follow.
static YOUTUBE_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/(?:[^/]+/.+/|\w+/|watch\?v=))([^&]+)|youtu\.be/([^&]+)")
        .expect("Invalid YouTube id regex pattern")
});

/// The kind of content a media URL resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A YouTube watch/embed/short link, playable via the embed player
    Youtube,
    /// A Google Drive file link in `/preview` form, embeddable directly
    DrivePreview,
    /// A directly playable video file
    Video,
    /// An animated or alternate-format image (gif, webp)
    Gif,
    /// A static image; the default when nothing else matches
    Image,
}

/// Classify a media URL into the kind of content to mount.
pub fn classify(url: &str) -> MediaKind {
    if url.contains("youtube.com") || url.contains("youtu.be") {
        return MediaKind::Youtube;
    }
    if url.contains("drive.google.com/file/d/") && url.contains("/preview") {
        return MediaKind::DrivePreview;
    }

    // Substring after the final '.', lowercased. A URL without a dot yields
    // the whole string, which falls through to the image default.
    let extension = url.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        MediaKind::Video
    } else if GIF_EXTENSIONS.contains(&extension.as_str()) {
        MediaKind::Gif
    } else {
        MediaKind::Image
    }
}

/// Extract the video id from a YouTube URL.
///
/// Returns `None` when no recognizable pattern matches; callers treat that
/// as "cannot embed" and mount nothing rather than failing.
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    let caps = YOUTUBE_ID_REGEX.captures(url)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_youtube_long_form() {
        assert_eq!(
            classify("https://www.youtube.com/watch?v=abc123"),
            MediaKind::Youtube
        );
    }

    #[test]
    fn test_classify_youtube_short_form() {
        assert_eq!(classify("https://youtu.be/xyz789"), MediaKind::Youtube);
    }

    #[test]
    fn test_classify_drive_preview() {
        assert_eq!(
            classify("https://drive.google.com/file/d/1AbC/preview"),
            MediaKind::DrivePreview
        );
    }

    #[test]
    fn test_classify_drive_without_preview_falls_through() {
        // A Drive path without /preview is classified by extension instead;
        // no extension match means the image default.
        assert_eq!(
            classify("https://drive.google.com/file/d/1AbC/view"),
            MediaKind::Image
        );
    }

    #[test]
    fn test_classify_legacy_download_extension() {
        assert_eq!(classify("https://cdn.example.com/reel.download"), MediaKind::Video);
    }

    #[test]
    fn test_classify_video_extensions() {
        assert_eq!(classify("clip.mp4"), MediaKind::Video);
        assert_eq!(classify("clip.webm"), MediaKind::Video);
        assert_eq!(classify("clip.ogg"), MediaKind::Video);
        assert_eq!(classify("clip.mov"), MediaKind::Video);
    }

    #[test]
    fn test_classify_extension_case_insensitive() {
        assert_eq!(classify("REEL.MP4"), MediaKind::Video);
        assert_eq!(classify("shot.WebP"), MediaKind::Gif);
    }

    #[test]
    fn test_classify_gif_kinds() {
        assert_eq!(classify("shot.gif"), MediaKind::Gif);
        assert_eq!(classify("shot.webp"), MediaKind::Gif);
    }

    #[test]
    fn test_classify_image_default() {
        assert_eq!(classify("photo.jpg"), MediaKind::Image);
        assert_eq!(classify("photo.png"), MediaKind::Image);
        assert_eq!(classify("no-extension"), MediaKind::Image);
    }

    #[test]
    fn test_extract_id_watch_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=abc123"),
            Some("abc123")
        );
    }

    #[test]
    fn test_extract_id_short_url() {
        assert_eq!(extract_youtube_id("https://youtu.be/xyz789"), Some("xyz789"));
    }

    #[test]
    fn test_extract_id_stops_at_ampersand() {
        assert_eq!(
            extract_youtube_id("https://youtu.be/xyz789&t=5"),
            Some("xyz789")
        );
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=abc123&list=PL1"),
            Some("abc123")
        );
    }

    #[test]
    fn test_extract_id_embed_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_extract_id_v_path() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/v/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_extract_id_unrecognized_url() {
        assert_eq!(extract_youtube_id("https://example.com/watch?v=abc"), None);
        assert_eq!(extract_youtube_id("not a url"), None);
    }
}
