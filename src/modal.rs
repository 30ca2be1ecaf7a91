//! Portfolio modal lifecycle.
//!
//! The modal owns the single currently-mounted piece of embedded content.
//! Opening replaces any prior content wholesale (at most one content value
//! exists at a time); closing drops the content, which stops any playback
//! by detaching it rather than hiding it. While the modal is open,
//! background scrolling is suppressed through the injected [`ScrollLock`].

use crate::media::{self, MediaKind};

/// Descriptive label attached to mounted images.
pub const IMAGE_ALT: &str = "Portfolio project";

/// Maximum display box for native video playback, in cells. Video content
/// is constrained rather than full-bleed.
pub const VIDEO_MAX_COLS: u16 = 100;
pub const VIDEO_MAX_ROWS: u16 = 28;

/// Suppresses and restores background scrolling for the duration the modal
/// is open. The document-level effect lives with the surface; injecting it
/// keeps the modal lifecycle testable headless.
pub trait ScrollLock {
    /// Suppress background scrolling.
    fn lock(&mut self);
    /// Restore background scrolling.
    fn unlock(&mut self);
}

/// Content mounted inside the modal, built from a classified media URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedContent {
    /// YouTube embed player inside a fixed 16:9 frame. The embed URL
    /// carries autoplay, a looped single-video playlist, minimal branding,
    /// and no related-video suggestions.
    Youtube { embed_url: String },
    /// Google Drive preview mounted directly in an embedded 16:9 frame,
    /// with autoplay and fullscreen permitted.
    DriveFrame { url: String },
    /// Native video player with visible controls, autoplay, and looping,
    /// constrained to a maximum display box.
    VideoPlayer { url: String },
    /// Plain image with a generic descriptive label. Covers both static
    /// images and gif-kind content.
    Picture { url: String, alt: String },
}

impl EmbedContent {
    /// Build the content for a classified URL.
    ///
    /// Returns `None` only when a YouTube URL yields no extractable id; the
    /// modal then mounts nothing for that open (silent no-render).
    pub fn build(kind: MediaKind, url: &str) -> Option<Self> {
        match kind {
            MediaKind::Youtube => {
                let Some(id) = media::extract_youtube_id(url) else {
                    tracing::warn!("no YouTube id in '{}', mounting nothing", url);
                    return None;
                };
                Some(EmbedContent::Youtube {
                    embed_url: youtube_embed_url(id),
                })
            }
            MediaKind::DrivePreview => Some(EmbedContent::DriveFrame {
                url: url.to_string(),
            }),
            MediaKind::Video => Some(EmbedContent::VideoPlayer {
                url: url.to_string(),
            }),
            MediaKind::Image | MediaKind::Gif => Some(EmbedContent::Picture {
                url: url.to_string(),
                alt: IMAGE_ALT.to_string(),
            }),
        }
    }

    /// Whether this content renders inside the fixed 16:9 aspect frame.
    pub fn is_aspect_framed(&self) -> bool {
        matches!(
            self,
            EmbedContent::Youtube { .. } | EmbedContent::DriveFrame { .. }
        )
    }

    /// The URL to hand to the system browser when launching externally.
    pub fn launch_url(&self) -> &str {
        match self {
            EmbedContent::Youtube { embed_url } => embed_url,
            EmbedContent::DriveFrame { url }
            | EmbedContent::VideoPlayer { url }
            | EmbedContent::Picture { url, .. } => url,
        }
    }

    /// Short human-readable description of the mounted content.
    pub fn label(&self) -> &str {
        match self {
            EmbedContent::Youtube { .. } => "YouTube player",
            EmbedContent::DriveFrame { .. } => "Drive preview",
            EmbedContent::VideoPlayer { .. } => "Video",
            EmbedContent::Picture { alt, .. } => alt,
        }
    }
}

/// Embeddable player URL for a YouTube video id: autoplay on, the video
/// looped as a single-entry playlist, modest branding, no related videos.
pub fn youtube_embed_url(id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&loop=1&playlist={id}&modestbranding=1&rel=0"
    )
}

/// Open/close state plus the single mounted content slot.
#[derive(Debug, Default)]
pub struct PortfolioModal {
    active: bool,
    content: Option<EmbedContent>,
}

impl PortfolioModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the modal is currently shown.
    pub fn is_open(&self) -> bool {
        self.active
    }

    /// The currently mounted content, if any.
    pub fn content(&self) -> Option<&EmbedContent> {
        self.content.as_ref()
    }

    /// Open the modal with content built from a classified URL.
    ///
    /// Prior content is cleared first, so opening while already open leaves
    /// exactly one content value mounted. The modal becomes active even
    /// when a YouTube id fails to extract; the content slot just stays
    /// empty for that open, matching the silent no-render policy.
    pub fn open(&mut self, kind: MediaKind, url: &str, scroll: &mut dyn ScrollLock) {
        self.content = None;
        self.content = EmbedContent::build(kind, url);
        self.active = true;
        scroll.lock();
        tracing::debug!(?kind, url, mounted = self.content.is_some(), "modal opened");
    }

    /// Close the modal, dropping the mounted content and restoring
    /// background scrolling.
    pub fn close(&mut self, scroll: &mut dyn ScrollLock) {
        self.active = false;
        self.content = None;
        scroll.unlock();
        tracing::debug!("modal closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records lock/unlock transitions for assertions.
    #[derive(Default)]
    struct TestScroll {
        locked: bool,
        lock_calls: usize,
        unlock_calls: usize,
    }

    impl ScrollLock for TestScroll {
        fn lock(&mut self) {
            self.locked = true;
            self.lock_calls += 1;
        }

        fn unlock(&mut self) {
            self.locked = false;
            self.unlock_calls += 1;
        }
    }

    #[test]
    fn test_youtube_embed_url_shape() {
        assert_eq!(
            youtube_embed_url("abc123"),
            "https://www.youtube.com/embed/abc123?autoplay=1&loop=1&playlist=abc123&modestbranding=1&rel=0"
        );
    }

    #[test]
    fn test_build_youtube_requires_id() {
        let content =
            EmbedContent::build(MediaKind::Youtube, "https://youtu.be/xyz789").unwrap();
        assert!(matches!(content, EmbedContent::Youtube { .. }));
        assert!(content.is_aspect_framed());

        // Host marker without a recognizable id pattern: nothing to mount
        assert_eq!(
            EmbedContent::build(MediaKind::Youtube, "https://youtube.com"),
            None
        );
    }

    #[test]
    fn test_build_drive_frame_uses_url_directly() {
        let url = "https://drive.google.com/file/d/1AbC/preview";
        let content = EmbedContent::build(MediaKind::DrivePreview, url).unwrap();
        assert_eq!(content.launch_url(), url);
        assert!(content.is_aspect_framed());
    }

    #[test]
    fn test_build_picture_carries_label() {
        let content = EmbedContent::build(MediaKind::Gif, "shot.webp").unwrap();
        assert_eq!(content.label(), IMAGE_ALT);
        assert!(!content.is_aspect_framed());
    }

    #[test]
    fn test_open_locks_and_mounts() {
        let mut modal = PortfolioModal::new();
        let mut scroll = TestScroll::default();

        modal.open(MediaKind::Video, "clip.mp4", &mut scroll);
        assert!(modal.is_open());
        assert!(scroll.locked);
        assert!(matches!(
            modal.content(),
            Some(EmbedContent::VideoPlayer { .. })
        ));
    }

    #[test]
    fn test_reopen_replaces_content_wholesale() {
        let mut modal = PortfolioModal::new();
        let mut scroll = TestScroll::default();

        modal.open(MediaKind::Video, "clip.mp4", &mut scroll);
        modal.open(MediaKind::Image, "photo.jpg", &mut scroll);

        // Exactly one content value is mounted: the second
        match modal.content() {
            Some(EmbedContent::Picture { url, .. }) => assert_eq!(url, "photo.jpg"),
            other => panic!("expected the second open's picture, got {:?}", other),
        }
        assert_eq!(scroll.lock_calls, 2);
    }

    #[test]
    fn test_open_with_bad_youtube_url_mounts_nothing() {
        let mut modal = PortfolioModal::new();
        let mut scroll = TestScroll::default();

        modal.open(MediaKind::Youtube, "https://youtube.com", &mut scroll);
        // The modal still activates and locks; the content slot stays empty
        assert!(modal.is_open());
        assert!(scroll.locked);
        assert_eq!(modal.content(), None);
    }

    #[test]
    fn test_close_drops_content_and_unlocks() {
        let mut modal = PortfolioModal::new();
        let mut scroll = TestScroll::default();

        modal.open(MediaKind::Video, "clip.mp4", &mut scroll);
        modal.close(&mut scroll);

        assert!(!modal.is_open());
        assert_eq!(modal.content(), None);
        assert!(!scroll.locked);
        assert_eq!(scroll.unlock_calls, 1);
    }
}
