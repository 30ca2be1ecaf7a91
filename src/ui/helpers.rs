//! Small rendering helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to at most `max_width` display cells, appending an
/// ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Short tag shown on carousel cards for a media kind.
pub fn kind_tag(kind: crate::media::MediaKind) -> &'static str {
    use crate::media::MediaKind;
    match kind {
        MediaKind::Youtube => "youtube",
        MediaKind::DrivePreview => "drive",
        MediaKind::Video => "video",
        MediaKind::Gif => "gif",
        MediaKind::Image => "image",
    }
}
