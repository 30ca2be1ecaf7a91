//! Viewport breakpoints and layout metrics.
//!
//! The carousel paging arithmetic is breakpoint-dependent: narrow viewports
//! page one item at a time, wide viewports page three. The boundary is
//! expressed in logical pixels so the same arithmetic holds regardless of
//! which surface reports the width. Terminals that expose their window size
//! in pixels report it directly; otherwise the width is estimated from the
//! column count.

/// Viewport width breakpoints, in logical pixels.
pub mod breakpoints {
    /// Boundary between single-item and multi-item carousel paging.
    pub const MOBILE_WIDTH: u32 = 768;
}

/// Items shown per carousel page at or below the mobile breakpoint.
pub const MOBILE_VISIBLE: usize = 1;

/// Items shown per carousel page above the mobile breakpoint.
pub const DESKTOP_VISIBLE: usize = 3;

/// Estimated cell width in logical pixels, used when the terminal does not
/// report its window size in pixels.
pub const FALLBACK_CELL_PX: u32 = 8;

/// Rendered width of a single carousel card, in cells. Cards are uniform
/// width, so a track translation is always `offset * CARD_CELL_WIDTH`.
pub const CARD_CELL_WIDTH: u16 = 26;

/// Rows occupied by one portfolio section (title plus carousel row).
pub const SECTION_ROWS: u16 = 10;

/// Number of carousel items visible for a given viewport width.
///
/// Re-evaluated on every navigation call rather than cached, so paging is
/// always consistent with the current layout.
pub fn visible_count(viewport_width_px: u32) -> usize {
    if viewport_width_px <= breakpoints::MOBILE_WIDTH {
        MOBILE_VISIBLE
    } else {
        DESKTOP_VISIBLE
    }
}

/// Source of layout measurements for the paging arithmetic.
///
/// Injected into `CarouselController` so the cyclic paging can be exercised
/// without a real rendering surface.
pub trait LayoutMetrics {
    /// Current viewport width in logical pixels.
    fn viewport_width(&self) -> u32;

    /// Rendered width of a single carousel item, in the surface's
    /// horizontal units.
    fn item_width(&self, carousel_id: &str) -> u16;
}

/// Current terminal viewport dimensions.
///
/// `width_px` carries the pixel width reported by the terminal when
/// available; the fallback estimate is `cols * FALLBACK_CELL_PX`.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Terminal width in columns
    pub cols: u16,
    /// Terminal height in rows
    pub rows: u16,
    /// Viewport width in logical pixels
    pub width_px: u32,
}

impl Viewport {
    /// Create a viewport from cell dimensions and an optional pixel width.
    pub fn new(cols: u16, rows: u16, width_px: Option<u32>) -> Self {
        Self {
            cols,
            rows,
            width_px: width_px.unwrap_or(cols as u32 * FALLBACK_CELL_PX),
        }
    }

    /// Items visible per carousel page at this viewport width.
    pub fn visible_count(&self) -> usize {
        visible_count(self.width_px)
    }

    /// Whether this viewport is on the single-item side of the breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.width_px <= breakpoints::MOBILE_WIDTH
    }
}

impl Default for Viewport {
    /// Standard 80x24 terminal with the fallback pixel estimate.
    fn default() -> Self {
        Self::new(80, 24, None)
    }
}

impl LayoutMetrics for Viewport {
    fn viewport_width(&self) -> u32 {
        self.width_px
    }

    fn item_width(&self, _carousel_id: &str) -> u16 {
        CARD_CELL_WIDTH
    }
}
