//! Cyclic carousel paging.
//!
//! Each portfolio section owns an independent carousel. The controller holds
//! every carousel's page offset in one explicit state container and computes
//! the next offset on navigation with wrap-around semantics: paging forward
//! past the last full page restarts at the beginning, paging backward from
//! the beginning jumps to the last full page.
//!
//! Layout measurements come from an injected [`LayoutMetrics`], so the
//! arithmetic is testable without a rendering surface.

use crate::layout::{visible_count, LayoutMetrics};

/// Navigation direction for a carousel move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Page backward (toward the start)
    Prev,
    /// Page forward (toward the end)
    Next,
}

impl Direction {
    /// Signed page delta: -1 for [`Direction::Prev`], +1 for [`Direction::Next`].
    pub fn delta(self) -> i64 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Result of a carousel move: the new page offset and the horizontal shift
/// to apply to the track (content moves left as the offset grows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    /// New page offset (index into the item sequence, not pixels)
    pub offset: usize,
    /// Track shift in the surface's horizontal units: `offset * item_width`
    pub shift: u32,
}

/// One carousel's identity and paging state.
#[derive(Debug, Clone)]
struct Carousel {
    id: String,
    item_count: usize,
    offset: usize,
}

/// Owns the per-carousel offset map for a fixed set of carousels.
#[derive(Debug, Clone)]
pub struct CarouselController {
    carousels: Vec<Carousel>,
}

impl CarouselController {
    /// Create a controller for a known set of carousels, each given as
    /// `(id, item_count)`. All offsets start at 0.
    pub fn new<I, S>(specs: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        Self {
            carousels: specs
                .into_iter()
                .map(|(id, item_count)| Carousel {
                    id: id.into(),
                    item_count,
                    offset: 0,
                })
                .collect(),
        }
    }

    /// Current page offset for a carousel, or `None` for an unknown id.
    pub fn offset(&self, id: &str) -> Option<usize> {
        self.carousels.iter().find(|c| c.id == id).map(|c| c.offset)
    }

    /// Number of items in a carousel, or `None` for an unknown id.
    pub fn item_count(&self, id: &str) -> Option<usize> {
        self.carousels
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.item_count)
    }

    /// Move a carousel one page in the given direction.
    ///
    /// The visible count is re-read from `metrics` on every call, so paging
    /// stays consistent with the current layout. Moving forward past
    /// `item_count - visible_count` wraps to 0; moving backward below 0
    /// wraps to `item_count - visible_count`. The final offset never goes
    /// below 0, which covers carousels holding fewer items than one page.
    ///
    /// An unknown carousel id skips the move and returns `None`; other
    /// carousels are unaffected.
    pub fn move_to(
        &mut self,
        id: &str,
        direction: Direction,
        metrics: &dyn LayoutMetrics,
    ) -> Option<Translation> {
        let Some(carousel) = self.carousels.iter_mut().find(|c| c.id == id) else {
            tracing::debug!("move_to: unknown carousel '{}', skipping", id);
            return None;
        };

        let visible = visible_count(metrics.viewport_width()) as i64;
        let total = carousel.item_count as i64;
        let last_page = total - visible;

        let mut next = carousel.offset as i64 + direction.delta();
        match direction {
            Direction::Next => {
                if next > last_page {
                    next = 0;
                }
            }
            Direction::Prev => {
                if next < 0 {
                    next = last_page;
                }
            }
        }

        // Floors at 0 when the carousel holds fewer items than one page.
        let offset = next.max(0) as usize;
        carousel.offset = offset;

        let shift = offset as u32 * metrics.item_width(id) as u32;
        Some(Translation { offset, shift })
    }

    /// Force every carousel back to offset 0 (translation 0).
    ///
    /// Runs once at startup and again on every viewport resize: the visible
    /// count is breakpoint-dependent, so an offset computed under the old
    /// page width may overflow the new one.
    pub fn reinitialize_all(&mut self) {
        for carousel in &mut self.carousels {
            carousel.offset = 0;
        }
    }
}
