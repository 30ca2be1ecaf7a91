//! Hit areas for mouse interaction.
//!
//! Render functions register clickable regions while drawing; the event
//! loop queries the registry to resolve a mouse click into a
//! [`ClickAction`]. The registry is cleared at the start of every render
//! cycle, so it always reflects the last drawn frame.

use ratatui::layout::Rect;

/// An action triggered by clicking a registered region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Jump to the section behind a navigation entry
    NavEntry(usize),
    /// Page the carousel backward
    CarouselPrev(String),
    /// Page the carousel forward
    CarouselNext(String),
    /// Open the modal for a carousel item
    OpenItem { carousel: String, index: usize },
    /// The modal's mounted content (launches it externally)
    ModalContent,
    /// The modal's explicit close control
    ModalClose,
    /// The backdrop outside the modal content (closes the modal)
    ModalBackdrop,
}

/// A clickable region with its action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    /// Whether a point falls inside this region.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of the clickable regions drawn in the last frame.
///
/// Areas registered later sit on top of earlier ones for overlapping
/// regions, so overlays registered last shadow the content beneath them.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registered areas. Call at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a clickable region.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea { rect, action });
    }

    /// Resolve a click position to the topmost registered action.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| &area.action)
    }
}
