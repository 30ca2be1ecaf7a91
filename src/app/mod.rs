//! Application state for the interactive surface.
//!
//! `App` owns the four components (carousel controller, modal, scroll-spy,
//! viewport) plus the page scroll position, and reacts to surface-agnostic
//! [`AppEvent`](crate::events::AppEvent)s. All handlers are synchronous;
//! state is only ever touched from the event loop task.

mod handlers;

use crate::carousel::CarouselController;
use crate::layout::{Viewport, SECTION_ROWS};
use crate::manifest::{Portfolio, Section};
use crate::modal::{PortfolioModal, ScrollLock};
use crate::scrollspy::ScrollSpy;
use crate::ui::hit_area::HitAreaRegistry;

/// Document-level scroll suppression flag.
///
/// The modal locks this while open; the scroll handlers consult it before
/// moving the page, which is the terminal equivalent of freezing the body
/// overflow behind a browser modal.
#[derive(Debug, Default)]
pub struct DocumentScroll {
    locked: bool,
}

impl DocumentScroll {
    /// Whether background scrolling is currently suppressed.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl ScrollLock for DocumentScroll {
    fn lock(&mut self) {
        self.locked = true;
    }

    fn unlock(&mut self) {
        self.locked = false;
    }
}

/// Top-level application state.
pub struct App {
    /// The loaded portfolio manifest
    pub portfolio: Portfolio,
    /// Per-carousel paging state
    pub carousels: CarouselController,
    /// Modal lifecycle and the single mounted content slot
    pub modal: PortfolioModal,
    /// Active navigation entry tracking
    pub scrollspy: ScrollSpy,
    /// Current terminal dimensions
    pub viewport: Viewport,
    /// Background scroll suppression, driven by the modal
    pub scroll: DocumentScroll,
    /// Vertical page scroll position, in rows
    pub scroll_row: u16,
    /// Clickable regions registered during the last render
    pub hit_areas: HitAreaRegistry,
    /// Per-section intersection state, for transition detection
    visible_sections: Vec<bool>,
    /// Redraw needed on the next loop iteration
    pub needs_redraw: bool,
    /// Set when the user asks to exit
    pub should_quit: bool,
    /// Tick counter for animations
    pub tick_count: u64,
}

impl App {
    /// Build the app for a portfolio at the given viewport size.
    ///
    /// Carousels are initialized to offset 0 and the landing section's
    /// navigation entry starts active.
    pub fn new(portfolio: Portfolio, viewport: Viewport) -> Self {
        let carousels = CarouselController::new(
            portfolio
                .sections
                .iter()
                .map(|s| (s.id.clone(), s.items.len())),
        );
        let scrollspy = ScrollSpy::new(portfolio.section_ids());
        let section_count = portfolio.sections.len();

        let mut app = Self {
            portfolio,
            carousels,
            modal: PortfolioModal::new(),
            scrollspy,
            viewport,
            scroll: DocumentScroll::default(),
            scroll_row: 0,
            hit_areas: HitAreaRegistry::new(),
            visible_sections: vec![false; section_count],
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
        };
        app.carousels.reinitialize_all();
        app.recompute_visibility();
        app
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick counter.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Ask the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Rows available for section content (viewport minus header and the
    /// keybind hint line).
    pub fn content_rows(&self) -> u16 {
        self.viewport.rows.saturating_sub(2)
    }

    /// Largest valid `scroll_row` for the current portfolio and viewport.
    pub fn max_scroll(&self) -> u16 {
        let total = self.portfolio.sections.len() as u16 * SECTION_ROWS;
        total.saturating_sub(self.content_rows())
    }

    /// Id of the carousel under the active navigation entry.
    pub fn active_carousel_id(&self) -> Option<String> {
        self.scrollspy.active().map(str::to_string)
    }

    /// The section under the active navigation entry.
    pub fn active_section(&self) -> Option<&Section> {
        self.scrollspy
            .active()
            .and_then(|id| self.portfolio.section(id))
    }
}
