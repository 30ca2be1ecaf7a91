//! Event handlers: the reactions that mutate [`App`] state.
//!
//! Terminal input arrives already translated into [`AppEvent`]s; mouse
//! clicks arrive as [`ClickAction`]s resolved through the hit-area
//! registry. Both funnel into the same state mutations.

use crate::app::App;
use crate::carousel::Direction;
use crate::events::AppEvent;
use crate::layout::{Viewport, SECTION_ROWS};
use crate::media;
use crate::scrollspy::INTERSECTION_THRESHOLD;
use crate::ui::hit_area::ClickAction;

impl App {
    /// React to one input event.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),

            AppEvent::Resize {
                cols,
                rows,
                width_px,
            } => self.handle_resize(cols, rows, width_px),

            AppEvent::Nav {
                carousel,
                direction,
            } => {
                // visible_count is re-read from the viewport inside move_to,
                // so paging always matches the current breakpoint
                self.carousels.move_to(&carousel, direction, &self.viewport);
                self.mark_dirty();
            }

            AppEvent::Activate { carousel, index } => self.activate_item(&carousel, index),

            AppEvent::ScrollBy(delta) => self.scroll_by(delta),

            AppEvent::JumpToSection(index) => self.jump_to_section(index),

            AppEvent::Escape => {
                // Escape only acts while the modal is open
                if self.modal.is_open() {
                    self.modal.close(&mut self.scroll);
                    self.mark_dirty();
                }
            }

            AppEvent::CloseModal => {
                if self.modal.is_open() {
                    self.modal.close(&mut self.scroll);
                    self.mark_dirty();
                }
            }

            AppEvent::OpenExternal => self.open_external(),
        }
    }

    /// React to a click resolved through the hit-area registry.
    pub fn handle_click(&mut self, action: ClickAction) {
        tracing::debug!(?action, "click");
        match action {
            ClickAction::NavEntry(index) => self.handle_event(AppEvent::JumpToSection(index)),
            ClickAction::CarouselPrev(id) => self.handle_event(AppEvent::Nav {
                carousel: id,
                direction: Direction::Prev,
            }),
            ClickAction::CarouselNext(id) => self.handle_event(AppEvent::Nav {
                carousel: id,
                direction: Direction::Next,
            }),
            ClickAction::OpenItem { carousel, index } => {
                self.handle_event(AppEvent::Activate { carousel, index })
            }
            ClickAction::ModalContent => self.handle_event(AppEvent::OpenExternal),
            ClickAction::ModalClose | ClickAction::ModalBackdrop => {
                self.handle_event(AppEvent::CloseModal)
            }
        }
    }

    /// Classify the addressed item's URL and open the modal with it.
    ///
    /// A missing section or item index is skipped silently (logged), other
    /// carousels and the modal are unaffected.
    fn activate_item(&mut self, carousel: &str, index: usize) {
        let Some(url) = self
            .portfolio
            .section(carousel)
            .and_then(|s| s.items.get(index))
            .map(|item| item.url.clone())
        else {
            tracing::warn!("activate: no item {} in carousel '{}'", index, carousel);
            return;
        };

        let kind = media::classify(&url);
        self.modal.open(kind, &url, &mut self.scroll);
        self.mark_dirty();
    }

    fn handle_resize(&mut self, cols: u16, rows: u16, width_px: Option<u32>) {
        self.viewport = Viewport::new(cols, rows, width_px);
        // visible_count is breakpoint-dependent: offsets computed under the
        // old page width may overflow the new one, so everything resets
        self.carousels.reinitialize_all();
        self.scroll_row = self.scroll_row.min(self.max_scroll());
        self.recompute_visibility();
        self.mark_dirty();
    }

    fn scroll_by(&mut self, delta: i16) {
        if self.scroll.is_locked() {
            tracing::debug!("scroll suppressed while modal is open");
            return;
        }
        let next = self
            .scroll_row
            .saturating_add_signed(delta)
            .min(self.max_scroll());
        if next != self.scroll_row {
            self.scroll_row = next;
            self.recompute_visibility();
            self.mark_dirty();
        }
    }

    fn jump_to_section(&mut self, index: usize) {
        if index >= self.portfolio.sections.len() {
            return;
        }
        self.scroll_row = (index as u16 * SECTION_ROWS).min(self.max_scroll());
        self.recompute_visibility();
        self.mark_dirty();
    }

    /// Re-derive per-section visibility and feed transitions to the
    /// scroll-spy.
    ///
    /// Only sections whose intersection state changed produce a report,
    /// mirroring observer semantics. Sections are walked bottom-up so that
    /// when several enter the viewport at once (startup, jumps, resize) the
    /// topmost one ends up active.
    pub fn recompute_visibility(&mut self) {
        let view_top = self.scroll_row as u32;
        let view_bottom = view_top + self.content_rows() as u32;

        for (i, section) in self.portfolio.sections.iter().enumerate().rev() {
            let top = i as u32 * SECTION_ROWS as u32;
            let bottom = top + SECTION_ROWS as u32;
            let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
            let ratio = overlap as f32 / SECTION_ROWS as f32;
            let intersecting = ratio >= INTERSECTION_THRESHOLD;

            if intersecting != self.visible_sections[i] {
                self.visible_sections[i] = intersecting;
                self.scrollspy.report(&section.id, intersecting);
            }
        }
    }

    /// Launch the mounted content in the system browser.
    ///
    /// A launch failure never changes modal state; it is logged and
    /// otherwise ignored.
    fn open_external(&mut self) {
        let Some(content) = self.modal.content() else {
            return;
        };
        let url = content.launch_url();
        if let Err(e) = open::that(url) {
            tracing::warn!("failed to open '{}' externally: {}", url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Portfolio;
    use crate::modal::EmbedContent;

    fn desktop_app() -> App {
        // 120 cols x 24 rows, 1280 px: three items visible per page
        App::new(Portfolio::sample(), Viewport::new(120, 24, Some(1280)))
    }

    fn mobile_app() -> App {
        App::new(Portfolio::sample(), Viewport::new(60, 24, Some(480)))
    }

    #[test]
    fn test_nav_event_moves_carousel() {
        let mut app = desktop_app();
        app.handle_event(AppEvent::Nav {
            carousel: "video".to_string(),
            direction: Direction::Next,
        });
        assert_eq!(app.carousels.offset("video"), Some(1));
        // Other carousels untouched
        assert_eq!(app.carousels.offset("animation"), Some(0));
    }

    #[test]
    fn test_resize_resets_every_offset() {
        let mut app = mobile_app();
        for _ in 0..3 {
            app.handle_event(AppEvent::Nav {
                carousel: "video".to_string(),
                direction: Direction::Next,
            });
        }
        assert_eq!(app.carousels.offset("video"), Some(3));

        // Crossing the breakpoint invalidates the stale offset
        app.handle_event(AppEvent::Resize {
            cols: 120,
            rows: 24,
            width_px: Some(1280),
        });
        assert_eq!(app.carousels.offset("video"), Some(0));
        assert_eq!(app.viewport.visible_count(), 3);
    }

    #[test]
    fn test_activate_classifies_and_opens() {
        let mut app = desktop_app();
        // Sample item 0 of "video" is a YouTube watch URL
        app.handle_event(AppEvent::Activate {
            carousel: "video".to_string(),
            index: 0,
        });
        assert!(app.modal.is_open());
        assert!(app.scroll.is_locked());
        assert!(matches!(
            app.modal.content(),
            Some(EmbedContent::Youtube { .. })
        ));
    }

    #[test]
    fn test_activate_out_of_range_is_skipped() {
        let mut app = desktop_app();
        app.handle_event(AppEvent::Activate {
            carousel: "video".to_string(),
            index: 99,
        });
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_escape_noop_while_closed() {
        let mut app = desktop_app();
        let before = app.scroll_row;
        app.handle_event(AppEvent::Escape);
        assert!(!app.modal.is_open());
        assert!(!app.scroll.is_locked());
        assert_eq!(app.scroll_row, before);
    }

    #[test]
    fn test_escape_closes_open_modal() {
        let mut app = desktop_app();
        app.handle_event(AppEvent::Activate {
            carousel: "video".to_string(),
            index: 2,
        });
        assert!(app.modal.is_open());

        app.handle_event(AppEvent::Escape);
        assert!(!app.modal.is_open());
        assert!(!app.scroll.is_locked());
        assert_eq!(app.modal.content(), None);
    }

    #[test]
    fn test_scroll_suppressed_while_modal_open() {
        let mut app = desktop_app();
        app.handle_event(AppEvent::Activate {
            carousel: "video".to_string(),
            index: 0,
        });
        app.handle_event(AppEvent::ScrollBy(4));
        assert_eq!(app.scroll_row, 0, "page must not move behind the modal");

        app.handle_event(AppEvent::CloseModal);
        app.handle_event(AppEvent::ScrollBy(4));
        assert_eq!(app.scroll_row, 4);
    }

    #[test]
    fn test_landing_entry_active_at_startup() {
        let app = desktop_app();
        assert!(app.scrollspy.is_active("video"));
    }

    #[test]
    fn test_jump_moves_active_entry() {
        let mut app = desktop_app();
        app.handle_event(AppEvent::JumpToSection(2));
        assert!(app.scrollspy.is_active("modeling"));
    }

    #[test]
    fn test_scrolling_down_advances_active_entry() {
        let mut app = desktop_app();
        // 3 sections x 10 rows against 22 content rows: max scroll is 8
        app.handle_event(AppEvent::ScrollBy(SECTION_ROWS as i16));
        assert_eq!(app.scroll_row, 8);
        // The last section just crossed the visibility threshold
        assert!(app.scrollspy.is_active("modeling"));
    }

    #[test]
    fn test_click_actions_funnel_into_events() {
        let mut app = desktop_app();
        app.handle_click(ClickAction::CarouselNext("video".to_string()));
        assert_eq!(app.carousels.offset("video"), Some(1));

        app.handle_click(ClickAction::OpenItem {
            carousel: "video".to_string(),
            index: 1,
        });
        assert!(app.modal.is_open());

        app.handle_click(ClickAction::ModalBackdrop);
        assert!(!app.modal.is_open());
    }
}
