//! Surface-agnostic input events.
//!
//! Terminal input (keys, mouse, resize) is translated into these events at
//! the edge of the event loop; the [`App`](crate::app::App) handlers only
//! ever see this type, which keeps paging, classification, and the modal
//! lifecycle testable with synthetic events.

use crate::carousel::Direction;

/// One discrete input event for the interactive surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Navigate a carousel one page in the given direction
    Nav { carousel: String, direction: Direction },
    /// Activate (open) the item at `index` in the given carousel
    Activate { carousel: String, index: usize },
    /// Scroll the page by a signed number of rows
    ScrollBy(i16),
    /// Jump to a section by index (navigation sidebar)
    JumpToSection(usize),
    /// Viewport dimensions changed; pixel width when the terminal reports it
    Resize {
        cols: u16,
        rows: u16,
        width_px: Option<u32>,
    },
    /// Escape key: closes the modal when open, otherwise a no-op
    Escape,
    /// Explicit close control for the modal
    CloseModal,
    /// Launch the mounted content in the system browser
    OpenExternal,
    /// Quit the application
    Quit,
}
