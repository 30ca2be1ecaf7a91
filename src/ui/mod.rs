//! UI rendering for folio.
//!
//! Layout: a one-row header, a body split into the navigation sidebar and
//! the section gallery, and a one-row keybind hint line. The modal overlay
//! draws last so it layers above everything, and its hit areas shadow the
//! page beneath it.

mod gallery;
mod helpers;
pub mod hit_area;
mod modal;
mod sidebar;
mod theme;

pub use helpers::{kind_tag, truncate_to_width};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use gallery::render_gallery;
use modal::render_modal;
use sidebar::render_sidebar;
use theme::{COLOR_ACCENT, COLOR_DIM};

/// Sidebar width in columns.
const SIDEBAR_COLS: u16 = 18;

/// Render one frame.
///
/// Clears and repopulates the hit-area registry, so the registry always
/// matches what is on screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();
    let area = frame.area();

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, rows[0], app);

    let body = Layout::horizontal([Constraint::Length(SIDEBAR_COLS), Constraint::Min(1)])
        .split(rows[1]);
    render_sidebar(frame, body[0], app);
    render_gallery(frame, body[1], app);

    render_hints(frame, rows[2], app);

    render_modal(frame, area, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", app.portfolio.title),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.scrollspy
                .active()
                .map(|id| format!("· {}", id))
                .unwrap_or_default(),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.modal.is_open() {
        " o open in browser · x close · esc close"
    } else {
        " ←/→ page · ↑/↓ scroll · enter open · 1-9 jump · q quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        area,
    );
}
