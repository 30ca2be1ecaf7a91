//! Navigation sidebar.
//!
//! One entry per portfolio section; the entry whose section satisfies the
//! visibility threshold carries the active marker. Entries are clickable
//! and jump the page to their section.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::helpers::truncate_to_width;
use crate::ui::hit_area::ClickAction;
use crate::ui::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM};

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" sections ", Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let label_width = inner.width.saturating_sub(2) as usize;
    for (i, section) in app.portfolio.sections.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }

        let active = app.scrollspy.is_active(&section.id);
        let (marker, style) = if active {
            (
                "▶ ",
                Style::default()
                    .fg(COLOR_ACTIVE)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(COLOR_ACCENT))
        };

        let row = Rect::new(inner.x, y, inner.width, 1);
        let line = Line::from(vec![
            Span::styled(marker, style),
            Span::styled(truncate_to_width(&section.title, label_width), style),
        ]);
        frame.render_widget(Paragraph::new(line), row);
        app.hit_areas.register(row, ClickAction::NavEntry(i));
    }
}
