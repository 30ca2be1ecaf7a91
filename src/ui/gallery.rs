//! Section gallery: the vertically scrolled stack of carousels.
//!
//! Each section renders a title row plus one carousel page: the
//! `visible_count` items starting at the carousel's current offset, flanked
//! by prev/next paging buttons. Sections scrolled outside the body are
//! skipped; partially visible rows are clipped rather than drawn.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::layout::{CARD_CELL_WIDTH, SECTION_ROWS};
use crate::media;
use crate::ui::helpers::{kind_tag, truncate_to_width};
use crate::ui::hit_area::ClickAction;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_TAG};

/// Height of one carousel card, in rows.
const CARD_ROWS: u16 = 7;

/// Horizontal gap between cards, in cells.
const CARD_GAP: u16 = 2;

pub fn render_gallery(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let visible = app.viewport.visible_count();
    let scroll = app.scroll_row as i32;

    for (i, section) in app.portfolio.sections.iter().enumerate() {
        let section_top = area.y as i32 + i as i32 * SECTION_ROWS as i32 - scroll;
        let section_bottom = section_top + SECTION_ROWS as i32;
        if section_bottom <= area.y as i32 || section_top >= area.bottom() as i32 {
            continue;
        }

        // Title row, drawn only when its exact row is inside the body
        if section_top >= area.y as i32 && (section_top as u16) < area.bottom() {
            let title_row = Rect::new(area.x + 1, section_top as u16, area.width - 1, 1);
            let title = Line::from(vec![
                Span::styled("■ ", Style::default().fg(COLOR_TAG)),
                Span::styled(
                    truncate_to_width(&section.title, title_row.width.saturating_sub(2) as usize),
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            frame.render_widget(Paragraph::new(title), title_row);
        }

        // Carousel row: only drawn when fully inside the body
        let cards_top = section_top + 2;
        if cards_top < area.y as i32 || cards_top + CARD_ROWS as i32 > area.bottom() as i32 {
            continue;
        }
        let cards_top = cards_top as u16;

        let offset = app.carousels.offset(&section.id).unwrap_or(0);
        let start = offset.min(section.items.len());
        let end = (offset + visible).min(section.items.len());

        // Prev/next paging buttons flanking the track
        let prev = Rect::new(area.x, cards_top, 2, CARD_ROWS).intersection(area);
        let next_x = area.right().saturating_sub(2);
        let next = Rect::new(next_x, cards_top, 2, CARD_ROWS).intersection(area);
        render_page_button(frame, prev, "‹");
        render_page_button(frame, next, "›");
        app.hit_areas
            .register(prev, ClickAction::CarouselPrev(section.id.clone()));
        app.hit_areas
            .register(next, ClickAction::CarouselNext(section.id.clone()));

        for (slot, item) in section.items[start..end].iter().enumerate() {
            let x = area.x + 3 + slot as u16 * CARD_CELL_WIDTH;
            let width = CARD_CELL_WIDTH - CARD_GAP;
            if x + width > next_x {
                break;
            }
            let card = Rect::new(x, cards_top, width, CARD_ROWS);

            let kind = media::classify(&item.url);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER));
            let body = block.inner(card);
            frame.render_widget(block, card);

            let text_width = body.width.saturating_sub(2) as usize;
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!(" {}", truncate_to_width(&item.title, text_width)),
                    Style::default().fg(COLOR_ACCENT),
                )),
                Line::from(Span::styled(
                    format!(" [{}]", kind_tag(kind)),
                    Style::default().fg(COLOR_TAG),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!(" {}", truncate_to_width(&item.url, text_width)),
                    Style::default().fg(COLOR_DIM),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), body);

            app.hit_areas.register(
                card,
                ClickAction::OpenItem {
                    carousel: section.id.clone(),
                    index: start + slot,
                },
            );
        }

        // Page indicator under the track
        let indicator_y = cards_top + CARD_ROWS;
        let total = section.items.len();
        if indicator_y < area.bottom() && total > 0 {
            let label = format!("{}–{} of {}", start + 1, end.max(start + 1).min(total), total);
            let row = Rect::new(area.x + 3, indicator_y, area.width.saturating_sub(4), 1);
            frame.render_widget(
                Paragraph::new(Span::styled(label, Style::default().fg(COLOR_DIM))),
                row,
            );
        }
    }
}

fn render_page_button(frame: &mut Frame, rect: Rect, glyph: &str) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let mid = rect.y + rect.height / 2;
    let row = Rect::new(rect.x, mid, rect.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            glyph,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        row,
    );
}
