//! Modal overlay rendering.
//!
//! Draws the mounted content centered over a full-screen backdrop. YouTube
//! and Drive content sit inside a fixed-aspect 16:9 frame (halved
//! vertically for the ~2:1 cell aspect); native video is constrained to a
//! maximum display box; images render in a plain box with their label. The
//! backdrop, the content region, and the close control all register hit
//! areas; the backdrop closes, the content launches externally.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::modal::{EmbedContent, VIDEO_MAX_COLS, VIDEO_MAX_ROWS};
use crate::ui::helpers::truncate_to_width;
use crate::ui::hit_area::ClickAction;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_MODAL_BG, COLOR_TAG};

pub fn render_modal(frame: &mut Frame, area: Rect, app: &mut App) {
    if !app.modal.is_open() {
        return;
    }

    // Everything outside the content box closes the modal; registered
    // first so the content areas below sit on top of it.
    app.hit_areas.register(area, ClickAction::ModalBackdrop);

    let content_rect = match app.modal.content() {
        Some(content) => sized_rect(area, content),
        None => centered_rect(area, 40.min(area.width), 5.min(area.height)),
    };

    frame.render_widget(Clear, content_rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_MODAL_BG));
    let inner = block.inner(content_rect);
    frame.render_widget(block, content_rect);
    app.hit_areas.register(content_rect, ClickAction::ModalContent);

    let text_width = inner.width.saturating_sub(2) as usize;
    let lines = match app.modal.content() {
        Some(content) => content_lines(content, text_width),
        None => vec![Line::from(Span::styled(
            "Nothing to display",
            Style::default().fg(COLOR_DIM),
        ))],
    };
    frame.render_widget(Paragraph::new(lines), inner);

    // Close control in the top-right corner of the content box
    if content_rect.width >= 5 {
        let close = Rect::new(content_rect.right().saturating_sub(4), content_rect.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[x]",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            close,
        );
        app.hit_areas.register(close, ClickAction::ModalClose);
    }
}

/// Content box dimensions per embed kind.
fn sized_rect(area: Rect, content: &EmbedContent) -> Rect {
    let (w, h) = if content.is_aspect_framed() {
        // 16:9 in cells, halved for the cell aspect, plus the border rows
        let w = area.width.saturating_sub(8).min(96).max(20);
        let h = (w as u32 * 9 / 32) as u16 + 2;
        (w, h.min(area.height.saturating_sub(4)))
    } else {
        match content {
            EmbedContent::VideoPlayer { .. } => (
                VIDEO_MAX_COLS.min(area.width.saturating_sub(8)),
                VIDEO_MAX_ROWS.min(area.height.saturating_sub(4)),
            ),
            _ => (
                area.width.saturating_sub(8).min(80),
                area.height.saturating_sub(6).min(18),
            ),
        }
    };
    centered_rect(area, w.max(10), h.max(4))
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn content_lines(content: &EmbedContent, text_width: usize) -> Vec<Line<'static>> {
    let (url, traits_line) = match content {
        EmbedContent::Youtube { embed_url } => (
            embed_url.clone(),
            "16:9 · autoplay · loop · no related videos",
        ),
        EmbedContent::DriveFrame { url } => (url.clone(), "16:9 · autoplay · fullscreen"),
        EmbedContent::VideoPlayer { url } => (url.clone(), "controls · autoplay · loop"),
        EmbedContent::Picture { url, .. } => (url.clone(), ""),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", content.label()),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", truncate_to_width(&url, text_width)),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    if !traits_line.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", traits_line),
            Style::default().fg(COLOR_TAG),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  o open in browser · x close",
        Style::default().fg(COLOR_DIM),
    )));
    lines
}
