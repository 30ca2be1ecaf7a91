//! Color theme constants for the folio UI.
//!
//! A minimal dark palette: dark gray chrome, white accents, green for the
//! active navigation entry.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and titles
pub const COLOR_ACCENT: Color = Color::White;

/// Active navigation entry
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for secondary info (URLs, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Media kind tags on carousel cards
pub const COLOR_TAG: Color = Color::Cyan;

/// Background for the modal content box
pub const COLOR_MODAL_BG: Color = Color::Rgb(10, 15, 35);
