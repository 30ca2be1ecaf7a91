//! Folio - a terminal portfolio browser
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod carousel;
pub mod error;
pub mod events;
pub mod layout;
pub mod manifest;
pub mod media;
pub mod modal;
pub mod scrollspy;
pub mod terminal;
pub mod ui;
