//! Portfolio manifest: the sections and media items the surface displays.
//!
//! The manifest is a JSON document; each section becomes one carousel and
//! one navigation entry. A missing path argument falls back to the user's
//! config directory, then to the built-in sample portfolio.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// A single media item inside a carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaItem {
    pub title: String,
    /// Destination URL; classification derives the content kind from it
    pub url: String,
}

/// One portfolio section: an identified carousel of ordered items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    /// Stable identifier, also the navigation link target
    pub id: String,
    pub title: String,
    pub items: Vec<MediaItem>,
}

/// The whole portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Portfolio {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Portfolio {
    /// Load a portfolio manifest from a JSON file.
    pub fn load(path: &Path) -> FolioResult<Self> {
        if !path.exists() {
            return Err(FolioError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path).map_err(|source| FolioError::ManifestIo {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio: Portfolio =
            serde_json::from_str(&raw).map_err(|source| FolioError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(
            path = %path.display(),
            sections = portfolio.sections.len(),
            "manifest loaded"
        );
        Ok(portfolio)
    }

    /// Built-in sample portfolio used when no manifest is supplied.
    pub fn sample() -> Self {
        Self {
            title: "Folio".to_string(),
            sections: vec![
                Section {
                    id: "video".to_string(),
                    title: "Video".to_string(),
                    items: vec![
                        MediaItem {
                            title: "Demo reel".to_string(),
                            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
                        },
                        MediaItem {
                            title: "Short film".to_string(),
                            url: "https://youtu.be/jNQXAC9IVRw".to_string(),
                        },
                        MediaItem {
                            title: "Behind the scenes".to_string(),
                            url: "https://example.com/media/bts.mp4".to_string(),
                        },
                        MediaItem {
                            title: "Client spot".to_string(),
                            url: "https://drive.google.com/file/d/1a2b3c4d/preview".to_string(),
                        },
                    ],
                },
                Section {
                    id: "animation".to_string(),
                    title: "Animation".to_string(),
                    items: vec![
                        MediaItem {
                            title: "Walk cycle".to_string(),
                            url: "https://example.com/media/walk-cycle.gif".to_string(),
                        },
                        MediaItem {
                            title: "Character turnaround".to_string(),
                            url: "https://example.com/media/turnaround.webp".to_string(),
                        },
                        MediaItem {
                            title: "Lip sync study".to_string(),
                            url: "https://example.com/media/lipsync.webm".to_string(),
                        },
                        MediaItem {
                            title: "Storyboard".to_string(),
                            url: "https://example.com/media/storyboard.png".to_string(),
                        },
                    ],
                },
                Section {
                    id: "modeling".to_string(),
                    title: "3D Modeling".to_string(),
                    items: vec![
                        MediaItem {
                            title: "Hard surface".to_string(),
                            url: "https://example.com/media/mech.jpg".to_string(),
                        },
                        MediaItem {
                            title: "Environment".to_string(),
                            url: "https://example.com/media/environment.jpg".to_string(),
                        },
                        MediaItem {
                            title: "Sculpt timelapse".to_string(),
                            url: "https://example.com/media/sculpt.mov".to_string(),
                        },
                        MediaItem {
                            title: "Topology breakdown".to_string(),
                            url: "https://example.com/media/topology.png".to_string(),
                        },
                    ],
                },
            ],
        }
    }

    /// Section ids in display order.
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Default manifest location under the user's config directory.
pub fn default_manifest_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("portfolio.json"))
}
