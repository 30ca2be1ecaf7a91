//! Active-section tracking for the navigation sidebar.
//!
//! The render layer reports, per section, whether it currently satisfies
//! the visibility threshold. Each intersecting report moves the single
//! "active" marker to the matching navigation entry. The landing (first)
//! section is pre-marked active before any report arrives.

/// Fraction of a section that must intersect the viewport before its
/// navigation entry becomes active.
pub const INTERSECTION_THRESHOLD: f32 = 0.3;

/// Tracks which navigation entry is active as the viewer scrolls.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    entries: Vec<String>,
    active: Option<String>,
}

impl ScrollSpy {
    /// Create a scroll-spy over the ordered section ids. The first entry
    /// (the landing section) starts active.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let active = entries.first().cloned();
        Self { entries, active }
    }

    /// The ordered navigation entries.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Id of the currently active entry, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the given section's entry is currently active.
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.as_deref() == Some(section_id)
    }

    /// Consume one visibility report.
    ///
    /// An intersecting report for a known section clears the previous
    /// marker and sets it on that section's entry. Non-intersecting reports
    /// and unknown ids change nothing.
    pub fn report(&mut self, section_id: &str, intersecting: bool) {
        if !intersecting {
            return;
        }
        if self.entries.iter().any(|e| e == section_id) {
            self.active = Some(section_id.to_string());
        } else {
            tracing::debug!("visibility report for unknown section '{}'", section_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(["inicio", "video", "animacion", "modelado"])
    }

    #[test]
    fn test_landing_entry_premarked_active() {
        let spy = spy();
        assert_eq!(spy.active(), Some("inicio"));
        assert!(spy.is_active("inicio"));
    }

    #[test]
    fn test_intersecting_report_moves_marker() {
        let mut spy = spy();
        spy.report("video", true);
        assert!(spy.is_active("video"));
        assert!(!spy.is_active("inicio"), "only one entry is active at a time");
    }

    #[test]
    fn test_non_intersecting_report_is_ignored() {
        let mut spy = spy();
        spy.report("video", true);
        spy.report("animacion", false);
        assert!(spy.is_active("video"));
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let mut spy = spy();
        spy.report("contact", true);
        assert!(spy.is_active("inicio"));
    }

    #[test]
    fn test_empty_entries_have_no_active() {
        let spy = ScrollSpy::new(Vec::<String>::new());
        assert_eq!(spy.active(), None);
    }
}
