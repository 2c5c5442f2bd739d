//! State for the certificate dialog shared by the experience, events, and
//! courses sections.  Holds which record is open, which image is showing,
//! and whether that image failed to load.

/// Render-ready snapshot of an open gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub owner: String,
    /// Logical asset reference at the current index, `None` when the record
    /// has no certificate images at all.
    pub asset: Option<String>,
    /// The current image failed to load and should render as a placeholder.
    pub failed: bool,
    pub has_previous: bool,
    pub has_next: bool,
    /// 1-based position of the current image.
    pub position: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGallery {
    owner: String,
    assets: Vec<String>,
    index: usize,
    failed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Gallery {
    #[default]
    Closed,
    Open(OpenGallery),
}

impl Gallery {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Opens the gallery for a record.  An empty asset list is valid and
    /// renders as a placeholder.  Opening over an already-open gallery
    /// replaces it entirely, so the index always starts back at 0.
    pub fn open(&mut self, owner: impl Into<String>, assets: Vec<String>) {
        *self = Self::Open(OpenGallery {
            owner: owner.into(),
            assets,
            index: 0,
            failed: false,
        });
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Advances to the next image.  No wraparound: a no-op at the last
    /// index or while closed.
    pub fn next(&mut self) {
        if let Self::Open(open) = self {
            if open.index + 1 < open.assets.len() {
                open.index += 1;
                open.failed = false;
            }
        }
    }

    /// Steps back to the previous image.  No-op at index 0 or while closed.
    pub fn previous(&mut self) {
        if let Self::Open(open) = self {
            if open.index > 0 {
                open.index -= 1;
                open.failed = false;
            }
        }
    }

    /// Records that the image at `(owner, index)` failed to load.
    ///
    /// Load errors arrive asynchronously, so the caller passes along which
    /// image it was rendering; a completion for a closed dialog, a
    /// different record, or an index the user has already navigated away
    /// from is discarded.  The flag is cleared by any navigation, so coming
    /// back to this index retries the load.
    pub fn mark_failed(&mut self, owner: &str, index: usize) {
        if let Self::Open(open) = self {
            if open.owner == owner && open.index == index {
                log::warn!("certificate image failed to load for {owner}");
                open.failed = true;
            }
        }
    }

    /// Snapshot for rendering, `None` while closed.  Navigation affordances
    /// are only offered for moves that would actually change the index.
    pub fn view(&self) -> Option<GalleryView> {
        let Self::Open(open) = self else {
            return None;
        };
        let total = open.assets.len();
        Some(GalleryView {
            owner: open.owner.clone(),
            asset: open.assets.get(open.index).cloned(),
            failed: open.failed,
            has_previous: open.index > 0,
            has_next: open.index + 1 < total,
            position: open.index + 1,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with(assets: &[&str]) -> Gallery {
        let mut gallery = Gallery::new();
        let assets = assets.iter().map(|s| s.to_string()).collect();
        gallery.open("AlgoBharat Road to Impact", assets);
        gallery
    }

    #[test]
    fn test_open_with_no_assets_renders_placeholder() {
        let gallery = open_with(&[]);
        let view = gallery.view().expect("gallery should be open");
        assert_eq!(view.asset, None);
        assert!(!view.has_previous);
        assert!(!view.has_next);
        assert_eq!(view.total, 0);
    }

    #[test]
    fn test_next_clamps_at_last_index() {
        let mut gallery = open_with(&["a.jpg", "b.jpg", "c.jpg"]);
        gallery.next();
        gallery.next();
        gallery.next();
        let view = gallery.view().unwrap();
        assert_eq!(view.position, 3);
        assert_eq!(view.asset.as_deref(), Some("c.jpg"));
        assert!(!view.has_next);

        // further calls stay put
        gallery.next();
        assert_eq!(gallery.view().unwrap().position, 3);
    }

    #[test]
    fn test_previous_is_noop_at_first_index() {
        let mut gallery = open_with(&["a.jpg", "b.jpg"]);
        gallery.previous();
        let view = gallery.view().unwrap();
        assert_eq!(view.position, 1);
        assert!(!view.has_previous);
        assert!(view.has_next);
    }

    #[test]
    fn test_single_asset_offers_no_navigation() {
        let gallery = open_with(&["only.jpg"]);
        let view = gallery.view().unwrap();
        assert!(!view.has_previous);
        assert!(!view.has_next);
        assert_eq!(view.total, 1);
    }

    #[test]
    fn test_reopen_resets_to_first_index() {
        let mut gallery = open_with(&["a.jpg", "b.jpg", "c.jpg"]);
        gallery.next();
        gallery.next();
        gallery.close();
        assert!(!gallery.is_open());
        assert_eq!(gallery.view(), None);

        gallery.open("Smart India Hackathon", vec!["x.jpg".to_string()]);
        let view = gallery.view().unwrap();
        assert_eq!(view.owner, "Smart India Hackathon");
        assert_eq!(view.position, 1);
    }

    #[test]
    fn test_opening_another_record_replaces_state() {
        let mut gallery = open_with(&["a.jpg", "b.jpg"]);
        gallery.next();
        gallery.open("Other", vec!["z.jpg".to_string(), "y.jpg".to_string()]);
        let view = gallery.view().unwrap();
        assert_eq!(view.owner, "Other");
        assert_eq!(view.position, 1);
        assert_eq!(view.asset.as_deref(), Some("z.jpg"));
    }

    #[test]
    fn test_mark_failed_only_touches_current_image() {
        let mut gallery = open_with(&["a.jpg", "b.jpg"]);
        gallery.mark_failed("AlgoBharat Road to Impact", 0);
        let view = gallery.view().unwrap();
        assert!(view.failed);
        assert!(gallery.is_open());
        assert_eq!(view.position, 1);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut gallery = open_with(&["a.jpg", "b.jpg"]);
        gallery.next();
        // completion for the index the user already left
        gallery.mark_failed("AlgoBharat Road to Impact", 0);
        assert!(!gallery.view().unwrap().failed);
        // completion for a different record
        gallery.mark_failed("Someone Else", 1);
        assert!(!gallery.view().unwrap().failed);
        // completion after close
        gallery.close();
        gallery.mark_failed("AlgoBharat Road to Impact", 1);
        assert_eq!(gallery.view(), None);
    }

    #[test]
    fn test_navigating_away_and_back_retries_failed_image() {
        let mut gallery = open_with(&["a.jpg", "b.jpg"]);
        gallery.mark_failed("AlgoBharat Road to Impact", 0);
        assert!(gallery.view().unwrap().failed);
        gallery.next();
        assert!(!gallery.view().unwrap().failed);
        gallery.previous();
        // back at the failed index, flag is gone so the load re-attempts
        let view = gallery.view().unwrap();
        assert_eq!(view.position, 1);
        assert!(!view.failed);
    }
}
