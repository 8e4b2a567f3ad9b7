//! Inspiration image handoff.
//!
//! The source product passed a "reference image" URI between screens through
//! a process-wide mutable global. Here that handoff is an explicit shared
//! slot with a single-reader contract: one screen publishes, the camera
//! screen consumes, and consuming clears the slot.

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// A published reference image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspirationImage {
    /// Image URI (device library or remote)
    pub uri: String,
    /// When it was published
    pub set_at: DateTime<Utc>,
}

/// Shared slot carrying at most one pending inspiration image.
///
/// Cheap to clone; all clones observe the same slot. `publish` replaces any
/// pending value, `take` consumes and clears.
#[derive(Debug, Clone, Default)]
pub struct InspirationSlot {
    inner: Arc<Mutex<Option<InspirationImage>>>,
}

impl InspirationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a reference image, replacing any pending one. Returns the
    /// value that was displaced, if any.
    pub fn publish(&self, uri: impl Into<String>) -> Option<InspirationImage> {
        let image = InspirationImage {
            uri: uri.into(),
            set_at: Utc::now(),
        };
        debug!(uri = %image.uri, "publishing inspiration image");
        let mut guard = self.inner.lock().expect("inspiration slot poisoned");
        guard.replace(image)
    }

    /// Consume the pending image, clearing the slot.
    pub fn take(&self) -> Option<InspirationImage> {
        let mut guard = self.inner.lock().expect("inspiration slot poisoned");
        guard.take()
    }

    /// Whether an image is pending, without consuming it.
    pub fn has_pending(&self) -> bool {
        let guard = self.inner.lock().expect("inspiration slot poisoned");
        guard.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_consumes_and_clears() {
        let slot = InspirationSlot::new();
        assert!(!slot.has_pending());

        slot.publish("file:///photos/inspiration.jpg");
        assert!(slot.has_pending());

        let image = slot.take().unwrap();
        assert_eq!(image.uri, "file:///photos/inspiration.jpg");
        assert!(!slot.has_pending());
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_publish_replaces_pending() {
        let slot = InspirationSlot::new();
        assert!(slot.publish("first.jpg").is_none());

        let displaced = slot.publish("second.jpg").unwrap();
        assert_eq!(displaced.uri, "first.jpg");
        assert_eq!(slot.take().unwrap().uri, "second.jpg");
    }

    #[test]
    fn test_clones_share_the_slot() {
        let publisher = InspirationSlot::new();
        let consumer = publisher.clone();

        publisher.publish("shared.jpg");
        assert_eq!(consumer.take().unwrap().uri, "shared.jpg");
        assert!(!publisher.has_pending());
    }
}
