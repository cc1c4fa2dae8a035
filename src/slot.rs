use serde::{Deserialize, Serialize};

/// Which of the two coupled extents the host pinned when configuring a slot.
///
/// `size + ledge = container extent` along the slot's axis; the unpinned
/// quantity is derived on the first layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum SizeSpec {
    Size,
    Ledge,
}

/// Per-side panel configuration.
///
/// `size` is the fully-open extent of the panel, which equals the open slide
/// offset. `ledge` is the sliver of the container the sliding panel leaves
/// uncovered when this side is open, so the user always has something to grab
/// to drag the deck back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSlot {
    pub(crate) enabled: bool,
    pub(crate) size: f32,
    pub(crate) ledge: f32,
    pub(crate) spec: SizeSpec,
}

impl PanelSlot {
    /// Slot with a pinned open extent; the ledge is derived from the
    /// container on layout.
    pub fn sized(size: f32) -> Self {
        Self {
            enabled: true,
            size,
            ledge: 0.0,
            spec: SizeSpec::Size,
        }
    }

    /// Slot with a pinned ledge; the open extent is derived from the
    /// container on layout.
    pub fn ledged(ledge: f32) -> Self {
        Self {
            enabled: true,
            size: 0.0,
            ledge,
            spec: SizeSpec::Ledge,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Fully-open extent as configured, before the deck-wide ceiling applies.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn ledge(&self) -> f32 {
        self.ledge
    }

    /// Open extent after applying the deck-wide ceiling.
    pub(crate) fn effective_size(&self, max_size: f32) -> f32 {
        self.size.min(max_size)
    }

    /// A slot can be opened only when enabled with a positive extent;
    /// non-positive sizes mean "side disabled".
    pub(crate) fn openable(&self, max_size: f32) -> bool {
        self.enabled && self.effective_size(max_size) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_not_openable() {
        assert!(!PanelSlot::sized(0.0).openable(f32::INFINITY));
        assert!(!PanelSlot::sized(-10.0).openable(f32::INFINITY));
        assert!(PanelSlot::sized(240.0).openable(f32::INFINITY));
    }

    #[test]
    fn disabled_slot_is_not_openable() {
        assert!(!PanelSlot::sized(240.0)
            .with_enabled(false)
            .openable(f32::INFINITY));
    }

    #[test]
    fn ceiling_caps_effective_size() {
        let slot = PanelSlot::sized(400.0);
        assert_eq!(slot.effective_size(300.0), 300.0);
        assert_eq!(slot.effective_size(f32::INFINITY), 400.0);
    }
}
