use egui::{Painter, Pos2, Rect};

use crate::side::{Orientation, Side};

/// Which half of a bouncing open/close just finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BouncePhase {
    /// The panel reached the outermost point of the bounce.
    Opening,
    /// The panel settled at its final offset.
    Closing,
}

/// Capability interface for observing and vetoing deck transitions.
///
/// Every method has a permissive or no-op default, so implementers only
/// override the notifications they care about; there is no runtime
/// "responds-to" probing.
///
/// `should_*` hooks gate the operation they name: returning `false` aborts it
/// before any state change. `will_*`/`did_*` bracket the animated portion.
#[allow(unused_variables)]
pub trait DeckDelegate {
    /// Asked once per gesture start when the panning mode defers to the
    /// delegate.
    fn should_pan(&mut self, origin: Pos2) -> bool {
        true
    }

    /// Fired on every offset change, from gestures and animations alike.
    fn did_change_offset(&mut self, offset: f32, orientation: Orientation, panning: bool) {}

    fn should_open(&mut self, side: Side) -> bool {
        true
    }
    fn will_open(&mut self, side: Side, animated: bool) {}
    fn did_open(&mut self, side: Side, animated: bool) {}

    fn should_close(&mut self, side: Side, animated: bool) -> bool {
        true
    }
    fn will_close(&mut self, side: Side, animated: bool) {}
    fn did_close(&mut self, side: Side, animated: bool) {}

    /// Fired after the center panel is fully back in place, once per close,
    /// naming the side it returned from.
    fn did_show_center_view(&mut self, from: Side, animated: bool) {}

    fn should_preview_bounce(&mut self, side: Side) -> bool {
        true
    }
    fn will_preview_bounce(&mut self, side: Side, animated: bool) {}
    fn did_preview_bounce(&mut self, side: Side, animated: bool) {}

    /// Fired when a bouncing open/close finishes one of its phases.
    fn did_bounce(&mut self, side: Side, phase: BouncePhase) {}

    /// Lets the host override a recomputed ledge during (re)layout. The
    /// returned value is used as-is, clamped to the container.
    fn changes_ledge(&mut self, side: Side, ledge: f32) -> f32 {
        ledge
    }

    /// Presentation hook: draw a shadow under the sliding panel. `bounds` is
    /// the sliding panel's current rect in screen coordinates.
    fn apply_shadow(&mut self, painter: &Painter, bounds: Rect) {}
}

/// Whether notifications fan out to per-side panel delegates in addition to
/// the deck delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelegateMode {
    /// Only the deck delegate is notified.
    #[default]
    DelegateOnly,
    /// The deck delegate and any registered per-side panel delegates are
    /// notified; `should_*` hooks must all agree for the operation to
    /// proceed.
    DelegateAndPanels,
}
