//! Offset model: every mutation of the slide offset is validated here.
//!
//! Both producers of offset changes (the pan gesture path and the programmatic
//! transition engine) route their raw values through [`effective_offset`], so
//! clamping and elasticity behave identically no matter who is driving.

use egui::Vec2;

use crate::side::Orientation;

/// Fraction of a side's size that bounds elastic overscroll. The rubber band
/// can never stretch further than `size * ELASTIC_SLACK_RATIO` past either end.
pub(crate) const ELASTIC_SLACK_RATIO: f32 = 0.25;

/// Maximum extra travel available to elastic overscroll for a side of the
/// given size.
pub(crate) fn elastic_slack(size: f32) -> f32 {
    size * ELASTIC_SLACK_RATIO
}

/// Compresses raw overscroll distance into bounded travel with diminishing
/// returns: each additional unit of input yields a smaller increment, and the
/// result approaches `slack` asymptotically without reaching it.
fn compress(excess: f32, slack: f32) -> f32 {
    if slack <= 0.0 {
        return 0.0;
    }
    slack * excess / (slack + excess)
}

/// Computes the effective offset for a raw (uncompressed) target value.
///
/// Inside `[0, size]` the raw value passes through unchanged. Outside that
/// range the result is pinned to the boundary, or rubber-banded past it when
/// `elastic` is set.
pub(crate) fn effective_offset(raw: f32, size: f32, elastic: bool) -> f32 {
    if raw > size {
        if elastic {
            return size + compress(raw - size, elastic_slack(size));
        }
        return size;
    }
    if raw < 0.0 {
        if elastic {
            return -compress(-raw, elastic_slack(size));
        }
        return 0.0;
    }
    raw
}

/// Rescales an offset proportionally when a side's size changes mid-flight.
pub(crate) fn rescale(offset: f32, old_size: f32, new_size: f32) -> f32 {
    if old_size <= 0.0 {
        return 0.0;
    }
    offset / old_size * new_size
}

/// Extracts the component of a 2d pointer delta along the given axis.
pub(crate) fn axis_component(delta: Vec2, orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Horizontal => delta.x,
        Orientation::Vertical => delta.y,
    }
}
