use serde::{Deserialize, Serialize};

use crate::side::{Orientation, Side};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadOffsetChanged {
    pub offset: f32,
    pub orientation: Orientation,
    pub panning: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadSideOpened {
    pub side: Side,
    pub animated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadSideClosed {
    pub side: Side,
    pub animated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadCenterShown {
    pub from: Side,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadPreviewBounced {
    pub side: Side,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadBounced {
    pub side: Side,
    /// `true` at the outward peak, `false` once the bounce settled.
    pub opening: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadPanBegan {
    pub origin: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadPanEnded {
    pub side: Option<Side>,
    pub opened: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadSizeChanged {
    pub side: Side,
    pub size: f32,
}

/// Mirrors every deck notification for hosts that prefer a channel over a
/// delegate implementation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    OffsetChanged(PayloadOffsetChanged),
    SideOpened(PayloadSideOpened),
    SideClosed(PayloadSideClosed),
    CenterShown(PayloadCenterShown),
    PreviewBounced(PayloadPreviewBounced),
    Bounced(PayloadBounced),
    PanBegan(PayloadPanBegan),
    PanEnded(PayloadPanEnded),
    SizeChanged(PayloadSizeChanged),
}
