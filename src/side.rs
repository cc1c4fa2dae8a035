use serde::{Deserialize, Serialize};

/// One of the four container edges a panel can slide in from.
///
/// The center panel is implicit; "no side" is expressed with `Option<Side>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis along which the center panel currently slides.
///
/// Left/right sides slide horizontally, top/bottom sides vertically. The two
/// groups are mutually exclusive: a deck never owns a horizontal and a
/// vertical offset through the same side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation group.
    pub fn flip(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// Orientation group this side belongs to.
    pub fn orientation(self) -> Orientation {
        match self {
            Side::Left | Side::Right => Orientation::Horizontal,
            Side::Top | Side::Bottom => Orientation::Vertical,
        }
    }

    /// The side on the opposite edge of the same orientation group.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    /// Sign applied to a raw axis delta so that a positive effective offset
    /// reveals this side. Dragging the center rightwards (positive x) reveals
    /// the left side, so left and top carry `1.0`, right and bottom `-1.0`.
    pub(crate) fn reveal_sign(self) -> f32 {
        match self {
            Side::Left | Side::Top => 1.0,
            Side::Right | Side::Bottom => -1.0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Container keyed by [`Side`]. Replaces index-based side arrays with a
/// type-checked mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SideMap<T> {
    left: T,
    right: T,
    top: T,
    bottom: T,
}

impl<T> SideMap<T> {
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        let Self {
            left,
            right,
            top,
            bottom,
        } = self;
        [
            (Side::Left, left),
            (Side::Right, right),
            (Side::Top, top),
            (Side::Bottom, bottom),
        ]
        .into_iter()
    }
}
