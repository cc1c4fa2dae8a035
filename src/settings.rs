use egui::Color32;

use crate::delegate::DelegateMode;

/// Gating rule for drag gestures over the center panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanningMode {
    /// No panning allowed.
    Disabled,
    /// Touch anywhere on the center panel to drag the deck around.
    #[default]
    FullView,
    /// Panning only starts inside the top bar strip of the center panel
    /// (see [`SettingsInteraction::top_bar_height`]).
    TopBar,
    /// Panning only starts inside a host-designated region, supplied per
    /// frame via `DeckView::with_pan_region`.
    Region,
    /// Ask the deck delegate per gesture start.
    Delegate,
    /// Top-bar rule while fully closed; full-view rule while any side is
    /// open.
    TopBarOrOpenCenter,
}

/// How the center panel reacts to input while a side is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterInteractivity {
    /// The center panel stays fully interactive.
    #[default]
    Full,
    /// The center panel ignores user input until the side closes.
    Blocked,
    /// Input is blocked, but a tap on the center closes the open side.
    TapToClose,
    /// Like `TapToClose`, closing with a bounce.
    TapToCloseBouncing,
}

impl CenterInteractivity {
    pub(crate) fn blocks_input(self) -> bool {
        self != CenterInteractivity::Full
    }

    pub(crate) fn closes_on_tap(self) -> bool {
        matches!(
            self,
            CenterInteractivity::TapToClose | CenterInteractivity::TapToCloseBouncing
        )
    }
}

/// What is preserved when the container changes size (device rotation,
/// window resize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    /// Ledges are kept; the panels' open extents are recomputed from the new
    /// bounds.
    #[default]
    Ledge,
    /// Open extents are kept; the ledges are recomputed.
    View,
}

/// How the deck cooperates with a navigation-style center panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationBehavior {
    /// The center content manages its own stack; the deck stays out of it.
    #[default]
    Contained,
    /// The deck integrates with the center stack, enabling the right side to
    /// push content over the center.
    Integrated,
}

/// Gesture and interaction behavior of the deck.
#[derive(Debug, Clone)]
pub struct SettingsInteraction {
    /// Master switch; a disabled deck ignores gestures and open requests.
    pub enabled: bool,

    pub panning_mode: PanningMode,

    /// Rubber-band overscroll past a panel's natural extent.
    pub elastic: bool,

    pub center_hidden_interactivity: CenterInteractivity,

    pub size_mode: SizeMode,

    pub navigation_behavior: NavigationBehavior,

    pub delegate_mode: DelegateMode,

    /// Height of the strip used by the top-bar panning modes.
    pub top_bar_height: f32,

    /// When set, the center panel is resized to the remaining extent while a
    /// side is open instead of merely being displaced.
    pub resizes_center_view: bool,
}

impl Default for SettingsInteraction {
    fn default() -> Self {
        Self {
            enabled: true,
            panning_mode: PanningMode::default(),
            elastic: true,
            center_hidden_interactivity: CenterInteractivity::default(),
            size_mode: SizeMode::default(),
            navigation_behavior: NavigationBehavior::default(),
            delegate_mode: DelegateMode::default(),
            top_bar_height: 44.0,
            resizes_center_view: false,
        }
    }
}

/// Durations and curve factors for animated transitions.
#[derive(Debug, Clone)]
pub struct SettingsAnimation {
    /// Duration of a full open slide; snap animations scale it by the
    /// remaining distance.
    pub open_slide_duration: f32,

    /// Duration of a full close slide.
    pub close_slide_duration: f32,

    /// Fraction of a bounce spent sliding out. Clamped to `[0.01, 0.99]` on
    /// use.
    pub bounce_duration_factor: f32,

    /// Overrides `bounce_duration_factor` for the outward phase only, when
    /// set.
    pub bounce_open_side_duration_factor: Option<f32>,

    /// Default travel of a preview bounce when the caller does not pass one.
    pub preview_bounce_distance: f32,

    /// Default total duration of a preview bounce.
    pub preview_bounce_duration: f32,

    /// Default oscillation count of a preview bounce.
    pub preview_bounce_count: f32,

    /// Default damping factor (zeta) of a preview bounce.
    pub preview_bounce_damping: f32,
}

impl Default for SettingsAnimation {
    fn default() -> Self {
        Self {
            open_slide_duration: 0.3,
            close_slide_duration: 0.3,
            bounce_duration_factor: 0.3,
            bounce_open_side_duration_factor: None,
            preview_bounce_distance: 40.0,
            preview_bounce_duration: 1.2,
            preview_bounce_count: 4.0,
            preview_bounce_damping: 0.5,
        }
    }
}

impl SettingsAnimation {
    /// Outward-phase fraction for the full-extent bouncing open/close.
    pub(crate) fn open_bounce_fraction(&self) -> f32 {
        self.bounce_open_side_duration_factor
            .unwrap_or(self.bounce_duration_factor)
            .clamp(0.01, 0.99)
    }

    /// Outward-phase fraction for preview bounces.
    pub(crate) fn bounce_fraction(&self) -> f32 {
        self.bounce_duration_factor.clamp(0.01, 0.99)
    }
}

/// Presentation settings of the widget.
#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Extent of the drop shadow painted under the sliding panel. Zero
    /// disables the built-in shadow; the delegate shadow hook still runs.
    pub shadow_width: f32,

    pub shadow_color: Color32,

    /// Tint laid over the center panel while its input is blocked.
    pub center_dim_color: Color32,

    /// Accessibility label of the tap-to-close overlay.
    pub center_tap_label: String,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            shadow_width: 10.0,
            shadow_color: Color32::from_black_alpha(96),
            center_dim_color: Color32::from_black_alpha(40),
            center_tap_label: "Close the open side panel".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_fractions_are_clamped() {
        let mut s = SettingsAnimation {
            bounce_duration_factor: 1.7,
            ..Default::default()
        };
        assert_eq!(s.bounce_fraction(), 0.99);
        s.bounce_duration_factor = -3.0;
        assert_eq!(s.bounce_fraction(), 0.01);
        s.bounce_open_side_duration_factor = Some(0.0);
        assert_eq!(s.open_bounce_fraction(), 0.01);
    }
}
