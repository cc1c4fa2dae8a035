use egui::{
    CornerRadius, Pos2, Rect, Response, Sense, Ui, UiBuilder, Vec2, WidgetInfo, WidgetType,
};
use instant::Instant;

use crate::deck::{Deck, Stage};
use crate::metadata::{reset_metadata, Metadata};
use crate::settings::{CenterInteractivity, PanningMode, SettingsStyle};
use crate::side::{Orientation, Side};

/// Which panel a content closure is asked to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Center,
    Side(Side),
}

/// Widget for showing and interacting with a [`Deck`].
///
/// The widget borrows the deck mutably for the frame: it advances in-flight
/// transitions with the frame time, routes drag input through the deck's pan
/// API, lays out the center and the revealed side panel, and hands each
/// visible pane to the host's content closure.
///
/// ```ignore
/// DeckView::new(&mut self.deck).show(ui, |ui, pane| match pane {
///     Pane::Center => self.center_ui(ui),
///     Pane::Side(side) => self.side_ui(ui, side),
/// });
/// ```
pub struct DeckView<'a> {
    deck: &'a mut Deck,
    style: SettingsStyle,
    custom_id: Option<String>,
    pan_region: Option<Rect>,
}

impl<'a> DeckView<'a> {
    pub fn new(deck: &'a mut Deck) -> Self {
        Self {
            deck,
            style: SettingsStyle::default(),
            custom_id: None,
            pan_region: None,
        }
    }

    /// Modifies default style settings.
    pub fn with_style(mut self, style: &SettingsStyle) -> Self {
        self.style = style.clone();
        self
    }

    /// Sets a custom unique ID for this widget instance. Useful when multiple
    /// decks live in the same UI and need separate persisted state.
    pub fn with_id(mut self, custom_id: Option<String>) -> Self {
        self.custom_id = custom_id;
        self
    }

    /// Region (in screen coordinates) drags may start from when the panning
    /// mode is [`PanningMode::Region`].
    pub fn with_pan_region(mut self, region: Rect) -> Self {
        self.pan_region = Some(region);
        self
    }

    /// Shows the deck, calling `add_contents` once for every visible pane.
    pub fn show(
        mut self,
        ui: &mut Ui,
        mut add_contents: impl FnMut(&mut Ui, Pane),
    ) -> Response {
        let (rect, resp) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let mut meta = Metadata::new(self.custom_id.clone()).load(ui);

        // pre/post-rotation re-layout: the deck compares against its last
        // known container size itself
        self.deck.container_resized(rect.size());
        meta.container_size = rect.size();

        let dt = ui.input(|i| i.stable_dt);
        let t0 = Instant::now();
        if !meta.first_frame {
            self.deck.step(dt);
        }
        meta.last_step_time_ms = t0.elapsed().as_secs_f32() * 1000.0;

        self.handle_pan(ui, &resp, rect);

        let center = self.center_rect(rect);

        // panels sit beneath the center: revealed side first, then shadow,
        // then the center content on top
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let Some(side) = self.deck.group_active(orientation) else {
                continue;
            };
            if self.deck.group_offset(orientation) <= 0.0 {
                continue;
            }
            let side_rect = self.side_rect(rect, side);
            ui.painter().rect_filled(
                side_rect,
                CornerRadius::ZERO,
                ui.style().visuals.faint_bg_color,
            );
            self.show_pane(ui, side_rect, rect, Pane::Side(side), &mut add_contents);
        }

        self.paint_shadow(ui, center);
        ui.painter()
            .rect_filled(center, CornerRadius::ZERO, ui.style().visuals.panel_fill);
        self.show_pane(ui, center, rect, Pane::Center, &mut add_contents);
        self.handle_center_overlay(ui, &resp, center);

        if self.deck.is_animating() || self.deck.is_panning() {
            ui.ctx().request_repaint();
        }

        meta.first_frame = false;
        meta.save(ui);

        resp
    }

    fn show_pane(
        &mut self,
        ui: &mut Ui,
        pane_rect: Rect,
        outer: Rect,
        pane: Pane,
        add_contents: &mut impl FnMut(&mut Ui, Pane),
    ) {
        ui.scope_builder(UiBuilder::new().max_rect(pane_rect), |ui| {
            ui.set_clip_rect(pane_rect.intersect(outer));
            add_contents(ui, pane);
        });
    }

    // ---- input ------------------------------------------------------------

    fn handle_pan(&mut self, ui: &Ui, resp: &Response, rect: Rect) {
        if resp.drag_started() {
            if let Some(pos) = resp.interact_pointer_pos() {
                if self.pan_allowed_at(pos, rect) {
                    self.deck.pan_began(pos);
                }
            }
        }

        if resp.dragged() && self.deck.is_panning() {
            let delta = resp.drag_delta();
            if delta != Vec2::ZERO {
                self.deck.pan_changed(delta);
            }
        }

        if resp.drag_stopped() && self.deck.is_panning() {
            let velocity = ui.input(|i| i.pointer.velocity());
            self.deck.pan_ended(velocity);
        }
    }

    /// Region gating per panning mode; the delegate-mode predicate runs
    /// inside the deck itself.
    fn pan_allowed_at(&self, pos: Pos2, rect: Rect) -> bool {
        match self.deck.interaction().panning_mode {
            PanningMode::Disabled => false,
            PanningMode::FullView | PanningMode::Delegate => {
                self.center_rect(rect).contains(pos)
            }
            PanningMode::TopBar => self.top_bar_rect(rect).contains(pos),
            PanningMode::Region => self.pan_region.is_some_and(|r| r.contains(pos)),
            PanningMode::TopBarOrOpenCenter => {
                if self.deck.is_any_side_open() {
                    self.center_rect(rect).contains(pos)
                } else {
                    self.top_bar_rect(rect).contains(pos)
                }
            }
        }
    }

    fn top_bar_rect(&self, rect: Rect) -> Rect {
        let center = self.center_rect(rect);
        Rect::from_min_size(
            center.min,
            Vec2::new(center.width(), self.deck.interaction().top_bar_height),
        )
    }

    // ---- layout -----------------------------------------------------------

    /// The center panel's rect: displaced by the group offsets, or shrunk
    /// when the deck resizes the center instead.
    fn center_rect(&self, rect: Rect) -> Rect {
        let resizes = self.deck.interaction().resizes_center_view;
        let mut r = rect;
        let mut translation = Vec2::ZERO;

        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let Some(side) = self.deck.group_active(orientation) else {
                continue;
            };
            let offset = self.deck.group_offset(orientation);
            if offset == 0.0 {
                continue;
            }
            if resizes {
                match side {
                    Side::Left => r.min.x += offset,
                    Side::Right => r.max.x -= offset,
                    Side::Top => r.min.y += offset,
                    Side::Bottom => r.max.y -= offset,
                }
            } else {
                let signed = offset * side.reveal_sign();
                match orientation {
                    Orientation::Horizontal => translation.x += signed,
                    Orientation::Vertical => translation.y += signed,
                }
            }
        }

        r.translate(translation)
    }

    /// A side panel sits beneath the center, anchored at its container edge.
    fn side_rect(&self, rect: Rect, side: Side) -> Rect {
        let size = self.deck.effective_size(side);
        match side {
            Side::Left => Rect::from_min_size(rect.min, Vec2::new(size, rect.height())),
            Side::Right => Rect::from_min_max(
                Pos2::new(rect.max.x - size, rect.min.y),
                rect.max,
            ),
            Side::Top => Rect::from_min_size(rect.min, Vec2::new(rect.width(), size)),
            Side::Bottom => Rect::from_min_max(
                Pos2::new(rect.min.x, rect.max.y - size),
                rect.max,
            ),
        }
    }

    // ---- presentation -----------------------------------------------------

    fn paint_shadow(&mut self, ui: &Ui, center: Rect) {
        if self.style.shadow_width > 0.0 && self.deck.active_side().is_some() {
            ui.painter().rect_filled(
                center.expand(self.style.shadow_width),
                CornerRadius::ZERO,
                self.style.shadow_color,
            );
        }
        self.deck.apply_shadow_hook(ui.painter(), center);
    }

    /// While a side is open and the center is not fully interactive, a layer
    /// over the center swallows input and optionally closes on tap.
    fn handle_center_overlay(&mut self, ui: &mut Ui, resp: &Response, center: Rect) {
        let interactivity = self.deck.interaction().center_hidden_interactivity;
        if !interactivity.blocks_input() {
            return;
        }
        let blocking = Side::ALL
            .iter()
            .any(|&s| matches!(self.deck.stage(s), Stage::Open));
        if !blocking {
            return;
        }

        let overlay = ui.interact(center, resp.id.with("center_tapper"), Sense::click());
        let label = self.style.center_tap_label.clone();
        overlay.widget_info(|| {
            WidgetInfo::labeled(WidgetType::Button, interactivity.closes_on_tap(), &label)
        });
        ui.painter()
            .rect_filled(center, CornerRadius::ZERO, self.style.center_dim_color);

        if interactivity.closes_on_tap() && overlay.clicked() {
            if interactivity == CenterInteractivity::TapToCloseBouncing {
                self.deck.close_open_view_bouncing(|| {});
            } else {
                self.deck.close_open_view();
            }
        }
    }
}

/// Helper to reset the persisted per-instance [`Metadata`].
pub fn reset(ui: &mut Ui, id: Option<String>) {
    reset_metadata(ui, id);
}

/// Returns the last measured transition-step time in milliseconds.
pub fn get_metrics(ui: &Ui, id: Option<String>) -> f32 {
    let m = Metadata::new(id).load(ui);
    m.last_step_time_ms
}
