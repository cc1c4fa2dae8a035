//! The deck model: panel registry, visibility state machine and gesture
//! controller.
//!
//! A [`Deck`] is owned by the host application and passed as `&mut` into
//! [`crate::DeckView`] every frame, the same way a graph model feeds a graph
//! widget. All state mutation happens here; the view only feeds input and
//! frame time in and paints what the model says.

use egui::{Painter, Pos2, Rect, Vec2};

use crate::delegate::{BouncePhase, DeckDelegate, DelegateMode};
use crate::offset::{axis_component, effective_offset, rescale};
use crate::settings::{
    NavigationBehavior, PanningMode, SettingsAnimation, SettingsInteraction, SizeMode,
};
use crate::side::{Orientation, Side, SideMap};
use crate::slot::{PanelSlot, SizeSpec};
use crate::transition::{
    BounceHook, Completion, Easing, Progress, Transition, TransitionKind,
};

#[cfg(feature = "events")]
use crate::events::{
    Event, EventSink, PayloadBounced, PayloadCenterShown, PayloadOffsetChanged, PayloadPanBegan,
    PayloadPanEnded, PayloadPreviewBounced, PayloadSideClosed, PayloadSideOpened,
    PayloadSizeChanged,
};

/// Fraction of a side's size the offset must pass for a released drag to snap
/// open instead of closed.
pub const SNAP_OPEN_FRACTION: f32 = 0.5;

/// Release velocity (points per second along the reveal direction) above
/// which a drag snaps open regardless of position; the mirrored value snaps
/// closed.
pub const FLING_VELOCITY: f32 = 500.0;

/// Floor for snap animation durations so settle completions always fire.
const MIN_SNAP_DURATION: f32 = 0.05;

/// Position in the per-side state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
    /// Transient preview state; always returns to `Closed`.
    Bouncing,
}

/// Parameters of a preview bounce. Unset fields fall back to
/// [`SettingsAnimation`] defaults.
#[derive(Debug, Clone)]
pub struct BounceSpec {
    pub distance: Option<f32>,
    pub duration: Option<f32>,
    pub bounces: Option<f32>,
    pub damping: Option<f32>,
    /// When unset, the preview runs without delegate notifications.
    pub call_delegates: bool,
}

impl Default for BounceSpec {
    fn default() -> Self {
        Self {
            distance: None,
            duration: None,
            bounces: None,
            damping: None,
            call_delegates: true,
        }
    }
}

/// One orientation group: the horizontal and vertical axes are independent
/// transition resources, each owning its own offset.
#[derive(Default)]
struct GroupState {
    active: Option<Side>,
    stage: Stage,
    offset: f32,
    transition: Option<Transition>,
    /// Operation to launch once the in-flight transition settles (sequenced
    /// close-then-open).
    after_settle: Option<QueuedOp>,
}

struct QueuedOp {
    side: Side,
    bouncing: bool,
    animated: bool,
    duration: Option<f32>,
    completion: Option<Completion>,
    hook: Option<BounceHook>,
}

struct PanState {
    accumulated: Vec2,
    side: Option<Side>,
    /// The locked side was settled Open when the gesture began.
    was_open: bool,
    start_offset: f32,
    vetoed: Option<Side>,
    /// Released; the snap animation still owns the panning flag.
    settling: bool,
}

/// Slot change deferred until the owning orientation group settles.
struct PendingSlotOp {
    side: Side,
    slot: Option<PanelSlot>,
}

/// Sliding panel deck: one center panel plus up to four edge panels.
pub struct Deck {
    slots: SideMap<Option<PanelSlot>>,
    interaction: SettingsInteraction,
    animation: SettingsAnimation,
    max_size: f32,
    container: Vec2,
    horizontal: GroupState,
    vertical: GroupState,
    front: Option<Orientation>,
    pan: Option<PanState>,
    pending: Vec<PendingSlotOp>,
    resize_completions: SideMap<Option<Completion>>,
    max_size_completion: Option<Completion>,
    max_size_pending: Option<Side>,
    delegate: Option<Box<dyn DeckDelegate>>,
    panel_delegates: SideMap<Option<Box<dyn DeckDelegate>>>,
    #[cfg(feature = "events")]
    sink: Option<Box<dyn EventSink>>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self {
            slots: SideMap::default(),
            interaction: SettingsInteraction::default(),
            animation: SettingsAnimation::default(),
            max_size: f32::INFINITY,
            container: Vec2::ZERO,
            horizontal: GroupState::default(),
            vertical: GroupState::default(),
            front: None,
            pan: None,
            pending: Vec::new(),
            resize_completions: SideMap::default(),
            max_size_completion: None,
            max_size_pending: None,
            delegate: None,
            panel_delegates: SideMap::default(),
            #[cfg(feature = "events")]
            sink: None,
        }
    }

    /// Adds a side panel slot during construction.
    pub fn with_slot(mut self, side: Side, slot: PanelSlot) -> Self {
        *self.slots.get_mut(side) = Some(slot);
        self
    }

    pub fn with_interaction(mut self, settings: SettingsInteraction) -> Self {
        self.interaction = settings;
        self
    }

    pub fn with_animation(mut self, settings: SettingsAnimation) -> Self {
        self.animation = settings;
        self
    }

    pub fn set_delegate(&mut self, delegate: impl DeckDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Registers a delegate notified on behalf of the hosted panel content of
    /// `side` when the delegate mode fans out to panels.
    pub fn set_panel_delegate(&mut self, side: Side, delegate: impl DeckDelegate + 'static) {
        *self.panel_delegates.get_mut(side) = Some(Box::new(delegate));
    }

    #[cfg(feature = "events")]
    /// Supplies a sink that receives every deck [`Event`]. Works with
    /// `crossbeam::channel::Sender<Event>` and [`crate::SinkFn`]-wrapped
    /// closures.
    pub fn set_event_sink(&mut self, sink: impl EventSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    // ---- queries ----------------------------------------------------------

    pub fn interaction(&self) -> &SettingsInteraction {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut SettingsInteraction {
        &mut self.interaction
    }

    pub fn animation(&self) -> &SettingsAnimation {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut SettingsAnimation {
        &mut self.animation
    }

    pub fn slot(&self, side: Side) -> Option<&PanelSlot> {
        self.slots.get(side).as_ref()
    }

    pub fn max_size(&self) -> f32 {
        self.max_size
    }

    pub fn container_size(&self) -> Vec2 {
        self.container
    }

    /// Current slide offset along the active orientation's axis. Positive
    /// values reveal the active side; zero means the center is in place.
    pub fn offset(&self) -> f32 {
        match self.front {
            Some(o) => self.group(o).offset,
            None => 0.0,
        }
    }

    /// Offset of one orientation group, regardless of which one is in front.
    pub fn group_offset(&self, orientation: Orientation) -> f32 {
        self.group(orientation).offset
    }

    /// Side currently owning an offset, whether open, mid-transition, or
    /// being dragged.
    pub fn active_side(&self) -> Option<Side> {
        match self.front {
            Some(front) => self
                .group(front)
                .active
                .or(self.group(front.flip()).active),
            None => self.horizontal.active.or(self.vertical.active),
        }
    }

    /// Orientation of the active side, if any.
    pub fn orientation(&self) -> Option<Orientation> {
        self.active_side().map(Side::orientation)
    }

    pub fn stage(&self, side: Side) -> Stage {
        let g = self.group(side.orientation());
        if g.active == Some(side) {
            g.stage
        } else {
            Stage::Closed
        }
    }

    pub fn is_side_open(&self, side: Side) -> bool {
        self.stage(side) == Stage::Open
    }

    pub fn is_side_closed(&self, side: Side) -> bool {
        self.stage(side) == Stage::Closed
    }

    pub fn is_any_side_open(&self) -> bool {
        Side::ALL.iter().any(|&s| self.is_side_open(s))
    }

    /// The side reporting Open, if any. At most one exists at any instant.
    pub fn open_side(&self) -> Option<Side> {
        Side::ALL.into_iter().find(|&s| self.is_side_open(s))
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.horizontal.transition.is_some() || self.vertical.transition.is_some()
    }

    /// Side currently owning one orientation group's offset, if any.
    pub fn group_active(&self, orientation: Orientation) -> Option<Side> {
        self.group(orientation).active
    }

    pub(crate) fn effective_size(&self, side: Side) -> f32 {
        self.slots
            .get(side)
            .as_ref()
            .map_or(0.0, |s| s.effective_size(self.max_size))
    }

    fn openable(&self, side: Side) -> bool {
        self.slots
            .get(side)
            .as_ref()
            .is_some_and(|s| s.openable(self.max_size))
    }

    fn extent_for(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.container.x,
            Orientation::Vertical => self.container.y,
        }
    }

    fn group(&self, orientation: Orientation) -> &GroupState {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn group_mut(&mut self, orientation: Orientation) -> &mut GroupState {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    // ---- registry ---------------------------------------------------------

    /// Attaches, replaces or removes the panel slot of a side. While the
    /// side's orientation group is animating or being dragged the change is
    /// queued and applied once the group settles.
    pub fn set_slot(&mut self, side: Side, slot: Option<PanelSlot>) {
        let busy = {
            let g = self.group(side.orientation());
            g.transition.is_some() || self.pan_owns(side.orientation())
        };
        if busy {
            self.pending.push(PendingSlotOp { side, slot });
            return;
        }
        self.apply_slot(side, slot);
    }

    pub fn set_side_enabled(&mut self, side: Side, enabled: bool) {
        if let Some(slot) = self.slots.get_mut(side) {
            slot.enabled = enabled;
        }
    }

    /// Sets the fully-open extent of a side. On an Open side the offset
    /// re-animates proportionally; the completion fires exactly once when
    /// layout settles, with `false` if superseded by a newer size change for
    /// the same side.
    pub fn set_size(
        &mut self,
        side: Side,
        size: f32,
        completion: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.set_extent(side, size, SizeSpec::Size, Some(Box::new(completion)))
    }

    /// Sets the ledge of a side; the open extent is re-derived from the
    /// container. Same completion semantics as [`Self::set_size`].
    pub fn set_ledge(
        &mut self,
        side: Side,
        ledge: f32,
        completion: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.set_extent(side, ledge, SizeSpec::Ledge, Some(Box::new(completion)))
    }

    fn set_extent(
        &mut self,
        side: Side,
        value: f32,
        spec: SizeSpec,
        completion: Option<Completion>,
    ) -> bool {
        if self.slots.get(side).is_none() {
            return Self::fail(completion);
        }
        // a newer size change for the same side supersedes the older one
        if let Some(old) = self.resize_completions.get_mut(side).take() {
            old(false);
        }

        let old_eff = self.effective_size(side);
        {
            let slot = self.slots.get_mut(side).as_mut().unwrap();
            match spec {
                SizeSpec::Size => slot.size = value,
                SizeSpec::Ledge => slot.ledge = value,
            }
            slot.spec = spec;
        }
        self.layout_slot(side, spec);
        let new_eff = self.effective_size(side);

        #[cfg(feature = "events")]
        self.publish(Event::SizeChanged(PayloadSizeChanged {
            side,
            size: new_eff,
        }));

        self.relayout_side(side, old_eff, new_eff, completion);
        true
    }

    /// Sets the deck-wide ceiling on open extents. The completion fires once
    /// any required re-layout of the open side settles.
    pub fn set_max_size(&mut self, max_size: f32, completion: impl FnOnce(bool) + 'static) {
        if let Some(old) = self.max_size_completion.take() {
            old(false);
        }
        self.max_size_pending = None;

        let affected: Vec<(Side, f32)> = Side::ALL
            .into_iter()
            .filter(|&s| self.slots.get(s).is_some())
            .map(|s| (s, self.effective_size(s)))
            .collect();
        self.max_size = max_size.max(0.0);

        let mut pending = None;
        for (side, old_eff) in affected {
            let new_eff = self.effective_size(side);
            if (old_eff - new_eff).abs() > f32::EPSILON
                && self.group(side.orientation()).active == Some(side)
            {
                self.relayout_side(side, old_eff, new_eff, None);
                let o = side.orientation();
                if self.group(o).transition.is_some() || self.pan_owns(o) {
                    pending = Some(side);
                }
            }
        }

        match pending {
            Some(side) => {
                self.max_size_pending = Some(side);
                self.max_size_completion = Some(Box::new(completion));
            }
            None => completion(true),
        }
    }

    /// Feeds a new container size into the deck (window resize, device
    /// rotation). What is preserved per slot is decided by the size mode.
    pub fn container_resized(&mut self, size: Vec2) {
        if size == self.container {
            return;
        }
        let first = self.container == Vec2::ZERO;
        self.container = size;

        for side in Side::ALL {
            if self.slots.get(side).is_none() {
                continue;
            }
            let preserve = if first {
                self.slots.get(side).as_ref().unwrap().spec
            } else {
                match self.interaction.size_mode {
                    SizeMode::Ledge => SizeSpec::Ledge,
                    SizeMode::View => SizeSpec::Size,
                }
            };
            let old_eff = self.effective_size(side);
            self.layout_slot(side, preserve);
            let new_eff = self.effective_size(side);

            // re-layout is instantaneous on rotation: no animation, but the
            // offset still flows through the funnel
            let o = side.orientation();
            if self.group(o).active == Some(side) && (old_eff - new_eff).abs() > f32::EPSILON {
                if let Some(tr) = self.group_mut(o).transition.as_mut() {
                    tr.from = rescale(tr.from, old_eff, new_eff);
                    if tr.to > 0.0 {
                        tr.to = rescale(tr.to, old_eff, new_eff);
                    }
                }
                let scaled = rescale(self.group(o).offset, old_eff, new_eff);
                self.set_group_offset(o, scaled, false);
            }
        }
    }

    /// Recomputes the coupled size/ledge pair of a slot from the container,
    /// preserving the given quantity and offering the resulting ledge to the
    /// delegate override.
    fn layout_slot(&mut self, side: Side, preserve: SizeSpec) {
        let extent = self.extent_for(side.orientation());
        if extent <= 0.0 {
            return;
        }
        let (size, ledge) = {
            let slot = self.slots.get(side).as_ref().unwrap();
            (slot.size, slot.ledge)
        };
        let (new_size, new_ledge) = match preserve {
            SizeSpec::Size => {
                let computed = (extent - size.clamp(0.0, extent)).max(0.0);
                let overridden = self.override_ledge(side, computed).clamp(0.0, extent);
                (extent - overridden, overridden)
            }
            SizeSpec::Ledge => {
                let overridden = self.override_ledge(side, ledge).clamp(0.0, extent);
                ((extent - overridden).max(0.0), overridden)
            }
        };
        let slot = self.slots.get_mut(side).as_mut().unwrap();
        slot.size = new_size;
        slot.ledge = new_ledge;
    }

    /// Animates an active side to its new extent after a configuration
    /// change; inactive sides settle immediately.
    fn relayout_side(
        &mut self,
        side: Side,
        old_eff: f32,
        new_eff: f32,
        completion: Option<Completion>,
    ) {
        let o = side.orientation();

        if self.group(o).active != Some(side) {
            Self::ok(completion);
            return;
        }

        // disabled mid-open: close it
        if new_eff <= 0.0 {
            self.store_resize_completion(side, completion);
            self.close_inner(side, true, None, None);
            return;
        }

        if let Some(tr) = self.group_mut(o).transition.as_mut() {
            tr.from = rescale(tr.from, old_eff, new_eff);
            if tr.to > 0.0 {
                tr.to = rescale(tr.to, old_eff, new_eff);
            }
            let scaled = rescale(self.group(o).offset, old_eff, new_eff);
            self.set_group_offset(o, scaled, false);
            self.store_resize_completion(side, completion);
            return;
        }

        if self.pan_owns(o) {
            if let Some(p) = self.pan.as_mut() {
                p.start_offset = rescale(p.start_offset, old_eff, new_eff);
            }
            let scaled = rescale(self.group(o).offset, old_eff, new_eff);
            self.set_group_offset(o, scaled, true);
            self.store_resize_completion(side, completion);
            return;
        }

        if self.group(o).stage == Stage::Open {
            let from = self.group(o).offset;
            if (from - new_eff).abs() <= f32::EPSILON {
                Self::ok(completion);
                return;
            }
            self.store_resize_completion(side, completion);
            let tr = Transition::new(
                side,
                TransitionKind::Resize,
                from,
                new_eff,
                self.animation.open_slide_duration,
            );
            self.begin_transition(o, tr);
            return;
        }

        Self::ok(completion);
    }

    /// A newer layout change for the side supersedes the pending completion.
    fn store_resize_completion(&mut self, side: Side, completion: Option<Completion>) {
        if let Some(old) = self.resize_completions.get_mut(side).take() {
            old(false);
        }
        *self.resize_completions.get_mut(side) = completion;
    }

    fn apply_slot(&mut self, side: Side, slot: Option<PanelSlot>) {
        let o = side.orientation();
        if slot.is_none() && self.group(o).active == Some(side) {
            // content is gone; reset the group without notifications
            self.set_group_offset(o, 0.0, false);
            self.settle(o, None, Stage::Closed);
        }
        *self.slots.get_mut(side) = slot;
        if self.slots.get(side).is_some() {
            let spec = self.slots.get(side).as_ref().unwrap().spec;
            self.layout_slot(side, spec);
            // a swapped slot under an open side re-syncs the offset in place
            if self.group(o).active == Some(side) && self.group(o).stage == Stage::Open {
                let eff = self.effective_size(side);
                self.set_group_offset(o, eff, false);
            }
        }
    }

    fn apply_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let ops = std::mem::take(&mut self.pending);
        for op in ops {
            let busy = {
                let g = self.group(op.side.orientation());
                g.transition.is_some() || self.pan_owns(op.side.orientation())
            };
            if busy {
                self.pending.push(op);
            } else {
                self.apply_slot(op.side, op.slot);
            }
        }
    }

    // ---- open / close / toggle -------------------------------------------

    /// Opens a side with the default animation. Returns `false` if the side
    /// is disabled, unattached, or vetoed.
    pub fn open(&mut self, side: Side) -> bool {
        self.open_inner(side, true, None, None)
    }

    /// Opens a side, optionally instantly, with a completion that reports
    /// exactly once whether the open ran to the end.
    pub fn open_with(
        &mut self,
        side: Side,
        animated: bool,
        completion: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.open_inner(side, animated, None, Some(Box::new(completion)))
    }

    /// Closes a side with the default animation.
    pub fn close(&mut self, side: Side) -> bool {
        self.close_inner(side, true, None, None)
    }

    pub fn close_with(
        &mut self,
        side: Side,
        animated: bool,
        completion: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.close_inner(side, animated, None, Some(Box::new(completion)))
    }

    /// Closes a side over an explicit duration instead of the configured one.
    pub fn close_with_duration(
        &mut self,
        side: Side,
        duration: f32,
        completion: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.close_inner(side, true, Some(duration), Some(Box::new(completion)))
    }

    /// Opens if closed, closes if open. Issued mid-transition it reverses
    /// direction from the current offset instead of queuing a round trip.
    pub fn toggle(&mut self, side: Side) -> bool {
        self.toggle_inner(side, true, None)
    }

    pub fn toggle_with(
        &mut self,
        side: Side,
        animated: bool,
        completion: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.toggle_inner(side, animated, Some(Box::new(completion)))
    }

    fn toggle_inner(&mut self, side: Side, animated: bool, completion: Option<Completion>) -> bool {
        match self.stage(side) {
            Stage::Open | Stage::Opening => self.close_inner(side, animated, None, completion),
            Stage::Closed | Stage::Closing | Stage::Bouncing => {
                self.open_inner(side, animated, None, completion)
            }
        }
    }

    /// Toggles whichever side is currently open or opening. Returns `false`
    /// when there is nothing to toggle.
    pub fn toggle_open_view(&mut self) -> bool {
        match self.transitioning_or_open_side() {
            Some(side) => self.toggle_inner(side, true, None),
            None => false,
        }
    }

    /// Closes whichever side is currently open; no-op success when none is.
    pub fn close_open_view(&mut self) -> bool {
        match self.transitioning_or_open_side() {
            Some(side) => self.close_inner(side, true, None, None),
            None => true,
        }
    }

    pub fn close_open_view_with(&mut self, completion: impl FnOnce(bool) + 'static) -> bool {
        match self.transitioning_or_open_side() {
            Some(side) => self.close_inner(side, true, None, Some(Box::new(completion))),
            None => {
                completion(true);
                true
            }
        }
    }

    /// Closes the open side with a full bounce out first.
    pub fn close_open_view_bouncing(&mut self, bounced: impl FnOnce() + 'static) -> bool {
        match self.transitioning_or_open_side() {
            Some(side) => self.close_bouncing_inner(side, Some(Box::new(bounced)), None),
            None => true,
        }
    }

    fn transitioning_or_open_side(&self) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&s| matches!(self.stage(s), Stage::Open | Stage::Opening))
    }

    fn open_inner(
        &mut self,
        side: Side,
        animated: bool,
        duration: Option<f32>,
        completion: Option<Completion>,
    ) -> bool {
        if !self.interaction.enabled || !self.openable(side) {
            return Self::fail(completion);
        }
        let o = side.orientation();

        // coalesce requests targeting the side that already owns the group
        if self.group(o).active == Some(side) {
            match self.group(o).stage {
                Stage::Open => {
                    // idempotent: no delegates re-fire
                    Self::ok(completion);
                    return true;
                }
                Stage::Opening => {
                    if let Some(c) = completion {
                        if let Some(tr) = self.group_mut(o).transition.as_mut() {
                            if let Some(old) = tr.take_completion() {
                                old(false);
                            }
                            tr.set_completion(c);
                        } else {
                            c(true);
                        }
                    }
                    return true;
                }
                Stage::Closing | Stage::Bouncing | Stage::Closed => {
                    // reversal handled below from the current offset
                }
            }
        }

        // only one side may be open across both groups
        let other = o.flip();
        if let Some(u) = self.group(other).active {
            if matches!(self.group(other).stage, Stage::Open | Stage::Opening)
                && !self.close_inner(u, animated, None, None)
            {
                return Self::fail(completion);
            }
        }

        // same group occupied by the opposite side: close it first, sequenced
        if let Some(t) = self.group(o).active {
            if t != side {
                if !self.allows(|d| d.should_open(side)) {
                    return Self::fail(completion);
                }
                match self.group(o).stage {
                    Stage::Open | Stage::Opening => {
                        if !self.close_inner(t, animated, None, None) {
                            return Self::fail(completion);
                        }
                    }
                    Stage::Closing | Stage::Bouncing | Stage::Closed => {}
                }
                if self.group(o).transition.is_some() {
                    self.group_mut(o).after_settle = Some(QueuedOp {
                        side,
                        bouncing: false,
                        animated,
                        duration,
                        completion,
                        hook: None,
                    });
                    return true;
                }
                // instant path fell through with the group already settled
                self.start_open(side, animated, duration, completion, false);
                return true;
            }
        }

        if !self.allows(|d| d.should_open(side)) {
            return Self::fail(completion);
        }
        self.start_open(side, animated, duration, completion, false);
        true
    }

    fn close_inner(
        &mut self,
        side: Side,
        animated: bool,
        duration: Option<f32>,
        completion: Option<Completion>,
    ) -> bool {
        let o = side.orientation();
        if self.group(o).active != Some(side) {
            Self::ok(completion);
            return true;
        }
        match self.group(o).stage {
            Stage::Closed => {
                Self::ok(completion);
                true
            }
            Stage::Closing => {
                if !animated {
                    self.cancel_transition(o);
                    self.set_group_offset(o, 0.0, false);
                    self.finish_close(side, false);
                }
                if let Some(c) = completion {
                    match self.group_mut(o).transition.as_mut() {
                        Some(tr) => {
                            if let Some(old) = tr.take_completion() {
                                old(false);
                            }
                            tr.set_completion(c);
                        }
                        None => c(true),
                    }
                }
                true
            }
            Stage::Bouncing => {
                // cancel the preview and settle closed without close
                // notifications; the side never reported Open
                self.cancel_transition(o);
                if animated {
                    let from = self.group(o).offset;
                    let d = self.snap_duration(self.animation.close_slide_duration, from, side);
                    let tr = Transition::new(side, TransitionKind::Close, from, 0.0, d)
                        .with_easing(Easing::EaseOut)
                        .with_completion(completion)
                        .silent();
                    self.group_mut(o).stage = Stage::Closing;
                    self.begin_transition(o, tr);
                } else {
                    self.set_group_offset(o, 0.0, false);
                    self.settle(o, None, Stage::Closed);
                    Self::ok(completion);
                }
                true
            }
            Stage::Open | Stage::Opening => {
                if !self.allows(|d| d.should_close(side, animated)) {
                    return Self::fail(completion);
                }
                self.notify(|d| d.will_close(side, animated));
                self.cancel_transition(o);
                if animated {
                    let from = self.group(o).offset;
                    let d = duration
                        .unwrap_or_else(|| {
                            self.snap_duration(self.animation.close_slide_duration, from, side)
                        })
                        .max(MIN_SNAP_DURATION);
                    let tr = Transition::new(side, TransitionKind::Close, from, 0.0, d)
                        .with_completion(completion);
                    self.group_mut(o).stage = Stage::Closing;
                    self.begin_transition(o, tr);
                } else {
                    self.set_group_offset(o, 0.0, false);
                    self.finish_close(side, false);
                    Self::ok(completion);
                }
                true
            }
        }
    }

    // ---- bouncing ---------------------------------------------------------

    /// Opens a side by first bouncing it fully out to the container edge.
    /// `bounced` fires at the peak.
    pub fn open_bouncing(
        &mut self,
        side: Side,
        bounced: impl FnOnce() + 'static,
    ) -> bool {
        self.open_bouncing_inner(side, Some(Box::new(bounced)), None)
    }

    pub fn open_bouncing_with(
        &mut self,
        side: Side,
        bounced: impl FnOnce() + 'static,
        completion: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.open_bouncing_inner(side, Some(Box::new(bounced)), Some(Box::new(completion)))
    }

    /// Closes a side by first bouncing it fully out, then sliding closed.
    pub fn close_bouncing(
        &mut self,
        side: Side,
        bounced: impl FnOnce() + 'static,
    ) -> bool {
        self.close_bouncing_inner(side, Some(Box::new(bounced)), None)
    }

    pub fn close_bouncing_with(
        &mut self,
        side: Side,
        bounced: impl FnOnce() + 'static,
        completion: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.close_bouncing_inner(side, Some(Box::new(bounced)), Some(Box::new(completion)))
    }

    fn open_bouncing_inner(
        &mut self,
        side: Side,
        hook: Option<BounceHook>,
        completion: Option<Completion>,
    ) -> bool {
        if !self.interaction.enabled || !self.openable(side) {
            return Self::fail(completion);
        }
        let o = side.orientation();
        if self.stage(side) == Stage::Open && self.group(o).transition.is_none() {
            Self::ok(completion);
            return true;
        }

        let other = o.flip();
        if let Some(u) = self.group(other).active {
            if matches!(self.group(other).stage, Stage::Open | Stage::Opening)
                && !self.close_inner(u, true, None, None)
            {
                return Self::fail(completion);
            }
        }
        if let Some(t) = self.group(o).active {
            if t != side {
                if !self.allows(|d| d.should_open(side)) {
                    return Self::fail(completion);
                }
                if matches!(self.group(o).stage, Stage::Open | Stage::Opening)
                    && !self.close_inner(t, true, None, None)
                {
                    return Self::fail(completion);
                }
                if self.group(o).transition.is_some() {
                    self.group_mut(o).after_settle = Some(QueuedOp {
                        side,
                        bouncing: true,
                        animated: true,
                        duration: None,
                        completion,
                        hook,
                    });
                    return true;
                }
            }
        }

        if !self.allows(|d| d.should_open(side)) {
            return Self::fail(completion);
        }
        self.start_open_bouncing(side, hook, completion);
        true
    }

    fn start_open_bouncing(
        &mut self,
        side: Side,
        hook: Option<BounceHook>,
        completion: Option<Completion>,
    ) {
        self.notify(|d| d.will_open(side, true));
        let o = side.orientation();
        let size = self.effective_size(side);
        let peak = self.extent_for(o).max(size);
        self.front = Some(o);
        {
            let g = self.group_mut(o);
            g.active = Some(side);
            g.stage = Stage::Opening;
        }
        let from = self.group(o).offset;
        let tr = Transition::new(
            side,
            TransitionKind::OpenBouncing { peak },
            from,
            size,
            self.animation.open_slide_duration * 2.0,
        )
        .with_open_fraction(self.animation.open_bounce_fraction())
        .with_hook(hook)
        .with_completion(completion);
        self.begin_transition(o, tr);
    }

    fn close_bouncing_inner(
        &mut self,
        side: Side,
        hook: Option<BounceHook>,
        completion: Option<Completion>,
    ) -> bool {
        let o = side.orientation();
        if self.group(o).active != Some(side) || self.group(o).stage == Stage::Closed {
            Self::ok(completion);
            return true;
        }
        if !matches!(self.group(o).stage, Stage::Open | Stage::Opening) {
            // already closing or bouncing; fall back to a plain close
            return self.close_inner(side, true, None, completion);
        }
        if !self.allows(|d| d.should_close(side, true)) {
            return Self::fail(completion);
        }
        self.notify(|d| d.will_close(side, true));
        self.cancel_transition(o);
        let size = self.effective_size(side);
        let peak = self.extent_for(o).max(size);
        let from = self.group(o).offset;
        let tr = Transition::new(
            side,
            TransitionKind::CloseBouncing { peak },
            from,
            0.0,
            self.animation.close_slide_duration * 2.0,
        )
        .with_open_fraction(self.animation.open_bounce_fraction())
        .with_hook(hook)
        .with_completion(completion);
        self.group_mut(o).stage = Stage::Closing;
        self.begin_transition(o, tr);
        true
    }

    /// Previews a side with the default bounce parameters.
    pub fn preview_bounce(&mut self, side: Side) -> bool {
        self.preview_bounce_inner(side, &BounceSpec::default(), None)
    }

    /// Previews a side: slides out to a distance and oscillates back closed.
    /// Never reports Open; always ends closed.
    pub fn preview_bounce_with(
        &mut self,
        side: Side,
        spec: &BounceSpec,
        completion: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.preview_bounce_inner(side, spec, Some(Box::new(completion)))
    }

    fn preview_bounce_inner(
        &mut self,
        side: Side,
        spec: &BounceSpec,
        completion: Option<Completion>,
    ) -> bool {
        if !self.interaction.enabled || !self.openable(side) {
            return Self::fail(completion);
        }
        let o = side.orientation();
        // previews only launch from a resting group
        if self.group(o).active.is_some() || self.group(o).transition.is_some() {
            return Self::fail(completion);
        }
        if spec.call_delegates {
            if !self.allows(|d| d.should_preview_bounce(side)) {
                return Self::fail(completion);
            }
            self.notify(|d| d.will_preview_bounce(side, true));
        }

        let size = self.effective_size(side);
        let distance = spec
            .distance
            .unwrap_or(self.animation.preview_bounce_distance)
            .clamp(0.0, size);
        let duration = spec
            .duration
            .unwrap_or(self.animation.preview_bounce_duration);
        let bounces = spec.bounces.unwrap_or(self.animation.preview_bounce_count);
        let damping = spec.damping.unwrap_or(self.animation.preview_bounce_damping);

        self.front = Some(o);
        {
            let g = self.group_mut(o);
            g.active = Some(side);
            g.stage = Stage::Bouncing;
        }
        let mut tr = Transition::new(
            side,
            TransitionKind::PreviewBounce {
                distance,
                bounces,
                damping,
            },
            0.0,
            0.0,
            duration,
        )
        .with_open_fraction(self.animation.bounce_fraction())
        .with_completion(completion);
        if !spec.call_delegates {
            tr = tr.silent();
        }
        self.begin_transition(o, tr);
        true
    }

    // ---- side push --------------------------------------------------------

    /// Whether the right panel may take over the center role while open.
    /// Requires navigation integration and the right side to be Open.
    pub fn can_push_over_center(&self) -> bool {
        self.interaction.navigation_behavior == NavigationBehavior::Integrated
            && self.is_side_open(Side::Right)
    }

    /// Hands the center role to the right panel's content: the right side
    /// closes instantly, without a slide-back animation, and the host swaps
    /// its center content on a `true` return.
    pub fn push_over_center(&mut self) -> bool {
        if !self.can_push_over_center() {
            return false;
        }
        self.close_inner(Side::Right, false, None, None)
    }

    // ---- pan gesture ------------------------------------------------------

    /// Starts a drag gesture. The view performs region gating; the deck
    /// consults the delegate when the panning mode asks for it. Returns
    /// whether the gesture was accepted.
    pub fn pan_began(&mut self, origin: Pos2) -> bool {
        if !self.interaction.enabled {
            return false;
        }
        match self.interaction.panning_mode {
            PanningMode::Disabled => return false,
            PanningMode::Delegate => {
                if !self.allows(|d| d.should_pan(origin)) {
                    return false;
                }
            }
            _ => {}
        }

        // a drag grabs whatever side currently owns an offset, cancelling the
        // in-flight animation
        let grabbed = self.active_transitioning_side();
        let was_open = grabbed.is_some_and(|s| self.stage(s) == Stage::Open);
        if let Some(side) = grabbed {
            self.cancel_transition(side.orientation());
        }
        let start_offset = grabbed.map_or(0.0, |s| self.group(s.orientation()).offset);

        self.pan = Some(PanState {
            accumulated: Vec2::ZERO,
            side: grabbed,
            was_open,
            start_offset,
            vetoed: None,
            settling: false,
        });

        #[cfg(feature = "events")]
        self.publish(Event::PanBegan(PayloadPanBegan {
            origin: [origin.x, origin.y],
        }));
        true
    }

    /// Feeds a drag movement into the deck. The live offset is recomputed
    /// through the offset model and reported with `panning = true`.
    pub fn pan_changed(&mut self, delta: Vec2) {
        if self.pan.as_ref().is_none_or(|p| p.settling) {
            return;
        }
        if let Some(p) = self.pan.as_mut() {
            p.accumulated += delta;
        }

        let Some(side) = self.pan_target() else {
            return;
        };
        let o = side.orientation();
        let (accumulated, start_offset, was_open) = {
            let p = self.pan.as_ref().unwrap();
            (p.accumulated, p.start_offset, p.was_open)
        };
        let signed = axis_component(accumulated, o) * side.reveal_sign();
        let raw = start_offset + signed;
        let size = self.effective_size(side);
        let eff = effective_offset(raw, size, self.interaction.elastic);

        self.front = Some(o);
        {
            let g = self.group_mut(o);
            g.active = Some(side);
            g.stage = if was_open { Stage::Open } else { Stage::Opening };
        }
        self.set_group_offset(o, eff, true);
    }

    /// Ends a drag gesture and snaps open or closed. The panning flag stays
    /// up until the snap animation settles.
    pub fn pan_ended(&mut self, velocity: Vec2) {
        let Some(p) = self.pan.as_mut() else {
            return;
        };
        if p.settling {
            return;
        }
        let Some(side) = p.side else {
            self.pan = None;
            #[cfg(feature = "events")]
            self.publish(Event::PanEnded(PayloadPanEnded {
                side: None,
                opened: false,
            }));
            return;
        };
        p.settling = true;
        let was_open = p.was_open;

        let o = side.orientation();
        let offset = self.group(o).offset;
        let size = self.effective_size(side);
        let v = axis_component(velocity, o) * side.reveal_sign();

        let opens = if v >= FLING_VELOCITY {
            true
        } else if v <= -FLING_VELOCITY {
            false
        } else {
            offset > size * SNAP_OPEN_FRACTION
        };

        if opens {
            self.snap_open(side, was_open);
        } else {
            self.snap_closed(side, was_open);
        }

        #[cfg(feature = "events")]
        self.publish(Event::PanEnded(PayloadPanEnded {
            side: Some(side),
            opened: opens,
        }));
    }

    /// Cancels a drag: the deck snaps back to the state it was in when the
    /// gesture began, without notifications.
    pub fn pan_cancelled(&mut self) {
        let Some(p) = self.pan.as_mut() else {
            return;
        };
        if p.settling {
            return;
        }
        let Some(side) = p.side else {
            self.pan = None;
            return;
        };
        p.settling = true;
        let was_open = p.was_open;
        let o = side.orientation();
        let offset = self.group(o).offset;
        let size = self.effective_size(side);

        let (target, stage) = if was_open {
            (size, Stage::Opening)
        } else {
            (0.0, Stage::Closing)
        };
        let base = if was_open {
            self.animation.open_slide_duration
        } else {
            self.animation.close_slide_duration
        };
        let d = (base * ((target - offset).abs() / size.max(f32::EPSILON))).max(MIN_SNAP_DURATION);
        let kind = if was_open {
            TransitionKind::Open
        } else {
            TransitionKind::Close
        };
        let tr = Transition::new(side, kind, offset, target, d)
            .with_easing(Easing::EaseOut)
            .from_pan()
            .silent();
        self.group_mut(o).stage = stage;
        self.begin_transition(o, tr);
    }

    /// Resolves which side the current gesture drives, locking a candidate
    /// from the drag direction on first movement and allowing a flip to the
    /// opposite side while the offset rests at zero.
    fn pan_target(&mut self) -> Option<Side> {
        let (locked, accumulated, was_open, vetoed) = {
            let p = self.pan.as_ref()?;
            (p.side, p.accumulated, p.was_open, p.vetoed)
        };

        if let Some(side) = locked {
            // flipping is only possible while nothing is revealed
            if !was_open && self.group(side.orientation()).offset <= 0.0 {
                let o = side.orientation();
                let signed = axis_component(accumulated, o) * side.reveal_sign();
                if signed < 0.0 {
                    let opp = side.opposite();
                    if self.openable(opp)
                        && vetoed != Some(opp)
                        && self.lock_pan_side(opp)
                    {
                        return Some(opp);
                    }
                }
            }
            return Some(side);
        }

        if accumulated == Vec2::ZERO {
            return None;
        }
        let o = if accumulated.x.abs() >= accumulated.y.abs() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let axis = axis_component(accumulated, o);
        let candidate = match (o, axis > 0.0) {
            (Orientation::Horizontal, true) => Side::Left,
            (Orientation::Horizontal, false) => Side::Right,
            (Orientation::Vertical, true) => Side::Top,
            (Orientation::Vertical, false) => Side::Bottom,
        };
        if !self.openable(candidate) || vetoed == Some(candidate) {
            return None;
        }
        // a side open in the other group pins the gesture; it has to close
        // through its own path first
        if self.is_any_side_open() {
            return None;
        }
        if !self.lock_pan_side(candidate) {
            return None;
        }
        Some(candidate)
    }

    /// Gates a candidate through `should_open` and locks it. Returns whether
    /// the lock took.
    fn lock_pan_side(&mut self, side: Side) -> bool {
        if !self.allows(|d| d.should_open(side)) {
            if let Some(p) = self.pan.as_mut() {
                p.vetoed = Some(side);
            }
            return false;
        }
        let offset = self.group(side.orientation()).offset;
        if let Some(p) = self.pan.as_mut() {
            p.side = Some(side);
            p.start_offset = offset;
        }
        true
    }

    fn snap_open(&mut self, side: Side, was_open: bool) {
        let o = side.orientation();
        if !was_open {
            self.notify(|d| d.will_open(side, true));
        }
        let offset = self.group(o).offset;
        let size = self.effective_size(side);
        let d = self.snap_duration(self.animation.open_slide_duration, size - offset, side);
        let mut tr = Transition::new(side, TransitionKind::Open, offset, size, d)
            .with_easing(Easing::EaseOut)
            .from_pan();
        if was_open {
            tr = tr.silent();
        }
        self.group_mut(o).stage = if was_open { Stage::Open } else { Stage::Opening };
        self.begin_transition(o, tr);
    }

    fn snap_closed(&mut self, side: Side, was_open: bool) {
        let o = side.orientation();
        if was_open {
            if !self.allows(|d| d.should_close(side, true)) {
                // close vetoed: snap back open instead
                self.snap_open(side, true);
                return;
            }
            self.notify(|d| d.will_close(side, true));
        }
        let offset = self.group(o).offset;
        let d = self.snap_duration(self.animation.close_slide_duration, offset, side);
        let mut tr = Transition::new(side, TransitionKind::Close, offset, 0.0, d)
            .with_easing(Easing::EaseOut)
            .from_pan();
        if !was_open {
            tr = tr.silent();
        }
        self.group_mut(o).stage = Stage::Closing;
        self.begin_transition(o, tr);
    }

    /// Snap duration proportional to the remaining travel.
    fn snap_duration(&self, base: f32, distance: f32, side: Side) -> f32 {
        let size = self.effective_size(side).max(f32::EPSILON);
        (base * (distance.abs() / size)).clamp(MIN_SNAP_DURATION, base.max(MIN_SNAP_DURATION))
    }

    fn pan_owns(&self, orientation: Orientation) -> bool {
        self.pan
            .as_ref()
            .and_then(|p| p.side)
            .is_some_and(|s| s.orientation() == orientation)
    }

    fn active_transitioning_side(&self) -> Option<Side> {
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            if let Some(side) = self.group(o).active {
                return Some(side);
            }
        }
        None
    }

    // ---- frame stepping ---------------------------------------------------

    /// Advances in-flight transitions by `dt` seconds. The view calls this
    /// once per frame; tests drive it directly.
    pub fn step(&mut self, dt: f32) {
        self.step_group(Orientation::Horizontal, dt);
        self.step_group(Orientation::Vertical, dt);
    }

    fn step_group(&mut self, o: Orientation, dt: f32) {
        let Some(mut tr) = self.group_mut(o).transition.take() else {
            return;
        };
        let progress = tr.advance(dt);

        if tr.poll_peak() {
            if matches!(
                tr.kind,
                TransitionKind::OpenBouncing { .. } | TransitionKind::CloseBouncing { .. }
            ) {
                let side = tr.side;
                self.notify(|d| d.did_bounce(side, BouncePhase::Opening));
                #[cfg(feature = "events")]
                self.publish(Event::Bounced(PayloadBounced {
                    side,
                    opening: true,
                }));
            }
        }

        match progress {
            Progress::Running(offset) => {
                let panning = tr.from_pan;
                self.set_group_offset(o, offset, panning);
                self.group_mut(o).transition = Some(tr);
            }
            Progress::Finished(offset) => {
                let panning = tr.from_pan;
                self.set_group_offset(o, offset, panning);
                let side = tr.side;
                let completion = tr.take_completion();
                let silent = tr.silent;
                if tr.from_pan {
                    self.pan = None;
                }
                match tr.kind {
                    TransitionKind::Open => {
                        if silent {
                            self.settle(o, Some(side), Stage::Open);
                        } else {
                            self.finish_open(side, true);
                        }
                    }
                    TransitionKind::Resize => {
                        self.settle(o, Some(side), Stage::Open);
                    }
                    TransitionKind::Close => {
                        if silent {
                            self.settle(o, None, Stage::Closed);
                        } else {
                            self.finish_close(side, true);
                        }
                    }
                    TransitionKind::OpenBouncing { .. } => {
                        self.notify(|d| d.did_bounce(side, BouncePhase::Closing));
                        #[cfg(feature = "events")]
                        self.publish(Event::Bounced(PayloadBounced {
                            side,
                            opening: false,
                        }));
                        self.finish_open(side, true);
                    }
                    TransitionKind::CloseBouncing { .. } => {
                        self.notify(|d| d.did_bounce(side, BouncePhase::Closing));
                        #[cfg(feature = "events")]
                        self.publish(Event::Bounced(PayloadBounced {
                            side,
                            opening: false,
                        }));
                        self.finish_close(side, true);
                    }
                    TransitionKind::PreviewBounce { .. } => {
                        self.settle(o, None, Stage::Closed);
                        if !silent {
                            self.notify(|d| d.did_preview_bounce(side, true));
                            #[cfg(feature = "events")]
                            self.publish(Event::PreviewBounced(PayloadPreviewBounced { side }));
                        }
                    }
                }
                if let Some(c) = completion {
                    c(true);
                }
                if let Some(c) = self.resize_completions.get_mut(side).take() {
                    c(true);
                }
                if self.max_size_pending == Some(side) {
                    self.max_size_pending = None;
                    if let Some(c) = self.max_size_completion.take() {
                        c(true);
                    }
                }
                if let Some(q) = self.group_mut(o).after_settle.take() {
                    self.run_queued(q);
                }
                self.apply_pending();
            }
        }
    }

    fn run_queued(&mut self, q: QueuedOp) {
        if !self.openable(q.side) {
            Self::fail(q.completion);
            return;
        }
        if q.bouncing {
            self.start_open_bouncing(q.side, q.hook, q.completion);
        } else {
            self.start_open(q.side, q.animated, q.duration, q.completion, false);
        }
    }

    // ---- transition plumbing ---------------------------------------------

    fn start_open(
        &mut self,
        side: Side,
        animated: bool,
        duration: Option<f32>,
        completion: Option<Completion>,
        from_pan: bool,
    ) {
        self.notify(|d| d.will_open(side, animated));
        let o = side.orientation();
        let size = self.effective_size(side);
        self.front = Some(o);
        {
            let g = self.group_mut(o);
            g.active = Some(side);
            g.stage = Stage::Opening;
        }
        if animated {
            let from = self.group(o).offset;
            let d = duration
                .unwrap_or_else(|| {
                    self.snap_duration(self.animation.open_slide_duration, size - from, side)
                })
                .max(MIN_SNAP_DURATION);
            let mut tr = Transition::new(side, TransitionKind::Open, from, size, d)
                .with_completion(completion);
            if from_pan {
                tr = tr.from_pan();
            }
            self.begin_transition(o, tr);
        } else {
            self.set_group_offset(o, size, false);
            self.finish_open(side, false);
            Self::ok(completion);
        }
    }

    fn finish_open(&mut self, side: Side, animated: bool) {
        self.settle(side.orientation(), Some(side), Stage::Open);
        self.notify(|d| d.did_open(side, animated));
        #[cfg(feature = "events")]
        self.publish(Event::SideOpened(PayloadSideOpened { side, animated }));
    }

    fn finish_close(&mut self, side: Side, animated: bool) {
        self.settle(side.orientation(), None, Stage::Closed);
        self.notify(|d| d.did_close(side, animated));
        self.notify(|d| d.did_show_center_view(side, animated));
        #[cfg(feature = "events")]
        {
            self.publish(Event::SideClosed(PayloadSideClosed { side, animated }));
            self.publish(Event::CenterShown(PayloadCenterShown { from: side }));
        }
    }

    fn settle(&mut self, o: Orientation, active: Option<Side>, stage: Stage) {
        let g = self.group_mut(o);
        g.active = active;
        g.stage = stage;
    }

    /// Installs a transition, superseding any in-flight one. The superseded
    /// transition's completion fires with failure, exactly once.
    fn begin_transition(&mut self, o: Orientation, tr: Transition) {
        self.cancel_transition(o);
        // a programmatic transition taking over a dragged group ends the
        // gesture's ownership of the panning flag
        if !tr.from_pan && self.pan_owns(o) {
            self.pan = None;
        }
        self.group_mut(o).transition = Some(tr);
    }

    fn cancel_transition(&mut self, o: Orientation) {
        if let Some(mut old) = self.group_mut(o).transition.take() {
            if old.from_pan {
                self.pan = None;
            }
            if let Some(c) = old.take_completion() {
                c(false);
            }
        }
    }

    /// Single funnel for offset mutation; notifies on actual change only.
    fn set_group_offset(&mut self, o: Orientation, offset: f32, panning: bool) {
        if self.group(o).offset == offset {
            return;
        }
        self.group_mut(o).offset = offset;
        self.notify(|d| d.did_change_offset(offset, o, panning));
        #[cfg(feature = "events")]
        self.publish(Event::OffsetChanged(PayloadOffsetChanged {
            offset,
            orientation: o,
            panning,
        }));
    }

    // ---- delegate plumbing ------------------------------------------------

    fn notify<F: FnMut(&mut dyn DeckDelegate)>(&mut self, mut f: F) {
        if let Some(d) = self.delegate.as_deref_mut() {
            f(d);
        }
        if self.interaction.delegate_mode == DelegateMode::DelegateAndPanels {
            for (_, d) in self.panel_delegates.iter_mut() {
                if let Some(d) = d.as_deref_mut() {
                    f(d);
                }
            }
        }
    }

    fn allows<F: FnMut(&mut dyn DeckDelegate) -> bool>(&mut self, mut f: F) -> bool {
        let mut ok = true;
        if let Some(d) = self.delegate.as_deref_mut() {
            ok &= f(d);
        }
        if self.interaction.delegate_mode == DelegateMode::DelegateAndPanels {
            for (_, d) in self.panel_delegates.iter_mut() {
                if let Some(d) = d.as_deref_mut() {
                    ok &= f(d);
                }
            }
        }
        ok
    }

    fn override_ledge(&mut self, side: Side, ledge: f32) -> f32 {
        match self.delegate.as_deref_mut() {
            Some(d) => d.changes_ledge(side, ledge),
            None => ledge,
        }
    }

    /// Invokes the delegate shadow hook; the view calls this with the
    /// sliding panel's bounds.
    pub(crate) fn apply_shadow_hook(&mut self, painter: &Painter, bounds: Rect) {
        if let Some(d) = self.delegate.as_deref_mut() {
            d.apply_shadow(painter, bounds);
        }
    }

    #[cfg(feature = "events")]
    fn publish(&self, event: Event) {
        if let Some(sink) = &self.sink {
            sink.send(event);
        }
    }

    fn ok(completion: Option<Completion>) {
        if let Some(c) = completion {
            c(true);
        }
    }

    fn fail(completion: Option<Completion>) -> bool {
        if let Some(c) = completion {
            c(false);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const DT: f32 = 0.016;

    #[derive(Clone, Default)]
    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
        refuse_open: Rc<Cell<bool>>,
        refuse_close: Rc<Cell<bool>>,
    }

    impl Recorder {
        fn push(&self, entry: String) {
            self.log.borrow_mut().push(entry);
        }

        fn count(&self, tag: &str) -> usize {
            self.log.borrow().iter().filter(|e| *e == tag).count()
        }

        fn position(&self, tag: &str) -> Option<usize> {
            self.log.borrow().iter().position(|e| e == tag)
        }
    }

    impl DeckDelegate for Recorder {
        fn should_open(&mut self, side: Side) -> bool {
            self.push(format!("should_open:{side}"));
            !self.refuse_open.get()
        }
        fn will_open(&mut self, side: Side, _animated: bool) {
            self.push(format!("will_open:{side}"));
        }
        fn did_open(&mut self, side: Side, _animated: bool) {
            self.push(format!("did_open:{side}"));
        }
        fn should_close(&mut self, side: Side, _animated: bool) -> bool {
            self.push(format!("should_close:{side}"));
            !self.refuse_close.get()
        }
        fn will_close(&mut self, side: Side, _animated: bool) {
            self.push(format!("will_close:{side}"));
        }
        fn did_close(&mut self, side: Side, _animated: bool) {
            self.push(format!("did_close:{side}"));
        }
        fn did_show_center_view(&mut self, from: Side, _animated: bool) {
            self.push(format!("did_show_center:{from}"));
        }
        fn should_preview_bounce(&mut self, side: Side) -> bool {
            self.push(format!("should_preview:{side}"));
            true
        }
        fn will_preview_bounce(&mut self, side: Side, _animated: bool) {
            self.push(format!("will_preview:{side}"));
        }
        fn did_preview_bounce(&mut self, side: Side, _animated: bool) {
            self.push(format!("did_preview:{side}"));
        }
        fn did_bounce(&mut self, side: Side, phase: BouncePhase) {
            self.push(format!("did_bounce:{side}:{phase:?}"));
        }
    }

    fn deck() -> (Deck, Recorder) {
        let recorder = Recorder::default();
        let mut deck = Deck::new()
            .with_slot(Side::Left, PanelSlot::sized(240.0))
            .with_slot(Side::Right, PanelSlot::sized(260.0))
            .with_slot(Side::Top, PanelSlot::sized(180.0));
        deck.container_resized(Vec2::new(320.0, 480.0));
        deck.set_delegate(recorder.clone());
        (deck, recorder)
    }

    fn settle(deck: &mut Deck) {
        for _ in 0..10_000 {
            if !deck.is_animating() {
                return;
            }
            deck.step(DT);
        }
        panic!("deck did not settle");
    }

    fn completion_probe() -> (Rc<RefCell<Vec<bool>>>, impl FnOnce(bool)) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let c = calls.clone();
        (calls, move |ok| c.borrow_mut().push(ok))
    }

    #[test]
    fn open_then_close_returns_to_rest() {
        for side in [Side::Left, Side::Right, Side::Top] {
            let (mut deck, _rec) = deck();
            assert!(deck.open(side));
            settle(&mut deck);
            assert!(deck.is_side_open(side));
            assert_eq!(deck.offset(), deck.effective_size(side));

            assert!(deck.close(side));
            settle(&mut deck);
            assert_eq!(deck.offset(), 0.0);
            assert_eq!(deck.active_side(), None);
            assert!(deck.is_side_closed(side));
        }
    }

    #[test]
    fn open_is_idempotent_without_renotifying() {
        let (mut deck, rec) = deck();
        assert!(deck.open(Side::Left));
        settle(&mut deck);
        assert_eq!(rec.count("will_open:left"), 1);
        assert_eq!(rec.count("did_open:left"), 1);

        let (calls, c) = completion_probe();
        assert!(deck.open_with(Side::Left, true, c));
        settle(&mut deck);
        assert_eq!(rec.count("will_open:left"), 1);
        assert_eq!(rec.count("did_open:left"), 1);
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn opening_unattached_or_disabled_side_fails() {
        let (mut deck, rec) = deck();
        assert!(!deck.open(Side::Bottom));

        deck.set_side_enabled(Side::Left, false);
        let (calls, c) = completion_probe();
        assert!(!deck.open_with(Side::Left, true, c));
        assert_eq!(*calls.borrow(), vec![false]);
        assert_eq!(rec.count("will_open:left"), 0);
        assert_eq!(deck.active_side(), None);
    }

    #[test]
    fn zero_size_side_is_disabled() {
        let (mut deck, _rec) = deck();
        deck.set_slot(Side::Left, Some(PanelSlot::sized(0.0)));
        assert!(!deck.open(Side::Left));
    }

    #[test]
    fn should_open_veto_aborts_without_state_change() {
        let (mut deck, rec) = deck();
        rec.refuse_open.set(true);
        let (calls, c) = completion_probe();
        assert!(!deck.open_with(Side::Left, true, c));
        assert_eq!(*calls.borrow(), vec![false]);
        assert_eq!(rec.count("will_open:left"), 0);
        assert_eq!(deck.offset(), 0.0);
        assert!(!deck.is_animating());
    }

    #[test]
    fn same_group_open_closes_other_side_first() {
        let (mut deck, rec) = deck();
        deck.open(Side::Left);
        settle(&mut deck);

        assert!(deck.open(Side::Right));
        for _ in 0..10_000 {
            assert!(
                !(deck.is_side_open(Side::Left) && deck.is_side_open(Side::Right)),
                "both horizontal sides report open"
            );
            if !deck.is_animating() {
                break;
            }
            deck.step(DT);
        }
        assert!(deck.is_side_open(Side::Right));
        assert!(deck.is_side_closed(Side::Left));
        let closed = rec.position("did_close:left").unwrap();
        let opened = rec.position("will_open:right").unwrap();
        assert!(closed < opened, "left must report closed before right opens");
    }

    #[test]
    fn cross_group_open_respects_single_open_invariant() {
        let (mut deck, _rec) = deck();
        deck.open(Side::Left);
        settle(&mut deck);

        assert!(deck.open(Side::Top));
        for _ in 0..10_000 {
            let open_count = Side::ALL.iter().filter(|&&s| deck.is_side_open(s)).count();
            assert!(open_count <= 1, "more than one side reports open");
            if !deck.is_animating() {
                break;
            }
            deck.step(DT);
        }
        assert!(deck.is_side_open(Side::Top));
        assert!(deck.is_side_closed(Side::Left));
        assert_eq!(deck.group_offset(Orientation::Horizontal), 0.0);
    }

    #[test]
    fn toggle_mid_opening_reverses_without_opening() {
        let (mut deck, rec) = deck();
        let (calls, c) = completion_probe();
        assert!(deck.open_with(Side::Right, true, c));
        while deck.offset() < 130.0 {
            deck.step(DT);
        }

        assert!(deck.toggle(Side::Right));
        settle(&mut deck);
        assert_eq!(deck.offset(), 0.0);
        assert!(deck.is_side_closed(Side::Right));
        assert_eq!(rec.count("did_close:right"), 1);
        assert_eq!(rec.count("did_open:right"), 0);
        // the interrupted open still reported failure, exactly once
        assert_eq!(*calls.borrow(), vec![false]);
    }

    #[test]
    fn preview_bounce_always_ends_closed() {
        for (distance, duration, bounces, damping) in [
            (40.0, 0.4, 1.0, 0.2),
            (120.0, 1.2, 4.0, 0.5),
            (240.0, 2.0, 7.0, 0.9),
        ] {
            let (mut deck, rec) = deck();
            let spec = BounceSpec {
                distance: Some(distance),
                duration: Some(duration),
                bounces: Some(bounces),
                damping: Some(damping),
                call_delegates: true,
            };
            let (calls, c) = completion_probe();
            assert!(deck.preview_bounce_with(Side::Left, &spec, c));
            assert_eq!(deck.stage(Side::Left), Stage::Bouncing);
            settle(&mut deck);

            assert!(deck.offset().abs() < 1e-3);
            assert_eq!(deck.active_side(), None);
            assert!(deck.is_side_closed(Side::Left));
            assert_eq!(*calls.borrow(), vec![true]);
            assert_eq!(rec.count("should_preview:left"), 1);
            assert_eq!(rec.count("will_preview:left"), 1);
            assert_eq!(rec.count("did_preview:left"), 1);
            assert_eq!(rec.count("did_open:left"), 0);
            assert_eq!(rec.count("did_close:left"), 0);
        }
    }

    #[test]
    fn preview_bounce_is_rejected_while_side_active() {
        let (mut deck, _rec) = deck();
        deck.open(Side::Left);
        settle(&mut deck);
        assert!(!deck.preview_bounce(Side::Left));
        assert!(!deck.preview_bounce(Side::Right));
    }

    #[test]
    fn pan_release_past_threshold_snaps_open() {
        let (mut deck, rec) = deck();
        assert!(deck.pan_began(Pos2::new(160.0, 200.0)));
        deck.pan_changed(Vec2::new(150.0, 0.0));
        assert_eq!(deck.offset(), 150.0);
        assert!(deck.is_panning());

        deck.pan_ended(Vec2::ZERO);
        assert!(deck.is_panning(), "panning holds until the snap settles");
        settle(&mut deck);

        assert!(!deck.is_panning());
        assert!(deck.is_side_open(Side::Left));
        assert_eq!(deck.offset(), 240.0);
        assert_eq!(rec.count("did_open:left"), 1);
    }

    #[test]
    fn pan_release_under_threshold_snaps_back_silently() {
        let (mut deck, rec) = deck();
        deck.pan_began(Pos2::new(160.0, 200.0));
        deck.pan_changed(Vec2::new(100.0, 0.0));
        deck.pan_ended(Vec2::ZERO);
        settle(&mut deck);

        assert_eq!(deck.offset(), 0.0);
        assert_eq!(deck.active_side(), None);
        assert!(!deck.is_panning());
        assert_eq!(rec.count("did_open:left"), 0);
        assert_eq!(rec.count("did_close:left"), 0);
    }

    #[test]
    fn pan_fling_opens_regardless_of_position() {
        let (mut deck, _rec) = deck();
        deck.pan_began(Pos2::new(160.0, 200.0));
        deck.pan_changed(Vec2::new(60.0, 0.0));
        deck.pan_ended(Vec2::new(FLING_VELOCITY + 100.0, 0.0));
        settle(&mut deck);
        assert!(deck.is_side_open(Side::Left));
    }

    #[test]
    fn pan_fling_towards_close_wins_over_position() {
        let (mut deck, _rec) = deck();
        deck.open(Side::Left);
        settle(&mut deck);

        deck.pan_began(Pos2::new(300.0, 200.0));
        deck.pan_changed(Vec2::new(-40.0, 0.0));
        deck.pan_ended(Vec2::new(-(FLING_VELOCITY + 100.0), 0.0));
        settle(&mut deck);
        assert!(deck.is_side_closed(Side::Left));
        assert_eq!(deck.offset(), 0.0);
    }

    #[test]
    fn elastic_pan_is_bounded() {
        let (mut deck, _rec) = deck();
        deck.pan_began(Pos2::new(160.0, 200.0));
        deck.pan_changed(Vec2::new(100_000.0, 0.0));
        let offset = deck.offset();
        assert!(offset > 240.0);
        assert!(offset < 240.0 * (1.0 + crate::offset::ELASTIC_SLACK_RATIO));
        deck.pan_cancelled();
        settle(&mut deck);
        assert_eq!(deck.offset(), 0.0);
    }

    #[test]
    fn inelastic_pan_clamps_hard() {
        let (mut deck, _rec) = deck();
        deck.interaction_mut().elastic = false;
        deck.pan_began(Pos2::new(160.0, 200.0));
        deck.pan_changed(Vec2::new(100_000.0, 0.0));
        assert_eq!(deck.offset(), 240.0);
    }

    #[test]
    fn pan_on_disabled_panning_mode_is_ignored() {
        let (mut deck, _rec) = deck();
        deck.interaction_mut().panning_mode = PanningMode::Disabled;
        assert!(!deck.pan_began(Pos2::new(160.0, 200.0)));
        deck.pan_changed(Vec2::new(100.0, 0.0));
        assert_eq!(deck.offset(), 0.0);
    }

    #[test]
    fn pan_grabs_an_in_flight_animation() {
        let (mut deck, _rec) = deck();
        let (calls, c) = completion_probe();
        deck.open_with(Side::Left, true, c);
        while deck.offset() < 100.0 {
            deck.step(DT);
        }

        assert!(deck.pan_began(Pos2::new(160.0, 200.0)));
        // the grabbed open reports failure
        assert_eq!(*calls.borrow(), vec![false]);
        assert!(!deck.is_animating());

        deck.pan_changed(Vec2::new(120.0, 0.0));
        deck.pan_ended(Vec2::ZERO);
        settle(&mut deck);
        assert!(deck.is_side_open(Side::Left));
    }

    #[test]
    fn pan_direction_picks_the_revealed_side() {
        let (mut deck, _rec) = deck();
        deck.pan_began(Pos2::new(160.0, 200.0));
        deck.pan_changed(Vec2::new(-80.0, 0.0));
        assert_eq!(deck.active_side(), Some(Side::Right));
        assert_eq!(deck.offset(), 80.0);
        deck.pan_ended(Vec2::ZERO);
        settle(&mut deck);

        deck.pan_began(Pos2::new(160.0, 200.0));
        deck.pan_changed(Vec2::new(0.0, 90.0));
        assert_eq!(deck.active_side(), Some(Side::Top));
        assert_eq!(deck.offset(), 90.0);
    }

    #[test]
    fn pan_towards_missing_side_stays_pinned() {
        let (mut deck, _rec) = deck();
        // no bottom slot: dragging up reveals nothing
        deck.pan_began(Pos2::new(160.0, 200.0));
        deck.pan_changed(Vec2::new(0.0, -120.0));
        assert_eq!(deck.offset(), 0.0);
        assert_eq!(deck.active_side(), None);
    }

    #[test]
    fn drag_scenario_left_open() {
        // leftSize=240: drag to 150 (> 50% of 240 is 120) and release
        let (mut deck, rec) = deck();
        deck.pan_began(Pos2::new(10.0, 200.0));
        deck.pan_changed(Vec2::new(200.0, 0.0));
        assert!(deck.offset() <= 240.0 * (1.0 + crate::offset::ELASTIC_SLACK_RATIO));
        deck.pan_changed(Vec2::new(-50.0, 0.0));
        deck.pan_ended(Vec2::ZERO);
        settle(&mut deck);
        assert_eq!(deck.offset(), 240.0);
        assert_eq!(rec.count("did_open:left"), 1);
    }

    #[test]
    fn completion_of_superseded_close_fires_false_once() {
        let (mut deck, _rec) = deck();
        deck.open(Side::Left);
        settle(&mut deck);

        let (close_calls, c) = completion_probe();
        deck.close_with(Side::Left, true, c);
        deck.step(DT);
        // conflicting request mid-close: reopen
        let (open_calls, oc) = completion_probe();
        deck.open_with(Side::Left, true, oc);
        settle(&mut deck);

        assert_eq!(*close_calls.borrow(), vec![false]);
        assert_eq!(*open_calls.borrow(), vec![true]);
        assert!(deck.is_side_open(Side::Left));
    }

    #[test]
    fn instant_operations_skip_animation() {
        let (mut deck, rec) = deck();
        let (calls, c) = completion_probe();
        assert!(deck.open_with(Side::Left, false, c));
        assert!(!deck.is_animating());
        assert!(deck.is_side_open(Side::Left));
        assert_eq!(deck.offset(), 240.0);
        assert_eq!(*calls.borrow(), vec![true]);
        assert_eq!(rec.count("did_open:left"), 1);

        let (calls, c) = completion_probe();
        assert!(deck.close_with(Side::Left, false, c));
        assert!(!deck.is_animating());
        assert_eq!(deck.offset(), 0.0);
        assert_eq!(*calls.borrow(), vec![true]);
        assert_eq!(rec.count("did_close:left"), 1);
        assert_eq!(rec.count("did_show_center:left"), 1);
    }

    #[test]
    fn set_size_while_open_relayouts_and_completes_once() {
        let (mut deck, _rec) = deck();
        deck.open(Side::Left);
        settle(&mut deck);
        assert_eq!(deck.offset(), 240.0);

        let (calls, c) = completion_probe();
        assert!(deck.set_size(Side::Left, 300.0, c));
        assert!(deck.is_animating());
        settle(&mut deck);
        assert_eq!(deck.offset(), 300.0);
        assert!(deck.is_side_open(Side::Left));
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn newer_size_change_supersedes_older_completion() {
        let (mut deck, _rec) = deck();
        deck.open(Side::Left);
        settle(&mut deck);

        let (first, c1) = completion_probe();
        deck.set_size(Side::Left, 300.0, c1);
        let (second, c2) = completion_probe();
        deck.set_size(Side::Left, 280.0, c2);
        settle(&mut deck);

        assert_eq!(*first.borrow(), vec![false]);
        assert_eq!(*second.borrow(), vec![true]);
        assert_eq!(deck.offset(), 280.0);
    }

    #[test]
    fn set_size_on_closed_side_completes_immediately() {
        let (mut deck, _rec) = deck();
        let (calls, c) = completion_probe();
        assert!(deck.set_size(Side::Left, 200.0, c));
        assert_eq!(*calls.borrow(), vec![true]);
        assert_eq!(deck.slot(Side::Left).unwrap().size(), 200.0);
        assert_eq!(deck.slot(Side::Left).unwrap().ledge(), 120.0);
    }

    #[test]
    fn max_size_caps_the_open_extent() {
        let (mut deck, _rec) = deck();
        deck.open(Side::Left);
        settle(&mut deck);

        let (calls, c) = completion_probe();
        deck.set_max_size(200.0, c);
        settle(&mut deck);
        assert_eq!(deck.offset(), 200.0);
        assert_eq!(*calls.borrow(), vec![true]);

        deck.close(Side::Left);
        settle(&mut deck);
        deck.open(Side::Left);
        settle(&mut deck);
        assert_eq!(deck.offset(), 200.0);
    }

    #[test]
    fn rotation_preserves_ledge_in_ledge_mode() {
        let (mut deck, _rec) = deck();
        assert_eq!(deck.slot(Side::Left).unwrap().ledge(), 80.0);
        deck.open(Side::Left);
        settle(&mut deck);

        deck.container_resized(Vec2::new(480.0, 320.0));
        assert_eq!(deck.slot(Side::Left).unwrap().ledge(), 80.0);
        assert_eq!(deck.slot(Side::Left).unwrap().size(), 400.0);
        assert_eq!(deck.offset(), 400.0);
    }

    #[test]
    fn rotation_preserves_size_in_view_mode() {
        let (mut deck, _rec) = deck();
        deck.interaction_mut().size_mode = SizeMode::View;
        deck.container_resized(Vec2::new(480.0, 320.0));
        assert_eq!(deck.slot(Side::Left).unwrap().size(), 240.0);
        assert_eq!(deck.slot(Side::Left).unwrap().ledge(), 240.0);
    }

    #[test]
    fn changes_ledge_override_wins() {
        struct LedgeFix;
        impl DeckDelegate for LedgeFix {
            fn changes_ledge(&mut self, _side: Side, _ledge: f32) -> f32 {
                50.0
            }
        }
        let mut deck = Deck::new().with_slot(Side::Left, PanelSlot::sized(240.0));
        deck.set_delegate(LedgeFix);
        deck.container_resized(Vec2::new(320.0, 480.0));
        assert_eq!(deck.slot(Side::Left).unwrap().ledge(), 50.0);
        assert_eq!(deck.slot(Side::Left).unwrap().size(), 270.0);
    }

    #[test]
    fn panel_delegates_are_notified_in_fan_out_mode() {
        let (mut deck, rec) = deck();
        let panel = Recorder::default();
        deck.set_panel_delegate(Side::Left, panel.clone());
        deck.interaction_mut().delegate_mode = DelegateMode::DelegateAndPanels;

        deck.open(Side::Left);
        settle(&mut deck);
        assert_eq!(rec.count("did_open:left"), 1);
        assert_eq!(panel.count("did_open:left"), 1);
    }

    #[test]
    fn panel_delegate_veto_blocks_open_in_fan_out_mode() {
        let (mut deck, _rec) = deck();
        let panel = Recorder::default();
        panel.refuse_open.set(true);
        deck.set_panel_delegate(Side::Left, panel.clone());
        deck.interaction_mut().delegate_mode = DelegateMode::DelegateAndPanels;

        assert!(!deck.open(Side::Left));
        assert!(deck.is_side_closed(Side::Left));
    }

    #[test]
    fn push_over_center_requires_integration_and_open_right() {
        let (mut deck, rec) = deck();
        assert!(!deck.can_push_over_center());

        deck.interaction_mut().navigation_behavior = NavigationBehavior::Integrated;
        assert!(!deck.can_push_over_center());

        deck.open(Side::Right);
        settle(&mut deck);
        assert!(deck.can_push_over_center());

        assert!(deck.push_over_center());
        // no slide-back animation: the right side is closed at once
        assert!(!deck.is_animating());
        assert!(deck.is_side_closed(Side::Right));
        assert_eq!(rec.count("did_close:right"), 1);
    }

    #[test]
    fn open_bouncing_peaks_then_settles_open() {
        let (mut deck, rec) = deck();
        let peaked = Rc::new(Cell::new(0));
        let p = peaked.clone();
        assert!(deck.open_bouncing(Side::Left, move || p.set(p.get() + 1)));
        settle(&mut deck);

        assert_eq!(peaked.get(), 1);
        assert!(deck.is_side_open(Side::Left));
        assert_eq!(deck.offset(), 240.0);
        assert_eq!(rec.count("did_bounce:left:Opening"), 1);
        assert_eq!(rec.count("did_bounce:left:Closing"), 1);
        assert_eq!(rec.count("did_open:left"), 1);
    }

    #[test]
    fn close_bouncing_settles_closed() {
        let (mut deck, rec) = deck();
        deck.open(Side::Left);
        settle(&mut deck);

        let peaked = Rc::new(Cell::new(0));
        let p = peaked.clone();
        assert!(deck.close_bouncing(Side::Left, move || p.set(p.get() + 1)));
        settle(&mut deck);

        assert_eq!(peaked.get(), 1);
        assert!(deck.is_side_closed(Side::Left));
        assert_eq!(deck.offset(), 0.0);
        assert_eq!(rec.count("did_close:left"), 1);
        assert_eq!(rec.count("did_show_center:left"), 1);
    }

    #[test]
    fn close_open_view_closes_whatever_is_open() {
        let (mut deck, _rec) = deck();
        assert!(deck.close_open_view());

        deck.open(Side::Top);
        settle(&mut deck);
        assert!(deck.close_open_view());
        settle(&mut deck);
        assert_eq!(deck.active_side(), None);
        assert_eq!(deck.offset(), 0.0);
    }

    #[test]
    fn should_close_veto_keeps_side_open() {
        let (mut deck, rec) = deck();
        deck.open(Side::Left);
        settle(&mut deck);

        rec.refuse_close.set(true);
        let (calls, c) = completion_probe();
        assert!(!deck.close_with(Side::Left, true, c));
        assert_eq!(*calls.borrow(), vec![false]);
        assert!(deck.is_side_open(Side::Left));
        assert_eq!(deck.offset(), 240.0);
    }

    #[test]
    fn slot_swap_mid_transition_is_deferred() {
        let (mut deck, _rec) = deck();
        deck.open(Side::Left);
        deck.step(DT);
        deck.set_slot(Side::Left, Some(PanelSlot::sized(100.0)));
        // still the old slot while the open is in flight
        assert_eq!(deck.slot(Side::Left).unwrap().size(), 240.0);
        settle(&mut deck);
        assert_eq!(deck.slot(Side::Left).unwrap().size(), 100.0);
    }

    #[test]
    fn disabled_deck_rejects_everything() {
        let (mut deck, _rec) = deck();
        deck.interaction_mut().enabled = false;
        assert!(!deck.open(Side::Left));
        assert!(!deck.pan_began(Pos2::new(10.0, 10.0)));
        assert!(!deck.preview_bounce(Side::Left));
    }
}
