use egui::{Pos2, Vec2};
use egui_deck::{
    BounceSpec, Deck, DeckDelegate, Orientation, PanelSlot, SettingsAnimation, Side, SizeMode,
    Stage,
};
use std::cell::RefCell;
use std::rc::Rc;

const DT: f32 = 0.016;

fn settle(deck: &mut Deck) {
    for _ in 0..10_000 {
        if !deck.is_animating() {
            return;
        }
        deck.step(DT);
    }
    panic!("deck did not settle");
}

#[derive(Clone, Default)]
struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl DeckDelegate for Journal {
    fn will_open(&mut self, side: Side, _animated: bool) {
        self.0.borrow_mut().push(format!("will_open:{side}"));
    }
    fn did_open(&mut self, side: Side, _animated: bool) {
        self.0.borrow_mut().push(format!("did_open:{side}"));
    }
    fn will_close(&mut self, side: Side, _animated: bool) {
        self.0.borrow_mut().push(format!("will_close:{side}"));
    }
    fn did_close(&mut self, side: Side, _animated: bool) {
        self.0.borrow_mut().push(format!("did_close:{side}"));
    }
    fn did_show_center_view(&mut self, from: Side, _animated: bool) {
        self.0.borrow_mut().push(format!("center:{from}"));
    }
}

/// A whole user session: drag the left panel open, switch to the right via
/// the API, preview-bounce the top, rotate the device, and end closed.
#[test]
fn full_session_keeps_invariants() {
    let journal = Journal::default();
    let mut deck = Deck::new()
        .with_slot(Side::Left, PanelSlot::sized(240.0))
        .with_slot(Side::Right, PanelSlot::sized(260.0))
        .with_slot(Side::Top, PanelSlot::ledged(320.0))
        .with_animation(SettingsAnimation::default());
    deck.container_resized(Vec2::new(320.0, 480.0));
    deck.set_delegate(journal.clone());

    // drag the left side most of the way out and let go
    assert!(deck.pan_began(Pos2::new(8.0, 240.0)));
    deck.pan_changed(Vec2::new(180.0, 0.0));
    assert_eq!(deck.orientation(), Some(Orientation::Horizontal));
    deck.pan_ended(Vec2::ZERO);
    settle(&mut deck);
    assert!(deck.is_side_open(Side::Left));
    assert_eq!(deck.offset(), 240.0);

    // switching sides sequences the close before the open
    assert!(deck.open(Side::Right));
    settle(&mut deck);
    assert!(deck.is_side_open(Side::Right));
    assert!(deck.is_side_closed(Side::Left));

    assert!(deck.close_open_view());
    settle(&mut deck);
    assert_eq!(deck.active_side(), None);

    // a preview never leaves anything open
    assert!(deck.preview_bounce_with(Side::Top, &BounceSpec::default(), |ok| assert!(ok)));
    assert_eq!(deck.stage(Side::Top), Stage::Bouncing);
    settle(&mut deck);
    assert!(deck.is_side_closed(Side::Top));
    assert!(deck.offset().abs() < 1e-3);

    // rotation: ledge-derived top slot keeps its ledge against the new bounds
    deck.interaction_mut().size_mode = SizeMode::Ledge;
    deck.container_resized(Vec2::new(480.0, 320.0));
    let top = deck.slot(Side::Top).unwrap();
    assert_eq!(top.ledge(), 320.0);
    assert_eq!(top.size(), 0.0);

    let entries = journal.entries();
    let opens = entries.iter().filter(|e| e.starts_with("did_open")).count();
    let closes = entries.iter().filter(|e| e.starts_with("did_close")).count();
    assert_eq!(opens, 2, "left and right each opened once: {entries:?}");
    assert_eq!(closes, 2, "left and right each closed once: {entries:?}");
    assert_eq!(
        entries.iter().filter(|e| e.starts_with("center")).count(),
        2
    );
}

/// Every will/did pair brackets exactly one transition even under rapid
/// conflicting requests.
#[test]
fn rapid_conflicting_requests_coalesce() {
    let journal = Journal::default();
    let mut deck = Deck::new().with_slot(Side::Left, PanelSlot::sized(240.0));
    deck.container_resized(Vec2::new(320.0, 480.0));
    deck.set_delegate(journal.clone());

    deck.open(Side::Left);
    deck.step(DT);
    deck.toggle(Side::Left); // reverses to close
    deck.step(DT);
    deck.toggle(Side::Left); // reverses back to open
    settle(&mut deck);

    assert!(deck.is_side_open(Side::Left));
    assert_eq!(deck.offset(), 240.0);

    let entries = journal.entries();
    let did_opens = entries.iter().filter(|e| *e == "did_open:left").count();
    assert_eq!(did_opens, 1, "only the surviving open completes: {entries:?}");
}
