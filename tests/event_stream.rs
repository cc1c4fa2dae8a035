#![cfg(feature = "events")]

use egui::Vec2;
use egui_deck::events::{Event, SinkFn};
use egui_deck::{Deck, PanelSlot, Side};

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

#[test]
fn open_close_cycle_is_mirrored_on_the_channel() {
    let (sender, receiver) = crossbeam::channel::unbounded();
    let mut deck = Deck::new().with_slot(Side::Left, PanelSlot::sized(240.0));
    deck.container_resized(Vec2::new(320.0, 480.0));
    deck.set_event_sink(sender);

    deck.open(Side::Left);
    settle(&mut deck);
    deck.close(Side::Left);
    settle(&mut deck);

    let events: Vec<Event> = receiver.try_iter().collect();

    let mut offsets = 0;
    let mut opened = None;
    let mut closed = None;
    let mut center_shown = None;
    for (i, event) in events.iter().enumerate() {
        match event {
            Event::OffsetChanged(p) => {
                assert!(!p.panning, "no gesture ran in this cycle");
                offsets += 1;
            }
            Event::SideOpened(p) => {
                assert_eq!(p.side, Side::Left);
                opened = Some(i);
            }
            Event::SideClosed(p) => {
                assert_eq!(p.side, Side::Left);
                closed = Some(i);
            }
            Event::CenterShown(p) => {
                assert_eq!(p.from, Side::Left);
                center_shown = Some(i);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    assert!(offsets > 2, "animated transitions stream offset changes");
    let opened = opened.expect("SideOpened missing");
    let closed = closed.expect("SideClosed missing");
    let center_shown = center_shown.expect("CenterShown missing");
    assert!(opened < closed);
    assert!(closed < center_shown);
}

#[test]
fn event_sink_closures_work_too() {
    use std::cell::Cell;
    use std::rc::Rc;

    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let mut deck = Deck::new().with_slot(Side::Right, PanelSlot::sized(200.0));
    deck.container_resized(Vec2::new(320.0, 480.0));
    deck.set_event_sink(SinkFn(move |_event| c.set(c.get() + 1)));

    deck.open_with(Side::Right, false, |ok| assert!(ok));
    assert!(count.get() >= 2, "offset change + side opened");
}
