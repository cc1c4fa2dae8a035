use crossbeam::channel::{unbounded, Receiver};
use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::Context;
use egui_deck::events::Event;
use egui_deck::{Deck, DeckView, Pane, PanelSlot, Side};

pub struct EventsApp {
    deck: Deck,
    receiver: Receiver<Event>,
    log: Vec<String>,
}

impl EventsApp {
    fn new(_: &CreationContext<'_>) -> Self {
        let (sender, receiver) = unbounded();
        let mut deck = Deck::new()
            .with_slot(Side::Left, PanelSlot::sized(240.0))
            .with_slot(Side::Right, PanelSlot::sized(240.0));
        deck.set_event_sink(sender);
        Self {
            deck,
            receiver,
            log: Vec::new(),
        }
    }
}

impl App for EventsApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        for event in self.receiver.try_iter() {
            self.log.push(format!("{event:?}"));
        }
        if self.log.len() > 200 {
            let excess = self.log.len() - 200;
            self.log.drain(..excess);
        }

        let log = self.log.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            DeckView::new(&mut self.deck).show(ui, |ui, pane| match pane {
                Pane::Center => {
                    ui.heading("event stream");
                    egui::ScrollArea::vertical().stick_to_bottom(true).show(
                        ui,
                        |ui| {
                            for entry in &log {
                                ui.monospace(entry);
                            }
                        },
                    );
                }
                Pane::Side(side) => {
                    ui.heading(format!("{side} panel"));
                }
            });
        });
    }
}

fn main() {
    run_native(
        "events",
        NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(EventsApp::new(cc)))),
    )
    .unwrap();
}
