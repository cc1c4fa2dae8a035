use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::Context;
use egui_deck::{Deck, DeckView, Pane, PanelSlot, Side};

pub struct BasicApp {
    deck: Deck,
}

impl BasicApp {
    fn new(_: &CreationContext<'_>) -> Self {
        Self {
            deck: Deck::new().with_slot(Side::Left, PanelSlot::sized(240.0)),
        }
    }
}

impl App for BasicApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            DeckView::new(&mut self.deck).show(ui, |ui, pane| match pane {
                Pane::Center => {
                    ui.heading("center");
                    ui.label("drag to the right to reveal the left panel");
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
        "basic",
        NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(BasicApp::new(cc)))),
    )
    .unwrap();
}
