use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::{Context, Window};
use egui_deck::{Deck, DeckView, Pane, PanelSlot, Side};

pub struct WindowApp {
    deck: Deck,
}

impl WindowApp {
    fn new(_: &CreationContext<'_>) -> Self {
        Self {
            deck: Deck::new()
                .with_slot(Side::Left, PanelSlot::sized(160.0))
                .with_slot(Side::Bottom, PanelSlot::sized(100.0)),
        }
    }
}

impl App for WindowApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        Window::new("windowed deck")
            .default_size([420.0, 320.0])
            .show(ctx, |ui| {
                DeckView::new(&mut self.deck).show(ui, |ui, pane| match pane {
                    Pane::Center => {
                        ui.label("a deck works inside a window too");
                    }
                    Pane::Side(side) => {
                        ui.label(format!("{side}"));
                    }
                });
            });
    }
}

fn main() {
    run_native(
        "window",
        NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(WindowApp::new(cc)))),
    )
    .unwrap();
}
