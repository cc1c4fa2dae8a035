use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::Context;
use egui_deck::{
    BounceSpec, CenterInteractivity, Deck, DeckView, Pane, PanelSlot, PanningMode,
    SettingsStyle, Side,
};

pub struct DemoApp {
    deck: Deck,
    style: SettingsStyle,
}

impl DemoApp {
    fn new(_: &CreationContext<'_>) -> Self {
        let deck = Deck::new()
            .with_slot(Side::Left, PanelSlot::sized(240.0))
            .with_slot(Side::Right, PanelSlot::sized(260.0))
            .with_slot(Side::Top, PanelSlot::sized(140.0))
            .with_slot(Side::Bottom, PanelSlot::sized(140.0));
        Self {
            deck,
            style: SettingsStyle::default(),
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("deck");
        ui.label(format!("offset: {:.1}", self.deck.offset()));
        ui.label(format!("open side: {:?}", self.deck.open_side()));
        ui.separator();

        for side in Side::ALL {
            ui.horizontal(|ui| {
                ui.label(side.to_string());
                if ui.button("toggle").clicked() {
                    self.deck.toggle(side);
                }
                if ui.button("bounce").clicked() {
                    self.deck
                        .preview_bounce_with(side, &BounceSpec::default(), |_| {});
                }
            });
        }
        if ui.button("close open view").clicked() {
            self.deck.close_open_view();
        }
        ui.separator();

        let interaction = self.deck.interaction_mut();
        ui.checkbox(&mut interaction.elastic, "elastic overscroll");
        ui.checkbox(&mut interaction.resizes_center_view, "resize center view");
        egui::ComboBox::from_label("panning")
            .selected_text(format!("{:?}", interaction.panning_mode))
            .show_ui(ui, |ui| {
                for mode in [
                    PanningMode::Disabled,
                    PanningMode::FullView,
                    PanningMode::TopBar,
                    PanningMode::TopBarOrOpenCenter,
                ] {
                    ui.selectable_value(&mut interaction.panning_mode, mode, format!("{mode:?}"));
                }
            });
        egui::ComboBox::from_label("center while hidden")
            .selected_text(format!("{:?}", interaction.center_hidden_interactivity))
            .show_ui(ui, |ui| {
                for mode in [
                    CenterInteractivity::Full,
                    CenterInteractivity::Blocked,
                    CenterInteractivity::TapToClose,
                    CenterInteractivity::TapToCloseBouncing,
                ] {
                    ui.selectable_value(
                        &mut interaction.center_hidden_interactivity,
                        mode,
                        format!("{mode:?}"),
                    );
                }
            });

        let animation = self.deck.animation_mut();
        ui.add(
            egui::Slider::new(&mut animation.open_slide_duration, 0.05..=1.0)
                .text("open duration"),
        );
        ui.add(
            egui::Slider::new(&mut animation.close_slide_duration, 0.05..=1.0)
                .text("close duration"),
        );
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        egui::SidePanel::right("controls")
            .default_width(220.0)
            .show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            DeckView::new(&mut self.deck)
                .with_style(&self.style)
                .show(ui, |ui, pane| match pane {
                    Pane::Center => {
                        ui.heading("center panel");
                        ui.label("drag from any edge, or use the controls");
                    }
                    Pane::Side(side) => {
                        ui.heading(format!("{side} panel"));
                        for i in 0..8 {
                            let _ = ui.selectable_label(false, format!("{side} item {i}"));
                        }
                    }
                });
        });
    }
}

fn main() {
    run_native(
        "demo",
        NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
    .unwrap();
}
