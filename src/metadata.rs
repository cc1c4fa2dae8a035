use egui::{Id, Ui, Vec2};
use serde::{Deserialize, Serialize};

const KEY_PREFIX: &str = "egui_deck_metadata";

/// Per-widget-instance frame state persisted in egui memory.
///
/// The deck model itself lives with the host; this only tracks what the view
/// needs across frames: first-frame detection, the last known container size
/// for rotation/resize handling, and step timing metrics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Whether the instance has not completed a frame yet.
    pub first_frame: bool,
    /// Container size observed last frame; a change triggers re-layout.
    pub container_size: Vec2,
    /// Last measured time to advance the deck transitions (milliseconds).
    pub last_step_time_ms: f32,
    /// Custom key to identify the metadata
    id: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            first_frame: true,
            container_size: Vec2::ZERO,
            last_step_time_ms: 0.0,
            id: String::new(),
        }
    }
}

impl Metadata {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn load(self, ui: &Ui) -> Self {
        ui.data_mut(|data| {
            data.get_persisted::<Metadata>(Id::new(self.key()))
                .unwrap_or(self)
        })
    }

    pub fn save(self, ui: &mut Ui) {
        ui.data_mut(|data| {
            data.insert_persisted(Id::new(self.key()), self);
        });
    }

    /// Key under which this instance stores its metadata in the egui cache.
    fn key(&self) -> String {
        format!("{KEY_PREFIX}_{}", self.id)
    }
}

/// Resets [`Metadata`] state
pub fn reset_metadata(ui: &mut Ui, id: Option<String>) {
    Metadata::new(id).save(ui);
}
