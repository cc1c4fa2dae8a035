mod deck;
mod deck_view;
mod delegate;
mod metadata;
mod offset;
mod settings;
mod side;
mod slot;
mod transition;

#[cfg(feature = "events")]
pub mod events;

pub use self::deck::{BounceSpec, Deck, Stage, FLING_VELOCITY, SNAP_OPEN_FRACTION};
pub use self::deck_view::{get_metrics, reset, DeckView, Pane};
pub use self::delegate::{BouncePhase, DeckDelegate, DelegateMode};
pub use self::metadata::{reset_metadata, Metadata};
pub use self::settings::{
    CenterInteractivity, NavigationBehavior, PanningMode, SettingsAnimation, SettingsInteraction,
    SettingsStyle, SizeMode,
};
pub use self::side::{Orientation, Side, SideMap};
pub use self::slot::PanelSlot;
pub use self::transition::{BounceHook, Completion};

#[cfg(feature = "events")]
pub use self::events::{Event, EventSink, SinkFn};
