mod event;
mod sink;

pub use event::{
    Event, PayloadBounced, PayloadCenterShown, PayloadOffsetChanged, PayloadPanBegan,
    PayloadPanEnded, PayloadPreviewBounced, PayloadSideClosed, PayloadSideOpened,
    PayloadSizeChanged,
};

pub use sink::{EventSink, SinkFn};
