use super::Event;

/// Generic receiver of deck [`Event`]s.
///
/// Implemented for `crossbeam::channel::Sender<Event>`; wrap a closure in
/// [`SinkFn`] or implement the trait on anything custom.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        // a disconnected receiver is the host's business, not ours
        let _ = crossbeam::channel::Sender::send(self, event);
    }
}

/// Adapter turning any `Fn(Event)` closure into an [`EventSink`].
pub struct SinkFn<F>(pub F);

impl<F> EventSink for SinkFn<F>
where
    F: Fn(Event),
{
    fn send(&self, event: Event) {
        (self.0)(event);
    }
}
