//! The widget contract.
//!
//! Widgets do not register one listener per control. The [`Page`](crate::Page)
//! delivers every event to every mounted widget, and each widget classifies
//! the event target itself, the way a document-level delegated listener does.

use formdom::Event;

use crate::context::Context;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event did not concern this widget.
    Ignored,
    /// The widget reacted to the event.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    /// `Consumed` if either side is.
    pub fn or(self, other: EventResult) -> EventResult {
        if self.is_handled() || other.is_handled() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

pub trait Widget {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Called once when the widget is attached to a page.
    fn mount(&mut self, _cx: &mut Context<'_>) {}

    /// Called for every event delivered to the page.
    fn handle_event(&mut self, cx: &mut Context<'_>, event: &Event) -> EventResult;

    /// Called on the animation frame for each token the widget requested.
    fn on_frame(&mut self, _cx: &mut Context<'_>, _token: u64) {}
}
