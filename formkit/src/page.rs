//! The event loop host.
//!
//! A [`Page`] owns the [`Document`], the mounted widgets and the
//! animation-frame queue. The embedding host feeds it input events and
//! calls [`Page::animation_frame`] once it has laid out the document and
//! recorded fresh geometry.

use std::collections::VecDeque;

use formdom::{Document, Event, Key, Selector};

use crate::context::{Context, FrameRequest};
use crate::widget::{EventResult, Widget};

/// Upper bound on events delivered for one input event or frame.
const MAX_CASCADE: usize = 64;

pub struct Page {
    doc: Document,
    widgets: Vec<Box<dyn Widget>>,
    frames: Vec<FrameRequest>,
    emitted: Vec<Event>,
}

impl Page {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            widgets: Vec::new(),
            frames: Vec::new(),
            emitted: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Attach a widget and let it initialize against the document.
    pub fn mount(&mut self, widget: impl Widget + 'static) {
        let index = self.widgets.len();
        let mut widget: Box<dyn Widget> = Box::new(widget);
        log::debug!("[page] mount {} as #{}", widget.name(), index);
        let mut cx = Context::new(&mut self.doc, &mut self.frames, index);
        widget.mount(&mut cx);
        self.widgets.push(widget);
    }

    /// Deliver `event` to every widget, then any events the widgets raised.
    pub fn dispatch(&mut self, event: Event) -> EventResult {
        if let Event::Click { target: Some(target) } = &event {
            let target = target.clone();
            self.click_default_action(&target);
        }

        self.cascade(VecDeque::from([event]))
    }

    /// Convenience: a key press aimed at the focused element.
    pub fn press_key(&mut self, key: Key) -> EventResult {
        let target = self.doc.focus.focused().map(str::to_string);
        self.dispatch(Event::key(target, key))
    }

    /// Run every queued frame callback. Callbacks requested while running
    /// wait for the next frame.
    pub fn animation_frame(&mut self) {
        let pending = std::mem::take(&mut self.frames);
        log::trace!("[page] animation frame with {} callbacks", pending.len());
        for request in pending {
            let Some(widget) = self.widgets.get_mut(request.widget) else {
                continue;
            };
            let mut cx = Context::new(&mut self.doc, &mut self.frames, request.widget);
            widget.on_frame(&mut cx, request.token);
        }
        let mut queue = VecDeque::new();
        self.drain_outbox(&mut queue);
        self.cascade(queue);
    }

    /// Whether any frame callback is queued.
    pub fn has_pending_frames(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Events raised by widgets since the last call, in order.
    pub fn take_emitted(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.emitted)
    }

    /// Focus the clicked control and flip an enabled checkbox, before
    /// listeners see the click.
    fn click_default_action(&mut self, target: &str) {
        self.doc.focus(target);
        let checkbox = Selector::input("checkbox");
        if let Some(el) = self.doc.get_mut(target) {
            if el.matches(&checkbox) && !el.disabled {
                el.checked = !el.checked;
                self.doc.emit(Event::change(target));
            }
        }
    }

    /// Deliver queued events, and whatever they raise, up to `MAX_CASCADE`.
    fn cascade(&mut self, mut queue: VecDeque<Event>) -> EventResult {
        let mut result = EventResult::Ignored;
        let mut delivered = 0;

        while let Some(event) = queue.pop_front() {
            delivered += 1;
            if delivered > MAX_CASCADE {
                log::debug!("[page] event cascade limit reached, dropping {:?}", event);
                break;
            }
            result = result.or(self.deliver(&event));
            self.drain_outbox(&mut queue);
        }

        result
    }

    fn deliver(&mut self, event: &Event) -> EventResult {
        let mut result = EventResult::Ignored;
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            let mut cx = Context::new(&mut self.doc, &mut self.frames, index);
            let handled = widget.handle_event(&mut cx, event);
            if handled.is_handled() {
                log::trace!("[page] {} handled {:?}", widget.name(), event);
            }
            result = result.or(handled);
        }
        result
    }

    fn drain_outbox(&mut self, queue: &mut VecDeque<Event>) {
        for event in self.doc.take_emitted() {
            self.emitted.push(event.clone());
            queue.push_back(event);
        }
    }
}
