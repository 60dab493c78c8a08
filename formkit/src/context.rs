//! Handler context passed to widgets.

use formdom::Document;

/// A pending animation-frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameRequest {
    pub widget: usize,
    pub token: u64,
}

/// What a widget may touch while handling an event: the document and the
/// page's animation-frame queue.
pub struct Context<'a> {
    pub doc: &'a mut Document,
    frames: &'a mut Vec<FrameRequest>,
    widget: usize,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        doc: &'a mut Document,
        frames: &'a mut Vec<FrameRequest>,
        widget: usize,
    ) -> Self {
        Self {
            doc,
            frames,
            widget,
        }
    }

    /// Ask for `on_frame(token)` after the host has committed layout.
    pub fn request_frame(&mut self, token: u64) {
        self.frames.push(FrameRequest {
            widget: self.widget,
            token,
        });
    }

    /// Drop this widget's pending frame callbacks carrying `token`.
    pub fn cancel_frame(&mut self, token: u64) {
        let widget = self.widget;
        self.frames
            .retain(|r| !(r.widget == widget && r.token == token));
    }
}
