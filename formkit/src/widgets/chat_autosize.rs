//! Auto-growing chat textarea.
//!
//! The textarea's height follows its content up to its `max-height`. A
//! container (class `chat-m`) switches to the multi-line layout with
//! `is-multi` once the text wraps or contains a newline, and only switches
//! back when the text is cleared.

use formdom::{Document, Event, Selector};
use unicode_width::UnicodeWidthStr;

use crate::config::ChatConfig;
use crate::context::Context;
use crate::widget::{EventResult, Widget};

const MAX_HEIGHT_ATTR: &str = "style.max-height";
const LINE_HEIGHT_ATTR: &str = "style.line-height";
const HEIGHT_FRAME: u64 = 0;

/// Measures how tall text renders in a box of a given width.
pub trait TextMeasure {
    /// Full content height (including vertical padding) of `text` laid out
    /// in `width` pixels.
    fn content_height(&self, text: &str, width: f32) -> f32;
}

/// Fixed-advance text measurement: every display column is `char_width`
/// wide and lines wrap at the box width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub char_width: f32,
    pub line_height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 22.0,
            padding_x: 0.0,
            padding_y: 0.0,
        }
    }
}

impl MonospaceMeasure {
    /// Visual rows `text` occupies; empty text still takes one row.
    pub fn rows(&self, text: &str, width: f32) -> usize {
        let columns = ((width - self.padding_x) / self.char_width).floor().max(1.0) as usize;
        text.split('\n')
            .map(|line| line.width().div_ceil(columns).max(1))
            .sum()
    }
}

impl TextMeasure for MonospaceMeasure {
    fn content_height(&self, text: &str, width: f32) -> f32 {
        self.rows(text, width) as f32 * self.line_height + self.padding_y
    }
}

pub struct ChatAutosize {
    config: ChatConfig,
    measure: Box<dyn TextMeasure>,
    textarea: Option<String>,
    container: Option<String>,
    multi_locked: bool,
}

impl ChatAutosize {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            measure: Box::new(MonospaceMeasure::default()),
            textarea: None,
            container: None,
            multi_locked: false,
        }
    }

    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    /// Replace any queued update with one on the next frame.
    fn schedule(&self, cx: &mut Context<'_>) {
        cx.cancel_frame(HEIGHT_FRAME);
        cx.request_frame(HEIGHT_FRAME);
    }

    fn needed_height(&self, doc: &Document, textarea: &str) -> Option<f32> {
        let width = doc.rect(textarea)?.width as f32;
        let value = &doc.get(textarea)?.value;
        let text = if value.is_empty() { " " } else { value.as_str() };
        Some(self.measure.content_height(text, width))
    }

    fn max_height(&self, doc: &Document, textarea: &str) -> f32 {
        read_px(doc, textarea, MAX_HEIGHT_ATTR).unwrap_or(self.config.max_height_fallback)
    }

    fn update_height(&mut self, cx: &mut Context<'_>) {
        let Some(textarea) = self.textarea.clone() else {
            return;
        };
        let Some(mut needed) = self.needed_height(cx.doc, &textarea) else {
            log::trace!("[chat] textarea not measured yet");
            return;
        };
        let mut max = self.max_height(cx.doc, &textarea);

        if let Some(container) = self.container.clone() {
            let line_height = read_px(cx.doc, &textarea, LINE_HEIGHT_ATTR)
                .unwrap_or(self.config.line_height_fallback);
            let value = cx
                .doc
                .get(&textarea)
                .map(|t| t.value.clone())
                .unwrap_or_default();
            let has_newline = value.contains('\n');
            let visually_multi = needed > line_height * self.config.multi_line_factor;

            if !self.multi_locked && (has_newline || visually_multi) {
                self.multi_locked = true;
            }
            if self.multi_locked && value.trim().is_empty() {
                self.multi_locked = false;
            }

            let was_multi = cx
                .doc
                .get(&container)
                .map(|c| c.has_class("is-multi"))
                .unwrap_or(false);
            if let Some(el) = cx.doc.get_mut(&container) {
                el.toggle_class("is-multi", self.multi_locked);
            }
            if was_multi != self.multi_locked {
                log::debug!("[chat] multi-line layout {}", self.multi_locked);
                // The layout switch can change the box; measure again.
                needed = self.needed_height(cx.doc, &textarea).unwrap_or(needed);
                max = self.max_height(cx.doc, &textarea);
            }
        }

        let height = needed.min(max).round() as i32;
        if let Some(el) = cx.doc.get_mut(&textarea) {
            el.height = Some(height);
        }
    }
}

impl Default for ChatAutosize {
    fn default() -> Self {
        Self::new(ChatConfig::default())
    }
}

/// Parse a `px` length attribute; `none` and garbage read as absent.
fn read_px(doc: &Document, id: &str, attr: &str) -> Option<f32> {
    let raw = doc.get(id)?.get_attr(attr)?;
    let raw = raw.trim();
    raw.strip_suffix("px").unwrap_or(raw).trim().parse().ok()
}

impl Widget for ChatAutosize {
    fn name(&self) -> &'static str {
        "chat-autosize"
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        if !cx.doc.exists(&self.config.textarea_id) {
            log::debug!("[chat] no textarea {}, staying inert", self.config.textarea_id);
            return;
        }
        self.textarea = Some(self.config.textarea_id.clone());
        self.container = cx
            .doc
            .query(&Selector::class(self.config.container_class.as_str()))
            .map(|c| c.id.clone());
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, event: &Event) -> EventResult {
        let Some(textarea) = self.textarea.as_deref() else {
            return EventResult::Ignored;
        };
        let relevant = match event {
            Event::Input { target } | Event::Cut { target } | Event::Paste { target } => {
                target == textarea
            }
            Event::Resize { .. } | Event::Load => true,
            _ => false,
        };
        if !relevant {
            return EventResult::Ignored;
        }
        self.schedule(cx);
        EventResult::Consumed
    }

    fn on_frame(&mut self, cx: &mut Context<'_>, token: u64) {
        if token == HEIGHT_FRAME {
            self.update_height(cx);
        }
    }
}
