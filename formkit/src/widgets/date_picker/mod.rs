//! Date picker: single dates and date ranges for plain text fields.
//!
//! A field is a wrapper element (class `date-field` by default) holding a
//! text input and, optionally, an icon trigger. Clicking either opens one
//! shared popup below (or above) the field. The popup is created on first
//! open and reused for every field; at most one session is open at a time.
//!
//! Committed values are written to the input as `YYYY.MM.DD` or
//! `YYYY.MM.DD ~ YYYY.MM.DD`, followed by a bubbling `change` event.
//!
//! Dismissal: pointer-down outside the popup and every date field, Escape
//! (focus returns to the field) and any scroll. Resizing repositions.

mod calendar;
mod date;
mod events;
mod position;
mod render;
mod selection;

pub use calendar::{
    classify, render_month, Day, DayCell, MonthGrid, Navigation, SelectionMark, VisibleMonth,
    WEEKDAY_LABELS,
};
pub use date::{format, format_range, normalize, normalize_zoned, parse, split_range, CalendarDate};
pub use events::{classify_click, Interaction};
pub use position::{place, Placement};
pub use selection::{ClickOutcome, Mode, ModeConfig, Selection, SelectionState};

use formdom::{Event, Key, Selector};

use crate::clock::{Clock, SystemClock};
use crate::config::DatePickerConfig;
use crate::context::Context;
use crate::widget::{EventResult, Widget};
use render::PopupIds;

/// Identity of one open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SessionId(u64);

/// State of the popup while it is open for one field.
#[derive(Debug, Clone)]
struct PopupSession {
    id: SessionId,
    /// The bound text input.
    input: String,
    /// The field wrapper that carries `is-focused`.
    wrapper: String,
    selection: Selection,
    visible: VisibleMonth,
}

pub struct DatePicker {
    config: DatePickerConfig,
    clock: Box<dyn Clock>,
    ids: PopupIds,
    session: Option<PopupSession>,
    next_session: u64,
}

impl DatePicker {
    pub fn new(config: DatePickerConfig) -> Self {
        let ids = PopupIds::new(&config.popup_id);
        Self {
            config,
            clock: Box::new(SystemClock),
            ids,
            session: None,
            next_session: 0,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn popup_id(&self) -> &str {
        &self.ids.popup
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Open the popup for `input`, closing any other session first.
    ///
    /// No-op when `input` is missing or sits outside a field wrapper.
    pub fn open(&mut self, cx: &mut Context<'_>, input: &str) {
        let Some(input_el) = cx.doc.get(input) else {
            return;
        };
        let text = input_el.value.trim().to_string();
        let mode_attr = input_el.get_data(&self.config.mode_key).cloned();
        let Some(wrapper) = cx
            .doc
            .closest(input, &Selector::class(self.config.wrapper_class.as_str()))
            .map(|w| w.id.clone())
        else {
            return;
        };

        self.close(cx);
        if !self.ensure_popup(cx) {
            return;
        }

        let mode = ModeConfig::from_attr(mode_attr.as_deref())
            .resolve(&text, self.config.range_separator);
        let selection = Selection::seed(mode, &text, self.config.range_separator);
        let visible = selection
            .state()
            .start()
            .or_else(|| self.today())
            .map(VisibleMonth::of)
            .unwrap_or_else(|| VisibleMonth::new(CalendarDate::MIN_YEAR, 0));

        self.next_session += 1;
        let id = SessionId(self.next_session);
        log::debug!(
            "[datepicker] open session={} field={} mode={:?} state={:?}",
            id.0,
            input,
            mode,
            selection.state()
        );

        if let Some(el) = cx.doc.get_mut(&wrapper) {
            el.add_class("is-focused");
        }
        if let Some(el) = cx.doc.get_mut(input) {
            el.set_attr("aria-expanded", "true");
        }

        self.session = Some(PopupSession {
            id,
            input: input.to_string(),
            wrapper,
            selection,
            visible,
        });
        self.render(cx);

        if let Some(popup) = cx.doc.get_mut(&self.ids.popup) {
            popup.hidden = false;
        }
        // Geometry is only valid once the host has laid the popup out.
        cx.request_frame(id.0);
    }

    /// Close the open session. Returns false if nothing was open.
    pub fn close(&mut self, cx: &mut Context<'_>) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        log::debug!(
            "[datepicker] close session={} field={}",
            session.id.0,
            session.input
        );

        cx.cancel_frame(session.id.0);
        if let Some(popup) = cx.doc.get_mut(&self.ids.popup) {
            popup.hidden = true;
        }
        if let Some(el) = cx.doc.get_mut(&session.wrapper) {
            el.remove_class("is-focused");
        }
        if let Some(el) = cx.doc.get_mut(&session.input) {
            el.set_attr("aria-expanded", "false");
        }
        true
    }

    /// Apply a classified popup click to the open session.
    pub fn interact(&mut self, cx: &mut Context<'_>, interaction: Interaction) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Some(nav) = interaction.navigation() {
            session.visible = session.visible.navigate(nav);
            self.render(cx);
            return;
        }

        let Interaction::DayCell(selected) = interaction else {
            return;
        };
        match session.selection.on_day_clicked(selected) {
            ClickOutcome::Rerender => self.render(cx),
            ClickOutcome::Commit(text) => {
                let input = session.input.clone();
                log::debug!("[datepicker] commit field={} value={:?}", input, text);
                cx.doc.set_value(&input, text);
                cx.doc.emit(Event::change(input));
                self.close(cx);
            }
        }
    }

    /// Recompute the popup's place from current geometry.
    ///
    /// Silently skipped until both the field and the popup have been measured.
    pub fn reposition(&self, cx: &mut Context<'_>) {
        let Some(session) = &self.session else {
            return;
        };
        let (Some(anchor), Some(popup_rect)) =
            (cx.doc.rect(&session.input), cx.doc.rect(&self.ids.popup))
        else {
            log::trace!("[datepicker] reposition skipped, geometry not measured");
            return;
        };

        let placement = place(
            anchor,
            popup_rect.size(),
            cx.doc.viewport,
            self.config.margin,
        );
        if let Some(popup) = cx.doc.get_mut(&self.ids.popup) {
            popup.top = Some(placement.top);
            popup.left = Some(placement.left);
            popup.toggle_class("is-top", placement.above);
        }
    }

    fn today(&self) -> Option<CalendarDate> {
        CalendarDate::from_naive(self.clock.today())
    }

    /// Create the shared popup on first use. Existing markup with the popup
    /// id is reused only when it holds the title and day grid.
    fn ensure_popup(&self, cx: &mut Context<'_>) -> bool {
        if cx.doc.exists(&self.ids.popup) {
            let complete = cx.doc.contains(&self.ids.popup, &self.ids.title)
                && cx.doc.contains(&self.ids.popup, &self.ids.days);
            if complete {
                return true;
            }
            log::debug!(
                "[datepicker] {} lacks title or day grid, rebuilding",
                self.ids.popup
            );
            cx.doc.remove(&self.ids.popup);
        }
        let root = cx.doc.root_id().to_string();
        match cx.doc.append_child(&root, render::popup_shell(&self.ids)) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("[datepicker] popup not created: {}", e);
                false
            }
        }
    }

    fn render(&self, cx: &mut Context<'_>) {
        let Some(session) = &self.session else {
            return;
        };
        let grid = render_month(session.visible, &session.selection, self.today());

        if let Some(title) = cx.doc.get_mut(&self.ids.title) {
            render::apply_title(title, grid.month);
        }
        if let Err(e) = cx
            .doc
            .replace_children(&self.ids.days, render::day_cells(&grid))
        {
            log::debug!("[datepicker] day grid not rendered: {}", e);
        }
    }

    fn handle_click(&mut self, cx: &mut Context<'_>, target: &str) -> EventResult {
        if cx.doc.contains(&self.ids.popup, target) {
            return match classify_click(&*cx.doc, &self.ids.popup, target) {
                Some(interaction) => {
                    self.interact(cx, interaction);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            };
        }

        let trigger = Selector::Any(vec![
            Selector::class(self.config.trigger_class.as_str()),
            Selector::input("text"),
        ]);
        let Some(trigger_el) = cx.doc.closest(target, &trigger) else {
            return EventResult::Ignored;
        };
        let Some(input) = cx
            .doc
            .closest(&trigger_el.id, &Selector::class(self.config.wrapper_class.as_str()))
            .and_then(|wrapper| cx.doc.query_within(&wrapper.id, &Selector::input("text")))
            .map(|input| input.id.clone())
        else {
            log::trace!("[datepicker] trigger {} has no field input", target);
            return EventResult::Ignored;
        };

        let is_current = self
            .session
            .as_ref()
            .map(|s| s.input == input)
            .unwrap_or(false);
        if is_current {
            self.close(cx);
        } else {
            self.open(cx, &input);
        }
        EventResult::Consumed
    }

    fn handle_pointer_down(&mut self, cx: &mut Context<'_>, target: Option<&str>) -> EventResult {
        if self.session.is_none() {
            return EventResult::Ignored;
        }
        if let Some(target) = target {
            let in_popup = cx.doc.contains(&self.ids.popup, target);
            let in_field = cx
                .doc
                .closest(target, &Selector::class(self.config.wrapper_class.as_str()))
                .is_some();
            if in_popup || in_field {
                return EventResult::Ignored;
            }
        }
        self.close(cx);
        EventResult::Consumed
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(DatePickerConfig::default())
    }
}

impl Widget for DatePicker {
    fn name(&self) -> &'static str {
        "datepicker"
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, event: &Event) -> EventResult {
        match event {
            Event::Click {
                target: Some(target),
            } => self.handle_click(cx, target),
            Event::PointerDown { target } => self.handle_pointer_down(cx, target.as_deref()),
            Event::Key {
                key: Key::Escape, ..
            } => {
                let Some(input) = self.session.as_ref().map(|s| s.input.clone()) else {
                    return EventResult::Ignored;
                };
                self.close(cx);
                cx.doc.focus(&input);
                EventResult::Consumed
            }
            Event::Scroll { .. } => {
                if self.close(cx) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::Resize { .. } if self.session.is_some() => {
                self.reposition(cx);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_frame(&mut self, cx: &mut Context<'_>, token: u64) {
        let current = self.session.as_ref().map(|s| s.id.0);
        if current != Some(token) {
            log::trace!("[datepicker] stale measurement for session {} dropped", token);
            return;
        }
        self.reposition(cx);
    }
}
