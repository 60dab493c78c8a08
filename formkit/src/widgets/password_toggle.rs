//! Show/hide toggle for password fields.
//!
//! Markup: a `.form-control.form-password` field holding an
//! `input.form-input` and a button carrying `data-password-toggle`, with an
//! optional `.icon20` icon inside the button.

use formdom::{Event, Selector};

use crate::context::Context;
use crate::widget::{EventResult, Widget};

const ICON_SHOW: &str = "icon--visibility";
const ICON_HIDE: &str = "icon--visibility-off";

#[derive(Debug, Default)]
pub struct PasswordToggle;

impl PasswordToggle {
    pub fn new() -> Self {
        Self
    }

    fn toggle(&self, cx: &mut Context<'_>, target: &str) -> EventResult {
        let Some(button) = cx
            .doc
            .closest(target, &Selector::data("password-toggle"))
            .map(|b| b.id.clone())
        else {
            return EventResult::Ignored;
        };
        let field = Selector::All(vec![
            Selector::class("form-control"),
            Selector::class("form-password"),
        ]);
        let Some(input) = cx
            .doc
            .closest(&button, &field)
            .and_then(|f| cx.doc.query_within(&f.id, &Selector::tag_class("input", "form-input")))
        else {
            return EventResult::Ignored;
        };
        if input.disabled || input.read_only {
            return EventResult::Ignored;
        }
        let input = input.id.clone();
        let icon = cx
            .doc
            .query_within(&button, &Selector::class("icon20"))
            .map(|i| i.id.clone());

        let hidden = cx
            .doc
            .get(&input)
            .and_then(|i| i.get_attr("type"))
            .map(|t| t == "password")
            .unwrap_or(false);
        log::debug!("[password] {} field {}", if hidden { "reveal" } else { "mask" }, input);

        if let Some(el) = cx.doc.get_mut(&input) {
            el.set_attr("type", if hidden { "text" } else { "password" });
        }
        if let Some(el) = cx.doc.get_mut(&button) {
            el.set_attr("aria-pressed", if hidden { "true" } else { "false" });
            el.set_attr(
                "aria-label",
                if hidden { "Hide password" } else { "Show password" },
            );
        }
        if let Some(el) = icon.as_deref().and_then(|icon| cx.doc.get_mut(icon)) {
            el.toggle_class(ICON_SHOW, !hidden);
            el.toggle_class(ICON_HIDE, hidden);
        }
        EventResult::Consumed
    }
}

impl Widget for PasswordToggle {
    fn name(&self) -> &'static str {
        "password-toggle"
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, event: &Event) -> EventResult {
        match event {
            Event::Click {
                target: Some(target),
            } => self.toggle(cx, target),
            _ => EventResult::Ignored,
        }
    }
}
