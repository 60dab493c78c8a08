//! User lookup combobox mockup.
//!
//! A lookup button toggles a list of hardcoded users under the key input.
//! Picking a user writes its id into the input and fills the name,
//! organization and department outputs that exist on the page.

use formdom::{Element, Event, Key, Selector};

use crate::config::{LookupConfig, LookupUser};
use crate::context::Context;
use crate::widget::{EventResult, Widget};

const ITEM_CLASS: &str = "suggestion-item";

/// Element ids resolved at mount.
#[derive(Debug, Clone)]
struct Parts {
    input: String,
    button: String,
    list: String,
    combo: String,
}

pub struct UserLookup {
    config: LookupConfig,
    parts: Option<Parts>,
}

impl UserLookup {
    pub fn new(config: LookupConfig) -> Self {
        Self {
            config,
            parts: None,
        }
    }

    /// Whether the suggestion list is showing.
    pub fn is_open(&self, cx: &Context<'_>) -> bool {
        self.parts
            .as_ref()
            .and_then(|p| cx.doc.get(&p.input))
            .and_then(|i| i.get_attr("aria-expanded"))
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    fn set_open(&self, cx: &mut Context<'_>, open: bool) {
        let Some(parts) = &self.parts else {
            return;
        };
        if let Some(el) = cx.doc.get_mut(&parts.input) {
            el.set_attr("aria-expanded", if open { "true" } else { "false" });
        }
        if let Some(el) = cx.doc.get_mut(&parts.list) {
            el.hidden = !open;
        }
        if let Some(el) = cx.doc.get_mut(&parts.combo) {
            el.toggle_class("is-open", open);
        }
    }

    fn option(user: &LookupUser) -> Element {
        Element::button()
            .class(ITEM_CLASS)
            .attr("role", "option")
            .data("user-id", user.user_id.as_str())
            .data("user-name", user.name.as_str())
            .data("user-org", user.org.as_str())
            .data("user-dept", user.dept.as_str())
            .text(format!("{} / {} / {}", user.birth, user.name, user.user_id))
    }

    fn apply_selection(&self, cx: &mut Context<'_>, item: &str) {
        let Some(parts) = &self.parts else {
            return;
        };
        let Some(item) = cx.doc.get(item) else {
            return;
        };
        let field = |key: &str| item.get_data(key).cloned().unwrap_or_default();
        let (user_id, name, org, dept) = (
            field("user-id"),
            field("user-name"),
            field("user-org"),
            field("user-dept"),
        );
        log::debug!("[lookup] selected user {}", user_id);

        cx.doc.set_value(&parts.input, user_id);
        cx.doc.set_value(&self.config.name_output_id, name);
        cx.doc.set_value(&self.config.org_output_id, org);
        cx.doc.set_value(&self.config.dept_output_id, dept);
        self.set_open(cx, false);
    }
}

impl Default for UserLookup {
    fn default() -> Self {
        Self::new(LookupConfig::default())
    }
}

impl Widget for UserLookup {
    fn name(&self) -> &'static str {
        "user-lookup"
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let combo = cx
            .doc
            .query(&Selector::data(self.config.combo_key.as_str()))
            .map(|c| c.id.clone());
        let ids = [
            &self.config.input_id,
            &self.config.button_id,
            &self.config.list_id,
        ];
        let Some(combo) = combo else {
            log::debug!("[lookup] no combo root, staying inert");
            return;
        };
        if let Some(missing) = ids.iter().find(|id| !cx.doc.exists(id)) {
            log::debug!("[lookup] element {} missing, staying inert", missing);
            return;
        }

        let items = self.config.users.iter().map(Self::option).collect();
        if let Err(e) = cx.doc.replace_children(&self.config.list_id, items) {
            log::debug!("[lookup] list not rendered: {}", e);
            return;
        }

        self.parts = Some(Parts {
            input: self.config.input_id.clone(),
            button: self.config.button_id.clone(),
            list: self.config.list_id.clone(),
            combo,
        });
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, event: &Event) -> EventResult {
        let Some(parts) = self.parts.clone() else {
            return EventResult::Ignored;
        };

        match event {
            Event::Click {
                target: Some(target),
            } => {
                if cx.doc.contains(&parts.button, target) {
                    let open = self.is_open(cx);
                    self.set_open(cx, !open);
                    return EventResult::Consumed;
                }
                if cx.doc.contains(&parts.list, target) {
                    let item = cx
                        .doc
                        .get(target)
                        .filter(|el| el.has_class(ITEM_CLASS))
                        .map(|el| el.id.clone());
                    if let Some(item) = item {
                        self.apply_selection(cx, &item);
                        return EventResult::Consumed;
                    }
                }
                EventResult::Ignored
            }
            Event::Key {
                target: Some(target),
                key: Key::Escape,
                ..
            } if *target == parts.input => {
                self.set_open(cx, false);
                EventResult::Consumed
            }
            Event::PointerDown { target } => {
                let inside = target
                    .as_deref()
                    .map(|t| cx.doc.contains(&parts.combo, t) || cx.doc.contains(&parts.list, t))
                    .unwrap_or(false);
                if inside || !self.is_open(cx) {
                    return EventResult::Ignored;
                }
                self.set_open(cx, false);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
