//! The page a set of widgets is attached to.
//!
//! A [`Document`] owns the element tree plus everything the host measures
//! or tracks alongside it: element geometry, the viewport, keyboard focus,
//! and the outbox of events raised by widgets (for example the `change`
//! notification after a value is committed).

use crate::element::{self, Content, Element, Selector};
use crate::error::DomError;
use crate::event::Event;
use crate::focus::{collect_focusable, FocusState};
use crate::hit::hit_test_any;
use crate::layout::{LayoutResult, Rect, Viewport};

#[derive(Debug)]
pub struct Document {
    root: Element,
    pub layout: LayoutResult,
    pub viewport: Viewport,
    pub focus: FocusState,
    outbox: Vec<Event>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            layout: LayoutResult::new(),
            viewport: Viewport::default(),
            focus: FocusState::new(),
            outbox: Vec::new(),
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_id(&self) -> &str {
        &self.root.id
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    pub fn get(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// `id` itself or its nearest ancestor matching `selector`.
    pub fn closest(&self, id: &str, selector: &Selector) -> Option<&Element> {
        element::closest(&self.root, id, selector)
    }

    /// Whether `id` is `ancestor` or lies inside it.
    pub fn contains(&self, ancestor: &str, id: &str) -> bool {
        element::contains(&self.root, ancestor, id)
    }

    /// First element in the whole document matching `selector`.
    pub fn query(&self, selector: &Selector) -> Option<&Element> {
        if self.root.matches(selector) {
            return Some(&self.root);
        }
        element::query(&self.root, selector)
    }

    /// All elements in the document matching `selector`.
    pub fn query_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut result = Vec::new();
        if self.root.matches(selector) {
            result.push(&self.root);
        }
        result.extend(element::query_all(&self.root, selector));
        result
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query_within(&self, scope: &str, selector: &Selector) -> Option<&Element> {
        self.get(scope).and_then(|el| element::query(el, selector))
    }

    /// All descendants of `scope` matching `selector`.
    pub fn query_all_within(&self, scope: &str, selector: &Selector) -> Vec<&Element> {
        self.get(scope)
            .map(|el| element::query_all(el, selector))
            .unwrap_or_default()
    }

    /// The bubbling path of an event aimed at `id`: the target first,
    /// then each ancestor up to the root.
    pub fn bubble_path(&self, id: &str) -> Vec<String> {
        let mut path = element::path_to(&self.root, id).unwrap_or_default();
        path.reverse();
        path
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Append `child` (and its subtree) under `parent`.
    pub fn append_child(&mut self, parent: &str, child: Element) -> Result<(), DomError> {
        self.ensure_unique(&child, None)?;
        let parent_el = self
            .get_mut(parent)
            .ok_or_else(|| DomError::ElementNotFound(parent.to_string()))?;
        match &mut parent_el.content {
            Content::Children(children) => children.push(child),
            content => *content = Content::Children(vec![child]),
        }
        Ok(())
    }

    /// Replace every child of `parent` with `children`.
    pub fn replace_children(
        &mut self,
        parent: &str,
        children: Vec<Element>,
    ) -> Result<(), DomError> {
        for child in &children {
            self.ensure_unique(child, Some(parent))?;
        }
        let parent_el = self
            .get_mut(parent)
            .ok_or_else(|| DomError::ElementNotFound(parent.to_string()))?;
        let old = std::mem::replace(&mut parent_el.content, Content::Children(children));
        if let Content::Children(old) = old {
            for removed in &old {
                self.forget_subtree(removed);
            }
        }
        Ok(())
    }

    /// Detach the element with `id` and return it.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let removed = remove_recursive(&mut self.root, id)?;
        self.forget_subtree(&removed);
        Some(removed)
    }

    /// Set a form control's value. Returns false if the element is missing.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Focus `id` if it is a visible, enabled, focusable element.
    pub fn focus(&mut self, id: &str) -> bool {
        if !collect_focusable(&self.root).iter().any(|f| f == id) {
            return false;
        }
        self.focus.focus(id)
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Record the client rect the host measured for `id`.
    pub fn set_rect(&mut self, id: impl Into<String>, rect: Rect) {
        self.layout.insert(id.into(), rect);
    }

    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.layout.get(id).copied()
    }

    /// Deepest visible element under client point `(x, y)`.
    pub fn element_at(&self, x: i32, y: i32) -> Option<String> {
        hit_test_any(&self.layout, &self.root, x, y)
    }

    // ------------------------------------------------------------------
    // Outbox
    // ------------------------------------------------------------------

    /// Queue an event raised by a widget for delivery after the current one.
    pub fn emit(&mut self, event: Event) {
        log::trace!("[document] emit {:?}", event);
        self.outbox.push(event);
    }

    pub fn take_emitted(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.outbox)
    }

    fn ensure_unique(&self, subtree: &Element, replacing: Option<&str>) -> Result<(), DomError> {
        let mut ids = Vec::new();
        collect_ids(subtree, &mut ids);
        for id in ids {
            let Some(existing) = self.path(&id) else {
                continue;
            };
            // Descendants of the parent being emptied may be reused.
            let inside_replaced = replacing
                .map(|parent| {
                    existing.iter().any(|a| a == parent)
                        && existing.last().map(String::as_str) != Some(parent)
                })
                .unwrap_or(false);
            if !inside_replaced {
                return Err(DomError::DuplicateId(id));
            }
        }
        Ok(())
    }

    fn path(&self, id: &str) -> Option<Vec<String>> {
        element::path_to(&self.root, id)
    }

    fn forget_subtree(&mut self, subtree: &Element) {
        let mut ids = Vec::new();
        collect_ids(subtree, &mut ids);
        for id in &ids {
            self.layout.remove(id);
            if self.focus.focused() == Some(id.as_str()) {
                self.focus.blur();
            }
        }
    }
}

fn remove_recursive(element: &mut Element, id: &str) -> Option<Element> {
    let Content::Children(children) = &mut element.content else {
        return None;
    };
    if let Some(pos) = children.iter().position(|c| c.id == id) {
        return Some(children.remove(pos));
    }
    children.iter_mut().find_map(|c| remove_recursive(c, id))
}

fn collect_ids(element: &Element, out: &mut Vec<String>) {
    out.push(element.id.clone());
    for child in element.child_elements() {
        collect_ids(child, out);
    }
}
