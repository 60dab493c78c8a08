//! Multi-file upload staging list.
//!
//! Each `[data-file-uploader-multi]` root stages files picked through its
//! file input or dropped onto it, lists them with a checkbox and a remove
//! button, and on submit raises `fileuploader:submit` with the staged
//! files. Nothing is uploaded here.

mod render;
mod state;

pub use state::{file_key, size_label, StagedFiles};

use formdom::{Document, Event, FileRef, Selector};
use serde_json::json;

use crate::config::UploaderConfig;
use crate::context::Context;
use crate::widget::{EventResult, Widget};

/// One initialized uploader root.
#[derive(Debug, Clone)]
struct UploaderInstance {
    root: String,
    input: String,
    list: String,
    drop_zones: Vec<String>,
    browse: Option<String>,
    remove_selected: Option<String>,
    submit: Option<String>,
    staged: StagedFiles,
}

impl UploaderInstance {
    fn resolve(doc: &Document, root: &str) -> Option<Self> {
        let find = |key: &str| {
            doc.query_within(root, &Selector::data(key))
                .map(|el| el.id.clone())
        };
        let input = find(render::INPUT)?;
        let list = find(render::LIST)?;
        Some(Self {
            root: root.to_string(),
            input,
            list,
            drop_zones: [render::DROP, render::LIST_DROP]
                .into_iter()
                .filter_map(find)
                .collect(),
            browse: find(render::BROWSE),
            remove_selected: find(render::REMOVE_SELECTED),
            submit: find(render::SUBMIT),
            staged: StagedFiles::new(),
        })
    }

    fn is_drop_zone(&self, doc: &Document, target: &str) -> bool {
        self.drop_zones.iter().any(|zone| doc.contains(zone, target))
    }

    fn hits(&self, doc: &Document, part: &Option<String>, target: &str) -> bool {
        part.as_deref()
            .map(|id| doc.contains(id, target))
            .unwrap_or(false)
    }

    fn set_drag_over(&self, cx: &mut Context<'_>, over: bool) {
        if let Some(root) = cx.doc.get_mut(&self.root) {
            root.toggle_class("is-dragover", over);
        }
    }

    fn add(&mut self, cx: &mut Context<'_>, files: Vec<FileRef>) {
        if files.is_empty() {
            return;
        }
        let count = files.len();
        self.staged.add(files);
        log::debug!(
            "[uploader] {} added {} file(s), {} staged",
            self.root,
            count,
            self.staged.len()
        );
        self.render(cx);
    }

    fn render(&self, cx: &mut Context<'_>) {
        let rows = self
            .staged
            .iter()
            .map(|(key, file)| render::file_row(key, file))
            .collect();
        if let Err(e) = cx.doc.replace_children(&self.list, rows) {
            log::debug!("[uploader] list not rendered: {}", e);
        }
        if let Some(root) = cx.doc.get_mut(&self.root) {
            root.toggle_class("is-filled", !self.staged.is_empty());
        }
    }

    /// Keys of the rows whose checkbox is checked.
    fn checked_keys(&self, doc: &Document) -> Vec<String> {
        doc.query_all_within(&self.list, &Selector::data(render::ROW))
            .into_iter()
            .filter(|row| {
                doc.query_within(&row.id, &Selector::data(render::CHECK))
                    .map(|check| check.checked)
                    .unwrap_or(false)
            })
            .filter_map(|row| row.get_data("key").cloned())
            .collect()
    }

    fn remove_checked(&mut self, cx: &mut Context<'_>) {
        let keys = self.checked_keys(cx.doc);
        let removed = self.staged.remove_all(keys.iter().map(String::as_str));
        log::debug!("[uploader] {} removed {} checked file(s)", self.root, removed);
        self.render(cx);
    }

    fn submit_event(&self, doc: &Document, config: &UploaderConfig) -> Event {
        let meta_value = |id: &str| {
            doc.query_within(&self.root, &Selector::id(id))
                .map(|el| el.value.clone())
                .unwrap_or_default()
        };
        Event::Custom {
            name: config.submit_event.clone(),
            target: self.root.clone(),
            detail: json!({
                "files": self.staged.files(),
                "meta": {
                    "targetService": meta_value(&config.target_service_id),
                    "docType": meta_value(&config.doc_type_id),
                },
            }),
            bubbles: true,
        }
    }

    fn handle_click(
        &mut self,
        cx: &mut Context<'_>,
        config: &UploaderConfig,
        target: &str,
    ) -> EventResult {
        if cx.doc.contains(&self.list, target) {
            let key = cx
                .doc
                .closest(target, &Selector::data(render::REMOVE))
                .and_then(|button| cx.doc.closest(&button.id, &Selector::data(render::ROW)))
                .and_then(|row| row.get_data("key").cloned());
            return match key {
                Some(key) => {
                    self.staged.remove(&key);
                    log::debug!("[uploader] {} removed {}", self.root, key);
                    self.render(cx);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            };
        }

        if self.hits(cx.doc, &self.browse, target) {
            cx.doc.emit(Event::click(self.input.clone()));
            return EventResult::Consumed;
        }
        if self.hits(cx.doc, &self.remove_selected, target) {
            self.remove_checked(cx);
            return EventResult::Consumed;
        }
        if self.hits(cx.doc, &self.submit, target) {
            log::debug!(
                "[uploader] {} submit with {} file(s)",
                self.root,
                self.staged.len()
            );
            let event = self.submit_event(cx.doc, config);
            cx.doc.emit(event);
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    fn handle_event(
        &mut self,
        cx: &mut Context<'_>,
        config: &UploaderConfig,
        event: &Event,
    ) -> EventResult {
        match event {
            Event::Change { target, .. } if *target == self.input => {
                let files = cx
                    .doc
                    .get_mut(&self.input)
                    .map(|input| {
                        input.value.clear();
                        std::mem::take(&mut input.files)
                    })
                    .unwrap_or_default();
                self.add(cx, files);
                EventResult::Consumed
            }
            Event::DragOver { target } if self.is_drop_zone(cx.doc, target) => {
                self.set_drag_over(cx, true);
                EventResult::Consumed
            }
            Event::DragLeave { target } if self.is_drop_zone(cx.doc, target) => {
                self.set_drag_over(cx, false);
                EventResult::Consumed
            }
            Event::Drop { target, files } if self.is_drop_zone(cx.doc, target) => {
                self.set_drag_over(cx, false);
                self.add(cx, files.clone());
                EventResult::Consumed
            }
            Event::Click {
                target: Some(target),
            } => self.handle_click(cx, config, target),
            _ => EventResult::Ignored,
        }
    }
}

pub struct FileUploader {
    config: UploaderConfig,
    instances: Vec<UploaderInstance>,
}

impl FileUploader {
    pub fn new(config: UploaderConfig) -> Self {
        Self {
            config,
            instances: Vec::new(),
        }
    }
}

impl Default for FileUploader {
    fn default() -> Self {
        Self::new(UploaderConfig::default())
    }
}

impl Widget for FileUploader {
    fn name(&self) -> &'static str {
        "file-uploader"
    }

    fn mount(&mut self, cx: &mut Context<'_>) {
        let roots: Vec<String> = cx
            .doc
            .query_all(&Selector::data(self.config.root_key.as_str()))
            .into_iter()
            .map(|root| root.id.clone())
            .collect();

        for root in roots {
            match UploaderInstance::resolve(cx.doc, &root) {
                Some(instance) => {
                    instance.render(cx);
                    self.instances.push(instance);
                }
                None => log::debug!("[uploader] {} lacks input or list, skipped", root),
            }
        }
    }

    fn handle_event(&mut self, cx: &mut Context<'_>, event: &Event) -> EventResult {
        let config = &self.config;
        self.instances
            .iter_mut()
            .fold(EventResult::Ignored, |result, instance| {
                result.or(instance.handle_event(cx, config, event))
            })
    }
}
