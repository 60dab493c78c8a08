//! The sample form the demo drives.

use formdom::{Document, Element, Rect, Viewport};
use formkit::config::Config;

pub const BIRTH_INPUT: &str = "birth-date";
pub const PERIOD_INPUT: &str = "search-period";
pub const PASSWORD_TOGGLE: &str = "password-toggle";
pub const UPLOAD_ROOT: &str = "uploader";
pub const UPLOAD_DROP: &str = "uploader-drop";
pub const UPLOAD_SUBMIT: &str = "uploader-submit";

fn date_field(input: &str, value: &str, mode: Option<&str>) -> Element {
    let mut field = Element::text_input(value)
        .id(input)
        .attr("aria-haspopup", "dialog")
        .attr("aria-expanded", "false");
    if let Some(mode) = mode {
        field = field.data("mode", mode);
    }
    Element::div()
        .class("date-field")
        .child(field)
        .child(Element::span().class("date-field-icon").clickable(true))
}

fn password_field() -> Element {
    Element::div()
        .classes(["form-control", "form-password"])
        .child(
            Element::input("password")
                .id("password")
                .class("form-input")
                .value("hunter2"),
        )
        .child(
            Element::button()
                .id(PASSWORD_TOGGLE)
                .data("password-toggle", "")
                .attr("aria-pressed", "false")
                .attr("aria-label", "Show password")
                .child(Element::span().classes(["icon20", "icon--visibility"])),
        )
}

fn lookup(config: &Config) -> Element {
    let ids = &config.lookup;
    Element::div()
        .child(
            Element::div()
                .data(ids.combo_key.as_str(), "")
                .child(Element::text_input("").id(ids.input_id.as_str()))
                .child(Element::button().id(ids.button_id.as_str()).text("Lookup")),
        )
        .child(Element::ul().id(ids.list_id.as_str()).hidden(true))
        .child(Element::text_input("").id(ids.name_output_id.as_str()))
        .child(Element::text_input("").id(ids.org_output_id.as_str()))
        .child(Element::text_input("").id(ids.dept_output_id.as_str()))
}

fn chat(config: &Config) -> Element {
    Element::div().class(config.chat.container_class.as_str()).child(
        Element::textarea()
            .id(config.chat.textarea_id.as_str())
            .attr("style.max-height", "120px")
            .attr("style.line-height", "22px"),
    )
}

fn uploader(config: &Config) -> Element {
    Element::div()
        .id(UPLOAD_ROOT)
        .data(config.uploader.root_key.as_str(), "")
        .child(
            Element::select()
                .id(config.uploader.target_service_id.as_str())
                .value("archive"),
        )
        .child(
            Element::select()
                .id(config.uploader.doc_type_id.as_str())
                .value("report"),
        )
        .child(
            Element::input("file")
                .data("form-file-input", "")
                .attr("multiple", ""),
        )
        .child(Element::label().id(UPLOAD_DROP).data("form-file-drop", ""))
        .child(Element::ul().data("form-file-list", ""))
        .child(
            Element::button()
                .id(UPLOAD_SUBMIT)
                .data("form-file-submit", "")
                .text("Send"),
        )
}

/// A page carrying one of every widget, with client rects for the date
/// fields as a browser would have measured them.
pub fn build(config: &Config) -> Document {
    let root = Element::div()
        .id("page")
        .child(date_field(BIRTH_INPUT, "1990.07.23", None))
        .child(date_field(PERIOD_INPUT, "", Some("range")))
        .child(password_field())
        .child(lookup(config))
        .child(chat(config))
        .child(uploader(config));

    let mut doc = Document::new(root).with_viewport(Viewport::new(1280, 720));
    doc.set_rect(BIRTH_INPUT, Rect::new(40, 80, 240, 36));
    doc.set_rect(PERIOD_INPUT, Rect::new(40, 600, 320, 36));
    doc.set_rect(config.chat.textarea_id.as_str(), Rect::new(40, 660, 400, 22));
    doc
}
