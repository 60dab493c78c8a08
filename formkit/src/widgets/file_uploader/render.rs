//! Row markup for the staging list.

use formdom::{Element, FileRef};

use super::state::size_label;

pub(super) const INPUT: &str = "form-file-input";
pub(super) const LIST: &str = "form-file-list";
pub(super) const DROP: &str = "form-file-drop";
pub(super) const LIST_DROP: &str = "form-file-list-drop";
pub(super) const BROWSE: &str = "form-file-browse";
pub(super) const REMOVE_SELECTED: &str = "form-file-remove-selected";
pub(super) const SUBMIT: &str = "form-file-submit";
pub(super) const ROW: &str = "form-file-row";
pub(super) const CHECK: &str = "form-file-check";
pub(super) const REMOVE: &str = "form-file-remove";

/// One list row; the checkbox starts checked.
pub(super) fn file_row(key: &str, file: &FileRef) -> Element {
    Element::li()
        .class(ROW)
        .data(ROW, "")
        .data("key", key)
        .child(
            Element::label()
                .classes(["form-checkbox-label", CHECK])
                .child(
                    Element::input("checkbox")
                        .class("form-checkbox")
                        .data(CHECK, "")
                        .checked(true),
                )
                .child(
                    Element::span()
                        .classes(["form-check-label", "visually-hidden"])
                        .text("Select document"),
                ),
        )
        .child(
            Element::span()
                .class("form-file-icon")
                .attr("aria-hidden", "true")
                .child(Element::span().classes(["icon24", "icon--docs", "icon--basic"])),
        )
        .child(
            Element::p()
                .class("form-file-name")
                .attr("title", file.name.as_str())
                .text(file.name.as_str()),
        )
        .child(
            Element::span()
                .class("form-file-size")
                .text(size_label(file.size)),
        )
        .child(
            Element::button()
                .class(REMOVE)
                .data(REMOVE, "")
                .attr("aria-label", "Remove attached document")
                .child(Element::span().classes(["icon20", "icon--close", "icon--basic"])),
        )
}
