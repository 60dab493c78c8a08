//! Popup markup.

use formdom::{Content, Element};

use super::calendar::{DayCell, MonthGrid, VisibleMonth, WEEKDAY_LABELS};

pub(super) const NAV_BUTTON: &str = "cal-nav-btn";
pub(super) const PREV_YEAR: &str = "btn-cal-prev-year";
pub(super) const PREV_MONTH: &str = "btn-cal-prev";
pub(super) const NEXT_MONTH: &str = "btn-cal-next";
pub(super) const NEXT_YEAR: &str = "btn-cal-next-year";
pub(super) const DAY: &str = "day";

/// Ids of the popup's fixed parts, derived from the popup id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PopupIds {
    pub popup: String,
    pub title: String,
    pub days: String,
}

impl PopupIds {
    pub fn new(popup: &str) -> Self {
        Self {
            popup: popup.to_string(),
            title: format!("{popup}-title"),
            days: format!("{popup}-days"),
        }
    }
}

/// The hidden popup shell: header with navigation, weekday row, empty day grid.
pub(super) fn popup_shell(ids: &PopupIds) -> Element {
    Element::div()
        .id(ids.popup.as_str())
        .class("calendar-popup")
        .attr("role", "dialog")
        .attr("aria-modal", "false")
        .attr("aria-labelledby", ids.title.as_str())
        .hidden(true)
        .child(
            Element::div()
                .class("calendar-header")
                .child(
                    Element::div()
                        .class("cal-nav-group")
                        .child(nav_button(PREV_YEAR, "Previous year", "icon--double-arrow-left"))
                        .child(nav_button(PREV_MONTH, "Previous month", "icon--arrow-left")),
                )
                .child(
                    Element::strong()
                        .id(ids.title.as_str())
                        .class("current-ym")
                        .attr("aria-live", "polite"),
                )
                .child(
                    Element::div()
                        .class("cal-nav-group")
                        .child(nav_button(NEXT_MONTH, "Next month", "icon--arrow-right"))
                        .child(nav_button(NEXT_YEAR, "Next year", "icon--double-arrow-right")),
                ),
        )
        .child(
            Element::div()
                .class("calendar-body")
                .child(
                    Element::div()
                        .class("weekdays")
                        .attr("aria-hidden", "true")
                        .children(WEEKDAY_LABELS.iter().map(|label| Element::span().text(*label))),
                )
                .child(Element::div().id(ids.days.as_str()).class("days")),
        )
}

fn nav_button(class: &str, label: &str, icon: &str) -> Element {
    Element::button()
        .classes([NAV_BUTTON, class])
        .attr("aria-label", label)
        .child(Element::span().classes(["icon24", icon, "icon--basic"]))
}

/// Update the header title for `month`, keeping year/month as data.
pub(super) fn apply_title(title: &mut Element, month: VisibleMonth) {
    title.content = Content::Text(month.title());
    title.data.insert("year".to_string(), month.year().to_string());
    title.data.insert("month".to_string(), month.month().to_string());
}

/// Day grid children: padding spans, then one button per day.
pub(super) fn day_cells(grid: &MonthGrid) -> Vec<Element> {
    grid.cells
        .iter()
        .map(|cell| match cell {
            DayCell::Padding => Element::span()
                .classes([DAY, "empty"])
                .attr("aria-hidden", "true"),
            DayCell::Day(day) => Element::button()
                .classes(day.classes())
                .data("date", day.date.to_string())
                .attr("aria-label", day.date.long_label())
                .text(day.date.day().to_string()),
        })
        .collect()
}
