//! Classification of clicks inside the popup.

use formdom::{Document, Selector};

use super::calendar::Navigation;
use super::date::{self, CalendarDate};
use super::render::{DAY, NEXT_MONTH, NEXT_YEAR, PREV_MONTH, PREV_YEAR};

/// A click inside the popup, stripped of its markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    DayCell(CalendarDate),
    NavPrev,
    NavNext,
    NavPrevYear,
    NavNextYear,
}

impl Interaction {
    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            Self::DayCell(_) => None,
            Self::NavPrev => Some(Navigation::PrevMonth),
            Self::NavNext => Some(Navigation::NextMonth),
            Self::NavPrevYear => Some(Navigation::PrevYear),
            Self::NavNextYear => Some(Navigation::NextYear),
        }
    }
}

/// Resolve a click on `target` within the popup `popup` to an interaction.
///
/// The nearest enclosing button decides; a click on padding, the title or
/// anything that is not a known button yields `None`. A day button whose
/// date does not parse is ignored.
pub fn classify_click(doc: &Document, popup: &str, target: &str) -> Option<Interaction> {
    if !doc.contains(popup, target) {
        return None;
    }
    let button = doc.closest(target, &Selector::tag("button"))?;
    if !doc.contains(popup, &button.id) {
        return None;
    }

    if button.has_class(DAY) {
        let selected = button.get_data("date").and_then(|d| date::parse(d))?;
        return Some(Interaction::DayCell(selected));
    }

    [
        (PREV_MONTH, Interaction::NavPrev),
        (NEXT_MONTH, Interaction::NavNext),
        (PREV_YEAR, Interaction::NavPrevYear),
        (NEXT_YEAR, Interaction::NavNextYear),
    ]
    .into_iter()
    .find(|(class, _)| button.has_class(class))
    .map(|(_, interaction)| interaction)
}
