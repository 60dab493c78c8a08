//! Month grid construction and day classification.

use chrono::{Datelike, Month, NaiveDate, Weekday};

use super::date::CalendarDate;
use super::selection::{Mode, Selection, SelectionState};

/// Sunday-first weekday header labels.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month shown in the popup. `month` is zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleMonth {
    year: i32,
    month: u32,
}

/// Header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    PrevMonth,
    NextMonth,
    PrevYear,
    NextYear,
}

impl VisibleMonth {
    /// Months outside 0..=11 carry into the year. A carried year outside
    /// the representable range saturates to its first or last month.
    pub fn new(year: i32, month: i32) -> Self {
        let year = year.saturating_add(month.div_euclid(12));
        let month = month.rem_euclid(12) as u32;
        if year > CalendarDate::MAX_YEAR {
            Self {
                year: CalendarDate::MAX_YEAR,
                month: 11,
            }
        } else if year < CalendarDate::MIN_YEAR {
            Self {
                year: CalendarDate::MIN_YEAR,
                month: 0,
            }
        } else {
            Self { year, month }
        }
    }

    pub fn of(date: CalendarDate) -> Self {
        Self::new(date.year(), date.month() as i32 - 1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn navigate(self, nav: Navigation) -> Self {
        let (year, month) = (self.year, self.month as i32);
        match nav {
            Navigation::PrevMonth => Self::new(year, month - 1),
            Navigation::NextMonth => Self::new(year, month + 1),
            Navigation::PrevYear => Self::new(year - 1, month),
            Navigation::NextYear => Self::new(year + 1, month),
        }
    }

    pub fn prev_month(self) -> Self {
        self.navigate(Navigation::PrevMonth)
    }

    pub fn next_month(self) -> Self {
        self.navigate(Navigation::NextMonth)
    }

    pub fn prev_year(self) -> Self {
        self.navigate(Navigation::PrevYear)
    }

    pub fn next_year(self) -> Self {
        self.navigate(Navigation::NextYear)
    }

    pub fn first_day(&self) -> Option<CalendarDate> {
        CalendarDate::from_ymd(self.year, self.month + 1, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month == 11 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 2)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(0)
    }

    /// Header title, e.g. `June 2024`.
    pub fn title(&self) -> String {
        let name = u8::try_from(self.month + 1)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or_default();
        format!("{} {}", name, self.year)
    }
}

/// A cell's relation to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMark {
    /// The single choice, or a same-day range.
    Selected,
    RangeStart,
    RangeEnd,
    InRange,
}

impl SelectionMark {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Selected => "is-selected",
            Self::RangeStart => "is-range-start",
            Self::RangeEnd => "is-range-end",
            Self::InRange => "is-in-range",
        }
    }
}

/// Classify `date` against `state`.
///
/// In range mode the checks run in order: both anchors, start only, end
/// only, strictly between. A same-day range therefore draws one
/// `Selected` marker rather than a start and an end.
pub fn classify(date: CalendarDate, mode: Mode, state: SelectionState) -> Option<SelectionMark> {
    match mode {
        Mode::Single => (state.start() == Some(date)).then_some(SelectionMark::Selected),
        Mode::Range => {
            let is_start = state.start() == Some(date);
            let is_end = state.end() == Some(date);
            match (is_start, is_end) {
                (true, true) => Some(SelectionMark::Selected),
                (true, false) => Some(SelectionMark::RangeStart),
                (false, true) => Some(SelectionMark::RangeEnd),
                (false, false) => match state {
                    SelectionState::Range { start, end } if start < date && date < end => {
                        Some(SelectionMark::InRange)
                    }
                    _ => None,
                },
            }
        }
    }
}

/// One day of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub date: CalendarDate,
    pub mark: Option<SelectionMark>,
    pub today: bool,
}

impl Day {
    pub fn is_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }

    pub fn is_saturday(&self) -> bool {
        self.date.weekday() == Weekday::Sat
    }

    /// CSS classes in the order the stylesheet expects them.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["day"];
        if let Some(mark) = self.mark {
            classes.push(mark.class());
        }
        if self.today {
            classes.push("is-today");
        }
        if self.is_sunday() {
            classes.push("is-sunday");
        }
        if self.is_saturday() {
            classes.push("is-saturday");
        }
        classes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Blank cell before day 1 keeping weekday columns aligned.
    Padding,
    Day(Day),
}

impl DayCell {
    pub fn day(&self) -> Option<&Day> {
        match self {
            Self::Padding => None,
            Self::Day(day) => Some(day),
        }
    }
}

/// A rendered month: leading padding then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: VisibleMonth,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn padding(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, DayCell::Padding))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.cells.iter().filter_map(DayCell::day)
    }

    /// The cell for day-of-month `day` (1-based).
    pub fn day(&self, day: u32) -> Option<&Day> {
        self.days().find(|d| d.date.day() == day)
    }
}

/// Build the grid for `month` under `selection`.
pub fn render_month(
    month: VisibleMonth,
    selection: &Selection,
    today: Option<CalendarDate>,
) -> MonthGrid {
    let Some(first) = month.first_day() else {
        return MonthGrid {
            month,
            cells: Vec::new(),
        };
    };

    let padding = first.weekday().num_days_from_sunday() as usize;
    let mut cells = vec![DayCell::Padding; padding];

    let state = selection.state();
    for day in 1..=month.days_in_month() {
        let Some(date) = CalendarDate::from_ymd(month.year(), month.month() + 1, day) else {
            continue;
        };
        cells.push(DayCell::Day(Day {
            date,
            mark: classify(date, selection.mode(), state),
            today: today == Some(date),
        }));
    }

    MonthGrid { month, cells }
}
