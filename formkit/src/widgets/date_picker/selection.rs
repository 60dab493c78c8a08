//! Selection mode and the anchor state machine.

use super::date::{self, CalendarDate};

/// Whether the picker yields one date or an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Range,
}

/// How a field's mode is decided when its popup opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeConfig {
    /// The field forces a mode.
    Explicit(Mode),
    /// Range if the field's text contains the range separator.
    Inferred,
}

impl ModeConfig {
    /// Read the field's mode attribute. Anything but `single`/`range` infers.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("single") => Self::Explicit(Mode::Single),
            Some("range") => Self::Explicit(Mode::Range),
            _ => Self::Inferred,
        }
    }

    pub fn resolve(self, text: &str, separator: char) -> Mode {
        match self {
            Self::Explicit(mode) => mode,
            Self::Inferred if text.contains(separator) => Mode::Range,
            Self::Inferred => Mode::Single,
        }
    }
}

/// Anchors chosen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    /// The single-mode choice, or a range start still waiting for its end.
    Single(CalendarDate),
    /// Both anchors; `start <= end` always holds.
    Range {
        start: CalendarDate,
        end: CalendarDate,
    },
}

impl SelectionState {
    /// Build a complete range, swapping inverted anchors.
    pub fn range(a: CalendarDate, b: CalendarDate) -> Self {
        if a <= b {
            Self::Range { start: a, end: b }
        } else {
            Self::Range { start: b, end: a }
        }
    }

    /// Seed from a field's current text.
    ///
    /// Unparseable text (or an unparseable range side) counts as "nothing
    /// chosen". A lone surviving range side becomes the start anchor.
    pub fn seed(mode: Mode, text: &str, separator: char) -> Self {
        let text = text.trim();
        match mode {
            Mode::Single => date::parse(text).map_or(Self::Empty, Self::Single),
            Mode::Range => match date::split_range(text, separator) {
                (Some(start), Some(end)) => Self::range(start, end),
                (Some(start), None) => Self::Single(start),
                // An end without a start leaves nothing to anchor on.
                (None, _) => Self::Empty,
            },
        }
    }

    pub fn start(&self) -> Option<CalendarDate> {
        match *self {
            Self::Empty => None,
            Self::Single(date) => Some(date),
            Self::Range { start, .. } => Some(start),
        }
    }

    pub fn end(&self) -> Option<CalendarDate> {
        match *self {
            Self::Range { end, .. } => Some(end),
            _ => None,
        }
    }
}

/// What the controller must do after a day click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// State changed; redraw and keep the popup open.
    Rerender,
    /// Selection is final; write this text to the field and close.
    Commit(String),
}

/// Mode plus anchors for one popup session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    mode: Mode,
    state: SelectionState,
    separator: char,
}

impl Selection {
    pub fn new(mode: Mode, state: SelectionState, separator: char) -> Self {
        Self {
            mode,
            state,
            separator,
        }
    }

    pub fn seed(mode: Mode, text: &str, separator: char) -> Self {
        Self::new(mode, SelectionState::seed(mode, text, separator), separator)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Advance the state machine with a clicked day.
    ///
    /// Single mode commits at once. Range mode restarts on the first click
    /// or after a complete range, moves the start back when the click lies
    /// before it, and otherwise commits `start ~ end`. Clicking the start
    /// day again commits a same-day range.
    pub fn on_day_clicked(&mut self, selected: CalendarDate) -> ClickOutcome {
        match self.mode {
            Mode::Single => {
                self.state = SelectionState::Single(selected);
                ClickOutcome::Commit(selected.to_string())
            }
            Mode::Range => match self.state {
                SelectionState::Empty | SelectionState::Range { .. } => {
                    self.state = SelectionState::Single(selected);
                    ClickOutcome::Rerender
                }
                SelectionState::Single(start) if selected < start => {
                    self.state = SelectionState::Single(selected);
                    ClickOutcome::Rerender
                }
                SelectionState::Single(start) => {
                    self.state = SelectionState::Range {
                        start,
                        end: selected,
                    };
                    ClickOutcome::Commit(date::format_range(start, selected, self.separator))
                }
            },
        }
    }
}
