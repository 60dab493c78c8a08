use chrono::{NaiveDate, TimeZone, Utc};
use formdom::{Rect, Viewport};
use formkit::widgets::date_picker::{
    classify, format, format_range, normalize, normalize_zoned, parse, place, render_month,
    split_range, CalendarDate, ClickOutcome, DayCell, Mode, ModeConfig, Navigation, Selection,
    SelectionMark, SelectionState, VisibleMonth,
};

fn d(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

// ============================================================================
// Date text
// ============================================================================

#[test]
fn test_format_pads_fields() {
    assert_eq!(format(Some(d(2024, 6, 5))), "2024.06.05");
    assert_eq!(format(Some(d(33, 1, 1))), "0033.01.01");
    assert_eq!(format(None), "");
}

#[test]
fn test_parse_accepts_one_or_two_digit_parts() {
    assert_eq!(parse("2024.06.05"), Some(d(2024, 6, 5)));
    assert_eq!(parse("2024.6.5"), Some(d(2024, 6, 5)));
    assert_eq!(parse("  2024.12.31 "), Some(d(2024, 12, 31)));
}

#[test]
fn test_parse_rejects_malformed() {
    for text in [
        "",
        "2024",
        "2024.06",
        "24.06.05",
        "2024.06.05.01",
        "2024-06-05",
        "2024.006.05",
        "2024.0a.05",
        "+024.06.05",
        "2024.06.",
    ] {
        assert_eq!(parse(text), None, "{text:?} should not parse");
    }
}

#[test]
fn test_parse_rejects_rollover_days() {
    assert_eq!(parse("2024.02.30"), None);
    assert_eq!(parse("2023.02.29"), None);
    assert_eq!(parse("2024.13.01"), None);
    assert_eq!(parse("2024.00.10"), None);
    assert_eq!(parse("2024.02.29"), Some(d(2024, 2, 29)));
}

#[test]
fn test_format_parse_roundtrip_across_years() {
    for date in [d(0, 1, 1), d(1999, 12, 31), d(2024, 2, 29), d(9999, 12, 31)] {
        assert_eq!(parse(&format(Some(date))), Some(date));
    }
}

#[test]
fn test_year_range_is_bounded() {
    assert!(CalendarDate::from_ymd(10000, 1, 1).is_none());
    assert!(CalendarDate::from_ymd(-1, 1, 1).is_none());
}

#[test]
fn test_normalize_drops_time_of_day() {
    let dt = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    assert_eq!(normalize(dt), Some(d(2024, 6, 15)));

    let zoned = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(normalize_zoned(&zoned), Some(d(2024, 1, 2)));
}

#[test]
fn test_range_text() {
    assert_eq!(
        format_range(d(2024, 6, 5), d(2024, 6, 20), '~'),
        "2024.06.05 ~ 2024.06.20"
    );
    assert_eq!(
        split_range("2024.06.05 ~ 2024.06.20", '~'),
        (Some(d(2024, 6, 5)), Some(d(2024, 6, 20)))
    );
    assert_eq!(split_range("garbage ~ 2024.06.20", '~'), (None, Some(d(2024, 6, 20))));
    assert_eq!(split_range("2024.06.05", '~'), (Some(d(2024, 6, 5)), None));
}

#[test]
fn test_long_label() {
    assert_eq!(d(2024, 6, 5).long_label(), "June 5, 2024");
}

// ============================================================================
// Mode and seeding
// ============================================================================

#[test]
fn test_mode_from_attr_and_inference() {
    assert_eq!(ModeConfig::from_attr(Some("range")), ModeConfig::Explicit(Mode::Range));
    assert_eq!(ModeConfig::from_attr(Some("single")), ModeConfig::Explicit(Mode::Single));
    assert_eq!(ModeConfig::from_attr(Some("other")), ModeConfig::Inferred);
    assert_eq!(ModeConfig::from_attr(None), ModeConfig::Inferred);

    assert_eq!(ModeConfig::Inferred.resolve("2024.06.05 ~ 2024.06.20", '~'), Mode::Range);
    assert_eq!(ModeConfig::Inferred.resolve("2024.06.05", '~'), Mode::Single);
    assert_eq!(
        ModeConfig::Explicit(Mode::Single).resolve("a ~ b", '~'),
        Mode::Single
    );
}

#[test]
fn test_seed_single() {
    assert_eq!(
        SelectionState::seed(Mode::Single, "2024.06.15", '~'),
        SelectionState::Single(d(2024, 6, 15))
    );
    assert_eq!(SelectionState::seed(Mode::Single, "nope", '~'), SelectionState::Empty);
}

#[test]
fn test_seed_range_swaps_inverted_pair() {
    assert_eq!(
        SelectionState::seed(Mode::Range, "2024.06.20 ~ 2024.06.05", '~'),
        SelectionState::Range {
            start: d(2024, 6, 5),
            end: d(2024, 6, 20)
        }
    );
}

#[test]
fn test_seed_range_with_one_side() {
    assert_eq!(
        SelectionState::seed(Mode::Range, "2024.06.05 ~", '~'),
        SelectionState::Single(d(2024, 6, 5))
    );
    assert_eq!(
        SelectionState::seed(Mode::Range, "~ 2024.06.20", '~'),
        SelectionState::Empty
    );
    assert_eq!(
        SelectionState::seed(Mode::Range, "nope ~ 2024.06.20", '~'),
        SelectionState::Empty
    );
    assert_eq!(SelectionState::seed(Mode::Range, "", '~'), SelectionState::Empty);
}

// ============================================================================
// Selection state machine
// ============================================================================

#[test]
fn test_single_mode_commits_immediately() {
    let mut selection = Selection::seed(Mode::Single, "", '~');

    assert_eq!(
        selection.on_day_clicked(d(2024, 6, 15)),
        ClickOutcome::Commit("2024.06.15".to_string())
    );
    assert_eq!(selection.state(), SelectionState::Single(d(2024, 6, 15)));
}

#[test]
fn test_range_start_moves_back_then_commits() {
    let mut selection = Selection::seed(Mode::Range, "", '~');

    assert_eq!(selection.on_day_clicked(d(2024, 6, 10)), ClickOutcome::Rerender);
    assert_eq!(selection.on_day_clicked(d(2024, 6, 5)), ClickOutcome::Rerender);
    assert_eq!(selection.state(), SelectionState::Single(d(2024, 6, 5)));
    assert_eq!(
        selection.on_day_clicked(d(2024, 6, 20)),
        ClickOutcome::Commit("2024.06.05 ~ 2024.06.20".to_string())
    );
}

#[test]
fn test_range_restarts_after_complete_range() {
    let mut selection = Selection::seed(Mode::Range, "2024.06.05 ~ 2024.06.20", '~');

    assert_eq!(selection.on_day_clicked(d(2024, 7, 1)), ClickOutcome::Rerender);
    assert_eq!(selection.state(), SelectionState::Single(d(2024, 7, 1)));
}

#[test]
fn test_same_day_range_commits() {
    let mut selection = Selection::seed(Mode::Range, "", '~');

    selection.on_day_clicked(d(2024, 6, 10));
    assert_eq!(
        selection.on_day_clicked(d(2024, 6, 10)),
        ClickOutcome::Commit("2024.06.10 ~ 2024.06.10".to_string())
    );
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classify_range() {
    let state = SelectionState::range(d(2024, 6, 5), d(2024, 6, 20));

    assert_eq!(classify(d(2024, 6, 5), Mode::Range, state), Some(SelectionMark::RangeStart));
    assert_eq!(classify(d(2024, 6, 20), Mode::Range, state), Some(SelectionMark::RangeEnd));
    assert_eq!(classify(d(2024, 6, 12), Mode::Range, state), Some(SelectionMark::InRange));
    assert_eq!(classify(d(2024, 6, 4), Mode::Range, state), None);
    assert_eq!(classify(d(2024, 6, 21), Mode::Range, state), None);
}

#[test]
fn test_classify_same_day_range_is_single_marker() {
    let state = SelectionState::range(d(2024, 6, 10), d(2024, 6, 10));

    assert_eq!(classify(d(2024, 6, 10), Mode::Range, state), Some(SelectionMark::Selected));
}

#[test]
fn test_classify_pending_range_start() {
    let state = SelectionState::Single(d(2024, 6, 10));

    assert_eq!(classify(d(2024, 6, 10), Mode::Range, state), Some(SelectionMark::RangeStart));
    assert_eq!(classify(d(2024, 6, 11), Mode::Range, state), None);
    assert_eq!(classify(d(2024, 6, 10), Mode::Single, state), Some(SelectionMark::Selected));
}

// ============================================================================
// Month grid
// ============================================================================

#[test]
fn test_month_grid_padding_and_length() {
    let selection = Selection::seed(Mode::Single, "", '~');
    // June 1, 2024 is a Saturday.
    let grid = render_month(VisibleMonth::new(2024, 5), &selection, None);

    assert_eq!(grid.padding(), 6);
    assert_eq!(grid.days().count(), 30);
    assert_eq!(grid.cells.len(), 36);
    assert!(matches!(grid.cells[0], DayCell::Padding));
}

#[test]
fn test_month_grid_leap_february() {
    let selection = Selection::seed(Mode::Single, "", '~');

    assert_eq!(render_month(VisibleMonth::new(2024, 1), &selection, None).days().count(), 29);
    assert_eq!(render_month(VisibleMonth::new(2023, 1), &selection, None).days().count(), 28);
}

#[test]
fn test_month_grid_marks_and_classes() {
    let selection = Selection::seed(Mode::Range, "2024.06.05 ~ 2024.06.20", '~');
    let grid = render_month(VisibleMonth::new(2024, 5), &selection, Some(d(2024, 6, 12)));

    let today = grid.day(12).unwrap();
    assert!(today.today);
    assert_eq!(today.classes(), vec!["day", "is-in-range", "is-today"]);

    let start = grid.day(5).unwrap();
    assert_eq!(start.mark, Some(SelectionMark::RangeStart));

    let sunday = grid.day(2).unwrap();
    assert!(sunday.is_sunday());
    assert_eq!(sunday.classes(), vec!["day", "is-sunday"]);

    let saturday = grid.day(1).unwrap();
    assert_eq!(saturday.classes(), vec!["day", "is-saturday"]);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_navigation_wraps_months() {
    let dec = VisibleMonth::new(2024, 11);

    assert_eq!(dec.next_month(), VisibleMonth::new(2025, 0));
    assert_eq!(VisibleMonth::new(2025, 0).prev_month(), dec);
    assert_eq!(dec.navigate(Navigation::NextYear), VisibleMonth::new(2025, 11));
    assert_eq!(dec.prev_year().year(), 2023);
    assert_eq!(dec.prev_year().month(), 11);
}

#[test]
fn test_visible_month_carries_and_clamps() {
    assert_eq!(VisibleMonth::new(2024, 12), VisibleMonth::new(2025, 0));
    assert_eq!(VisibleMonth::new(2024, -1), VisibleMonth::new(2023, 11));
    assert_eq!(VisibleMonth::new(9999, 11).next_year().year(), 9999);
    assert_eq!(VisibleMonth::new(0, 0).prev_month().year(), 0);
}

#[test]
fn test_visible_month_saturates_at_year_limits() {
    assert_eq!(VisibleMonth::new(9999, 11).next_month(), VisibleMonth::new(9999, 11));
    assert_eq!(VisibleMonth::new(9999, 5).next_month().month(), 6);
    assert_eq!(VisibleMonth::new(9999, 5).next_year(), VisibleMonth::new(9999, 11));
    assert_eq!(VisibleMonth::new(0, 0).prev_month(), VisibleMonth::new(0, 0));
    assert_eq!(VisibleMonth::new(0, 6).prev_year(), VisibleMonth::new(0, 0));
    assert_eq!(VisibleMonth::new(10_000, 3), VisibleMonth::new(9999, 11));
}

#[test]
fn test_title() {
    assert_eq!(VisibleMonth::new(2024, 5).title(), "June 2024");
    assert_eq!(VisibleMonth::of(d(2025, 1, 31)).title(), "January 2025");
}

// ============================================================================
// Positioning
// ============================================================================

#[test]
fn test_place_below_by_default() {
    let anchor = Rect::new(100, 100, 200, 30);
    let placement = place(anchor, (280, 300), Viewport::new(1024, 768), 4);

    assert!(!placement.above);
    assert_eq!(placement.top, 134);
    assert_eq!(placement.left, 100);
}

#[test]
fn test_place_above_when_below_is_short() {
    let anchor = Rect::new(100, 700, 200, 30);
    let placement = place(anchor, (280, 300), Viewport::new(1024, 768), 4);

    assert!(placement.above);
    assert_eq!(placement.top, 700 - 300 - 4);
}

#[test]
fn test_place_stays_below_when_above_also_short() {
    let anchor = Rect::new(100, 200, 200, 30);
    let placement = place(anchor, (280, 500), Viewport::new(1024, 600), 4);

    assert!(!placement.above);
    assert_eq!(placement.top, 234);
}

#[test]
fn test_place_adds_scroll_offset() {
    let anchor = Rect::new(100, 100, 200, 30);
    let placement = place(anchor, (280, 300), Viewport::new(1024, 768).scrolled(10, 500), 4);

    assert_eq!(placement.top, 634);
    assert_eq!(placement.left, 110);
}

#[test]
fn test_place_clamps_horizontally() {
    let viewport = Viewport::new(400, 768);

    let right = place(Rect::new(300, 100, 80, 30), (280, 300), viewport, 4);
    assert_eq!(right.left, 400 - 280 - 4);

    let left = place(Rect::new(-50, 100, 80, 30), (280, 300), viewport, 4);
    assert_eq!(left.left, 4);

    let too_wide = place(Rect::new(100, 100, 80, 30), (500, 300), viewport, 4);
    assert_eq!(too_wide.left, 4);
}
