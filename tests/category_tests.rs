use rtimesheets::models::ExceptionCategory::{self, *};

#[test]
fn test_parse_single_phrase_with_space() {
    assert_eq!(ExceptionCategory::parse_requested("missed punch"), vec![MissedPunch]);
}

#[test]
fn test_parse_empty_defaults_to_missed_punch() {
    assert_eq!(ExceptionCategory::parse_requested(""), vec![MissedPunch]);
    assert_eq!(ExceptionCategory::parse_requested("   "), vec![MissedPunch]);
    assert_eq!(ExceptionCategory::parse_requested(",,"), vec![MissedPunch]);
}

#[test]
fn test_parse_compact_list_keeps_request_order() {
    assert_eq!(
        ExceptionCategory::parse_requested("longinterval,shortlunch"),
        vec![LongInterval, ShortLunch]
    );
    assert_eq!(
        ExceptionCategory::parse_requested("Short Lunch, Long Interval"),
        vec![ShortLunch, LongInterval]
    );
}

#[test]
fn test_parse_unknown_tokens_fall_back() {
    assert_eq!(ExceptionCategory::parse_requested("foo,bar"), vec![MissedPunch]);
}

#[test]
fn test_parse_drops_unknown_but_keeps_known() {
    assert_eq!(
        ExceptionCategory::parse_requested("foo, overtime hours, bar"),
        vec![OvertimeHours]
    );
}

#[test]
fn test_parse_removes_inner_whitespace_and_ignores_case() {
    assert_eq!(
        ExceptionCategory::parse_requested("  MiSsEd\tLu nch "),
        vec![MissedLunch]
    );
}

#[test]
fn test_parse_keeps_duplicates() {
    assert_eq!(
        ExceptionCategory::parse_requested("short shift, shortshift,SHORT SHIFT"),
        vec![ShortShift, ShortShift, ShortShift]
    );
}

#[test]
fn test_underscored_names_do_not_match() {
    // tokens are compared against names without underscores
    assert_eq!(
        ExceptionCategory::parse_requested("overtime_hours"),
        vec![MissedPunch]
    );
}

#[test]
fn test_full_set_in_declaration_order() {
    assert_eq!(
        ExceptionCategory::ALL,
        [MissedPunch, OvertimeHours, LongInterval, ShortShift, ShortLunch, MissedLunch]
    );
}

#[test]
fn test_labels_and_columns() {
    let labels: Vec<&str> = ExceptionCategory::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Missed Punch",
            "Overtime Hours",
            "Long Interval",
            "Short Shift",
            "Short Lunch",
            "Missed Lunch"
        ]
    );
    assert_eq!(MissedLunch.column(), "MissedLunch");
    assert_eq!(OvertimeHours.name(), "OVERTIME_HOURS");
    assert_eq!(OvertimeHours.token(), "overtimehours");
}
