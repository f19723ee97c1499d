mod common;
use common::row;
use rtimesheets::core::{DepartmentAggregate, ExceptionBook};
use rtimesheets::models::ExceptionCategory::{self, *};
use rtimesheets::models::RowRecord;

fn assert_invariants(aggregate: &DepartmentAggregate) {
    let occurrences: usize = ExceptionCategory::ALL
        .iter()
        .map(|c| aggregate.occurrence_count(*c))
        .sum();
    assert_eq!(aggregate.total(), occurrences);

    for (row, total) in aggregate.row_totals() {
        let per_category: usize = ExceptionCategory::ALL
            .iter()
            .map(|c| aggregate.row_category_count(*c, *row).unwrap_or(0))
            .sum();
        assert_eq!(*total, per_category);
        assert!(*total > 0);
        assert!(aggregate.problem_rows().contains(row));
    }

    assert_eq!(aggregate.problem_rows().len(), aggregate.row_totals().len());
}

#[test]
fn test_record_occurrence_updates_every_view() {
    let mut book = ExceptionBook::new();
    let id = book.add_row(RowRecord::new("016", "Smith John", "1001"));

    book.record_occurrence(id, MissedPunch);
    book.record_occurrence(id, MissedPunch);
    book.record_occurrence(id, ShortShift);

    let dept = book.department("016").expect("department created lazily");
    assert_eq!(dept.total(), 3);
    assert_eq!(dept.occurrences(MissedPunch), &[id, id]);
    assert_eq!(dept.occurrence_count(ShortShift), 1);
    assert_eq!(dept.occurrence_count(LongInterval), 0);
    assert_eq!(dept.row_category_count(MissedPunch, id), Some(2));
    assert_eq!(dept.row_category_count(LongInterval, id), None);
    assert_eq!(dept.row_total(id), 3);
    assert!(dept.problem_rows().contains(&id));
    assert_invariants(dept);
}

#[test]
fn test_department_only_exists_after_first_occurrence() {
    let mut book = ExceptionBook::new();
    let id = book.add_row(RowRecord::new("030", "Brown Bob", "1003"));
    assert!(book.department("030").is_none());
    assert!(book.is_empty());

    book.record_occurrence(id, OvertimeHours);
    assert!(book.department("030").is_some());
}

#[test]
fn test_rows_without_flags_leave_no_trace() {
    let book = ExceptionBook::from_rows(vec![
        row("016", "Smith John", &[]),
        row("030", "Brown Bob", &[MissedPunch]),
    ]);

    assert_eq!(book.rows().len(), 2);
    assert!(book.department("016").is_none());
    assert_eq!(book.departments().len(), 1);
}

#[test]
fn test_identical_rows_stay_distinct() {
    let twin = row("016", "Smith John", &[MissedPunch, ShortLunch]);
    let mut book = ExceptionBook::new();
    let first = book.ingest(twin.clone());
    let second = book.ingest(twin);

    assert_ne!(first, second);

    let dept = book.department("016").expect("department");
    assert_eq!(dept.problem_rows().len(), 2);
    assert_eq!(dept.row_totals().len(), 2);
    assert_eq!(dept.row_total(first), 2);
    assert_eq!(dept.row_total(second), 2);
    assert_eq!(dept.occurrences(MissedPunch), &[first, second]);
    assert_invariants(dept);
}

#[test]
fn test_ingest_records_each_category_once() {
    let mut book = ExceptionBook::new();
    let id = book.ingest(row("060", "Lee Ann", &[MissedLunch, MissedPunch]));

    let dept = book.department("060").expect("department");
    assert_eq!(dept.row_category_count(MissedLunch, id), Some(1));
    assert_eq!(dept.row_category_count(MissedPunch, id), Some(1));
    assert_eq!(dept.total(), 2);
}

#[test]
fn test_invariants_over_mixed_book() {
    let book = ExceptionBook::from_rows(vec![
        row("016", "A", &[MissedPunch, OvertimeHours, LongInterval]),
        row("016", "B", &[ShortShift]),
        row("030", "C", &[ShortLunch, MissedLunch]),
        row("030", "C", &[ShortLunch]),
        row("999", "D", &ExceptionCategory::ALL),
    ]);

    for aggregate in book.departments().values() {
        assert_invariants(aggregate);
    }
    assert_eq!(book.department("999").map(|d| d.total()), Some(6));
}

#[test]
fn test_displayed_problem_and_filtered_rows() {
    let book = ExceptionBook::from_rows(vec![
        row("016", "A", &[MissedPunch]),
        row("016", "B", &[OvertimeHours]),
        row("016", "C", &[MissedPunch, OvertimeHours]),
    ]);
    let dept = book.department("016").expect("department");

    assert!(dept.has_displayed_problem(&[MissedPunch]));
    assert!(!dept.has_displayed_problem(&[ShortShift, LongInterval]));
    assert!(!dept.has_displayed_problem(&[]));

    let names: Vec<&str> = dept
        .rows_with_any(&[OvertimeHours])
        .into_iter()
        .filter_map(|id| book.row(id))
        .map(|row| row.associate_name.as_str())
        .collect();
    assert_eq!(names, vec!["B", "C"]);
}

#[test]
fn test_foreign_row_handles_are_rejected() {
    let mut other = ExceptionBook::new();
    other.add_row(RowRecord::new("016", "A", "1"));
    let foreign = other.add_row(RowRecord::new("016", "B", "2"));

    let mut book = ExceptionBook::new();
    book.add_row(RowRecord::new("030", "C", "3"));

    assert!(book.row(foreign).is_none());
    assert!(!book.record_occurrence(foreign, MissedPunch));
    assert!(book.is_empty());

    assert_eq!(other.row(foreign).map(|r| r.associate_name.as_str()), Some("B"));
}
