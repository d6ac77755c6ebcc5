//! Tests for the course-level date-range overlap guard.

use chrono::NaiveDate;
use timetable_engine::course::check_course;
use timetable_engine::{
    Conflict, Course, Group, ScheduleData, ScheduleError, Subject,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Group g1 already takes Algorithms from 2024-01-01 to 2024-03-01.
fn dataset() -> ScheduleData {
    ScheduleData {
        subjects: vec![
            Subject::new("s1", "Algorithms", 64),
            Subject::new("s2", "Databases", 48),
        ],
        groups: vec![
            Group::new("g1", "ISC-3A", 35),
            Group::new("g2", "ISC-1B", 25),
        ],
        courses: vec![Course::new(
            "c1",
            "s1",
            "g1",
            date(2024, 1, 1),
            date(2024, 3, 1),
        )],
        ..ScheduleData::default()
    }
}

#[test]
fn overlapping_offering_for_the_same_group_is_rejected() {
    let data = dataset();
    let candidate = Course::new("c2", "s2", "g1", date(2024, 2, 1), date(2024, 4, 1));

    let err = check_course(&data, &candidate).unwrap_err();
    match err {
        ScheduleError::Conflict(Conflict::CourseOverlap {
            group,
            subject,
            start,
            end,
        }) => {
            assert_eq!(group, "ISC-3A");
            assert_eq!(subject, "Algorithms", "must name the colliding subject");
            assert_eq!(start, date(2024, 1, 1));
            assert_eq!(end, date(2024, 3, 1));
        }
        other => panic!("expected course overlap, got {other:?}"),
    }
}

#[test]
fn shared_boundary_date_still_overlaps() {
    // Unlike the half-open time check, course ranges are inclusive: starting
    // the day the other ends is a collision.
    let data = dataset();
    let candidate = Course::new("c2", "s2", "g1", date(2024, 3, 1), date(2024, 5, 1));

    let err = check_course(&data, &candidate).unwrap_err();
    assert!(matches!(
        err,
        ScheduleError::Conflict(Conflict::CourseOverlap { .. })
    ));
}

#[test]
fn disjoint_ranges_pass() {
    let data = dataset();
    let candidate = Course::new("c2", "s2", "g1", date(2024, 3, 2), date(2024, 5, 1));
    assert!(check_course(&data, &candidate).is_ok());
}

#[test]
fn other_groups_are_unaffected() {
    let data = dataset();
    let candidate = Course::new("c2", "s2", "g2", date(2024, 2, 1), date(2024, 4, 1));
    assert!(check_course(&data, &candidate).is_ok());
}

#[test]
fn editing_a_course_in_place_does_not_collide_with_itself() {
    let data = dataset();
    let candidate = Course::new("c1", "s1", "g1", date(2024, 1, 1), date(2024, 3, 15));
    assert!(check_course(&data, &candidate).is_ok());
}

#[test]
fn malformed_date_range_is_rejected_before_scanning() {
    let data = dataset();
    let backwards = Course::new("c2", "s2", "g2", date(2024, 4, 1), date(2024, 2, 1));
    assert!(matches!(
        check_course(&data, &backwards).unwrap_err(),
        ScheduleError::InvalidDateRange { .. }
    ));

    // Zero-length offerings are illegal too: the end must be strictly later.
    let zero = Course::new("c2", "s2", "g2", date(2024, 4, 1), date(2024, 4, 1));
    assert!(matches!(
        check_course(&data, &zero).unwrap_err(),
        ScheduleError::InvalidDateRange { .. }
    ));
}

#[test]
fn dangling_subject_reference_falls_back_to_the_id() {
    let mut data = dataset();
    data.subjects.clear();
    let candidate = Course::new("c2", "s2", "g1", date(2024, 2, 1), date(2024, 4, 1));

    let err = check_course(&data, &candidate).unwrap_err();
    match err {
        ScheduleError::Conflict(Conflict::CourseOverlap { subject, .. }) => {
            assert_eq!(subject, "s1");
        }
        other => panic!("expected course overlap, got {other:?}"),
    }
}
