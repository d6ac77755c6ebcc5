//! Tests for free-slot computation.

use chrono::NaiveDate;
use timetable_engine::availability::{
    first_fitting, free_slots_for_room, free_slots_for_teacher,
};
use timetable_engine::{
    ClassDay, Classroom, Course, Group, ScheduleData, ScheduleEvent, Subject, Teacher, TimeOfDay,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u8, m: u8) -> TimeOfDay {
    TimeOfDay::new(h, m).unwrap()
}

fn event(
    id: &str,
    teacher_id: &str,
    classroom_id: &str,
    day: ClassDay,
    start: TimeOfDay,
    end: TimeOfDay,
    start_week: u32,
    end_week: u32,
) -> ScheduleEvent {
    ScheduleEvent {
        id: id.to_string(),
        assignment_id: format!("a-{id}"),
        course_id: "c1".to_string(),
        teacher_id: teacher_id.to_string(),
        classroom_id: classroom_id.to_string(),
        day,
        start_time: start,
        end_time: end,
        start_week,
        end_week,
    }
}

/// Course c1 runs weeks 1-16 from Monday 2024-01-08.
fn dataset(events: Vec<ScheduleEvent>) -> ScheduleData {
    ScheduleData {
        teachers: vec![Teacher::new("t1", "Nadia Rahal", 20)],
        classrooms: vec![Classroom::new("r1", "Room 101", 40)],
        subjects: vec![Subject::new("s1", "Algorithms", 64)],
        groups: vec![Group::new("g1", "ISC-3A", 35)],
        courses: vec![Course::new(
            "c1",
            "s1",
            "g1",
            date(2024, 1, 8),
            date(2024, 4, 26),
        )],
        events,
    }
}

#[test]
fn one_class_splits_the_window_in_two() {
    let data = dataset(vec![event(
        "e1",
        "t1",
        "r1",
        ClassDay::Monday,
        time(10, 0),
        time(11, 0),
        1,
        16,
    )]);

    let slots = free_slots_for_teacher(
        &data,
        "t1",
        ClassDay::Monday,
        date(2024, 1, 15),
        time(8, 0),
        time(17, 0),
    );

    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].start, slots[0].end), (time(8, 0), time(10, 0)));
    assert_eq!(slots[0].duration_minutes, 120);
    assert_eq!((slots[1].start, slots[1].end), (time(11, 0), time(17, 0)));
    assert_eq!(slots[1].duration_minutes, 360);
}

#[test]
fn overlapping_classes_merge_before_gap_computation() {
    let data = dataset(vec![
        event(
            "e1",
            "t1",
            "r1",
            ClassDay::Monday,
            time(10, 0),
            time(11, 30),
            1,
            16,
        ),
        event(
            "e2",
            "t1",
            "r1",
            ClassDay::Monday,
            time(11, 0),
            time(12, 0),
            1,
            16,
        ),
    ]);

    let slots = free_slots_for_teacher(
        &data,
        "t1",
        ClassDay::Monday,
        date(2024, 1, 15),
        time(8, 0),
        time(17, 0),
    );

    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].start, slots[0].end), (time(8, 0), time(10, 0)));
    assert_eq!((slots[1].start, slots[1].end), (time(12, 0), time(17, 0)));
}

#[test]
fn classes_outside_their_week_window_do_not_block() {
    // The class only runs weeks 1-4; querying a week-10 date finds the whole
    // window free.
    let data = dataset(vec![event(
        "e1",
        "t1",
        "r1",
        ClassDay::Monday,
        time(10, 0),
        time(11, 0),
        1,
        4,
    )]);

    let slots = free_slots_for_teacher(
        &data,
        "t1",
        ClassDay::Monday,
        date(2024, 3, 11),
        time(8, 0),
        time(17, 0),
    );

    assert_eq!(slots.len(), 1);
    assert_eq!((slots[0].start, slots[0].end), (time(8, 0), time(17, 0)));
}

#[test]
fn room_slots_ignore_other_rooms() {
    let data = dataset(vec![event(
        "e1",
        "t1",
        "r1",
        ClassDay::Tuesday,
        time(8, 0),
        time(12, 0),
        1,
        16,
    )]);

    let slots = free_slots_for_room(
        &data,
        "r9",
        ClassDay::Tuesday,
        date(2024, 1, 16),
        time(8, 0),
        time(14, 0),
    );

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].duration_minutes, 360);
}

#[test]
fn first_fitting_respects_minimum_duration() {
    let data = dataset(vec![event(
        "e1",
        "t1",
        "r1",
        ClassDay::Monday,
        time(10, 0),
        time(11, 0),
        1,
        16,
    )]);

    let slots = free_slots_for_teacher(
        &data,
        "t1",
        ClassDay::Monday,
        date(2024, 1, 15),
        time(8, 0),
        time(17, 0),
    );

    // The 08:00-10:00 gap is too short for a 3h class; 11:00-17:00 fits.
    let slot = first_fitting(&slots, 180).expect("a 3h slot exists");
    assert_eq!(slot.start, time(11, 0));

    assert!(first_fitting(&slots, 600).is_none());
}

#[test]
fn empty_window_yields_no_slots() {
    let data = dataset(Vec::new());
    let slots = free_slots_for_teacher(
        &data,
        "t1",
        ClassDay::Monday,
        date(2024, 1, 15),
        time(12, 0),
        time(12, 0),
    );
    assert!(slots.is_empty());
}
