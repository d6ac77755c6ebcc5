//! WASM bindings for timetable-engine.
//!
//! Exposes assignment validation, course date-range checking, and free-slot
//! queries to JavaScript via `wasm-bindgen`. All complex types are passed as
//! JSON strings: the dataset is the serde form of
//! [`timetable_engine::ScheduleData`], requests are the serde forms of the
//! engine's request types.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timetable-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/timetable-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/timetable_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use timetable_engine::availability::{free_slots_for_room, free_slots_for_teacher, FreeSlot};
use timetable_engine::{
    check_course, plan_assignment, AssignmentRequest, Course, ScheduleData, ScheduleError,
    TimeOfDay,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Validation verdict returned to JavaScript.
///
/// A hard conflict is part of the verdict (the UI renders it inline), while
/// malformed input surfaces as a rejected promise via `JsValue`.
#[derive(Serialize)]
struct VerdictDto {
    ok: bool,
    /// Soft overload notice, when the verdict is `ok`.
    warning: Option<String>,
    /// Hard conflict message, when the verdict is not `ok`.
    conflict: Option<String>,
}

#[derive(Serialize)]
struct FreeSlotDto {
    start: String,
    end: String,
    duration_minutes: u32,
}

impl From<&FreeSlot> for FreeSlotDto {
    fn from(s: &FreeSlot) -> Self {
        Self {
            start: s.start.to_string(),
            end: s.end.to_string(),
            duration_minutes: s.duration_minutes,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_dataset(json: &str) -> Result<ScheduleData, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid dataset JSON: {e}")))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Fold an engine result into a verdict, letting non-conflict errors
/// propagate as JS exceptions.
fn verdict<T>(
    result: Result<T, ScheduleError>,
    warning_of: impl FnOnce(&T) -> Option<String>,
) -> Result<String, JsValue> {
    match result {
        Ok(value) => to_json(&VerdictDto {
            ok: true,
            warning: warning_of(&value),
            conflict: None,
        }),
        Err(ScheduleError::Conflict(conflict)) => to_json(&VerdictDto {
            ok: false,
            warning: None,
            conflict: Some(conflict.to_string()),
        }),
        Err(other) => Err(JsValue::from_str(&other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Validate one assignment submission against a dataset.
///
/// `dataset_json` is the full collection snapshot; `request_json` is an
/// assignment request (course, teacher, room, weekday list, times, relative
/// weeks, and the row ids being replaced on edit).
///
/// Returns a JSON verdict `{ok, warning, conflict}`. Malformed input throws.
#[wasm_bindgen(js_name = "checkAssignment")]
pub fn check_assignment(dataset_json: &str, request_json: &str) -> Result<String, JsValue> {
    let dataset = parse_dataset(dataset_json)?;
    let request: AssignmentRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {e}")))?;

    verdict(plan_assignment(&dataset, &request), |(_, warning)| {
        warning.as_ref().map(|w| w.to_string())
    })
}

/// Validate a proposed course's date range against its group's other
/// offerings. Returns the same verdict shape as [`check_assignment`].
#[wasm_bindgen(js_name = "checkCourse")]
pub fn check_course_dates(dataset_json: &str, course_json: &str) -> Result<String, JsValue> {
    let dataset = parse_dataset(dataset_json)?;
    let course: Course = serde_json::from_str(course_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid course JSON: {e}")))?;

    verdict(check_course(&dataset, &course), |_| None)
}

/// Free slots for a teacher or a room on one weekday.
///
/// `resource` selects the lookup: `"teacher"` or `"room"`. `date` is the
/// concrete `YYYY-MM-DD` day used to resolve week windows; `from`/`to` bound
/// the search window as `HH:MM`. Returns a JSON array of
/// `{start, end, duration_minutes}`.
#[wasm_bindgen(js_name = "freeSlots")]
pub fn free_slots(
    dataset_json: &str,
    resource: &str,
    id: &str,
    day: &str,
    date: &str,
    from: &str,
    to: &str,
) -> Result<String, JsValue> {
    let dataset = parse_dataset(dataset_json)?;
    let day = serde_json::from_value(serde_json::Value::String(day.to_lowercase()))
        .map_err(|_| JsValue::from_str(&format!("Invalid weekday: '{day}'")))?;
    let date: NaiveDate = date
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid date '{date}': expected YYYY-MM-DD")))?;
    let from = TimeOfDay::parse(from).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let to = TimeOfDay::parse(to).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let slots = match resource {
        "teacher" => free_slots_for_teacher(&dataset, id, day, date, from, to),
        "room" => free_slots_for_room(&dataset, id, day, date, from, to),
        other => {
            return Err(JsValue::from_str(&format!(
                "Unknown resource kind: '{other}' (expected \"teacher\" or \"room\")"
            )))
        }
    };

    let dtos: Vec<FreeSlotDto> = slots.iter().map(FreeSlotDto::from).collect();
    to_json(&dtos)
}
